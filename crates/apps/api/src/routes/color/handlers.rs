use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use common_services::api::color::error::ColorApiError;
use common_services::api::color::interfaces::{
    ColorQueryParams, FileUriRequest, PredictionResponse, RegionColorRequest, RgbRequest,
};
use common_services::api::color::service::{
    predict_base64_image, predict_image, predict_rgb, read_file_uri, rgb_from_channels,
};
use tokio::task;
use tracing::{info, instrument};

/// Predict the color name of an RGB value given as query parameters.
///
/// `x`, `y` and `z` are the red, green and blue channels.
#[utoipa::path(
    get,
    path = "/color",
    tag = "Color",
    params(ColorQueryParams),
    responses(
        (status = 200, description = "Predicted color name.", body = PredictionResponse),
        (status = 400, description = "Missing or out of range channel values."),
    )
)]
#[instrument(skip_all, err(Debug))]
pub async fn get_color_handler(
    State(context): State<ApiContext>,
    params: Result<Query<ColorQueryParams>, QueryRejection>,
) -> Result<Json<PredictionResponse>, ColorApiError> {
    let Query(params) = params?;
    let rgb = rgb_from_channels(params.x, params.y, params.z)?;
    let result = predict_rgb(&context.classifier, rgb, params.language.as_deref());
    Ok(Json(result.into()))
}

/// Predict the color name of an RGB value given as JSON.
#[utoipa::path(
    post,
    path = "/color",
    tag = "Color",
    request_body = RgbRequest,
    responses(
        (status = 200, description = "Predicted color name.", body = PredictionResponse),
        (status = 400, description = "Malformed body or out of range channel values."),
    )
)]
#[instrument(skip_all, err(Debug))]
pub async fn post_color_handler(
    State(context): State<ApiContext>,
    payload: Result<Json<RgbRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ColorApiError> {
    let Json(request) = payload?;
    let rgb = rgb_from_channels(request.red, request.green, request.blue)?;
    let result = predict_rgb(&context.classifier, rgb, request.language.as_deref());
    Ok(Json(result.into()))
}

/// Detect the color inside a region of a base64 image.
///
/// Without a `bbox` the whole image is averaged.
#[utoipa::path(
    post,
    path = "/detect-color-in-box",
    tag = "Color",
    request_body = RegionColorRequest,
    responses(
        (status = 200, description = "Average color of the region and its predicted name.", body = PredictionResponse),
        (status = 400, description = "The image could not be decoded."),
        (status = 413, description = "The request body is too large."),
        (status = 422, description = "The bounding box contains no pixels."),
    )
)]
#[instrument(skip_all, err(Debug))]
pub async fn detect_color_in_box_handler(
    State(context): State<ApiContext>,
    payload: Result<Json<RegionColorRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ColorApiError> {
    let Json(request) = payload?;
    let request = request.normalize();
    let classifier = context.classifier.clone();

    let result = task::spawn_blocking(move || {
        predict_base64_image(
            &classifier,
            &request.image,
            request.bbox,
            request.language.as_deref(),
        )
    })
    .await??;

    info!("Detected {} at {}", result.prediction, result.rgb);
    Ok(Json(result.into()))
}

/// Detect the average color of an uploaded image.
///
/// `file_uri` is a path on the server (when enabled) or base64 image data.
#[utoipa::path(
    post,
    path = "/uploadfile",
    tag = "Color",
    request_body = FileUriRequest,
    responses(
        (status = 200, description = "Average color of the image and its predicted name.", body = PredictionResponse),
        (status = 400, description = "The image could not be decoded."),
        (status = 404, description = "File not found."),
        (status = 413, description = "The request body is too large."),
    )
)]
#[instrument(skip_all, err(Debug))]
pub async fn upload_file_handler(
    State(context): State<ApiContext>,
    payload: Result<Json<FileUriRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ColorApiError> {
    let Json(request) = payload?;
    let bytes = read_file_uri(&request.file_uri, context.settings.api.allow_local_files).await?;
    let classifier = context.classifier.clone();

    let result = task::spawn_blocking(move || {
        predict_image(&classifier, &bytes, None, request.language.as_deref())
    })
    .await??;

    info!("Detected {} at {}", result.prediction, result.rgb);
    Ok(Json(result.into()))
}

use crate::api::color::error::ColorApiError;
use color_analysis::{ColorClassifier, ColorError, RegionQuery, decode_base64, decode_image, translate_color_name};
use common_types::{BoundingBox, PredictionResult, RgbColor};
use std::path::Path;
use tracing::debug;

/// Validates raw channel values from a request.
///
/// # Errors
///
/// `InvalidInput` when any channel is outside `0..=255`.
pub fn rgb_from_channels(red: i64, green: i64, blue: i64) -> Result<RgbColor, ColorApiError> {
    let channel = |name: &str, value: i64| {
        u8::try_from(value).map_err(|_| {
            ColorApiError::InvalidInput(format!("{name} must be between 0 and 255, got {value}"))
        })
    };
    Ok(RgbColor::new(
        channel("red", red)?,
        channel("green", green)?,
        channel("blue", blue)?,
    ))
}

/// Classifies a color, adding the localized name when a language is given.
#[must_use]
pub fn predict_rgb(classifier: &ColorClassifier, rgb: RgbColor, language: Option<&str>) -> PredictionResult {
    let prediction = classifier.predict(rgb).to_owned();
    let localized = language.map(|language| translate_color_name(&prediction, language));
    PredictionResult {
        rgb,
        prediction,
        localized,
    }
}

/// Decodes an image, averages the (optionally cropped) region and classifies it.
///
/// This is CPU bound, run it on a blocking thread.
pub fn predict_image(
    classifier: &ColorClassifier,
    bytes: &[u8],
    bbox: Option<BoundingBox>,
    language: Option<&str>,
) -> Result<PredictionResult, ColorApiError> {
    let image = decode_image(bytes)?;
    let rgb = RegionQuery::new(&image).with_bbox(bbox).extract()?;
    debug!("Region of {}x{} image averages to {rgb}", image.width(), image.height());
    Ok(predict_rgb(classifier, rgb, language))
}

/// Same as [`predict_image`] for base64 image data.
pub fn predict_base64_image(
    classifier: &ColorClassifier,
    data: &str,
    bbox: Option<BoundingBox>,
    language: Option<&str>,
) -> Result<PredictionResult, ColorApiError> {
    let bytes = decode_base64(data)?;
    predict_image(classifier, &bytes, bbox, language)
}

/// Resolves the `file_uri` of an upload to image bytes.
///
/// With `allow_local_files` the value is first tried as a path on disk, then
/// as base64 data. Only a value shaped like a path maps to `FileNotFound`,
/// data URLs and bare base64 that fail to decode stay decode errors.
pub async fn read_file_uri(file_uri: &str, allow_local_files: bool) -> Result<Vec<u8>, ColorApiError> {
    if file_uri.trim().is_empty() {
        return Err(ColorApiError::InvalidInput("file_uri is empty".to_owned()));
    }

    if allow_local_files {
        let path = Path::new(file_uri);
        let is_file = tokio::fs::metadata(path)
            .await
            .is_ok_and(|metadata| metadata.is_file());
        if is_file {
            debug!("Reading upload from {}", path.display());
            return Ok(tokio::fs::read(path).await.map_err(ColorError::from)?);
        }
    }

    match decode_base64(file_uri) {
        Ok(bytes) => Ok(bytes),
        Err(_) if allow_local_files && !looks_like_base64(file_uri) => Err(ColorApiError::FileNotFound),
        Err(err) => Err(err.into()),
    }
}

/// Data URLs, or strings made only of base64 alphabet characters.
fn looks_like_base64(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("data:")
        || value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=' | '\n' | '\r'))
}

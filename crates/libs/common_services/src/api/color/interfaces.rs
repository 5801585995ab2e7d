use common_types::{BoundingBox, PredictionResult, RgbColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

pub const PREDICTION_MESSAGE: &str = "color predicted successfully";

/// Query for `GET /color`, where `x`, `y` and `z` are red, green and blue.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ColorQueryParams {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    /// Language tag for the localized name, e.g. `es-ES`.
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RgbRequest {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegionColorRequest {
    /// Base64 image, optionally with a `data:image/...;base64,` prefix.
    pub image: String,
    pub bbox: Option<BoundingBox>,
    pub language: Option<String>,
}

/// Older clients send `{"image": "<json>"}` where the json string holds the image and bbox.
#[derive(Debug, Deserialize)]
struct EmbeddedRegion {
    image: String,
    bbox: Option<BoundingBox>,
}

impl RegionColorRequest {
    /// Unpacks an image field that itself contains a JSON request.
    ///
    /// A top level `bbox` wins over an embedded one. Image strings that are
    /// not valid JSON are left alone and fail later as bad base64.
    #[must_use]
    pub fn normalize(self) -> Self {
        if !self.image.trim_start().starts_with('{') {
            return self;
        }
        match serde_json::from_str::<EmbeddedRegion>(&self.image) {
            Ok(embedded) => Self {
                image: embedded.image,
                bbox: self.bbox.or(embedded.bbox),
                language: self.language,
            },
            Err(_) => self,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FileUriRequest {
    /// A local file path, or base64 image data.
    pub file_uri: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    pub message: String,
    pub rgb: RgbColor,
    pub prediction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized: Option<String>,
}

impl From<PredictionResult> for PredictionResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            message: PREDICTION_MESSAGE.to_owned(),
            rgb: result.rgb,
            prediction: result.prediction,
            localized: result.localized,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub endpoints: BTreeMap<String, String>,
    /// Number of color names the classifier can predict.
    pub labels: usize,
    pub samples: usize,
}

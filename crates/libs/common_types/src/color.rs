use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in `[red, green, blue]` order.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A rectangle expressed as fractions (0 to 1) of the image width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoundingBox {
    /// Left edge, fraction of the image width.
    pub x: f64,
    /// Top edge, fraction of the image height.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The averaged color of a region together with its predicted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub rgb: RgbColor,
    pub prediction: String,
    /// The prediction translated to the requested language, if one was asked for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_serializes_with_short_channel_names() -> serde_json::Result<()> {
        let json = serde_json::to_value(RgbColor::new(200, 100, 50))?;
        assert_eq!(json, serde_json::json!({ "r": 200, "g": 100, "b": 50 }));
        Ok(())
    }

    #[test]
    fn prediction_omits_missing_localized_name() -> serde_json::Result<()> {
        let result = PredictionResult {
            rgb: RgbColor::from([1, 2, 3]),
            prediction: "Red".to_owned(),
            localized: None,
        };
        let json = serde_json::to_value(&result)?;
        assert!(json.get("localized").is_none());
        assert_eq!(json["prediction"], "Red");
        Ok(())
    }
}

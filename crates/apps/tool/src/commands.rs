use app_state::AppSettings;
use color_analysis::train_test_split;
use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use common_services::api::color::service::{predict_image, predict_rgb};
use common_services::classifier::{load_classifier, load_samples, train_classifier};
use common_types::{BoundingBox, PredictionResult, RgbColor};
use std::fs;
use std::path::Path;
use tracing::info;

/// Parses `x,y,width,height` fractions.
pub fn parse_bbox(value: &str) -> Result<BoundingBox, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bbox values must be numbers: {e}"))?;
    match parts.as_slice() {
        [x, y, width, height] => Ok(BoundingBox::new(*x, *y, *width, *height)),
        _ => Err(format!("expected 4 values x,y,width,height, got {}", parts.len())),
    }
}

pub fn predict(settings: &AppSettings, rgb: RgbColor, language: Option<&str>) -> Result<PredictionResult> {
    let (classifier, _) = load_classifier(&settings.classifier)?;
    Ok(predict_rgb(&classifier, rgb, language))
}

pub fn extract(
    settings: &AppSettings,
    image: &Path,
    bbox: Option<BoundingBox>,
    language: Option<&str>,
) -> Result<PredictionResult> {
    let bytes = fs::read(image).wrap_err_with(|| format!("Cannot read {}", image.display()))?;
    let (classifier, _) = load_classifier(&settings.classifier)?;
    predict_image(&classifier, &bytes, bbox, language)
        .map_err(|e| eyre!("Cannot detect color in {}: {e}", image.display()))
}

/// Held-out accuracy of a classifier trained on part of the configured samples.
#[derive(Debug)]
pub struct Evaluation {
    pub train_samples: usize,
    pub test_samples: usize,
    pub accuracy: f64,
}

pub fn evaluate(settings: &AppSettings, train_fraction: f64, seed: u64) -> Result<Evaluation> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(eyre!("--train-fraction must be between 0 and 1, got {train_fraction}"));
    }
    let store = load_samples(&settings.classifier)?;
    let (train, test) = train_test_split(store.samples(), train_fraction, seed);
    info!("Split {} samples into {} train and {} test", store.len(), train.len(), test.len());

    let classifier = train_classifier(&train, &settings.classifier.train_options())?;
    let accuracy = classifier
        .accuracy(&test)
        .ok_or_else(|| eyre!("No samples left for testing, lower --train-fraction"))?;

    Ok(Evaluation {
        train_samples: train.len(),
        test_samples: test.len(),
        accuracy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_bbox() {
        assert_eq!(
            parse_bbox("0.1, 0.2,0.3,0.4"),
            Ok(BoundingBox::new(0.1, 0.2, 0.3, 0.4))
        );
    }

    #[rstest]
    #[case("0.1,0.2,0.3")]
    #[case("0.1,0.2,0.3,0.4,0.5")]
    #[case("a,b,c,d")]
    #[case("")]
    fn rejects_malformed_bbox(#[case] value: &str) {
        assert!(parse_bbox(value).is_err());
    }
}

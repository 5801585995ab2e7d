use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use color_eyre::Result;
use common_services::api::color::interfaces::PredictionResponse;
use image::{ImageFormat, Rgb, RgbImage};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::io::Cursor;

pub fn png_bytes(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn uniform_png_base64(width: u32, height: u32, color: [u8; 3]) -> Result<String> {
    let image = RgbImage::from_pixel(width, height, Rgb(color));
    Ok(STANDARD.encode(png_bytes(&image)?))
}

/// Left half red, right half blue.
pub fn split_png_base64() -> Result<String> {
    let image = RgbImage::from_fn(20, 10, |x, _| {
        if x < 10 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    Ok(STANDARD.encode(png_bytes(&image)?))
}

pub async fn expect_prediction(response: Response) -> Result<PredictionResponse> {
    let status = response.status();
    let body = response.text().await?;
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {body}");
    let prediction: PredictionResponse = serde_json::from_str(&body)?;
    assert_eq!(prediction.message, "color predicted successfully");
    Ok(prediction)
}

/// Asserts the status and returns the `error` message of a failed request.
pub async fn expect_error(response: Response, expected: StatusCode) -> Result<String> {
    let status = response.status();
    let body: Value = response.json().await?;
    assert_eq!(status, expected, "unexpected status, body: {body}");
    let message = body["error"].as_str().unwrap_or_default().to_owned();
    assert!(!message.is_empty(), "error body without a message: {body}");
    Ok(message)
}

use crate::error::{ColorError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbImage;

/// Decodes an encoded image (JPEG, PNG, WebP, GIF or BMP) into 8-bit RGB pixels.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(ColorError::Decode("image data is empty".to_owned()));
    }
    let image = image::load_from_memory(bytes)?;
    Ok(image.to_rgb8())
}

/// Decodes base64 text, with or without a `data:image/...;base64,` prefix.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let payload = data.split_once(',').map_or(data, |(_, payload)| payload);
    Ok(STANDARD.decode(payload.trim())?)
}

pub fn decode_base64_image(data: &str) -> Result<RgbImage> {
    decode_image(&decode_base64(data)?)
}

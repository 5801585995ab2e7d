use crate::error::{ColorError, Result};
use common_types::{BoundingBox, RgbColor};
use image::RgbImage;

/// A request for the representative color of an image, or of a part of it.
#[derive(Debug, Clone, Copy)]
pub struct RegionQuery<'a> {
    pub image: &'a RgbImage,
    pub bbox: Option<BoundingBox>,
}

impl<'a> RegionQuery<'a> {
    #[must_use]
    pub const fn new(image: &'a RgbImage) -> Self {
        Self { image, bbox: None }
    }

    #[must_use]
    pub const fn with_bbox(mut self, bbox: Option<BoundingBox>) -> Self {
        self.bbox = bbox;
        self
    }

    pub fn extract(&self) -> Result<RgbColor> {
        extract_region_color(self.image, self.bbox.as_ref())
    }
}

/// Half-open pixel rectangle `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl PixelRect {
    const fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    fn from_bbox(bbox: &BoundingBox, width: u32, height: u32) -> Self {
        Self {
            left: to_pixel(bbox.x, width),
            top: to_pixel(bbox.y, height),
            right: to_pixel(bbox.x + bbox.width, width),
            bottom: to_pixel(bbox.y + bbox.height, height),
        }
    }

    const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    fn area(&self) -> u64 {
        u64::from(self.right - self.left) * u64::from(self.bottom - self.top)
    }
}

/// Scales a fraction to a pixel coordinate, clamped to `0..=extent`.
fn to_pixel(fraction: f64, extent: u32) -> u32 {
    let pixel = (fraction * f64::from(extent)).floor();
    if pixel.is_nan() {
        return 0;
    }
    pixel.clamp(0.0, f64::from(extent)) as u32
}

/// Averages every pixel of `image`, or of the part selected by `bbox`.
///
/// The mean of each channel is truncated to an integer. No weighting or
/// outlier rejection is applied, so a few extreme pixels shift the result.
///
/// # Errors
///
/// `EmptyRegion` when the (clamped) box or the image itself has no pixels.
pub fn extract_region_color(image: &RgbImage, bbox: Option<&BoundingBox>) -> Result<RgbColor> {
    let (width, height) = image.dimensions();
    let region = bbox.map_or(PixelRect::full(width, height), |bbox| {
        PixelRect::from_bbox(bbox, width, height)
    });
    if region.is_empty() {
        return Err(ColorError::EmptyRegion);
    }

    let mut sums = [0_u64; 3];
    for y in region.top..region.bottom {
        for x in region.left..region.right {
            let pixel = image.get_pixel(x, y);
            for (sum, value) in sums.iter_mut().zip(pixel.0) {
                *sum += u64::from(value);
            }
        }
    }

    let count = region.area();
    Ok(RgbColor::from(sums.map(|sum| (sum / count) as u8)))
}

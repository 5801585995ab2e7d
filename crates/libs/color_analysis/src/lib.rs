#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod classifier;
mod decode;
mod error;
mod region;
mod samples;
mod translate;
mod tree;

pub use classifier::{ColorClassifier, TrainOptions, train_test_split};
pub use decode::{decode_base64, decode_base64_image, decode_image};
pub use error::{ColorError, Result};
pub use region::{RegionQuery, extract_region_color};
pub use samples::{ColorSample, ColorSampleStore};
pub use translate::{SUPPORTED_LANGUAGES, translate_color_name};

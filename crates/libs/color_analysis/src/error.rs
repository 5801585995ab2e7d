use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("Invalid color sample data: {0}")]
    DataFormat(String),

    #[error("At least 2 distinct color names are needed for training, found {found}.")]
    InsufficientData { found: usize },

    #[error("The bounding box does not contain any pixels.")]
    EmptyRegion,

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Color prediction failed: {0}")]
    Prediction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ColorError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::DataFormat(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Self::Io(io_err),
            other => Self::DataFormat(format!("{other:?}")),
        }
    }
}

impl From<image::ImageError> for ColorError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for ColorError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode(format!("invalid base64 payload ({err})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_keep_their_cause() {
        let err = ColorError::from(io::Error::new(io::ErrorKind::PermissionDenied, "upload.png is locked"));
        assert_eq!(err.to_string(), "I/O error: upload.png is locked");
    }
}

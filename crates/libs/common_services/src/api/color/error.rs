use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_analysis::ColorError;
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ColorApiError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File not found")]
    FileNotFound,

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

impl ColorApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Color(ColorError::Decode(_)) => StatusCode::BAD_REQUEST,
            Self::Color(ColorError::EmptyRegion) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::FileNotFound => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Color(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ColorApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            Self::Internal(report) => {
                error!("Internal error: {report:?}");
                "An unexpected internal error occurred.".to_string()
            }
            other if status.is_server_error() => {
                error!("Color request failed: {other}");
                other.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

/// A prediction task that panicked or was cancelled.
impl From<tokio::task::JoinError> for ColorApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Color(ColorError::Prediction(err.to_string()))
    }
}

impl From<JsonRejection> for ColorApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ColorApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

/// Plain-text body returned whenever credentials cannot be produced.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch database credentials.";

#[derive(Debug, ThisError)]
pub enum CredgateError {
    #[error("secret store error: {0}")]
    SecretStore(String),

    #[error("secret `{secret_id}` has no string payload")]
    EmptySecret { secret_id: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database credentials unavailable")]
    Unavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for CredgateError {
    fn into_response(self) -> Response {
        // Callers only ever see the one outcome; the variant stays in the logs.
        (StatusCode::NOT_FOUND, FETCH_FAILED_MESSAGE).into_response()
    }
}

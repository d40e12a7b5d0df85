// Error taxonomy
//
// Every failure a request can surface maps onto one of these variants.
// Individual file download failures never reach this type: the fetcher
// logs and skips them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller sent something unusable (bad repository URL, malformed body)
    #[error("{0}")]
    InvalidInput(String),

    /// Required configuration is missing (e.g. no Claude API key)
    #[error("{0}")]
    Config(String),

    /// GitHub or Claude failed. `message` is shown to the caller; `detail` is logged only.
    #[error("{message}")]
    Upstream {
        message: String,
        detail: anyhow::Error,
    },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn upstream(message: impl Into<String>, detail: anyhow::Error) -> Self {
        Self::Upstream {
            message: message.into(),
            detail,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream { message, detail } => {
                tracing::error!("{}: {:#}", message, detail);
            }
            other => tracing::warn!("Request rejected: {}", other),
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// ```json
/// { "errorDescription": "Product with id 5 not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable, single-line description of the failure
    pub error_description: String,
}

impl ErrorResponse {
    pub fn new(error_description: impl Into<String>) -> Self {
        Self {
            error_description: error_description.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into one of these variants; the variant alone
/// decides the status code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // every undecodable body is a plain 400, whatever axum would pick
            AppError::JsonExtractorRejection(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::JsonExtractorRejection(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        tracing::info!(status = status.as_u16(), "{}", message);

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

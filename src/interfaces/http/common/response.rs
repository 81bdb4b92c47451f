//! Error envelope returned on every non-2xx response.
//!
//! Shape: `{"error": <slug>, "status": "Error", "message": <detail>}`.
//! Clients branch on the HTTP status code; `message` carries the
//! human-readable detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

pub const STATUS_ERROR: &str = "Error";

/// JSON error envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short error slug, e.g. `"invalid request body"`
    pub error: String,
    /// Always `"Error"`
    pub status: String,
    /// Human-readable detail
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}

/// Handler-boundary error, mapped onto a status code and the envelope.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { error: String, message: String },
    NotFound { error: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn not_found(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest { error, message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(error, message))
            }
            Self::NotFound { error, message } => {
                (StatusCode::NOT_FOUND, ErrorResponse::new(error, message))
            }
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal server error", message),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Gateway errors surface as 404 for missing records and 500 for
/// everything else; validation never reaches this conversion.
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } => Self::not_found("student not found", e.to_string()),
            DomainError::Duplicate(_) | DomainError::InvalidData(_) | DomainError::Database(_) => {
                Self::internal(e.to_string())
            }
        }
    }
}

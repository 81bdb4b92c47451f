//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! the request's explicit field checks ([`ValidateRequest`]) on the
//! deserialized value. Decode and validation failures both answer 400
//! with the error envelope; an empty body gets its own message so the
//! client can tell it apart from malformed JSON.

use axum::body::Bytes;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ErrorResponse;
use crate::shared::validations::{ValidateRequest, Violations};

/// An extractor that deserializes JSON and validates it.
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    /// Request body was empty.
    EmptyBody,
    /// Body could not be read or parsed as JSON.
    JsonError(String),
    /// Field validation failed.
    ValidationError(Violations),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let body = match self {
            Self::EmptyBody => ErrorResponse::new("invalid request body", "request body is empty"),
            Self::JsonError(detail) => ErrorResponse::new("invalid request body", detail),
            Self::ValidationError(violations) => {
                ErrorResponse::new("validation errors", violations.joined())
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateRequest,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidatedJsonRejection::JsonError(e.to_string()))?;

        if bytes.is_empty() {
            return Err(ValidatedJsonRejection::EmptyBody);
        }

        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| ValidatedJsonRejection::JsonError(e.to_string()))?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

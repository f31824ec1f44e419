//! Mapping of service errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::FieldErrors;
use crate::error::ContactError;

/// Error returned by every contacts handler.
#[derive(Debug)]
pub enum ApiError {
    /// Field-level failures, 400 with `{message: [..]}`
    Validation(FieldErrors),

    /// Unparseable body or query string, 400
    BadRequest { message: &'static str, error: String },

    /// 404 `{message: "Contact not found"}`
    NotFound,

    /// Store failure, 500 with the operation's failure message and the cause
    Internal { message: &'static str, error: String },
}

impl ApiError {
    /// Map a service error. `failure` names the operation for 500 responses,
    /// e.g. "Failed to create contact.".
    pub fn from_service(err: ContactError, failure: &'static str) -> Self {
        match err {
            ContactError::Validation(errors) => Self::Validation(errors),
            ContactError::NotFound(_) => Self::NotFound,
            ContactError::Store(store) => Self::Internal {
                message: failure,
                error: store.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Validation(errors) => {
                tracing::debug!(failures = errors.len(), "Request failed validation");
                json!({ "message": errors })
            }
            Self::BadRequest { message, error } => {
                tracing::debug!(%error, "{}", message);
                json!({ "message": message, "error": error })
            }
            Self::NotFound => json!({ "message": "Contact not found" }),
            Self::Internal { message, error } => {
                tracing::error!(%error, "{}", message);
                json!({ "message": message, "error": error })
            }
        };

        (status, Json(body)).into_response()
    }
}

//! Error types for the contact manager.
//!
//! Each layer owns a `thiserror` enum: the store reports [`StoreError`], the
//! service reports [`ContactError`], configuration loading reports
//! [`ConfigError`] and the HTTP client reports [`ClientError`]. The HTTP
//! layer maps these onto status codes in `server::error`.

use crate::domain::FieldErrors;
use thiserror::Error;

/// Errors raised by a contact store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database driver reported a failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be turned back into a contact
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// Any other persistence failure
    #[error("{0}")]
    Other(String),
}

/// Errors produced by contact service operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// One or more field-level rules failed; every failure is listed
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// No contact exists with the given id
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by the contacts HTTP client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Server rejected the request with field-level errors (400)
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

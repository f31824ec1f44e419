//! Domain validation errors.
//!
//! [`ValidationError`] is raised by value-object constructors. [`FieldError`]
//! and [`FieldErrors`] describe request-level failures: one entry per failed
//! rule, serialized in the `{type, value, msg, path, location}` shape that
//! clients of the contacts API already consume.

use super::field::ContactField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Kind tag carried by every field error. Only field errors exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Field,
}

/// Where the offending value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Query,
}

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,

    /// The received value, absent when the field was missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Human readable message
    pub msg: String,

    /// Name of the offending field or query parameter
    pub path: String,

    pub location: Location,
}

impl FieldError {
    /// Build a field error for an arbitrary path.
    pub fn new(
        path: impl Into<String>,
        value: Option<&str>,
        msg: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            kind: ErrorKind::Field,
            value: value.map(str::to_string),
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }

    /// "`<Label>` is required" for a contact field.
    pub fn required(field: ContactField, value: Option<&str>, location: Location) -> Self {
        Self::new(
            field.as_str(),
            value,
            format!("{} is required", field.label()),
            location,
        )
    }
}

/// An accumulated, ordered list of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// True when at least one error targets `path`.
    pub fn mentions(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }

    /// `Ok(value)` when nothing failed, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.msg.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

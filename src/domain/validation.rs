//! Field rules for contact payloads.
//!
//! Every rule is evaluated; failures are collected rather than returned at the
//! first problem, so a caller sees all of them in one response.

use super::email::is_valid_email;
use super::errors::{FieldError, FieldErrors, Location};
use super::field::ContactField;
use crate::models::{ContactPayload, NewContact};

/// Message for an email value that is present but malformed.
pub const INVALID_EMAIL_MESSAGE: &str = "Email must be a valid email address";

/// Check the six required fields and the email format.
///
/// A field is missing when absent or the empty string; whitespace is not
/// trimmed. An empty email fails both the required rule and the format rule
/// and reports both.
pub fn validate_contact(payload: &ContactPayload, location: Location) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in ContactField::ALL {
        let value = payload.field(field);

        if value.map_or(true, str::is_empty) {
            errors.push(FieldError::required(field, value, location));
        }

        if field == ContactField::Email && !value.is_some_and(is_valid_email) {
            errors.push(FieldError::new(
                field.as_str(),
                value,
                INVALID_EMAIL_MESSAGE,
                location,
            ));
        }
    }

    errors
}

/// Validate a create payload and turn it into insertable fields.
pub fn validate_new_contact(payload: ContactPayload) -> Result<NewContact, FieldErrors> {
    validate_contact(&payload, Location::Body).into_result(())?;

    Ok(NewContact {
        first_name: payload.first_name.unwrap_or_default(),
        last_name: payload.last_name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        phone: payload.phone.unwrap_or_default(),
        company: payload.company.unwrap_or_default(),
        job_title: payload.job_title.unwrap_or_default(),
    })
}

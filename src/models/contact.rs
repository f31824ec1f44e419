//! Contact model and the payloads used to create and change it.

use crate::domain::{ContactField, ContactId};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A stored contact.
///
/// The id is serialized as `_id`, the name existing clients read; `id` is
/// accepted on input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-generated identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub job_title: String,
}

impl Contact {
    /// Attach an id to validated fields.
    pub fn from_new(id: ContactId, new: NewContact) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            company: new.company,
            job_title: new.job_title,
        }
    }

    /// Value of one of the six editable fields.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::JobTitle => &self.job_title,
        }
    }

    /// Overwrite every field present in `changes`; absent fields are kept.
    pub fn apply(&mut self, changes: &ContactPayload) {
        for field in ContactField::ALL {
            if let Some(value) = changes.field(field) {
                let slot = match field {
                    ContactField::FirstName => &mut self.first_name,
                    ContactField::LastName => &mut self.last_name,
                    ContactField::Email => &mut self.email,
                    ContactField::Phone => &mut self.phone,
                    ContactField::Company => &mut self.company,
                    ContactField::JobTitle => &mut self.job_title,
                };
                *slot = value.to_string();
            }
        }
    }

    /// A copy with `changes` applied.
    pub fn merged_with(&self, changes: &ContactPayload) -> Self {
        let mut merged = self.clone();
        merged.apply(changes);
        merged
    }
}

/// Contact fields that have passed validation, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub job_title: String,
}

/// Request body for create and update; every field is optional here and
/// validation decides what is acceptable.
///
/// Values may arrive as JSON strings or numbers; `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

impl ContactPayload {
    pub fn field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FirstName => self.first_name.as_deref(),
            ContactField::LastName => self.last_name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Company => self.company.as_deref(),
            ContactField::JobTitle => self.job_title.as_deref(),
        }
    }

    /// Set one field, builder style.
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Company => self.company = value,
            ContactField::JobTitle => self.job_title = value,
        }
        self
    }
}

impl From<&Contact> for ContactPayload {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: Some(contact.first_name.clone()),
            last_name: Some(contact.last_name.clone()),
            email: Some(contact.email.clone()),
            phone: Some(contact.phone.clone()),
            company: Some(contact.company.clone()),
            job_title: Some(contact.job_title.clone()),
        }
    }
}

/// Accept a string or a number as text; `null` means absent.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

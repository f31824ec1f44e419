//! HTTP client for the contacts API.
//!
//! [`ContactsClient`] is synchronous (`ureq`); async callers go through
//! [`AsyncContactsClientImpl`], which moves each call onto the blocking pool.
//! [`ContactTable`] builds the list-view behaviour on top of either.

mod async_wrapper;
mod table;

pub use async_wrapper::{AsyncContactsClient, AsyncContactsClientImpl};
pub use table::{ContactTable, DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};

use crate::domain::{FieldError, FieldErrors, ListParams};
use crate::error::{ClientError, ClientResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{Contact, ContactPage, ContactPayload};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body shape returned by the API: either a message string or a list
/// of field errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Fields(Vec<FieldError>),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// Blocking HTTP client for the contacts API.
#[derive(Clone)]
pub struct ContactsClient {
    /// Base URL of the server, e.g. `http://localhost:3000`
    base_url: String,

    agent: Arc<ureq::Agent>,

    metrics: Metrics,
}

impl ContactsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.into(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Client with the default ten second timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn contact_path(id: &str) -> String {
        format!("/contacts/{}", urlencoding::encode(id))
    }

    fn get(&self, path: &str) -> ClientResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_error);
        timer.finish(&result);

        result
    }

    fn post(&self, path: &str, body: &serde_json::Value) -> ClientResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("POST {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self.agent.post(&url).send_json(body).map_err(map_error);
        timer.finish(&result);

        if let Err(e) = &result {
            tracing::error!("POST {} - Error: {}", url, e);
        }
        result
    }

    fn put(&self, path: &str, body: &serde_json::Value) -> ClientResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("PUT {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self.agent.put(&url).send_json(body).map_err(map_error);
        timer.finish(&result);

        if let Err(e) = &result {
            tracing::error!("PUT {} - Error: {}", url, e);
        }
        result
    }

    fn delete(&self, path: &str) -> ClientResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("DELETE {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self.agent.delete(&url).call().map_err(map_error);
        timer.finish(&result);

        result
    }

    // ========================= Contact Operations =========================

    /// Fetch one page of contacts.
    pub fn list_contacts(&self, params: &ListParams) -> ClientResult<ContactPage> {
        let query = params.to_query();
        let pairs = [
            ("sortField", query.sort_field),
            ("sortOrder", query.sort_order),
            ("page", query.page),
            ("limit", query.limit),
        ];
        let query_string = pairs
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect::<Vec<_>>()
            .join("&");

        let page: ContactPage = read_json(self.get(&format!("/contacts?{}", query_string))?)?;
        self.metrics.record_contacts_fetched(page.data.len());
        Ok(page)
    }

    /// Fetch a single contact by id.
    pub fn get_contact(&self, id: &str) -> ClientResult<Contact> {
        let contact: Contact = read_json(self.get(&Self::contact_path(id))?)?;
        self.metrics.record_contacts_fetched(1);
        Ok(contact)
    }

    /// Create a contact; the payload must carry every field.
    pub fn create_contact(&self, payload: &ContactPayload) -> ClientResult<Contact> {
        let body = serde_json::to_value(payload)?;
        let contact: Contact = read_json(self.post("/contacts", &body)?)?;

        tracing::info!("Created contact {}", contact.id);
        self.metrics.record_contact_written();
        Ok(contact)
    }

    /// Send changes for an existing contact; absent fields are left as they are.
    pub fn update_contact(&self, id: &str, payload: &ContactPayload) -> ClientResult<Contact> {
        let body = serde_json::to_value(payload)?;
        let contact: Contact = read_json(self.put(&Self::contact_path(id), &body)?)?;

        self.metrics.record_contact_written();
        Ok(contact)
    }

    /// Delete a contact, returning the server's confirmation message.
    pub fn delete_contact(&self, id: &str) -> ClientResult<String> {
        let body: MessageBody = read_json(self.delete(&Self::contact_path(id))?)?;

        self.metrics.record_contact_written();
        Ok(body.message)
    }
}

fn read_json<T: DeserializeOwned>(response: ureq::Response) -> ClientResult<T> {
    let body = response
        .into_string()
        .map_err(|e| ClientError::HttpError(e.to_string()))?;
    serde_json::from_str(&body).map_err(ClientError::JsonError)
}

/// Map a ureq error onto a [`ClientError`], decoding the API's error body.
fn map_error(error: ureq::Error) -> ClientError {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody {
                    message: ErrorMessage::Fields(fields),
                }) if code == 400 => return ClientError::Validation(FieldErrors::from(fields)),
                Ok(ErrorBody {
                    message: ErrorMessage::Text(text),
                }) => text,
                _ => body,
            };

            match code {
                404 => ClientError::NotFound(message),
                _ => ClientError::ApiError {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => {
                ClientError::HttpError("Connection failed".to_string())
            }
            ureq::ErrorKind::Io => ClientError::Timeout,
            _ => ClientError::HttpError(transport.to_string()),
        },
    }
}

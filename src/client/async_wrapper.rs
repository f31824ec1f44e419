//! Async wrapper around the synchronous [`ContactsClient`].
//!
//! Each call runs on tokio's blocking pool via `spawn_blocking` so the
//! runtime's worker threads never wait on network I/O.

use crate::client::ContactsClient;
use crate::domain::ListParams;
use crate::error::{ClientError, ClientResult};
use crate::models::{Contact, ContactPage, ContactPayload};
use async_trait::async_trait;
use std::sync::Arc;

/// Async contacts API operations.
#[async_trait]
pub trait AsyncContactsClient: Send + Sync {
    async fn list_contacts(&self, params: ListParams) -> ClientResult<ContactPage>;
    async fn get_contact(&self, id: &str) -> ClientResult<Contact>;
    async fn create_contact(&self, payload: &ContactPayload) -> ClientResult<Contact>;
    async fn update_contact(&self, id: &str, payload: &ContactPayload) -> ClientResult<Contact>;
    async fn delete_contact(&self, id: &str) -> ClientResult<String>;
}

#[derive(Clone)]
pub struct AsyncContactsClientImpl {
    client: Arc<ContactsClient>,
}

impl AsyncContactsClientImpl {
    pub fn new(client: ContactsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn inner(&self) -> &ContactsClient {
        &self.client
    }
}

fn join_error(e: tokio::task::JoinError) -> ClientError {
    ClientError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncContactsClient for AsyncContactsClientImpl {
    async fn list_contacts(&self, params: ListParams) -> ClientResult<ContactPage> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_contacts(&params))
            .await
            .map_err(join_error)?
    }

    async fn get_contact(&self, id: &str) -> ClientResult<Contact> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.get_contact(&id))
            .await
            .map_err(join_error)?
    }

    async fn create_contact(&self, payload: &ContactPayload) -> ClientResult<Contact> {
        let client = self.client.clone();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&payload))
            .await
            .map_err(join_error)?
    }

    async fn update_contact(&self, id: &str, payload: &ContactPayload) -> ClientResult<Contact> {
        let client = self.client.clone();
        let id = id.to_string();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || client.update_contact(&id, &payload))
            .await
            .map_err(join_error)?
    }

    async fn delete_contact(&self, id: &str) -> ClientResult<String> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(join_error)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_async_client_creation() {
        let async_client =
            AsyncContactsClientImpl::new(ContactsClient::with_base_url("http://localhost:3000"));
        let cloned = async_client.clone();
        assert_eq!(cloned.inner().metrics().http_requests_total(), 0);
    }

    #[tokio::test]
    async fn test_connection_failure_surfaces_as_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let client = AsyncContactsClientImpl::new(ContactsClient::new(
            "http://127.0.0.1:9",
            std::time::Duration::from_secs(2),
        ));

        let result = client.get_contact("abc").await;
        assert!(matches!(
            result,
            Err(ClientError::HttpError(_)) | Err(ClientError::Timeout)
        ));
        assert_eq!(client.inner().metrics().http_errors_total(), 1);
    }
}

use async_trait::async_trait;
use contact_manager::client::AsyncContactsClient;
use contact_manager::domain::ListParams;
use contact_manager::error::{ClientError, ClientResult, ContactError};
use contact_manager::models::{Contact, ContactPage, ContactPayload};
use contact_manager::repositories::InMemoryContactRepository;
use contact_manager::services::{ContactService, ContactServiceImpl};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the HTTP client.
///
/// Serves calls from a real service over the in-memory store, records the
/// listing parameters it receives and can be told to fail.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactsClient {
    service: Arc<ContactServiceImpl>,
    list_calls: Arc<Mutex<Vec<ListParams>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactsClient {
    pub fn new() -> Self {
        Self {
            service: Arc::new(ContactServiceImpl::new(Arc::new(
                InMemoryContactRepository::new(),
            ))),
            list_calls: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Direct access to the backing service, for seeding data.
    pub fn service(&self) -> &ContactServiceImpl {
        &self.service
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every set of listing parameters received, oldest first.
    pub fn list_calls(&self) -> Vec<ListParams> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn last_list_call(&self) -> Option<ListParams> {
        self.list_calls.lock().unwrap().last().copied()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> ClientResult<()> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::HttpError("Connection failed".to_string()));
        }
        Ok(())
    }
}

impl Default for MockContactsClient {
    fn default() -> Self {
        Self::new()
    }
}

fn to_client_error(err: ContactError) -> ClientError {
    match err {
        ContactError::Validation(errors) => ClientError::Validation(errors),
        ContactError::NotFound(_) => ClientError::NotFound("Contact not found".to_string()),
        ContactError::Store(e) => ClientError::ApiError {
            status: 500,
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl AsyncContactsClient for MockContactsClient {
    async fn list_contacts(&self, params: ListParams) -> ClientResult<ContactPage> {
        self.list_calls.lock().unwrap().push(params);
        self.track_call("list_contacts")?;

        self.service.list(params).await.map_err(to_client_error)
    }

    async fn get_contact(&self, id: &str) -> ClientResult<Contact> {
        self.track_call("get_contact")?;
        self.service.get(id).await.map_err(to_client_error)
    }

    async fn create_contact(&self, payload: &ContactPayload) -> ClientResult<Contact> {
        self.track_call("create_contact")?;
        self.service
            .create(payload.clone())
            .await
            .map_err(to_client_error)
    }

    async fn update_contact(&self, id: &str, payload: &ContactPayload) -> ClientResult<Contact> {
        self.track_call("update_contact")?;
        self.service
            .update(id, payload.clone())
            .await
            .map_err(to_client_error)
    }

    async fn delete_contact(&self, id: &str) -> ClientResult<String> {
        self.track_call("delete_contact")?;
        self.service.delete(id).await.map_err(to_client_error)?;
        Ok("Contact deleted successfully".to_string())
    }
}

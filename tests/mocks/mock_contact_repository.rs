use async_trait::async_trait;
use contact_manager::domain::{ContactId, Sort};
use contact_manager::error::{StoreError, StoreResult};
use contact_manager::models::{Contact, ContactPayload, NewContact};
use contact_manager::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in insertion order, tracks method calls for verification
/// and can be switched into a failing mode to exercise store errors.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failure: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a contact to the mock repository.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Make every subsequent call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Stop failing.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Other(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn insert(&self, contact: &NewContact) -> StoreResult<Contact> {
        self.track_call("insert")?;

        let stored = Contact::from_new(ContactId::generate(), contact.clone());
        self.contacts.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find(&self, sort: Sort, skip: u64, limit: u64) -> StoreResult<Vec<Contact>> {
        self.track_call("find")?;

        // Stable sort keeps insertion order for equal keys
        let mut contacts = self.contacts.lock().unwrap().clone();
        contacts.sort_by(|a, b| {
            sort.order
                .apply(a.field(sort.field).cmp(b.field(sort.field)))
        });

        Ok(contacts
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("get")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| &c.id == id).cloned())
    }

    async fn update(
        &self,
        id: &ContactId,
        changes: &ContactPayload,
    ) -> StoreResult<Option<Contact>> {
        self.track_call("update")?;

        let mut contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter_mut().find(|c| &c.id == id).map(|contact| {
            contact.apply(changes);
            contact.clone()
        }))
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<bool> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);
        Ok(contacts.len() < before)
    }

    async fn count(&self) -> StoreResult<u64> {
        self.track_call("count")?;

        Ok(self.contacts.lock().unwrap().len() as u64)
    }
}

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::{ContactId, Sort};
use crate::error::StoreResult;
use crate::models::{Contact, ContactPayload, NewContact};
use crate::repositories::traits::ContactRepository;

struct Entry {
    /// Insertion sequence, used as the tie-breaker for equal sort keys
    seq: u64,
    contact: Contact,
}

#[derive(Default)]
struct Inner {
    next_seq: u64,
    entries: HashMap<ContactId, Entry>,
}

/// Process-local contact store.
///
/// Used when no database is configured, and as the substitute store in
/// tests and benchmarks. Data does not survive a restart.
#[derive(Default)]
pub struct InMemoryContactRepository {
    inner: RwLock<Inner>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: &NewContact) -> StoreResult<Contact> {
        let mut inner = self.inner.write().await;

        let id = ContactId::generate();
        let stored = Contact::from_new(id.clone(), contact.clone());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            id,
            Entry {
                seq,
                contact: stored.clone(),
            },
        );

        Ok(stored)
    }

    async fn find(&self, sort: Sort, skip: u64, limit: u64) -> StoreResult<Vec<Contact>> {
        let inner = self.inner.read().await;

        let mut entries: Vec<&Entry> = inner.entries.values().collect();
        entries.sort_by(|a, b| {
            sort.order
                .apply(a.contact.field(sort.field).cmp(b.contact.field(sort.field)))
                .then(a.seq.cmp(&b.seq))
        });

        Ok(entries
            .into_iter()
            .skip(to_usize(skip))
            .take(to_usize(limit))
            .map(|entry| entry.contact.clone())
            .collect())
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        let inner = self.inner.read().await;
        Ok(inner.entries.get(id).map(|entry| entry.contact.clone()))
    }

    async fn update(
        &self,
        id: &ContactId,
        changes: &ContactPayload,
    ) -> StoreResult<Option<Contact>> {
        let mut inner = self.inner.write().await;
        Ok(inner.entries.get_mut(id).map(|entry| {
            entry.contact.apply(changes);
            entry.contact.clone()
        }))
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.entries.remove(id).is_some())
    }

    async fn count(&self) -> StoreResult<u64> {
        let inner = self.inner.read().await;
        Ok(inner.entries.len() as u64)
    }
}

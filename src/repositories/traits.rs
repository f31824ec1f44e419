use crate::domain::{ContactId, Sort};
use crate::error::StoreResult;
use crate::models::{Contact, ContactPayload, NewContact};
use async_trait::async_trait;

/// Persistence contract for contacts.
///
/// Implementations store records as given; enforcing field rules is the
/// service's job. Absence is reported as `None`/`false`, never as an error.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a contact and return it with its generated id.
    async fn insert(&self, contact: &NewContact) -> StoreResult<Contact>;

    /// Fetch a window of contacts ordered by `sort`.
    ///
    /// Records with equal sort keys come back in insertion order, so windows
    /// taken with the same sort never overlap or leave gaps.
    async fn find(&self, sort: Sort, skip: u64, limit: u64) -> StoreResult<Vec<Contact>>;

    /// Retrieve a single contact by id.
    async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>>;

    /// Overwrite the fields present in `changes` and return the result.
    async fn update(&self, id: &ContactId, changes: &ContactPayload)
        -> StoreResult<Option<Contact>>;

    /// Remove a contact; `false` when nothing matched.
    async fn delete(&self, id: &ContactId) -> StoreResult<bool>;

    /// Count all stored contacts.
    async fn count(&self) -> StoreResult<u64>;
}

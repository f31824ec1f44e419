//! Contact service layer.
//!
//! Validates payloads, turns listing parameters into store calls and maps
//! store outcomes to [`ContactError`]s.

use crate::domain::{validate_contact, validate_new_contact, ContactId, ListParams, Location};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactPage, ContactPayload};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate and persist a new contact.
    async fn create(&self, payload: ContactPayload) -> ContactResult<Contact>;

    /// One sorted page of contacts plus totals.
    async fn list(&self, params: ListParams) -> ContactResult<ContactPage>;

    /// Get a single contact.
    async fn get(&self, id: &str) -> ContactResult<Contact>;

    /// Merge `payload` into an existing contact.
    ///
    /// The merged record must pass the same rules as a new contact, so a
    /// required field cannot be cleared.
    async fn update(&self, id: &str, payload: ContactPayload) -> ContactResult<Contact>;

    /// Remove a contact.
    async fn delete(&self, id: &str) -> ContactResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service over the given store.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// An empty id can never match a stored contact.
    fn parse_id(id: &str) -> ContactResult<ContactId> {
        ContactId::new(id).map_err(|_| ContactError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create(&self, payload: ContactPayload) -> ContactResult<Contact> {
        let new = validate_new_contact(payload).map_err(ContactError::Validation)?;

        let contact = self.repository.insert(&new).await?;
        tracing::info!(contact_id = %contact.id, "Contact created");
        Ok(contact)
    }

    async fn list(&self, params: ListParams) -> ContactResult<ContactPage> {
        let (data, total) = futures::try_join!(
            self.repository.find(params.sort, params.skip(), params.limit),
            self.repository.count(),
        )?;

        tracing::debug!(
            sort_field = %params.sort.field,
            sort_order = params.sort.order.as_i8(),
            page = params.page,
            limit = params.limit,
            returned = data.len(),
            total,
            "Listed contacts"
        );

        Ok(ContactPage::new(
            data,
            total,
            params.total_pages(total),
            params.page,
        ))
    }

    async fn get(&self, id: &str) -> ContactResult<Contact> {
        let contact_id = Self::parse_id(id)?;

        self.repository
            .get(&contact_id)
            .await?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, payload: ContactPayload) -> ContactResult<Contact> {
        let contact_id = Self::parse_id(id)?;

        let existing = self
            .repository
            .get(&contact_id)
            .await?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;

        let merged = existing.merged_with(&payload);
        validate_contact(&ContactPayload::from(&merged), Location::Body)
            .into_result(())
            .map_err(ContactError::Validation)?;

        // The record may have been deleted since it was read.
        let updated = self
            .repository
            .update(&contact_id, &payload)
            .await?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;

        tracing::info!(contact_id = %updated.id, "Contact updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> ContactResult<()> {
        let contact_id = Self::parse_id(id)?;

        if !self.repository.delete(&contact_id).await? {
            return Err(ContactError::NotFound(id.to_string()));
        }

        tracing::info!(contact_id = %contact_id, "Contact deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactField;
    use crate::repositories::InMemoryContactRepository;

    fn service() -> ContactServiceImpl {
        ContactServiceImpl::new(Arc::new(InMemoryContactRepository::new()))
    }

    fn payload(first: &str, last: &str) -> ContactPayload {
        ContactPayload::default()
            .with(ContactField::FirstName, first)
            .with(ContactField::LastName, last)
            .with(ContactField::Email, format!("{}@example.com", first.to_lowercase()))
            .with(ContactField::Phone, "555-0100")
            .with(ContactField::Company, "Acme")
            .with(ContactField::JobTitle, "Engineer")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();
        let created = service.create(payload("Ada", "Lovelace")).await.unwrap();
        let fetched = service.get(created.id.as_str()).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn test_empty_id_is_not_found() {
        let service = service();
        assert!(matches!(service.get("").await, Err(ContactError::NotFound(_))));
        assert!(matches!(service.delete("").await, Err(ContactError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_clearing_required_field() {
        let service = service();
        let created = service.create(payload("Ada", "Lovelace")).await.unwrap();

        let changes = ContactPayload::default().with(ContactField::LastName, "");
        let result = service.update(created.id.as_str(), changes).await;
        match result {
            Err(ContactError::Validation(errors)) => assert!(errors.mentions("lastName")),
            other => panic!("expected validation error, got {:?}", other),
        }

        let unchanged = service.get(created.id.as_str()).await.unwrap();
        assert_eq!(unchanged.last_name, "Lovelace");
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        let page = service().list(ListParams::default()).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_contacts, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
    }
}

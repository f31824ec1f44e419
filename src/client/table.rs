//! List-view state for a contacts table.
//!
//! [`ContactTable`] keeps the rows of the current page together with the
//! sort and paging controls a table UI exposes. Every change of controls and
//! every mutation is followed by a fresh fetch of the current page; nothing
//! is cached or updated optimistically.
//!
//! The UI page is zero-based; the API page is one-based.

use crate::client::AsyncContactsClient;
use crate::domain::{ContactField, ListParams, Sort, SortOrder};
use crate::error::ClientResult;
use crate::models::{Contact, ContactPayload};
use std::sync::Arc;

/// Page sizes offered to the user.
pub const ROWS_PER_PAGE_OPTIONS: [u64; 3] = [5, 10, 25];

pub const DEFAULT_ROWS_PER_PAGE: u64 = 10;

/// The paging and sorting controls of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct View {
    sort: Sort,
    page: u64,
    rows_per_page: u64,
}

impl View {
    fn params(&self) -> ListParams {
        ListParams::new(self.sort, self.page + 1, self.rows_per_page)
    }
}

/// Client-side contacts table.
pub struct ContactTable {
    client: Arc<dyn AsyncContactsClient>,
    view: View,
    rows: Vec<Contact>,
    total_contacts: u64,
}

impl ContactTable {
    /// An empty table sorted by last name ascending, first page, ten rows.
    ///
    /// Nothing is fetched until [`refresh`](Self::refresh) or another
    /// operation is called.
    pub fn new(client: Arc<dyn AsyncContactsClient>) -> Self {
        Self {
            client,
            view: View {
                sort: Sort::default(),
                page: 0,
                rows_per_page: DEFAULT_ROWS_PER_PAGE,
            },
            rows: Vec::new(),
            total_contacts: 0,
        }
    }

    /// Column keys and header labels, in display order.
    pub fn columns() -> impl Iterator<Item = (ContactField, &'static str)> {
        ContactField::ALL.into_iter().map(|f| (f, f.label()))
    }

    pub fn rows(&self) -> &[Contact] {
        &self.rows
    }

    pub fn total_contacts(&self) -> u64 {
        self.total_contacts
    }

    pub fn sort(&self) -> Sort {
        self.view.sort
    }

    /// Zero-based page index.
    pub fn page(&self) -> u64 {
        self.view.page
    }

    pub fn rows_per_page(&self) -> u64 {
        self.view.rows_per_page
    }

    /// Parameters the next fetch will send to the API.
    pub fn list_params(&self) -> ListParams {
        self.view.params()
    }

    /// Re-fetch the current page.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.load(self.view).await
    }

    /// Clicking a column header: the active column flips from ascending to
    /// descending; any other click sorts ascending by the clicked column.
    pub async fn request_sort(&mut self, field: ContactField) -> ClientResult<()> {
        let current = self.view.sort;
        let order = if current.field == field && current.order == SortOrder::Ascending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        self.load(View {
            sort: Sort::new(field, order),
            ..self.view
        })
        .await
    }

    /// Move to a zero-based page.
    pub async fn change_page(&mut self, page: u64) -> ClientResult<()> {
        self.load(View { page, ..self.view }).await
    }

    /// Change the page size and go back to the first page.
    pub async fn change_rows_per_page(&mut self, rows_per_page: u64) -> ClientResult<()> {
        self.load(View {
            page: 0,
            rows_per_page: rows_per_page.max(1),
            ..self.view
        })
        .await
    }

    /// Create a contact, then re-fetch the current page.
    pub async fn add(&mut self, payload: &ContactPayload) -> ClientResult<Contact> {
        let created = self
            .client
            .create_contact(payload)
            .await
            .inspect_err(|e| tracing::error!("Failed to add contact: {}", e))?;

        self.refresh().await?;
        Ok(created)
    }

    /// Update a contact, then re-fetch the current page.
    pub async fn edit(&mut self, id: &str, payload: &ContactPayload) -> ClientResult<Contact> {
        let updated = self
            .client
            .update_contact(id, payload)
            .await
            .inspect_err(|e| tracing::error!("Failed to update contact {}: {}", id, e))?;

        self.refresh().await?;
        Ok(updated)
    }

    /// Delete a contact, then re-fetch the current page.
    pub async fn remove(&mut self, id: &str) -> ClientResult<()> {
        self.client
            .delete_contact(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to delete contact {}: {}", id, e))?;

        self.refresh().await
    }

    /// Fetch the page described by `view` and commit it only on success.
    async fn load(&mut self, view: View) -> ClientResult<()> {
        match self.client.list_contacts(view.params()).await {
            Ok(page) => {
                self.view = view;
                self.total_contacts = page.total_contacts;
                self.rows = page.data;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to fetch contacts: {}", e);
                Err(e)
            }
        }
    }
}

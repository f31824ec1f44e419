//! Application state shared across handlers.

use std::sync::Arc;

use crate::services::ContactService;

/// Shared handler state: the contact service, constructed once at startup.
///
/// Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    contacts: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &dyn ContactService {
        self.contacts.as_ref()
    }
}

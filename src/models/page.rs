//! Paginated listing response.

use super::contact::Contact;
use serde::{Deserialize, Serialize};

/// One page of a sorted contact listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    #[serde(default = "default_success")]
    pub success: bool,

    /// Contacts on this page, in listing order
    pub data: Vec<Contact>,

    /// Count of all stored contacts, unfiltered
    pub total_contacts: u64,

    pub total_pages: u64,

    /// The 1-indexed page that was requested
    pub current_page: u64,
}

fn default_success() -> bool {
    true
}

impl ContactPage {
    pub fn new(data: Vec<Contact>, total_contacts: u64, total_pages: u64, current_page: u64) -> Self {
        Self {
            success: true,
            data,
            total_contacts,
            total_pages,
            current_page,
        }
    }
}

//! Data models for the contact manager.
//!
//! This module contains the stored contact, the payloads used to create and
//! change it, and the paginated listing response.

pub mod contact;
pub mod page;

pub use contact::{Contact, ContactPayload, NewContact};
pub use page::ContactPage;

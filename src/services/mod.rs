//! Application service layer.
//!
//! Services hold the business rules and sit between the HTTP handlers and
//! the store. They are constructed once with an injected repository.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};

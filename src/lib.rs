//! Contact Manager - a REST backend for a personal contacts list.
//!
//! Contacts carry six required text fields and are listed with server-side
//! sorting and pagination. A small HTTP client and a list-view model
//! ([`client::ContactTable`]) cover the consuming side.
//!
//! # Architecture
//!
//! - **domain**: Value objects, field rules and listing parameters
//! - **models**: Contact records, change payloads and listing pages
//! - **error**: Error types per layer
//! - **config**: Configuration from environment variables
//! - **repositories**: Contact store trait with in-memory and Postgres backends
//! - **services**: Contact operations on top of a store
//! - **server**: Axum router, handlers and HTTP error mapping
//! - **client**: Blocking/async HTTP client and the contacts table model
//! - **metrics**: Client request counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::{AsyncContactsClient, AsyncContactsClientImpl, ContactTable, ContactsClient};
pub use config::{Config, StoreConfig};
pub use error::{ClientError, ConfigError, ContactError, StoreError};
pub use metrics::{HttpTimer, Metrics};
pub use models::{Contact, ContactPage, ContactPayload, NewContact};
pub use repositories::{ContactRepository, InMemoryContactRepository, PostgresContactRepository};
pub use server::{router, AppState};
pub use services::{ContactService, ContactServiceImpl};

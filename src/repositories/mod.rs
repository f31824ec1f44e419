//! Contact storage.
//!
//! [`ContactRepository`] is the contract the service depends on; the
//! in-memory and Postgres stores are interchangeable behind it.

mod memory_contact_repository;
mod postgres_contact_repository;
mod traits;

pub use memory_contact_repository::InMemoryContactRepository;
pub use postgres_contact_repository::PostgresContactRepository;
pub use traits::ContactRepository;

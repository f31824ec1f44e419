//! Domain value objects and types.
//!
//! The contact id wrapper, the closed set of contact fields, sort and
//! listing parameters, and the field rules every write must pass.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod field;
pub mod query;
pub mod sort;
pub mod validation;

pub use contact_id::ContactId;
pub use email::is_valid_email;
pub use errors::{ErrorKind, FieldError, FieldErrors, Location, ValidationError};
pub use field::ContactField;
pub use query::{ListParams, ListQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use sort::{Sort, SortOrder};
pub use validation::{validate_contact, validate_new_contact};

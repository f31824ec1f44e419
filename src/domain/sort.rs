//! Sort specification for contact listings.

use super::field::ContactField;
use std::cmp::Ordering;

/// Listing direction. On the wire `1` is ascending and `-1` descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Map a coerced integer onto a direction; only `1` and `-1` are valid.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Ascending),
            -1 => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort {
    pub field: ContactField,
    pub order: SortOrder,
}

impl Sort {
    pub fn new(field: ContactField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new(ContactField::LastName, SortOrder::Ascending)
    }
}

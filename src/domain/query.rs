//! Typed parsing of listing query parameters.
//!
//! Raw query-string values are collected into [`ListQuery`] untouched and
//! converted in one place by [`ListParams::parse`], which either yields a
//! valid request or every problem it found.

use super::errors::{FieldError, FieldErrors, Location};
use super::field::ContactField;
use super::sort::{Sort, SortOrder};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw listing parameters as received in the query string.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

/// A validated listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub sort: Sort,
    /// 1-indexed page number
    pub page: u64,
    /// Page size, at least 1
    pub limit: u64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            sort: Sort::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    pub fn new(sort: Sort, page: u64, limit: u64) -> Self {
        Self { sort, page, limit }
    }

    /// Parse raw query values, applying defaults for absent parameters.
    ///
    /// Every invalid parameter contributes one error; nothing is silently
    /// replaced by its default.
    pub fn parse(query: &ListQuery) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let defaults = Self::default();

        let field = match query.sort_field.as_deref() {
            None => defaults.sort.field,
            Some(raw) => raw.parse::<ContactField>().unwrap_or_else(|msg| {
                errors.push(FieldError::new("sortField", Some(raw), msg, Location::Query));
                defaults.sort.field
            }),
        };

        let order = match query.sort_order.as_deref() {
            None => defaults.sort.order,
            Some(raw) => match leading_integer(raw).and_then(SortOrder::from_i64) {
                Some(order) => order,
                None => {
                    errors.push(FieldError::new(
                        "sortOrder",
                        Some(raw),
                        "Invalid sort order value.",
                        Location::Query,
                    ));
                    defaults.sort.order
                }
            },
        };

        let page = parse_positive(&mut errors, "page", "Page", query.page.as_deref(), DEFAULT_PAGE);
        let limit =
            parse_positive(&mut errors, "limit", "Limit", query.limit.as_deref(), DEFAULT_LIMIT);

        errors.into_result(Self::new(Sort::new(field, order), page, limit))
    }

    /// Number of records before this page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`; zero when there are no records.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit.max(1))
    }

    /// Render back into raw query form.
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            sort_field: Some(self.sort.field.as_str().to_string()),
            sort_order: Some(self.sort.order.as_i8().to_string()),
            page: Some(self.page.to_string()),
            limit: Some(self.limit.to_string()),
        }
    }
}

/// Integer prefix of `raw` after leading whitespace, so `"1.0"` and `"-1abc"`
/// read as `1` and `-1`. `None` when no digit follows the optional sign.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse().ok()
}

fn parse_positive(
    errors: &mut FieldErrors,
    path: &str,
    label: &str,
    raw: Option<&str>,
    default: u64,
) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u64>() {
        Ok(value) if value >= 1 => value,
        _ => {
            errors.push(FieldError::new(
                path,
                Some(raw),
                format!("{} must be a positive integer", label),
                Location::Query,
            ));
            default
        }
    }
}

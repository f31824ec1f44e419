//! Email address format check.

use once_cell::sync::Lazy;
use regex::Regex;

/// local@domain.tld with no whitespace; the structural checks below tighten it.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("email pattern is a valid regex")
});

/// True when `email` is a plausible mailbox address.
///
/// Beyond the pattern: at most 254 bytes; the local part is at most 64
/// bytes, does not start or end with '.' and has no ".."; domain labels are
/// non-empty and do not start or end with '-'; the top-level label has at
/// least two characters.
///
/// ```
/// use contact_manager::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 || !EMAIL_PATTERN.is_match(email) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.len() > 64 || local.starts_with('.') || local.ends_with('.') || local.contains("..")
    {
        return false;
    }

    let mut labels = domain.split('.').peekable();
    let mut tld = "";
    while let Some(label) = labels.next() {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if labels.peek().is_none() {
            tld = label;
        }
    }

    tld.len() >= 2
}

//! Built-in field validators.
//!
//! Each validator takes the (already sanitized) value and answers pass/fail.
//! Presence is the engine's concern: a validator is only consulted for
//! truthy values, so none of these need to special-case "missing".

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::states::is_valid_state_code;

/// 5-digit or 5+4 ZIP format.
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-?\d{4})?$").expect("valid regex"));

/// Non-empty and ASCII letters only.
pub fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Anything except the falsy form inputs: empty string or `"0"`.
pub fn is_extant(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

/// Integer or float, optional sign and exponent.
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && !trimmed.contains(|c: char| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
        && trimmed.parse::<f64>().is_ok()
}

/// Exactly 10 digits. Phone numbers must lead with an area code, and
/// sanitization has already stripped punctuation and the `1` country prefix.
pub fn is_phone(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

/// Membership in the US state/territory code set.
pub fn is_us_state(value: &str) -> bool {
    is_valid_state_code(value)
}

/// `12345` or `12345-6789` (dash optional), at most 10 characters.
pub fn is_us_zip_code(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.len() <= 10 && ZIP_RE.is_match(trimmed)
}

/// RFC-shaped email address.
pub fn is_email(value: &str) -> bool {
    value.validate_email()
}

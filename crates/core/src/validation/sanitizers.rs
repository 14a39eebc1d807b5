//! Built-in field sanitizers.
//!
//! Each sanitizer takes the field's current value and returns the cleaned
//! replacement. All of them are idempotent: running one over its own output
//! changes nothing.

use std::sync::LazyLock;

use regex::Regex;

/// Strips everything that is not a digit, plus one leading `1` (US country
/// prefix). `1-215-555-1234` becomes `2155551234`.
static PHONE_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1|\D").expect("valid regex"));

/// Trim and collapse internal whitespace runs to a single space.
pub fn scrub_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce a phone or fax input to bare digits, dropping one leading `1`.
pub fn sanitize_phone(value: &str) -> String {
    PHONE_NOISE_RE.replace_all(value, "").into_owned()
}

/// Keep only characters permitted in an email address, trimmed.
pub fn sanitize_email(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.@".contains(*c))
        .collect()
}

/// General text input cleanup: strip control characters, then trim.
pub fn sanitize_text(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize an identifier/key: lowercase, keep only `[a-z0-9_-]`.
pub fn sanitize_key(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_whitespace_trims_and_collapses() {
        assert_eq!(scrub_whitespace("  1234   Market \t St  "), "1234 Market St");
    }

    #[test]
    fn scrub_whitespace_is_idempotent() {
        let once = scrub_whitespace("  a \n b ");
        assert_eq!(scrub_whitespace(&once), once);
    }

    #[test]
    fn sanitize_phone_strips_punctuation_and_country_prefix() {
        assert_eq!(sanitize_phone("1-215-555-1234"), "2155551234");
        assert_eq!(sanitize_phone("(215) 555-1234"), "2155551234");
    }

    #[test]
    fn sanitize_phone_drops_only_one_leading_one() {
        // The `1` in the area code survives.
        assert_eq!(sanitize_phone("1-123-555-1234"), "1235551234");
    }

    #[test]
    fn sanitize_phone_is_idempotent() {
        // A cleaned number no longer starts with the country prefix.
        assert_eq!(sanitize_phone("2155551234"), "2155551234");
    }

    #[test]
    fn sanitize_email_strips_illegal_characters() {
        assert_eq!(
            sanitize_email(" voter(name)@phila.gov \n"),
            "votername@phila.gov"
        );
    }

    #[test]
    fn sanitize_text_removes_control_characters() {
        assert_eq!(sanitize_text("  Ward\x07 5  "), "Ward 5");
    }

    #[test]
    fn sanitize_key_lowercases_and_filters() {
        assert_eq!(sanitize_key("Contact Form-1!"), "contactform-1");
    }
}

//! US state and territory combo data.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the validation pipeline and any admin-facing form rendering.

/// Two-letter USPS codes: the 50 states, DC, and the inhabited territories.
pub const US_STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "GU",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI",
    "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND",
    "MP", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "VI", "WA", "WV", "WI", "WY", "AS",
];

/// Check whether a value is a known state/territory code.
pub fn is_valid_state_code(code: &str) -> bool {
    US_STATE_CODES.contains(&code)
}

//! Skeleton placeholder formatting for not-yet-available tile fields
//!
//! A skeleton is a fixed-pattern filler string shown in place of a field
//! value that has not loaded. Callers pass a symbolic size token and get
//! back a string of filler characters whose shape (length and word
//! boundaries) matches a canned phrase for that token.
//!
//! # Tokens
//!
//! - Numeric magnitudes: `"1"`, `"10"`, `"100"`, `"1000"`, `"100000"`
//! - Prose lengths: `"short"`, `"medium"`, `"long"`
//! - Line counts: `"1line"`, `"2lines"`, `"4lines"`
//!
//! Unknown tokens are not an error: the token text itself becomes the
//! phrase, so the result degrades to a filler string of the token's shape.

/// Character used to mask placeholder phrases
pub const FILLER: char = 'x';

/// Token for a title-sized placeholder
pub const MEDIUM: &str = "medium";
/// Token for a link-sized placeholder
pub const LONG: &str = "long";
/// Token for a four-digit-number-sized placeholder
pub const THOUSAND: &str = "1000";

/// Map a size token to its canned phrase
///
/// Only a couple of tokens carry a dedicated phrase; every other token
/// stands in for itself.
fn phrase(token: &str) -> &str {
    match token {
        "medium" => "medium title",
        "long" => "long placeholder format",
        _ => token,
    }
}

/// Build the placeholder string for a size token
///
/// Every non-space character of the phrase is replaced with [`FILLER`];
/// spaces survive, so the result keeps the phrase's length and word
/// boundaries.
#[must_use]
pub fn placeholder(token: &str) -> String {
    phrase(token)
        .chars()
        .map(|c| if c == ' ' { c } else { FILLER })
        .collect()
}

//! Text normalization for matching.
//!
//! Canonical form: lowercase ASCII letters and digits separated by single
//! spaces. Every other character becomes a space before whitespace collapses.

/// Normalize raw user text into the canonical matching form.
///
/// Lowercases, replaces every character that is not a lowercase ASCII letter,
/// digit, or whitespace with a space, collapses whitespace runs to a single
/// space, and trims. Total over arbitrary strings and idempotent.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize text: normalize, then split on spaces.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(String::from)
        .collect()
}

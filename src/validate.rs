//! Character-set predicates for user-supplied text.
//!
//! All predicates are vacuously true for the empty string. Callers that
//! require a non-empty value must check that separately.

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;

/// Returns true if every character is an ASCII letter, digit, `_`, `-` or `:`.
#[must_use]
pub fn is_token(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':'))
}

/// Returns true if every character is an ASCII letter, digit or `_`.
#[must_use]
pub fn is_target(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if every character is printable ASCII.
///
/// Printable means visible ASCII (`!` through `~`) plus the whitespace
/// characters space, tab, newline, carriage return, vertical tab and
/// form feed. Control characters and anything outside ASCII are rejected.
#[must_use]
pub fn is_printable(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
    })
}

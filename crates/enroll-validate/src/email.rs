//! Email format validation.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Basic structural email check: local part, `@`, dotted domain with an
/// alphabetic top-level segment of at least two characters.
pub fn is_valid_email(email: &str) -> bool {
    let pattern = EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    });
    pattern.is_match(email.trim())
}

//! Field composition helpers.

/// Canonical identifier string: numeric body, hyphen, uppercased check
/// character.
pub fn compose_run(body: &str, check: &str) -> String {
    format!("{}-{}", body.trim(), check.trim().to_uppercase())
}

/// Course code: grade indicator followed by the section letter.
pub fn compose_course(grade: &str, letter: &str) -> String {
    format!("{}{}", grade.trim(), letter.trim())
}

/// Full address: cleaned street address, comma, locality name.
pub fn compose_full_address(street: &str, locality: &str) -> String {
    format!("{street}, {locality}")
}

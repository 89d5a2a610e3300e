//! Grade code to level label table.

/// Grade codes as they appear in the enrollment export, from pre-kinder
/// through the final secondary year.
pub const GRADE_LEVELS: [(&str, &str); 14] = [
    ("PK", "Pre-Kinder"),
    ("K", "Kinder"),
    ("1", "1º Básico"),
    ("2", "2º Básico"),
    ("3", "3º Básico"),
    ("4", "4º Básico"),
    ("5", "5º Básico"),
    ("6", "6º Básico"),
    ("7", "7º Básico"),
    ("8", "8º Básico"),
    ("1M", "1º Medio"),
    ("2M", "2º Medio"),
    ("3M", "3º Medio"),
    ("4M", "4º Medio"),
];

/// Resolve a grade code to its level label.
pub fn grade_level(code: &str) -> Option<&'static str> {
    let trimmed = code.trim();
    GRADE_LEVELS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(trimmed))
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_14_levels() {
        assert_eq!(GRADE_LEVELS.len(), 14);
    }

    #[test]
    fn resolves_basic_and_media() {
        assert_eq!(grade_level("7"), Some("7º Básico"));
        assert_eq!(grade_level("pk"), Some("Pre-Kinder"));
        assert_eq!(grade_level("4M"), Some("4º Medio"));
    }

    #[test]
    fn unknown_grade_is_none() {
        assert_eq!(grade_level("9"), None);
        assert_eq!(grade_level(""), None);
    }
}

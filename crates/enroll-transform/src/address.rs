//! Free-text address cleaning.

use regex::Regex;

/// Removes locality stop tokens from free-text addresses.
///
/// Tokens match whole words, case-insensitively; multi-word tokens match
/// across runs of whitespace. Patterns are compiled once per run.
#[derive(Debug)]
pub struct AddressCleaner {
    patterns: Vec<Regex>,
}

impl AddressCleaner {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = tokens
            .into_iter()
            .filter_map(|token| {
                let words: Vec<String> = token
                    .as_ref()
                    .split_whitespace()
                    .map(regex::escape)
                    .collect();
                if words.is_empty() {
                    return None;
                }
                Regex::new(&format!(r"(?i)\b{}\b", words.join(r"\s+"))).ok()
            })
            .collect();
        Self { patterns }
    }

    /// Strip stop tokens, collapse whitespace runs, and trim leading and
    /// trailing punctuation. Interior content and token order are kept.
    pub fn clean(&self, address: &str) -> String {
        let mut cleaned = address.to_string();
        for pattern in &self.patterns {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }
        let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
        collapsed
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '.' | ':' | '-'))
            .to_string()
    }
}

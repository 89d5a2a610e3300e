//! National identifier (RUN) validation.
//!
//! A RUN is a numeric body plus one check character. Regular identifiers
//! carry a modulo-11 check digit. Bodies in the two reserved hundred-million
//! ranges are provisional identifiers (IPE) issued to students without a
//! definitive national identity document; they carry no real check digit and
//! are accepted unconditionally.

use serde::{Deserialize, Serialize};

/// Identifier classification, a pure function of the numeric body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunClass {
    Regular,
    Provisional,
}

/// Result of validating one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunValidation {
    pub class: RunClass,
    pub valid: bool,
    /// Always `"{body}-{CHECK}"` with the check character uppercased.
    pub canonical: String,
}

const PROVISIONAL_RANGES: [(u64, u64); 2] =
    [(100_000_000, 199_999_999), (200_000_000, 299_999_999)];

/// Classify a numeric body as regular or provisional.
pub fn classify(body: u64) -> RunClass {
    let provisional = PROVISIONAL_RANGES
        .iter()
        .any(|&(low, high)| (low..=high).contains(&body));
    if provisional {
        RunClass::Provisional
    } else {
        RunClass::Regular
    }
}

/// Expected check character for a regular identifier body.
///
/// Weights 2..=7 cycle over the decimal digits from least-significant to
/// most-significant; the remainder maps 11 to `0` and 10 to `K`.
pub fn check_character(body: u64) -> char {
    const WEIGHTS: [u64; 6] = [2, 3, 4, 5, 6, 7];
    let mut remaining = body;
    let mut sum = 0u64;
    let mut index = 0usize;
    loop {
        sum += (remaining % 10) * WEIGHTS[index % WEIGHTS.len()];
        remaining /= 10;
        index += 1;
        if remaining == 0 {
            break;
        }
    }
    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        digit => char::from_digit(digit as u32, 10).unwrap_or('0'),
    }
}

/// Validate a body / check-character pair.
///
/// Never fails: an invalid regular identifier reports `valid = false` and
/// the canonical string is produced either way.
pub fn validate(body: u64, check: char) -> RunValidation {
    let check = check.to_ascii_uppercase();
    let class = classify(body);
    let valid = match class {
        RunClass::Provisional => true,
        RunClass::Regular => check == check_character(body),
    };
    RunValidation {
        class,
        valid,
        canonical: format!("{body}-{check}"),
    }
}

/// Parse an identifier string into (body, check character).
///
/// Accepts `12345678-5`, dotted `12.345.678-5` and a bare trailing check
/// character, lowercase included. The check character itself is not judged
/// here; provisional identifiers may carry any letter, and [`validate`]
/// decides whether it holds up. Returns `None` for structurally broken
/// text.
pub fn parse(text: &str) -> Option<(u64, char)> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | '-'))
        .collect::<String>()
        .to_uppercase();
    let check = cleaned.chars().last()?;
    if !check.is_ascii_alphanumeric() {
        return None;
    }
    let digits = &cleaned[..cleaned.len() - check.len_utf8()];
    if !(7..=9).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let body = digits.parse().ok()?;
    Some((body, check))
}

/// Parse and validate an identifier string in one step.
pub fn validate_text(text: &str) -> Option<RunValidation> {
    let (body, check) = parse(text)?;
    Some(validate(body, check))
}

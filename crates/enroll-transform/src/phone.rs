//! Contact-number normalization.

/// Outcome of normalizing one phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneOutcome {
    /// Field was empty; the target value is 0.
    Empty,
    /// Nine digits starting with 9.
    Mobile(u32),
    /// Any other shape; carries the best-effort digit value.
    Invalid { digits: u32 },
}

impl PhoneOutcome {
    /// The integer written to the output field regardless of validity.
    pub fn value(self) -> u32 {
        match self {
            PhoneOutcome::Empty => 0,
            PhoneOutcome::Mobile(value) | PhoneOutcome::Invalid { digits: value } => value,
        }
    }
}

/// Normalize a raw phone field.
///
/// A trailing `.0…` decimal suffix (spreadsheet float notation) is dropped,
/// then every non-digit character. Never fails; malformed input is reported
/// through [`PhoneOutcome::Invalid`] with whatever digits survived.
pub fn format_phone(raw: &str) -> PhoneOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PhoneOutcome::Empty;
    }
    let digits: String = strip_decimal_suffix(trimmed)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.len() == 9 && digits.starts_with('9') {
        if let Ok(value) = digits.parse::<u32>() {
            return PhoneOutcome::Mobile(value);
        }
    }
    PhoneOutcome::Invalid {
        digits: digits.parse().unwrap_or(0),
    }
}

fn strip_decimal_suffix(value: &str) -> &str {
    match value.split_once('.') {
        Some((head, tail)) if !head.is_empty() && !tail.is_empty() => {
            if tail.chars().all(|c| c == '0') {
                head
            } else {
                value
            }
        }
        _ => value,
    }
}

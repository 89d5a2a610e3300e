use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A data-quality issue found while transforming one row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Zero-based data row index (header excluded).
    pub row: usize,
    /// Field the issue was detected in.
    pub field: String,
    /// Offending raw value.
    pub value: String,
    /// Human-readable message describing the issue.
    pub message: String,
    /// Severity level.
    pub severity: IssueSeverity,
}

/// Append-only collection of issues for a whole run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn record(
        &mut self,
        row: usize,
        field: &str,
        value: &str,
        message: impl Into<String>,
        severity: IssueSeverity,
    ) {
        self.issues.push(ValidationIssue {
            row,
            field: field.to_string(),
            value: value.to_string(),
            message: message.into(),
            severity,
        });
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter()
    }
}

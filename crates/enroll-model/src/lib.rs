pub mod config;
pub mod error;
pub mod frame;
pub mod issue;
pub mod record;

pub use config::TransformConfig;
pub use error::{FrameError, Result};
pub use frame::Frame;
pub use issue::{IssueSeverity, ValidationIssue, ValidationReport};
pub use record::{OUTPUT_COLUMNS, OutputRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_by_severity() {
        let mut report = ValidationReport::new();
        report.record(
            0,
            "estudianteRun",
            "12345678-9",
            "invalid check digit",
            IssueSeverity::Error,
        );
        report.record(
            2,
            "Comuna",
            "9999",
            "unmapped locality code",
            IssueSeverity::Warning,
        );
        assert_eq!(report.len(), 2);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn report_serializes() {
        let mut report = ValidationReport::new();
        report.record(
            1,
            "tutor1Email",
            "not-an-email",
            "invalid email format",
            IssueSeverity::Warning,
        );
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.issues.len(), 1);
        assert_eq!(round.issues[0].row, 1);
        assert_eq!(round.issues[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn default_config_matches_run_defaults() {
        let config = TransformConfig::default();
        assert_eq!(config.rbd, 574);
        assert_eq!(config.year, 2025);
        assert_eq!(config.local, "Principal");
        assert!(config.validate_run);
        assert!(config.validate_email);
    }

    #[test]
    fn skip_validation_disables_both_toggles() {
        let config = TransformConfig::default().skip_validation();
        assert!(!config.validate_run);
        assert!(!config.validate_email);
    }
}

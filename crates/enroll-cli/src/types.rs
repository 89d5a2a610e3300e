use std::path::PathBuf;

use enroll_model::ValidationReport;

/// What a finished run reports back to the terminal.
#[derive(Debug)]
pub struct RunOutcome {
    pub input_rows: usize,
    pub output_rows: usize,
    pub report: ValidationReport,
    /// Written upload CSV; absent for dry runs and `validate`.
    pub output_path: Option<PathBuf>,
    /// Written JSON issue report; present when issues were found and written.
    pub issue_report_path: Option<PathBuf>,
}

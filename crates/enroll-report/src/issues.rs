use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use enroll_model::{ValidationIssue, ValidationReport};

use crate::error::Result;

/// JSON issue report for a completed run, consumable by downstream
/// tooling. Issue order matches detection order.
#[derive(Debug, Serialize)]
pub struct IssueReport<'a> {
    pub input_rows: usize,
    pub output_rows: usize,
    pub errors: usize,
    pub warnings: usize,
    pub issues: &'a [ValidationIssue],
}

impl<'a> IssueReport<'a> {
    pub fn new(input_rows: usize, output_rows: usize, report: &'a ValidationReport) -> Self {
        Self {
            input_rows,
            output_rows,
            errors: report.error_count(),
            warnings: report.warning_count(),
            issues: &report.issues,
        }
    }
}

pub fn write_issue_report_json(path: &Path, report: &IssueReport<'_>) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    info!(path = %path.display(), issues = report.issues.len(), "wrote issue report");
    Ok(())
}

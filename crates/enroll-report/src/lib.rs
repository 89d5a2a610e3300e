//! Writers for the transformed record set and the issue report.

pub mod csv_out;
pub mod error;
pub mod issues;

pub use csv_out::write_output_csv;
pub use error::ReportError;
pub use issues::{IssueReport, write_issue_report_json};

//! Enrollment data ingestion: CSV loading into the source frame.

pub mod csv_source;
pub mod error;

pub use csv_source::read_enrollment_csv;
pub use error::IngestError;

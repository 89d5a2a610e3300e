//! Enrollment record transformation core.
//!
//! [`Pipeline`] turns a wide source frame into the fixed 29-field upload
//! layout, collecting data-quality issues along the way instead of dropping
//! rows. See the `pipeline` module for the step ordering contract.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineOutput};

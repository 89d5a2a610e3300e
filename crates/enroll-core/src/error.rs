use enroll_model::FrameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source is missing columns the pipeline cannot run without.
    /// Raised before any row is processed.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
    #[error(transparent)]
    Frame(#[from] FrameError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

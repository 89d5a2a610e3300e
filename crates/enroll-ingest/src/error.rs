use enroll_model::FrameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv {path}: {source}")]
    Read { path: String, source: csv::Error },
    #[error(transparent)]
    Frame(#[from] FrameError),
}

pub type Result<T> = std::result::Result<T, IngestError>;

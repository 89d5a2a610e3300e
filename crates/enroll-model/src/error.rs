use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    WidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;

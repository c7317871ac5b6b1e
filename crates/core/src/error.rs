use thiserror::Error;

/// Failure reading or writing the persisted best score.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score file does not hold an integer: {0:?}")]
    Malformed(String),
}

pub type Result<T> = core::result::Result<T, StoreError>;

//! Store error taxonomy.
//!
//! "Not found" is deliberately absent here: lookups return `Option::None`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored content is not a valid collection document.
    #[error("store parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The stored sequence is at `u64::MAX`; no further id can be issued.
    #[error("article id sequence exhausted")]
    SequenceExhausted,
}

pub type Result<T> = std::result::Result<T, StoreError>;

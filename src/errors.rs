use std::{io, path::PathBuf};

/// Shared error type for all disk operations in this crate.
#[derive(thiserror::Error, Debug)]
pub enum DiskError {
    /// File system I/O failure.
    #[error("I/O error while accessing {0}")]
    Io(PathBuf, #[source] io::Error),

    /// A required argument violated the caller contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DiskError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }
}

/// Shared result alias for the crate.
pub type Result<T> = std::result::Result<T, DiskError>;

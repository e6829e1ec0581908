//! Export-subsystem error type.

use thiserror::Error;

/// Errors produced by `wd-export`.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

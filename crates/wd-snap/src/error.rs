//! Snapping-subsystem error type.

use thiserror::Error;

use wd_core::CoreError;

/// Errors produced by `wd-snap`.
#[derive(Debug, Error)]
pub enum SnapError {
    /// The snapping backend (e.g. a directions API client) failed.
    #[error("snapping backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SnapResult<T> = Result<T, SnapError>;

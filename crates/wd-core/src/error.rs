//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.  Libraries in this workspace
//! never log or print; they return these errors and let the calling layer
//! decide whether to abort, skip, or prompt.

use thiserror::Error;

/// The base error type for the `wd-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A latitude/longitude pair outside WGS-84 ranges (or non-finite).
    #[error("coordinate out of range: ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `wd-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;

//! Survey-subsystem error type.

use thiserror::Error;

use wd_core::CoreError;

/// Errors produced by `wd-survey`.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// A structurally valid row whose fields fail validation (bad BSSID,
    /// out-of-range coordinate, empty encryption label).  `line` is
    /// 1-based and counts the header.
    #[error("bad record at line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: CoreError,
    },
}

pub type SurveyResult<T> = Result<T, SurveyError>;

//! Planner-subsystem error type.

use thiserror::Error;

use wd_core::Bssid;

/// Errors produced by `wd-plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Marking a point visited that is not in the remaining set.  This is a
    /// planner invariant violation — a programming-error-class fault, not a
    /// user-facing condition.
    #[error("point {0} not in the remaining set")]
    PointNotFound(Bssid),
}

pub type PlanResult<T> = Result<T, PlanError>;

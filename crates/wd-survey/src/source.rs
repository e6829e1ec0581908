//! The `CandidateSource` trait implemented by all candidate providers.

use wd_core::TargetPoint;

use crate::{SurveyQuery, SurveyResult};

/// A provider of candidate target points.
///
/// Implementations apply the query filter themselves, so the planner only
/// ever sees points worth visiting.  Duplicate BSSIDs may pass through —
/// deduplication is the point store's job.
pub trait CandidateSource {
    /// Fetch all candidates matching `query`.
    fn fetch(&self, query: &SurveyQuery) -> SurveyResult<Vec<TargetPoint>>;
}

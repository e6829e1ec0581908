//! The `PointStore` — immutable candidate set plus visited bookkeeping.

use rustc_hash::FxHashSet;

use wd_core::{Bssid, Coordinate, TargetPoint};

use crate::{PlanError, PlanResult};

/// Holds the start coordinate and the candidate points for one planning run.
///
/// The candidate list is fixed at load time: deduplicated by BSSID (first
/// occurrence wins, load order preserved), then truncated to `max_points`.
/// Planning only flips per-point visited flags — the points themselves are
/// never mutated, so a run cannot corrupt its input.
///
/// Coordinate validity is a type-level invariant of [`Coordinate`], so the
/// store never holds an out-of-range point; rejection happens where raw
/// floats enter the system.
pub struct PointStore {
    start: Coordinate,
    points: Vec<TargetPoint>,
    visited: Vec<bool>,
    remaining: usize,
}

impl PointStore {
    /// Build a store from upstream candidate data.
    ///
    /// `max_points` caps the candidate count by keeping the first entries in
    /// the order received — ordering is the data source's concern (typically
    /// already sorted by proximity or signal).
    pub fn load(
        start: Coordinate,
        points: impl IntoIterator<Item = TargetPoint>,
        max_points: Option<usize>,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let mut kept: Vec<TargetPoint> = Vec::new();
        for p in points {
            if seen.insert(p.bssid) {
                kept.push(p);
            }
        }
        if let Some(cap) = max_points {
            kept.truncate(cap);
        }

        let n = kept.len();
        Self {
            start,
            points: kept,
            visited: vec![false; n],
            remaining: n,
        }
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Total candidate count (visited or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.remaining
    }

    /// Not-yet-visited points, in load order.
    pub fn remaining(&self) -> impl Iterator<Item = &TargetPoint> {
        self.points
            .iter()
            .zip(&self.visited)
            .filter(|&(_, &v)| !v)
            .map(|(p, _)| p)
    }

    /// Look up a candidate by BSSID, visited or not.
    pub fn get(&self, bssid: Bssid) -> Option<&TargetPoint> {
        self.points.iter().find(|p| p.bssid == bssid)
    }

    /// Remove `bssid` from the remaining set.
    ///
    /// # Errors
    ///
    /// `PlanError::PointNotFound` if the point was never loaded or is
    /// already visited — under correct planner use this never happens.
    pub fn mark_visited(&mut self, bssid: Bssid) -> PlanResult<()> {
        match self.points.iter().position(|p| p.bssid == bssid) {
            Some(i) if !self.visited[i] => {
                self.visited[i] = true;
                self.remaining -= 1;
                Ok(())
            }
            _ => Err(PlanError::PointNotFound(bssid)),
        }
    }
}

//! Planner trait and the greedy nearest-neighbor implementation.
//!
//! # Pluggability
//!
//! Callers drive planning through the [`RoutePlanner`] trait, so a stronger
//! heuristic (2-opt local search, a real TSP solver) can replace
//! [`GreedyPlanner`] without touching the store or the distance function —
//! the selection step is the sole substitution point.
//!
//! # Determinism
//!
//! Candidate distances within [`DISTANCE_EPSILON_KM`] of each other count as
//! a tie and are resolved by the lower BSSID.  Repeated runs over the same
//! input therefore produce byte-identical routes.

use std::cmp::Ordering;

use wd_core::{Bssid, Coordinate, TargetPoint, km_to_miles};

use crate::PlanResult;
use crate::store::PointStore;

/// Distances closer than this (km) are treated as equal for tie-breaking.
pub const DISTANCE_EPSILON_KM: f64 = 1e-9;

// ── PlannedRoute ──────────────────────────────────────────────────────────────

/// The result of a planning run: the visiting order plus the straight-line
/// distance accumulated over it.  Read-only once returned.
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    start: Coordinate,
    stops: Vec<TargetPoint>,
    total_km: f64,
}

impl PlannedRoute {
    /// Assemble a finished route.  Exposed so alternative [`RoutePlanner`]
    /// implementations outside this crate can produce one.
    pub fn new(start: Coordinate, stops: Vec<TargetPoint>, total_km: f64) -> Self {
        Self {
            start,
            stops,
            total_km,
        }
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Visited points in visiting order.
    #[inline]
    pub fn stops(&self) -> &[TargetPoint] {
        &self.stops
    }

    /// Accumulated straight-line distance in kilometres.
    #[inline]
    pub fn total_km(&self) -> f64 {
        self.total_km
    }

    #[inline]
    pub fn total_miles(&self) -> f64 {
        km_to_miles(self.total_km)
    }

    /// `true` if nothing was visited (a valid "nothing found nearby" result).
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.stops.is_empty()
    }

    /// Start coordinate followed by every stop coordinate, in visiting
    /// order.  Always `1 + stops().len()` entries — the waypoint contract
    /// handed to road-snapping.
    pub fn waypoints(&self) -> Vec<Coordinate> {
        std::iter::once(self.start)
            .chain(self.stops.iter().map(|p| p.pos))
            .collect()
    }
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable route planner.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a planner can be shared across
/// worker threads by interactive callers running independent queries.
pub trait RoutePlanner: Send + Sync {
    /// Consume the store's remaining set and produce a visiting order.
    ///
    /// An empty candidate set yields a trivial route (start only, zero
    /// distance), not an error.
    fn plan(&self, store: &mut PointStore) -> PlanResult<PlannedRoute>;
}

// ── GreedyPlanner ─────────────────────────────────────────────────────────────

/// Greedy nearest-neighbor: repeatedly visit the closest remaining point.
///
/// O(n²) in the candidate count — each of n steps scans the remaining set.
/// Acceptable because candidate counts are bounded by the store's
/// `max_points` cap; a spatial index would only pay off well beyond that
/// scale and would complicate the tie-break contract.
///
/// With the `parallel` feature, steps over at least `parallel_threshold`
/// remaining candidates compute distances on Rayon workers followed by a
/// single-threaded argmin, so selection semantics are identical in both
/// paths.
pub struct GreedyPlanner {
    /// Remaining-candidate count at which the distance pass goes parallel.
    pub parallel_threshold: usize,
}

impl Default for GreedyPlanner {
    fn default() -> Self {
        Self {
            parallel_threshold: 512,
        }
    }
}

impl RoutePlanner for GreedyPlanner {
    fn plan(&self, store: &mut PointStore) -> PlanResult<PlannedRoute> {
        let start = store.start();
        let mut current = start;
        let mut stops = Vec::with_capacity(store.remaining_count());
        let mut total_km = 0.0;

        while store.remaining_count() > 0 {
            let Some((dist, bssid, pos)) = self.nearest(store, current) else {
                break;
            };

            // Clone before the visited flag flips; the store keeps ownership.
            let point = store
                .get(bssid)
                .cloned()
                .ok_or(crate::PlanError::PointNotFound(bssid))?;
            store.mark_visited(bssid)?;

            total_km += dist;
            stops.push(point);
            current = pos;
        }

        Ok(PlannedRoute::new(start, stops, total_km))
    }
}

impl GreedyPlanner {
    /// One greedy step: the remaining point nearest to `from`, with its
    /// distance.  `None` when nothing remains.
    fn nearest(&self, store: &PointStore, from: Coordinate) -> Option<(f64, Bssid, Coordinate)> {
        self.score(store, from)
            .into_iter()
            .min_by(|a, b| Self::closer(a, b))
    }

    /// Distance from `from` to every remaining point.
    fn score(&self, store: &PointStore, from: Coordinate) -> Vec<(f64, Bssid, Coordinate)> {
        #[cfg(feature = "parallel")]
        if store.remaining_count() >= self.parallel_threshold {
            use rayon::prelude::*;

            let pts: Vec<(Bssid, Coordinate)> =
                store.remaining().map(|p| (p.bssid, p.pos)).collect();
            return pts
                .into_par_iter()
                .map(|(bssid, pos)| (from.distance_km(pos), bssid, pos))
                .collect();
        }

        store
            .remaining()
            .map(|p| (from.distance_km(p.pos), p.bssid, p.pos))
            .collect()
    }

    /// Argmin order: distance first; ties within [`DISTANCE_EPSILON_KM`]
    /// fall back to the lower BSSID.
    fn closer(a: &(f64, Bssid, Coordinate), b: &(f64, Bssid, Coordinate)) -> Ordering {
        if (a.0 - b.0).abs() <= DISTANCE_EPSILON_KM {
            a.1.cmp(&b.1)
        } else {
            a.0.total_cmp(&b.0)
        }
    }
}

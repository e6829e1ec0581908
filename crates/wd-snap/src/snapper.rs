//! Snapper trait and the snapped-path type.

use wd_core::Coordinate;

use crate::SnapResult;

/// A path following real roads (or an offline approximation of one),
/// denser than the waypoint list it was snapped from.
#[derive(Debug, Clone)]
pub struct SnappedPath {
    /// Coordinate sequence from the first waypoint to the last.
    pub points: Vec<Coordinate>,
}

impl SnappedPath {
    /// Total path length in kilometres (haversine over consecutive points).
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_km(w[1]))
            .sum()
    }

    /// `true` for paths of zero or one point.
    pub fn is_trivial(&self) -> bool {
        self.points.len() < 2
    }
}

/// Turns an ordered waypoint list into a drivable path.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one snapper instance can serve
/// concurrent planning queries.
pub trait RouteSnapper: Send + Sync {
    /// Snap `waypoints` to a path.  Fewer than two waypoints snap to
    /// themselves.
    fn snap(&self, waypoints: &[Coordinate]) -> SnapResult<SnappedPath>;
}

//! Waypoint chunking for request-size-limited snapping backends.
//!
//! Directions-style APIs cap waypoints per request (25 for Mapbox).  Longer
//! routes are snapped in overlapping chunks — the last waypoint of one chunk
//! is the first of the next — then stitched with the duplicated seam point
//! dropped.

use wd_core::Coordinate;

use crate::snapper::{RouteSnapper, SnappedPath};
use crate::SnapResult;

/// Waypoint cap per snapping request.
pub const MAX_WAYPOINTS_PER_CHUNK: usize = 25;

/// Snap `waypoints` through `snapper` in chunks of at most
/// [`MAX_WAYPOINTS_PER_CHUNK`].
pub fn snap_chunked(
    snapper: &dyn RouteSnapper,
    waypoints: &[Coordinate],
) -> SnapResult<SnappedPath> {
    snap_chunked_with(snapper, waypoints, MAX_WAYPOINTS_PER_CHUNK)
}

/// As [`snap_chunked`] with an explicit chunk size (at least 2, so every
/// chunk contains a real leg).
pub fn snap_chunked_with(
    snapper: &dyn RouteSnapper,
    waypoints: &[Coordinate],
    chunk_size: usize,
) -> SnapResult<SnappedPath> {
    debug_assert!(chunk_size >= 2, "chunk size must hold at least one leg");

    if waypoints.len() <= chunk_size {
        return snapper.snap(waypoints);
    }

    let mut points: Vec<Coordinate> = Vec::new();
    let mut i = 0;
    while i + 1 < waypoints.len() {
        let end = (i + chunk_size).min(waypoints.len());
        let snapped = snapper.snap(&waypoints[i..end])?;

        if points.is_empty() {
            points.extend(snapped.points);
        } else {
            // The chunk's first snapped point repeats the seam waypoint.
            points.extend(snapped.points.into_iter().skip(1));
        }

        i = end - 1; // overlap by one waypoint
    }

    Ok(SnappedPath { points })
}

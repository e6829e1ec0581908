//! Offline snapper: straight legs, optionally densified.

use wd_core::Coordinate;

use crate::snapper::{RouteSnapper, SnappedPath};
use crate::SnapResult;

/// Connects waypoints with straight segments, inserting interpolated points
/// every `segment_km` so map rendering stays smooth without a directions
/// service.  Interpolation is linear in lat/lon — wardriving areas are
/// local, so no antimeridian handling.
pub struct StraightLineSnapper {
    /// Maximum spacing between emitted points, in kilometres.
    /// Zero or negative disables densification.
    pub segment_km: f64,
}

impl Default for StraightLineSnapper {
    fn default() -> Self {
        Self { segment_km: 0.25 }
    }
}

impl RouteSnapper for StraightLineSnapper {
    fn snap(&self, waypoints: &[Coordinate]) -> SnapResult<SnappedPath> {
        if waypoints.len() < 2 {
            return Ok(SnappedPath {
                points: waypoints.to_vec(),
            });
        }

        let mut points = vec![waypoints[0]];
        for leg in waypoints.windows(2) {
            self.densify(leg[0], leg[1], &mut points)?;
        }
        Ok(SnappedPath { points })
    }
}

impl StraightLineSnapper {
    /// Emit interpolated points along `a → b` (excluding `a`, including `b`).
    fn densify(&self, a: Coordinate, b: Coordinate, out: &mut Vec<Coordinate>) -> SnapResult<()> {
        let leg_km = a.distance_km(b);
        let steps = if self.segment_km > 0.0 {
            (leg_km / self.segment_km).ceil() as usize
        } else {
            1
        }
        .max(1);

        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let lat = a.lat() + (b.lat() - a.lat()) * t;
            let lon = a.lon() + (b.lon() - a.lon()) * t;
            out.push(Coordinate::new(lat, lon)?);
        }
        Ok(())
    }
}

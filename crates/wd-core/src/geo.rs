//! Geographic coordinate type and the single distance function.
//!
//! `Coordinate` stores `f64` latitude/longitude and can only be built
//! through [`Coordinate::new`], which enforces the WGS-84 ranges — a value
//! that exists is in range.  Every distance in the workspace, whether for
//! nearest-neighbor selection or total-distance accumulation, goes through
//! [`Coordinate::distance_km`] so the two purposes can never disagree.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Mean Earth radius in kilometres (IUGG R1).
const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// Kilometres per statute mile.
pub const KM_PER_MILE: f64 = 1.609_344;

/// Convert kilometres to statute miles.
#[inline]
pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

/// A validated WGS-84 coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Construct a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> CoreResult<Self> {
        let in_range = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !in_range {
            return Err(CoreError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Non-negative, symmetric, and zero iff both coordinates are equal
    /// (within floating-point tolerance).
    pub fn distance_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = CoreError;

    /// Parses `"lat,lon"` (e.g. `"36.1699,-115.1398"`), the same input
    /// format the planner's start location has always used.
    fn from_str(s: &str) -> CoreResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| CoreError::Parse(format!("expected \"lat,lon\", got {s:?}")))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| CoreError::Parse(format!("bad latitude in {s:?}")))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| CoreError::Parse(format!("bad longitude in {s:?}")))?;
        Coordinate::new(lat, lon)
    }
}

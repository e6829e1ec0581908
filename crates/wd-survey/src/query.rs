//! The candidate filter every source applies before handing points to the
//! planner: radius around the start, signal floor, encryption class.

use std::fmt;
use std::str::FromStr;

use wd_core::{Coordinate, CoreError, Encryption, TargetPoint};

/// Which encryption classes a survey run targets.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum EncryptionFilter {
    Open,
    Secure,
    #[default]
    Both,
}

impl EncryptionFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            EncryptionFilter::Open => "open",
            EncryptionFilter::Secure => "secure",
            EncryptionFilter::Both => "both",
        }
    }

    /// `true` if a network with `encryption` passes this filter.
    #[inline]
    pub fn admits(self, encryption: Encryption) -> bool {
        match self {
            EncryptionFilter::Open => encryption == Encryption::Open,
            EncryptionFilter::Secure => encryption == Encryption::Secure,
            EncryptionFilter::Both => true,
        }
    }
}

impl fmt::Display for EncryptionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncryptionFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(EncryptionFilter::Open),
            "secure" => Ok(EncryptionFilter::Secure),
            "both" => Ok(EncryptionFilter::Both),
            other => Err(CoreError::Parse(format!(
                "network type must be open, secure, or both (got {other:?})"
            ))),
        }
    }
}

/// Parameters of one candidate search.
#[derive(Debug, Clone)]
pub struct SurveyQuery {
    /// Center of the search — normally the route's start coordinate.
    pub center: Coordinate,
    pub radius_km: f64,
    /// Networks weaker than this are dropped (dBm; `i16::MIN` disables).
    pub min_signal_dbm: i16,
    pub encryption: EncryptionFilter,
}

impl SurveyQuery {
    /// Query with no signal floor and both encryption classes admitted.
    pub fn new(center: Coordinate, radius_km: f64) -> Self {
        Self {
            center,
            radius_km,
            min_signal_dbm: i16::MIN,
            encryption: EncryptionFilter::Both,
        }
    }

    /// `true` if `point` passes the radius, signal, and encryption checks.
    ///
    /// The radius check uses the same haversine as the planner, so "within
    /// 5 km" here and "5 km of driving legs" there agree on geometry.
    pub fn matches(&self, point: &TargetPoint) -> bool {
        point.signal_dbm >= self.min_signal_dbm
            && self.encryption.admits(point.encryption)
            && self.center.distance_km(point.pos) <= self.radius_km
    }
}

//! Target point — one discovered Wi-Fi network.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::geo::Coordinate;
use crate::ids::Bssid;

/// Wi-Fi security classification, as coarse as route planning needs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encryption {
    /// No authentication required.
    Open,
    /// Anything with authentication (WEP, WPA, WPA2, WPA3, …).
    Secure,
}

impl Encryption {
    pub fn as_str(self) -> &'static str {
        match self {
            Encryption::Open => "open",
            Encryption::Secure => "secure",
        }
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encryption {
    type Err = CoreError;

    /// Survey exports label security many ways (`wep`, `wpa2`, vendor
    /// strings…).  Only the open-network labels map to [`Encryption::Open`];
    /// any other non-empty label is treated as secure.
    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(CoreError::Parse("empty encryption label".into())),
            "open" | "none" | "free" => Ok(Encryption::Open),
            _ => Ok(Encryption::Secure),
        }
    }
}

/// One discovered Wi-Fi network: position plus the metadata the planner and
/// exporters care about.  Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetPoint {
    pub bssid: Bssid,
    /// Broadcast network name, if any (hidden networks have none).
    pub ssid: Option<String>,
    pub pos: Coordinate,
    /// Received signal strength in dBm (typically negative).
    pub signal_dbm: i16,
    pub encryption: Encryption,
}

impl TargetPoint {
    pub fn new(bssid: Bssid, pos: Coordinate, signal_dbm: i16, encryption: Encryption) -> Self {
        Self {
            bssid,
            ssid: None,
            pos,
            signal_dbm,
            encryption,
        }
    }

    /// Attach a broadcast SSID.
    pub fn with_ssid(mut self, ssid: impl Into<String>) -> Self {
        self.ssid = Some(ssid.into());
        self
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.encryption == Encryption::Open
    }
}

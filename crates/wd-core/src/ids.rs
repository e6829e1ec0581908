//! The network identifier.
//!
//! A BSSID is a 48-bit IEEE 802 MAC address; storing it in a `u64` keeps it
//! `Copy + Ord + Hash` so it works as a map key without ceremony.  The total
//! order on the inner integer doubles as the documented tie-break order when
//! two candidates are equidistant: the lower address wins.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A 48-bit MAC address stored in the low bits of a `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bssid(pub u64);

impl Bssid {
    /// The six address octets, most significant first.
    pub fn octets(self) -> [u8; 6] {
        let b = self.0.to_be_bytes();
        [b[2], b[3], b[4], b[5], b[6], b[7]]
    }
}

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.octets();
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

impl FromStr for Bssid {
    type Err = CoreError;

    /// Accepts six hex octets separated by `:` or `-` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CoreError> {
        let bad = || CoreError::Parse(format!("bad BSSID {s:?}"));

        let mut raw: u64 = 0;
        let mut count = 0;
        for part in s.split(|c| c == ':' || c == '-') {
            if part.len() != 2 {
                return Err(bad());
            }
            let octet = u8::from_str_radix(part, 16).map_err(|_| bad())?;
            raw = (raw << 8) | u64::from(octet);
            count += 1;
        }
        if count != 6 {
            return Err(bad());
        }
        Ok(Bssid(raw))
    }
}

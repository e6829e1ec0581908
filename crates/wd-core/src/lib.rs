//! `wd-core` — foundational types for the wardrive route planner.
//!
//! This crate is a dependency of every other `wd-*` crate.  It intentionally
//! has no `wd-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`geo`]     | `Coordinate`, haversine distance, mile conversion     |
//! | [`ids`]     | `Bssid` — the network identifier and tie-break order  |
//! | [`target`]  | `TargetPoint`, `Encryption`                           |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod error;
pub mod geo;
pub mod ids;
pub mod target;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, KM_PER_MILE, km_to_miles};
pub use ids::Bssid;
pub use target::{Encryption, TargetPoint};

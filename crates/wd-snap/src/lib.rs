//! `wd-snap` — turning an ordered waypoint list into a drivable path.
//!
//! The planner's output contract (ordered coordinates) is the only coupling
//! surface here: a Directions-API client and the offline straight-line
//! fallback are interchangeable behind [`RouteSnapper`].
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`snapper`] | `RouteSnapper` trait, `SnappedPath`                      |
//! | [`chunk`]   | `snap_chunked` — request-size-limited snapping           |
//! | [`straight`]| `StraightLineSnapper` — offline default                  |
//! | [`error`]   | `SnapError`, `SnapResult<T>`                             |

pub mod chunk;
pub mod error;
pub mod snapper;
pub mod straight;


pub use chunk::{MAX_WAYPOINTS_PER_CHUNK, snap_chunked, snap_chunked_with};
pub use error::{SnapError, SnapResult};
pub use snapper::{RouteSnapper, SnappedPath};
pub use straight::StraightLineSnapper;

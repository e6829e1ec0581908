//! `wd-plan` — the route-ordering core.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`store`]   | `PointStore` — candidate set + visited bookkeeping        |
//! | [`planner`] | `RoutePlanner` trait, `GreedyPlanner`, `PlannedRoute`     |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                              |
//!
//! The planner is single-threaded, synchronous, and does no I/O: it operates
//! purely on the in-memory candidate set and is stateless across invocations.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Per-step distance pass fans out over Rayon workers.      |

pub mod error;
pub mod planner;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use planner::{DISTANCE_EPSILON_KM, GreedyPlanner, PlannedRoute, RoutePlanner};
pub use store::PointStore;

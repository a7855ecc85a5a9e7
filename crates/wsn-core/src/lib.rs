//! `wsn-core` — foundational types for the wsn sensor-network simulator.
//!
//! This crate is a dependency of every other `wsn-*` crate.  It intentionally
//! has no `wsn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `NodeId`, `PoiId`                                 |
//! | [`geom`]    | `Point2`, `Region`, Euclidean distance            |
//! | [`time`]    | `Tick`, `SimClock`                                |
//! | [`rng`]     | `SimRng` (seeded, reproducible)                   |
//! | [`config`]  | `SimConfig`, `ModelParams`                        |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ModelParams, SimConfig};
pub use error::{CoreError, CoreResult};
pub use geom::{Point2, Region};
pub use ids::{NodeId, PoiId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};

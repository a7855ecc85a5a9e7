//! `wsn-sim` — tick loop orchestrator for the sensor network model.
//!
//! # Tick loop
//!
//! ```text
//! per tick (no-op once stopped):
//!   ① Scan      — live nodes claim unclaimed POIs within reach
//!                 (a fresh claim wakes the node and recharges it).
//!   ② Routes    — full BFS routing-table rebuild over live nodes.
//!   ③ Schedule  — sleep/wake criticality pass.
//!   ④ Stop      — any uncovered POI (or no ACTIVE node) ends the run.
//!   ⑤ Energy    — death check, idle drain, failure roll per node.
//!   ⑥ Forward   — 5 s collection cadence, threshold-gated forwarding
//!                 with random transmission loss.
//!   ⑦ Suppress  — redundancy flags recomputed; flagged buffers halved.
//!   ⑧ Stats     — snapshot for observers.
//!   ⑨ Generate  — 1 s cadence, POIs roll for new measurements.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wsn_core::SimConfig;
//! use wsn_sim::{EngineBuilder, NoopObserver};
//!
//! let config = SimConfig::new(40, 8, 120).with_seed(7);
//! let mut engine = EngineBuilder::new(config).build()?;
//! engine.run(10_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod stats;


pub use builder::EngineBuilder;
pub use engine::{Engine, StopReason, COLLECTION_INTERVAL_MILLIS, GENERATION_INTERVAL_MILLIS};
pub use error::{SimError, SimResult};
pub use observer::{EngineObserver, NoopObserver};
pub use stats::TickStats;

//! `wsn-output` — run output writers for the sensor network model.
//!
//! Two writers, both plain files in an output directory:
//!
//! | Writer           | File             | Contents                            |
//! |------------------|------------------|-------------------------------------|
//! | [`SinkLog`]      | `sink_log.txt`   | Sink receipt events + final stats   |
//! | [`StatsCsvWriter`] | `tick_stats.csv` | One [`TickStats`] row per tick    |
//!
//! Both are driven by [`LogObserver`], which implements
//! `wsn_sim::EngineObserver` and stores write errors instead of raising
//! them — a full disk must never stop the simulation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wsn_output::LogObserver;
//!
//! let mut obs = LogObserver::new(Path::new("./output"))?;
//! engine.run(max_ticks, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```
//!
//! [`TickStats`]: wsn_sim::TickStats

pub mod csv;
pub mod error;
pub mod observer;
pub mod sink_log;


pub use csv::StatsCsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LogObserver;
pub use sink_log::SinkLog;

//! Simulation configuration.
//!
//! `SimConfig` carries the three externally supplied inputs (node count, POI
//! count, sensing range) plus the run seed and clock resolution.  The core
//! assumes these are already validated by whatever loaded them;
//! [`SimConfig::validate`] only rejects values it cannot construct a world
//! from at all (zero nodes, zero range).
//!
//! `ModelParams` collects the energy/failure/forwarding constants the model
//! needs.  All of them have defaults; a caller normally tweaks one or two
//! (e.g. `max_loss_fraction`) and leaves the rest.

use crate::error::{CoreError, CoreResult};
use crate::time::SimClock;

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of sensing/relay nodes, including the central sink.
    pub node_count: u32,

    /// Number of points of interest.
    pub poi_count: u32,

    /// Sensing radius of every node, in region units.  The effective
    /// claim/link reach is half of this.
    pub sensing_range: u32,

    /// Master RNG seed.  The same seed always produces identical placement
    /// and identical runs.
    pub seed: u64,

    /// Simulated milliseconds per tick.  Default: 100.
    pub tick_duration_millis: u32,
}

impl SimConfig {
    /// Config with the three external inputs and defaults for the rest.
    pub fn new(node_count: u32, poi_count: u32, sensing_range: u32) -> Self {
        Self {
            node_count,
            poi_count,
            sensing_range,
            seed: 0,
            tick_duration_millis: 100,
        }
    }

    /// Builder-style seed override.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject values no world can be constructed from.  Anything beyond
    /// these floors is the configuration loader's responsibility.
    pub fn validate(&self) -> CoreResult<()> {
        if self.node_count == 0 {
            return Err(CoreError::Config("node count must be positive".into()));
        }
        if self.poi_count == 0 {
            return Err(CoreError::Config("poi count must be positive".into()));
        }
        if self.sensing_range == 0 {
            return Err(CoreError::Config("sensing range must be positive".into()));
        }
        if self.tick_duration_millis == 0 {
            return Err(CoreError::Config("tick duration must be positive".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_millis)
    }

    /// Effective sensing/link reach: half the configured radius.
    #[inline]
    pub fn sensing_reach(&self) -> f32 {
        self.sensing_range as f32 * 0.5
    }
}

// ── ModelParams ───────────────────────────────────────────────────────────────

/// Energy, failure, and forwarding constants of the model.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParams {
    /// Maximum battery level; nodes start full and recharge to this on a
    /// fresh POI claim.
    pub battery_capacity: f32,

    /// Battery subtracted every tick from every non-central, non-terminal
    /// node (ACTIVE and SLEEP alike).
    pub idle_drain: f32,

    /// Battery cost of one receive event (POI collection, or being the
    /// target of a forward).
    pub receive_cost: f32,

    /// Battery cost of one forwarding send.
    pub send_cost: f32,

    /// Per-tick probability of a non-central node dropping into FAILURE.
    /// Suppressed to zero once failed nodes exceed half the active count.
    pub failure_probability: f64,

    /// Upper bound of the uniform per-forward loss fraction.  Policy range
    /// is 0.10–0.20; 0.0 disables loss entirely.
    pub max_loss_fraction: f32,

    /// Minimum buffered packets before a node forwards to its next hop.
    pub forward_threshold: usize,

    /// Probability that a POI generates a measurement at each 1-second
    /// generation event.
    pub generation_probability: f64,

    /// Two buffered readings within this tolerance count as redundant.
    pub redundancy_tolerance: f32,

    /// Neighborhood radius for redundancy suppression.  `None` means "use
    /// the configured sensing range".
    pub redundancy_range: Option<f32>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            battery_capacity:       100.0,
            idle_drain:             0.05,
            receive_cost:           0.5,
            send_cost:              1.0,
            failure_probability:    0.000_5,
            max_loss_fraction:      0.15,
            forward_threshold:      5,
            generation_probability: 0.6,
            redundancy_tolerance:   0.5,
            redundancy_range:       None,
        }
    }
}

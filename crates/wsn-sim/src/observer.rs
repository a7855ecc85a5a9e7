//! Engine observer trait for logging and data collection.

use wsn_core::{NodeId, Tick};
use wsn_world::Measurement;

use crate::engine::StopReason;
use crate::stats::TickStats;

/// Callbacks invoked by [`Engine::tick`][crate::Engine::tick] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The engine never reads anything back
/// from an observer; a failing observer must degrade on its own (fail-soft)
/// rather than interrupt the run.
///
/// # Example — receipt counter
///
/// ```rust,ignore
/// struct ReceiptCounter { packets: usize }
///
/// impl EngineObserver for ReceiptCounter {
///     fn on_sink_receipt(&mut self, _tick: Tick, _from: NodeId, packets: &[Measurement]) {
///         self.packets += packets.len();
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the freshly computed statistics.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called whenever a forwarding event delivers packets to the central
    /// sink.  `from` is the forwarding node; `packets` are the measurements
    /// that survived transmission loss.
    fn on_sink_receipt(&mut self, _tick: Tick, _from: NodeId, _packets: &[Measurement]) {}

    /// Called exactly once, on the tick where the run enters the terminal
    /// stopped state.  `stats` is the last computed snapshot, which the
    /// engine retains afterwards.
    fn on_stop(&mut self, _tick: Tick, _reason: StopReason, _stats: &TickStats) {}
}

/// An [`EngineObserver`] that does nothing.  Use when you need to call
/// `tick` but don't want callbacks.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

//! Per-tick derived statistics.

use wsn_core::Tick;
use wsn_world::{NodeArena, NodeState, PoiArena};

/// Read-only snapshot of the network at the end of one tick.
///
/// Derived, never authoritative: the engine recomputes it from the arenas
/// after every tick and keeps the last one when the run stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickStats {
    pub tick: Tick,
    /// Node counts by state, central included.
    pub active:   usize,
    pub sleeping: usize,
    pub dead:     usize,
    pub failed:   usize,
    /// Mean battery level over ACTIVE nodes (0.0 if none).
    pub avg_active_battery: f32,
    /// Measurements buffered anywhere but the sink: POI buffers plus
    /// non-central node buffers.
    pub packets_in_flight: usize,
    /// Measurements accumulated at the central sink.
    pub sink_packets: usize,
    /// Cumulative count of packets lost in transmission or dropped as
    /// unroutable.
    pub packets_lost: u64,
}

/// Compute the snapshot for the current arenas.
pub fn collect(tick: Tick, nodes: &NodeArena, pois: &PoiArena, lost_total: u64) -> TickStats {
    let mut stats = TickStats {
        tick,
        packets_lost: lost_total,
        ..TickStats::default()
    };

    let mut active_battery = 0.0_f32;
    for (_, node) in nodes.iter() {
        match node.state {
            NodeState::Active => {
                stats.active += 1;
                active_battery += node.battery;
            }
            NodeState::Sleep => stats.sleeping += 1,
            NodeState::Dead => stats.dead += 1,
            NodeState::Failure => stats.failed += 1,
        }
        if node.is_central {
            stats.sink_packets = node.buffer.len();
        } else {
            stats.packets_in_flight += node.buffer.len();
        }
    }
    if stats.active > 0 {
        stats.avg_active_battery = active_battery / stats.active as f32;
    }

    for (_, poi) in pois.iter() {
        stats.packets_in_flight += poi.buffer.len();
    }

    stats
}

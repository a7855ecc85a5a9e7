//! The `Engine` struct and its tick loop.

use wsn_core::{ModelParams, NodeId, SimClock, SimConfig, SimRng, Tick};
use wsn_routing::{apply_routes, build_routes, RoutingTable};
use wsn_world::{Measurement, NodeArena, NodeState, PoiArena};

use crate::observer::EngineObserver;
use crate::stats::{self, TickStats};

/// Simulated milliseconds between POI data-generation events.
pub const GENERATION_INTERVAL_MILLIS: u64 = 1_000;

/// Simulated milliseconds between per-node POI collection events.
pub const COLLECTION_INTERVAL_MILLIS: u64 = 5_000;

// ── StopReason ────────────────────────────────────────────────────────────────

/// Why the run entered the terminal stopped state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StopReason {
    /// At least one POI had no observer.
    CoverageLost,
    /// No node (sink included) was left in ACTIVE state.
    NoActiveNodes,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StopReason::CoverageLost => "coverage lost",
            StopReason::NoActiveNodes => "no active nodes",
        };
        f.write_str(s)
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The main simulation engine.
///
/// Owns all mutable state — node arena, POI arena, routing table — and
/// drives the fixed-order tick loop:
///
/// 1. **Scan**: live nodes claim unclaimed POIs within reach (waking and
///    recharging on a fresh claim).
/// 2. **Routes**: full routing-table rebuild, written back into the arena.
/// 3. **Schedule**: sleep/wake criticality pass.
/// 4. **Stop check**: any uncovered POI (or zero ACTIVE nodes) ends the run;
///    once stopped, `tick` is a no-op forever.
/// 5. **Energy**: per-node death check, idle drain, failure roll.
/// 6. **Collect & forward**: 5-second POI collection cadence, then
///    threshold-gated forwarding along `next_hop` with random loss.
/// 7. **Redundancy**: recompute suppression flags; flagged nodes at
///    forwarding volume drop the older half of their buffer.
/// 8. **Stats**: recompute the [`TickStats`] snapshot.
/// 9. **Generate**: 1-second cadence, each POI rolls for a new measurement.
///
/// Everything within a tick is synchronous and sequential; iteration is in
/// ascending id order, which is the only tie-breaker the model has.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
#[derive(Debug)]
pub struct Engine {
    /// Global configuration (counts, range, seed, tick duration).
    pub config: SimConfig,

    /// Energy/failure/forwarding constants.
    pub params: ModelParams,

    /// Simulation clock — tracks the current tick and maps to simulated
    /// milliseconds.
    pub clock: SimClock,

    /// All nodes, central sink included.  Read-only from the caller's
    /// perspective.
    pub nodes: NodeArena,

    /// All POIs.  Read-only from the caller's perspective.
    pub pois: PoiArena,

    /// Routing table from the most recent rebuild.
    pub routes: RoutingTable,

    pub(crate) rng: SimRng,
    pub(crate) central: NodeId,
    pub(crate) last_generation: Tick,
    pub(crate) lost_total: u64,
    pub(crate) stats: TickStats,
    pub(crate) stopped: Option<StopReason>,
}

impl Engine {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    ///
    /// A no-op once the run has stopped: the clock does not advance and no
    /// observer hooks fire.
    pub fn tick<O: EngineObserver>(&mut self, observer: &mut O) {
        if self.stopped.is_some() {
            return;
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: scan POIs ────────────────────────────────────────────
        self.scan_pois();

        // ── Phase 2: rebuild routes ───────────────────────────────────────
        self.routes = build_routes(&self.nodes, self.central);
        apply_routes(&mut self.nodes, &self.routes);

        // ── Phase 3: sleep schedule ───────────────────────────────────────
        let plan = wsn_schedule::plan(&self.nodes, &self.routes);
        wsn_schedule::apply(&plan, &mut self.nodes);

        // ── Phase 4: coverage-loss check ──────────────────────────────────
        //
        // The last computed stats (previous tick's) are retained for the
        // observer to persist.
        if let Some(reason) = self.stop_condition() {
            self.stopped = Some(reason);
            observer.on_stop(now, reason, &self.stats);
            return;
        }

        // ── Phase 5: energy and failure ───────────────────────────────────
        self.drain_energy();

        // ── Phase 6: collection and forwarding ────────────────────────────
        self.collect_and_forward(now, observer);

        // ── Phase 7: redundancy suppression ───────────────────────────────
        self.mark_redundant();

        // ── Phase 8: statistics ───────────────────────────────────────────
        self.stats = stats::collect(now, &self.nodes, &self.pois, self.lost_total);

        // ── Phase 9: POI data generation ──────────────────────────────────
        self.generate(now);

        observer.on_tick_end(now, &self.stats);
        self.clock.advance();
    }

    /// Run up to `max_ticks` ticks, stopping early if the run terminates.
    /// Returns the tick position after the last processed tick.
    pub fn run<O: EngineObserver>(&mut self, max_ticks: u64, observer: &mut O) -> Tick {
        for _ in 0..max_ticks {
            if self.stopped.is_some() {
                break;
            }
            self.tick(observer);
        }
        self.clock.current_tick
    }

    /// `true` once the run has entered the terminal stopped state.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }

    #[inline]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    /// The central sink node's id.
    #[inline]
    pub fn central(&self) -> NodeId {
        self.central
    }

    /// The statistics snapshot from the most recently completed tick.
    #[inline]
    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    // ── Phase 1: scanning ─────────────────────────────────────────────────

    /// Every live node claims every unclaimed POI strictly within its reach.
    ///
    /// A fresh claim wakes the node and recharges its battery to capacity.
    /// That recharge is a deliberate simplification of wake-up behavior, not
    /// an accounting bug.  Claims are exclusive; sequential id order decides
    /// contested POIs.
    fn scan_pois(&mut self) {
        for id in self.nodes.ids() {
            if !self.nodes.get(id).state.is_live() {
                continue;
            }
            let reach = self.nodes.get(id).reach();
            let position = self.nodes.get(id).position;

            for poi_id in self.pois.ids() {
                let poi = self.pois.get(poi_id);
                if poi.is_observed() || position.distance(poi.position) >= reach {
                    continue;
                }
                self.pois.get_mut(poi_id).observer = Some(id);
                let node = self.nodes.get_mut(id);
                node.observed.push(poi_id);
                node.state = NodeState::Active;
                node.battery = node.capacity;
            }
        }
    }

    // ── Phase 4: stop condition ───────────────────────────────────────────

    fn stop_condition(&self) -> Option<StopReason> {
        if self.pois.iter().any(|(_, poi)| !poi.is_observed()) {
            return Some(StopReason::CoverageLost);
        }
        if !self
            .nodes
            .iter()
            .any(|(_, node)| node.state == NodeState::Active)
        {
            return Some(StopReason::NoActiveNodes);
        }
        None
    }

    // ── Phase 5: energy ───────────────────────────────────────────────────

    /// Per non-terminal, non-central node: death check, then idle drain,
    /// then the failure roll.
    ///
    /// The death check runs before the drain, so a node whose battery hit
    /// exactly zero last tick dies this tick.  Dying releases all POI
    /// claims; FAILURE does not — a failed node falls silent without
    /// telling the network, so its POIs stay nominally covered.
    fn drain_energy(&mut self) {
        // Failure probability is suppressed once failed nodes outnumber half
        // the active ones, to keep the model from collapsing in a cascade.
        // Snapshotted before the loop; deaths this tick don't re-enable it.
        let active = self
            .nodes
            .iter()
            .filter(|(_, n)| n.state == NodeState::Active)
            .count();
        let failed = self
            .nodes
            .iter()
            .filter(|(_, n)| n.state == NodeState::Failure)
            .count();
        let failure_p = if active == 0 || failed as f64 / active as f64 > 0.5 {
            0.0
        } else {
            self.params.failure_probability
        };

        for id in self.nodes.ids() {
            let node = self.nodes.get(id);
            if node.is_central || node.state.is_terminal() {
                continue;
            }

            if node.battery <= 0.0 {
                let node = self.nodes.get_mut(id);
                node.state = NodeState::Dead;
                let released = std::mem::take(&mut node.observed);
                for poi_id in released {
                    self.pois.get_mut(poi_id).observer = None;
                }
                continue;
            }

            self.nodes.get_mut(id).battery -= self.params.idle_drain;

            if failure_p > 0.0 && self.rng.gen_bool(failure_p) {
                self.nodes.get_mut(id).state = NodeState::Failure;
            }
        }
    }

    // ── Phase 6: collection and forwarding ────────────────────────────────

    fn collect_and_forward<O: EngineObserver>(&mut self, now: Tick, observer: &mut O) {
        let collect_every = self.clock.ticks_for_millis(COLLECTION_INTERVAL_MILLIS);

        for id in self.nodes.ids() {
            if self.nodes.get(id).state != NodeState::Active {
                continue;
            }

            // Collection, on the 5-second per-node cadence.  The receive
            // cost applies only when there is something to collect from.
            if (now + 1).since(self.nodes.get(id).last_collection) >= collect_every {
                self.nodes.get_mut(id).last_collection = now + 1;
                let observed = self.nodes.get(id).observed.clone();
                if !observed.is_empty() {
                    // The sink is mains-powered; only battery nodes pay.
                    if !self.nodes.get(id).is_central {
                        self.nodes.get_mut(id).battery -= self.params.receive_cost;
                    }
                    for poi_id in observed {
                        let pulled = std::mem::take(&mut self.pois.get_mut(poi_id).buffer);
                        self.nodes.get_mut(id).buffer.extend(pulled);
                    }
                }
            }

            self.forward(id, now, observer);
        }
    }

    /// Threshold-gated forwarding toward `next_hop`.
    ///
    /// The sink never forwards; a redundancy-flagged node skips this tick
    /// (its buffer was already halved by the suppression pass).  A missing
    /// hop drops the whole buffer as lost; a present-but-inactive hop just
    /// holds the buffer until the hop wakes or routes change.
    fn forward<O: EngineObserver>(&mut self, id: NodeId, now: Tick, observer: &mut O) {
        let node = self.nodes.get(id);
        if node.is_central || node.redundant || node.buffer.len() < self.params.forward_threshold {
            return;
        }

        let Some(hop) = node.next_hop else {
            let node = self.nodes.get_mut(id);
            let dropped = node.buffer.len() as u64;
            node.buffer.clear();
            node.lost_packets += dropped;
            self.lost_total += dropped;
            return;
        };

        if self.nodes.get(hop).state != NodeState::Active {
            return;
        }

        // Clamped so a misconfigured bound above 1.0 caps at total loss
        // instead of overrunning the buffer.
        let max_loss = self.params.max_loss_fraction.clamp(0.0, 1.0);
        let fraction = if max_loss > 0.0 {
            self.rng.gen_range(0.0..=max_loss)
        } else {
            0.0
        };

        let (sender, receiver) = self.nodes.pair_mut(id, hop);
        let lost = (sender.buffer.len() as f32 * fraction) as usize;
        // The oldest `lost` packets vanish in transit; the rest arrive.
        let delivered = sender.buffer.split_off(lost);
        sender.buffer.clear();
        sender.lost_packets += lost as u64;
        self.lost_total += lost as u64;
        sender.battery -= self.params.send_cost;

        if receiver.is_central {
            observer.on_sink_receipt(now, id, &delivered);
        } else {
            receiver.battery -= self.params.receive_cost;
        }
        receiver.buffer.extend(delivered);
    }

    // ── Phase 7: redundancy suppression ───────────────────────────────────

    /// Flag nodes whose latest reading matches at least two live neighbors'
    /// within the tolerance, then halve flagged buffers at forwarding
    /// volume (dropping the older half).  Flags are recomputed from scratch
    /// every tick; they gate the *next* tick's forwarding.
    fn mark_redundant(&mut self) {
        let range = self
            .params
            .redundancy_range
            .unwrap_or(self.config.sensing_range as f32);
        let tolerance = self.params.redundancy_tolerance;

        let flags: Vec<bool> = self
            .nodes
            .iter()
            .map(|(id, node)| {
                if node.is_central || !node.state.is_live() {
                    return false;
                }
                let Some(value) = node.latest_value() else {
                    return false;
                };
                let matching = self
                    .nodes
                    .iter()
                    .filter(|&(other_id, other)| {
                        other_id != id
                            && other.state.is_live()
                            && node.position.distance(other.position) <= range
                            && other
                                .latest_value()
                                .is_some_and(|v| (v - value).abs() <= tolerance)
                    })
                    .count();
                matching >= 2
            })
            .collect();

        for id in self.nodes.ids() {
            let node = self.nodes.get_mut(id);
            node.redundant = flags[id.index()];
            if node.redundant && node.buffer.len() >= self.params.forward_threshold {
                let older_half = node.buffer.len() / 2;
                node.buffer.drain(..older_half);
            }
        }
    }

    // ── Phase 9: generation ───────────────────────────────────────────────

    /// On the 1-second cadence, each POI independently rolls for one new
    /// measurement.
    fn generate(&mut self, now: Tick) {
        let every = self.clock.ticks_for_millis(GENERATION_INTERVAL_MILLIS);
        if (now + 1).since(self.last_generation) < every {
            return;
        }
        self.last_generation = now + 1;

        for poi_id in self.pois.ids() {
            if !self.rng.gen_bool(self.params.generation_probability) {
                continue;
            }
            let (origin, reliability) = {
                let poi = self.pois.get(poi_id);
                (poi.position, poi.reliability)
            };
            let measurement = Measurement {
                value: self.rng.gen_range(0.0..100.0),
                tick: now,
                poi: poi_id,
                origin,
                reliability,
            };
            self.pois.get_mut(poi_id).buffer.push(measurement);
        }
    }
}

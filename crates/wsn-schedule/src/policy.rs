//! The criticality analysis behind the sleep schedule.
//!
//! # Rules, per node, in order
//!
//! 1. DEAD, FAILURE, and the central node are never rescheduled.
//! 2. A node observing at least one POI stays ACTIVE.
//! 3. A node with no own path to the central node that also appears in no
//!    other node's path goes to SLEEP — it can neither deliver nor relay.
//! 4. Otherwise the node is *critical* — and kept/restored ACTIVE — iff it
//!    lies on the path of some other node that currently observes a POI.
//!    Non-critical path members SLEEP too.
//!
//! The decision is computed as a pure [`SleepPlan`] and applied separately,
//! so a recomputation with unchanged inputs provably yields the same
//! assignment.  A sleeping node keeps its stale `next_hop` until the next
//! route rebuild and neither senses nor forwards meanwhile.

use wsn_routing::RoutingTable;
use wsn_world::{NodeArena, NodeState};

// ── SleepPlan ─────────────────────────────────────────────────────────────────

/// Scheduling outcome for one node.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SleepDecision {
    /// Keep/restore the node ACTIVE.
    Active,
    /// Put the node to SLEEP.
    Sleep,
    /// Not eligible for rescheduling (terminal or central).
    Untouched,
}

/// The full per-tick sleep assignment, indexed by `NodeId`.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepPlan {
    decisions: Vec<SleepDecision>,
}

impl SleepPlan {
    pub fn decision(&self, id: wsn_core::NodeId) -> SleepDecision {
        self.decisions[id.index()]
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

// ── Planning ──────────────────────────────────────────────────────────────────

/// Compute the sleep assignment for the current states and routes.
pub fn plan(nodes: &NodeArena, routes: &RoutingTable) -> SleepPlan {
    let n = nodes.len();

    // relay_for[i]: node i appears as an intermediate hop (position >= 1) in
    // some other node's path.
    // critical[i]: node i appears in the path of some *other* node that
    // currently observes a POI.
    let mut relay_for = vec![false; n];
    let mut critical = vec![false; n];
    for (source, path) in routes.routed() {
        let observer = nodes.get(source).observes_any();
        for &member in &path[1..] {
            relay_for[member.index()] = true;
            if observer && member != source {
                critical[member.index()] = true;
            }
        }
    }

    let decisions = nodes
        .iter()
        .map(|(id, node)| {
            if node.state.is_terminal() || node.is_central {
                return SleepDecision::Untouched;
            }
            if node.observes_any() {
                return SleepDecision::Active;
            }
            let i = id.index();
            if !routes.is_routed(id) && !relay_for[i] {
                return SleepDecision::Sleep;
            }
            if critical[i] {
                SleepDecision::Active
            } else {
                SleepDecision::Sleep
            }
        })
        .collect();

    SleepPlan { decisions }
}

/// Apply a plan to the arena.
pub fn apply(plan: &SleepPlan, nodes: &mut NodeArena) {
    for id in nodes.ids() {
        match plan.decision(id) {
            SleepDecision::Active => nodes.get_mut(id).state = NodeState::Active,
            SleepDecision::Sleep => nodes.get_mut(id).state = NodeState::Sleep,
            SleepDecision::Untouched => {}
        }
    }
}

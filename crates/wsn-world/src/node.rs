//! Sensing/relay nodes and their arena.
//!
//! # State machine
//!
//! ```text
//! ACTIVE ──► SLEEP    (scheduling: not needed for coverage or relay)
//! SLEEP  ──► ACTIVE   (scheduling criticality, or a fresh POI claim)
//! ACTIVE ──► DEAD     (battery exhausted; terminal)
//! ACTIVE ──► FAILURE  (random silent fault; terminal)
//! SLEEP  ──► DEAD / FAILURE
//! ```
//!
//! DEAD and FAILURE are terminal for the remainder of the run.  The unique
//! central node is pinned ACTIVE: it never sleeps, never fails, and is exempt
//! from the energy model.

use wsn_core::{NodeId, Point2, PoiId, Tick};

use crate::Measurement;

// ── NodeState ─────────────────────────────────────────────────────────────────

/// Operational state of a node.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    Active,
    Sleep,
    Dead,
    Failure,
}

impl NodeState {
    /// `true` for DEAD and FAILURE — states with no way back.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeState::Dead | NodeState::Failure)
    }

    /// `true` for ACTIVE and SLEEP — states that still participate in
    /// scanning and routing.
    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, NodeState::Active | NodeState::Sleep)
    }
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NodeState::Active => "active",
            NodeState::Sleep => "sleep",
            NodeState::Dead => "dead",
            NodeState::Failure => "failure",
        };
        f.write_str(s)
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A sensing/relay entity.
///
/// Identity is the node's index in the [`NodeArena`], never its coordinates —
/// two nodes at the same position stay distinct.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Position, immutable after placement.
    pub position: Point2,
    /// Sensing radius.  Claims and links reach half of this.
    pub radius: f32,
    /// Maximum battery level.
    pub capacity: f32,
    /// Current battery level.  May go negative from send/receive costs
    /// before the DEAD transition clamps the node out of the run.
    pub battery: f32,
    /// Operational state.
    pub state: NodeState,
    /// POIs this node has exclusively claimed.
    pub observed: Vec<PoiId>,
    /// Next hop toward the central node, set by the per-tick route rebuild.
    /// Never the node itself.  Stale for sleeping nodes until the next
    /// rebuild.
    pub next_hop: Option<NodeId>,
    /// `true` if the last route rebuild found a path to the central node.
    pub in_path: bool,
    /// Measurements collected from POIs (or received from downstream nodes)
    /// awaiting forwarding.  On the central node this only accumulates.
    pub buffer: Vec<Measurement>,
    /// Packets this node has lost (transmission loss or unroutable drops).
    pub lost_packets: u64,
    /// Tick of the last POI collection (5-second cadence).
    pub last_collection: Tick,
    /// Per-tick redundancy-suppression flag; recomputed every tick.
    pub redundant: bool,
    /// Exactly one node per run is the central sink.
    pub is_central: bool,
}

impl Node {
    /// A regular node: full battery, ACTIVE, nothing observed.
    pub fn new(position: Point2, radius: f32, capacity: f32) -> Self {
        Self {
            position,
            radius,
            capacity,
            battery: capacity,
            state: NodeState::Active,
            observed: Vec::new(),
            next_hop: None,
            in_path: false,
            buffer: Vec::new(),
            lost_packets: 0,
            last_collection: Tick::ZERO,
            redundant: false,
            is_central: false,
        }
    }

    /// The central sink node.
    pub fn central(position: Point2, radius: f32, capacity: f32) -> Self {
        Self {
            is_central: true,
            ..Self::new(position, radius, capacity)
        }
    }

    /// Effective sensing/link reach: half the sensing radius.
    #[inline]
    pub fn reach(&self) -> f32 {
        self.radius * 0.5
    }

    /// `true` if this node currently observes at least one POI.
    #[inline]
    pub fn observes_any(&self) -> bool {
        !self.observed.is_empty()
    }

    /// Most recent buffered value, if any — used by redundancy suppression.
    #[inline]
    pub fn latest_value(&self) -> Option<f32> {
        self.buffer.last().map(|m| m.value)
    }
}

// ── NodeArena ─────────────────────────────────────────────────────────────────

/// Arena of all nodes, indexed by `NodeId`.  Nodes are never removed;
/// destruction is logical (state becomes DEAD or FAILURE).
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeArena {
    inner: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.inner.len() as u32);
        self.inner.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.inner[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.inner[id.index()]
    }

    /// Disjoint mutable references to two distinct nodes — the forwarding
    /// path needs the sender and receiver simultaneously.
    ///
    /// # Panics
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut Node, &mut Node) {
        assert_ne!(a, b, "pair_mut requires distinct nodes");
        let (ai, bi) = (a.index(), b.index());
        if ai < bi {
            let (lo, hi) = self.inner.split_at_mut(bi);
            (&mut lo[ai], &mut hi[0])
        } else {
            let (lo, hi) = self.inner.split_at_mut(ai);
            (&mut hi[0], &mut lo[bi])
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterator over all `NodeId`s in ascending index order.  This order is
    /// the deterministic enumeration order routing and scheduling rely on.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + 'static {
        (0..self.inner.len() as u32).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.inner
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// The unique central node, if one exists.
    pub fn central(&self) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.is_central).map(|(id, _)| id)
    }
}

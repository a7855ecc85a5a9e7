//! Proximity graph construction and breadth-first routing.
//!
//! # Adjacency
//!
//! Relay candidates are nodes in ACTIVE or SLEEP state, plus the central
//! node unconditionally.  The graph is *directed*: `b` is a neighbor of `a`
//! iff `dist(a, b) <= a.reach()` — the evaluating node's own reach, so two
//! nodes with different radii can see each other asymmetrically.
//!
//! Neighborhoods come from an R-tree range query and are then sorted by
//! ascending `NodeId`.  BFS visits neighbors in that order, which makes the
//! choice among equal-length paths deterministic for a given arena layout:
//! the lowest-numbered neighbor discovered first wins.  Which path that is
//! remains an artifact of enumeration order, not a quality metric.
//!
//! # Paths
//!
//! BFS runs from every candidate toward the central node and records the
//! full path (source first, central last).  The central node's own path is
//! `[central]` with no next hop.  Hop count is the only metric — link
//! quality and battery do not weight the search.

use std::collections::VecDeque;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use wsn_core::NodeId;
use wsn_world::NodeArena;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry in the per-rebuild spatial index: a 2-D point with its `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RoutingTable ──────────────────────────────────────────────────────────────

/// The per-tick routing result: for each node, its path to the central node
/// (source first, central last) or `None`.
///
/// Not persisted across ticks; the engine replaces it wholesale on every
/// rebuild.  `PartialEq` exists so rebuild idempotence is testable.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingTable {
    paths: Vec<Option<Vec<NodeId>>>,
}

impl RoutingTable {
    /// Table with no routes, sized for `len` nodes.
    pub fn empty(len: usize) -> Self {
        Self {
            paths: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The node's full path to the central node, if one was found.
    pub fn path(&self, id: NodeId) -> Option<&[NodeId]> {
        self.paths[id.index()].as_deref()
    }

    /// Second element of the path: the immediate next hop.  `None` for
    /// unrouted nodes and for the central node itself.
    pub fn next_hop(&self, id: NodeId) -> Option<NodeId> {
        self.path(id).and_then(|p| p.get(1).copied())
    }

    /// `true` if the last rebuild found a path for this node.
    pub fn is_routed(&self, id: NodeId) -> bool {
        self.paths[id.index()].is_some()
    }

    /// Iterator over `(NodeId, path)` for all routed nodes.
    pub fn routed(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.paths
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_deref().map(|p| (NodeId(i as u32), p)))
    }
}

// ── Rebuild ───────────────────────────────────────────────────────────────────

/// Build the routing table for the current node states.
///
/// Full rebuild, O(candidates × (V + E)); the arenas are small enough that
/// recomputing beats bookkeeping an incremental structure through sleep/wake
/// churn.
pub fn build_routes(nodes: &NodeArena, central: NodeId) -> RoutingTable {
    let n = nodes.len();
    let mut table = RoutingTable::empty(n);

    // Relay candidates: live nodes, plus central unconditionally.
    let candidate: Vec<bool> = nodes
        .iter()
        .map(|(id, node)| node.state.is_live() || id == central)
        .collect();

    let entries: Vec<NodeEntry> = nodes
        .iter()
        .filter(|(id, _)| candidate[id.index()])
        .map(|(id, node)| NodeEntry {
            point: [node.position.x, node.position.y],
            id,
        })
        .collect();
    let index = RTree::bulk_load(entries);

    // Directed out-neighbors per candidate, sorted by NodeId for
    // deterministic BFS tie-breaking.
    let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); n];
    for (id, node) in nodes.iter() {
        if !candidate[id.index()] {
            continue;
        }
        let reach = node.reach();
        let origin = [node.position.x, node.position.y];
        let mut neighbors: Vec<NodeId> = index
            .locate_within_distance(origin, reach * reach)
            .map(|e| e.id)
            .filter(|&other| other != id)
            .collect();
        neighbors.sort_unstable();
        adjacency[id.index()] = neighbors;
    }

    for (id, _) in nodes.iter() {
        if !candidate[id.index()] {
            continue;
        }
        table.paths[id.index()] = bfs_path(&adjacency, id, central);
    }

    table
}

/// Write the rebuilt routes into the arena: `next_hop` is the second path
/// element, `in_path` mirrors path existence.  Terminal nodes are left
/// untouched — their stale route data is inert because they participate in
/// nothing.
pub fn apply_routes(nodes: &mut NodeArena, table: &RoutingTable) {
    for id in nodes.ids() {
        let node = nodes.get_mut(id);
        if node.state.is_terminal() {
            continue;
        }
        node.next_hop = table.next_hop(id);
        node.in_path = table.is_routed(id);
    }
}

/// BFS from `from` to `to` over the directed adjacency.  Returns the full
/// path `[from, ..., to]`, or `None` if `to` is unreachable.
fn bfs_path(adjacency: &[Vec<NodeId>], from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    if from == to {
        return Some(vec![to]);
    }

    let n = adjacency.len();
    let mut prev: Vec<NodeId> = vec![NodeId::INVALID; n];
    let mut visited = vec![false; n];
    visited[from.index()] = true;

    let mut queue = VecDeque::new();
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        for &next in &adjacency[node.index()] {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            prev[next.index()] = node;
            if next == to {
                return Some(reconstruct(&prev, from, to));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct(prev: &[NodeId], from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        path.push(cur);
    }
    path.reverse();
    path
}

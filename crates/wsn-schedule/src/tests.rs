//! Unit tests for wsn-schedule.

use wsn_core::{NodeId, Point2, PoiId};
use wsn_routing::{apply_routes, build_routes};
use wsn_world::{Node, NodeArena, NodeState};

use crate::{apply, plan, SleepDecision};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn node_at(x: f32, y: f32) -> Node {
    Node::new(Point2::new(x, y), 100.0, 100.0)
}

/// central(0) — relay(1) — observer(2) in a line (radius 100 → reach 50),
/// with the observer claiming one POI.
fn chain_with_observer() -> (NodeArena, NodeId) {
    let mut arena = NodeArena::new();
    let central = arena.push(Node::central(Point2::new(0.0, 0.0), 100.0, 100.0));
    arena.push(node_at(40.0, 0.0)); // relay
    let observer = arena.push(node_at(80.0, 0.0));
    arena.get_mut(observer).observed.push(PoiId(0));
    (arena, central)
}

fn schedule(arena: &mut NodeArena, central: NodeId) -> crate::SleepPlan {
    let table = build_routes(arena, central);
    apply_routes(arena, &table);
    let p = plan(arena, &table);
    apply(&p, arena);
    p
}

#[cfg(test)]
mod decisions {
    use super::*;

    #[test]
    fn observer_stays_active() {
        let (mut arena, central) = chain_with_observer();
        schedule(&mut arena, central);
        assert_eq!(arena.get(NodeId(2)).state, NodeState::Active);
    }

    #[test]
    fn critical_relay_stays_active() {
        let (mut arena, central) = chain_with_observer();
        schedule(&mut arena, central);
        // Node 1 observes nothing but carries the observer's path.
        assert!(arena.get(NodeId(1)).observed.is_empty());
        assert_eq!(arena.get(NodeId(1)).state, NodeState::Active);
    }

    #[test]
    fn orphan_goes_to_sleep() {
        let (mut arena, central) = chain_with_observer();
        let far = arena.push(node_at(500.0, 500.0));
        schedule(&mut arena, central);
        assert_eq!(arena.get(far).state, NodeState::Sleep);
    }

    #[test]
    fn routed_but_noncritical_node_sleeps() {
        // A routed leaf that observes nothing and relays for nobody.
        let (mut arena, central) = chain_with_observer();
        let idle = arena.push(node_at(0.0, 40.0));
        schedule(&mut arena, central);
        assert_eq!(arena.get(idle).state, NodeState::Sleep);
    }

    #[test]
    fn relay_for_idle_source_sleeps() {
        // Same chain but the leaf observes nothing: the relay carries a path
        // for a non-observer only and is not critical.
        let mut arena = NodeArena::new();
        let central = arena.push(Node::central(Point2::new(0.0, 0.0), 100.0, 100.0));
        arena.push(node_at(40.0, 0.0));
        arena.push(node_at(80.0, 0.0));
        schedule(&mut arena, central);
        assert_eq!(arena.get(NodeId(1)).state, NodeState::Sleep);
        assert_eq!(arena.get(NodeId(2)).state, NodeState::Sleep);
    }

    #[test]
    fn sleeper_wakes_when_it_becomes_critical() {
        let mut arena = NodeArena::new();
        let central = arena.push(Node::central(Point2::new(0.0, 0.0), 100.0, 100.0));
        let relay = arena.push(node_at(40.0, 0.0));
        let leaf = arena.push(node_at(80.0, 0.0));
        schedule(&mut arena, central);
        assert_eq!(arena.get(relay).state, NodeState::Sleep);

        // Leaf claims a POI; the relay must come back up.
        arena.get_mut(leaf).observed.push(PoiId(3));
        schedule(&mut arena, central);
        assert_eq!(arena.get(relay).state, NodeState::Active);
        assert_eq!(arena.get(leaf).state, NodeState::Active);
    }

    #[test]
    fn terminal_and_central_untouched() {
        let (mut arena, central) = chain_with_observer();
        let dead = arena.push(node_at(10.0, 10.0));
        arena.get_mut(dead).state = NodeState::Dead;
        let failed = arena.push(node_at(20.0, 10.0));
        arena.get_mut(failed).state = NodeState::Failure;

        let p = schedule(&mut arena, central);
        assert_eq!(p.decision(central), SleepDecision::Untouched);
        assert_eq!(p.decision(dead), SleepDecision::Untouched);
        assert_eq!(p.decision(failed), SleepDecision::Untouched);
        assert_eq!(arena.get(dead).state, NodeState::Dead);
        assert_eq!(arena.get(failed).state, NodeState::Failure);
    }

    #[test]
    fn replanning_is_idempotent() {
        let (mut arena, central) = chain_with_observer();
        let first = schedule(&mut arena, central);
        let second = schedule(&mut arena, central);
        assert_eq!(first, second);
    }
}

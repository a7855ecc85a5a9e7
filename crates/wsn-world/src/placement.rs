//! Initial node and POI placement.
//!
//! # Scheme
//!
//! 1. POIs first: rejection sampling inside the region, each at least
//!    `range / 4` from everything placed so far, up to 1200 attempts.  When
//!    the budget runs out the best candidate seen (greatest minimum distance)
//!    is accepted unconditionally — placement never fails, it only degrades
//!    spatial spread.
//! 2. One node is forced central at the region's center.
//! 3. For each POI, one covering node at a random angle and a random distance
//!    within 80 % of the sensing reach, guaranteeing the POI is claimable on
//!    the first scan (claims require distance strictly under the reach).
//! 4. Remaining nodes uniformly at random, each at least `range / 2` from
//!    already-placed nodes, up to 1000 attempts, same fallback.

use std::f32::consts::TAU;

use wsn_core::{ModelParams, Point2, Region, SimConfig, SimRng};

use crate::node::{Node, NodeArena};
use crate::poi::{Poi, PoiArena};

/// Side length of the square placement region.
pub const REGION_SIZE: f32 = 640.0;

/// Margin kept from the region edges when sampling positions.
pub const EDGE_MARGIN: f32 = 10.0;

const POI_ATTEMPTS: u32 = 1_200;
const NODE_ATTEMPTS: u32 = 1_000;

/// Fraction of the sensing reach within which each POI's covering node is
/// placed.
const COVER_FRACTION: f32 = 0.8;

/// Place all POIs and nodes for a run.
///
/// The node arena always contains the central node at index 0; POI covering
/// nodes follow, then uniformly placed filler up to `config.node_count`.
pub fn place_world(
    config: &SimConfig,
    params: &ModelParams,
    rng: &mut SimRng,
) -> (NodeArena, PoiArena) {
    let region = Region::new(REGION_SIZE, EDGE_MARGIN);
    let range = config.sensing_range as f32;
    let reach = config.sensing_reach();

    // ── POIs ──────────────────────────────────────────────────────────────
    let mut pois = PoiArena::new();
    let mut taken: Vec<Point2> = Vec::new();
    for _ in 0..config.poi_count {
        let pos = sample_separated(rng, &region, range * 0.25, &taken, POI_ATTEMPTS);
        taken.push(pos);
        let reliability = rng.gen_range(0.8_f32..=1.0);
        pois.push(Poi::new(pos, reliability));
    }

    // ── Nodes ─────────────────────────────────────────────────────────────
    let mut nodes = NodeArena::new();
    let node_count = config.node_count.max(1) as usize;

    nodes.push(Node::central(region.center(), range, params.battery_capacity));

    // One covering node per POI, while the budget lasts.
    for (_, poi) in pois.iter() {
        if nodes.len() >= node_count {
            break;
        }
        let angle = rng.gen_range(0.0..TAU);
        let dist = rng.gen_range(0.0..reach * COVER_FRACTION);
        let pos = region.clamp(poi.position.polar_offset(angle, dist));
        nodes.push(Node::new(pos, range, params.battery_capacity));
    }

    // Uniform filler with minimum separation against placed nodes.
    while nodes.len() < node_count {
        let placed: Vec<Point2> = nodes.iter().map(|(_, n)| n.position).collect();
        let pos = sample_separated(rng, &region, range * 0.5, &placed, NODE_ATTEMPTS);
        nodes.push(Node::new(pos, range, params.battery_capacity));
    }

    (nodes, pois)
}

// ── Rejection sampling ────────────────────────────────────────────────────────

/// Uniform point in the margined interior of `region`.
fn sample_point(rng: &mut SimRng, region: &Region) -> Point2 {
    let lo = region.margin;
    let hi = region.side - region.margin;
    Point2::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi))
}

/// Draw up to `attempts` uniform candidates and return the first one at least
/// `min_dist` from every point in `existing`.  If none qualifies, return the
/// best candidate seen (greatest minimum distance) — bounded-retry fallback,
/// never an error.
fn sample_separated(
    rng: &mut SimRng,
    region: &Region,
    min_dist: f32,
    existing: &[Point2],
    attempts: u32,
) -> Point2 {
    let mut best = sample_point(rng, region);
    let mut best_sep = min_separation(best, existing);
    if best_sep >= min_dist {
        return best;
    }
    for _ in 1..attempts {
        let candidate = sample_point(rng, region);
        let sep = min_separation(candidate, existing);
        if sep >= min_dist {
            return candidate;
        }
        if sep > best_sep {
            best = candidate;
            best_sep = sep;
        }
    }
    best
}

/// Distance from `p` to the nearest point in `existing` (infinity if empty).
fn min_separation(p: Point2, existing: &[Point2]) -> f32 {
    existing
        .iter()
        .map(|&q| p.distance(q))
        .fold(f32::INFINITY, f32::min)
}

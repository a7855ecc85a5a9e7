//! `wsn-world` — entities and world construction for the wsn simulator.
//!
//! # What lives here
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`measurement`] | `Measurement` — one generated data packet           |
//! | [`poi`]         | `Poi`, `PoiArena`                                   |
//! | [`node`]        | `NodeState`, `Node`, `NodeArena`                    |
//! | [`placement`]   | Initial node/POI placement (rejection sampling)     |
//!
//! Nodes and POIs reference each other only through typed arena indices
//! (`NodeId`, `PoiId`): a POI's observer claim and a node's next hop are weak
//! relations, so the mutual-reference graph carries no ownership cycles.

pub mod measurement;
pub mod node;
pub mod placement;
pub mod poi;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use measurement::Measurement;
pub use node::{Node, NodeArena, NodeState};
pub use placement::{place_world, EDGE_MARGIN, REGION_SIZE};
pub use poi::{Poi, PoiArena};

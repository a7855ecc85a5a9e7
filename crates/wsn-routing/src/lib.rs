//! `wsn-routing` — per-tick topology discovery and shortest-path routing.
//!
//! Every tick the engine rebuilds the routing table from scratch: node
//! states and claims change tick to tick (sleep/wake, death), so there is no
//! incremental update to maintain.  See [`topology`] for the adjacency and
//! BFS rules.

pub mod topology;


pub use topology::{apply_routes, build_routes, RoutingTable};

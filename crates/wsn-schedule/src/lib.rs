//! `wsn-schedule` — sleep/wake scheduling for energy conservation.
//!
//! Recomputed from scratch every tick over the freshly rebuilt routing
//! table; nothing is sticky, so a node can cycle ACTIVE ↔ SLEEP freely as
//! coverage needs shift.

pub mod policy;

#[cfg(test)]
mod tests;

pub use policy::{apply, plan, SleepDecision, SleepPlan};

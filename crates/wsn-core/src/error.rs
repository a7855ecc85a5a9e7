//! Framework error type.
//!
//! The simulation core itself has no recoverable error conditions — failure
//! is domain state (DEAD, FAILURE, coverage loss), not a `Result`.  The one
//! thing the core does reject is configuration it cannot construct a world
//! from at all; sub-crates wrap `CoreError` via `#[from]` where they add
//! their own failure modes.

use thiserror::Error;

/// The top-level error type for `wsn-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `wsn-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

use thiserror::Error;

use wsn_core::CoreError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{what} count {got} does not match configured count {expected}")]
    WorldCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("world has no central node")]
    MissingCentral,

    #[error("world has {0} central nodes, expected exactly one")]
    ExtraCentral(usize),
}

pub type SimResult<T> = Result<T, SimError>;

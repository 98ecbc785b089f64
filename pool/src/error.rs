use pool_poseidon::{cipher::CipherError, PoseidonError};
use thiserror::Error;

use crate::{merkle::MerkleError, snarky::errors::SnarkyError};

/// Errors raised while configuring the pool circuit or building its witness.
///
/// A witness that merely fails the protocol (a wrong key, a stale root) is
/// not an error: the circuit zeroes the affected outputs instead.
#[derive(Debug, Clone, Error)]
pub enum PoolError {
    #[error("invalid pool configuration: {0}")]
    InvalidConfig(String),

    #[error("the inputs do not match the configuration: {0}")]
    InputShape(String),

    #[error("commitment {0} is not in the state tree")]
    UnknownCommitment(usize),

    #[error("a proof of depth {depth} does not fit in a tree of depth {max}")]
    TreeTooDeep { depth: usize, max: usize },

    #[error(transparent)]
    Snarky(#[from] SnarkyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Merkle(#[from] MerkleError),

    #[error(transparent)]
    Poseidon(#[from] PoseidonError),

    #[error("malformed JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for PoolError {
    fn from(e: serde_json::Error) -> Self {
        PoolError::Json(e.to_string())
    }
}

pub type PoolResult<T> = std::result::Result<T, PoolError>;

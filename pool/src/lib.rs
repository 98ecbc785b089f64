//! Arithmetic circuits of a shielded-asset privacy pool over BN254.
//!
//! The crate is layered bottom-up:
//! - [snarky]: the constraint runner (compile and witness modes),
//! - [gadgets]: bit decomposition, comparators, logic gates, multiplexers,
//! - [ec]: Baby Jubjub arithmetic in Edwards and Montgomery form,
//! - [poseidon]: the Poseidon permutation, hash and decryption gadgets,
//! - [merkle]: path indices, lean incremental Merkle tree proofs and roots,
//! - [commitment]: key recovery, decryption, ownership and membership,
//! - [circuit]: the pool aggregation circuit and its witness builder.
//!
//! [registry] lists the gadgets by name with their dependencies.

pub mod circuit;
pub mod commitment;
pub mod ec;
pub mod error;
pub mod gadgets;
pub mod merkle;
pub mod poseidon;
pub mod registry;
pub mod snarky;

pub use circuit::{
    privacy_pool, PoolCircuit, PoolConfig, PoolInputs, PoolOutputs, PoolWitnessBuilder,
};
pub use error::PoolError;

/// Handy macro to return the filename and line number of a place in the code.
#[macro_export]
macro_rules! loc {
    () => {{
        ::std::borrow::Cow::Borrowed(concat!(file!(), ":", line!()))
    }};
}

//! This crate provides the Poseidon permutation used by the privacy pool
//! circuits, instantiated over the scalar field of BN254 with the parameters
//! of circomlib (S-box `x^5`, 8 full rounds, Cauchy mix matrices generated by
//! the Grain LFSR).
//!
//! The permutation is written in the partial-round optimised form: the
//! circuits follow exactly the same phases, so the native functions here are
//! the reference values for the in-circuit gadgets.
//!
//! ```rust
//! use ark_bn254::Fr;
//! use pool_poseidon::hash;
//!
//! let digest = hash(&[Fr::from(1u64), Fr::from(2u64)]).unwrap();
//! ```
//!
//! On top of the permutation, [cipher] implements the authenticated stream
//! cipher used to encrypt commitment tuples.

pub mod bn254;
pub mod cipher;
pub mod constants;
pub mod permutation;
pub mod poseidon;

pub use poseidon::{hash, hash_with_domain, permute, ArithmeticSpongeParams, PoseidonError};

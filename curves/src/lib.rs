#![deny(unsafe_code)]
#![deny(clippy::all)]
// Cryptographic constants use unseparated decimal literals for consistency
// with reference implementations
#![allow(clippy::unreadable_literal)]

pub mod babyjubjub;

pub use babyjubjub::{BabyJubjubConfig, EdwardsAffine, EdwardsProjective, Fq, Fs};

//! Baby Jubjub, the twisted Edwards curve `a·x² + y² = 1 + d·x²·y²` with
//! `a = 168700` and `d = 168696`, defined over the scalar field of BN254 so
//! that its arithmetic is native to circuits over that field.
//!
//! The group of points has order `8·l`; [EdwardsAffine::generator] returns
//! the base point of the prime-order subgroup (often called `BASE8`).

pub mod curves;
pub mod fields;
pub mod keys;
pub mod montgomery;

pub use curves::{
    BabyJubjubConfig, EdwardsAffine, EdwardsProjective, BASE8_X, BASE8_Y, GENERATOR_X,
    GENERATOR_Y,
};
pub use fields::{Fq, Fs};
pub use keys::{ecdh, private_to_public, scalar_from_base};
pub use montgomery::MontgomeryPoint;

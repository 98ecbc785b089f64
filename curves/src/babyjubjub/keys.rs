//! Key derivation on the prime-order subgroup.

use crate::babyjubjub::{
    curves::EdwardsAffine,
    fields::{Fq, Fs},
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField};

/// Reduces a base field element modulo the subgroup order.
pub fn scalar_from_base(x: &Fq) -> Fs {
    Fs::from_le_bytes_mod_order(&x.into_bigint().to_bytes_le())
}

/// `private_key · BASE8`
pub fn private_to_public(private_key: &Fs) -> EdwardsAffine {
    (EdwardsAffine::generator() * private_key).into_affine()
}

/// Diffie-Hellman shared point `private_key · public_key`.
pub fn ecdh(private_key: &Fs, public_key: &EdwardsAffine) -> EdwardsAffine {
    (*public_key * private_key).into_affine()
}

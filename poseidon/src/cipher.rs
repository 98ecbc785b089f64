//! Authenticated stream cipher built on the width 4 permutation.
//!
//! The state starts as `[0, key.x, key.y, nonce + length·2^128]`. Each block
//! of three plaintext elements is absorbed after a permutation and the
//! resulting lanes form the ciphertext; a last permutation produces the
//! authentication tag, appended to the ciphertext.

use crate::poseidon::{permute, PoseidonError};
use ark_bn254::Fr;
use ark_ff::Zero;
use num_bigint::BigUint;
use pool_utils::{math::pad_to_multiple, FieldHelpers};
use thiserror::Error;

/// Plaintext elements absorbed per permutation.
pub const RATE: usize = 3;

/// Nonces live below `2^NONCE_BITS`, the message length is packed above.
pub const NONCE_BITS: u64 = 128;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("the nonce must be smaller than 2^128")]
    NonceTooLarge,
    #[error("a message of length {length} encrypts to {expected} elements, got {actual}")]
    CiphertextLength {
        length: usize,
        expected: usize,
        actual: usize,
    },
    #[error("the authentication tag does not match")]
    InvalidTag,
    #[error("the plaintext padding is not zero")]
    InvalidPadding,
    #[error(transparent)]
    Poseidon(#[from] PoseidonError),
}

/// Number of ciphertext elements for a plaintext of `length` elements.
pub fn ciphertext_length(length: usize) -> usize {
    pad_to_multiple(length, RATE) + 1
}

fn initial_state(key: &[Fr; 2], nonce: Fr, length: usize) -> Result<[Fr; 4], CipherError> {
    if nonce.to_biguint() >= BigUint::from(1u8) << NONCE_BITS {
        return Err(CipherError::NonceTooLarge);
    }
    let packed = nonce + Fr::from(length as u64) * Fr::two_pow(NONCE_BITS);
    Ok([Fr::zero(), key[0], key[1], packed])
}

pub fn encrypt(message: &[Fr], key: &[Fr; 2], nonce: Fr) -> Result<Vec<Fr>, CipherError> {
    let mut state = initial_state(key, nonce, message.len())?;
    let padded = pad_to_multiple(message.len(), RATE);

    let mut ciphertext = Vec::with_capacity(padded + 1);
    for block in 0..padded / RATE {
        permute(&mut state)?;
        for j in 0..RATE {
            let m = message.get(block * RATE + j).copied().unwrap_or_default();
            state[j + 1] += m;
            ciphertext.push(state[j + 1]);
        }
    }

    permute(&mut state)?;
    ciphertext.push(state[1]);

    Ok(ciphertext)
}

pub fn decrypt(
    ciphertext: &[Fr],
    key: &[Fr; 2],
    nonce: Fr,
    length: usize,
) -> Result<Vec<Fr>, CipherError> {
    let expected = ciphertext_length(length);
    if ciphertext.len() != expected {
        return Err(CipherError::CiphertextLength {
            length,
            expected,
            actual: ciphertext.len(),
        });
    }

    let mut state = initial_state(key, nonce, length)?;
    let (blocks, tag) = ciphertext.split_at(expected - 1);

    let mut message = Vec::with_capacity(blocks.len());
    for block in blocks.chunks(RATE) {
        permute(&mut state)?;
        for (j, c) in block.iter().enumerate() {
            message.push(*c - state[j + 1]);
            state[j + 1] = *c;
        }
    }

    permute(&mut state)?;
    if state[1] != tag[0] {
        return Err(CipherError::InvalidTag);
    }
    if message[length..].iter().any(|m| !m.is_zero()) {
        return Err(CipherError::InvalidPadding);
    }

    message.truncate(length);
    Ok(message)
}

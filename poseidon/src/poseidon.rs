//! This module implements Poseidon Hash Function primitive

use crate::{
    bn254,
    constants::{HALF_ROUNDS_FULL, SBOX_ALPHA},
    permutation::poseidon_permutation,
};
use ark_bn254::Fr;
use ark_ff::{Field, Zero};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseidonError {
    #[error("no parameters for a state of width {0}")]
    UnsupportedWidth(usize),
    #[error("cannot output {requested} lanes from a state of width {width}")]
    TooManyOutputs { requested: usize, width: usize },
}

pub fn sbox<F: Field>(x: F) -> F {
    if SBOX_ALPHA == 5 {
        let mut quad = x;
        quad.square_in_place();
        quad.square_in_place();
        quad * x
    } else {
        x.pow([SBOX_ALPHA])
    }
}

/// The parameters of one permutation width, in the optimised form where the
/// partial rounds only use sparse matrices.
///
/// Round constants are stored in the order they are consumed:
/// - `width` constants for the initial addition,
/// - `width` constants for each of the first [HALF_ROUNDS_FULL] full rounds,
/// - one constant for each partial round,
/// - `width` constants for each remaining full round but the last one.
#[derive(Clone, Debug)]
pub struct ArithmeticSpongeParams<F: Field> {
    pub width: usize,
    pub rounds_partial: usize,
    pub round_constants: Vec<F>,
    /// `2·width - 1` entries per partial round: the first row of the sparse
    /// matrix followed by the rest of its first column.
    pub sparse_matrices: Vec<F>,
    pub mds: Vec<Vec<F>>,
    /// Mix applied by the last full round before the partial rounds.
    pub pre_sparse_mds: Vec<Vec<F>>,
}

impl<F: Field> ArithmeticSpongeParams<F> {
    pub fn initial_constants(&self) -> &[F] {
        &self.round_constants[..self.width]
    }

    /// Constants of the `r`-th full round before the partial rounds.
    pub fn first_full_round_constants(&self, r: usize) -> &[F] {
        assert!(r < HALF_ROUNDS_FULL);
        let start = (r + 1) * self.width;
        &self.round_constants[start..start + self.width]
    }

    pub fn partial_round_constant(&self, r: usize) -> F {
        assert!(r < self.rounds_partial);
        self.round_constants[(HALF_ROUNDS_FULL + 1) * self.width + r]
    }

    /// Constants of the `r`-th full round after the partial rounds. The last
    /// full round has none.
    pub fn second_full_round_constants(&self, r: usize) -> &[F] {
        assert!(r < HALF_ROUNDS_FULL - 1);
        let start = (HALF_ROUNDS_FULL + 1 + r) * self.width + self.rounds_partial;
        &self.round_constants[start..start + self.width]
    }

    pub fn sparse_matrix(&self, r: usize) -> &[F] {
        let len = 2 * self.width - 1;
        &self.sparse_matrices[r * len..(r + 1) * len]
    }
}

/// Applies the permutation to a state whose width selects the parameters.
pub fn permute(state: &mut [Fr]) -> Result<(), PoseidonError> {
    let params =
        bn254::static_params(state.len()).ok_or(PoseidonError::UnsupportedWidth(state.len()))?;
    poseidon_permutation(params, state);
    Ok(())
}

/// Permutes `[domain, inputs...]` and returns the first `n_out` lanes.
pub fn hash_with_domain(domain: Fr, inputs: &[Fr], n_out: usize) -> Result<Vec<Fr>, PoseidonError> {
    let width = inputs.len() + 1;
    if n_out > width {
        return Err(PoseidonError::TooManyOutputs {
            requested: n_out,
            width,
        });
    }
    let mut state = Vec::with_capacity(width);
    state.push(domain);
    state.extend_from_slice(inputs);
    permute(&mut state)?;
    state.truncate(n_out);
    Ok(state)
}

/// The circomlib `Poseidon(n)` hash: domain 0, first lane out.
pub fn hash(inputs: &[Fr]) -> Result<Fr, PoseidonError> {
    let out = hash_with_domain(Fr::zero(), inputs, 1)?;
    Ok(out[0])
}

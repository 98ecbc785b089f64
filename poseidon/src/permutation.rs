//! The permutation module contains the function implementing the permutation
//! used in Poseidon.

use crate::{
    constants::HALF_ROUNDS_FULL,
    poseidon::{sbox, ArithmeticSpongeParams},
};
use ark_ff::Field;

fn apply_mds_matrix<F: Field>(mds: &[Vec<F>], state: &[F]) -> Vec<F> {
    mds.iter()
        .map(|m| {
            state
                .iter()
                .zip(m.iter())
                .fold(F::zero(), |x, (s, &m)| m * s + x)
        })
        .collect()
}

fn add_round_constants<F: Field>(state: &mut [F], constants: &[F]) {
    for (state_i, c) in state.iter_mut().zip(constants) {
        *state_i += c;
    }
}

/// Apply a full round of the permutation.
/// A full round is composed of the following steps:
/// - Apply the S-box to each element of the state.
/// - Add the round constants to the state, if any.
/// - Apply the given mix matrix to the state.
///
/// The function has side-effect and the parameter state is modified.
pub fn full_round<F: Field>(state: &mut [F], constants: Option<&[F]>, mds: &[Vec<F>]) {
    for state_i in state.iter_mut() {
        *state_i = sbox(*state_i);
    }
    if let Some(constants) = constants {
        add_round_constants(state, constants);
    }
    let res = apply_mds_matrix(mds, state);
    state.copy_from_slice(&res);
}

/// Apply a partial round: the S-box on the first lane only, one round
/// constant, then the sparse mix given as its first row followed by the rest
/// of its first column.
pub fn partial_round<F: Field>(state: &mut [F], constant: F, sparse: &[F]) {
    let width = state.len();
    state[0] = sbox(state[0]) + constant;
    let first = state
        .iter()
        .zip(&sparse[..width])
        .fold(F::zero(), |acc, (s, m)| acc + *m * s);
    let lane0 = state[0];
    for (state_i, m) in state.iter_mut().skip(1).zip(&sparse[width..]) {
        *state_i += *m * lane0;
    }
    state[0] = first;
}

pub fn poseidon_permutation<F: Field>(params: &ArithmeticSpongeParams<F>, state: &mut [F]) {
    assert_eq!(state.len(), params.width);

    add_round_constants(state, params.initial_constants());

    for r in 0..HALF_ROUNDS_FULL - 1 {
        full_round(state, Some(params.first_full_round_constants(r)), &params.mds);
    }
    full_round(
        state,
        Some(params.first_full_round_constants(HALF_ROUNDS_FULL - 1)),
        &params.pre_sparse_mds,
    );

    for r in 0..params.rounds_partial {
        partial_round(state, params.partial_round_constant(r), params.sparse_matrix(r));
    }

    for r in 0..HALF_ROUNDS_FULL - 1 {
        full_round(state, Some(params.second_full_round_constants(r)), &params.mds);
    }
    full_round(state, None, &params.mds);
}

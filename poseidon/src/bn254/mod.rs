//! Parameters of the permutation over the BN254 scalar field.
//!
//! The tables are produced by `scripts/generate_parameters.py`: round
//! constants and Cauchy mix matrices come from the Grain LFSR of the Poseidon
//! paper, then the partial rounds are rewritten with sparse matrices and the
//! round constants are moved through the mix accordingly.

use crate::poseidon::ArithmeticSpongeParams;
use ark_bn254::Fr;
use once_cell::sync::Lazy;

pub mod width2;
pub mod width3;
pub mod width4;
pub mod width5;
pub mod width6;

pub const MIN_WIDTH: usize = 2;
pub const MAX_WIDTH: usize = 6;

macro_rules! params_from {
    ($table:ident) => {
        ArithmeticSpongeParams {
            width: $table::WIDTH,
            rounds_partial: $table::ROUNDS_PARTIAL,
            round_constants: $table::ROUND_CONSTANTS.to_vec(),
            sparse_matrices: $table::SPARSE_MATRICES.to_vec(),
            mds: $table::MDS.iter().map(|row| row.to_vec()).collect(),
            pre_sparse_mds: $table::PRE_SPARSE_MDS.iter().map(|row| row.to_vec()).collect(),
        }
    };
}

static PARAMS: Lazy<[ArithmeticSpongeParams<Fr>; MAX_WIDTH - MIN_WIDTH + 1]> = Lazy::new(|| {
    [
        params_from!(width2),
        params_from!(width3),
        params_from!(width4),
        params_from!(width5),
        params_from!(width6),
    ]
});

/// Parameters for a state of `width` lanes, built once on first use.
pub fn static_params(width: usize) -> Option<&'static ArithmeticSpongeParams<Fr>> {
    width
        .checked_sub(MIN_WIDTH)
        .and_then(|i| PARAMS.get(i))
}

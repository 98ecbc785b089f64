//! The Poseidon permutation as a gadget.
//!
//! The phases match [pool_poseidon::permutation::poseidon_permutation] one
//! to one: an initial constant addition, the first full rounds (the last of
//! them mixing with the pre-sparse matrix), the partial rounds with sparse
//! mixes, the second full rounds, and a final full round without constants.
//! Every mixed lane is bound to its own variable.

use std::borrow::Cow;

use ark_bn254::Fr;
use pool_poseidon::{
    bn254::static_params, constants::HALF_ROUNDS_FULL, ArithmeticSpongeParams,
};

use crate::snarky::{errors::SnarkyCompilationError, prelude::*};

pub mod cipher;

pub use cipher::{poseidon_decrypt, poseidon_decrypt_iterations, poseidon_decrypt_without_check};

/// `x^5`
fn sbox(sys: &mut RunState<Fr>, loc: Cow<'static, str>, x: &FieldVar<Fr>) -> SnarkyResult<FieldVar<Fr>> {
    let x2 = x.square(Some("sbox x²"), loc.clone(), sys)?;
    let x4 = x2.square(Some("sbox x⁴"), loc.clone(), sys)?;
    x4.mul(x, Some("sbox x⁵"), loc, sys)
}

fn add_round_constants(state: &mut [FieldVar<Fr>], constants: &[Fr]) {
    for (lane, c) in state.iter_mut().zip(constants) {
        *lane = &*lane + FieldVar::constant(*c);
    }
}

fn mix(
    sys: &mut RunState<Fr>,
    loc: &Cow<'static, str>,
    state: &[FieldVar<Fr>],
    matrix: &[Vec<Fr>],
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    matrix
        .iter()
        .map(|row| {
            let terms: Vec<_> = row.iter().copied().zip(state.iter().cloned()).collect();
            sys.materialize(Some("mix"), loc.clone(), &FieldVar::linear_combination(&terms))
        })
        .collect()
}

fn full_round(
    sys: &mut RunState<Fr>,
    loc: &Cow<'static, str>,
    state: &mut Vec<FieldVar<Fr>>,
    constants: Option<&[Fr]>,
    matrix: &[Vec<Fr>],
) -> SnarkyResult<()> {
    for lane in state.iter_mut() {
        *lane = sbox(sys, loc.clone(), lane)?;
    }
    if let Some(constants) = constants {
        add_round_constants(state, constants);
    }
    *state = mix(sys, loc, state, matrix)?;
    Ok(())
}

/// S-box on lane 0 plus one constant, then the sparse mix given as its first
/// row followed by the rest of its first column.
fn partial_round(
    sys: &mut RunState<Fr>,
    loc: &Cow<'static, str>,
    state: &mut [FieldVar<Fr>],
    constant: Fr,
    sparse: &[Fr],
) -> SnarkyResult<()> {
    let width = state.len();
    state[0] = sbox(sys, loc.clone(), &state[0])? + FieldVar::constant(constant);

    let terms: Vec<_> = sparse[..width].iter().copied().zip(state.iter().cloned()).collect();
    let first = sys.materialize(
        Some("sparse mix"),
        loc.clone(),
        &FieldVar::linear_combination(&terms),
    )?;
    let lane0 = state[0].clone();
    for (lane, m) in state.iter_mut().skip(1).zip(&sparse[width..]) {
        let mixed = &*lane + lane0.scale(*m);
        *lane = sys.materialize(Some("sparse mix"), loc.clone(), &mixed)?;
    }
    state[0] = first;
    Ok(())
}

fn permutation_with(
    sys: &mut RunState<Fr>,
    loc: &Cow<'static, str>,
    params: &ArithmeticSpongeParams<Fr>,
    mut state: Vec<FieldVar<Fr>>,
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    add_round_constants(&mut state, params.initial_constants());

    for r in 0..HALF_ROUNDS_FULL - 1 {
        full_round(sys, loc, &mut state, Some(params.first_full_round_constants(r)), &params.mds)?;
    }
    full_round(
        sys,
        loc,
        &mut state,
        Some(params.first_full_round_constants(HALF_ROUNDS_FULL - 1)),
        &params.pre_sparse_mds,
    )?;

    for r in 0..params.rounds_partial {
        partial_round(sys, loc, &mut state, params.partial_round_constant(r), params.sparse_matrix(r))?;
    }

    for r in 0..HALF_ROUNDS_FULL - 1 {
        full_round(sys, loc, &mut state, Some(params.second_full_round_constants(r)), &params.mds)?;
    }
    full_round(sys, loc, &mut state, None, &params.mds)?;

    Ok(state)
}

/// Applies the permutation to a state of 2 to 6 lanes.
pub fn poseidon_permutation(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    state: Vec<FieldVar<Fr>>,
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    let width = state.len();
    let params = static_params(width).ok_or_else(|| SnarkyCompilationError::InvalidParameter {
        gadget: "poseidon_permutation",
        reason: format!("no parameters for a state of width {width}"),
    })?;
    sys.scoped("poseidon_permutation", |sys| {
        permutation_with(sys, &loc, params, state)
    })
}

/// Permutes `[domain, inputs...]` and returns the first `n_out` lanes. The
/// lanes left out are squared so that each output lane stays constrained.
pub fn poseidon_hash(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    domain: &FieldVar<Fr>,
    inputs: &[FieldVar<Fr>],
    n_out: usize,
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    let width = inputs.len() + 1;
    if n_out == 0 || n_out > width {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "poseidon_hash",
            reason: format!("cannot output {n_out} lanes from a state of width {width}"),
        }
        .into());
    }
    sys.scoped("poseidon_hash", |sys| {
        let mut state = Vec::with_capacity(width);
        state.push(domain.clone());
        state.extend_from_slice(inputs);
        let mut out = poseidon_permutation(sys, loc.clone(), state)?;
        for unused in &out[n_out..] {
            unused.square(Some("unused lane"), loc.clone(), sys)?;
        }
        out.truncate(n_out);
        Ok(out)
    })
}

/// The circomlib `Poseidon(n)` hash: domain 0, one output.
pub fn poseidon_std(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    inputs: &[FieldVar<Fr>],
) -> SnarkyResult<FieldVar<Fr>> {
    let mut out = poseidon_hash(sys, loc, &FieldVar::zero(), inputs, 1)?;
    Ok(out.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_std::UniformRand;
    use pool_utils::{tests::make_test_rng, FieldHelpers};

    fn hash_in_circuit(inputs: &[Fr]) -> Fr {
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let vars: Vec<FieldVar<Fr>> = inputs
            .iter()
            .map(|x| sys.private_input(loc!(), || *x).unwrap())
            .collect();
        let out = poseidon_std(&mut sys, loc!(), &vars).unwrap();
        sys.seal().unwrap();
        sys.read_var(&out)
    }

    #[test]
    fn test_hash_vectors() {
        let cases: [(&[u64], &str); 3] = [
            (
                &[1],
                "18586133768512220936620570745912940619677854269274689475585506675881198879027",
            ),
            (
                &[1, 2],
                "7853200120776062878684798364095072458815029376092732009249414926327459813530",
            ),
            (
                &[1, 2, 0, 0, 0],
                "1018317224307729531995786483840663576608797660851238720571059489595066344487",
            ),
        ];
        for (inputs, expected) in cases {
            let inputs: Vec<Fr> = inputs.iter().map(|x| Fr::from(*x)).collect();
            assert_eq!(hash_in_circuit(&inputs), Fr::from_decimal(expected).unwrap());
        }
    }

    #[test]
    fn test_multi_output_matches_native() {
        let mut rng = make_test_rng(None);
        for width in 2..=6 {
            let domain = Fr::rand(&mut rng);
            let inputs: Vec<Fr> = (1..width).map(|_| Fr::rand(&mut rng)).collect();
            let expected = pool_poseidon::hash_with_domain(domain, &inputs, width).unwrap();

            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let d: FieldVar<Fr> = sys.private_input(loc!(), || domain).unwrap();
            let vars: Vec<FieldVar<Fr>> = inputs
                .iter()
                .map(|x| sys.private_input(loc!(), || *x).unwrap())
                .collect();
            let out = poseidon_hash(&mut sys, loc!(), &d, &vars, width).unwrap();
            let got: Vec<Fr> = out.iter().map(|o| sys.read_var(o)).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_constant_inputs_fold() {
        let mut sys = RunState::<Fr>::compile();
        let inputs = [FieldVar::constant(Fr::from(1u64)), FieldVar::constant(Fr::from(2u64))];
        let out = poseidon_std(&mut sys, loc!(), &inputs).unwrap();
        assert_eq!(sys.num_constraints(), 0);
        let expected = pool_poseidon::hash(&[Fr::from(1u64), Fr::from(2u64)]).unwrap();
        assert_eq!(out.to_constant(), Some(expected));
    }

    #[test]
    fn test_unsupported_shapes() {
        let mut sys = RunState::<Fr>::compile();
        let inputs = vec![FieldVar::zero(); 6];
        assert!(poseidon_std(&mut sys, loc!(), &inputs).is_err());
        assert!(poseidon_hash(&mut sys, loc!(), &FieldVar::zero(), &inputs[..2], 4).is_err());
    }
}

//! Merkle tree gadgets and their native counterparts.

use std::borrow::Cow;

use ark_bn254::Fr;
use pool_utils::FieldHelpers;

use crate::{
    gadgets::{
        comparators::{calculate_total, is_equal, safe_less_than},
        mux::multi_mux1,
    },
    poseidon::poseidon_std,
    snarky::{errors::SnarkyCompilationError, prelude::*},
};

pub mod lean_imt;

pub use lean_imt::{hash_pair, merkle_root, LeanImt, LeanImtProof, MerkleError};

/// Splits `index` into `levels` little-endian binary digits. Each digit is
/// checked with a 3-bit `safe_less_than(digit, 2)` and the weighted sum must
/// recompose `index`.
pub fn merkle_generate_path_indices(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    index: &FieldVar<Fr>,
    levels: usize,
) -> SnarkyResult<Vec<Boolean<Fr>>> {
    if levels == 0 {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "merkle_generate_path_indices",
            reason: "a path needs at least one level".to_string(),
        }
        .into());
    }
    sys.scoped("merkle_generate_path_indices", |sys| {
        let hint = sys.hint_vec(loc.clone(), levels, |env| {
            let mut m = env.read_var(index).to_biguint();
            (0..levels)
                .map(|_| {
                    let digit = Fr::from(m.bit(0));
                    m >>= 1;
                    digit
                })
                .collect()
        })?;
        let digits = hint.constrain(sys, |sys, digits| {
            let two = FieldVar::constant(Fr::from(2u64));
            for digit in digits {
                let small = safe_less_than(sys, loc.clone(), 3, digit, &two)?;
                sys.assert_eq(
                    Some("path digit below 2"),
                    loc.clone(),
                    small.to_field_var(),
                    FieldVar::one(),
                )?;
            }
            let weighted: Vec<_> = digits
                .iter()
                .enumerate()
                .map(|(i, d)| d.scale(Fr::two_pow(i as u64)))
                .collect();
            let total = calculate_total(sys, loc.clone(), &weighted)?;
            sys.assert_eq(Some("path digits sum"), loc.clone(), total, index.clone())
        })?;
        Ok(digits.into_iter().map(Boolean::create_unsafe).collect())
    })
}

/// Recomputes the root of a lean incremental Merkle tree from a leaf and its
/// path, padded with zero siblings to `siblings.len()` levels.
///
/// The root is taken at level `actual_depth`: the levels above it are still
/// hashed but do not contribute. An `actual_depth` above `siblings.len()`
/// selects nothing and yields 0.
pub fn lean_imt_inclusion_proof(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    leaf: &FieldVar<Fr>,
    leaf_index: &FieldVar<Fr>,
    siblings: &[FieldVar<Fr>],
    actual_depth: &FieldVar<Fr>,
) -> SnarkyResult<FieldVar<Fr>> {
    let max_depth = siblings.len();
    sys.scoped("lean_imt_inclusion_proof", |sys| {
        let indices = merkle_generate_path_indices(sys, loc.clone(), leaf_index, max_depth)?;

        let mut node = leaf.clone();
        let mut root = FieldVar::zero();
        for (i, (sibling, index)) in siblings.iter().zip(&indices).enumerate() {
            let at_depth = is_equal(sys, loc.clone(), actual_depth, &FieldVar::constant(Fr::from(i as u64)))?;
            let selected = at_depth
                .as_field_var()
                .mul(&node, Some("root at depth"), loc.clone(), sys)?;
            root = root + selected;

            let children = [
                [node.clone(), sibling.clone()],
                [sibling.clone(), node.clone()],
            ];
            let [left, right] = multi_mux1(sys, loc.clone(), &children, index)?;
            node = poseidon_std(sys, loc.clone(), &[left, right])?;
        }

        let at_max = is_equal(
            sys,
            loc.clone(),
            actual_depth,
            &FieldVar::constant(Fr::from(max_depth as u64)),
        )?;
        let selected = at_max
            .as_field_var()
            .mul(&node, Some("root at max depth"), loc, sys)?;
        Ok(root + selected)
    })
}

/// Root of the full binary tree over `leaves`, whose number must be a power
/// of two of at least 2.
pub fn compute_merkle_tree_root(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    leaves: &[FieldVar<Fr>],
) -> SnarkyResult<FieldVar<Fr>> {
    if leaves.len() < 2 || !leaves.len().is_power_of_two() {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "compute_merkle_tree_root",
            reason: format!("{} leaves is not a power of two", leaves.len()),
        }
        .into());
    }
    sys.scoped("compute_merkle_tree_root", |sys| {
        let mut level = leaves.to_vec();
        while level.len() > 1 {
            level = level
                .chunks_exact(2)
                .map(|pair| poseidon_std(sys, loc.clone(), pair))
                .collect::<SnarkyResult<_>>()?;
        }
        Ok(level.swap_remove(0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_std::UniformRand;
    use pool_utils::tests::make_test_rng;

    fn run_inclusion(
        leaf: Fr,
        index: u64,
        siblings: &[Fr],
        actual_depth: u64,
    ) -> (Fr, bool) {
        let mut sys = RunState::witness();
        let leaf: FieldVar<Fr> = sys.private_input(loc!(), || leaf).unwrap();
        let index: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(index)).unwrap();
        let siblings: Vec<FieldVar<Fr>> = siblings
            .iter()
            .map(|s| sys.private_input(loc!(), || *s).unwrap())
            .collect();
        let depth: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(actual_depth)).unwrap();
        let root = lean_imt_inclusion_proof(&mut sys, loc!(), &leaf, &index, &siblings, &depth).unwrap();
        sys.seal().unwrap();
        (sys.read_var(&root), sys.evaluate().unwrap().is_satisfied())
    }

    #[test]
    fn test_inclusion_matches_native_tree() {
        let mut rng = make_test_rng(None);
        let max_depth = 4;
        for size in [1, 2, 3, 5, 8, 11, 16] {
            let leaves: Vec<Fr> = (0..size).map(|_| Fr::rand(&mut rng)).collect();
            let tree = LeanImt::from_leaves(&leaves).unwrap();
            for i in 0..size {
                let proof = tree.generate_proof(i).unwrap();
                let siblings = proof.padded_siblings(max_depth).unwrap();
                let (root, ok) =
                    run_inclusion(proof.leaf, proof.index, &siblings, proof.depth() as u64);
                assert!(ok, "size {size}, leaf {i}");
                assert_eq!(Some(root), tree.root(), "size {size}, leaf {i}");
            }
        }
    }

    #[test]
    fn test_depth_beyond_max_yields_zero() {
        let siblings = [Fr::from(7u64), Fr::from(8u64)];
        let (root, ok) = run_inclusion(Fr::from(1u64), 0, &siblings, 3);
        assert!(ok);
        assert_eq!(root, Fr::from(0u64));
    }

    #[test]
    fn test_path_indices() {
        let mut sys = RunState::witness();
        let index: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(0b1011u64)).unwrap();
        let bits = merkle_generate_path_indices(&mut sys, loc!(), &index, 5).unwrap();
        let got: Vec<bool> = bits.iter().map(|b| b.read(&sys)).collect();
        assert_eq!(got, vec![true, true, false, true, false]);
        assert!(sys.evaluate().unwrap().is_satisfied());
    }

    #[test]
    fn test_index_too_large_for_the_path() {
        let mut sys = RunState::witness();
        let index: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(16u64)).unwrap();
        merkle_generate_path_indices(&mut sys, loc!(), &index, 4).unwrap();
        let evaluation = sys.evaluate().unwrap();
        assert!(evaluation.unsatisfied().any(|c| c.label == "path digits sum"));
    }

    #[test]
    fn test_full_tree_root() {
        let mut rng = make_test_rng(None);
        let leaves: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let vars: Vec<FieldVar<Fr>> = leaves
            .iter()
            .map(|l| sys.private_input(loc!(), || *l).unwrap())
            .collect();
        let root = compute_merkle_tree_root(&mut sys, loc!(), &vars).unwrap();
        assert_eq!(sys.read_var(&root), merkle_root(&leaves).unwrap());

        assert!(compute_merkle_tree_root(&mut sys, loc!(), &vars[..3]).is_err());
        assert!(merkle_generate_path_indices(&mut sys, loc!(), &vars[0], 0).is_err());
    }
}

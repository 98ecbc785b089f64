//! The pool aggregation circuit.
//!
//! A run spends `n_existing` commitments of the state tree and creates
//! `n_new` commitments, and is satisfiable only when value is conserved:
//!
//! ```text
//! externIO[0] + Σ spent values == externIO[1] + Σ created values
//! ```
//!
//! A slot whose ownership or membership fails does not make the circuit
//! unsatisfiable. Its value is dropped from the sums and its outputs are
//! gated instead, which is observable by whoever checks the public outputs.

use std::borrow::Cow;

use ark_bn254::Fr;
use log::debug;
use pool_curves::EdwardsAffine;

use crate::{
    commitment::{commitment_membership_proof, commitment_ownership_proof},
    ec::EdwardsVar,
    error::PoolResult,
    gadgets::{
        bits::num_to_bits,
        comparators::{is_equal, is_zero, MAX_COMPARISON_BITS},
        logic::nor,
    },
    loc,
    snarky::{evaluation::Evaluation, prelude::*},
};

pub mod config;
pub mod inputs;
pub mod witness;

pub use config::{PoolConfig, MAX_TREE_DEPTH};
pub use inputs::{PoolInputs, PoolOutputs};
pub use witness::PoolWitnessBuilder;

/// The four values a slot contributes.
#[derive(Debug, Clone)]
pub struct SlotOutputs {
    pub null_root: FieldVar<Fr>,
    pub commitment_root: FieldVar<Fr>,
    pub commitment_hash: FieldVar<Fr>,
    /// The value counted in the slot's running sum.
    pub value: FieldVar<Fr>,
}

/// The private material of one slot.
#[derive(Debug, Clone)]
pub struct Slot {
    pub private_key: FieldVar<Fr>,
    pub nonce: FieldVar<Fr>,
    pub salt_public_key: EdwardsVar,
    pub ciphertext: Vec<FieldVar<Fr>>,
}

/// Where a spent commitment sits in the state tree.
#[derive(Debug, Clone)]
pub struct Membership {
    pub index: FieldVar<Fr>,
    pub siblings: Vec<FieldVar<Fr>>,
}

/// Spends a commitment of the tree rooted at `state_root`.
///
/// The slot is invalid when the value is non-zero and the recomputed root
/// differs from `state_root`. Its outputs are then
/// `[null_root, commitment_root, hash, 0]`, and `[null_root, 0, 0, value]`
/// otherwise.
#[allow(clippy::too_many_arguments)]
pub fn handle_existing_commitment(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    scope: &FieldVar<Fr>,
    state_root: &FieldVar<Fr>,
    actual_depth: &FieldVar<Fr>,
    slot: &Slot,
    membership: &Membership,
    tuple_len: usize,
) -> SnarkyResult<SlotOutputs> {
    sys.scoped("handle_existing_commitment", |sys| {
        let ownership = commitment_ownership_proof(
            sys,
            loc.clone(),
            scope,
            &slot.private_key,
            &slot.salt_public_key,
            &slot.nonce,
            &slot.ciphertext,
            tuple_len,
        )?;
        let computed_root = commitment_membership_proof(
            sys,
            loc.clone(),
            actual_depth,
            &ownership.commitment_root,
            &membership.index,
            &membership.siblings,
        )?;

        let is_void = is_zero(sys, loc.clone(), &ownership.value)?;
        let root_matches = is_zero(sys, loc.clone(), &(computed_root - state_root))?;
        let is_invalid = nor(sys, loc.clone(), &is_void, &root_matches)?;

        let commitment_root = ownership.commitment_root.mul(
            is_invalid.as_field_var(),
            Some("spent commitment root"),
            loc.clone(),
            sys,
        )?;
        let commitment_hash = ownership.commitment_hash.mul(
            is_invalid.as_field_var(),
            Some("spent commitment hash"),
            loc.clone(),
            sys,
        )?;
        let value = ownership.value.mul(
            is_invalid.not().as_field_var(),
            Some("spent value"),
            loc,
            sys,
        )?;
        Ok(SlotOutputs {
            null_root: ownership.null_root,
            commitment_root,
            commitment_hash,
            value,
        })
    })
}

/// Creates a commitment. When ownership fails the commitment root is 0, the
/// null root is published and the value is dropped:
/// `[null_root, 0, hash, 0]`, and `[0, commitment_root, hash, value]`
/// otherwise.
pub fn handle_new_commitment(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    scope: &FieldVar<Fr>,
    slot: &Slot,
    tuple_len: usize,
) -> SnarkyResult<SlotOutputs> {
    sys.scoped("handle_new_commitment", |sys| {
        let ownership = commitment_ownership_proof(
            sys,
            loc.clone(),
            scope,
            &slot.private_key,
            &slot.salt_public_key,
            &slot.nonce,
            &slot.ciphertext,
            tuple_len,
        )?;
        let invalid = is_zero(sys, loc.clone(), &ownership.commitment_root)?;

        let null_root = ownership.null_root.mul(
            invalid.as_field_var(),
            Some("new null root"),
            loc.clone(),
            sys,
        )?;
        let value = ownership.value.mul(
            invalid.not().as_field_var(),
            Some("new value"),
            loc,
            sys,
        )?;
        Ok(SlotOutputs {
            null_root,
            commitment_root: ownership.commitment_root,
            commitment_hash: ownership.commitment_hash,
            value,
        })
    })
}

/// The public output variables of a pool circuit.
#[derive(Debug, Clone)]
pub struct PoolOutputVars {
    pub new_null_root: Vec<FieldVar<Fr>>,
    pub new_commitment_root: Vec<FieldVar<Fr>>,
    pub new_commitment_hash: Vec<FieldVar<Fr>>,
}

impl PoolOutputVars {
    pub fn read(&self, sys: &RunState<Fr>) -> PoolOutputs {
        let read = |vars: &[FieldVar<Fr>]| vars.iter().map(|v| sys.read_var(v)).collect();
        PoolOutputs {
            new_null_root: read(&self.new_null_root),
            new_commitment_root: read(&self.new_commitment_root),
            new_commitment_hash: read(&self.new_commitment_hash),
        }
    }
}

fn alloc_all(
    sys: &mut RunState<Fr>,
    loc: &Cow<'static, str>,
    public: bool,
    values: &[Fr],
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    let mut vars = Vec::with_capacity(values.len());
    for value in values {
        let var: FieldVar<Fr> = if public {
            sys.public_input(loc.clone(), || *value)?
        } else {
            sys.private_input(loc.clone(), || *value)?
        };
        vars.push(var);
    }
    Ok(vars)
}

fn alloc_point(
    sys: &mut RunState<Fr>,
    loc: &Cow<'static, str>,
    public: bool,
    [x, y]: [Fr; 2],
) -> SnarkyResult<EdwardsVar> {
    let point = || EdwardsAffine::new_unchecked(x, y);
    if public {
        sys.public_input(loc.clone(), point)
    } else {
        sys.private_input(loc.clone(), point)
    }
}

fn expose<'a>(
    sys: &mut RunState<Fr>,
    loc: &Cow<'static, str>,
    vars: impl IntoIterator<Item = &'a FieldVar<Fr>>,
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    vars.into_iter()
        .map(|var| sys.public_output(loc.clone(), var))
        .collect()
}

/// Builds the pool circuit over `inputs`.
///
/// Variables are allocated in signal order: the public inputs, then the
/// private inputs, and the public outputs last. In compile mode the values of
/// `inputs` are never read, only its shape.
pub fn privacy_pool(
    sys: &mut RunState<Fr>,
    config: &PoolConfig,
    inputs: &PoolInputs,
) -> PoolResult<PoolOutputVars> {
    config.validate()?;
    inputs.check_shape(config)?;
    let loc = loc!();

    let outputs = sys.scoped("privacy_pool", |sys| {
        // public inputs
        let scope: FieldVar<Fr> = sys.public_input(loc.clone(), || inputs.scope)?;
        let actual_depth: FieldVar<Fr> =
            sys.public_input(loc.clone(), || inputs.actual_tree_depth)?;
        let context: FieldVar<Fr> = sys.public_input(loc.clone(), || inputs.context)?;
        let extern_io: [FieldVar<Fr>; 2] = sys.public_input(loc.clone(), || inputs.extern_io)?;
        let state_root: FieldVar<Fr> =
            sys.public_input(loc.clone(), || inputs.existing_state_root)?;
        let new_salts = inputs
            .new_salt_public_key
            .iter()
            .map(|p| alloc_point(sys, &loc, true, *p))
            .collect::<SnarkyResult<Vec<_>>>()?;
        let mut new_ciphertexts = Vec::with_capacity(config.n_new);
        for ciphertext in &inputs.new_ciphertext {
            new_ciphertexts.push(alloc_all(sys, &loc, true, ciphertext)?);
        }

        // private inputs
        let private_keys = alloc_all(sys, &loc, false, &inputs.private_key)?;
        let nonces = alloc_all(sys, &loc, false, &inputs.nonce)?;
        let ex_salts = inputs
            .ex_salt_public_key
            .iter()
            .map(|p| alloc_point(sys, &loc, false, *p))
            .collect::<SnarkyResult<Vec<_>>>()?;
        let mut ex_ciphertexts = Vec::with_capacity(config.n_existing);
        for ciphertext in &inputs.ex_ciphertext {
            ex_ciphertexts.push(alloc_all(sys, &loc, false, ciphertext)?);
        }
        let ex_indices = alloc_all(sys, &loc, false, &inputs.ex_index)?;
        let mut ex_siblings = Vec::with_capacity(config.n_existing);
        for siblings in &inputs.ex_siblings {
            ex_siblings.push(alloc_all(sys, &loc, false, siblings)?);
        }

        for io in &extern_io {
            num_to_bits(sys, loc.clone(), io, MAX_COMPARISON_BITS)?;
        }

        let mut slots = Vec::with_capacity(config.n_slots());

        let mut total_existing = extern_io[0].clone();
        let existing = ex_salts
            .into_iter()
            .zip(ex_ciphertexts)
            .zip(ex_indices.into_iter().zip(ex_siblings));
        for (k, ((salt_public_key, ciphertext), (index, siblings))) in existing.enumerate() {
            let slot = Slot {
                private_key: private_keys[k].clone(),
                nonce: nonces[k].clone(),
                salt_public_key,
                ciphertext,
            };
            let out = handle_existing_commitment(
                sys,
                loc.clone(),
                &scope,
                &state_root,
                &actual_depth,
                &slot,
                &Membership { index, siblings },
                config.tuple_len,
            )?;
            total_existing =
                sys.materialize(Some("spent total"), loc.clone(), &(total_existing + &out.value))?;
            slots.push(out);
        }

        let mut total_new = extern_io[1].clone();
        for (i, (salt_public_key, ciphertext)) in new_salts.into_iter().zip(new_ciphertexts).enumerate() {
            let k = config.n_existing + i;
            let slot = Slot {
                private_key: private_keys[k].clone(),
                nonce: nonces[k].clone(),
                salt_public_key,
                ciphertext,
            };
            let out = handle_new_commitment(sys, loc.clone(), &scope, &slot, config.tuple_len)?;
            total_new = sys.materialize(Some("created total"), loc.clone(), &(total_new + &out.value))?;
            slots.push(out);
        }

        let balanced = is_equal(sys, loc.clone(), &total_existing, &total_new)?;
        sys.assert_eq(
            Some("value conservation"),
            loc.clone(),
            balanced.to_field_var(),
            FieldVar::one(),
        )?;

        // public outputs
        let new_null_root = expose(sys, &loc, slots.iter().map(|s| &s.null_root))?;
        let new_commitment_root = expose(sys, &loc, slots.iter().map(|s| &s.commitment_root))?;
        let new_commitment_hash = expose(sys, &loc, slots.iter().map(|s| &s.commitment_hash))?;

        let _context_sqrd = context.square(Some("context binding"), loc.clone(), sys)?;

        Ok(PoolOutputVars {
            new_null_root,
            new_commitment_root,
            new_commitment_hash,
        })
    })?;
    Ok(outputs)
}

/// A pool circuit of a fixed shape.
#[derive(Debug, Clone, Copy)]
pub struct PoolCircuit {
    config: PoolConfig,
}

/// A witness run of the pool circuit.
pub struct PoolWitness {
    pub state: RunState<Fr>,
    pub outputs: PoolOutputs,
}

impl PoolWitness {
    /// Reports per-constraint satisfaction and the complete assignment.
    pub fn evaluate(&self) -> PoolResult<Evaluation<Fr>> {
        Ok(self.state.evaluate()?)
    }

    pub fn is_satisfied(&self) -> PoolResult<bool> {
        Ok(self.evaluate()?.is_satisfied())
    }
}

impl PoolCircuit {
    pub fn new(config: PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Builds the constraint system alone.
    pub fn compile(&self) -> PoolResult<RunState<Fr>> {
        let mut sys = RunState::compile();
        privacy_pool(&mut sys, &self.config, &PoolInputs::zeroed(&self.config))?;
        sys.seal()?;
        debug!(
            "compiled {}: {} constraints, {} variables",
            self.config,
            sys.num_constraints(),
            sys.num_vars()
        );
        Ok(sys)
    }

    /// Generates the witness for `inputs`. A witness that fails a check is
    /// still returned; see [PoolWitness::evaluate].
    pub fn witness(&self, inputs: &PoolInputs) -> PoolResult<PoolWitness> {
        let mut sys = RunState::witness();
        let vars = privacy_pool(&mut sys, &self.config, inputs)?;
        sys.seal()?;
        let outputs = vars.read(&sys);
        debug!(
            "generated a witness for {}: {} constraints, {} variables",
            self.config,
            sys.num_constraints(),
            sys.num_vars()
        );
        Ok(PoolWitness {
            state: sys,
            outputs,
        })
    }
}

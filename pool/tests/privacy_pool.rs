use ark_bn254::Fr;
use ark_std::UniformRand;
use pool_curves::{babyjubjub::private_to_public, Fs};
use pool_utils::tests::make_test_rng;
use privacy_pool::{
    circuit::{PoolCircuit, PoolWitness},
    commitment::{native::scalar_to_base, NativeCommitment},
    merkle::LeanImt,
    PoolConfig, PoolInputs, PoolWitnessBuilder,
};
use rand::{rngs::StdRng, Rng};
use rayon::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const DEPTH: usize = 4;

fn scope() -> Fr {
    Fr::from(0xC0FFEEu64)
}

fn commitment(rng: &mut StdRng, value: u64) -> NativeCommitment {
    NativeCommitment::new(
        Fr::from(value),
        scope(),
        Fs::rand(rng),
        private_to_public(&Fs::rand(rng)),
        Fr::from(rng.gen::<u64>()),
    )
    .unwrap()
}

struct Scenario {
    circuit: PoolCircuit,
    tree: LeanImt,
    spent: Vec<NativeCommitment>,
    created: Vec<NativeCommitment>,
}

/// A tree of four leaves holding the spent commitments among unrelated ones,
/// so that every membership proof has depth 2.
fn scenario(spent: &[u64], created: &[u64]) -> Scenario {
    let mut rng = make_test_rng(Some([7; 32]));
    let spent: Vec<_> = spent.iter().map(|v| commitment(&mut rng, *v)).collect();
    let created: Vec<_> = created.iter().map(|v| commitment(&mut rng, *v)).collect();

    let mut tree = LeanImt::new();
    tree.insert(Fr::rand(&mut rng)).unwrap();
    for c in &spent {
        tree.insert(c.commitment_root).unwrap();
    }
    while tree.size() < 4 {
        tree.insert(Fr::rand(&mut rng)).unwrap();
    }

    let config = PoolConfig::new(DEPTH, spent.len(), created.len()).unwrap();
    Scenario {
        circuit: PoolCircuit::new(config).unwrap(),
        tree,
        spent,
        created,
    }
}

impl Scenario {
    fn inputs(&self, deposit: u64, withdrawal: u64) -> PoolInputs {
        let builder = PoolWitnessBuilder::new(*self.circuit.config(), scope())
            .context(Fr::from(99u64))
            .extern_io(Fr::from(deposit), Fr::from(withdrawal));
        let builder = self.spent.iter().cloned().fold(builder, |b, c| b.spend(c));
        let builder = self.created.iter().cloned().fold(builder, |b, c| b.create(c));
        builder.build(&self.tree).unwrap()
    }

    fn run(&self, inputs: &PoolInputs) -> PoolWitness {
        self.circuit.witness(inputs).unwrap()
    }
}

fn zero() -> Fr {
    Fr::from(0u64)
}

#[test]
fn test_balanced_pool_is_satisfied() {
    init_logger();
    let s = scenario(&[30, 12], &[25, 17]);
    let witness = s.run(&s.inputs(0, 0));
    let evaluation = witness.evaluate().unwrap();
    assert!(evaluation.is_satisfied());

    let out = &witness.outputs;
    for (i, c) in s.spent.iter().enumerate() {
        assert_eq!(out.new_null_root[i], c.null_root);
        assert_eq!(out.new_commitment_root[i], zero());
        assert_eq!(out.new_commitment_hash[i], zero());
    }
    for (i, c) in s.created.iter().enumerate() {
        let k = s.spent.len() + i;
        assert_eq!(out.new_null_root[k], zero());
        assert_eq!(out.new_commitment_root[k], c.commitment_root);
        assert_eq!(out.new_commitment_hash[k], c.hash);
    }

    assert_eq!(evaluation.public_outputs(), out.flatten());
    // scope, depth, context, externIO, state root, then per new slot a salt
    // point and a ciphertext
    assert_eq!(evaluation.public_inputs().len(), 6 + 2 * (2 + 7));
}

#[test]
fn test_extern_io_enters_the_balance() {
    init_logger();
    let s = scenario(&[30, 12], &[20, 17]);
    assert!(s.run(&s.inputs(0, 5)).is_satisfied().unwrap());

    let s = scenario(&[30, 12], &[25, 20]);
    assert!(s.run(&s.inputs(3, 0)).is_satisfied().unwrap());
}

#[test]
fn test_off_by_one_is_unsatisfiable() {
    init_logger();
    let s = scenario(&[30, 12], &[25, 17]);
    for (deposit, withdrawal) in [(1, 0), (0, 1)] {
        let evaluation = s.run(&s.inputs(deposit, withdrawal)).evaluate().unwrap();
        let labels: Vec<_> = evaluation.unsatisfied().map(|c| c.label).collect();
        assert_eq!(labels, vec!["value conservation"]);
    }

    let s = scenario(&[30, 12], &[26, 17]);
    assert!(!s.run(&s.inputs(0, 0)).is_satisfied().unwrap());

    let s = scenario(&[29, 12], &[25, 17]);
    assert!(!s.run(&s.inputs(0, 0)).is_satisfied().unwrap());
}

#[test]
fn test_wrong_key_drops_the_spend() {
    init_logger();
    // only the second spend counts
    let mut s = scenario(&[30, 12], &[5, 7]);
    let mut rng = make_test_rng(Some([8; 32]));
    s.spent[0].private_key = scalar_to_base(&Fs::rand(&mut rng));

    let witness = s.run(&s.inputs(0, 0));
    assert!(witness.is_satisfied().unwrap());
    assert_eq!(witness.outputs.new_commitment_root[0], zero());
    assert_eq!(witness.outputs.new_commitment_root[1], zero());
    assert_eq!(witness.outputs.new_null_root[1], s.spent[1].null_root);
}

#[test]
fn test_flipped_ciphertext_invalidates_the_spend() {
    init_logger();
    let s = scenario(&[30, 12], &[5, 7]);
    let mut inputs = s.inputs(0, 0);
    inputs.ex_ciphertext[0][3] += Fr::from(1u64);

    let witness = s.run(&inputs);
    assert!(witness.is_satisfied().unwrap());
    let hash = witness.outputs.new_commitment_hash[0];
    assert_ne!(hash, zero());
    assert_ne!(hash, s.spent[0].hash);
    assert_eq!(witness.outputs.new_commitment_root[0], zero());
}

#[test]
fn test_stale_state_root_invalidates_every_spend() {
    init_logger();
    let s = scenario(&[30, 12], &[40, 2]);
    let mut inputs = s.inputs(0, 0);
    inputs.existing_state_root += Fr::from(1u64);
    // the spends no longer count, so the outputs cannot be covered
    assert!(!s.run(&inputs).is_satisfied().unwrap());

    let s = scenario(&[30, 12], &[]);
    let mut inputs = s.inputs(0, 0);
    inputs.existing_state_root += Fr::from(1u64);
    let witness = s.run(&inputs);
    assert!(witness.is_satisfied().unwrap());
    for (i, c) in s.spent.iter().enumerate() {
        assert_eq!(witness.outputs.new_commitment_root[i], c.commitment_root);
        assert_eq!(witness.outputs.new_commitment_hash[i], c.hash);
    }
}

#[test]
fn test_new_commitment_for_another_key() {
    init_logger();
    let mut s = scenario(&[12], &[12]);
    let mut rng = make_test_rng(Some([9; 32]));
    s.created[0].private_key = scalar_to_base(&Fs::rand(&mut rng));

    // the created value is dropped, so only a withdrawal balances the spend
    let witness = s.run(&s.inputs(0, 12));
    assert!(witness.is_satisfied().unwrap());
    assert_ne!(witness.outputs.new_null_root[1], zero());
    assert_eq!(witness.outputs.new_commitment_root[1], zero());
    assert_ne!(witness.outputs.new_commitment_hash[1], zero());
}

#[test]
fn test_compile_matches_witness_shape() {
    init_logger();
    let s = scenario(&[30], &[30]);
    let compiled = s.circuit.compile().unwrap();
    let witness = s.run(&s.inputs(0, 0));
    assert_eq!(compiled.num_constraints(), witness.state.num_constraints());
    assert_eq!(compiled.num_vars(), witness.state.num_vars());
    assert_eq!(compiled.wires(), witness.state.wires());
}

#[test]
fn test_malformed_inputs_are_rejected() {
    let s = scenario(&[30], &[30]);
    let mut inputs = s.inputs(0, 0);
    inputs.nonce.pop();
    assert!(s.circuit.witness(&inputs).is_err());
}

#[test]
fn test_witnesses_are_deterministic_across_threads() {
    init_logger();
    let s = scenario(&[30], &[30]);
    let json = s.inputs(0, 0).to_json().unwrap();

    let assignments: Vec<Vec<Fr>> = (0..4)
        .into_par_iter()
        .map(|_| {
            let inputs = PoolInputs::from_json(&json).unwrap();
            let evaluation = s.run(&inputs).evaluate().unwrap();
            assert!(evaluation.is_satisfied());
            evaluation.wires.iter().map(|w| w.value).collect()
        })
        .collect();
    assert!(assignments.windows(2).all(|w| w[0] == w[1]));
}

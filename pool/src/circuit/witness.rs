use ark_bn254::Fr;
use log::debug;

use crate::{
    circuit::{PoolConfig, PoolInputs},
    commitment::NativeCommitment,
    error::{PoolError, PoolResult},
    merkle::LeanImt,
};

/// Assembles [PoolInputs] from native commitments and the state tree.
#[derive(Clone, Debug)]
pub struct PoolWitnessBuilder {
    config: PoolConfig,
    scope: Fr,
    context: Fr,
    extern_io: [Fr; 2],
    spent: Vec<NativeCommitment>,
    created: Vec<NativeCommitment>,
}

impl PoolWitnessBuilder {
    pub fn new(config: PoolConfig, scope: Fr) -> Self {
        let zero = Fr::from(0u64);
        Self {
            config,
            scope,
            context: zero,
            extern_io: [zero; 2],
            spent: vec![],
            created: vec![],
        }
    }

    pub fn context(mut self, context: Fr) -> Self {
        self.context = context;
        self
    }

    /// Value deposited into the pool and value withdrawn from it.
    pub fn extern_io(mut self, deposit: Fr, withdrawal: Fr) -> Self {
        self.extern_io = [deposit, withdrawal];
        self
    }

    /// Spends a commitment whose root is a leaf of the state tree.
    pub fn spend(mut self, commitment: NativeCommitment) -> Self {
        self.spent.push(commitment);
        self
    }

    pub fn create(mut self, commitment: NativeCommitment) -> Self {
        self.created.push(commitment);
        self
    }

    /// Looks the spent commitments up in `tree` and lays every input out in
    /// signal order.
    ///
    /// The circuit takes a single tree depth, so every spent commitment must
    /// have a membership proof of the same depth. A proof shorter than the
    /// tree depth happens for the last leaf of a tree whose size is not a
    /// power of two.
    pub fn build(&self, tree: &LeanImt) -> PoolResult<PoolInputs> {
        self.config.validate()?;
        if self.spent.len() != self.config.n_existing || self.created.len() != self.config.n_new {
            return Err(PoolError::InputShape(format!(
                "{} spent and {} created commitments for {}",
                self.spent.len(),
                self.created.len(),
                self.config
            )));
        }

        let mut inputs = PoolInputs {
            scope: self.scope,
            context: self.context,
            extern_io: self.extern_io,
            existing_state_root: tree.root().unwrap_or_default(),
            actual_tree_depth: Fr::from(tree.depth() as u64),
            ..PoolInputs::default()
        };

        let mut depth = None;
        for (i, c) in self.spent.iter().enumerate() {
            let leaf = tree
                .index_of(&c.commitment_root)
                .ok_or(PoolError::UnknownCommitment(i))?;
            let proof = tree.generate_proof(leaf)?;
            let siblings =
                proof
                    .padded_siblings(self.config.max_tree_depth)
                    .ok_or(PoolError::TreeTooDeep {
                        depth: proof.depth(),
                        max: self.config.max_tree_depth,
                    })?;
            match depth {
                Some(d) if d != proof.depth() => {
                    return Err(PoolError::InputShape(format!(
                        "spent commitments have proofs of depth {d} and {}",
                        proof.depth()
                    )));
                }
                _ => depth = Some(proof.depth()),
            }

            inputs.ex_salt_public_key.push([c.salt_public_key.x, c.salt_public_key.y]);
            inputs.ex_ciphertext.push(c.ciphertext.clone());
            inputs.ex_index.push(Fr::from(proof.index));
            inputs.ex_siblings.push(siblings);
        }
        if let Some(depth) = depth {
            inputs.actual_tree_depth = Fr::from(depth as u64);
        }

        for c in &self.created {
            inputs.new_salt_public_key.push([c.salt_public_key.x, c.salt_public_key.y]);
            inputs.new_ciphertext.push(c.ciphertext.clone());
        }
        for c in self.spent.iter().chain(&self.created) {
            inputs.private_key.push(c.private_key);
            inputs.nonce.push(c.nonce);
        }

        inputs.check_shape(&self.config)?;
        debug!(
            "built the inputs of {} over a tree of {} leaves",
            self.config,
            tree.size()
        );
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::UniformRand;
    use pool_curves::{babyjubjub::private_to_public, Fs};
    use pool_utils::tests::make_test_rng;

    fn commitment(value: u64) -> NativeCommitment {
        let mut rng = make_test_rng(None);
        NativeCommitment::new(
            Fr::from(value),
            Fr::from(9u64),
            Fs::rand(&mut rng),
            private_to_public(&Fs::rand(&mut rng)),
            Fr::from(value),
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_commitment() {
        let config = PoolConfig::new(4, 1, 1).unwrap();
        let tree = LeanImt::from_leaves(&[Fr::from(1u64), Fr::from(2u64)]).unwrap();
        let res = PoolWitnessBuilder::new(config, Fr::from(9u64))
            .spend(commitment(5))
            .create(commitment(5))
            .build(&tree);
        assert!(matches!(res, Err(PoolError::UnknownCommitment(0))));
    }

    #[test]
    fn test_slot_counts_must_match() {
        let config = PoolConfig::new(4, 1, 1).unwrap();
        let res = PoolWitnessBuilder::new(config, Fr::from(9u64))
            .create(commitment(5))
            .build(&LeanImt::new());
        assert!(matches!(res, Err(PoolError::InputShape(_))));
    }

    #[test]
    fn test_tree_too_deep() {
        let config = PoolConfig::new(1, 1, 0).unwrap();
        let c = commitment(5);
        let leaves = [Fr::from(1u64), Fr::from(2u64), c.commitment_root, Fr::from(3u64)];
        let tree = LeanImt::from_leaves(&leaves).unwrap();
        let res = PoolWitnessBuilder::new(config, Fr::from(9u64))
            .spend(c)
            .build(&tree);
        assert!(matches!(res, Err(PoolError::TreeTooDeep { depth: 2, max: 1 })));
    }

    #[test]
    fn test_layout() {
        let config = PoolConfig::new(3, 1, 1).unwrap();
        let spent = commitment(5);
        let created = commitment(6);
        let tree = LeanImt::from_leaves(&[Fr::from(1u64), spent.commitment_root]).unwrap();
        let inputs = PoolWitnessBuilder::new(config, Fr::from(9u64))
            .extern_io(Fr::from(1u64), Fr::from(0u64))
            .spend(spent.clone())
            .create(created.clone())
            .build(&tree)
            .unwrap();
        assert_eq!(inputs.existing_state_root, tree.root().unwrap());
        assert_eq!(inputs.actual_tree_depth, Fr::from(1u64));
        assert_eq!(inputs.ex_index, vec![Fr::from(1u64)]);
        assert_eq!(inputs.private_key, vec![spent.private_key, created.private_key]);
        assert_eq!(inputs.ex_siblings[0].len(), 3);
    }
}

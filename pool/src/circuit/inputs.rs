//! The assignment of a pool circuit's inputs and outputs.
//!
//! Field elements are written as decimal strings, with the signal names of
//! the circuit in camel case.

use ark_bn254::Fr;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use pool_utils::serialization::DecimalString;

use crate::{
    circuit::PoolConfig,
    error::{PoolError, PoolResult},
};

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInputs {
    // public
    #[serde_as(as = "DecimalString")]
    pub scope: Fr,
    #[serde_as(as = "DecimalString")]
    pub actual_tree_depth: Fr,
    #[serde_as(as = "DecimalString")]
    pub context: Fr,
    /// Value entering the pool, then value leaving it.
    #[serde_as(as = "[DecimalString; 2]")]
    #[serde(rename = "externIO")]
    pub extern_io: [Fr; 2],
    #[serde_as(as = "DecimalString")]
    pub existing_state_root: Fr,
    #[serde_as(as = "Vec<[DecimalString; 2]>")]
    pub new_salt_public_key: Vec<[Fr; 2]>,
    #[serde_as(as = "Vec<Vec<DecimalString>>")]
    pub new_ciphertext: Vec<Vec<Fr>>,

    // private
    /// One key per slot, spent commitments first.
    #[serde_as(as = "Vec<DecimalString>")]
    pub private_key: Vec<Fr>,
    #[serde_as(as = "Vec<DecimalString>")]
    pub nonce: Vec<Fr>,
    #[serde_as(as = "Vec<[DecimalString; 2]>")]
    pub ex_salt_public_key: Vec<[Fr; 2]>,
    #[serde_as(as = "Vec<Vec<DecimalString>>")]
    pub ex_ciphertext: Vec<Vec<Fr>>,
    #[serde_as(as = "Vec<DecimalString>")]
    pub ex_index: Vec<Fr>,
    #[serde_as(as = "Vec<Vec<DecimalString>>")]
    pub ex_siblings: Vec<Vec<Fr>>,
}

impl PoolInputs {
    /// All-zero inputs of the right shape, enough to compile the circuit.
    pub fn zeroed(config: &PoolConfig) -> Self {
        let zero = Fr::from(0u64);
        Self {
            new_salt_public_key: vec![[zero; 2]; config.n_new],
            new_ciphertext: vec![vec![zero; config.cipher_len]; config.n_new],
            private_key: vec![zero; config.n_slots()],
            nonce: vec![zero; config.n_slots()],
            ex_salt_public_key: vec![[zero; 2]; config.n_existing],
            ex_ciphertext: vec![vec![zero; config.cipher_len]; config.n_existing],
            ex_index: vec![zero; config.n_existing],
            ex_siblings: vec![vec![zero; config.max_tree_depth]; config.n_existing],
            ..Self::default()
        }
    }

    /// Checks that every array has the length `config` expects.
    pub fn check_shape(&self, config: &PoolConfig) -> PoolResult<()> {
        let lengths = [
            ("newSaltPublicKey", self.new_salt_public_key.len(), config.n_new),
            ("newCiphertext", self.new_ciphertext.len(), config.n_new),
            ("privateKey", self.private_key.len(), config.n_slots()),
            ("nonce", self.nonce.len(), config.n_slots()),
            ("exSaltPublicKey", self.ex_salt_public_key.len(), config.n_existing),
            ("exCiphertext", self.ex_ciphertext.len(), config.n_existing),
            ("exIndex", self.ex_index.len(), config.n_existing),
            ("exSiblings", self.ex_siblings.len(), config.n_existing),
        ];
        for (name, actual, expected) in lengths {
            if actual != expected {
                return Err(PoolError::InputShape(format!(
                    "{name} has {actual} entries, {expected} expected"
                )));
            }
        }

        let inner = self
            .new_ciphertext
            .iter()
            .chain(&self.ex_ciphertext)
            .map(|c| ("ciphertext", c.len(), config.cipher_len))
            .chain(
                self.ex_siblings
                    .iter()
                    .map(|s| ("exSiblings", s.len(), config.max_tree_depth)),
            );
        for (name, actual, expected) in inner {
            if actual != expected {
                return Err(PoolError::InputShape(format!(
                    "an entry of {name} has {actual} elements, {expected} expected"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> PoolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PoolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The public outputs of a pool circuit, one entry per slot, spent
/// commitments first.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolOutputs {
    #[serde_as(as = "Vec<DecimalString>")]
    pub new_null_root: Vec<Fr>,
    #[serde_as(as = "Vec<DecimalString>")]
    pub new_commitment_root: Vec<Fr>,
    #[serde_as(as = "Vec<DecimalString>")]
    pub new_commitment_hash: Vec<Fr>,
}

impl PoolOutputs {
    /// The outputs in the order they are exposed as public outputs.
    pub fn flatten(&self) -> Vec<Fr> {
        self.new_null_root
            .iter()
            .chain(&self.new_commitment_root)
            .chain(&self.new_commitment_hash)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_has_the_right_shape() {
        let config = PoolConfig::new(5, 3, 1).unwrap();
        let inputs = PoolInputs::zeroed(&config);
        inputs.check_shape(&config).unwrap();
        assert!(inputs.check_shape(&PoolConfig::default()).is_err());
    }

    #[test]
    fn test_short_siblings_are_rejected() {
        let config = PoolConfig::new(5, 1, 1).unwrap();
        let mut inputs = PoolInputs::zeroed(&config);
        inputs.ex_siblings[0].pop();
        assert!(matches!(inputs.check_shape(&config), Err(PoolError::InputShape(_))));
    }

    #[test]
    fn test_json_uses_signal_names() {
        let config = PoolConfig::new(2, 1, 1).unwrap();
        let mut inputs = PoolInputs::zeroed(&config);
        inputs.extern_io = [Fr::from(5u64), Fr::from(6u64)];
        let json = inputs.to_json().unwrap();
        assert!(json.contains("\"externIO\""));
        assert!(json.contains("\"exSiblings\""));
        assert_eq!(PoolInputs::from_json(&json).unwrap(), inputs);
    }
}

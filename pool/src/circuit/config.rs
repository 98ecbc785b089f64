use std::fmt;

use pool_poseidon::cipher::ciphertext_length;
use serde::{Deserialize, Serialize};

use crate::{
    commitment::TUPLE_LEN,
    error::{PoolError, PoolResult},
};

/// Deepest state tree a pool circuit can be built for.
pub const MAX_TREE_DEPTH: usize = 32;

/// Shape of a pool circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PoolConfig {
    /// Number of siblings in a membership proof.
    pub max_tree_depth: usize,
    /// Elements of a commitment ciphertext, tag included.
    pub cipher_len: usize,
    /// Elements of a commitment tuple.
    pub tuple_len: usize,
    /// Commitments spent.
    pub n_existing: usize,
    /// Commitments created.
    pub n_new: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_tree_depth: MAX_TREE_DEPTH,
            cipher_len: ciphertext_length(TUPLE_LEN),
            tuple_len: TUPLE_LEN,
            n_existing: 2,
            n_new: 2,
        }
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PrivacyPool({}, {}, {}, {}, {})",
            self.max_tree_depth, self.cipher_len, self.tuple_len, self.n_existing, self.n_new
        )
    }
}

impl PoolConfig {
    /// A configuration with the default tuple and a custom shape.
    pub fn new(max_tree_depth: usize, n_existing: usize, n_new: usize) -> PoolResult<Self> {
        let config = Self {
            max_tree_depth,
            n_existing,
            n_new,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn n_slots(&self) -> usize {
        self.n_existing + self.n_new
    }

    pub fn validate(&self) -> PoolResult<()> {
        let invalid = |reason: String| Err(PoolError::InvalidConfig(reason));
        if self.tuple_len != TUPLE_LEN {
            return invalid(format!(
                "a commitment tuple has {TUPLE_LEN} elements, not {}",
                self.tuple_len
            ));
        }
        let expected = ciphertext_length(self.tuple_len);
        if self.cipher_len != expected {
            return invalid(format!(
                "a tuple of {} elements encrypts to {expected} elements, not {}",
                self.tuple_len, self.cipher_len
            ));
        }
        if self.max_tree_depth == 0 || self.max_tree_depth > MAX_TREE_DEPTH {
            return invalid(format!(
                "the tree depth must be between 1 and {MAX_TREE_DEPTH}, got {}",
                self.max_tree_depth
            ));
        }
        if self.n_slots() == 0 {
            return invalid("the pool needs at least one commitment slot".to_string());
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> PoolResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PoolConfig::default();
        config.validate().unwrap();
        assert_eq!(config.to_string(), "PrivacyPool(32, 7, 4, 2, 2)");
    }

    #[test]
    fn test_json() {
        let json = r#"{"maxTreeDepth":4,"cipherLen":7,"tupleLen":4,"nExisting":1,"nNew":3}"#;
        let config = PoolConfig::from_json(json).unwrap();
        assert_eq!(config, PoolConfig::new(4, 1, 3).unwrap());
        assert_eq!(serde_json::to_string(&config).unwrap(), json);
    }

    #[test]
    fn test_bad_shapes() {
        let bad = [
            r#"{"maxTreeDepth":4,"cipherLen":7,"tupleLen":5,"nExisting":1,"nNew":1}"#,
            r#"{"maxTreeDepth":4,"cipherLen":6,"tupleLen":4,"nExisting":1,"nNew":1}"#,
            r#"{"maxTreeDepth":33,"cipherLen":7,"tupleLen":4,"nExisting":1,"nNew":1}"#,
            r#"{"maxTreeDepth":0,"cipherLen":7,"tupleLen":4,"nExisting":1,"nNew":1}"#,
            r#"{"maxTreeDepth":4,"cipherLen":7,"tupleLen":4,"nExisting":0,"nNew":0}"#,
        ];
        for json in bad {
            assert!(
                matches!(PoolConfig::from_json(json), Err(PoolError::InvalidConfig(_))),
                "{json}"
            );
        }
        let unknown = r#"{"maxTreeDepth":4,"cipherLen":7,"tupleLen":4,"nExisting":1,"nNew":1,"x":0}"#;
        assert!(matches!(PoolConfig::from_json(unknown), Err(PoolError::Json(_))));
    }
}

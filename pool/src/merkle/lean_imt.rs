//! A native lean incremental Merkle tree.
//!
//! The tree grows one leaf at a time and only ever has as many levels as its
//! size requires. A node without a right sibling is carried up unchanged
//! instead of being hashed with a zero leaf, so proofs only list the levels
//! where a sibling exists.

use ark_bn254::Fr;
use pool_poseidon::PoseidonError;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use pool_utils::serialization::DecimalString;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("a full tree needs a power of two leaves, at least 2, got {0}")]
    NotPowerOfTwo(usize),
    #[error("leaf {index} is out of bounds for a tree of {size} leaves")]
    OutOfBounds { index: usize, size: usize },
    #[error("the tree is empty")]
    Empty,
    #[error(transparent)]
    Poseidon(#[from] PoseidonError),
}

/// Hashes two children the way every tree of the pool does.
pub fn hash_pair(left: Fr, right: Fr) -> Result<Fr, MerkleError> {
    Ok(pool_poseidon::hash(&[left, right])?)
}

/// Root of the full binary tree over `leaves`.
pub fn merkle_root(leaves: &[Fr]) -> Result<Fr, MerkleError> {
    if leaves.len() < 2 || !leaves.len().is_power_of_two() {
        return Err(MerkleError::NotPowerOfTwo(leaves.len()));
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks_exact(2)
            .map(|pair| hash_pair(pair[0], pair[1]))
            .collect::<Result<_, _>>()?;
    }
    Ok(level[0])
}

#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeanImt {
    /// `nodes[0]` are the leaves, the last level holds the root alone.
    #[serde_as(as = "Vec<Vec<DecimalString>>")]
    nodes: Vec<Vec<Fr>>,
}

impl Default for LeanImt {
    fn default() -> Self {
        Self::new()
    }
}

impl LeanImt {
    pub fn new() -> Self {
        Self {
            nodes: vec![vec![]],
        }
    }

    pub fn from_leaves(leaves: &[Fr]) -> Result<Self, MerkleError> {
        let mut tree = Self::new();
        for leaf in leaves {
            tree.insert(*leaf)?;
        }
        Ok(tree)
    }

    pub fn size(&self) -> usize {
        self.nodes[0].len()
    }

    pub fn depth(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn leaves(&self) -> &[Fr] {
        &self.nodes[0]
    }

    pub fn root(&self) -> Option<Fr> {
        self.nodes.last().and_then(|level| level.first()).copied()
    }

    pub fn index_of(&self, leaf: &Fr) -> Option<usize> {
        self.nodes[0].iter().position(|l| l == leaf)
    }

    /// Appends `leaf` and returns its index.
    pub fn insert(&mut self, leaf: Fr) -> Result<usize, MerkleError> {
        let leaf_index = self.size();
        if (1usize << self.depth()) < leaf_index + 1 {
            self.nodes.push(vec![]);
        }

        let depth = self.depth();
        let mut node = leaf;
        let mut index = leaf_index;
        for level in 0..depth {
            let nodes = &mut self.nodes[level];
            if index < nodes.len() {
                nodes[index] = node;
            } else {
                nodes.push(node);
            }
            if index & 1 == 1 {
                node = hash_pair(nodes[index - 1], node)?;
            }
            index >>= 1;
        }
        self.nodes[depth] = vec![node];
        Ok(leaf_index)
    }

    pub fn generate_proof(&self, leaf_index: usize) -> Result<LeanImtProof, MerkleError> {
        let leaf = *self
            .nodes[0]
            .get(leaf_index)
            .ok_or(MerkleError::OutOfBounds {
                index: leaf_index,
                size: self.size(),
            })?;
        let root = self.root().ok_or(MerkleError::Empty)?;

        let mut siblings = vec![];
        let mut path = 0u64;
        let mut index = leaf_index;
        for level in &self.nodes[..self.depth()] {
            let is_right = index & 1 == 1;
            let sibling_index = if is_right { index - 1 } else { index + 1 };
            if let Some(sibling) = level.get(sibling_index) {
                path |= u64::from(is_right) << siblings.len();
                siblings.push(*sibling);
            }
            index >>= 1;
        }

        Ok(LeanImtProof {
            root,
            leaf,
            index: path,
            siblings,
        })
    }
}

/// Inclusion of `leaf` under `root`. Bit `i` of `index` is set when the
/// node at level `i` of the path is a right child.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeanImtProof {
    #[serde_as(as = "DecimalString")]
    pub root: Fr,
    #[serde_as(as = "DecimalString")]
    pub leaf: Fr,
    pub index: u64,
    #[serde_as(as = "Vec<DecimalString>")]
    pub siblings: Vec<Fr>,
}

impl LeanImtProof {
    /// The number of levels the proof actually climbs.
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    pub fn verify(&self) -> Result<bool, MerkleError> {
        let mut node = self.leaf;
        for (i, sibling) in self.siblings.iter().enumerate() {
            node = if (self.index >> i) & 1 == 1 {
                hash_pair(*sibling, node)?
            } else {
                hash_pair(node, *sibling)?
            };
        }
        Ok(node == self.root)
    }

    /// The siblings padded with zeros to `max_depth`, as the inclusion
    /// circuit expects them. `None` if the proof is deeper than that.
    pub fn padded_siblings(&self, max_depth: usize) -> Option<Vec<Fr>> {
        if self.siblings.len() > max_depth {
            return None;
        }
        let mut siblings = self.siblings.clone();
        siblings.resize(max_depth, Fr::from(0u64));
        Some(siblings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(n: u64) -> Vec<Fr> {
        (1..=n).map(Fr::from).collect()
    }

    #[test]
    fn test_single_leaf_is_the_root() {
        let tree = LeanImt::from_leaves(&leaves(1)).unwrap();
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.root(), Some(Fr::from(1u64)));
        let proof = tree.generate_proof(0).unwrap();
        assert!(proof.siblings.is_empty());
        assert!(proof.verify().unwrap());
    }

    #[test]
    fn test_odd_node_is_carried_up() {
        let tree = LeanImt::from_leaves(&leaves(3)).unwrap();
        assert_eq!(tree.depth(), 2);
        let left = hash_pair(Fr::from(1u64), Fr::from(2u64)).unwrap();
        let expected = hash_pair(left, Fr::from(3u64)).unwrap();
        assert_eq!(tree.root(), Some(expected));

        let proof = tree.generate_proof(2).unwrap();
        assert_eq!(proof.siblings, vec![left]);
        assert_eq!(proof.index, 1);
        assert!(proof.verify().unwrap());
    }

    #[test]
    fn test_power_of_two_matches_full_tree() {
        for n in [2, 4, 8, 16] {
            let tree = LeanImt::from_leaves(&leaves(n)).unwrap();
            assert_eq!(tree.root(), Some(merkle_root(&leaves(n)).unwrap()));
        }
    }

    #[test]
    fn test_every_proof_verifies() {
        let tree = LeanImt::from_leaves(&leaves(13)).unwrap();
        for i in 0..tree.size() {
            let proof = tree.generate_proof(i).unwrap();
            assert!(proof.verify().unwrap(), "leaf {i}");
            assert!(proof.depth() <= tree.depth());
        }
    }

    #[test]
    fn test_tampered_proof_fails() {
        let tree = LeanImt::from_leaves(&leaves(6)).unwrap();
        let mut proof = tree.generate_proof(3).unwrap();
        proof.index ^= 1;
        assert!(!proof.verify().unwrap());
    }

    #[test]
    fn test_errors() {
        assert_eq!(merkle_root(&leaves(3)), Err(MerkleError::NotPowerOfTwo(3)));
        let tree = LeanImt::new();
        assert_eq!(tree.root(), None);
        assert!(matches!(
            tree.generate_proof(0),
            Err(MerkleError::OutOfBounds { index: 0, size: 0 })
        ));
    }

    #[test]
    fn test_proof_json() {
        let tree = LeanImt::from_leaves(&leaves(5)).unwrap();
        let proof = tree.generate_proof(4).unwrap();
        let json = serde_json::to_string(&proof).unwrap();
        let back: LeanImtProof = serde_json::from_str(&json).unwrap();
        assert_eq!(back, proof);
        // leaf 4 has a sibling only at the top level
        assert_eq!(proof.depth(), 1);
        assert_eq!(proof.padded_siblings(0), None);
        assert_eq!(proof.padded_siblings(1).unwrap().len(), 1);
        assert_eq!(proof.padded_siblings(4).unwrap().len(), 4);
    }
}

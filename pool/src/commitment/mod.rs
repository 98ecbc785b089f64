//! The commitment protocol.
//!
//! A commitment is the tuple `[value, scope, secret.x, secret.y]` encrypted
//! under a key shared between the owner and a salt point. Its public face is
//! the ciphertext, the hash of the tuple and the commitment root, the root of
//! the 8-leaf tree over the ciphertext and the hash. Ownership is proven by
//! rederiving every key from the private key and opening the ciphertext.
//!
//! None of these gadgets fail on a bad witness: an invalid ownership zeroes
//! the commitment root, which then fails any membership check.

use std::borrow::Cow;

use ark_bn254::Fr;

use crate::{
    ec::{baby_priv_to_pub, ecdh, EdwardsVar},
    gadgets::comparators::is_equal,
    merkle::{compute_merkle_tree_root, lean_imt_inclusion_proof},
    poseidon::{poseidon_decrypt_without_check, poseidon_std},
    snarky::{errors::SnarkyCompilationError, prelude::*},
};

pub mod native;

pub use native::{CommitmentKeyValues, NativeCommitment};

/// Number of elements of a commitment tuple.
pub const TUPLE_LEN: usize = 4;

/// The keys of a commitment, all derived from the owner's private key.
#[derive(Debug, Clone)]
pub struct CommitmentKeys {
    /// `private_key · BASE8`
    pub public_key: EdwardsVar,
    /// `private_key · public_key`, stored inside the tuple.
    pub secret_key: EdwardsVar,
    /// `private_key · salt_public_key`, the cipher key.
    pub encryption_key: EdwardsVar,
}

pub fn recover_commitment_keys(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    private_key: &FieldVar<Fr>,
    salt_public_key: &EdwardsVar,
) -> SnarkyResult<CommitmentKeys> {
    sys.scoped("recover_commitment_keys", |sys| {
        let public_key = baby_priv_to_pub(sys, loc.clone(), private_key)?;
        let secret_key = ecdh(sys, loc.clone(), private_key, &public_key)?;
        let encryption_key = ecdh(sys, loc, private_key, salt_public_key)?;
        Ok(CommitmentKeys {
            public_key,
            secret_key,
            encryption_key,
        })
    })
}

/// Opens `ciphertext` without checking its tag and returns the first
/// `tuple_len` plaintext elements with their hash.
pub fn decrypt_commitment(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    encryption_key: &EdwardsVar,
    nonce: &FieldVar<Fr>,
    ciphertext: &[FieldVar<Fr>],
    tuple_len: usize,
) -> SnarkyResult<(Vec<FieldVar<Fr>>, FieldVar<Fr>)> {
    sys.scoped("decrypt_commitment", |sys| {
        let mut tuple = poseidon_decrypt_without_check(
            sys,
            loc.clone(),
            ciphertext,
            nonce,
            &encryption_key.coordinates(),
            tuple_len,
        )?;
        tuple.truncate(tuple_len);
        let hash = poseidon_std(sys, loc, &tuple)?;
        Ok((tuple, hash))
    })
}

/// What an ownership proof reveals about a commitment.
#[derive(Debug, Clone)]
pub struct Ownership {
    pub value: FieldVar<Fr>,
    /// Root of the tree over every key of the commitment. Spending a
    /// commitment publishes it, so a second spend is detectable.
    pub null_root: FieldVar<Fr>,
    /// The commitment root, or 0 when the tuple does not belong to the key.
    pub commitment_root: FieldVar<Fr>,
    pub commitment_hash: FieldVar<Fr>,
}

/// Proves that `private_key` opens `ciphertext` to a tuple bound to `scope`
/// and to the key's own secret point.
#[allow(clippy::too_many_arguments)]
pub fn commitment_ownership_proof(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    scope: &FieldVar<Fr>,
    private_key: &FieldVar<Fr>,
    salt_public_key: &EdwardsVar,
    nonce: &FieldVar<Fr>,
    ciphertext: &[FieldVar<Fr>],
    tuple_len: usize,
) -> SnarkyResult<Ownership> {
    if tuple_len < TUPLE_LEN {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "commitment_ownership_proof",
            reason: format!("a tuple holds at least {TUPLE_LEN} elements, got {tuple_len}"),
        }
        .into());
    }
    sys.scoped("commitment_ownership_proof", |sys| {
        let keys = recover_commitment_keys(sys, loc.clone(), private_key, salt_public_key)?;

        let [pk_x, pk_y] = keys.public_key.coordinates();
        let [sk_x, sk_y] = keys.secret_key.coordinates();
        let [salt_x, salt_y] = salt_public_key.coordinates();
        let [ek_x, ek_y] = keys.encryption_key.coordinates();
        let null_root = compute_merkle_tree_root(
            sys,
            loc.clone(),
            &[pk_x, pk_y, sk_x.clone(), sk_y.clone(), salt_x, salt_y, ek_x, ek_y],
        )?;

        let (tuple, hash) = decrypt_commitment(
            sys,
            loc.clone(),
            &keys.encryption_key,
            nonce,
            ciphertext,
            tuple_len,
        )?;

        let scope_eq = is_equal(sys, loc.clone(), scope, &tuple[1])?;
        let secret_x_eq = is_equal(sys, loc.clone(), &sk_x, &tuple[2])?;
        let secret_y_eq = is_equal(sys, loc.clone(), &sk_y, &tuple[3])?;

        let mut leaves = ciphertext.to_vec();
        leaves.push(hash.clone());
        let candidate_root = compute_merkle_tree_root(sys, loc.clone(), &leaves)?;

        let checks = FieldVar::sum([
            scope_eq.as_field_var(),
            secret_x_eq.as_field_var(),
            secret_y_eq.as_field_var(),
        ]);
        let valid = is_equal(sys, loc.clone(), &checks, &FieldVar::constant(Fr::from(3u64)))?;
        let commitment_root =
            candidate_root.mul(valid.as_field_var(), Some("commitment root"), loc, sys)?;

        Ok(Ownership {
            value: tuple[0].clone(),
            null_root,
            commitment_root,
            commitment_hash: hash,
        })
    })
}

/// The state root recomputed from `commitment_root` and its path.
pub fn commitment_membership_proof(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    actual_depth: &FieldVar<Fr>,
    commitment_root: &FieldVar<Fr>,
    index: &FieldVar<Fr>,
    siblings: &[FieldVar<Fr>],
) -> SnarkyResult<FieldVar<Fr>> {
    sys.scoped("commitment_membership_proof", |sys| {
        lean_imt_inclusion_proof(sys, loc, commitment_root, index, siblings, actual_depth)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_std::UniformRand;
    use pool_curves::{babyjubjub::private_to_public, Fs};
    use pool_utils::tests::make_test_rng;

    struct Allocated {
        scope: FieldVar<Fr>,
        private_key: FieldVar<Fr>,
        salt: EdwardsVar,
        nonce: FieldVar<Fr>,
        ciphertext: Vec<FieldVar<Fr>>,
    }

    fn allocate(sys: &mut RunState<Fr>, c: &NativeCommitment, private_key: Fr) -> Allocated {
        Allocated {
            scope: sys.public_input(loc!(), || c.scope).unwrap(),
            private_key: sys.private_input(loc!(), || private_key).unwrap(),
            salt: sys.private_input(loc!(), || c.salt_public_key).unwrap(),
            nonce: sys.private_input(loc!(), || c.nonce).unwrap(),
            ciphertext: c
                .ciphertext
                .iter()
                .map(|x| sys.private_input(loc!(), || *x).unwrap())
                .collect(),
        }
    }

    fn sample() -> NativeCommitment {
        let mut rng = make_test_rng(None);
        let salt = private_to_public(&Fs::rand(&mut rng));
        NativeCommitment::new(
            Fr::from(1000u64),
            Fr::from(42u64),
            Fs::rand(&mut rng),
            salt,
            Fr::from(u64::rand(&mut rng)),
        )
        .unwrap()
    }

    fn prove(c: &NativeCommitment, private_key: Fr, ciphertext: Option<Vec<Fr>>) -> (Fr, Fr, Fr, Fr) {
        let mut tampered = c.clone();
        if let Some(ciphertext) = ciphertext {
            tampered.ciphertext = ciphertext;
        }
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let a = allocate(&mut sys, &tampered, private_key);
        let o = commitment_ownership_proof(
            &mut sys,
            loc!(),
            &a.scope,
            &a.private_key,
            &a.salt,
            &a.nonce,
            &a.ciphertext,
            TUPLE_LEN,
        )
        .unwrap();
        sys.seal().unwrap();
        (
            sys.read_var(&o.value),
            sys.read_var(&o.null_root),
            sys.read_var(&o.commitment_root),
            sys.read_var(&o.commitment_hash),
        )
    }

    #[test]
    fn test_keys_match_native() {
        let c = sample();
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let a = allocate(&mut sys, &c, c.private_key);
        let keys = recover_commitment_keys(&mut sys, loc!(), &a.private_key, &a.salt).unwrap();
        let expected = c.keys();
        assert_eq!(keys.public_key.read(&sys), expected.public_key);
        assert_eq!(keys.secret_key.read(&sys), expected.secret_key);
        assert_eq!(keys.encryption_key.read(&sys), expected.encryption_key);
    }

    #[test]
    fn test_owner_opens_the_commitment() {
        let c = sample();
        let (value, null_root, root, hash) = prove(&c, c.private_key, None);
        assert_eq!(value, c.value);
        assert_eq!(null_root, c.null_root);
        assert_eq!(root, c.commitment_root);
        assert_eq!(hash, c.hash);
    }

    #[test]
    fn test_wrong_key_zeroes_the_root() {
        let c = sample();
        let (value, _, root, _) = prove(&c, c.private_key + Fr::from(1u64), None);
        assert_eq!(root, Fr::from(0u64));
        assert_ne!(value, c.value);
    }

    #[test]
    fn test_flipped_ciphertext_changes_the_hash() {
        let c = sample();
        let mut ciphertext = c.ciphertext.clone();
        ciphertext[1] += Fr::from(1u64);
        let (_, _, root, hash) = prove(&c, c.private_key, Some(ciphertext));
        assert_ne!(hash, c.hash);
        assert_eq!(root, Fr::from(0u64));
    }

    #[test]
    fn test_short_tuples_are_rejected() {
        let c = sample();
        let mut sys = RunState::<Fr>::compile();
        let a = allocate(&mut sys, &c, c.private_key);
        let res = commitment_ownership_proof(
            &mut sys,
            loc!(),
            &a.scope,
            &a.private_key,
            &a.salt,
            &a.nonce,
            &a.ciphertext,
            3,
        );
        assert!(res.is_err());
    }
}

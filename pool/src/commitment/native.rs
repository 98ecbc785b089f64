//! Out-of-circuit commitments, used to build witnesses and expected outputs.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use pool_curves::{
    babyjubjub::{ecdh, private_to_public, scalar_from_base},
    EdwardsAffine, Fs,
};
use pool_poseidon::cipher::{decrypt, encrypt};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use pool_utils::serialization::DecimalString;

use crate::{commitment::TUPLE_LEN, error::PoolResult, merkle::merkle_root};

/// A Baby Jubjub scalar as a base field element. Scalars are smaller than
/// the base field modulus, so this is exact.
pub fn scalar_to_base(k: &Fs) -> Fr {
    Fr::from_le_bytes_mod_order(&k.into_bigint().to_bytes_le())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitmentKeyValues {
    pub public_key: EdwardsAffine,
    pub secret_key: EdwardsAffine,
    pub encryption_key: EdwardsAffine,
}

impl CommitmentKeyValues {
    pub fn derive(private_key: &Fs, salt_public_key: &EdwardsAffine) -> Self {
        let public_key = private_to_public(private_key);
        Self {
            public_key,
            secret_key: ecdh(private_key, &public_key),
            encryption_key: ecdh(private_key, salt_public_key),
        }
    }
}

/// A commitment together with every secret needed to spend it.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCommitment {
    #[serde_as(as = "DecimalString")]
    pub value: Fr,
    #[serde_as(as = "DecimalString")]
    pub scope: Fr,
    #[serde_as(as = "DecimalString")]
    pub private_key: Fr,
    #[serde_as(as = "DecimalString")]
    pub nonce: Fr,
    #[serde(with = "point")]
    pub salt_public_key: EdwardsAffine,
    #[serde_as(as = "Vec<DecimalString>")]
    pub ciphertext: Vec<Fr>,
    #[serde_as(as = "DecimalString")]
    pub hash: Fr,
    #[serde_as(as = "DecimalString")]
    pub commitment_root: Fr,
    #[serde_as(as = "DecimalString")]
    pub null_root: Fr,
}

impl NativeCommitment {
    /// Encrypts `[value, scope, secret.x, secret.y]` for the owner of
    /// `private_key` under the key it shares with `salt_public_key`.
    pub fn new(
        value: Fr,
        scope: Fr,
        private_key: Fs,
        salt_public_key: EdwardsAffine,
        nonce: Fr,
    ) -> PoolResult<Self> {
        let keys = CommitmentKeyValues::derive(&private_key, &salt_public_key);
        let tuple = [value, scope, keys.secret_key.x, keys.secret_key.y];
        let ciphertext = encrypt(
            &tuple,
            &[keys.encryption_key.x, keys.encryption_key.y],
            nonce,
        )?;
        let hash = pool_poseidon::hash(&tuple)?;

        let mut leaves = ciphertext.clone();
        leaves.push(hash);
        let commitment_root = merkle_root(&leaves)?;

        Ok(Self {
            value,
            scope,
            private_key: scalar_to_base(&private_key),
            nonce,
            salt_public_key,
            ciphertext,
            hash,
            commitment_root,
            null_root: null_root(&keys, &salt_public_key)?,
        })
    }

    pub fn keys(&self) -> CommitmentKeyValues {
        CommitmentKeyValues::derive(&scalar_from_base(&self.private_key), &self.salt_public_key)
    }

    /// Decrypts the stored ciphertext, checking its tag.
    pub fn open(&self) -> PoolResult<Vec<Fr>> {
        let key = self.keys().encryption_key;
        Ok(decrypt(&self.ciphertext, &[key.x, key.y], self.nonce, TUPLE_LEN)?)
    }
}

/// Root of the tree over the public, secret, salt and encryption points.
pub fn null_root(keys: &CommitmentKeyValues, salt_public_key: &EdwardsAffine) -> PoolResult<Fr> {
    Ok(merkle_root(&[
        keys.public_key.x,
        keys.public_key.y,
        keys.secret_key.x,
        keys.secret_key.y,
        salt_public_key.x,
        salt_public_key.y,
        keys.encryption_key.x,
        keys.encryption_key.y,
    ])?)
}

/// Serializes a point as its two decimal coordinates.
pub(crate) mod point {
    use pool_curves::EdwardsAffine;
    use pool_utils::serialization::DecimalString;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_with::serde_as;

    #[serde_as]
    #[derive(Serialize, Deserialize)]
    struct Coordinates(
        #[serde_as(as = "DecimalString")] ark_bn254::Fr,
        #[serde_as(as = "DecimalString")] ark_bn254::Fr,
    );

    pub fn serialize<S: Serializer>(p: &EdwardsAffine, s: S) -> Result<S::Ok, S::Error> {
        Coordinates(p.x, p.y).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<EdwardsAffine, D::Error> {
        let Coordinates(x, y) = Coordinates::deserialize(d)?;
        let p = EdwardsAffine::new_unchecked(x, y);
        if !p.is_on_curve() {
            return Err(serde::de::Error::custom("point is not on the curve"));
        }
        Ok(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::UniformRand;
    use pool_utils::tests::make_test_rng;

    fn sample() -> NativeCommitment {
        let mut rng = make_test_rng(None);
        NativeCommitment::new(
            Fr::from(7u64),
            Fr::from(1u64),
            Fs::rand(&mut rng),
            private_to_public(&Fs::rand(&mut rng)),
            Fr::from(3u64),
        )
        .unwrap()
    }

    #[test]
    fn test_open_returns_the_tuple() {
        let c = sample();
        let keys = c.keys();
        assert_eq!(
            c.open().unwrap(),
            vec![c.value, c.scope, keys.secret_key.x, keys.secret_key.y]
        );
        assert_eq!(c.ciphertext.len(), 7);
    }

    #[test]
    fn test_json_round_trip() {
        let c = sample();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("saltPublicKey"));
        let back: NativeCommitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_off_curve_salt_is_rejected() {
        let c = sample();
        let mut json: serde_json::Value = serde_json::to_value(&c).unwrap();
        json["saltPublicKey"][1] = serde_json::Value::String("5".to_string());
        let res: Result<NativeCommitment, _> = serde_json::from_value(json);
        assert!(res.unwrap_err().to_string().contains("not on the curve"));
    }
}

//! In-circuit decryption for [pool_poseidon::cipher].

use std::borrow::Cow;

use ark_bn254::Fr;
use pool_poseidon::cipher::{NONCE_BITS, RATE};
use pool_utils::{math::pad_to_multiple, FieldHelpers};

use crate::{
    gadgets::comparators::{less_than, MAX_COMPARISON_BITS},
    poseidon::poseidon_hash,
    snarky::{errors::SnarkyCompilationError, prelude::*},
};

/// Lanes of the permutation state used by the cipher.
const CIPHER_WIDTH: usize = RATE + 1;

/// Runs the keystream over `ciphertext` and returns the padded plaintext
/// together with the authentication tag the ciphertext should end with.
///
/// `nonce` is constrained below `2^128`; nothing else is checked.
pub fn poseidon_decrypt_iterations(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    ciphertext: &[FieldVar<Fr>],
    nonce: &FieldVar<Fr>,
    key: &[FieldVar<Fr>; 2],
    length: usize,
) -> SnarkyResult<(Vec<FieldVar<Fr>>, FieldVar<Fr>)> {
    let padded = pad_to_multiple(length, RATE);
    if ciphertext.len() != padded + 1 {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "poseidon_decrypt_iterations",
            reason: format!(
                "a message of length {length} needs {} ciphertext elements, got {}",
                padded + 1,
                ciphertext.len()
            ),
        }
        .into());
    }

    sys.scoped("poseidon_decrypt_iterations", |sys| {
        let two128 = Fr::two_pow(NONCE_BITS);
        let nonce_ok = less_than(
            sys,
            loc.clone(),
            MAX_COMPARISON_BITS,
            nonce,
            &FieldVar::constant(two128),
        )?;
        sys.assert_eq(
            Some("nonce below 2^128"),
            loc.clone(),
            nonce_ok.to_field_var(),
            FieldVar::one(),
        )?;

        let packed = nonce + FieldVar::constant(Fr::from(length as u64) * two128);
        let mut keystream = poseidon_hash(
            sys,
            loc.clone(),
            &FieldVar::zero(),
            &[key[0].clone(), key[1].clone(), packed],
            CIPHER_WIDTH,
        )?;

        let mut decrypted = Vec::with_capacity(padded);
        for block in ciphertext[..padded].chunks_exact(RATE) {
            for (c, k) in block.iter().zip(&keystream[1..]) {
                decrypted.push(c - k);
            }
            keystream = poseidon_hash(sys, loc.clone(), &keystream[0], block, CIPHER_WIDTH)?;
        }
        let tag = keystream.swap_remove(1);
        Ok((decrypted, tag))
    })
}

/// Decrypts to the padded plaintext without comparing the tag.
pub fn poseidon_decrypt_without_check(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    ciphertext: &[FieldVar<Fr>],
    nonce: &FieldVar<Fr>,
    key: &[FieldVar<Fr>; 2],
    length: usize,
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    let (decrypted, _tag) = poseidon_decrypt_iterations(sys, loc, ciphertext, nonce, key, length)?;
    Ok(decrypted)
}

/// Decrypts and constrains the tag to the last ciphertext element and the
/// padding lanes to zero. Returns the `length` plaintext elements.
pub fn poseidon_decrypt(
    sys: &mut RunState<Fr>,
    loc: Cow<'static, str>,
    ciphertext: &[FieldVar<Fr>],
    nonce: &FieldVar<Fr>,
    key: &[FieldVar<Fr>; 2],
    length: usize,
) -> SnarkyResult<Vec<FieldVar<Fr>>> {
    sys.scoped("poseidon_decrypt", |sys| {
        let (mut decrypted, tag) =
            poseidon_decrypt_iterations(sys, loc.clone(), ciphertext, nonce, key, length)?;
        if let Some(last) = ciphertext.last() {
            sys.assert_eq(Some("cipher tag"), loc.clone(), tag, last.clone())?;
        }
        for padding in &decrypted[length..] {
            sys.assert_eq(Some("cipher padding"), loc.clone(), padding.clone(), FieldVar::zero())?;
        }
        decrypted.truncate(length);
        Ok(decrypted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_std::UniformRand;
    use pool_poseidon::cipher::encrypt;
    use pool_utils::tests::make_test_rng;

    struct Setup {
        message: Vec<Fr>,
        key: [Fr; 2],
        nonce: Fr,
        ciphertext: Vec<Fr>,
    }

    fn setup(length: usize) -> Setup {
        let mut rng = make_test_rng(None);
        let message: Vec<Fr> = (0..length).map(|_| Fr::rand(&mut rng)).collect();
        let key = [Fr::rand(&mut rng), Fr::rand(&mut rng)];
        let nonce = Fr::from(u64::rand(&mut rng));
        let ciphertext = encrypt(&message, &key, nonce).unwrap();
        Setup {
            message,
            key,
            nonce,
            ciphertext,
        }
    }

    type Inputs = (Vec<FieldVar<Fr>>, FieldVar<Fr>, [FieldVar<Fr>; 2]);

    fn inputs(sys: &mut RunState<Fr>, s: &Setup, ciphertext: &[Fr]) -> Inputs {
        let ct = ciphertext
            .iter()
            .map(|c| sys.public_input(loc!(), || *c).unwrap())
            .collect();
        let nonce = sys.private_input(loc!(), || s.nonce).unwrap();
        let key = sys.private_input(loc!(), || s.key).unwrap();
        (ct, nonce, key)
    }

    #[test]
    fn test_decryption_matches_native() {
        for length in [1, 3, 4, 7] {
            let s = setup(length);
            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let (ct, nonce, key) = inputs(&mut sys, &s, &s.ciphertext);
            let plain = poseidon_decrypt(&mut sys, loc!(), &ct, &nonce, &key, length).unwrap();
            let got: Vec<Fr> = plain.iter().map(|p| sys.read_var(p)).collect();
            assert_eq!(got, s.message);
            sys.seal().unwrap();
        }
    }

    #[test]
    fn test_flipped_ciphertext_fails_the_tag() {
        let s = setup(4);
        let mut flipped = s.ciphertext.clone();
        flipped[2] += Fr::from(1u64);

        let mut sys = RunState::witness();
        let (ct, nonce, key) = inputs(&mut sys, &s, &flipped);
        let unchecked =
            poseidon_decrypt_without_check(&mut sys, loc!(), &ct, &nonce, &key, 4).unwrap();
        assert_ne!(sys.read_var(&unchecked[2]), s.message[2]);
        assert!(sys.evaluate().unwrap().is_satisfied());

        poseidon_decrypt(&mut sys, loc!(), &ct, &nonce, &key, 4).unwrap();
        let evaluation = sys.evaluate().unwrap();
        assert!(evaluation.unsatisfied().any(|c| c.label == "cipher tag"));
    }

    #[test]
    fn test_large_nonce_is_rejected() {
        let s = setup(4);
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let ct: Vec<FieldVar<Fr>> = s
            .ciphertext
            .iter()
            .map(|c| sys.public_input(loc!(), || *c).unwrap())
            .collect();
        let nonce: FieldVar<Fr> = sys.private_input(loc!(), || Fr::two_pow(NONCE_BITS)).unwrap();
        let key: [FieldVar<Fr>; 2] = sys.private_input(loc!(), || s.key).unwrap();
        let err = poseidon_decrypt_without_check(&mut sys, loc!(), &ct, &nonce, &key, 4).unwrap_err();
        assert!(err.to_string().contains("nonce below 2^128"), "{err}");
    }

    #[test]
    fn test_wrong_ciphertext_length() {
        let mut sys = RunState::<Fr>::compile();
        let ct = vec![FieldVar::zero(); 6];
        let key = [FieldVar::zero(), FieldVar::zero()];
        assert!(poseidon_decrypt_iterations(&mut sys, loc!(), &ct, &FieldVar::zero(), &key, 4).is_err());
    }
}

use std::borrow::Cow;

use pool_curves::Fq;

use crate::{
    ec::{babyjub::PRIVATE_KEY_BITS, scalar_mul::escalar_mul_any, EdwardsVar},
    gadgets::bits::num_to_bits,
    snarky::prelude::*,
};

/// The Diffie-Hellman shared point `private_key · public_key`.
pub fn ecdh(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    private_key: &FieldVar<Fq>,
    public_key: &EdwardsVar,
) -> SnarkyResult<EdwardsVar> {
    sys.scoped("ecdh", |sys| {
        let bits = num_to_bits(sys, loc.clone(), private_key, PRIVATE_KEY_BITS)?;
        escalar_mul_any(sys, loc, &bits, public_key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ec::baby_priv_to_pub, loc};
    use ark_ff::{BigInteger, PrimeField};
    use ark_std::UniformRand;
    use pool_curves::{babyjubjub::private_to_public, Fs};
    use pool_utils::tests::make_test_rng;

    fn to_base(k: &Fs) -> Fq {
        Fq::from_le_bytes_mod_order(&k.into_bigint().to_bytes_le())
    }

    #[test]
    fn test_shared_secret_is_symmetric() {
        let mut rng = make_test_rng(None);
        let (a, b) = (Fs::rand(&mut rng), Fs::rand(&mut rng));

        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let av: FieldVar<Fq> = sys.private_input(loc!(), || to_base(&a)).unwrap();
        let bv: FieldVar<Fq> = sys.private_input(loc!(), || to_base(&b)).unwrap();
        let a_pub = baby_priv_to_pub(&mut sys, loc!(), &av).unwrap();
        let b_pub = baby_priv_to_pub(&mut sys, loc!(), &bv).unwrap();
        let ab = ecdh(&mut sys, loc!(), &av, &b_pub).unwrap();
        let ba = ecdh(&mut sys, loc!(), &bv, &a_pub).unwrap();

        let expected = pool_curves::babyjubjub::ecdh(&a, &private_to_public(&b));
        assert_eq!(ab.read(&sys), expected);
        assert_eq!(ba.read(&sys), expected);
        sys.seal().unwrap();
    }
}

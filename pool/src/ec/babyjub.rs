//! Twisted Edwards arithmetic and key derivation.

use std::borrow::Cow;

use ark_ff::{BigInteger, Field, One, PrimeField};
use pool_curves::{EdwardsAffine, Fq, Fs};

use crate::{
    ec::{hinted_r1cs, quotient, scalar_mul::escalar_mul_fix, EdwardsVar, EDWARDS_A, EDWARDS_D},
    gadgets::{bits::num_to_bits, comparators::less_than},
    snarky::prelude::*,
};

/// Bits of a Baby Jubjub private key.
pub const PRIVATE_KEY_BITS: usize = 253;

/// Width of the range check keeping a private key below the subgroup order.
const PRIVATE_KEY_RANGE_BITS: usize = 251;

/// The subgroup order `l` as a base field element.
pub fn subgroup_order() -> Fq {
    Fq::from_le_bytes_mod_order(&Fs::MODULUS.to_bytes_le())
}

/// The unified addition law, native. `None` only off the curve.
fn native_add(p: &EdwardsAffine, q: &EdwardsAffine) -> Option<EdwardsAffine> {
    let beta = p.x * q.y;
    let gamma = p.y * q.x;
    let delta = (p.y - EDWARDS_A * p.x) * (q.x + q.y);
    let tau = beta * gamma;
    let x = (beta + gamma) * (Fq::one() + EDWARDS_D * tau).inverse()?;
    let y = (delta + EDWARDS_A * beta - gamma) * (Fq::one() - EDWARDS_D * tau).inverse()?;
    Some(EdwardsAffine::new_unchecked(x, y))
}

/// Adds two points with the complete twisted Edwards law:
/// - `beta = x1·y2`, `gamma = y1·x2`, `delta = (-a·x1 + y1)·(x2 + y2)`, `tau = beta·gamma`,
/// - `(1 + d·tau)·x3 = beta + gamma`,
/// - `(1 - d·tau)·y3 = delta + a·beta - gamma`.
pub fn baby_add(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    p1: &EdwardsVar,
    p2: &EdwardsVar,
) -> SnarkyResult<EdwardsVar> {
    if let (Some(p), Some(q)) = (p1.to_constant(), p2.to_constant()) {
        if let Some(sum) = native_add(&p, &q) {
            return Ok(EdwardsVar::constant(&sum));
        }
    }
    sys.scoped("baby_add", |sys| {
        let beta = p1.x.mul(&p2.y, Some("baby_add beta"), loc.clone(), sys)?;
        let gamma = p1.y.mul(&p2.x, Some("baby_add gamma"), loc.clone(), sys)?;
        let delta = (&p1.y - p1.x.scale(EDWARDS_A)).mul(
            &(&p2.x + &p2.y),
            Some("baby_add delta"),
            loc.clone(),
            sys,
        )?;
        let tau = beta.mul(&gamma, Some("baby_add tau"), loc.clone(), sys)?;

        let d_tau = tau.scale(EDWARDS_D);
        let x_num = &beta + &gamma;
        let x_den = FieldVar::one() + &d_tau;
        let x = hinted_r1cs(
            sys,
            "baby_add x",
            loc.clone(),
            |env| quotient(env.read_var(&x_num), env.read_var(&x_den)),
            |x| (x_den.clone(), x.clone(), x_num.clone()),
        )?;

        let y_num = delta + beta.scale(EDWARDS_A) - &gamma;
        let y_den = FieldVar::one() - &d_tau;
        let y = hinted_r1cs(
            sys,
            "baby_add y",
            loc,
            |env| quotient(env.read_var(&y_num), env.read_var(&y_den)),
            |y| (y_den.clone(), y.clone(), y_num.clone()),
        )?;
        Ok(EdwardsVar::new(x, y))
    })
}

pub fn baby_dbl(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    p: &EdwardsVar,
) -> SnarkyResult<EdwardsVar> {
    baby_add(sys, loc, p, p)
}

/// Constrains `p` to lie on the curve: `a·x² + y² = 1 + d·x²·y²`.
pub fn baby_check(sys: &mut RunState<Fq>, loc: Cow<'static, str>, p: &EdwardsVar) -> SnarkyResult<()> {
    sys.scoped("baby_check", |sys| {
        let x2 = p.x.square(Some("baby_check x²"), loc.clone(), sys)?;
        let y2 = p.y.square(Some("baby_check y²"), loc.clone(), sys)?;
        let lhs = x2.scale(EDWARDS_A) + &y2 - FieldVar::one();
        sys.assert_r1cs(Some("baby_check"), loc, x2.scale(EDWARDS_D), y2, lhs)
    })
}

/// Derives the public key `private_key · BASE8`.
/// Unsatisfiable unless `private_key` is below the subgroup order.
pub fn baby_priv_to_pub(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    private_key: &FieldVar<Fq>,
) -> SnarkyResult<EdwardsVar> {
    sys.scoped("baby_priv_to_pub", |sys| {
        let order = FieldVar::constant(subgroup_order());
        let in_range = less_than(sys, loc.clone(), PRIVATE_KEY_RANGE_BITS, private_key, &order)?;
        sys.assert_eq(
            Some("private key below subgroup order"),
            loc.clone(),
            in_range.to_field_var(),
            FieldVar::one(),
        )?;
        let bits = num_to_bits(sys, loc.clone(), private_key, PRIVATE_KEY_BITS)?;
        escalar_mul_fix(sys, loc, &bits, &EdwardsVar::base8())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::UniformRand;
    use pool_curves::babyjubjub::{private_to_public, scalar_from_base};
    use pool_utils::{tests::make_test_rng, FieldHelpers};

    #[test]
    fn test_baby_add_matches_arkworks() {
        let mut rng = make_test_rng(None);
        let g = EdwardsAffine::generator();
        for _ in 0..10 {
            let p = (g * Fs::rand(&mut rng)).into_affine();
            let q = (g * Fs::rand(&mut rng)).into_affine();
            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let (pv, qv): (EdwardsVar, EdwardsVar) = sys.private_input(loc!(), || (p, q)).unwrap();
            let sum = baby_add(&mut sys, loc!(), &pv, &qv).unwrap();
            let dbl = baby_dbl(&mut sys, loc!(), &pv).unwrap();
            baby_check(&mut sys, loc!(), &sum).unwrap();
            assert_eq!(sum.read(&sys), (p + q).into_affine());
            assert_eq!(dbl.read(&sys), (p + p).into_affine());
        }
    }

    #[test]
    fn test_identity_is_neutral() {
        let g = EdwardsAffine::generator();
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let pv: EdwardsVar = sys.private_input(loc!(), || g).unwrap();
        let sum = baby_add(&mut sys, loc!(), &pv, &EdwardsVar::identity()).unwrap();
        assert_eq!(sum.read(&sys), g);
    }

    #[test]
    fn test_baby_check_rejects_points_off_the_curve() {
        let mut sys = RunState::witness();
        let pv: EdwardsVar = sys
            .private_input(loc!(), || {
                EdwardsAffine::new_unchecked(Fq::from(1u64), Fq::from(2u64))
            })
            .unwrap();
        baby_check(&mut sys, loc!(), &pv).unwrap();
        assert!(!sys.evaluate().unwrap().is_satisfied());
    }

    #[test]
    fn test_priv_to_pub_known_key() {
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let sk: FieldVar<Fq> = sys.private_input(loc!(), || Fq::from(1234u64)).unwrap();
        let pk = baby_priv_to_pub(&mut sys, loc!(), &sk).unwrap();
        let expected = EdwardsAffine::new_unchecked(
            Fq::from_decimal(
                "4880901335776166390443888589907570248644423541468541082967598048550539024543",
            )
            .unwrap(),
            Fq::from_decimal(
                "6509666988291764283313685078036329297907336602650572952945826675203643401307",
            )
            .unwrap(),
        );
        assert_eq!(pk.read(&sys), expected);
        sys.seal().unwrap();
    }

    #[test]
    fn test_priv_to_pub_matches_native() {
        let mut rng = make_test_rng(None);
        for _ in 0..3 {
            let sk = Fs::rand(&mut rng);
            let sk_base = Fq::from_le_bytes_mod_order(&sk.into_bigint().to_bytes_le());
            assert_eq!(scalar_from_base(&sk_base), sk);

            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let skv: FieldVar<Fq> = sys.private_input(loc!(), || sk_base).unwrap();
            let pk = baby_priv_to_pub(&mut sys, loc!(), &skv).unwrap();
            assert_eq!(pk.read(&sys), private_to_public(&sk));
        }
    }

    #[test]
    fn test_priv_to_pub_rejects_out_of_range_keys() {
        let mut sys = RunState::witness();
        let skv: FieldVar<Fq> = sys.private_input(loc!(), subgroup_order).unwrap();
        baby_priv_to_pub(&mut sys, loc!(), &skv).unwrap();
        let evaluation = sys.evaluate().unwrap();
        let first = evaluation.unsatisfied().next().unwrap();
        assert_eq!(first.label, "private key below subgroup order");
    }
}

//! Conversions between the Edwards and Montgomery forms, and Montgomery
//! addition and doubling.
//!
//! The Montgomery formulas are not complete: adding points that share their
//! `u` coordinate, or doubling a point of order two, leaves the slope
//! unconstrainable and the system unsatisfiable.

use std::borrow::Cow;

use ark_ff::{AdditiveGroup, Field, One};
use pool_curves::{babyjubjub::MontgomeryPoint, Fq};

use crate::{
    ec::{hinted_r1cs, quotient, EdwardsVar, MontgomeryVar},
    snarky::prelude::*,
};

const A: Fq = MontgomeryPoint::COEFF_A;
const B: Fq = MontgomeryPoint::COEFF_B;

/// `u = (1 + y) / (1 - y)`, `v = u / x`
pub fn edwards_to_montgomery(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    p: &EdwardsVar,
) -> SnarkyResult<MontgomeryVar> {
    if let Some(m) = p.to_constant().and_then(|p| MontgomeryPoint::from_edwards(&p)) {
        return Ok(MontgomeryVar::constant(&m));
    }
    sys.scoped("edwards_to_montgomery", |sys| {
        let one = FieldVar::one();
        let u = hinted_r1cs(
            sys,
            "edwards_to_montgomery u",
            loc.clone(),
            |env| {
                let y = env.read_var(&p.y);
                quotient(Fq::one() + y, Fq::one() - y)
            },
            |u| (u.clone(), &one - &p.y, &one + &p.y),
        )?;
        let v = hinted_r1cs(
            sys,
            "edwards_to_montgomery v",
            loc,
            |env| quotient(env.read_var(&u), env.read_var(&p.x)),
            |v| (v.clone(), p.x.clone(), u.clone()),
        )?;
        Ok(MontgomeryVar::new(u, v))
    })
}

/// `x = u / v`, `y = (u - 1) / (u + 1)`
pub fn montgomery_to_edwards(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    p: &MontgomeryVar,
) -> SnarkyResult<EdwardsVar> {
    if let Some(e) = p.to_constant().and_then(|p| p.to_edwards()) {
        return Ok(EdwardsVar::constant(&e));
    }
    sys.scoped("montgomery_to_edwards", |sys| {
        let one = FieldVar::one();
        let x = hinted_r1cs(
            sys,
            "montgomery_to_edwards x",
            loc.clone(),
            |env| quotient(env.read_var(&p.u), env.read_var(&p.v)),
            |x| (x.clone(), p.v.clone(), p.u.clone()),
        )?;
        let y = hinted_r1cs(
            sys,
            "montgomery_to_edwards y",
            loc,
            |env| {
                let u = env.read_var(&p.u);
                quotient(u - Fq::one(), u + Fq::one())
            },
            |y| (y.clone(), &p.u + &one, &p.u - &one),
        )?;
        Ok(EdwardsVar::new(x, y))
    })
}

/// Shared tail of addition and doubling: given the slope `lambda` through
/// `p` and a second point with abscissa `other_u`,
/// `u3 = B·λ² - A - u1 - u2` and `v3 = λ·(u1 - u3) - v1`.
fn with_slope(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    lambda: &FieldVar<Fq>,
    p: &MontgomeryVar,
    other_u: &FieldVar<Fq>,
) -> SnarkyResult<MontgomeryVar> {
    let offset = FieldVar::constant(A) + &p.u + other_u;
    let u = hinted_r1cs(
        sys,
        "montgomery u",
        loc.clone(),
        |env| B * env.read_var(lambda).square() - env.read_var(&offset),
        |u| (lambda.scale(B), lambda.clone(), u + &offset),
    )?;
    let v = hinted_r1cs(
        sys,
        "montgomery v",
        loc,
        |env| env.read_var(lambda) * (env.read_var(&p.u) - env.read_var(&u)) - env.read_var(&p.v),
        |v| (lambda.clone(), &p.u - &u, v + &p.v),
    )?;
    Ok(MontgomeryVar::new(u, v))
}

pub fn montgomery_add(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    p1: &MontgomeryVar,
    p2: &MontgomeryVar,
) -> SnarkyResult<MontgomeryVar> {
    if let (Some(a), Some(b)) = (p1.to_constant(), p2.to_constant()) {
        if let Some(sum) = a.checked_add(&b) {
            return Ok(MontgomeryVar::constant(&sum));
        }
    }
    sys.scoped("montgomery_add", |sys| {
        let du = &p2.u - &p1.u;
        let dv = &p2.v - &p1.v;
        let lambda = hinted_r1cs(
            sys,
            "montgomery_add slope",
            loc.clone(),
            |env| quotient(env.read_var(&dv), env.read_var(&du)),
            |lambda| (lambda.clone(), du.clone(), dv.clone()),
        )?;
        with_slope(sys, loc, &lambda, p1, &p2.u)
    })
}

pub fn montgomery_double(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    p: &MontgomeryVar,
) -> SnarkyResult<MontgomeryVar> {
    if let Some(doubled) = p.to_constant().and_then(|p| p.checked_double()) {
        return Ok(MontgomeryVar::constant(&doubled));
    }
    sys.scoped("montgomery_double", |sys| {
        let u2 = p.u.square(Some("montgomery_double u²"), loc.clone(), sys)?;
        // 3u² + 2A·u + 1 = λ·2B·v
        let numerator = u2.scale(Fq::from(3u64)) + p.u.scale(A.double()) + FieldVar::one();
        let denominator = p.v.scale(B.double());
        let lambda = hinted_r1cs(
            sys,
            "montgomery_double slope",
            loc.clone(),
            |env| quotient(env.read_var(&numerator), env.read_var(&denominator)),
            |lambda| (lambda.clone(), denominator.clone(), numerator.clone()),
        )?;
        with_slope(sys, loc, &lambda, p, &p.u)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::UniformRand;
    use pool_curves::{EdwardsAffine, Fs};
    use pool_utils::tests::make_test_rng;

    fn random_point(rng: &mut impl rand::Rng) -> EdwardsAffine {
        (EdwardsAffine::generator() * Fs::rand(rng)).into_affine()
    }

    #[test]
    fn test_montgomery_double_matches_edwards() {
        let mut rng = make_test_rng(None);
        for _ in 0..100 {
            let p = random_point(&mut rng);
            let expected = (p + p).into_affine();

            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let var: EdwardsVar = sys.private_input(loc!(), || p).unwrap();
            let m = edwards_to_montgomery(&mut sys, loc!(), &var).unwrap();
            let doubled = montgomery_double(&mut sys, loc!(), &m).unwrap();
            let back = montgomery_to_edwards(&mut sys, loc!(), &doubled).unwrap();

            assert_eq!(back.read(&sys), expected);
            sys.seal().unwrap();
        }
    }

    #[test]
    fn test_montgomery_add_matches_edwards() {
        let mut rng = make_test_rng(None);
        for _ in 0..10 {
            let (p, q) = (random_point(&mut rng), random_point(&mut rng));
            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let (pv, qv): (EdwardsVar, EdwardsVar) = sys.private_input(loc!(), || (p, q)).unwrap();
            let pm = edwards_to_montgomery(&mut sys, loc!(), &pv).unwrap();
            let qm = edwards_to_montgomery(&mut sys, loc!(), &qv).unwrap();
            let sum = montgomery_add(&mut sys, loc!(), &pm, &qm).unwrap();
            let back = montgomery_to_edwards(&mut sys, loc!(), &sum).unwrap();
            assert_eq!(back.read(&sys), (p + q).into_affine());
        }
    }

    #[test]
    fn test_constant_points_fold() {
        let mut sys = RunState::<Fq>::compile();
        let base = EdwardsVar::base8();
        let m = edwards_to_montgomery(&mut sys, loc!(), &base).unwrap();
        let d = montgomery_double(&mut sys, loc!(), &m).unwrap();
        let s = montgomery_add(&mut sys, loc!(), &m, &d).unwrap();
        let e = montgomery_to_edwards(&mut sys, loc!(), &s).unwrap();
        assert_eq!(sys.num_constraints(), 0);

        let g = EdwardsAffine::generator();
        let expected = (g + g + g).into_affine();
        assert_eq!(e.to_constant(), Some(expected));
    }

    #[test]
    fn test_adding_the_opposite_is_unsatisfiable() {
        let mut rng = make_test_rng(None);
        let p = random_point(&mut rng);
        let mut sys = RunState::witness();
        let (pv, qv): (EdwardsVar, EdwardsVar) = sys.private_input(loc!(), || (p, -p)).unwrap();
        let pm = edwards_to_montgomery(&mut sys, loc!(), &pv).unwrap();
        let qm = edwards_to_montgomery(&mut sys, loc!(), &qv).unwrap();
        montgomery_add(&mut sys, loc!(), &pm, &qm).unwrap();
        assert!(!sys.evaluate().unwrap().is_satisfied());
    }
}

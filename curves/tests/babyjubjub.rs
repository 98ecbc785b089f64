use ark_algebra_test_templates::*;
use ark_ec::{twisted_edwards::TECurveConfig, AffineRepr, CurveGroup};
use ark_ff::{One, UniformRand, Zero};
use core::str::FromStr;
use pool_curves::babyjubjub::{
    ecdh, private_to_public, scalar_from_base, BabyJubjubConfig, EdwardsAffine,
    EdwardsProjective, Fq, Fs, MontgomeryPoint, GENERATOR_X, GENERATOR_Y,
};
use pool_utils::tests::make_test_rng;

test_group!(g1; EdwardsProjective; te);
test_field!(fs; Fs; mont_prime_field);

fn random_point(rng: &mut impl rand::Rng) -> EdwardsAffine {
    (EdwardsAffine::generator() * Fs::rand(rng)).into_affine()
}

#[test]
fn test_base8_is_cofactor_multiple_of_full_generator() {
    let g = EdwardsAffine::new_unchecked(GENERATOR_X, GENERATOR_Y);
    assert!(g.is_on_curve());
    assert!(!g.is_in_correct_subgroup_assuming_on_curve());
    assert_eq!(g.mul_by_cofactor(), EdwardsAffine::generator());
    assert_eq!(
        <BabyJubjubConfig as TECurveConfig>::COEFF_A - <BabyJubjubConfig as TECurveConfig>::COEFF_D,
        Fq::from(4u64)
    );
}

#[test]
fn test_regression_private_to_public() {
    let public = private_to_public(&Fs::from(1234u64));
    assert_eq!(
        public.x,
        Fq::from_str(
            "4880901335776166390443888589907570248644423541468541082967598048550539024543"
        )
        .unwrap()
    );
    assert_eq!(
        public.y,
        Fq::from_str(
            "6509666988291764283313685078036329297907336602650572952945826675203643401307"
        )
        .unwrap()
    );
    assert_eq!(private_to_public(&Fs::one()), EdwardsAffine::generator());
    assert!(private_to_public(&Fs::zero()).is_zero());
}

#[test]
fn test_ecdh_is_symmetric() {
    let mut rng = make_test_rng(None);
    for _ in 0..10 {
        let a = Fs::rand(&mut rng);
        let b = Fs::rand(&mut rng);
        let shared_ab = ecdh(&a, &private_to_public(&b));
        let shared_ba = ecdh(&b, &private_to_public(&a));
        assert_eq!(shared_ab, shared_ba);
    }
}

#[test]
fn test_scalar_from_base_reduces_modulo_order() {
    let l = Fq::from_str(
        "2736030358979909402780800718157159386076813972158567259200215660948447373041",
    )
    .unwrap();
    assert!(scalar_from_base(&l).is_zero());
    assert_eq!(scalar_from_base(&(l + Fq::from(5u64))), Fs::from(5u64));
}

#[test]
fn test_montgomery_round_trip() {
    let mut rng = make_test_rng(None);
    for _ in 0..20 {
        let p = random_point(&mut rng);
        let m = MontgomeryPoint::from_edwards(&p).unwrap();
        assert!(m.is_on_curve());
        assert_eq!(m.to_edwards(), Some(p));
    }
    assert_eq!(MontgomeryPoint::from_edwards(&EdwardsAffine::zero()), None);
}

#[test]
fn test_montgomery_double_matches_edwards() {
    let mut rng = make_test_rng(None);
    for _ in 0..100 {
        let p = random_point(&mut rng);
        let doubled = (p + p).into_affine();
        let m = MontgomeryPoint::from_edwards(&p).unwrap();
        let m2 = m.checked_double().unwrap();
        assert!(m2.is_on_curve());
        assert_eq!(m2.to_edwards(), Some(doubled));
    }
}

#[test]
fn test_montgomery_add_matches_edwards() {
    let mut rng = make_test_rng(None);
    for _ in 0..50 {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);
        let sum = (p + q).into_affine();
        let mp = MontgomeryPoint::from_edwards(&p).unwrap();
        let mq = MontgomeryPoint::from_edwards(&q).unwrap();
        assert_eq!(mp.checked_add(&mq).and_then(|m| m.to_edwards()), Some(sum));
    }
}

#[test]
fn test_montgomery_degenerate_inputs() {
    let p = MontgomeryPoint::from_edwards(&EdwardsAffine::generator()).unwrap();
    assert_eq!(p.checked_add(&p), None);
    let order_two = MontgomeryPoint::new(Fq::zero(), Fq::zero());
    assert!(order_two.is_on_curve());
    assert_eq!(order_two.checked_double(), None);
}

//! Baby Jubjub gadgets.
//!
//! Points are carried either in twisted Edwards form ([EdwardsVar]), where
//! the addition law is complete, or in Montgomery form ([MontgomeryVar]),
//! where additions and doublings are cheaper but have exceptional cases.
//! Scalar multiplications run their ladders in Montgomery form and convert
//! back for the final additions.
//!
//! Every gadget folds to a constant when its inputs are constants, so the
//! precomputed tables of a fixed-base multiplication cost no constraints.

use std::borrow::Cow;

use ark_ec::twisted_edwards::TECurveConfig;
use ark_ff::{Field, Zero};
use pool_curves::{
    babyjubjub::{MontgomeryPoint, BASE8_X, BASE8_Y},
    BabyJubjubConfig, EdwardsAffine, Fq,
};

use crate::snarky::prelude::*;

pub mod babyjub;
pub mod ecdh;
pub mod montgomery;
pub mod scalar_mul;

pub use babyjub::{baby_add, baby_check, baby_dbl, baby_priv_to_pub};
pub use ecdh::ecdh;
pub use montgomery::{
    edwards_to_montgomery, montgomery_add, montgomery_double, montgomery_to_edwards,
};
pub use scalar_mul::{escalar_mul_any, escalar_mul_fix, multiplexor2};

/// Twisted Edwards `a`.
pub const EDWARDS_A: Fq = <BabyJubjubConfig as TECurveConfig>::COEFF_A;

/// Twisted Edwards `d`.
pub const EDWARDS_D: Fq = <BabyJubjubConfig as TECurveConfig>::COEFF_D;

/// A point in twisted Edwards coordinates.
#[derive(Debug, Clone)]
pub struct EdwardsVar {
    pub x: FieldVar<Fq>,
    pub y: FieldVar<Fq>,
}

impl EdwardsVar {
    pub fn new(x: FieldVar<Fq>, y: FieldVar<Fq>) -> Self {
        Self { x, y }
    }

    pub fn constant(p: &EdwardsAffine) -> Self {
        Self::new(FieldVar::constant(p.x), FieldVar::constant(p.y))
    }

    /// The neutral element `(0, 1)`.
    pub fn identity() -> Self {
        Self::new(FieldVar::zero(), FieldVar::one())
    }

    /// The generator of the prime-order subgroup.
    pub fn base8() -> Self {
        Self::new(FieldVar::constant(BASE8_X), FieldVar::constant(BASE8_Y))
    }

    pub fn to_constant(&self) -> Option<EdwardsAffine> {
        Some(EdwardsAffine::new_unchecked(
            self.x.to_constant()?,
            self.y.to_constant()?,
        ))
    }

    /// `(-x, y)`
    pub fn negate(&self) -> Self {
        Self::new(-&self.x, self.y.clone())
    }

    pub fn coordinates(&self) -> [FieldVar<Fq>; 2] {
        [self.x.clone(), self.y.clone()]
    }
}

impl From<[FieldVar<Fq>; 2]> for EdwardsVar {
    fn from([x, y]: [FieldVar<Fq>; 2]) -> Self {
        Self::new(x, y)
    }
}

impl SnarkyType<Fq> for EdwardsVar {
    type OutOfCircuit = EdwardsAffine;

    const SIZE_IN_FIELD_ELEMENTS: usize = 2;

    fn to_cvars(&self) -> Vec<FieldVar<Fq>> {
        vec![self.x.clone(), self.y.clone()]
    }

    fn from_cvars_unsafe(cvars: Vec<FieldVar<Fq>>) -> Self {
        assert_eq!(cvars.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        Self::new(cvars[0].clone(), cvars[1].clone())
    }

    // Curve membership is a separate gadget, see [baby_check].
    fn check(&self, _cs: &mut RunState<Fq>, _loc: Cow<'static, str>) -> SnarkyResult<()> {
        Ok(())
    }

    fn value_to_field_elements(p: &Self::OutOfCircuit) -> Vec<Fq> {
        vec![p.x, p.y]
    }

    fn value_of_field_elements(fields: Vec<Fq>) -> Self::OutOfCircuit {
        assert_eq!(fields.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        EdwardsAffine::new_unchecked(fields[0], fields[1])
    }
}

/// A point in Montgomery coordinates.
#[derive(Debug, Clone)]
pub struct MontgomeryVar {
    pub u: FieldVar<Fq>,
    pub v: FieldVar<Fq>,
}

impl MontgomeryVar {
    pub fn new(u: FieldVar<Fq>, v: FieldVar<Fq>) -> Self {
        Self { u, v }
    }

    pub fn constant(p: &MontgomeryPoint) -> Self {
        Self::new(FieldVar::constant(p.u), FieldVar::constant(p.v))
    }

    pub fn to_constant(&self) -> Option<MontgomeryPoint> {
        Some(MontgomeryPoint::new(
            self.u.to_constant()?,
            self.v.to_constant()?,
        ))
    }

    pub fn coordinates(&self) -> [FieldVar<Fq>; 2] {
        [self.u.clone(), self.v.clone()]
    }
}

impl From<[FieldVar<Fq>; 2]> for MontgomeryVar {
    fn from([u, v]: [FieldVar<Fq>; 2]) -> Self {
        Self::new(u, v)
    }
}

impl SnarkyType<Fq> for MontgomeryVar {
    type OutOfCircuit = MontgomeryPoint;

    const SIZE_IN_FIELD_ELEMENTS: usize = 2;

    fn to_cvars(&self) -> Vec<FieldVar<Fq>> {
        vec![self.u.clone(), self.v.clone()]
    }

    fn from_cvars_unsafe(cvars: Vec<FieldVar<Fq>>) -> Self {
        assert_eq!(cvars.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        Self::new(cvars[0].clone(), cvars[1].clone())
    }

    fn check(&self, _cs: &mut RunState<Fq>, _loc: Cow<'static, str>) -> SnarkyResult<()> {
        Ok(())
    }

    fn value_to_field_elements(p: &Self::OutOfCircuit) -> Vec<Fq> {
        vec![p.u, p.v]
    }

    fn value_of_field_elements(fields: Vec<Fq>) -> Self::OutOfCircuit {
        assert_eq!(fields.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        MontgomeryPoint::new(fields[0], fields[1])
    }
}

/// `num / den`, or zero when `den` is zero. The constraint that goes with
/// it is then unsatisfiable unless `num` is zero too.
pub(crate) fn quotient(num: Fq, den: Fq) -> Fq {
    match den.inverse() {
        Some(inv) => num * inv,
        None => Fq::zero(),
    }
}

/// Hints a single value and binds it with `a * b = c`, where the three
/// linear combinations are built from the hinted variable.
pub(crate) fn hinted_r1cs<V, R>(
    sys: &mut RunState<Fq>,
    label: &'static str,
    loc: Cow<'static, str>,
    value: V,
    relation: R,
) -> SnarkyResult<FieldVar<Fq>>
where
    V: FnOnce(&dyn WitnessGeneration<Fq>) -> Fq,
    R: FnOnce(&FieldVar<Fq>) -> (FieldVar<Fq>, FieldVar<Fq>, FieldVar<Fq>),
{
    let hint = sys.hint::<FieldVar<Fq>, _>(loc.clone(), value)?;
    hint.constrain(sys, |sys, out| {
        let (a, b, c) = relation(out);
        sys.assert_r1cs(Some(label), loc, a, b, c)
    })
}

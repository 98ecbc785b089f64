//! Native arithmetic on the Montgomery form `B·v² = u³ + A·u² + u` of Baby
//! Jubjub. Circuits use this form for their scalar multiplication ladders,
//! these functions compute the values they are expected to produce.

use crate::babyjubjub::{
    curves::{BabyJubjubConfig, EdwardsAffine},
    fields::Fq,
};
use ark_ec::twisted_edwards::MontCurveConfig;
use ark_ff::{Field, One};

/// An affine point in Montgomery coordinates. The point at infinity has no
/// representation, neither has the Edwards identity `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryPoint {
    pub u: Fq,
    pub v: Fq,
}

impl MontgomeryPoint {
    pub const COEFF_A: Fq = <BabyJubjubConfig as MontCurveConfig>::COEFF_A;
    pub const COEFF_B: Fq = <BabyJubjubConfig as MontCurveConfig>::COEFF_B;

    pub fn new(u: Fq, v: Fq) -> Self {
        Self { u, v }
    }

    pub fn is_on_curve(&self) -> bool {
        let u2 = self.u.square();
        Self::COEFF_B * self.v.square() == u2 * self.u + Self::COEFF_A * u2 + self.u
    }

    /// `u = (1 + y)/(1 - y)`, `v = u/x`.
    /// Returns `None` for the points with `y = 1` or `x = 0`.
    pub fn from_edwards(p: &EdwardsAffine) -> Option<Self> {
        let u = (Fq::one() + p.y) * (Fq::one() - p.y).inverse()?;
        let v = u * p.x.inverse()?;
        Some(Self { u, v })
    }

    /// `x = u/v`, `y = (u - 1)/(u + 1)`.
    pub fn to_edwards(&self) -> Option<EdwardsAffine> {
        let x = self.u * self.v.inverse()?;
        let y = (self.u - Fq::one()) * (self.u + Fq::one()).inverse()?;
        Some(EdwardsAffine::new_unchecked(x, y))
    }

    /// Chord addition. Undefined (returns `None`) when both points share
    /// their `u` coordinate.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        let lambda = (other.v - self.v) * (other.u - self.u).inverse()?;
        Some(self.with_slope(lambda, other.u))
    }

    /// Tangent doubling. Undefined for points of order two (`v = 0`).
    pub fn checked_double(&self) -> Option<Self> {
        let u2 = self.u.square();
        let numerator = u2 + u2 + u2 + (Self::COEFF_A + Self::COEFF_A) * self.u + Fq::one();
        let lambda = numerator * ((Self::COEFF_B + Self::COEFF_B) * self.v).inverse()?;
        Some(self.with_slope(lambda, self.u))
    }

    fn with_slope(&self, lambda: Fq, other_u: Fq) -> Self {
        let u = Self::COEFF_B * lambda.square() - Self::COEFF_A - self.u - other_u;
        let v = lambda * (self.u - u) - self.v;
        Self { u, v }
    }
}

use crate::babyjubjub::fields::{Fq, Fs};
use ark_ec::{
    models::CurveConfig,
    twisted_edwards::{Affine, MontCurveConfig, Projective, TECurveConfig},
};
use ark_ff::MontFp;

pub type EdwardsAffine = Affine<BabyJubjubConfig>;
pub type EdwardsProjective = Projective<BabyJubjubConfig>;

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct BabyJubjubConfig;

impl CurveConfig for BabyJubjubConfig {
    type BaseField = Fq;
    type ScalarField = Fs;

    /// COFACTOR = 8
    const COFACTOR: &'static [u64] = &[8];

    /// COFACTOR_INV = 8^{-1} mod l
    const COFACTOR_INV: Fs =
        MontFp!("2394026564107420727433200628387514462817212225638746351800188703329891451411");
}

impl TECurveConfig for BabyJubjubConfig {
    /// COEFF_A = 168700
    const COEFF_A: Fq = MontFp!("168700");

    /// COEFF_D = 168696
    const COEFF_D: Fq = MontFp!("168696");

    /// Base point of the prime-order subgroup
    const GENERATOR: EdwardsAffine = EdwardsAffine::new_unchecked(BASE8_X, BASE8_Y);

    type MontCurveConfig = BabyJubjubConfig;
}

impl MontCurveConfig for BabyJubjubConfig {
    /// COEFF_A = 2(a + d)/(a - d) = 168698
    const COEFF_A: Fq = MontFp!("168698");

    /// COEFF_B = 4/(a - d) = 1
    const COEFF_B: Fq = MontFp!("1");

    type TECurveConfig = BabyJubjubConfig;
}

/// x coordinate of the generator of the full group (order 8·l)
pub const GENERATOR_X: Fq =
    MontFp!("995203441582195749578291179787384436505546430278305826713579947235728471134");

/// y coordinate of the generator of the full group (order 8·l)
pub const GENERATOR_Y: Fq =
    MontFp!("5472060717959818805561601436314318772137091100104008585924551046643952123905");

/// BASE8_X = x(8·G)
pub const BASE8_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");

/// BASE8_Y = y(8·G)
pub const BASE8_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");

//! Scalar multiplication by little-endian bit vectors.
//!
//! Both ladders run in Montgomery form inside segments short enough for the
//! Montgomery formulas to never meet an exceptional case, and join the
//! segments with the complete Edwards addition.

use std::borrow::Cow;

use pool_curves::Fq;

use crate::{
    ec::{
        babyjub::baby_add,
        montgomery::{edwards_to_montgomery, montgomery_add, montgomery_double, montgomery_to_edwards},
        EdwardsVar, MontgomeryVar,
    },
    gadgets::{
        comparators::is_zero,
        mux::{multi_mux1, multi_mux3},
    },
    snarky::{errors::SnarkyCompilationError, prelude::*},
};

/// Bits per segment of the variable-base ladder.
const ANY_SEGMENT_BITS: usize = 148;

/// Bits per segment of the fixed-base ladder.
const FIX_SEGMENT_BITS: usize = 249;

/// Divisor used to count the fixed-base segments.
const FIX_SEGMENT_COUNT_DIVISOR: usize = 246;

/// Bits per fixed-base window.
const WINDOW_BITS: usize = 3;

/// Selects `in1` when `sel` is set, `in0` otherwise, coordinate-wise.
pub fn multiplexor2(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    sel: &Boolean<Fq>,
    in0: &[FieldVar<Fq>; 2],
    in1: &[FieldVar<Fq>; 2],
) -> SnarkyResult<[FieldVar<Fq>; 2]> {
    let c = [
        [in0[0].clone(), in1[0].clone()],
        [in0[1].clone(), in1[1].clone()],
    ];
    multi_mux1(sys, loc, &c, sel)
}

fn empty_scalar(gadget: &'static str) -> SnarkyError {
    SnarkyCompilationError::InvalidParameter {
        gadget,
        reason: "the scalar has no bits".to_string(),
    }
    .into()
}

/// One segment of [escalar_mul_any]. Returns `Σ e[i]·2^i·p` and the last
/// doubling of `p`, from which the next segment starts.
fn segment_mul_any(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    e: &[Boolean<Fq>],
    p: &EdwardsVar,
) -> SnarkyResult<(EdwardsVar, MontgomeryVar)> {
    sys.scoped("segment_mul_any", |sys| {
        let m = edwards_to_montgomery(sys, loc.clone(), p)?;
        let mut dbl = m.clone();
        let mut acc = m;
        // the lowest bit is handled at the end: the ladder starts from p
        for bit in &e[1..] {
            dbl = montgomery_double(sys, loc.clone(), &dbl)?;
            let added = montgomery_add(sys, loc.clone(), &dbl, &acc)?;
            acc = multiplexor2(sys, loc.clone(), bit, &acc.coordinates(), &added.coordinates())?
                .into();
        }
        let with_low = montgomery_to_edwards(sys, loc.clone(), &acc)?;
        let without_low = baby_add(sys, loc.clone(), &with_low, &p.negate())?;
        let out = multiplexor2(
            sys,
            loc,
            &e[0],
            &without_low.coordinates(),
            &with_low.coordinates(),
        )?;
        Ok((out.into(), dbl))
    })
}

/// Variable-base multiplication `Σ e[i]·2^i·p`.
///
/// The identity `(0, 1)` has no Montgomery representation: when `p.x` is
/// zero the ladder runs on BASE8 instead and the result is forced to the
/// identity.
pub fn escalar_mul_any(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    e: &[Boolean<Fq>],
    p: &EdwardsVar,
) -> SnarkyResult<EdwardsVar> {
    if e.is_empty() {
        return Err(empty_scalar("escalar_mul_any"));
    }
    sys.scoped("escalar_mul_any", |sys| {
        let zero_point = is_zero(sys, loc.clone(), &p.x)?;
        let mut base: EdwardsVar = multiplexor2(
            sys,
            loc.clone(),
            &zero_point,
            &p.coordinates(),
            &EdwardsVar::base8().coordinates(),
        )?
        .into();

        let mut acc: Option<EdwardsVar> = None;
        for (s, segment) in e.chunks(ANY_SEGMENT_BITS).enumerate() {
            let (out, dbl) = segment_mul_any(sys, loc.clone(), segment, &base)?;
            acc = Some(match acc {
                None => out,
                Some(acc) => baby_add(sys, loc.clone(), &acc, &out)?,
            });
            if (s + 1) * ANY_SEGMENT_BITS < e.len() {
                let next = montgomery_double(sys, loc.clone(), &dbl)?;
                base = montgomery_to_edwards(sys, loc.clone(), &next)?;
            }
        }
        let Some(acc) = acc else {
            return Err(empty_scalar("escalar_mul_any"));
        };

        // x·(1 - z), y + (1 - y)·z
        let not_zero = zero_point.not();
        let x = acc.x.mul(not_zero.as_field_var(), Some("escalar_mul_any x"), loc.clone(), sys)?;
        let y_fix = (FieldVar::one() - &acc.y).mul(
            zero_point.as_field_var(),
            Some("escalar_mul_any y"),
            loc,
            sys,
        )?;
        Ok(EdwardsVar::new(x, &acc.y + y_fix))
    })
}

/// Selects `(1 + e)·base` among the first eight multiples of `base`, where
/// `e` is the 3-bit window. Also returns `8·base`.
fn window_mul_fix(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    bits: &[Boolean<Fq>; WINDOW_BITS],
    base: &MontgomeryVar,
) -> SnarkyResult<(MontgomeryVar, MontgomeryVar)> {
    sys.scoped("window_mul_fix", |sys| {
        let mut table = Vec::with_capacity(8);
        table.push(base.clone());
        table.push(montgomery_double(sys, loc.clone(), base)?);
        for k in 2..8 {
            let next = montgomery_add(sys, loc.clone(), base, &table[k - 1])?;
            table.push(next);
        }
        let us = std::array::from_fn(|i| table[i].u.clone());
        let vs = std::array::from_fn(|i| table[i].v.clone());
        let selected = multi_mux3(sys, loc, &[us, vs], bits)?;
        Ok((selected.into(), table[7].clone()))
    })
}

/// One segment of [escalar_mul_fix]. Every window adds one extra multiple
/// of its base; the correction accumulator sums those offsets so they can
/// be subtracted at the end. Returns the segment result and the base of
/// the window after the last one.
fn segment_mul_fix(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    e: &[Boolean<Fq>],
    base: &EdwardsVar,
) -> SnarkyResult<(EdwardsVar, MontgomeryVar)> {
    sys.scoped("segment_mul_fix", |sys| {
        let n_windows = e.len() / WINDOW_BITS;
        let m = edwards_to_montgomery(sys, loc.clone(), base)?;

        let mut windows = Vec::with_capacity(n_windows);
        let mut correction = m.clone();
        let mut window_base = m.clone();
        let mut dbl_last = None;
        for (i, bits) in e.chunks_exact(WINDOW_BITS).enumerate() {
            let bits = [bits[0].clone(), bits[1].clone(), bits[2].clone()];
            let (out, out8) = window_mul_fix(sys, loc.clone(), &bits, &window_base)?;
            windows.push(out);
            if i + 1 < n_windows {
                correction = montgomery_add(sys, loc.clone(), &correction, &out8)?;
            } else {
                let dbl = montgomery_double(sys, loc.clone(), &out8)?;
                correction = montgomery_add(sys, loc.clone(), &correction, &dbl)?;
                dbl_last = Some(dbl);
            }
            window_base = out8;
        }
        let Some(mut acc) = dbl_last else {
            return Err(empty_scalar("escalar_mul_fix"));
        };

        for window in &windows {
            acc = montgomery_add(sys, loc.clone(), &acc, window)?;
        }

        let sum = montgomery_to_edwards(sys, loc.clone(), &acc)?;
        let offset = montgomery_to_edwards(sys, loc.clone(), &correction)?;
        let out = baby_add(sys, loc, &sum, &offset.negate())?;
        Ok((out, window_base))
    })
}

/// Fixed-base multiplication `Σ e[i]·2^i·base` with 3-bit windows.
pub fn escalar_mul_fix(
    sys: &mut RunState<Fq>,
    loc: Cow<'static, str>,
    e: &[Boolean<Fq>],
    base: &EdwardsVar,
) -> SnarkyResult<EdwardsVar> {
    let n = e.len();
    if n == 0 {
        return Err(empty_scalar("escalar_mul_fix"));
    }
    let n_segments = (n - 1) / FIX_SEGMENT_COUNT_DIVISOR + 1;
    let Some(last_bits) = n.checked_sub((n_segments - 1) * FIX_SEGMENT_BITS).filter(|b| *b > 0)
    else {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "escalar_mul_fix",
            reason: format!("{n} bits leave an empty last segment"),
        }
        .into());
    };

    sys.scoped("escalar_mul_fix", |sys| {
        let mut acc: Option<EdwardsVar> = None;
        let mut segment_base = base.clone();
        for s in 0..n_segments {
            let start = s * FIX_SEGMENT_BITS;
            let len = if s + 1 < n_segments {
                FIX_SEGMENT_BITS
            } else {
                last_bits
            };
            let n_windows = (len - 1) / WINDOW_BITS + 1;
            let mut bits = e[start..start + len].to_vec();
            bits.resize(n_windows * WINDOW_BITS, Boolean::false_());

            let (out, dbl) = segment_mul_fix(sys, loc.clone(), &bits, &segment_base)?;
            acc = Some(match acc {
                None => out,
                Some(acc) => baby_add(sys, loc.clone(), &acc, &out)?,
            });
            if s + 1 < n_segments {
                segment_base = montgomery_to_edwards(sys, loc.clone(), &dbl)?;
            }
        }
        acc.ok_or_else(|| empty_scalar("escalar_mul_fix"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gadgets::bits::num_to_bits, loc};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{BigInteger, PrimeField};
    use ark_std::UniformRand;
    use pool_curves::{EdwardsAffine, Fs};
    use pool_utils::tests::make_test_rng;

    fn scalar_bits(sys: &mut RunState<Fq>, k: Fs) -> Vec<Boolean<Fq>> {
        let k = Fq::from_le_bytes_mod_order(&k.into_bigint().to_bytes_le());
        let var: FieldVar<Fq> = sys.private_input(loc!(), || k).unwrap();
        num_to_bits(sys, loc!(), &var, 253).unwrap()
    }

    #[test]
    fn test_escalar_mul_fix_matches_arkworks() {
        let mut rng = make_test_rng(None);
        let g = EdwardsAffine::generator();
        let mut scalars = vec![Fs::from(1u64), Fs::from(2u64), Fs::from(7u64), Fs::from(9u64), -Fs::from(1u64)];
        scalars.push(Fs::rand(&mut rng));
        for k in scalars {
            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let bits = scalar_bits(&mut sys, k);
            let out = escalar_mul_fix(&mut sys, loc!(), &bits, &EdwardsVar::base8()).unwrap();
            assert_eq!(out.read(&sys), (g * k).into_affine());
            sys.seal().unwrap();
        }
    }

    #[test]
    fn test_escalar_mul_any_matches_arkworks() {
        let mut rng = make_test_rng(None);
        let g = EdwardsAffine::generator();
        for k in [Fs::from(1u64), Fs::from(3u64), Fs::rand(&mut rng)] {
            let p = (g * Fs::rand(&mut rng)).into_affine();
            let mut sys = RunState::witness();
            sys.eval_constraints = true;
            let bits = scalar_bits(&mut sys, k);
            let pv: EdwardsVar = sys.public_input(loc!(), || p).unwrap();
            let out = escalar_mul_any(&mut sys, loc!(), &bits, &pv).unwrap();
            assert_eq!(out.read(&sys), (p * k).into_affine());
            sys.seal().unwrap();
        }
    }

    #[test]
    fn test_escalar_mul_any_of_the_identity() {
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let bits = scalar_bits(&mut sys, Fs::from(5u64));
        let pv: EdwardsVar = sys.public_input(loc!(), EdwardsAffine::zero).unwrap();
        let out = escalar_mul_any(&mut sys, loc!(), &bits, &pv).unwrap();
        assert_eq!(out.read(&sys), EdwardsAffine::zero());
    }

    #[test]
    fn test_fixed_base_tables_are_free() {
        let mut sys = RunState::<Fq>::compile();
        let bits: Vec<_> = (0..253)
            .map(|_| sys.private_input::<Boolean<Fq>, _>(loc!(), || false).unwrap())
            .collect();
        let before = sys.num_constraints();
        escalar_mul_fix(&mut sys, loc!(), &bits, &EdwardsVar::base8()).unwrap();
        let fixed = sys.num_constraints() - before;

        let base: EdwardsVar = sys.private_input(loc!(), EdwardsAffine::generator).unwrap();
        let before = sys.num_constraints();
        escalar_mul_any(&mut sys, loc!(), &bits, &base).unwrap();
        let any = sys.num_constraints() - before;
        assert!(fixed * 2 < any, "fixed {fixed}, any {any}");
    }

    #[test]
    fn test_rejects_empty_scalars() {
        let mut sys = RunState::<Fq>::compile();
        assert!(escalar_mul_fix(&mut sys, loc!(), &[], &EdwardsVar::base8()).is_err());
        assert!(escalar_mul_any(&mut sys, loc!(), &[], &EdwardsVar::base8()).is_err());
        let bits = vec![Boolean::false_(); 248];
        assert!(escalar_mul_fix(&mut sys, loc!(), &bits, &EdwardsVar::base8()).is_err());
    }
}

//! Bit decomposition gadgets.

use std::borrow::Cow;

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use pool_utils::math::nbits;

use crate::{
    gadgets::comparators::is_zero,
    snarky::{errors::SnarkyCompilationError, prelude::*},
};

/// Number of bits of a canonical field element.
pub const FIELD_BITS: usize = 254;

/// Number of bits decomposed by [comp_constant] to read the comparison bit.
const COMP_CONSTANT_SUM_BITS: usize = 135;

/// `Σ bits[i] * 2^i`.
pub(crate) fn weighted_sum<'a, F: PrimeField>(
    bits: impl IntoIterator<Item = &'a FieldVar<F>>,
) -> FieldVar<F> {
    let mut e2 = F::one();
    let mut lc = FieldVar::zero();
    for bit in bits {
        lc = lc + bit.scale(e2);
        e2.double_in_place();
    }
    lc
}

fn hint_bits<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    value: impl FnOnce(&dyn WitnessGeneration<F>) -> F,
) -> SnarkyResult<Hint<Vec<FieldVar<F>>>> {
    sys.hint_vec(loc, n, |env| {
        let value = value(env).into_bigint();
        (0..n).map(|i| F::from(value.get_bit(i))).collect()
    })
}

fn assert_bits<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: &Cow<'static, str>,
    bits: &[FieldVar<F>],
) -> SnarkyResult<()> {
    for bit in bits {
        sys.assert_boolean(Some("bit"), loc.clone(), bit.clone())?;
    }
    Ok(())
}

/// Decomposes `input` into `n` little-endian bits.
/// Unsatisfiable if `input` does not fit in `n` bits.
pub fn num_to_bits<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    input: &FieldVar<F>,
    n: usize,
) -> SnarkyResult<Vec<Boolean<F>>> {
    sys.scoped("num_to_bits", |sys| {
        let hint = hint_bits(sys, loc.clone(), n, |env| env.read_var(input))?;
        let bits = hint.constrain(sys, |sys, bits| {
            assert_bits(sys, &loc, bits)?;
            sys.assert_eq(Some("num_to_bits sum"), loc, weighted_sum(bits), input.clone())
        })?;
        Ok(bits.into_iter().map(Boolean::create_unsafe).collect())
    })
}

/// Recomposes little-endian bits. The bits are not range checked.
pub fn bits_to_num<F: PrimeField>(bits: &[Boolean<F>]) -> FieldVar<F> {
    weighted_sum(bits.iter().map(Boolean::as_field_var))
}

/// Decomposes `input` into its unique canonical 254-bit representation.
pub fn num_to_bits_strict<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    input: &FieldVar<F>,
) -> SnarkyResult<Vec<Boolean<F>>> {
    sys.scoped("num_to_bits_strict", |sys| {
        let bits = num_to_bits(sys, loc.clone(), input, FIELD_BITS)?;
        alias_check(sys, loc, &bits)?;
        Ok(bits)
    })
}

/// Recomposes 254 bits, rejecting any pattern that encodes a value `>= p`.
pub fn bits_to_num_strict<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    bits: &[Boolean<F>],
) -> SnarkyResult<FieldVar<F>> {
    sys.scoped("bits_to_num_strict", |sys| {
        alias_check(sys, loc, bits)?;
        Ok(bits_to_num(bits))
    })
}

/// Decomposes `2^n - input` into `n` bits, all zero when `input` is zero.
pub fn num_to_bits_neg<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    input: &FieldVar<F>,
    n: usize,
) -> SnarkyResult<Vec<Boolean<F>>> {
    sys.scoped("num_to_bits_neg", |sys| {
        let two_n = F::from(2u64).pow([n as u64]);
        let hint = hint_bits(sys, loc.clone(), n, |env| {
            if n == 0 {
                F::zero()
            } else {
                two_n - env.read_var(input)
            }
        })?;
        let input_is_zero = is_zero(sys, loc.clone(), input)?;
        let bits = hint.constrain(sys, |sys, bits| {
            assert_bits(sys, &loc, bits)?;
            let lhs = weighted_sum(bits) + input_is_zero.as_field_var().scale(two_n);
            let rhs = FieldVar::constant(two_n) - input;
            sys.assert_eq(Some("num_to_bits_neg sum"), loc, lhs, rhs)
        })?;
        Ok(bits.into_iter().map(Boolean::create_unsafe).collect())
    })
}

/// Adds `n`-bit operands, returning the `nbits((2^n - 1) * ops)` bits of the sum.
pub fn bin_sum<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    operands: &[Vec<Boolean<F>>],
) -> SnarkyResult<Vec<Boolean<F>>> {
    if let Some(op) = operands.iter().find(|op| op.len() != n) {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "bin_sum",
            reason: format!("operand of {} bits, expected {n}", op.len()),
        }
        .into());
    }
    let max_sum = ((BigUint::from(1u8) << n) - 1u8) * operands.len();
    let nout = nbits(&max_sum);
    if nout >= F::MODULUS_BIT_SIZE as usize {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "bin_sum",
            reason: format!("a {nout}-bit sum overflows the field"),
        }
        .into());
    }

    sys.scoped("bin_sum", |sys| {
        let mut e2 = F::one();
        let mut lin = FieldVar::zero();
        for k in 0..n {
            for op in operands {
                lin = lin + op[k].as_field_var().scale(e2);
            }
            e2.double_in_place();
        }

        let hint = hint_bits(sys, loc.clone(), nout, |env| env.read_var(&lin))?;
        let bits = hint.constrain(sys, |sys, bits| {
            assert_bits(sys, &loc, bits)?;
            sys.assert_eq(Some("bin_sum"), loc, lin.clone(), weighted_sum(bits))
        })?;
        Ok(bits.into_iter().map(Boolean::create_unsafe).collect())
    })
}

/// Returns 1 iff the 254-bit number `bits` is strictly greater than `ct`.
pub fn comp_constant<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    bits: &[Boolean<F>],
    ct: F,
) -> SnarkyResult<Boolean<F>> {
    if bits.len() != FIELD_BITS {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "comp_constant",
            reason: format!("{} input bits, expected {FIELD_BITS}", bits.len()),
        }
        .into());
    }

    sys.scoped("comp_constant", |sys| {
        let ct = ct.into_bigint();
        let mut b = F::from(2u64).pow([128]) - F::one();
        let mut a = F::one();
        let mut e = F::one();
        let mut sum = FieldVar::zero();

        for (i, pair) in bits.chunks(2).take(FIELD_BITS / 2).enumerate() {
            let clsb = ct.get_bit(2 * i);
            let cmsb = ct.get_bit(2 * i + 1);
            let slsb = pair[0].as_field_var();
            let smsb = pair[1].as_field_var();
            let prod = smsb.mul(slsb, Some("comp_constant part"), loc.clone(), sys)?;

            let part = match (cmsb, clsb) {
                (false, false) => prod.scale(-b) + smsb.scale(b) + slsb.scale(b),
                (false, true) => {
                    prod.scale(a) - slsb.scale(a) + smsb.scale(b) - smsb.scale(a)
                        + FieldVar::constant(a)
                }
                (true, false) => prod.scale(b) - smsb.scale(a) + FieldVar::constant(a),
                (true, true) => prod.scale(-a) + FieldVar::constant(a),
            };
            sum = sum + part;

            b -= e;
            a += e;
            e.double_in_place();
        }

        let sout = sys.materialize(Some("comp_constant sum"), loc.clone(), &sum)?;
        let mut sout_bits = num_to_bits(sys, loc, &sout, COMP_CONSTANT_SUM_BITS)?;
        Ok(sout_bits.swap_remove(127))
    })
}

/// Forces 254 bits to encode a value strictly below the field modulus.
pub fn alias_check<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    bits: &[Boolean<F>],
) -> SnarkyResult<()> {
    sys.scoped("alias_check", |sys| {
        let gt = comp_constant(sys, loc.clone(), bits, -F::one())?;
        sys.assert_eq(Some("alias check"), loc, gt.to_field_var(), FieldVar::zero())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_bn254::Fr;
    use pool_utils::FieldHelpers;
    use proptest::prelude::*;

    fn witness_bits(value: Fr, n: usize) -> (RunState<Fr>, SnarkyResult<Vec<Boolean<Fr>>>) {
        let mut sys = RunState::witness();
        let res = (|| {
            let x: FieldVar<Fr> = sys.private_input(loc!(), || value)?;
            num_to_bits(&mut sys, loc!(), &x, n)
        })();
        (sys, res)
    }

    proptest! {
        #[test]
        fn test_bits_round_trip(n in 1usize..64, value: u64) {
            let value = value & ((1u64 << n) - 1);
            let (sys, bits) = witness_bits(Fr::from(value), n);
            let bits = bits.unwrap();
            prop_assert_eq!(bits.len(), n);
            prop_assert_eq!(sys.read_var(&bits_to_num(&bits)), Fr::from(value));
            prop_assert!(sys.evaluate().unwrap().is_satisfied());
        }
    }

    #[test]
    fn test_num_to_bits_rejects_overflow() {
        let (sys, bits) = witness_bits(Fr::from(256u64), 8);
        bits.unwrap();
        assert!(!sys.evaluate().unwrap().is_satisfied());
    }

    #[test]
    fn test_strict_decomposition() {
        let value = -Fr::from(5u64);
        let mut sys = RunState::witness();
        sys.eval_constraints = true;
        let x: FieldVar<Fr> = sys.private_input(loc!(), || value).unwrap();
        let bits = num_to_bits_strict(&mut sys, loc!(), &x).unwrap();
        assert_eq!(sys.read_var(&bits_to_num(&bits)), value);
        sys.seal().unwrap();
    }

    /// Feeds the bits of `value + p` (which still fit in 254 bits) to both decomposers.
    fn aliased_bits(value: u64, strict: bool) -> bool {
        let modulus = Fr::modulus_biguint();
        let aliased = modulus + value;
        let mut sys = RunState::<Fr>::witness();
        let bits: Vec<Boolean<Fr>> = (0..FIELD_BITS)
            .map(|i| sys.private_input(loc!(), || aliased.bit(i as u64)).unwrap())
            .collect();
        let num = if strict {
            bits_to_num_strict(&mut sys, loc!(), &bits).unwrap()
        } else {
            bits_to_num(&bits)
        };
        sys.assert_eq(None, loc!(), num, FieldVar::constant(Fr::from(value)))
            .unwrap();
        sys.evaluate().unwrap().is_satisfied()
    }

    #[test]
    fn test_strict_rejects_aliases() {
        for value in [0u64, 1, 42] {
            assert!(aliased_bits(value, false));
            assert!(!aliased_bits(value, true));
        }
    }

    #[test]
    fn test_comp_constant() {
        let ct = Fr::from(1000u64);
        for (value, expected) in [(999u64, false), (1000, false), (1001, true)] {
            let mut sys = RunState::<Fr>::witness();
            sys.eval_constraints = true;
            let x: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(value)).unwrap();
            let bits = num_to_bits(&mut sys, loc!(), &x, FIELD_BITS).unwrap();
            let gt = comp_constant(&mut sys, loc!(), &bits, ct).unwrap();
            assert_eq!(gt.read(&sys), expected, "{value} > 1000");
        }
    }

    #[test]
    fn test_num_to_bits_neg() {
        for value in [0u64, 1, 5, 255] {
            let mut sys = RunState::<Fr>::witness();
            sys.eval_constraints = true;
            let x: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(value)).unwrap();
            let bits = num_to_bits_neg(&mut sys, loc!(), &x, 8).unwrap();
            let expected = if value == 0 { 0 } else { 256 - value };
            assert_eq!(sys.read_var(&bits_to_num(&bits)), Fr::from(expected));
        }
    }

    #[test]
    fn test_bin_sum() {
        let mut sys = RunState::<Fr>::witness();
        sys.eval_constraints = true;
        let operands: Vec<Vec<Boolean<Fr>>> = [13u64, 7, 15]
            .iter()
            .map(|v| {
                let x: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(*v)).unwrap();
                num_to_bits(&mut sys, loc!(), &x, 4).unwrap()
            })
            .collect();
        let sum = bin_sum(&mut sys, loc!(), 4, &operands).unwrap();
        // nbits(15 * 3) = 6
        assert_eq!(sum.len(), 6);
        assert_eq!(sys.read_var(&bits_to_num(&sum)), Fr::from(35u64));
    }

    #[test]
    fn test_compile_matches_witness_shape() {
        let mut compiled = RunState::<Fr>::compile();
        let x: FieldVar<Fr> = compiled.private_input(loc!(), || Fr::from(0u64)).unwrap();
        num_to_bits_strict(&mut compiled, loc!(), &x).unwrap();
        compiled.seal().unwrap();

        let mut witnessed = RunState::<Fr>::witness();
        let x: FieldVar<Fr> = witnessed.private_input(loc!(), || Fr::from(77u64)).unwrap();
        num_to_bits_strict(&mut witnessed, loc!(), &x).unwrap();
        assert_eq!(compiled.num_constraints(), witnessed.num_constraints());
    }
}

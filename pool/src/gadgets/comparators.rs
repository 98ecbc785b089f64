//! Equality and ordering gadgets.

use std::borrow::Cow;

use ark_ff::PrimeField;

use crate::{
    gadgets::bits::{num_to_bits, num_to_bits_strict},
    snarky::{errors::SnarkyCompilationError, prelude::*},
};

/// The widest comparison that cannot wrap around the field.
pub const MAX_COMPARISON_BITS: usize = 252;

fn check_width(gadget: &'static str, n: usize) -> SnarkyResult<()> {
    if n > MAX_COMPARISON_BITS {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget,
            reason: format!("{n} bits, at most {MAX_COMPARISON_BITS} are supported"),
        }
        .into());
    }
    Ok(())
}

pub fn is_zero<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    input: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    sys.scoped("is_zero", |sys| input.equal(sys, loc, &FieldVar::zero()))
}

pub fn is_equal<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    is_zero(sys, loc, &(b - a))
}

/// Constrains `a == b` only when `enabled` is 1.
pub fn force_equal_if_enabled<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    enabled: &FieldVar<F>,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<()> {
    sys.scoped("force_equal_if_enabled", |sys| {
        let isz = is_equal(sys, loc.clone(), a, b)?;
        sys.assert_r1cs(
            Some("force_equal_if_enabled"),
            loc,
            isz.not().to_field_var(),
            enabled.clone(),
            FieldVar::zero(),
        )
    })
}

/// `a < b` for operands of at most `n` bits.
pub fn less_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    check_width("less_than", n)?;
    sys.scoped("less_than", |sys| {
        let shift = FieldVar::constant(F::from(2u64).pow([n as u64]));
        let bits = num_to_bits(sys, loc, &(a + shift - b), n + 1)?;
        Ok(bits[n].not())
    })
}

pub fn less_eq_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    less_than(sys, loc, n, a, &(b + FieldVar::one()))
}

pub fn greater_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    less_than(sys, loc, n, b, a)
}

pub fn greater_eq_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    less_than(sys, loc, n, b, &(a + FieldVar::one()))
}

/// Same as [less_than], decomposing the difference canonically so that an
/// out-of-range operand cannot alias into a small one.
pub fn safe_less_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    check_width("safe_less_than", n)?;
    sys.scoped("safe_less_than", |sys| {
        let shift = FieldVar::constant(F::from(2u64).pow([n as u64]));
        let bits = num_to_bits_strict(sys, loc, &(a + shift - b))?;
        Ok(bits[n].not())
    })
}

pub fn safe_less_eq_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    safe_less_than(sys, loc, n, a, &(b + FieldVar::one()))
}

pub fn safe_greater_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    safe_less_than(sys, loc, n, b, a)
}

pub fn safe_greater_eq_than<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    n: usize,
    a: &FieldVar<F>,
    b: &FieldVar<F>,
) -> SnarkyResult<Boolean<F>> {
    safe_less_than(sys, loc, n, b, &(a + FieldVar::one()))
}

/// Running sum of `nums`, each partial sum bound to its own variable.
pub fn calculate_total<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    nums: &[FieldVar<F>],
) -> SnarkyResult<FieldVar<F>> {
    let Some((first, rest)) = nums.split_first() else {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "calculate_total",
            reason: "no input".to_string(),
        }
        .into());
    };
    sys.scoped("calculate_total", |sys| {
        let mut total = first.clone();
        for num in rest {
            total = sys.materialize(Some("partial sum"), loc.clone(), &(&total + num))?;
        }
        Ok(total)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_bn254::Fr;
    use proptest::prelude::*;

    type Comparator = fn(
        &mut RunState<Fr>,
        Cow<'static, str>,
        usize,
        &FieldVar<Fr>,
        &FieldVar<Fr>,
    ) -> SnarkyResult<Boolean<Fr>>;

    fn compare(cmp: Comparator, n: usize, a: Fr, b: Fr) -> (bool, bool) {
        let mut sys = RunState::witness();
        let x: FieldVar<Fr> = sys.private_input(loc!(), || a).unwrap();
        let y: FieldVar<Fr> = sys.private_input(loc!(), || b).unwrap();
        let out = cmp(&mut sys, loc!(), n, &x, &y).unwrap();
        (out.read(&sys), sys.evaluate().unwrap().is_satisfied())
    }

    proptest! {
        #[test]
        fn test_comparators_match_native(a in 0u64..1 << 32, b in 0u64..1 << 32) {
            let (fa, fb) = (Fr::from(a), Fr::from(b));
            let cases: [(Comparator, bool); 8] = [
                (less_than, a < b),
                (less_eq_than, a <= b),
                (greater_than, a > b),
                (greater_eq_than, a >= b),
                (safe_less_than, a < b),
                (safe_less_eq_than, a <= b),
                (safe_greater_than, a > b),
                (safe_greater_eq_than, a >= b),
            ];
            for (cmp, expected) in cases {
                prop_assert_eq!(compare(cmp, 32, fa, fb), (expected, true));
            }
        }
    }

    #[test]
    fn test_width_limit() {
        let mut sys = RunState::<Fr>::compile();
        let res = less_than(&mut sys, loc!(), 253, &FieldVar::zero(), &FieldVar::one());
        assert!(matches!(res, Err(SnarkyError::CompilationError(_))));
    }

    #[test]
    fn test_is_equal() {
        for (a, b) in [(3u64, 3u64), (3, 4), (0, 0)] {
            let mut sys = RunState::<Fr>::witness();
            sys.eval_constraints = true;
            let x: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(a)).unwrap();
            let y: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(b)).unwrap();
            assert_eq!(is_equal(&mut sys, loc!(), &x, &y).unwrap().read(&sys), a == b);
            assert_eq!(is_zero(&mut sys, loc!(), &x).unwrap().read(&sys), a == 0);
            sys.seal().unwrap();
        }
    }

    #[test]
    fn test_force_equal_if_enabled() {
        for (enabled, a, b, satisfied) in [(0u64, 1u64, 2u64, true), (1, 2, 2, true), (1, 1, 2, false)] {
            let mut sys = RunState::<Fr>::witness();
            let e: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(enabled)).unwrap();
            let x: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(a)).unwrap();
            let y: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(b)).unwrap();
            force_equal_if_enabled(&mut sys, loc!(), &e, &x, &y).unwrap();
            assert_eq!(sys.evaluate().unwrap().is_satisfied(), satisfied);
        }
    }

    #[test]
    fn test_calculate_total() {
        let mut sys = RunState::<Fr>::witness();
        let nums: Vec<FieldVar<Fr>> = (1..=5u64)
            .map(|v| sys.private_input(loc!(), || Fr::from(v)).unwrap())
            .collect();
        let total = calculate_total(&mut sys, loc!(), &nums).unwrap();
        assert_eq!(sys.read_var(&total), Fr::from(15u64));
        assert!(calculate_total(&mut sys, loc!(), &[]).is_err());
    }
}

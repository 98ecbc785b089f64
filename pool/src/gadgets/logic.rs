//! Boolean gates. Inputs are expected to be boolean-constrained already.

use std::borrow::Cow;

use ark_ff::PrimeField;

use crate::snarky::{errors::SnarkyCompilationError, prelude::*};

fn product<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    a: &Boolean<F>,
    b: &Boolean<F>,
) -> SnarkyResult<FieldVar<F>> {
    a.as_field_var().mul(b.as_field_var(), Some("gate"), loc, sys)
}

/// `a + b - 2ab`
pub fn xor<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    a: &Boolean<F>,
    b: &Boolean<F>,
) -> SnarkyResult<Boolean<F>> {
    let ab = product(sys, loc, a, b)?;
    let out = a.as_field_var() + b.as_field_var() - ab.scale(F::from(2u64));
    Ok(Boolean::create_unsafe(out))
}

/// `ab`
pub fn and<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    a: &Boolean<F>,
    b: &Boolean<F>,
) -> SnarkyResult<Boolean<F>> {
    product(sys, loc, a, b).map(Boolean::create_unsafe)
}

/// `a + b - ab`
pub fn or<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    a: &Boolean<F>,
    b: &Boolean<F>,
) -> SnarkyResult<Boolean<F>> {
    let ab = product(sys, loc, a, b)?;
    Ok(Boolean::create_unsafe(a.as_field_var() + b.as_field_var() - ab))
}

/// `1 - a`
pub fn not<F: PrimeField>(a: &Boolean<F>) -> Boolean<F> {
    a.not()
}

/// `1 - ab`
pub fn nand<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    a: &Boolean<F>,
    b: &Boolean<F>,
) -> SnarkyResult<Boolean<F>> {
    let ab = product(sys, loc, a, b)?;
    Ok(Boolean::create_unsafe(FieldVar::one() - ab))
}

/// `ab + 1 - a - b`
pub fn nor<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    a: &Boolean<F>,
    b: &Boolean<F>,
) -> SnarkyResult<Boolean<F>> {
    let ab = product(sys, loc, a, b)?;
    let out = ab + FieldVar::one() - a.as_field_var() - b.as_field_var();
    Ok(Boolean::create_unsafe(out))
}

/// AND of all inputs, folded pairwise level by level.
pub fn multi_and<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    inputs: &[Boolean<F>],
) -> SnarkyResult<Boolean<F>> {
    if inputs.is_empty() {
        return Err(SnarkyCompilationError::InvalidParameter {
            gadget: "multi_and",
            reason: "no input".to_string(),
        }
        .into());
    }
    sys.scoped("multi_and", |sys| {
        let mut level = inputs.to_vec();
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for pair in level.chunks(2) {
                match pair {
                    [a, b] => next.push(and(sys, loc.clone(), a, b)?),
                    _ => next.extend_from_slice(pair),
                }
            }
            level = next;
        }
        Ok(level.swap_remove(0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_bn254::Fr;

    type Gate = fn(
        &mut RunState<Fr>,
        Cow<'static, str>,
        &Boolean<Fr>,
        &Boolean<Fr>,
    ) -> SnarkyResult<Boolean<Fr>>;

    #[test]
    fn test_truth_tables() {
        let gates: [(Gate, fn(bool, bool) -> bool); 5] = [
            (xor, |a, b| a ^ b),
            (and, |a, b| a && b),
            (or, |a, b| a || b),
            (nand, |a, b| !(a && b)),
            (nor, |a, b| !(a || b)),
        ];
        for (gate, expected) in gates {
            for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
                let mut sys = RunState::<Fr>::witness();
                let x: Boolean<Fr> = sys.private_input(loc!(), || a).unwrap();
                let y: Boolean<Fr> = sys.private_input(loc!(), || b).unwrap();
                let out = gate(&mut sys, loc!(), &x, &y).unwrap();
                assert_eq!(out.read(&sys), expected(a, b));
                assert_eq!(not(&x).read(&sys), !a);
            }
        }
    }

    #[test]
    fn test_multi_and() {
        for n in 1..=9usize {
            for zero_at in (0..n).map(Some).chain([None]) {
                let mut sys = RunState::<Fr>::witness();
                let inputs: Vec<Boolean<Fr>> = (0..n)
                    .map(|i| sys.private_input(loc!(), || Some(i) != zero_at).unwrap())
                    .collect();
                let out = multi_and(&mut sys, loc!(), &inputs).unwrap();
                assert_eq!(out.read(&sys), zero_at.is_none());
                assert_eq!(sys.num_constraints(), n + n - 1);
            }
        }
    }
}

//! Multiplexers selecting among candidate values with boolean selectors.

use std::borrow::Cow;

use ark_ff::PrimeField;

use crate::snarky::prelude::*;

/// `out[i] = (c[i][1] - c[i][0]) * s + c[i][0]`
pub fn multi_mux1<F: PrimeField, const N: usize>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    c: &[[FieldVar<F>; 2]; N],
    s: &Boolean<F>,
) -> SnarkyResult<[FieldVar<F>; N]> {
    let mut out = std::array::from_fn(|_| FieldVar::zero());
    for (out, c) in out.iter_mut().zip(c) {
        *out = mux1(sys, loc.clone(), c, s)?;
    }
    Ok(out)
}

pub fn mux1<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    c: &[FieldVar<F>; 2],
    s: &Boolean<F>,
) -> SnarkyResult<FieldVar<F>> {
    let [c0, c1] = c;
    let diff = (c1 - c0).mul(s.as_field_var(), Some("mux1"), loc, sys)?;
    Ok(diff + c0)
}

/// Selects `c[i][s0 + 2 s1 + 4 s2]` for every `i`.
pub fn multi_mux3<F: PrimeField, const N: usize>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    c: &[[FieldVar<F>; 8]; N],
    s: &[Boolean<F>; 3],
) -> SnarkyResult<[FieldVar<F>; N]> {
    let [s0, s1, s2] = s.each_ref().map(Boolean::as_field_var);
    let s10 = s1.mul(s0, Some("mux3 s10"), loc.clone(), sys)?;

    let mut out = std::array::from_fn(|_| FieldVar::zero());
    for (out, c) in out.iter_mut().zip(c) {
        let mul = |sys: &mut RunState<F>, lc: FieldVar<F>, s: &FieldVar<F>| {
            lc.mul(s, Some("mux3"), loc.clone(), sys)
        };
        let a210 = mul(
            sys,
            &c[7] - &c[6] - &c[5] + &c[4] - &c[3] + &c[2] + &c[1] - &c[0],
            &s10,
        )?;
        let a21 = mul(sys, &c[6] - &c[4] - &c[2] + &c[0], s1)?;
        let a20 = mul(sys, &c[5] - &c[4] - &c[1] + &c[0], s0)?;
        let a2 = &c[4] - &c[0];
        let a10 = mul(sys, &c[3] - &c[2] - &c[1] + &c[0], &s10)?;
        let a1 = mul(sys, &c[2] - &c[0], s1)?;
        let a0 = mul(sys, &c[1] - &c[0], s0)?;
        let a = c[0].clone();

        let high = mul(sys, a210 + a21 + a20 + a2, s2)?;
        *out = high + a10 + a1 + a0 + a;
    }
    Ok(out)
}

pub fn mux3<F: PrimeField>(
    sys: &mut RunState<F>,
    loc: Cow<'static, str>,
    c: &[FieldVar<F>; 8],
    s: &[Boolean<F>; 3],
) -> SnarkyResult<FieldVar<F>> {
    let [out] = multi_mux3(sys, loc, std::array::from_ref(c), s)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_bn254::Fr;

    #[test]
    fn test_mux3_selects_every_index() {
        for index in 0..8usize {
            let mut sys = RunState::<Fr>::witness();
            sys.eval_constraints = true;
            let c: [FieldVar<Fr>; 8] = sys
                .private_input(loc!(), || std::array::from_fn(|i| Fr::from(100 + i as u64)))
                .unwrap();
            let s: [Boolean<Fr>; 3] = std::array::from_fn(|bit| {
                sys.private_input(loc!(), || (index >> bit) & 1 == 1).unwrap()
            });
            let out = mux3(&mut sys, loc!(), &c, &s).unwrap();
            assert_eq!(sys.read_var(&out), Fr::from(100 + index as u64));
        }
    }

    #[test]
    fn test_mux3_over_constants_needs_one_product_per_output() {
        let mut sys = RunState::<Fr>::compile();
        let s: [Boolean<Fr>; 3] =
            std::array::from_fn(|_| sys.private_input(loc!(), || false).unwrap());
        let before = sys.num_constraints();
        let c = std::array::from_fn(|i| FieldVar::constant(Fr::from((i * i * i) as u64 + 5)));
        multi_mux3(&mut sys, loc!(), &[c.clone(), c], &s).unwrap();
        // s10, then one product with s2 per output
        assert_eq!(sys.num_constraints() - before, 3);
    }

    #[test]
    fn test_mux1() {
        for s in [false, true] {
            let mut sys = RunState::<Fr>::witness();
            let c: [FieldVar<Fr>; 2] = sys
                .private_input(loc!(), || [Fr::from(3u64), Fr::from(9u64)])
                .unwrap();
            let sel: Boolean<Fr> = sys.private_input(loc!(), || s).unwrap();
            let out = mux1(&mut sys, loc!(), &c, &sel).unwrap();
            let swapped = multi_mux1(&mut sys, loc!(), &[[c[1].clone(), c[0].clone()]], &sel).unwrap();
            assert_eq!(sys.read_var(&out), Fr::from(if s { 9u64 } else { 3 }));
            assert_eq!(sys.read_var(&swapped[0]), Fr::from(if s { 3u64 } else { 9 }));
        }
    }
}

use std::borrow::Cow;

use ark_ff::PrimeField;

use crate::snarky::{
    constraint::BasicConstraint, cvar::FieldVar, errors::SnarkyResult, runner::RunState,
    snarky_type::SnarkyType,
};

/// A boolean variable.
#[derive(Debug, Clone)]
pub struct Boolean<F: PrimeField>(FieldVar<F>);

impl<F> SnarkyType<F> for Boolean<F>
where
    F: PrimeField,
{
    type OutOfCircuit = bool;

    const SIZE_IN_FIELD_ELEMENTS: usize = 1;

    fn to_cvars(&self) -> Vec<FieldVar<F>> {
        vec![self.0.clone()]
    }

    fn from_cvars_unsafe(cvars: Vec<FieldVar<F>>) -> Self {
        assert_eq!(cvars.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        Self(cvars[0].clone())
    }

    fn check(&self, cs: &mut RunState<F>, loc: Cow<'static, str>) -> SnarkyResult<()> {
        let constraint = BasicConstraint::Boolean(self.0.clone());
        cs.add_constraint(constraint, Some("boolean check"), loc)
    }

    fn value_to_field_elements(value: &Self::OutOfCircuit) -> Vec<F> {
        if *value {
            vec![F::one()]
        } else {
            vec![F::zero()]
        }
    }

    fn value_of_field_elements(fields: Vec<F>) -> Self::OutOfCircuit {
        assert_eq!(fields.len(), Self::SIZE_IN_FIELD_ELEMENTS);

        fields[0] != F::zero()
    }
}

impl<F> Boolean<F>
where
    F: PrimeField,
{
    pub fn true_() -> Self {
        Self(FieldVar::one())
    }

    pub fn false_() -> Self {
        Self(FieldVar::zero())
    }

    pub fn constant(b: bool) -> Self {
        if b {
            Self::true_()
        } else {
            Self::false_()
        }
    }

    /// Wraps a variable the caller has already constrained to {0, 1}.
    pub fn create_unsafe(x: FieldVar<F>) -> Self {
        Self(x)
    }

    pub fn to_field_var(&self) -> FieldVar<F> {
        self.0.clone()
    }

    pub fn as_field_var(&self) -> &FieldVar<F> {
        &self.0
    }

    pub fn not(&self) -> Self {
        Self(FieldVar::one() - &self.0)
    }

    pub fn and(
        &self,
        other: &Self,
        cs: &mut RunState<F>,
        loc: Cow<'static, str>,
    ) -> SnarkyResult<Self> {
        let res = self.0.mul(&other.0, Some("bool.and"), loc, cs)?;
        Ok(Self(res))
    }

    pub fn or(
        &self,
        other: &Self,
        cs: &mut RunState<F>,
        loc: Cow<'static, str>,
    ) -> SnarkyResult<Self> {
        let both_false = self.not().and(&other.not(), cs, loc)?;
        Ok(both_false.not())
    }

    pub fn any(xs: &[Self], cs: &mut RunState<F>, loc: Cow<'static, str>) -> SnarkyResult<Self> {
        match xs {
            [] => Ok(Self::false_()),
            [x] => Ok(x.clone()),
            [x, y] => x.or(y, cs, loc),
            _ => {
                let sum = FieldVar::sum(xs.iter().map(|x| &x.0));
                let all_zero = sum.equal(cs, loc, &FieldVar::zero())?;
                Ok(all_zero.not())
            }
        }
    }

    pub fn all(xs: &[Self], cs: &mut RunState<F>, loc: Cow<'static, str>) -> SnarkyResult<Self> {
        match xs {
            [] => Ok(Self::true_()),
            [x] => Ok(x.clone()),
            [x, y] => x.and(y, cs, loc),
            _ => {
                let expected = FieldVar::constant(F::from(xs.len() as u64));
                let sum = FieldVar::sum(xs.iter().map(|x| &x.0));
                sum.equal(cs, loc, &expected)
            }
        }
    }

    pub fn to_constant(&self) -> Option<bool> {
        match self.0 {
            FieldVar::Constant(x) => Some(x == F::one()),
            _ => None,
        }
    }

    pub fn xor(
        &self,
        other: &Self,
        state: &mut RunState<F>,
        loc: Cow<'static, str>,
    ) -> SnarkyResult<Self> {
        let res = match (self.to_constant(), other.to_constant()) {
            (Some(true), _) => other.not(),
            (_, Some(true)) => self.not(),
            (Some(false), _) => other.clone(),
            (_, Some(false)) => self.clone(),
            (None, None) => {
                /*
                   (1 - 2 a) (1 - 2 b) = 1 - 2 c
                1 - 2 (a + b) + 4 a b = 1 - 2 c
                - 2 (a + b) + 4 a b = - 2 c
                (a + b) - 2 a b = c
                2 a b = a + b - c
                 */
                let hint = state.hint::<FieldVar<F>, _>(loc.clone(), |env| {
                    let a = env.read_var(&self.0);
                    let b = env.read_var(&other.0);
                    a + b - (a * b).double()
                })?;
                let res = hint.constrain(state, |state, res| {
                    let x = &self.0 + &self.0;
                    let z = &self.0 + &other.0 - res;
                    state.assert_r1cs(Some("xor"), loc, x, other.0.clone(), z)
                })?;
                Self(res)
            }
        };

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_bn254::Fr;

    #[test]
    fn test_boolean_ops() {
        for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
            let mut sys = RunState::<Fr>::witness();
            sys.eval_constraints = true;
            let x: Boolean<Fr> = sys.private_input(loc!(), || a).unwrap();
            let y: Boolean<Fr> = sys.private_input(loc!(), || b).unwrap();
            let and = x.and(&y, &mut sys, loc!()).unwrap();
            let or = x.or(&y, &mut sys, loc!()).unwrap();
            let xor = x.xor(&y, &mut sys, loc!()).unwrap();
            assert_eq!(and.read(&sys), a && b);
            assert_eq!(or.read(&sys), a || b);
            assert_eq!(xor.read(&sys), a ^ b);
            sys.seal().unwrap();
        }
    }
}

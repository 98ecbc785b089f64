use std::{
    borrow::Cow,
    ops::{Add, Neg, Sub},
};

use ark_ff::PrimeField;

use crate::snarky::{
    boolean::Boolean,
    errors::SnarkyResult,
    runner::{RunState, WitnessGeneration},
    snarky_type::SnarkyType,
};

/// A circuit variable represents a field element in the circuit.
/// Linear combinations are free, only multiplications create constraints.
#[derive(Clone, Debug)]
pub enum FieldVar<F>
where
    F: PrimeField,
{
    Constant(F),
    Var(usize),
    Add(Box<FieldVar<F>>, Box<FieldVar<F>>),
    Scale(F, Box<FieldVar<F>>),
}

pub type Term<F> = (F, usize);

pub type ScaledFieldVar<F> = (F, FieldVar<F>);

impl<F> FieldVar<F>
where
    F: PrimeField,
{
    pub fn zero() -> Self {
        FieldVar::Constant(F::zero())
    }

    pub fn one() -> Self {
        FieldVar::Constant(F::one())
    }

    pub fn constant(c: F) -> Self {
        FieldVar::Constant(c)
    }

    pub fn to_constant(&self) -> Option<F> {
        match self {
            FieldVar::Constant(c) => Some(*c),
            _ => None,
        }
    }

    fn eval_inner(&self, context: &impl Fn(usize) -> F, scale: F, res: &mut F) {
        match self {
            FieldVar::Constant(c) => {
                *res += scale * c;
            }
            FieldVar::Var(v) => {
                let v = context(*v);
                *res += scale * v;
            }
            FieldVar::Add(a, b) => {
                a.eval_inner(context, scale, res);
                b.eval_inner(context, scale, res);
            }
            FieldVar::Scale(s, v) => {
                v.eval_inner(context, scale * s, res);
            }
        }
    }

    /// Evaluate the field element associated to a variable (used during witness generation)
    pub fn eval(&self, context: &impl Fn(usize) -> F) -> F {
        let mut res = F::zero();
        self.eval_inner(context, F::one(), &mut res);
        res
    }

    fn to_constant_and_terms_inner(
        &self,
        scale: F,
        constant: F,
        terms: Vec<Term<F>>,
    ) -> (F, Vec<Term<F>>) {
        match self {
            FieldVar::Constant(c) => (constant + (scale * c), terms),
            FieldVar::Var(v) => {
                let mut new_terms = vec![(scale, *v)];
                new_terms.extend(terms);
                (constant, new_terms)
            }
            FieldVar::Scale(s, t) => t.to_constant_and_terms_inner(scale * s, constant, terms),
            FieldVar::Add(x1, x2) => {
                let (c1, terms1) = x1.to_constant_and_terms_inner(scale, constant, terms);
                x2.to_constant_and_terms_inner(scale, c1, terms1)
            }
        }
    }

    /// Flattens the variable into a constant and a list of scaled variable indices.
    /// Indices may repeat.
    pub fn to_constant_and_terms(&self) -> (Option<F>, Vec<Term<F>>) {
        let (constant, terms) = self.to_constant_and_terms_inner(F::one(), F::zero(), vec![]);
        let constant = if constant.is_zero() {
            None
        } else {
            Some(constant)
        };
        (constant, terms)
    }

    pub fn scale(&self, scalar: F) -> Self {
        if scalar.is_zero() {
            return FieldVar::Constant(scalar);
        } else if scalar.is_one() {
            return self.clone();
        }

        match self {
            FieldVar::Constant(x) => FieldVar::Constant(*x * scalar),
            FieldVar::Scale(s, v) => FieldVar::Scale(*s * scalar, v.clone()),
            FieldVar::Var(_) | FieldVar::Add(..) => FieldVar::Scale(scalar, Box::new(self.clone())),
        }
    }

    pub fn linear_combination(terms: &[ScaledFieldVar<F>]) -> Self {
        let mut res = FieldVar::zero();
        for (cst, term) in terms {
            res = res.add(&term.scale(*cst));
        }
        res
    }

    pub fn sum<'a>(vs: impl IntoIterator<Item = &'a Self>) -> Self
    where
        F: 'a,
    {
        vs.into_iter().fold(FieldVar::zero(), |acc, v| acc + v)
    }

    /// Multiplies two variables, creating an R1CS constraint unless one side is constant.
    pub fn mul(
        &self,
        other: &Self,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
        cs: &mut RunState<F>,
    ) -> SnarkyResult<Self> {
        let res = match (self, other) {
            (FieldVar::Constant(x), FieldVar::Constant(y)) => FieldVar::Constant(*x * y),

            (FieldVar::Constant(cst), _) | (_, FieldVar::Constant(cst)) if cst.is_zero() => {
                FieldVar::zero()
            }

            (FieldVar::Constant(cst), cvar) | (cvar, FieldVar::Constant(cst)) if cst.is_one() => {
                cvar.clone()
            }

            (FieldVar::Constant(cst), cvar) | (cvar, FieldVar::Constant(cst)) => cvar.scale(*cst),

            (_, _) => {
                let hint = cs.hint::<FieldVar<F>, _>(loc.clone(), |env| {
                    env.read_var(self) * env.read_var(other)
                })?;
                hint.constrain(cs, |cs, res| {
                    cs.assert_r1cs(
                        label.or(Some("checked_mul")),
                        loc,
                        self.clone(),
                        other.clone(),
                        res.clone(),
                    )
                })?
            }
        };
        Ok(res)
    }

    pub fn square(
        &self,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
        cs: &mut RunState<F>,
    ) -> SnarkyResult<Self> {
        match self {
            FieldVar::Constant(x) => Ok(FieldVar::Constant(x.square())),
            _ => {
                let hint =
                    cs.hint::<FieldVar<F>, _>(loc.clone(), |env| env.read_var(self).square())?;
                hint.constrain(cs, |cs, res| {
                    cs.assert_square(
                        label.or(Some("checked_square")),
                        loc,
                        self.clone(),
                        res.clone(),
                    )
                })
            }
        }
    }

    /** [equal_constraints z z_inv r] asserts that
       if z = 0 then r = 1, or
       if z <> 0 then r = 0 and z * z_inv = 1
    */
    fn equal_constraints(
        state: &mut RunState<F>,
        loc: Cow<'static, str>,
        z: Self,
        z_inv: Self,
        r: Self,
    ) -> SnarkyResult<()> {
        let one_minus_r = FieldVar::one() - &r;
        state.assert_r1cs(Some("equals_1"), loc.clone(), z_inv, z.clone(), one_minus_r)?;
        state.assert_r1cs(Some("equals_2"), loc, r, z, FieldVar::zero())
    }

    /** [equal_vars z] computes [(r, z_inv)] that satisfy the constraints in
    [equal_constraints z z_inv r].

    In particular, [r] is [1] if [z = 0] and [0] otherwise.
    */
    fn equal_vars(env: &dyn WitnessGeneration<F>, z: &FieldVar<F>) -> (F, F) {
        let z: F = env.read_var(z);
        if let Some(z_inv) = z.inverse() {
            (F::zero(), z_inv)
        } else {
            (F::one(), F::zero())
        }
    }

    /// Returns a boolean that is true iff `self == other`.
    pub fn equal(
        &self,
        state: &mut RunState<F>,
        loc: Cow<'static, str>,
        other: &FieldVar<F>,
    ) -> SnarkyResult<Boolean<F>> {
        match (self, other) {
            (FieldVar::Constant(x), FieldVar::Constant(y)) => Ok(Boolean::constant(x == y)),
            _ => {
                let z = self - other;
                let hint = state.hint::<(FieldVar<F>, FieldVar<F>), _>(loc.clone(), |env| {
                    Self::equal_vars(env, &z)
                })?;
                let (res, _z_inv) = hint.constrain(state, |state, (res, z_inv)| {
                    Self::equal_constraints(state, loc, z.clone(), z_inv.clone(), res.clone())
                })?;
                Ok(Boolean::create_unsafe(res))
            }
        }
    }
}

//
// Our Traits
//

impl<F> SnarkyType<F> for FieldVar<F>
where
    F: PrimeField,
{
    type OutOfCircuit = F;

    const SIZE_IN_FIELD_ELEMENTS: usize = 1;

    fn to_cvars(&self) -> Vec<FieldVar<F>> {
        vec![self.clone()]
    }

    fn from_cvars_unsafe(cvars: Vec<FieldVar<F>>) -> Self {
        assert_eq!(cvars.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        cvars[0].clone()
    }

    fn check(&self, _cs: &mut RunState<F>, _loc: Cow<'static, str>) -> SnarkyResult<()> {
        // do nothing
        Ok(())
    }

    fn value_to_field_elements(x: &Self::OutOfCircuit) -> Vec<F> {
        vec![*x]
    }

    fn value_of_field_elements(fields: Vec<F>) -> Self::OutOfCircuit {
        assert_eq!(fields.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        fields[0]
    }
}

//
// Operations
//

impl<F> Add for &FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn add(self, other: Self) -> Self::Output {
        match (self, other) {
            (FieldVar::Constant(x), y) | (y, FieldVar::Constant(x)) if x.is_zero() => y.clone(),
            (FieldVar::Constant(x), FieldVar::Constant(y)) => FieldVar::Constant(*x + y),
            (_, _) => FieldVar::Add(Box::new(self.clone()), Box::new(other.clone())),
        }
    }
}

impl<F> Add<Self> for FieldVar<F>
where
    F: PrimeField,
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        &self + &other
    }
}

impl<'a, F> Add<&'a Self> for FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn add(self, other: &Self) -> Self::Output {
        &self + other
    }
}

impl<F> Add<FieldVar<F>> for &FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn add(self, other: FieldVar<F>) -> Self::Output {
        self + &other
    }
}

impl<F> Sub for &FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn sub(self, other: Self) -> Self::Output {
        match (self, other) {
            (FieldVar::Constant(x), FieldVar::Constant(y)) => FieldVar::Constant(*x - y),
            (x, FieldVar::Constant(y)) if y.is_zero() => x.clone(),
            // -1 * y + x
            _ => self.add(&other.scale(-F::one())),
        }
    }
}

impl<F> Sub<Self> for FieldVar<F>
where
    F: PrimeField,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        &self - &other
    }
}

impl<'a, F> Sub<&'a Self> for FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn sub(self, other: &Self) -> Self::Output {
        &self - other
    }
}

impl<F> Sub<FieldVar<F>> for &FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn sub(self, other: FieldVar<F>) -> Self::Output {
        self - &other
    }
}

impl<F> Neg for &FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn neg(self) -> Self::Output {
        self.scale(-F::one())
    }
}

impl<F> Neg for FieldVar<F>
where
    F: PrimeField,
{
    type Output = FieldVar<F>;

    fn neg(self) -> Self::Output {
        self.scale(-F::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;

    #[test]
    fn test_constant_folding() {
        let a = FieldVar::<Fr>::constant(Fr::from(3u64));
        let b = FieldVar::<Fr>::constant(Fr::from(4u64));
        let c = (&a + &b) - FieldVar::one();
        assert_eq!(c.to_constant(), Some(Fr::from(6u64)));
        assert_eq!((-a).to_constant(), Some(-Fr::from(3u64)));
    }

    #[test]
    fn test_to_constant_and_terms() {
        let x = FieldVar::<Fr>::Var(0);
        let y = FieldVar::<Fr>::Var(1);
        let lc = x.scale(Fr::from(2u64)) + &y - FieldVar::constant(Fr::from(5u64));
        let (constant, terms) = lc.to_constant_and_terms();
        assert_eq!(constant, Some(-Fr::from(5u64)));
        assert_eq!(terms.len(), 2);
        let values = [Fr::from(7u64), Fr::from(11u64)];
        assert_eq!(lc.eval(&|i| values[i]), Fr::from(20u64));
    }
}

//! The rank-1 constraints recorded by the runner.

use std::{borrow::Cow, sync::Arc};

use ark_ff::PrimeField;

use crate::snarky::{
    cvar::FieldVar,
    errors::{SnarkyRuntimeError, SnarkyRuntimeResult},
    runner::WitnessGeneration,
};

/// A quadratic relation between linear combinations of variables.
#[derive(Clone, Debug)]
pub enum BasicConstraint<F: PrimeField> {
    /// `x * x = x`
    Boolean(FieldVar<F>),
    /// `x = y`
    Equal(FieldVar<F>, FieldVar<F>),
    /// `x * x = y`
    Square(FieldVar<F>, FieldVar<F>),
    /// `a * b = c`
    R1CS(FieldVar<F>, FieldVar<F>, FieldVar<F>),
}

impl<F> BasicConstraint<F>
where
    F: PrimeField,
{
    /// In witness generation, this checks if the constraint is satisfied by some witness values.
    pub fn check_constraint(&self, env: &impl WitnessGeneration<F>) -> SnarkyRuntimeResult<()> {
        match self {
            BasicConstraint::Boolean(v) => {
                let v = env.read_var(v);
                if !(v.is_one() || v.is_zero()) {
                    return Err(SnarkyRuntimeError::UnsatisfiedBooleanConstraint(
                        v.to_string(),
                    ));
                }
            }
            BasicConstraint::Equal(v1, v2) => {
                let v1 = env.read_var(v1);
                let v2 = env.read_var(v2);
                if v1 != v2 {
                    return Err(SnarkyRuntimeError::UnsatisfiedEqualConstraint(
                        v1.to_string(),
                        v2.to_string(),
                    ));
                }
            }
            BasicConstraint::Square(x, z) => {
                let x = env.read_var(x);
                let z = env.read_var(z);
                if x.square() != z {
                    return Err(SnarkyRuntimeError::UnsatisfiedSquareConstraint(
                        x.to_string(),
                        z.to_string(),
                    ));
                }
            }
            BasicConstraint::R1CS(a, b, c) => {
                let a = env.read_var(a);
                let b = env.read_var(b);
                let c = env.read_var(c);
                if a * b != c {
                    return Err(SnarkyRuntimeError::UnsatisfiedR1CSConstraint(
                        a.to_string(),
                        b.to_string(),
                        c.to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// True when no variable is involved, so the constraint can be decided while compiling.
    pub(crate) fn is_constant(&self) -> bool {
        match self {
            BasicConstraint::Boolean(x) => x.to_constant().is_some(),
            BasicConstraint::Equal(x, y) | BasicConstraint::Square(x, y) => {
                x.to_constant().is_some() && y.to_constant().is_some()
            }
            BasicConstraint::R1CS(a, b, c) => {
                a.to_constant().is_some() && b.to_constant().is_some() && c.to_constant().is_some()
            }
        }
    }
}

/// A wrapper around [BasicConstraint] with a label, the gadget scope and
/// the source location that created it (for debugging).
#[derive(Clone, Debug)]
pub struct AnnotatedConstraint<F: PrimeField> {
    pub label: &'static str,
    pub scope: Arc<str>,
    pub loc: Cow<'static, str>,
    pub constraint: BasicConstraint<F>,
}

impl<F> AnnotatedConstraint<F>
where
    F: PrimeField,
{
    /// Same as [BasicConstraint::check_constraint], with the failure wrapped in its annotation.
    pub fn check_constraint(&self, env: &impl WitnessGeneration<F>) -> SnarkyRuntimeResult<()> {
        self.constraint
            .check_constraint(env)
            .map_err(|reason| SnarkyRuntimeError::Unsatisfied {
                label: self.label,
                scope: self.scope.clone(),
                loc: self.loc.clone(),
                reason: Box::new(reason),
            })
    }
}

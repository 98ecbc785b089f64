//! The circuit-generation and witness-generation logic.

use std::{borrow::Cow, sync::Arc};

use ark_ff::PrimeField;
use log::{trace, warn};

use crate::snarky::{
    constraint::{AnnotatedConstraint, BasicConstraint},
    cvar::FieldVar,
    errors::{SnarkyCompilationError, SnarkyError, SnarkyResult, SnarkyRuntimeError},
    evaluation::{ConstraintReport, Evaluation, Visibility, Wire, WireKind},
    snarky_type::SnarkyType,
};

const ROOT_SCOPE: &str = "circuit";

/// The state used when compiling a circuit, or used in witness generation as well.
///
/// Constraints are recorded in both modes so that a witness run can be
/// evaluated against the exact system it produced.
#[derive(Debug)]
pub struct RunState<F>
where
    F: PrimeField,
{
    /// The constraints created so far, in creation order.
    constraints: Vec<AnnotatedConstraint<F>>,

    /// The kind of every allocated variable, indexed like [FieldVar::Var].
    wires: Vec<WireKind>,

    /// The value of every allocated variable, only filled in witness generation.
    witness: Vec<F>,

    /// If set, the witness generation will check if the constraints are satisfied.
    /// This is useful to simulate running the circuit and return an error if an assertion fails.
    pub eval_constraints: bool,

    /// Indication that we're running the witness generation.
    has_witness: bool,

    /// Stack of gadget scope paths, the last one being the current path.
    scopes: Vec<Arc<str>>,

    /// Hints created but not yet bound by [Hint::constrain].
    open_hints: usize,
}

//
// witness generation
//

/// A witness generation environment.
/// This is passed to any closure in [RunState::hint] so that they can access the witness generation environment.
pub trait WitnessGeneration<F>
where
    F: PrimeField,
{
    /// Allows the caller to obtain the value behind a circuit variable.
    fn read_var(&self, var: &FieldVar<F>) -> F;
}

impl<F: PrimeField, G: WitnessGeneration<F>> WitnessGeneration<F> for &G {
    fn read_var(&self, var: &FieldVar<F>) -> F {
        G::read_var(*self, var)
    }
}

impl<F: PrimeField> WitnessGeneration<F> for &dyn WitnessGeneration<F> {
    fn read_var(&self, var: &FieldVar<F>) -> F {
        (**self).read_var(var)
    }
}

impl<F> WitnessGeneration<F> for RunState<F>
where
    F: PrimeField,
{
    fn read_var(&self, var: &FieldVar<F>) -> F {
        var.eval(&|idx| self.witness[idx])
    }
}

/// A non-deterministic value that has not been bound by constraints yet.
///
/// The variables are only released by [Hint::constrain], which fails if the
/// verifying closure did not add at least one constraint.
#[must_use = "a hint must be bound by constraints through `Hint::constrain`"]
#[derive(Debug)]
pub struct Hint<T> {
    value: T,
    loc: Cow<'static, str>,
}

impl<T> Hint<T> {
    /// Runs `check` over the hinted variables and releases them.
    pub fn constrain<F, FUNC>(self, sys: &mut RunState<F>, check: FUNC) -> SnarkyResult<T>
    where
        F: PrimeField,
        FUNC: FnOnce(&mut RunState<F>, &T) -> SnarkyResult<()>,
    {
        let before = sys.constraints.len();
        check(sys, &self.value)?;
        if sys.constraints.len() == before {
            return Err(SnarkyCompilationError::UnconstrainedHint(self.loc.into_owned()).into());
        }
        sys.open_hints -= 1;
        Ok(self.value)
    }
}

//
// circuit generation
//

impl<F> RunState<F>
where
    F: PrimeField,
{
    fn new(has_witness: bool) -> Self {
        Self {
            constraints: vec![],
            wires: vec![],
            witness: vec![],
            eval_constraints: false,
            has_witness,
            scopes: vec![Arc::from(ROOT_SCOPE)],
            open_hints: 0,
        }
    }

    /// Creates a runner that only builds the constraint system.
    /// Closures computing values are never called.
    pub fn compile() -> Self {
        Self::new(false)
    }

    /// Creates a runner that builds the constraint system and computes the witness.
    pub fn witness() -> Self {
        Self::new(true)
    }

    pub fn has_witness(&self) -> bool {
        self.has_witness
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_vars(&self) -> usize {
        self.wires.len()
    }

    pub fn constraints(&self) -> &[AnnotatedConstraint<F>] {
        &self.constraints
    }

    pub fn wires(&self) -> &[WireKind] {
        &self.wires
    }

    /// The current gadget scope path.
    pub fn scope(&self) -> Arc<str> {
        match self.scopes.last() {
            Some(scope) => scope.clone(),
            None => Arc::from(ROOT_SCOPE),
        }
    }

    /// Allocates a new variable without a value.
    fn alloc_var(&mut self, kind: WireKind) -> FieldVar<F> {
        let v = self.wires.len();
        self.wires.push(kind);
        FieldVar::Var(v)
    }

    /// Stores a field element as an unconstrained variable.
    fn store_field_elt(&mut self, kind: WireKind, x: F) -> FieldVar<F> {
        let v = self.alloc_var(kind);
        self.witness.push(x);
        v
    }

    fn compute_inner<T, FUNC>(
        &mut self,
        kind: WireKind,
        checked: bool,
        loc: Cow<'static, str>,
        to_compute_value: FUNC,
    ) -> SnarkyResult<T>
    where
        T: SnarkyType<F>,
        FUNC: FnOnce(&dyn WitnessGeneration<F>) -> T::OutOfCircuit,
    {
        let cvars = if self.has_witness {
            // compute the value by running the closure
            let value: T::OutOfCircuit = to_compute_value(self);
            T::value_to_field_elements(&value)
                .into_iter()
                .map(|field| self.store_field_elt(kind, field))
                .collect()
        } else {
            (0..T::SIZE_IN_FIELD_ELEMENTS)
                .map(|_| self.alloc_var(kind))
                .collect()
        };

        let snarky_type = T::from_cvars_unsafe(cvars);
        if checked {
            snarky_type.check(self, loc)?;
        }
        Ok(snarky_type)
    }

    /// Allocates a public input. The closure is only called in witness generation.
    pub fn public_input<T, FUNC>(&mut self, loc: Cow<'static, str>, value: FUNC) -> SnarkyResult<T>
    where
        T: SnarkyType<F>,
        FUNC: FnOnce() -> T::OutOfCircuit,
    {
        self.compute_inner(WireKind::Input(Visibility::Public), true, loc, |_| value())
    }

    /// Allocates a private input. The closure is only called in witness generation.
    pub fn private_input<T, FUNC>(&mut self, loc: Cow<'static, str>, value: FUNC) -> SnarkyResult<T>
    where
        T: SnarkyType<F>,
        FUNC: FnOnce() -> T::OutOfCircuit,
    {
        self.compute_inner(WireKind::Input(Visibility::Private), true, loc, |_| value())
    }

    /// Creates new non-deterministic variables, computed by the closure in witness generation.
    pub fn hint<T, FUNC>(&mut self, loc: Cow<'static, str>, to_compute_value: FUNC) -> SnarkyResult<Hint<T>>
    where
        T: SnarkyType<F>,
        FUNC: FnOnce(&dyn WitnessGeneration<F>) -> T::OutOfCircuit,
    {
        let value = self.compute_inner(WireKind::Internal, false, loc.clone(), to_compute_value)?;
        self.open_hints += 1;
        Ok(Hint { value, loc })
    }

    /// Same as [Self::hint] for a number of variables only known at runtime.
    pub fn hint_vec<FUNC>(
        &mut self,
        loc: Cow<'static, str>,
        len: usize,
        to_compute_values: FUNC,
    ) -> SnarkyResult<Hint<Vec<FieldVar<F>>>>
    where
        FUNC: FnOnce(&dyn WitnessGeneration<F>) -> Vec<F>,
    {
        let value = if self.has_witness {
            let values = to_compute_values(self);
            if values.len() != len {
                return Err(SnarkyRuntimeError::HintLength {
                    loc: loc.into_owned(),
                    expected: len,
                    actual: values.len(),
                }
                .into());
            }
            values
                .into_iter()
                .map(|x| self.store_field_elt(WireKind::Internal, x))
                .collect()
        } else {
            (0..len).map(|_| self.alloc_var(WireKind::Internal)).collect()
        };
        self.open_hints += 1;
        Ok(Hint { value, loc })
    }

    /// Exposes `var` as a new public output variable.
    pub fn public_output(
        &mut self,
        loc: Cow<'static, str>,
        var: &FieldVar<F>,
    ) -> SnarkyResult<FieldVar<F>> {
        let out: FieldVar<F> = self.compute_inner(
            WireKind::Output(Visibility::Public),
            false,
            loc.clone(),
            |env| env.read_var(var),
        )?;
        self.assert_eq(Some("public output"), loc, out.clone(), var.clone())?;
        Ok(out)
    }

    /// Binds a linear combination to a fresh variable, so that later
    /// constraints only reference that variable.
    pub fn materialize(
        &mut self,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
        var: &FieldVar<F>,
    ) -> SnarkyResult<FieldVar<F>> {
        match var {
            FieldVar::Constant(_) | FieldVar::Var(_) => Ok(var.clone()),
            _ => {
                let hint = self.hint::<FieldVar<F>, _>(loc.clone(), |env| env.read_var(var))?;
                hint.constrain(self, |sys, out| {
                    sys.assert_eq(label, loc, out.clone(), var.clone())
                })
            }
        }
    }

    /// Runs `f` inside a named gadget scope, attached to every constraint it creates.
    pub fn scoped<R, FUNC>(&mut self, name: &str, f: FUNC) -> SnarkyResult<R>
    where
        FUNC: FnOnce(&mut Self) -> SnarkyResult<R>,
    {
        let path: Arc<str> = format!("{}/{}", self.scope(), name).into();
        trace!("entering {path}");
        self.scopes.push(path);
        let res = f(self);
        self.scopes.pop();
        res
    }

    /// Creates a constraint for `assert_eq!(a * b, c)`.
    pub fn assert_r1cs(
        &mut self,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
        a: FieldVar<F>,
        b: FieldVar<F>,
        c: FieldVar<F>,
    ) -> SnarkyResult<()> {
        self.add_constraint(BasicConstraint::R1CS(a, b, c), label, loc)
    }

    /// Creates a constraint for `assert_eq!(x, y)`.
    pub fn assert_eq(
        &mut self,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
        x: FieldVar<F>,
        y: FieldVar<F>,
    ) -> SnarkyResult<()> {
        self.add_constraint(BasicConstraint::Equal(x, y), label, loc)
    }

    /// Creates a constraint for `assert_eq!(x * x, z)`.
    pub fn assert_square(
        &mut self,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
        x: FieldVar<F>,
        z: FieldVar<F>,
    ) -> SnarkyResult<()> {
        self.add_constraint(BasicConstraint::Square(x, z), label, loc)
    }

    /// Creates a constraint for `x` being 0 or 1.
    pub fn assert_boolean(
        &mut self,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
        x: FieldVar<F>,
    ) -> SnarkyResult<()> {
        self.add_constraint(BasicConstraint::Boolean(x), label, loc)
    }

    /// Adds a constraint to the circuit.
    ///
    /// Constraints over constants only are decided immediately and fail as a
    /// compilation error. Otherwise, with [Self::eval_constraints] set during
    /// witness generation, an unsatisfied constraint fails fast.
    pub fn add_constraint(
        &mut self,
        constraint: BasicConstraint<F>,
        label: Option<&'static str>,
        loc: Cow<'static, str>,
    ) -> SnarkyResult<()> {
        let label = label.unwrap_or("<unknown>");

        if constraint.is_constant() {
            if let Err(reason) = constraint.check_constraint(self) {
                return Err(SnarkyCompilationError::ConstantAssertion(
                    label.to_string(),
                    reason.to_string(),
                )
                .into());
            }
        }

        let constraint = AnnotatedConstraint {
            label,
            scope: self.scope(),
            loc,
            constraint,
        };

        // We can't evaluate the constraints if we are not computing over a value.
        if self.eval_constraints && self.has_witness {
            constraint
                .check_constraint(self)
                .map_err(SnarkyError::RuntimeError)?;
        }

        self.constraints.push(constraint);

        Ok(())
    }

    /// Fails if a hint was dropped without being constrained.
    pub fn seal(&self) -> SnarkyResult<()> {
        if self.open_hints != 0 {
            return Err(SnarkyCompilationError::OpenHints(self.open_hints).into());
        }
        Ok(())
    }

    /// Checks every recorded constraint against the witness, and returns the
    /// per-constraint reports with the complete wire assignment.
    pub fn evaluate(&self) -> SnarkyResult<Evaluation<F>> {
        if !self.has_witness {
            return Err(SnarkyRuntimeError::MissingWitness.into());
        }

        let constraints: Vec<_> = self
            .constraints
            .iter()
            .enumerate()
            .map(|(index, c)| ConstraintReport {
                index,
                label: c.label,
                scope: c.scope.clone(),
                loc: c.loc.clone(),
                error: c.constraint.check_constraint(self).err(),
            })
            .collect();

        let wires = self
            .wires
            .iter()
            .zip(&self.witness)
            .enumerate()
            .map(|(index, (kind, value))| Wire {
                index,
                kind: *kind,
                value: *value,
            })
            .collect();

        let evaluation = Evaluation { constraints, wires };

        let unsatisfied = evaluation.unsatisfied().count();
        if let Some(first) = evaluation.unsatisfied().next() {
            warn!(
                "{unsatisfied} of {} constraints unsatisfied, first: `{}` in {} ({})",
                evaluation.constraints.len(),
                first.label,
                first.scope,
                first.loc
            );
        }

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loc;
    use ark_bn254::Fr;

    #[test]
    fn test_dropped_hint_is_detected() {
        let mut sys = RunState::<Fr>::compile();
        let _ = sys.hint::<FieldVar<Fr>, _>(loc!(), |_| Fr::from(1u64)).unwrap();
        assert!(matches!(
            sys.seal(),
            Err(SnarkyError::CompilationError(
                SnarkyCompilationError::OpenHints(1)
            ))
        ));
    }

    #[test]
    fn test_unconstrained_hint_is_rejected() {
        let mut sys = RunState::<Fr>::compile();
        let hint = sys.hint::<FieldVar<Fr>, _>(loc!(), |_| Fr::from(1u64)).unwrap();
        let res = hint.constrain(&mut sys, |_, _| Ok(()));
        assert!(matches!(
            res,
            Err(SnarkyError::CompilationError(
                SnarkyCompilationError::UnconstrainedHint(_)
            ))
        ));
    }

    #[test]
    fn test_constant_assertion_fails_at_compile_time() {
        let mut sys = RunState::<Fr>::compile();
        let res = sys.assert_eq(
            None,
            loc!(),
            FieldVar::constant(Fr::from(1u64)),
            FieldVar::constant(Fr::from(2u64)),
        );
        assert!(matches!(res, Err(SnarkyError::CompilationError(_))));
    }

    #[test]
    fn test_fail_fast_carries_scope_and_label() {
        let mut sys = RunState::<Fr>::witness();
        sys.eval_constraints = true;
        let x: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(3u64)).unwrap();
        let err = sys
            .scoped("outer", |sys| {
                sys.scoped("inner", |sys| {
                    sys.assert_eq(Some("x is five"), loc!(), x.clone(), FieldVar::constant(Fr::from(5u64)))
                })
            })
            .unwrap_err();
        match err {
            SnarkyError::RuntimeError(SnarkyRuntimeError::Unsatisfied { label, scope, .. }) => {
                assert_eq!(label, "x is five");
                assert_eq!(&*scope, "circuit/outer/inner");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_evaluation_reports() {
        let mut sys = RunState::<Fr>::witness();
        let x: FieldVar<Fr> = sys.public_input(loc!(), || Fr::from(3u64)).unwrap();
        let y: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(4u64)).unwrap();
        let xy = x.mul(&y, None, loc!(), &mut sys).unwrap();
        sys.public_output(loc!(), &xy).unwrap();
        sys.assert_eq(Some("wrong"), loc!(), x.clone(), y.clone()).unwrap();
        sys.seal().unwrap();

        let evaluation = sys.evaluate().unwrap();
        assert!(!evaluation.is_satisfied());
        assert_eq!(evaluation.unsatisfied().count(), 1);
        assert_eq!(evaluation.public_inputs(), vec![Fr::from(3u64)]);
        assert_eq!(evaluation.public_outputs(), vec![Fr::from(12u64)]);
        assert_eq!(evaluation.wires.len(), sys.num_vars());
    }

    #[test]
    fn test_compile_and_witness_agree_on_shape() {
        fn circuit(sys: &mut RunState<Fr>) -> SnarkyResult<()> {
            let x: FieldVar<Fr> = sys.private_input(loc!(), || Fr::from(9u64))?;
            let y = x.square(None, loc!(), sys)?;
            let _ = y.equal(sys, loc!(), &FieldVar::constant(Fr::from(81u64)))?;
            sys.seal()
        }
        let mut compiled = RunState::compile();
        circuit(&mut compiled).unwrap();
        let mut witnessed = RunState::witness();
        circuit(&mut witnessed).unwrap();
        assert_eq!(compiled.num_constraints(), witnessed.num_constraints());
        assert_eq!(compiled.num_vars(), witnessed.num_vars());
        assert!(witnessed.evaluate().unwrap().is_satisfied());
        assert!(compiled.evaluate().is_err());
    }
}

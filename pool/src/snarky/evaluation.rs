//! The result of checking a witness against the constraints it produced.

use std::{borrow::Cow, sync::Arc};

use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};

use crate::snarky::errors::SnarkyRuntimeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

/// The role of an allocated variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireKind {
    Input(Visibility),
    Output(Visibility),
    Internal,
}

/// An allocated variable and its value in a witness.
#[derive(Clone, Debug)]
pub struct Wire<F> {
    pub index: usize,
    pub kind: WireKind,
    pub value: F,
}

/// Satisfaction of one constraint.
#[derive(Clone, Debug)]
pub struct ConstraintReport {
    pub index: usize,
    pub label: &'static str,
    pub scope: Arc<str>,
    pub loc: Cow<'static, str>,
    pub error: Option<SnarkyRuntimeError>,
}

impl ConstraintReport {
    pub fn is_satisfied(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-constraint satisfaction and the complete wire assignment of a witness run.
#[derive(Clone, Debug)]
pub struct Evaluation<F> {
    pub constraints: Vec<ConstraintReport>,
    pub wires: Vec<Wire<F>>,
}

impl<F> Evaluation<F>
where
    F: PrimeField,
{
    pub fn is_satisfied(&self) -> bool {
        self.constraints.iter().all(ConstraintReport::is_satisfied)
    }

    pub fn unsatisfied(&self) -> impl Iterator<Item = &ConstraintReport> {
        self.constraints.iter().filter(|c| !c.is_satisfied())
    }

    fn values_of(&self, kind: WireKind) -> Vec<F> {
        self.wires
            .iter()
            .filter(|w| w.kind == kind)
            .map(|w| w.value)
            .collect()
    }

    /// Public inputs, in allocation order.
    pub fn public_inputs(&self) -> Vec<F> {
        self.values_of(WireKind::Input(Visibility::Public))
    }

    /// Public outputs, in allocation order.
    pub fn public_outputs(&self) -> Vec<F> {
        self.values_of(WireKind::Output(Visibility::Public))
    }
}

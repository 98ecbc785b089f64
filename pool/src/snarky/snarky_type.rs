use std::borrow::Cow;

use ark_ff::PrimeField;

use crate::snarky::{
    cvar::FieldVar,
    errors::SnarkyResult,
    runner::{RunState, WitnessGeneration},
};

/// A snarky type is a type that can be used in a circuit.
/// It references an equivalent "out-of-circuit" type that one can use outside of the circuit (for example, to set private and public inputs).
pub trait SnarkyType<F>: Sized
where
    F: PrimeField,
{
    /// The equivalent type outside of the circuit.
    type OutOfCircuit;

    /// The number of field elements that this type takes.
    const SIZE_IN_FIELD_ELEMENTS: usize;

    /// Returns the circuit variables (and auxiliary data) behind this type.
    fn to_cvars(&self) -> Vec<FieldVar<F>>;

    /// Creates a new instance of this type from the given circuit variables.
    fn from_cvars_unsafe(cvars: Vec<FieldVar<F>>) -> Self;

    /// Checks that the circuit variables behind this type are valid.
    /// For some definition of valid.
    /// For example, a Boolean value should be either 0 or 1.
    fn check(&self, cs: &mut RunState<F>, loc: Cow<'static, str>) -> SnarkyResult<()>;

    /// Serializes an instance of the out-of-circuit type into field elements.
    fn value_to_field_elements(value: &Self::OutOfCircuit) -> Vec<F>;

    /// Deserializes field elements into an instance of the out-of-circuit type.
    fn value_of_field_elements(fields: Vec<F>) -> Self::OutOfCircuit;

    /// Reads the out-of-circuit value behind this type.
    /// Only meaningful during witness generation.
    fn read<G>(&self, g: G) -> Self::OutOfCircuit
    where
        G: WitnessGeneration<F>,
    {
        let fields = self.to_cvars().iter().map(|var| g.read_var(var)).collect();
        Self::value_of_field_elements(fields)
    }
}

impl<F> SnarkyType<F> for ()
where
    F: PrimeField,
{
    type OutOfCircuit = ();

    const SIZE_IN_FIELD_ELEMENTS: usize = 0;

    fn to_cvars(&self) -> Vec<FieldVar<F>> {
        vec![]
    }

    fn from_cvars_unsafe(_cvars: Vec<FieldVar<F>>) -> Self {}

    fn check(&self, _cs: &mut RunState<F>, _loc: Cow<'static, str>) -> SnarkyResult<()> {
        Ok(())
    }

    fn value_to_field_elements(_value: &Self::OutOfCircuit) -> Vec<F> {
        vec![]
    }

    fn value_of_field_elements(_fields: Vec<F>) -> Self::OutOfCircuit {}
}

impl<F, T1, T2> SnarkyType<F> for (T1, T2)
where
    F: PrimeField,
    T1: SnarkyType<F>,
    T2: SnarkyType<F>,
{
    type OutOfCircuit = (T1::OutOfCircuit, T2::OutOfCircuit);

    const SIZE_IN_FIELD_ELEMENTS: usize = T1::SIZE_IN_FIELD_ELEMENTS + T2::SIZE_IN_FIELD_ELEMENTS;

    fn to_cvars(&self) -> Vec<FieldVar<F>> {
        let mut cvars = self.0.to_cvars();
        cvars.extend(self.1.to_cvars());
        cvars
    }

    fn from_cvars_unsafe(mut cvars: Vec<FieldVar<F>>) -> Self {
        assert_eq!(cvars.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        let cvars2 = cvars.split_off(T1::SIZE_IN_FIELD_ELEMENTS);
        (T1::from_cvars_unsafe(cvars), T2::from_cvars_unsafe(cvars2))
    }

    fn check(&self, cs: &mut RunState<F>, loc: Cow<'static, str>) -> SnarkyResult<()> {
        self.0.check(cs, loc.clone())?;
        self.1.check(cs, loc)
    }

    fn value_to_field_elements(value: &Self::OutOfCircuit) -> Vec<F> {
        let mut fields = T1::value_to_field_elements(&value.0);
        fields.extend(T2::value_to_field_elements(&value.1));
        fields
    }

    fn value_of_field_elements(mut fields: Vec<F>) -> Self::OutOfCircuit {
        assert_eq!(fields.len(), Self::SIZE_IN_FIELD_ELEMENTS);
        let fields2 = fields.split_off(T1::SIZE_IN_FIELD_ELEMENTS);
        (
            T1::value_of_field_elements(fields),
            T2::value_of_field_elements(fields2),
        )
    }
}

impl<F: PrimeField, const T: usize> SnarkyType<F> for [FieldVar<F>; T] {
    type OutOfCircuit = [F; T];

    const SIZE_IN_FIELD_ELEMENTS: usize = T;

    fn to_cvars(&self) -> Vec<FieldVar<F>> {
        self.to_vec()
    }

    fn from_cvars_unsafe(cvars: Vec<FieldVar<F>>) -> Self {
        assert_eq!(cvars.len(), T);
        std::array::from_fn(|i| cvars[i].clone())
    }

    fn check(&self, _cs: &mut RunState<F>, _loc: Cow<'static, str>) -> SnarkyResult<()> {
        Ok(())
    }

    fn value_to_field_elements(value: &Self::OutOfCircuit) -> Vec<F> {
        value.to_vec()
    }

    fn value_of_field_elements(fields: Vec<F>) -> Self::OutOfCircuit {
        assert_eq!(fields.len(), T);
        std::array::from_fn(|i| fields[i])
    }
}

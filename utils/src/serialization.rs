//! Serde adapters for field elements.
//!
//! Circuit inputs are exchanged as JSON documents where every field element
//! is written as a decimal string.

use crate::field_helpers::FieldHelpers;
use ark_ff::PrimeField;
use serde_with::{DeserializeAs, SerializeAs};

/// Serializes a field element as its canonical decimal string.
/// Use with `#[serde_as(as = "pool_utils::serialization::DecimalString")]`,
/// or `Vec<DecimalString>` for containers.
pub struct DecimalString;

impl<F> SerializeAs<F> for DecimalString
where
    F: PrimeField,
{
    fn serialize_as<S>(val: &F, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&val.to_decimal())
    }
}

impl<'de, F> DeserializeAs<'de, F> for DecimalString
where
    F: PrimeField,
{
    fn deserialize_as<D>(deserializer: D) -> Result<F, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        F::from_decimal(&s).map_err(serde::de::Error::custom)
    }
}

//! Field, bit, comparison, logic and selection gadgets over any prime field.

pub mod bits;
pub mod comparators;
pub mod logic;
pub mod mux;

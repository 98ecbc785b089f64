//! A small R1CS front end: circuits are written as Rust functions over
//! [cvar::FieldVar]s, and the same code either compiles the constraint
//! system or generates and evaluates a witness.
//!
//! See the `tests` modules of [runner] and the gadgets for examples.

pub mod boolean;
pub mod constraint;
pub mod cvar;
pub mod errors;
pub mod evaluation;
pub mod runner;
pub mod snarky_type;

/// A handy module that you can import the content of to easily use snarky.
pub mod prelude {
    use super::*;
    pub use crate::loc;
    pub use boolean::Boolean;
    pub use cvar::FieldVar;
    pub use errors::{SnarkyError, SnarkyResult};
    pub use runner::{Hint, RunState, WitnessGeneration};
    pub use snarky_type::SnarkyType;
}

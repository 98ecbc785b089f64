//! Helpers shared by the privacy pool crates: conversions between field
//! elements, big integers and little-endian bit strings, and serde adapters
//! for field elements.

pub mod field_helpers;
pub mod math;
pub mod serialization;

pub use field_helpers::{BigUintFieldHelpers, FieldHelpers};

/// Utils only for testing
pub mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Create a new test rng with a random seed, or the given one.
    /// The seed is printed so that a failing run can be reproduced.
    pub fn make_test_rng(seed: Option<[u8; 32]>) -> StdRng {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        eprintln!("Using seed {seed:?}");
        StdRng::from_seed(seed)
    }
}

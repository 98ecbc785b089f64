use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// A result type for Snarky errors.
pub type SnarkyResult<T> = std::result::Result<T, SnarkyError>;

/// A result type for Snarky runtime errors.
pub type SnarkyRuntimeResult<T> = std::result::Result<T, SnarkyRuntimeError>;

/// A result type for Snarky compilation errors.
pub type SnarkyCompileResult<T> = std::result::Result<T, SnarkyCompilationError>;

/// Snarky errors can come from either a compilation or runtime error.
#[derive(Debug, Clone, Error)]
pub enum SnarkyError {
    #[error("a compilation error occurred: {0}")]
    CompilationError(#[from] SnarkyCompilationError),

    #[error("a runtime error occurred: {0}")]
    RuntimeError(#[from] SnarkyRuntimeError),
}

/// Errors that can occur during compilation of a circuit.
#[derive(Debug, Clone, Error)]
pub enum SnarkyCompilationError {
    #[error("the constant constraint `{0}` does not hold: {1}")]
    ConstantAssertion(String, String),

    #[error("the hint created at {0} was not bound by any constraint")]
    UnconstrainedHint(String),

    #[error("{0} hint(s) were dropped without being constrained")]
    OpenHints(usize),

    #[error("invalid parameter for {gadget}: {reason}")]
    InvalidParameter {
        gadget: &'static str,
        reason: String,
    },
}

/// Errors that can occur during runtime (witness generation).
#[derive(Debug, Clone, Error)]
pub enum SnarkyRuntimeError {
    #[error("unsatisfied constraint: {0} is not a boolean (0 or 1)")]
    UnsatisfiedBooleanConstraint(String),

    #[error("unsatisfied constraint: {0} is not equal to {1}")]
    UnsatisfiedEqualConstraint(String, String),

    #[error("unsatisfied constraint: {0}^2 is not equal to {1}")]
    UnsatisfiedSquareConstraint(String, String),

    #[error("unsatisfied constraint: {0} * {1} is not equal to {2}")]
    UnsatisfiedR1CSConstraint(String, String, String),

    #[error("`{label}` in {scope} ({loc}): {reason}")]
    Unsatisfied {
        label: &'static str,
        scope: Arc<str>,
        loc: Cow<'static, str>,
        reason: Box<SnarkyRuntimeError>,
    },

    #[error("the hint at {loc} produced {actual} values, {expected} were expected")]
    HintLength {
        loc: String,
        expected: usize,
        actual: usize,
    },

    #[error("the runner holds no witness, it was created for compilation only")]
    MissingWitness,
}

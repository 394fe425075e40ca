//! Error taxonomy for the GA.
//!
//! Every variant is a caller-visible precondition failure with no internal
//! recovery: a run either completes (modulo randomness) or aborts on the
//! first invalid input.

use thiserror::Error;

/// Errors raised by GA operators and the runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// Individual and catalog lengths disagree in fitness evaluation.
    /// A caller bug, not a runtime condition to recover from.
    #[error("individual has {individual} genes but the catalog has {items} items")]
    InputShape { individual: usize, items: usize },

    /// A population was requested over an empty item catalog.
    #[error("cannot create a population from an empty item catalog")]
    EmptyCatalog,

    /// Crossover was given parents of unequal length.
    #[error("crossover parents must have equal length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Roulette selection was invoked on a population whose total
    /// fitness is zero; proportional sampling is undefined there.
    #[error("roulette selection requires a positive total fitness")]
    NonPositiveFitness,

    /// Configuration parameters are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

//! Error types for cmo-ta.
//!
//! Only caller contract violations are errors. Arithmetic irregularities
//! (warmup, zero denominator, NaN) are reported as `None` in the output.

use thiserror::Error;

/// The error type for cmo-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter is outside its accepted range.
    ///
    /// Raised synchronously before any computation starts, e.g. a lookback
    /// period of zero or an output buffer shorter than the input.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was provided.
        value: usize,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Convenience type alias for Results using the cmo-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;

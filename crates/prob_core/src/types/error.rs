//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: Errors from distribution construction and queries
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Distribution errors.
///
/// Raised only at well-defined input-validation points; floating-point edge
/// cases (NaN, infinities, extreme magnitudes) in query arguments propagate
/// through IEEE-754 arithmetic instead.
///
/// # Variants
/// - `InvalidParameter`: A distribution parameter outside its domain
/// - `InvalidInterval`: Interval lower bound above its upper bound
/// - `OutOfRange`: A probability outside `[0, 1]`
/// - `Solver`: The inverse-CDF root finder failed
///
/// # Examples
/// ```
/// use prob_core::types::DistributionError;
///
/// let err = DistributionError::InvalidParameter { name: "shape", value: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter: shape = -1 (must be strictly positive)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameter is not strictly positive.
    #[error("Invalid parameter: {name} = {value} (must be strictly positive)")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Interval bounds in the wrong order.
    #[error("Lower bound {lower} exceeds upper bound {upper}")]
    InvalidInterval {
        /// Lower endpoint supplied by the caller
        lower: f64,
        /// Upper endpoint supplied by the caller
        upper: f64,
    },

    /// Value outside its admissible range.
    #[error("Value {value} outside range [{lower}, {upper}]")]
    OutOfRange {
        /// The rejected value
        value: f64,
        /// Smallest admissible value
        lower: f64,
        /// Largest admissible value
        upper: f64,
    },

    /// Root finding failed while inverting the cumulative distribution.
    #[error("Inverse cumulative probability failed: {0}")]
    Solver(#[from] SolverError),
}

/// Solver-related errors.
///
/// # Variants
/// - `MaxEvaluationsExceeded`: Solver did not converge within the evaluation budget
/// - `NoBracket`: Function values at bracket endpoints have the same sign
///
/// # Examples
/// ```
/// use prob_core::types::SolverError;
///
/// let err = SolverError::MaxEvaluationsExceeded { evaluations: 100 };
/// assert!(format!("{}", err).contains("100 function evaluations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within the evaluation budget.
    #[error("Failed to converge after {evaluations} function evaluations")]
    MaxEvaluationsExceeded {
        /// Number of evaluations attempted
        evaluations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}

//! Core error types.
//!
//! # Re-exports
//!
//! For convenience, [`DistributionError`] and [`SolverError`] are re-exported at
//! this module level.

pub mod error;

pub use error::{DistributionError, SolverError};

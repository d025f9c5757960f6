//! Numerical building blocks shared by every distribution.
//!
//! - `special`: Error function, its complement, and a cancellation-safe difference
//! - `solvers`: Bracketing root finder for inverting cumulative distributions

pub mod solvers;
pub mod special;

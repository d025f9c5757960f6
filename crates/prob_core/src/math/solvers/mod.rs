//! Root-finding solvers for numerical computation.
//!
//! This module provides the bracketing root finder used to invert cumulative
//! distribution functions, where no derivative is available and the bracket
//! is known from the support bounds.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `absolute_accuracy`: Absolute accuracy on the root (default: 1e-6)
//! - `relative_accuracy`: Relative accuracy on the root (default: 1e-14)
//! - `function_value_accuracy`: Accept an endpoint whose `|f|` is below this (default: 1e-15)
//! - `max_evaluations`: Maximum function evaluations (default: 100)
//!
//! ## Examples
//!
//! ```
//! use prob_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Invert the exponential CDF 1 - e^(-x) at p = 0.5 (the median, ln 2)
//! let solver = BrentSolver::new(SolverConfig::with_absolute_accuracy(1e-12));
//! let f = |x: f64| 1.0 - (-x).exp() - 0.5;
//!
//! let median = solver.find_root(f, 0.0, 10.0).unwrap();
//! assert!((median - std::f64::consts::LN_2).abs() < 1e-10);
//! ```

mod brent;
mod config;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;

//! # prob_core: Numerical Foundation for Continuous Distributions
//!
//! ## Layer 1 (Foundation) Role
//!
//! prob_core is the bottom layer of the workspace, providing:
//! - Error-function primitives: `erf`, `erfc`, `erf_diff` (`math::special`)
//! - Bracketing root finder used for inverse CDFs (`math::solvers`)
//! - Capability traits for distributions and samplers (`traits`)
//! - Error types: `DistributionError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other prob_* crates, with minimal external dependencies:
//! - num-traits: Generic floating-point arithmetic for the solvers
//! - rand: The uniform random-bit source (`RngCore`) consumed by samplers
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use prob_core::math::special::{erf, erf_diff};
//! use prob_core::math::solvers::BrentSolver;
//!
//! assert_eq!(erf(0.0), 0.0);
//! assert!((erf_diff(-1.0, 1.0) - 2.0 * erf(1.0)).abs() < 1e-15);
//!
//! let solver: BrentSolver<f64> = BrentSolver::with_defaults();
//! let root = solver.find_root(|x| x * x - 2.0, 0.0, 2.0).unwrap();
//! # assert!((root - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for error and configuration types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

//! # prob_models (L2: Distribution Models)
//!
//! Concrete continuous distributions and their samplers, built on the
//! numerical primitives and traits of `prob_core`.
//!
//! This crate provides:
//! - Log-normal distribution with closed-form density, CDF and moments
//! - Serialisable parameter records for configuration files
//! - Marsaglia polar-method normal and log-normal samplers
//!
//! ## Design Principles
//!
//! - **Immutable `Copy` models** validated once at construction
//! - **Static dispatch** through `ContinuousDistribution`
//! - **Samplers own their random source** (`R: RngCore`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use prob_core::traits::ContinuousDistribution;
//! use prob_models::distributions::LogNormalDistribution;
//!
//! let dist = LogNormalDistribution::new(2.1, 1.4).unwrap();
//! let p = dist.probability(1.0, 100.0).unwrap();
//! assert!((p - 0.8964181745086766).abs() < 1e-12);
//!
//! let q = dist.inverse_cumulative_probability(0.5).unwrap();
//! assert!((q - 2.1_f64.exp()).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialise distributions through their parameter records

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod sampling;

//! Continuous probability distributions.
//!
//! This module provides:
//! - [`LogNormalDistribution`]: Log-normal distribution with closed-form
//!   density, CDF and moments
//! - [`LogNormalParams`]: Serialisable parameter record that converts into a
//!   validated distribution

mod lognormal;
mod params;

pub use lognormal::LogNormalDistribution;
pub use params::LogNormalParams;

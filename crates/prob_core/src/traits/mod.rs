//! Core traits for continuous distributions and their samplers.
//!
//! This module defines:
//! - [`ContinuousDistribution`]: Density, CDF, moments, support and sampling
//! - [`ContinuousSampler`]: Variate generation from an owned random source
//!
//! Both traits are designed for static dispatch. Do NOT reach for
//! `Box<dyn Trait>`: `ContinuousDistribution` carries a generic associated
//! sampler type and is not object safe.

pub mod distribution;
pub mod sampler;

pub use distribution::{
    cdf_difference_probability, inverse_by_bracketing, ContinuousDistribution,
    DEFAULT_INVERSE_ABSOLUTE_ACCURACY,
};
pub use sampler::ContinuousSampler;

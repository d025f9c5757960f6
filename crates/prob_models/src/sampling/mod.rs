//! Random variate generation.
//!
//! Samplers own their uniform random source (`R: RngCore`) and implement
//! [`ContinuousSampler`](prob_core::traits::ContinuousSampler).

mod marsaglia;

pub(crate) use marsaglia::polar_pair;
pub use marsaglia::{MarsagliaLogNormalSampler, MarsagliaNormalSampler};

//! Marsaglia polar-method samplers.
//!
//! The polar method draws a point uniformly in the square `[-1, 1)²`, rejects
//! it unless it falls strictly inside the unit disc (and off the origin), and
//! maps the accepted point to two independent standard-normal variates:
//!
//! ```text
//! r² = x² + y²,   α = √(-2 ln r² / r²),   z₀ = α·x,   z₁ = α·y
//! ```
//!
//! The acceptance rate is π/4, so on average 1.27 pairs of uniforms are
//! consumed per pair of normals.
//!
//! # Reference
//! - Marsaglia, G. & Bray, T. A. (1964). "A Convenient Method for Generating
//!   Normal Variables". SIAM Review, 6(3), 260-264.

use prob_core::traits::ContinuousSampler;
use rand::{Rng, RngCore};

/// Draws one polar-method pair of independent standard-normal variates.
#[inline]
pub(crate) fn polar_pair<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    loop {
        let x = 2.0 * rng.gen::<f64>() - 1.0;
        let y = 2.0 * rng.gen::<f64>() - 1.0;
        let r2 = x * x + y * y;

        if r2 < 1.0 && r2 > 0.0 {
            let alpha = (-2.0 * r2.ln() / r2).sqrt();
            return (alpha * x, alpha * y);
        }
    }
}

/// Standard-normal sampler using the Marsaglia polar method.
///
/// Each accepted point yields two variates; the second is cached and
/// returned by the next call, so the uniform source is consumed only on
/// every other draw.
///
/// # Examples
///
/// ```rust
/// use prob_core::traits::ContinuousSampler;
/// use prob_models::sampling::MarsagliaNormalSampler;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut sampler = MarsagliaNormalSampler::new(StdRng::seed_from_u64(42));
/// let z = sampler.sample();
/// assert!(z.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct MarsagliaNormalSampler<R> {
    /// Uniform random source.
    rng: R,
    /// Second variate of the last accepted pair.
    next_gaussian: Option<f64>,
}

impl<R: RngCore> MarsagliaNormalSampler<R> {
    /// Creates a sampler that owns `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            next_gaussian: None,
        }
    }

    /// Releases the random source, discarding any cached variate.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> ContinuousSampler for MarsagliaNormalSampler<R> {
    fn sample(&mut self) -> f64 {
        if let Some(z) = self.next_gaussian.take() {
            return z;
        }
        let (z0, z1) = polar_pair(&mut self.rng);
        self.next_gaussian = Some(z1);
        z0
    }
}

/// Log-normal sampler: `exp(scale + shape · z)` with `z` from
/// [`MarsagliaNormalSampler`].
///
/// Parameters are taken as given; validation is the job of the
/// distribution that creates the sampler.
///
/// # Examples
///
/// ```rust
/// use prob_core::traits::ContinuousSampler;
/// use prob_models::sampling::MarsagliaLogNormalSampler;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut sampler = MarsagliaLogNormalSampler::new(StdRng::seed_from_u64(7), 0.0, 1.0);
/// assert!(sampler.samples(100).iter().all(|&x| x > 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct MarsagliaLogNormalSampler<R> {
    scale: f64,
    shape: f64,
    gaussian: MarsagliaNormalSampler<R>,
}

impl<R: RngCore> MarsagliaLogNormalSampler<R> {
    /// Creates a sampler bound to `(scale, shape)` that owns `rng`.
    pub fn new(rng: R, scale: f64, shape: f64) -> Self {
        Self {
            scale,
            shape,
            gaussian: MarsagliaNormalSampler::new(rng),
        }
    }

    /// Scale (mean of the logarithm) this sampler draws with.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape (standard deviation of the logarithm) this sampler draws with.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl<R: RngCore> ContinuousSampler for MarsagliaLogNormalSampler<R> {
    #[inline]
    fn sample(&mut self) -> f64 {
        (self.scale + self.shape * self.gaussian.sample()).exp()
    }
}

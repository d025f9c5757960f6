//! Capability trait for univariate continuous distributions.
//!
//! Generic behaviour that every distribution can fall back on lives in
//! default methods and free functions here:
//! - [`cdf_difference_probability`]: interval probability as a CDF difference
//! - [`inverse_by_bracketing`]: inverse CDF via Brent root finding

use rand::RngCore;

use super::ContinuousSampler;
use crate::math::solvers::{BrentSolver, SolverConfig};
use crate::types::DistributionError;

/// Default absolute accuracy of the inverse cumulative probability.
pub const DEFAULT_INVERSE_ABSOLUTE_ACCURACY: f64 = 1e-9;

/// Evaluation budget for the inverse-CDF root finder.
const INVERSE_MAX_EVALUATIONS: usize = 1_000;

/// A univariate continuous probability distribution.
///
/// Designed for static dispatch: the sampler type is an associated type
/// generic over the random source, so the trait is not object safe.
///
/// Implementors supply density, CDF, moments and support; interval
/// probability, log-density and the inverse CDF have generic defaults.
pub trait ContinuousDistribution {
    /// Sampler produced by [`create_sampler`](Self::create_sampler).
    type Sampler<R: RngCore>: ContinuousSampler;

    /// Probability density at `x`.
    fn density(&self, x: f64) -> f64;

    /// Natural logarithm of the density at `x`.
    ///
    /// The default takes the logarithm of [`density`](Self::density);
    /// implementors should override it when a direct form avoids underflow.
    fn log_density(&self, x: f64) -> f64 {
        self.density(x).ln()
    }

    /// `P(X <= x)`.
    fn cumulative_probability(&self, x: f64) -> f64;

    /// `P(x0 < X <= x1)`.
    ///
    /// # Errors
    /// `DistributionError::InvalidInterval` if `x0 > x1`.
    fn probability(&self, x0: f64, x1: f64) -> Result<f64, DistributionError> {
        cdf_difference_probability(self, x0, x1)
    }

    /// Smallest `x` with `P(X <= x) >= p`.
    ///
    /// # Errors
    /// - `DistributionError::OutOfRange` if `p` is not in `[0, 1]`
    /// - `DistributionError::Solver` if the root finder fails
    fn inverse_cumulative_probability(&self, p: f64) -> Result<f64, DistributionError> {
        inverse_by_bracketing(self, p)
    }

    /// Absolute accuracy used by the inverse cumulative probability.
    fn inverse_accuracy(&self) -> f64 {
        DEFAULT_INVERSE_ABSOLUTE_ACCURACY
    }

    /// Mean of the distribution.
    fn mean(&self) -> f64;

    /// Variance of the distribution.
    fn variance(&self) -> f64;

    /// Lower bound of the support.
    fn support_lower_bound(&self) -> f64;

    /// Upper bound of the support.
    fn support_upper_bound(&self) -> f64;

    /// Whether the support is a single interval.
    fn is_support_connected(&self) -> bool;

    /// Creates a sampler that owns `rng` as its uniform random source.
    fn create_sampler<R: RngCore>(&self, rng: R) -> Self::Sampler<R>;
}

/// Interval probability as `cdf(x1) - cdf(x0)`.
///
/// The ordering check happens before any CDF evaluation.
///
/// # Errors
/// `DistributionError::InvalidInterval` if `x0 > x1`.
pub fn cdf_difference_probability<D>(dist: &D, x0: f64, x1: f64) -> Result<f64, DistributionError>
where
    D: ContinuousDistribution + ?Sized,
{
    if x0 > x1 {
        return Err(DistributionError::InvalidInterval {
            lower: x0,
            upper: x1,
        });
    }
    Ok(dist.cumulative_probability(x1) - dist.cumulative_probability(x0))
}

/// Inverts the CDF by bracketing the quantile and solving with Brent's method.
///
/// Infinite support bounds are replaced with the one-sided Chebyshev
/// (Cantelli) bound `mean ± sd·√(p/(1-p))` when the moments are finite, and
/// otherwise found by doubling from `±1` until the CDF crosses `p`.
///
/// # Errors
/// - `DistributionError::OutOfRange` if `p` is not in `[0, 1]` (or NaN)
/// - `DistributionError::Solver` if the root finder fails
pub fn inverse_by_bracketing<D>(dist: &D, p: f64) -> Result<f64, DistributionError>
where
    D: ContinuousDistribution + ?Sized,
{
    if !(0.0..=1.0).contains(&p) {
        return Err(DistributionError::OutOfRange {
            value: p,
            lower: 0.0,
            upper: 1.0,
        });
    }

    let mut lower = dist.support_lower_bound();
    if p == 0.0 {
        return Ok(lower);
    }
    let mut upper = dist.support_upper_bound();
    if p == 1.0 {
        return Ok(upper);
    }

    let mu = dist.mean();
    let sigma = dist.variance().sqrt();
    let chebyshev_applies = mu.is_finite() && sigma.is_finite();

    if lower == f64::NEG_INFINITY {
        lower = if chebyshev_applies {
            mu - sigma * ((1.0 - p) / p).sqrt()
        } else {
            f64::NAN
        };
        if !lower.is_finite() {
            lower = -1.0;
            while dist.cumulative_probability(lower) >= p {
                lower *= 2.0;
            }
        }
    }

    if upper == f64::INFINITY {
        upper = if chebyshev_applies {
            mu + sigma * (p / (1.0 - p)).sqrt()
        } else {
            f64::NAN
        };
        if !upper.is_finite() {
            upper = 1.0;
            while dist.cumulative_probability(upper) < p {
                upper *= 2.0;
            }
        }
    }

    let config = SolverConfig {
        max_evaluations: INVERSE_MAX_EVALUATIONS,
        ..SolverConfig::with_absolute_accuracy(dist.inverse_accuracy())
    };
    let root = BrentSolver::new(config)
        .find_root(|x| dist.cumulative_probability(x) - p, lower, upper)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Exponential distribution exercising the generic defaults.
    struct Exponential {
        rate: f64,
    }

    struct ExponentialSampler<R> {
        rate: f64,
        rng: R,
    }

    impl<R: RngCore> ContinuousSampler for ExponentialSampler<R> {
        fn sample(&mut self) -> f64 {
            let u: f64 = self.rng.gen();
            -(1.0 - u).ln() / self.rate
        }
    }

    impl ContinuousDistribution for Exponential {
        type Sampler<R: RngCore> = ExponentialSampler<R>;

        fn density(&self, x: f64) -> f64 {
            if x < 0.0 {
                0.0
            } else {
                self.rate * (-self.rate * x).exp()
            }
        }

        fn cumulative_probability(&self, x: f64) -> f64 {
            if x <= 0.0 {
                0.0
            } else {
                -(-self.rate * x).exp_m1()
            }
        }

        fn mean(&self) -> f64 {
            1.0 / self.rate
        }

        fn variance(&self) -> f64 {
            1.0 / (self.rate * self.rate)
        }

        fn support_lower_bound(&self) -> f64 {
            0.0
        }

        fn support_upper_bound(&self) -> f64 {
            f64::INFINITY
        }

        fn is_support_connected(&self) -> bool {
            true
        }

        fn create_sampler<R: RngCore>(&self, rng: R) -> Self::Sampler<R> {
            ExponentialSampler {
                rate: self.rate,
                rng,
            }
        }
    }

    /// Standard logistic distribution, support over the whole real line.
    struct Logistic;

    impl ContinuousDistribution for Logistic {
        type Sampler<R: RngCore> = ExponentialSampler<R>;

        fn density(&self, x: f64) -> f64 {
            let e = (-x).exp();
            e / ((1.0 + e) * (1.0 + e))
        }

        fn cumulative_probability(&self, x: f64) -> f64 {
            1.0 / (1.0 + (-x).exp())
        }

        fn mean(&self) -> f64 {
            0.0
        }

        fn variance(&self) -> f64 {
            std::f64::consts::PI * std::f64::consts::PI / 3.0
        }

        fn support_lower_bound(&self) -> f64 {
            f64::NEG_INFINITY
        }

        fn support_upper_bound(&self) -> f64 {
            f64::INFINITY
        }

        fn is_support_connected(&self) -> bool {
            true
        }

        fn create_sampler<R: RngCore>(&self, rng: R) -> Self::Sampler<R> {
            ExponentialSampler { rate: 1.0, rng }
        }
    }

    #[test]
    fn test_default_probability_is_cdf_difference() {
        let dist = Exponential { rate: 2.0 };
        let p = dist.probability(0.5, 1.5).unwrap();
        let expected = (-1.0_f64).exp() - (-3.0_f64).exp();
        assert_relative_eq!(p, expected, max_relative = 1e-14);
    }

    #[test]
    fn test_default_probability_rejects_reversed_interval() {
        let dist = Exponential { rate: 1.0 };
        let err = dist.probability(2.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidInterval {
                lower: 2.0,
                upper: 1.0
            }
        );
    }

    #[test]
    fn test_default_probability_empty_interval() {
        let dist = Exponential { rate: 1.0 };
        assert_eq!(dist.probability(0.7, 0.7).unwrap(), 0.0);
    }

    #[test]
    fn test_default_log_density() {
        let dist = Exponential { rate: 3.0 };
        assert_relative_eq!(dist.log_density(0.5), 3.0_f64.ln() - 1.5, max_relative = 1e-14);
        assert_eq!(dist.log_density(-1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_default_inverse_accuracy() {
        let dist = Exponential { rate: 1.0 };
        assert_eq!(dist.inverse_accuracy(), DEFAULT_INVERSE_ABSOLUTE_ACCURACY);
    }

    #[test]
    fn test_inverse_endpoints() {
        let dist = Exponential { rate: 1.0 };
        assert_eq!(dist.inverse_cumulative_probability(0.0).unwrap(), 0.0);
        assert_eq!(
            dist.inverse_cumulative_probability(1.0).unwrap(),
            f64::INFINITY
        );
    }

    #[test]
    fn test_inverse_rejects_out_of_range() {
        let dist = Exponential { rate: 1.0 };
        for p in [-0.1, 1.1, f64::NAN] {
            match dist.inverse_cumulative_probability(p).unwrap_err() {
                DistributionError::OutOfRange { lower, upper, .. } => {
                    assert_eq!(lower, 0.0);
                    assert_eq!(upper, 1.0);
                }
                other => panic!("Expected OutOfRange error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_inverse_matches_closed_form() {
        let dist = Exponential { rate: 0.5 };
        for p in [1e-6, 0.01, 0.25, 0.5, 0.9, 0.999_999] {
            let x = dist.inverse_cumulative_probability(p).unwrap();
            let expected = -(-p).ln_1p() / 0.5;
            assert!(
                (x - expected).abs() < 1e-8,
                "p = {}: got {}, expected {}",
                p,
                x,
                expected
            );
        }
    }

    #[test]
    fn test_inverse_on_whole_real_line() {
        let dist = Logistic;
        for p in [0.001, 0.3, 0.5, 0.8, 0.999] {
            let x = dist.inverse_cumulative_probability(p).unwrap();
            let expected = (p / (1.0 - p)).ln();
            assert!((x - expected).abs() < 1e-8, "p = {}", p);
        }
    }

    #[test]
    fn test_inverse_falls_back_to_doubling_without_moments() {
        struct HeavyTail;

        // Standard Cauchy: no finite mean or variance
        impl ContinuousDistribution for HeavyTail {
            type Sampler<R: RngCore> = ExponentialSampler<R>;

            fn density(&self, x: f64) -> f64 {
                1.0 / (std::f64::consts::PI * (1.0 + x * x))
            }

            fn cumulative_probability(&self, x: f64) -> f64 {
                0.5 + x.atan() / std::f64::consts::PI
            }

            fn mean(&self) -> f64 {
                f64::NAN
            }

            fn variance(&self) -> f64 {
                f64::INFINITY
            }

            fn support_lower_bound(&self) -> f64 {
                f64::NEG_INFINITY
            }

            fn support_upper_bound(&self) -> f64 {
                f64::INFINITY
            }

            fn is_support_connected(&self) -> bool {
                true
            }

            fn create_sampler<R: RngCore>(&self, rng: R) -> Self::Sampler<R> {
                ExponentialSampler { rate: 1.0, rng }
            }
        }

        let dist = HeavyTail;
        for p in [0.01, 0.5, 0.99] {
            let x = dist.inverse_cumulative_probability(p).unwrap();
            let expected = (std::f64::consts::PI * (p - 0.5)).tan();
            assert!((x - expected).abs() < 1e-7, "p = {}", p);
        }
    }

    #[test]
    fn test_sampler_through_trait() {
        let dist = Exponential { rate: 4.0 };
        let mut sampler = dist.create_sampler(StdRng::seed_from_u64(7));
        let draws = sampler.samples(20_000);
        assert!(draws.iter().all(|&x| x >= 0.0));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - 0.25).abs() < 0.01, "sample mean {}", mean);
    }
}

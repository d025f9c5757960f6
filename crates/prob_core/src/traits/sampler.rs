//! Sampler trait for continuous random variates.

/// Generator of independent variates from a continuous distribution.
///
/// Implementors own their uniform random source, so drawing requires
/// `&mut self`.
///
/// # Examples
/// ```
/// use prob_core::traits::ContinuousSampler;
///
/// struct Constant(f64);
///
/// impl ContinuousSampler for Constant {
///     fn sample(&mut self) -> f64 {
///         self.0
///     }
/// }
///
/// let mut sampler = Constant(2.5);
/// assert_eq!(sampler.samples(3), vec![2.5, 2.5, 2.5]);
/// ```
pub trait ContinuousSampler {
    /// Draws one variate.
    fn sample(&mut self) -> f64;

    /// Draws `n` variates.
    fn samples(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        next: f64,
    }

    impl ContinuousSampler for Counter {
        fn sample(&mut self) -> f64 {
            self.next += 1.0;
            self.next
        }
    }

    #[test]
    fn test_samples_draws_in_order() {
        let mut sampler = Counter { next: 0.0 };
        assert_eq!(sampler.samples(4), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(sampler.sample(), 5.0);
    }

    #[test]
    fn test_samples_zero_is_empty() {
        let mut sampler = Counter { next: 0.0 };
        assert!(sampler.samples(0).is_empty());
        assert_eq!(sampler.sample(), 1.0);
    }
}

//! Solver configuration types.

use num_traits::Float;

/// Converts an `f64` literal into the solver's float type.
#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Configuration for root-finding algorithms.
///
/// Convergence is declared when the half-width of the bracket falls below
/// `2 * relative_accuracy * |x| + absolute_accuracy`, so the absolute term
/// dominates near zero and the relative term for large roots.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for accuracies (e.g., `f64`)
///
/// # Example
///
/// ```
/// use prob_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.absolute_accuracy, 1e-6);
/// assert_eq!(config.max_evaluations, 100);
///
/// // Accuracy used when inverting a distribution
/// let inverse = SolverConfig::with_absolute_accuracy(1e-9);
/// assert_eq!(inverse.absolute_accuracy, 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Absolute accuracy on the root.
    pub absolute_accuracy: T,

    /// Relative accuracy on the root, scaled by the current estimate.
    pub relative_accuracy: T,

    /// An endpoint whose `|f|` is at most this value is returned directly.
    pub function_value_accuracy: T,

    /// Maximum number of function evaluations before giving up.
    ///
    /// If the solver doesn't converge within this limit,
    /// it returns `SolverError::MaxEvaluationsExceeded`.
    pub max_evaluations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `absolute_accuracy`: 1e-6
    /// - `relative_accuracy`: 1e-14
    /// - `function_value_accuracy`: 1e-15
    /// - `max_evaluations`: 100
    fn default() -> Self {
        Self {
            absolute_accuracy: constant(1e-6),
            relative_accuracy: constant(1e-14),
            function_value_accuracy: constant(1e-15),
            max_evaluations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `absolute_accuracy` - Absolute accuracy (must be positive)
    /// * `relative_accuracy` - Relative accuracy (must be positive)
    /// * `function_value_accuracy` - Function value accuracy (must be non-negative)
    /// * `max_evaluations` - Maximum evaluation count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if an accuracy is out of range or `max_evaluations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use prob_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 1e-15, 0.0, 200);
    /// assert_eq!(config.max_evaluations, 200);
    /// ```
    pub fn new(
        absolute_accuracy: T,
        relative_accuracy: T,
        function_value_accuracy: T,
        max_evaluations: usize,
    ) -> Self {
        assert!(
            absolute_accuracy > T::zero(),
            "absolute_accuracy must be positive"
        );
        assert!(
            relative_accuracy > T::zero(),
            "relative_accuracy must be positive"
        );
        assert!(
            function_value_accuracy >= T::zero(),
            "function_value_accuracy must be non-negative"
        );
        assert!(max_evaluations > 0, "max_evaluations must be > 0");
        Self {
            absolute_accuracy,
            relative_accuracy,
            function_value_accuracy,
            max_evaluations,
        }
    }

    /// Default configuration with the given absolute accuracy.
    ///
    /// This is how distributions configure the solver behind their inverse
    /// cumulative probability.
    pub fn with_absolute_accuracy(absolute_accuracy: T) -> Self {
        Self {
            absolute_accuracy,
            ..Self::default()
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter absolute accuracy (1e-14) and more evaluations (500).
    pub fn high_precision() -> Self {
        Self {
            absolute_accuracy: constant(1e-14),
            max_evaluations: 500,
            ..Self::default()
        }
    }
}

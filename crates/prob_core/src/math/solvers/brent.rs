//! Brent's method root-finding solver.

use super::config::constant;
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Guaranteed to
/// converge for continuous functions with a valid bracket.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Algorithm
///
/// Brent's method intelligently switches between:
/// - **Bisection**: Guaranteed progress, slower convergence
/// - **Secant method**: Used while only two distinct points are known
/// - **Inverse quadratic interpolation**: Faster when three points are known
///
/// An interpolation step is rejected in favour of bisection when it would
/// leave the bracket or fails to shrink it fast enough.
///
/// # Example
///
/// ```
/// use prob_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::with_absolute_accuracy(1e-12));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket [lo, hi].
    ///
    /// Requires that `f(lo)` and `f(hi)` have opposite signs, unless one of
    /// them is already within `function_value_accuracy` of zero, in which
    /// case that endpoint is returned.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `lo` - Left bracket endpoint
    /// * `hi` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root to within the configured accuracy
    /// * `Err(SolverError::NoBracket)` - `f(lo)` and `f(hi)` have same sign
    /// * `Err(SolverError::MaxEvaluationsExceeded)` - Evaluation budget exhausted
    ///
    /// # Example
    ///
    /// ```
    /// use prob_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::with_absolute_accuracy(1e-12));
    ///
    /// // Solve x² - 2 = 0 in bracket [0, 2]
    /// let f = |x: f64| x * x - 2.0;
    ///
    /// let root = solver.find_root(f, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn find_root<F>(&self, f: F, lo: T, hi: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let mut evaluations = 0usize;
        let mut eval = |x: T| -> Result<T, SolverError> {
            if evaluations >= self.config.max_evaluations {
                return Err(SolverError::MaxEvaluationsExceeded {
                    evaluations: self.config.max_evaluations,
                });
            }
            evaluations += 1;
            Ok(f(x))
        };

        let f_lo = eval(lo)?;
        if f_lo.abs() <= self.config.function_value_accuracy {
            return Ok(lo);
        }
        let f_hi = eval(hi)?;
        if f_hi.abs() <= self.config.function_value_accuracy {
            return Ok(hi);
        }

        if f_lo * f_hi > zero {
            return Err(SolverError::NoBracket {
                a: lo.to_f64().unwrap_or(f64::NAN),
                b: hi.to_f64().unwrap_or(f64::NAN),
            });
        }

        let half: T = constant(0.5);
        let one_and_half: T = constant(1.5);
        let two: T = constant(2.0);

        let mut a = lo;
        let mut fa = f_lo;
        let mut b = hi;
        let mut fb = f_hi;
        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;

        loop {
            // Keep b as the best estimate: |f(b)| <= |f(c)|
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol =
                two * self.config.relative_accuracy * b.abs() + self.config.absolute_accuracy;
            let m = half * (c - b);

            if m.abs() <= tol || fb == zero {
                return Ok(b);
            }

            if e.abs() < tol || fa.abs() <= fb.abs() {
                // Bisection
                d = m;
                e = d;
            } else {
                let mut s = fb / fa;
                let mut p;
                let mut q;
                if a == c {
                    // Secant
                    p = two * m * s;
                    q = T::one() - s;
                } else {
                    // Inverse quadratic interpolation
                    q = fa / fc;
                    let r = fb / fc;
                    p = s * (two * m * q * (q - r) - (b - a) * (r - T::one()));
                    q = (q - T::one()) * (r - T::one()) * (s - T::one());
                }
                if p > zero {
                    q = -q;
                } else {
                    p = -p;
                }
                s = e;
                e = d;
                if p >= one_and_half * m * q - (tol * q).abs() || p >= (half * s * q).abs() {
                    // Interpolation step rejected
                    d = m;
                    e = d;
                } else {
                    d = p / q;
                }
            }

            a = b;
            fa = fb;

            if d.abs() > tol {
                b = b + d;
            } else if m > zero {
                b = b + tol;
            } else {
                b = b - tol;
            }
            fb = eval(b)?;

            // Keep the root bracketed between b and c
            if (fb > zero && fc > zero) || (fb <= zero && fc <= zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

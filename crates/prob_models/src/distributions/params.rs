//! Serialisable parameter set for the log-normal distribution.

use prob_core::traits::DEFAULT_INVERSE_ABSOLUTE_ACCURACY;
use prob_core::types::DistributionError;

use super::LogNormalDistribution;

/// Unvalidated log-normal parameters.
///
/// This is the configuration form of [`LogNormalDistribution`]: missing
/// fields fall back to the standard log-normal, and conversion into a
/// distribution runs the usual constructor checks.
///
/// # Examples
///
/// ```rust
/// use prob_models::distributions::{LogNormalDistribution, LogNormalParams};
///
/// let params = LogNormalParams { scale: 1.0, shape: 0.5, ..Default::default() };
/// let dist = LogNormalDistribution::try_from(params).unwrap();
/// assert_eq!(dist.shape(), 0.5);
///
/// let bad = LogNormalParams { shape: 0.0, ..Default::default() };
/// assert!(LogNormalDistribution::try_from(bad).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogNormalParams {
    /// Mean of the natural logarithm.
    pub scale: f64,
    /// Standard deviation of the natural logarithm.
    pub shape: f64,
    /// Absolute accuracy of the inverse cumulative probability.
    pub inverse_accuracy: f64,
}

impl Default for LogNormalParams {
    fn default() -> Self {
        Self {
            scale: 0.0,
            shape: 1.0,
            inverse_accuracy: DEFAULT_INVERSE_ABSOLUTE_ACCURACY,
        }
    }
}

impl TryFrom<LogNormalParams> for LogNormalDistribution {
    type Error = DistributionError;

    fn try_from(params: LogNormalParams) -> Result<Self, Self::Error> {
        LogNormalDistribution::with_inverse_accuracy(
            params.scale,
            params.shape,
            params.inverse_accuracy,
        )
    }
}

impl From<LogNormalDistribution> for LogNormalParams {
    fn from(dist: LogNormalDistribution) -> Self {
        dist.params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = LogNormalParams::default();
        assert_eq!(params.scale, 0.0);
        assert_eq!(params.shape, 1.0);
        assert_eq!(params.inverse_accuracy, 1e-9);
    }

    #[test]
    fn test_try_from_valid() {
        let params = LogNormalParams {
            scale: -2.0,
            shape: 3.0,
            inverse_accuracy: 1e-6,
        };
        let dist = LogNormalDistribution::try_from(params).unwrap();
        assert_eq!(dist.scale(), -2.0);
        assert_eq!(dist.shape(), 3.0);
        assert_eq!(dist.inverse_accuracy(), 1e-6);
    }

    #[test]
    fn test_try_from_invalid_shape() {
        let params = LogNormalParams {
            shape: -1.0,
            ..Default::default()
        };
        let err = LogNormalDistribution::try_from(params).unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidParameter {
                name: "shape",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_params_from_distribution() {
        let dist = LogNormalDistribution::new(0.25, 0.75).unwrap();
        let params = LogNormalParams::from(dist);
        assert_eq!(
            params,
            LogNormalParams {
                scale: 0.25,
                shape: 0.75,
                inverse_accuracy: 1e-9
            }
        );
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_params_serde_roundtrip() {
            let params = LogNormalParams {
                scale: 1.5,
                shape: 0.3,
                inverse_accuracy: 1e-7,
            };
            let json = serde_json::to_string(&params).unwrap();
            let parsed: LogNormalParams = serde_json::from_str(&json).unwrap();
            assert_eq!(params, parsed);
        }

        #[test]
        fn test_params_missing_fields_use_defaults() {
            let parsed: LogNormalParams = serde_json::from_str(r#"{"scale": 2.0}"#).unwrap();
            assert_eq!(parsed.scale, 2.0);
            assert_eq!(parsed.shape, 1.0);
            assert_eq!(parsed.inverse_accuracy, 1e-9);
        }
    }
}

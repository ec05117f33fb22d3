//! Basic statistics over a list of numbers.

use serde::Serialize;
use thiserror::Error;

/// Errors from [`Stats::from_values`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// No values were supplied.
    #[error("Request body must contain a non-empty JSON array of numbers.")]
    Empty,

    /// The sum does not fit in an `f64`.
    #[error("Sum of the numbers exceeds the representable range.")]
    Overflow,
}

/// Summary of a non-empty list of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    /// Computes count, sum, average, min and max in a single pass.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Empty`] when `values` is empty and
    /// [`StatsError::Overflow`] when the sum is not finite.
    pub fn from_values(values: &[f64]) -> Result<Self, StatsError> {
        let (&first, _) = values.split_first().ok_or(StatsError::Empty)?;

        let (sum, min, max) = values.iter().fold(
            (0.0, first, first),
            |(sum, min, max): (f64, f64, f64), &v| (sum + v, min.min(v), max.max(v)),
        );
        if !sum.is_finite() {
            return Err(StatsError::Overflow);
        }
        let count = values.len();

        Ok(Self {
            count,
            sum,
            average: sum / count as f64,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats() {
        let stats = Stats::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(
            stats,
            Stats {
                count: 4,
                sum: 10.0,
                average: 2.5,
                min: 1.0,
                max: 4.0,
            }
        );
    }

    #[test]
    fn test_single_value() {
        let stats = Stats::from_values(&[-3.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, -3.5);
        assert_eq!(stats.average, -3.5);
        assert_eq!(stats.min, -3.5);
        assert_eq!(stats.max, -3.5);
    }

    #[test]
    fn test_unordered_with_negatives() {
        let stats = Stats::from_values(&[5.0, -2.0, 7.0, 0.0]).unwrap();
        assert_eq!(stats.min, -2.0);
        assert_eq!(stats.max, 7.0);
        assert_eq!(stats.average, 2.5);
    }

    #[test]
    fn test_sum_overflow_is_rejected() {
        assert_eq!(
            Stats::from_values(&[1e308, 1e308]),
            Err(StatsError::Overflow)
        );
        assert_eq!(
            Stats::from_values(&[f64::MAX, -f64::MAX]).unwrap().sum,
            0.0
        );
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(Stats::from_values(&[]), Err(StatsError::Empty));
    }
}

//! Iterative Fibonacci with a pre-addition overflow check.

use thiserror::Error;

/// Largest index whose Fibonacci number fits in an `i64`.
pub const MAX_INDEX: i64 = 92;

/// Why a Fibonacci number could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibonacciError {
    /// The requested index was negative.
    #[error("Input 'n' cannot be negative.")]
    InvalidInput {
        /// The rejected index.
        n: i64,
    },

    /// The next term would not fit in an `i64`.
    #[error("Fibonacci number exceeds i64::MAX for n={n} at step {step}")]
    Overflow {
        /// The requested index.
        n: i64,
        /// The index whose term could not be represented.
        step: i64,
    },
}

/// Computes F(n) with F(0) = 0 and F(1) = 1.
///
/// # Errors
///
/// Returns [`FibonacciError::InvalidInput`] for negative `n` and
/// [`FibonacciError::Overflow`] once a term would exceed `i64::MAX`
/// (any `n > MAX_INDEX`).
pub fn compute(n: i64) -> Result<i64, FibonacciError> {
    if n < 0 {
        return Err(FibonacciError::InvalidInput { n });
    }
    if n < 2 {
        return Ok(n);
    }

    let (mut prev, mut curr) = (0i64, 1i64);
    for step in 2..=n {
        if prev > i64::MAX - curr {
            return Err(FibonacciError::Overflow { n, step });
        }
        (prev, curr) = (curr, prev + curr);
    }
    Ok(curr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(compute(0), Ok(0));
        assert_eq!(compute(1), Ok(1));
        assert_eq!(compute(2), Ok(1));
    }

    #[test]
    fn test_tenth_term() {
        assert_eq!(compute(10), Ok(55));
    }

    #[test]
    fn test_recurrence_holds_up_to_max_index() {
        for n in 2..=MAX_INDEX {
            let expected = compute(n - 1).unwrap() + compute(n - 2).unwrap();
            assert_eq!(compute(n), Ok(expected), "F({n})");
        }
    }

    #[test]
    fn test_max_index() {
        assert_eq!(compute(MAX_INDEX), Ok(7_540_113_804_746_346_429));
    }

    #[test]
    fn test_negative_is_invalid() {
        let err = compute(-1).unwrap_err();
        assert_eq!(err, FibonacciError::InvalidInput { n: -1 });
        assert_eq!(err.to_string(), "Input 'n' cannot be negative.");
        assert!(matches!(compute(i64::MIN), Err(FibonacciError::InvalidInput { .. })));
    }

    #[test]
    fn test_overflow_past_max_index() {
        assert_eq!(
            compute(93),
            Err(FibonacciError::Overflow { n: 93, step: 93 })
        );
    }

    #[test]
    fn test_overflow_stops_early_for_huge_index() {
        let err = compute(i64::MAX).unwrap_err();
        assert_eq!(err, FibonacciError::Overflow { n: i64::MAX, step: 93 });
        assert!(err.to_string().contains("step 93"));
    }

    #[test]
    fn test_idempotent() {
        for n in [-5, 0, 1, 10, 50, 92, 93, 1000] {
            assert_eq!(compute(n), compute(n));
        }
    }
}

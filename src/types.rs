//! Core types for the π approximation.

use core::fmt;

use crate::machine::PiFloat;

/// Result of a Newton square-root computation, returned by
/// [`newton_sqrt_raw`](crate::newton_sqrt_raw).
///
/// [`newton_sqrt`](crate::newton_sqrt) does not expose this type; it
/// returns only the computed value and discards the iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtResult<T: PiFloat> {
    /// Final guess `g`, the first one within the accuracy threshold of its
    /// predecessor.
    pub value: T,
    /// Number of Newton transitions performed. At least 1 whenever the
    /// accuracy threshold is at most 1; 0 for coarser thresholds, which
    /// accept the starting guess.
    pub iterations: usize,
}

/// Intermediate and final values of the π pipeline, returned by
/// [`approximate_pi_raw`](crate::approximate_pi_raw).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiApproximation<T: PiFloat> {
    /// Partial sum Σ 1/n² over the configured number of terms (≈ π²/6).
    pub basel_sum: T,
    /// `6 * basel_sum` (≈ π²), the input to the square root.
    pub pi_squared: T,
    /// Square root of `pi_squared` (≈ π).
    pub pi: T,
    /// Newton iterations spent on the square root.
    pub sqrt_iterations: usize,
}

/// Error type for the series and square-root routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Invalid input (e.g., zero terms, x <= 0, non-finite accuracy).
    InvalidInput,
    /// Newton iteration hit its ceiling before meeting the accuracy threshold.
    ConvergenceFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput => {
                write!(f, "invalid input: check terms, x and accuracy constraints")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: iteration limit reached before accuracy threshold"
                )
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_lowercase_and_prefixed() {
        let invalid = Error::InvalidInput.to_string();
        assert!(invalid.starts_with("invalid input"));

        let convergence = Error::ConvergenceFailure.to_string();
        assert!(convergence.starts_with("convergence failure"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: core::error::Error + Send + Sync + 'static>() {}
        assert_error::<Error>();
    }
}

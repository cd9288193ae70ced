//! Square root by Newton's method.
//!
//! For f(g) = g² - x the Newton step is g ← (g + x/g) / 2, which converges
//! quadratically from any positive starting guess.

use tracing::{debug, trace, warn};

use crate::machine::PiFloat;
use crate::types::{Error, SqrtResult};
use crate::utils::abs;

/// Iterate toward √x until successive guesses differ by less than `acc`.
///
/// Starts from `(pg, g) = (0, 1)` and tests `|pg - g| >= acc` before each
/// step. The sentinel makes the first test `1 >= acc`, so any `acc <= 1`
/// takes at least one step; a coarser `acc` returns the starting guess 1
/// after zero steps.
///
/// Fails with [`Error::ConvergenceFailure`] once `max_iterations` steps
/// have been taken without meeting the threshold.
pub(crate) fn newton_sqrt_raw<T: PiFloat>(
    x: T,
    acc: T,
    max_iterations: usize,
) -> Result<SqrtResult<T>, Error> {
    let zero = T::zero();
    let two = T::from_f64(2.0);

    if !x.is_finite() || x <= zero {
        return Err(Error::InvalidInput);
    }
    if !acc.is_finite() || acc <= zero {
        return Err(Error::InvalidInput);
    }
    if max_iterations == 0 {
        return Err(Error::InvalidInput);
    }

    // previous and current guess
    let mut pg = zero;
    let mut g = T::one();
    let mut iterations = 0;

    while abs(pg - g) >= acc {
        if iterations == max_iterations {
            warn!(
                x = %x,
                acc = %acc,
                max_iterations,
                last_step = %abs(pg - g),
                "newton sqrt hit iteration limit"
            );
            return Err(Error::ConvergenceFailure);
        }
        pg = g;
        g = (pg + x / pg) / two;
        iterations += 1;
        trace!(iteration = iterations, guess = %g);
    }

    debug!(x = %x, sqrt = %g, iterations, "newton sqrt converged");
    Ok(SqrtResult {
        value: g,
        iterations,
    })
}

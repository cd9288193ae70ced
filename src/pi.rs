//! π approximation pipeline.
//!
//! Σ 1/n² = π²/6 (the Basel problem), so π ≈ sqrt(6 · Σ_{n=1}^{T} 1/n²).
//! Truncating after T terms leaves a tail of about 1/T, which puts the
//! result roughly 3/(πT) below π.

use tracing::{debug, instrument};

use crate::algo::newton::newton_sqrt_raw;
use crate::algo::series::basel_sum;
use crate::config::Config;
use crate::machine::PiFloat;
use crate::types::{Error, PiApproximation};

/// Σ 1/n² → π²/6
const BASEL_SCALE: f64 = 6.0;

/// Run series summation, scaling and square root in sequence.
#[instrument(level = "debug", skip(config), fields(terms = config.terms))]
pub(crate) fn approximate_pi_raw<T: PiFloat>(
    config: &Config,
) -> Result<PiApproximation<T>, Error> {
    let basel_sum = basel_sum::<T>(config.terms)?;
    let pi_squared = basel_sum * T::from_f64(BASEL_SCALE);

    let sqrt = newton_sqrt_raw(
        pi_squared,
        T::from_f64(config.sqrt_acc),
        config.max_iterations,
    )?;

    debug!(pi = %sqrt.value, "pi approximated");
    Ok(PiApproximation {
        basel_sum,
        pi_squared,
        pi: sqrt.value,
        sqrt_iterations: sqrt.iterations,
    })
}

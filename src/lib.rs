//! Approximate π from the Basel series and a Newton square root.
//!
//! Σ_{n=1}^{∞} 1/n² = π²/6, so summing the first `terms` terms, scaling by
//! six and taking the square root gives an estimate of π:
//!
//! ```
//! use basel_pi::{approximate_pi, Config};
//!
//! let pi: f64 = approximate_pi(&Config::default()).unwrap();
//! assert_eq!(pi, 3.1415831043264566);
//! ```
//!
//! The three steps are also available on their own: [`basel_sum`],
//! [`abs`] and [`newton_sqrt`]. All routines are generic over `f32` and
//! `f64` via [`PiFloat`]; the summation order is fixed (ascending n), so
//! results are reproducible bit-for-bit.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod algo;
pub mod config;
pub mod machine;
mod pi;
pub mod types;
pub mod utils;

pub use algo::series::PartialSums;
pub use config::{Config, DEFAULT_MAX_ITERATIONS, DEFAULT_SQRT_ACC, DEFAULT_TERMS};
pub use machine::PiFloat;
pub use types::{Error, PiApproximation, SqrtResult};
pub use utils::abs;

// ── Series ──

/// Σ_{n=1}^{terms} 1/n², summed in ascending n.
///
/// Returns [`Error::InvalidInput`] for `terms == 0`.
pub fn basel_sum<T: PiFloat>(terms: u64) -> Result<T, Error> {
    algo::series::basel_sum(terms)
}

// ── Square root ──

/// √x by Newton's method, stopping once successive guesses differ by less
/// than `acc`.
///
/// Uses [`DEFAULT_MAX_ITERATIONS`] as the iteration ceiling.
pub fn newton_sqrt<T: PiFloat>(x: T, acc: T) -> Result<T, Error> {
    algo::newton::newton_sqrt_raw(x, acc, DEFAULT_MAX_ITERATIONS).map(|r| r.value)
}

/// √x by Newton's method, returning the iteration count alongside the value.
///
/// Fails with [`Error::ConvergenceFailure`] if `max_iterations` steps are
/// not enough to meet `acc`.
pub fn newton_sqrt_raw<T: PiFloat>(
    x: T,
    acc: T,
    max_iterations: usize,
) -> Result<SqrtResult<T>, Error> {
    algo::newton::newton_sqrt_raw(x, acc, max_iterations)
}

// ── Pipeline ──

/// Estimate π as √(6 · Σ 1/n²) using the given configuration.
pub fn approximate_pi<T: PiFloat>(config: &Config) -> Result<T, Error> {
    pi::approximate_pi_raw(config).map(|r| r.pi)
}

/// Like [`approximate_pi`], but also returns the series sum, its scaled
/// value and the Newton iteration count.
pub fn approximate_pi_raw<T: PiFloat>(config: &Config) -> Result<PiApproximation<T>, Error> {
    pi::approximate_pi_raw(config)
}

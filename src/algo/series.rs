//! Partial sums of the Basel series Σ 1/n².
//!
//! The series converges to π²/6. Terms are accumulated strictly in
//! ascending order of n; any other order (pairwise, reversed, parallel)
//! rounds differently and changes the result in the last bits.

use tracing::debug;

use crate::machine::PiFloat;
use crate::types::Error;

/// The n-th term, 1/n².
///
/// n² is formed exactly in integer arithmetic, then converted and divided
/// once in floating point.
#[inline]
fn term<T: PiFloat>(n: u64) -> T {
    let n = u128::from(n);
    T::one() / T::from_square(n * n)
}

/// Sum of the first `terms` terms of Σ 1/n².
#[inline]
pub(crate) fn basel_sum<T: PiFloat>(terms: u64) -> Result<T, Error> {
    if terms < 1 {
        return Err(Error::InvalidInput);
    }

    let terms_sq = u128::from(terms) * u128::from(terms);
    if terms_sq > 1_u128 << T::MACH_DIGITS {
        debug!(
            terms,
            digits = T::MACH_DIGITS,
            "late term squares exceed the mantissa and are rounded before division"
        );
    }

    let mut tot = T::zero();
    for n in 1..=terms {
        tot = tot + term::<T>(n);
    }

    debug!(terms, sum = %tot, "basel series summed");
    Ok(tot)
}

/// Iterator over the successive partial sums of Σ 1/n².
///
/// The k-th item (1-based) is the sum through term k and is bit-identical
/// to [`basel_sum`](crate::basel_sum)`(k)`. The iterator only ends when the
/// term index would overflow `u64`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialSums<T: PiFloat> {
    n: u64,
    total: T,
}

impl<T: PiFloat> PartialSums<T> {
    /// Start before the first term; the first item is 1.
    pub fn new() -> Self {
        Self {
            n: 0,
            total: T::zero(),
        }
    }

    /// Number of terms summed so far.
    pub fn terms(&self) -> u64 {
        self.n
    }

    /// Current partial sum; zero before the first item.
    pub fn total(&self) -> T {
        self.total
    }
}

impl<T: PiFloat> Default for PartialSums<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PiFloat> Iterator for PartialSums<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let n = self.n.checked_add(1)?;
        self.total = self.total + term::<T>(n);
        self.n = n;
        Some(self.total)
    }
}

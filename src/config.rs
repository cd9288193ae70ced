//! Pipeline configuration.
//!
//! The defaults reproduce the classic run: 100000 series terms and a
//! Newton accuracy threshold of 1e-8.

/// Default number of Basel series terms.
pub const DEFAULT_TERMS: u64 = 100_000;

/// Default convergence threshold for the Newton square root (SQRT_ACC).
pub const DEFAULT_SQRT_ACC: f64 = 0.00000001;

/// Default ceiling on Newton iterations.
///
/// Well above the handful of iterations any positive double needs from
/// a starting guess of 1; only reached when the accuracy threshold is
/// finer than the spacing of representable values near the root.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Parameters of one π approximation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of series terms to sum. Must be at least 1.
    pub terms: u64,
    /// Newton convergence threshold. Must be positive and finite.
    pub sqrt_acc: f64,
    /// Newton iteration ceiling. Must be at least 1.
    pub max_iterations: usize,
}

impl Config {
    /// Configuration with every field at its default.
    pub const fn new() -> Self {
        Self {
            terms: DEFAULT_TERMS,
            sqrt_acc: DEFAULT_SQRT_ACC,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Replace the number of series terms.
    pub const fn with_terms(mut self, terms: u64) -> Self {
        self.terms = terms;
        self
    }

    /// Replace the Newton convergence threshold.
    pub const fn with_sqrt_acc(mut self, sqrt_acc: f64) -> Self {
        self.sqrt_acc = sqrt_acc;
        self
    }

    /// Replace the Newton iteration ceiling.
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

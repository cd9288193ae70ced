//! Machine constants and the `PiFloat` trait.

use num_traits::Float;

/// Floating-point trait for the series and square-root routines.
///
/// Implemented for `f64` and `f32`. The pipeline result is only
/// reproducible bit-for-bit with `f64`; `f32` is supported for the
/// individual routines.
pub trait PiFloat: Float + core::fmt::Debug + core::fmt::Display + 'static {
    /// Number of binary digits in the mantissa.
    const MACH_DIGITS: u32;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    fn from_f64(x: f64) -> Self;

    /// Conversion of an exact integer square `n * n`.
    ///
    /// Rounds once, to nearest. For f64 the conversion is exact while
    /// `n * n < 2^53`.
    fn from_square(nn: u128) -> Self;
}

impl PiFloat for f64 {
    const MACH_DIGITS: u32 = 53;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn from_square(nn: u128) -> f64 {
        nn as f64
    }
}

impl PiFloat for f32 {
    const MACH_DIGITS: u32 = 24;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn from_square(nn: u128) -> f32 {
        nn as f32
    }
}

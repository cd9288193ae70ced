//! Small scalar helpers shared by the algorithm modules.

use crate::machine::PiFloat;

/// Absolute value: `x` if `x >= 0`, otherwise `-x`.
///
/// Delegates to [`Float::abs`](num_traits::Float::abs), which agrees with
/// the comparison form on every input. The one visible difference is the
/// sign bit of `-0.0`, and ±0 compare equal.
#[inline]
pub fn abs<T: PiFloat>(x: T) -> T {
    x.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn abs_zero() {
        assert_eq!(abs(0.0_f64), 0.0);
        assert_eq!(abs(-0.0_f64), 0.0);
        assert_eq!(abs(0.0_f32), 0.0);
    }

    #[test]
    fn abs_positive_is_identity() {
        assert_eq!(abs(3.5_f64), 3.5);
        assert_eq!(abs(1e-300_f64), 1e-300);
        assert_eq!(abs(f64::MAX), f64::MAX);
    }

    #[test]
    fn abs_negative_is_negated() {
        assert_eq!(abs(-3.5_f64), 3.5);
        assert_eq!(abs(-1e-300_f64), 1e-300);
        assert_eq!(abs(f64::MIN), f64::MAX);
        assert_eq!(abs(-2.25_f32), 2.25);
    }

    #[test]
    fn abs_infinities() {
        assert_eq!(abs(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(abs(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn abs_matches_comparison_form() {
        // x if x >= 0 else -x
        for x in [-7.0_f64, -1.0, -0.5, 0.0, 0.5, 1.0, 7.0] {
            let expected = if x < 0.0 { -x } else { x };
            assert_eq!(abs(x), expected, "abs({x})");
        }
    }

    proptest! {
        #[test]
        fn abs_is_non_negative(x in -1e300_f64..1e300) {
            prop_assert!(abs(x) >= 0.0);
        }

        #[test]
        fn abs_is_symmetric(x in -1e300_f64..1e300) {
            prop_assert_eq!(abs(x), abs(-x));
        }
    }
}

//! Scalar rules shared by every vector type
//!
//! The vector types apply these per component, so each rule (extrema, clamping,
//! rounding) has exactly one definition. They are generic over
//! [`num_traits::Float`] and behave identically for `f32` and `f64`.

use num_traits::Float;

/// Returns the larger of two values, propagating NaN.
///
/// Unlike [`f64::max`], a NaN in either operand produces NaN, and positive
/// zero is considered greater than negative zero.
///
/// # Examples
/// ```
/// use numerics_core::math_utils::propagating_max;
/// assert_eq!(propagating_max(-1.0, 2.0), 2.0);
/// assert!(propagating_max(f64::NAN, 2.0).is_nan());
/// assert!(propagating_max(-0.0_f64, 0.0).is_sign_positive());
/// ```
#[inline]
pub fn propagating_max<F: Float>(a: F, b: F) -> F {
    if a.is_nan() || b.is_nan() {
        return F::nan();
    }
    if a == b {
        // Only reachable with distinct bit patterns for +0 and -0.
        return if a.is_sign_negative() { b } else { a };
    }
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the smaller of two values, propagating NaN.
///
/// Negative zero is considered less than positive zero.
///
/// # Examples
/// ```
/// use numerics_core::math_utils::propagating_min;
/// assert_eq!(propagating_min(-1.0, 2.0), -1.0);
/// assert!(propagating_min(2.0, f64::NAN).is_nan());
/// assert!(propagating_min(0.0_f64, -0.0).is_sign_negative());
/// ```
#[inline]
pub fn propagating_min<F: Float>(a: F, b: F) -> F {
    if a.is_nan() || b.is_nan() {
        return F::nan();
    }
    if a == b {
        return if a.is_sign_negative() { a } else { b };
    }
    if a < b {
        a
    } else {
        b
    }
}

/// Restricts `value` to `[min, max]` as `min(max(value, min), max)`.
///
/// `min` must be less than or equal to `max`, otherwise the result is
/// unspecified. The formula is applied verbatim, which yields `max` in that case.
#[inline]
pub fn clamp<F: Float>(value: F, min: F, max: F) -> F {
    propagating_min(propagating_max(value, min), max)
}

/// Rounds to the nearest integer, with halves rounded towards positive infinity.
///
/// The sign of a zero result follows the input, so `-0.5` and `-0.4` both
/// round to `-0.0`. Infinities and NaN are returned unchanged.
///
/// # Examples
/// ```
/// use numerics_core::math_utils::round_half_up;
/// assert_eq!(round_half_up(0.5), 1.0);
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-1.5), -1.0);
/// assert!(round_half_up(-0.5_f64).is_sign_negative());
/// ```
#[inline]
pub fn round_half_up<F: Float>(value: F) -> F {
    let half = F::one() / (F::one() + F::one());
    let floor = value.floor();

    // `value - floor` is exact for every finite input, so halves compare exactly.
    let rounded = if value - floor >= half {
        floor + F::one()
    } else {
        floor
    };

    if rounded.is_zero() && value.is_sign_negative() {
        -F::zero()
    } else {
        rounded
    }
}

/// Rounds towards zero: up if negative, down otherwise.
///
/// Truncating a negative value with magnitude below one yields `-0.0`.
#[inline]
pub fn round_toward_zero<F: Float>(value: F) -> F {
    if value < F::zero() {
        value.ceil()
    } else {
        value.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_propagating_extrema() {
        assert_eq!(propagating_max(1.0, 3.0), 3.0);
        assert_eq!(propagating_max(3.0, 1.0), 3.0);
        assert_eq!(propagating_min(1.0, 3.0), 1.0);
        assert_eq!(propagating_min(3.0, 1.0), 1.0);

        assert!(propagating_max(f64::NAN, f64::INFINITY).is_nan());
        assert!(propagating_min(f64::NEG_INFINITY, f64::NAN).is_nan());

        assert!(propagating_max(0.0, -0.0).is_sign_positive());
        assert!(propagating_max(-0.0, -0.0).is_sign_negative());
        assert!(propagating_min(-0.0, 0.0).is_sign_negative());
        assert!(propagating_min(0.0, 0.0).is_sign_positive());

        assert_eq!(propagating_max(f32::MIN, f32::MAX), f32::MAX);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);

        // Inverted bounds collapse onto `max`.
        assert_eq!(clamp(0.5, 1.0, 0.0), 0.0);
        assert_eq!(clamp(2.0, 1.0, 0.0), 0.0);
        assert_eq!(clamp(-1.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.4), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.4), 1.0);
        assert_eq!(round_half_up(-0.6), -1.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.6), -2.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);

        let negative_zero = round_half_up(-0.4);
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_negative());
        assert!(round_half_up(-0.0).is_sign_negative());
        assert!(round_half_up(0.0).is_sign_positive());

        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_half_up(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497.0);
    }

    #[test]
    fn test_round_toward_zero() {
        assert_eq!(round_toward_zero(0.4), 0.0);
        assert_eq!(round_toward_zero(1.5), 1.0);
        assert_eq!(round_toward_zero(-1.5), -1.0);

        let tiny = round_toward_zero(-f64::from_bits(1));
        assert_eq!(tiny, 0.0);
        assert!(tiny.is_sign_negative());

        assert_eq!(round_toward_zero(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_toward_zero(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(round_toward_zero(f64::NAN).is_nan());
    }
}

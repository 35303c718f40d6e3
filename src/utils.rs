//! Scalar helpers shared by the dispatcher and the gamma routines.

use crate::machine::HypFloat;

/// True when x is zero or a negative integer (a pole of the gamma
/// function, and a terminating upper parameter of the series).
#[inline]
pub(crate) fn is_nonpos_int<T: HypFloat>(x: T) -> bool {
    x <= T::zero() && x == x.floor()
}

/// True when x lies within `half_width` of some integer.
///
/// Used on the balance s = c - a - b to detect the cancellation regime of
/// the 1-x transformation. Arguments at or above 2^53 are spaced wider
/// than 1 apart and always report true; the continued-fraction path they
/// select degrades gracefully to a convergence error.
#[inline]
pub(crate) fn is_near_int<T: HypFloat>(x: T, half_width: T) -> bool {
    (x - x.round()).abs() < half_width
}

/// Compute sin(pi * x) with exact values at half-integers.
///
/// Reduces the argument modulo 2 first, so `sinpi(n)` is exactly 0 for
/// any integer `n`, and `sinpi(n + 0.5)` is exactly +-1. This avoids the
/// catastrophic rounding errors of `(x * PI).sin()` when x is a
/// half-integer (e.g. `sin(1.5 * PI)` = -1.837e-16 instead of 0), which
/// would otherwise leak into the gamma reflection formula as a spurious
/// near-pole.
///
/// Algorithm follows scipy/xsf: reduce to [0, 0.5], use symmetry.
pub(crate) fn sinpi<T: HypFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let three_halves = T::from_f64(1.5);
    let pi = T::from_f64(core::f64::consts::PI);

    // sinpi is odd
    let (ax, sign) = if x < zero { (-x, -one) } else { (x, one) };

    let r = ax % two;

    // Exact special values
    if r == zero || r == one {
        return zero;
    }
    if r == half {
        return sign;
    }
    if r == three_halves {
        return -sign;
    }

    // Symmetry reduction to [0, 0.5]
    let s = if r < half {
        (r * pi).sin()
    } else if r < one {
        ((one - r) * pi).sin()
    } else if r < three_halves {
        -((r - one) * pi).sin()
    } else {
        -((two - r) * pi).sin()
    };

    sign * s
}

//! Domain dispatch: classification of (a, b, c, x) into exactly one
//! evaluation strategy, and the executor that runs it.
//!
//! The rules live in one function, in priority order, so each can be
//! unit-tested against the [`Strategy`] it selects rather than through
//! the numerics it triggers. The executor is a plain match: strategies
//! are alternatives, never a pipeline, and a failed strategy is never
//! retried with degraded settings.

use crate::algo::cfrac::hyp2f1_cf;
use crate::algo::pfaff::hyp2f1_neg;
use crate::algo::reflect::{gauss_limit, hyt2f1_reflect};
use crate::algo::series::hys2f1;
use crate::machine::HypFloat;
use crate::types::{Config, Error, Strategy};
use crate::utils::{is_near_int, is_nonpos_int};

/// Half-width of the band around integer c-a-b inside which the 1-x
/// transformation is handed over to the continued fraction. At the band
/// edge the transformation still holds about twelve significant digits;
/// inside it the gamma weights cancel progressively worse.
const NEAR_INTEGER: f64 = 1.0e-3;

/// Select the evaluation strategy for 2F1(a, b; c; x).
///
/// Rules in priority order:
/// 1. any non-finite input is out of domain;
/// 2. x = 0, or a zero upper parameter: the sum is exactly 1;
/// 3. an upper parameter equal to c: binomial collapse;
/// 4. c a non-positive integer: pole, unless a or b truncates the
///    series at or before the offending term;
/// 5. a or b a non-positive integer within the iteration ceiling:
///    terminating series, exact for any x;
/// 6. |x| < 0.5: direct series;
/// 7. 0.5 <= x < 1: 1-x transformation, or the continued fraction when
///    c-a-b sits near an integer;
/// 8. x = 1: Gauss summation limit if c-a-b > 0, otherwise divergent;
/// 9. x > 1: branch cut, out of domain;
/// 10. x <= -0.5: Pfaff connection formula.
pub(crate) fn classify<T: HypFloat>(a: T, b: T, c: T, x: T, max_iter: usize) -> Strategy {
    let zero = T::zero();
    let one = T::one();

    if !(a.is_finite() && b.is_finite() && c.is_finite() && x.is_finite()) {
        return Strategy::OutOfDomain;
    }
    if x == zero || a == zero || b == zero {
        return Strategy::One;
    }
    if a == c || b == c {
        return Strategy::Binomial;
    }
    if is_nonpos_int(c) {
        // a >= c (both non-positive integers) truncates the numerator
        // before the denominator reaches its zero.
        let truncates = (is_nonpos_int(a) && a >= c) || (is_nonpos_int(b) && b >= c);
        if truncates {
            return Strategy::Polynomial;
        }
        return Strategy::PoleC;
    }
    // The truncation order |a| needs |a|+1 loop iterations to reach its
    // zero factor, hence the -1.
    let bound = -T::from_f64(max_iter.saturating_sub(1) as f64);
    if (is_nonpos_int(a) && a >= bound) || (is_nonpos_int(b) && b >= bound) {
        return Strategy::Polynomial;
    }
    if x.abs() < T::from_f64(0.5) {
        return Strategy::Series;
    }
    if x < one {
        if x > zero {
            // 0.5 <= x < 1
            if is_near_int(c - a - b, T::from_f64(NEAR_INTEGER)) {
                return Strategy::Cfrac;
            }
            return Strategy::Reflect;
        }
        // x <= -0.5
        return Strategy::Transform;
    }
    if x == one {
        if c - a - b > zero {
            return Strategy::GaussLimit;
        }
        return Strategy::OutOfDomain;
    }
    Strategy::OutOfDomain
}

/// Evaluate 2F1(a, b; c; x) through the selected strategy.
pub(crate) fn eval<T: HypFloat>(a: T, b: T, c: T, x: T, cfg: &Config<T>) -> Result<T, Error> {
    eval_with_distance(a, b, c, x, T::one() - x, cfg)
}

/// Evaluate with the distance to the branch point supplied separately.
///
/// `w` must equal 1-x; the connection formula computes it as 1/(1-x_orig)
/// so the 1-x transformation sees the distance at full precision even
/// when the mapped argument has rounded to within epsilon of 1.
pub(crate) fn eval_with_distance<T: HypFloat>(
    a: T,
    b: T,
    c: T,
    x: T,
    w: T,
    cfg: &Config<T>,
) -> Result<T, Error> {
    match classify(a, b, c, x, cfg.max_iter) {
        Strategy::One => Ok(T::one()),
        Strategy::Binomial => binomial(a, b, c, x),
        Strategy::Polynomial | Strategy::Series => hys2f1(a, b, c, x, cfg),
        Strategy::Reflect => hyt2f1_reflect(a, b, c, w, cfg),
        Strategy::Cfrac => hyp2f1_cf(a, b, c, x, cfg),
        Strategy::Transform => hyp2f1_neg(a, b, c, x, cfg),
        Strategy::GaussLimit => gauss_limit(a, b, c),
        Strategy::PoleC => Err(Error::Pole),
        Strategy::OutOfDomain => Err(Error::Domain),
    }
}

/// a = c or b = c: every Pochhammer ratio against c cancels and the sum
/// is the binomial (1-x)^(-b) respectively (1-x)^(-a).
fn binomial<T: HypFloat>(a: T, b: T, c: T, x: T) -> Result<T, Error> {
    let zero = T::zero();
    let exponent = if a == c { -b } else { -a };
    let base = T::one() - x;

    if base == zero {
        // x = 1: finite only when the exponent keeps the power bounded.
        if exponent > zero {
            return Ok(zero);
        }
        return Err(Error::Domain);
    }

    let y = base.powf(exponent);
    if y.is_finite() {
        Ok(y)
    } else if y.is_nan() {
        // negative base with non-integer exponent: on the branch cut
        Err(Error::Domain)
    } else {
        Err(Error::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_MAX_ITER;

    fn classify64(a: f64, b: f64, c: f64, x: f64) -> Strategy {
        classify(a, b, c, x, DEFAULT_MAX_ITER)
    }

    #[test]
    fn non_finite_inputs() {
        assert_eq!(classify64(1.0, 2.0, 3.0, f64::NAN), Strategy::OutOfDomain);
        assert_eq!(
            classify64(1.0, 2.0, 3.0, f64::INFINITY),
            Strategy::OutOfDomain
        );
        assert_eq!(
            classify64(f64::NAN, 2.0, 3.0, 0.25),
            Strategy::OutOfDomain
        );
    }

    #[test]
    fn unit_shortcuts() {
        assert_eq!(classify64(1.0, 2.0, 3.0, 0.0), Strategy::One);
        assert_eq!(classify64(0.0, 2.0, 3.0, 0.9), Strategy::One);
        assert_eq!(classify64(1.0, 0.0, 3.0, 7.0), Strategy::One);
    }

    #[test]
    fn binomial_collapse() {
        assert_eq!(classify64(2.5, 1.0, 2.5, 0.3), Strategy::Binomial);
        assert_eq!(classify64(1.0, -2.0, -2.0, 0.8), Strategy::Binomial);
    }

    #[test]
    fn lower_parameter_pole() {
        assert_eq!(classify64(1.0, 1.0, 0.0, 0.5), Strategy::PoleC);
        // a = -3 reaches its zero only after c = -2 divides by zero
        assert_eq!(classify64(-3.0, 1.0, -2.0, 0.5), Strategy::PoleC);
        // a = -1 truncates before c = -2 reaches its zero
        assert_eq!(classify64(-1.0, 1.0, -2.0, 0.5), Strategy::Polynomial);
    }

    #[test]
    fn terminating_parameters() {
        assert_eq!(classify64(-2.0, 3.0, 5.0, 0.5), Strategy::Polynomial);
        // regardless of argument size
        assert_eq!(classify64(-4.0, 1.5, 2.5, 7.25), Strategy::Polynomial);
        // past the practical bound the terminating series is out of reach
        assert_eq!(classify64(-1.0e9, 1.5, 2.5, 0.7), Strategy::Cfrac);
    }

    #[test]
    fn unit_interval_regions() {
        assert_eq!(classify64(0.3, 0.7, 1.9, 0.3), Strategy::Series);
        assert_eq!(classify64(0.3, 0.7, 1.9, -0.49), Strategy::Series);
        assert_eq!(classify64(0.3, 0.7, 1.9, 0.7), Strategy::Reflect);
        // c - a - b = 0: cancellation regime
        assert_eq!(classify64(1.0, 1.0, 2.0, 0.7), Strategy::Cfrac);
        // near-integer balance, not exact
        assert_eq!(classify64(1.0, 1.0, 3.0000001, 0.7), Strategy::Cfrac);
    }

    #[test]
    fn boundary_and_beyond() {
        assert_eq!(classify64(0.1, 0.05, 2.0, 1.0), Strategy::GaussLimit);
        assert_eq!(classify64(1.0, 1.0, 2.0, 1.0), Strategy::OutOfDomain);
        assert_eq!(classify64(0.5, 0.5, 1.5, 1.5), Strategy::OutOfDomain);
        assert_eq!(classify64(0.5, 0.5, 1.5, -0.5), Strategy::Transform);
        assert_eq!(classify64(0.5, 0.5, 1.5, -2.0e6), Strategy::Transform);
    }

    #[test]
    fn binomial_values() {
        // b = c: (1-x)^(-a)
        let y = binomial(2.0, 1.5, 1.5, 0.36).unwrap();
        assert!((y - 0.64_f64.powf(-2.0)).abs() < 1e-14);
        // x = 1 with positive exponent collapses to zero
        assert_eq!(binomial(-2.0, 1.5, 1.5, 1.0), Ok(0.0));
        // x = 1 with negative exponent diverges
        assert_eq!(binomial(2.0, 1.5, 1.5, 1.0), Err(Error::Domain));
        // branch cut: negative base, fractional exponent
        assert_eq!(binomial(0.5, 1.5, 1.5, 3.0), Err(Error::Domain));
    }
}

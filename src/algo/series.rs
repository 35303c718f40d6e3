//! Direct power series for 2F1.
//!
//! Sums sum_k (a)_k (b)_k / ((c)_k k!) x^k with the multiplicative term
//! update of Cephes hys2f1, so no factorial or Pochhammer value is ever
//! formed outright. Handles the terminating (polynomial) case exactly:
//! a zero numerator factor ends the sum with no further arithmetic.

use crate::machine::HypFloat;
use crate::types::{Config, Error};

/// Consecutive sub-tolerance terms required before the sum is accepted.
/// A single small term can be an accidental zero crossing of an
/// alternating tail, not convergence.
const CONVERGED_RUN: u32 = 3;

/// Direct summation of 2F1(a, b; c; x).
///
/// Converges for |x| < 1 (geometrically, with ratio approaching x) and
/// for any x when a or b is a non-positive integer. The caller is
/// responsible for routing arguments; the zero-denominator check here is
/// a backstop that reports [`Error::Pole`] rather than dividing by zero.
pub(crate) fn hys2f1<T: HypFloat>(a: T, b: T, c: T, x: T, cfg: &Config<T>) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();

    // Below this magnitude a term can no longer move the sum.
    let floor = T::MACH_TINY * T::from_f64(1.0e3);

    let mut term = one;
    let mut sum = one;
    let mut run = 0u32;

    for k in 1..=cfg.max_iter {
        let kf = T::from_f64(k as f64);
        let num = (a + kf - one) * (b + kf - one);
        if num == zero {
            // Terminating series: the remaining terms are identically zero.
            return Ok(sum);
        }
        let den = (c + kf - one) * kf;
        if den == zero {
            return Err(Error::Pole);
        }

        term = term * num / den * x;
        sum = sum + term;

        if !term.is_finite() || term.abs() > T::term_limit() || sum.abs() > T::term_limit() {
            return Err(Error::Overflow);
        }

        if term.abs() < (cfg.rel_tol * sum.abs()).max(floor) {
            run += 1;
            if run >= CONVERGED_RUN {
                return Ok(sum);
            }
        } else {
            run = 0;
        }
    }

    Err(Error::NoConvergence)
}

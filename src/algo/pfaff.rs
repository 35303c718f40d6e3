//! Pfaff connection formula for negative arguments.
//!
//! For x <= -0.5 the alternating direct series cancels badly (and stops
//! converging at all past x = -1); A&S 15.3.4/15.3.5 map the argument
//! into [0, 1):
//!
//!   F(a,b;c;x) = (1-x)^(-a) F(a, c-b; c; x/(x-1))
//!              = (1-x)^(-b) F(b, c-a; c; x/(x-1))
//!
//! The upper parameter of smaller magnitude goes into the prefactor
//! exponent. The inner evaluation re-enters the unit-interval dispatch,
//! so a transformed argument near 1 (large |x|) still lands on the
//! 1-x transformation or the continued fraction as appropriate.

use crate::dispatch::eval_with_distance;
use crate::machine::HypFloat;
use crate::types::{Config, Error};

/// 2F1(a, b; c; x) for x <= -0.5 via the x/(x-1) map.
pub(crate) fn hyp2f1_neg<T: HypFloat>(a: T, b: T, c: T, x: T, cfg: &Config<T>) -> Result<T, Error> {
    let one = T::one();

    let omx = one - x; // > 1.5
    let xp = x / (x - one); // in (0, 1)
    // 1 - xp evaluated as 1/(1-x): the subtraction would wipe out the
    // distance to the branch point once |x| is large.
    let wp = one / omx;

    let (p, q) = if a.abs() <= b.abs() {
        (a, c - b)
    } else {
        (b, c - a)
    };

    let ln_pre = -p * omx.ln();
    if ln_pre >= T::exp_limit() {
        return Err(Error::Overflow);
    }

    let inner = eval_with_distance(p, q, c, xp, wp, cfg)?;
    let result = ln_pre.exp() * inner;
    if !result.is_finite() {
        return Err(Error::Overflow);
    }
    Ok(result)
}

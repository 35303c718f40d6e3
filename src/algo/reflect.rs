//! Linear transformation of 2F1 to argument 1-x.
//!
//! For 0.5 <= x < 1 the direct series degrades sharply; A&S 15.3.6
//! re-expresses the function through two series in w = 1-x:
//!
//!   F(a,b;c;x) = W1 * F(a, b; a+b-c+1; w) + W2 * w^s * F(c-a, c-b; s+1; w)
//!
//! with s = c-a-b and gamma-ratio weights
//!
//!   W1 = Gamma(c)Gamma(s) / (Gamma(c-a)Gamma(c-b)),
//!   W2 = Gamma(c)Gamma(-s) / (Gamma(a)Gamma(b)).
//!
//! Weights are assembled in log-magnitude/sign space so large gamma
//! values cannot overflow before they cancel against each other. A pole
//! in a denominator gamma zeroes that weight (the 1/Gamma limit); a pole
//! in a numerator gamma is reported as [`Error::Pole`] -- the dispatcher
//! keeps integer s away from this path, so reaching one means the caller
//! bypassed classification.
//!
//! The x = 1 boundary with s > 0 is the Gauss summation theorem,
//! F(a,b;c;1) = W1, evaluated here with the same weight machinery.

use crate::algo::gamln::gamln_sign;
use crate::algo::series::hys2f1;
use crate::machine::HypFloat;
use crate::types::{Config, Error};

/// Log magnitude and sign of Gamma(n1)Gamma(n2) / (Gamma(d1)Gamma(d2)).
///
/// `Ok(None)` means a denominator gamma sits on a pole and the whole
/// ratio is zero. Numerator poles propagate as [`Error::Pole`].
fn gamma_ratio<T: HypFloat>(n1: T, n2: T, d1: T, d2: T) -> Result<Option<(T, T)>, Error> {
    let (ln1, sg1) = gamln_sign(n1)?;
    let (ln2, sg2) = gamln_sign(n2)?;
    let (lnd1, sgd1) = match gamln_sign(d1) {
        Err(Error::Pole) => return Ok(None),
        other => other?,
    };
    let (lnd2, sgd2) = match gamln_sign(d2) {
        Err(Error::Pole) => return Ok(None),
        other => other?,
    };
    Ok(Some((ln1 + ln2 - lnd1 - lnd2, sg1 * sg2 * sgd1 * sgd2)))
}

/// 2F1(a, b; c; x) via the w = 1-x transformation, for x in [0.5, 1).
///
/// The caller supplies w = 1-x directly so connection-formula callers can
/// hand over a full-precision distance to the branch point.
pub(crate) fn hyt2f1_reflect<T: HypFloat>(
    a: T,
    b: T,
    c: T,
    w: T,
    cfg: &Config<T>,
) -> Result<T, Error> {
    let one = T::one();
    let s = c - a - b;

    let mut result = T::zero();

    if let Some((ln1, sg1)) = gamma_ratio(c, s, c - a, c - b)? {
        if ln1 >= T::exp_limit() {
            return Err(Error::Overflow);
        }
        let f1 = hys2f1(a, b, one - s, w, cfg)?;
        result = result + sg1 * ln1.exp() * f1;
    }

    if let Some((ln2, sg2)) = gamma_ratio(c, -s, a, b)? {
        let ln2w = ln2 + s * w.ln();
        if ln2w >= T::exp_limit() {
            return Err(Error::Overflow);
        }
        let f2 = hys2f1(c - a, c - b, one + s, w, cfg)?;
        result = result + sg2 * ln2w.exp() * f2;
    }

    Ok(result)
}

/// F(a, b; c; 1) = Gamma(c)Gamma(c-a-b) / (Gamma(c-a)Gamma(c-b)),
/// the Gauss summation theorem; requires c-a-b > 0.
pub(crate) fn gauss_limit<T: HypFloat>(a: T, b: T, c: T) -> Result<T, Error> {
    let s = c - a - b;
    match gamma_ratio(c, s, c - a, c - b)? {
        None => Ok(T::zero()),
        Some((ln, sg)) => {
            if ln >= T::exp_limit() {
                return Err(Error::Overflow);
            }
            Ok(sg * ln.exp())
        }
    }
}

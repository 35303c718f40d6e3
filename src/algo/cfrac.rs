//! Gauss continued fraction for 2F1.
//!
//! Evaluates the contiguous ratio
//!
//!   g = 2F1(a, b; c; x) / 2F1(a, b+1; c+1; x)
//!
//! as the continued fraction obtained by iterating Gauss's two contiguous
//! relations (the classical Gauss Kettenbruch; see A&S 15.2, DLMF 15.7):
//!
//!   g = 1 - e1 x / (1 - e2 x / (1 - ...)),
//!   e_{2k+1} = (a+k)(c-b+k) / ((c+2k)(c+2k+1)),
//!   e_{2k}   = (b+k)(c-a+k) / ((c+2k-1)(c+2k)).
//!
//! The fraction converges on the cut plane x < 1 and, unlike the 1-x
//! transformation, involves no gamma weights, so it stays fully
//! conditioned when c-a-b sits on or near an integer. The function value
//! is reconstructed as g times the contiguous neighbor 2F1(a, b+1; c+1; x)
//! from direct summation.
//!
//! Convergents are evaluated with the modified Lentz recurrence
//! (Thompson & Barnett), displacing vanishing partial denominators.

use crate::algo::series::hys2f1;
use crate::machine::HypFloat;
use crate::types::{Config, Error};

/// Ratio 2F1(a, b; c; x) / 2F1(a, b+1; c+1; x) by the Gauss continued
/// fraction.
///
/// Stops once successive convergents agree to `cfg.rel_tol`; reports
/// [`Error::NoConvergence`] at the iteration ceiling.
pub(crate) fn gauss_cf_ratio<T: HypFloat>(
    a: T,
    b: T,
    c: T,
    x: T,
    cfg: &Config<T>,
) -> Result<T, Error> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let tiny = T::from_f64(1.0e-30);

    let mut f = one;
    let mut num = one; // C of Lentz: ratio of successive numerators
    let mut den = T::zero(); // D of Lentz: inverse denominator ratio

    for n in 1..=cfg.max_iter {
        // Partial numerator -e_n * x; all partial denominators are 1.
        let e = if n % 2 == 1 {
            let k = T::from_f64(((n - 1) / 2) as f64);
            (a + k) * (c - b + k) / ((c + two * k) * (c + two * k + one))
        } else {
            let k = T::from_f64((n / 2) as f64);
            (b + k) * (c - a + k) / ((c + two * k - one) * (c + two * k))
        };
        let an = -e * x;

        let mut d = one + an * den;
        if d.abs() < tiny {
            d = tiny;
        }
        den = one / d;
        num = one + an / num;
        if num.abs() < tiny {
            num = tiny;
        }

        let delta = num * den;
        f = f * delta;
        if !f.is_finite() {
            return Err(Error::Overflow);
        }
        if (delta - one).abs() < cfg.rel_tol {
            return Ok(f);
        }
    }

    Err(Error::NoConvergence)
}

/// 2F1(a, b; c; x) for the regime where the 1-x transformation loses its
/// significance to cancellation (c-a-b at or near an integer).
///
/// The auxiliary value 2F1(a, b+1; c+1; x) never lands on a pole here:
/// c survived the dispatcher's non-positive-integer check, and a
/// truncating b+1 would have been routed to the polynomial path.
pub(crate) fn hyp2f1_cf<T: HypFloat>(a: T, b: T, c: T, x: T, cfg: &Config<T>) -> Result<T, Error> {
    let g = gauss_cf_ratio(a, b, c, x, cfg)?;
    let aux = hys2f1(a, b + T::one(), c + T::one(), x, cfg)?;
    Ok(g * aux)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config<f64> {
        Config::default()
    }

    #[test]
    fn ratio_against_elementary_denominator() {
        // With b = 0 the numerator is exactly 1, so the fraction equals
        // 1 / 2F1(1, 1; 2; x) = x / (-ln(1-x)).
        let x = 0.5_f64;
        let g = gauss_cf_ratio(1.0, 0.0, 1.0, x, &cfg()).unwrap();
        let expected = -x / (1.0 - x).ln();
        assert!((g - expected).abs() < 1e-13, "g = {g}, expected {expected}");
    }

    #[test]
    fn log_case_in_cancellation_regime() {
        // a = b = 1, c = 2 has c-a-b = 0, the worst case for the 1-x
        // path; the fraction handles it directly.
        for &x in &[0.5_f64, 0.6, 0.75, 0.9] {
            let y = hyp2f1_cf(1.0, 1.0, 2.0, x, &cfg()).unwrap();
            let expected = -(1.0 - x).ln() / x;
            let rel = ((y - expected) / expected).abs();
            assert!(rel < 1e-10, "x = {x}: y = {y}, expected {expected}");
        }
    }

    #[test]
    fn atanh_closed_form() {
        // 2F1(1/2, 1; 3/2; t^2) = atanh(t)/t, c-a-b = 0
        let t = 0.9_f64;
        let y = hyp2f1_cf(0.5, 1.0, 1.5, t * t, &cfg()).unwrap();
        let expected = t.atanh() / t;
        assert!(((y - expected) / expected).abs() < 1e-10);
    }

    #[test]
    fn agrees_with_direct_series() {
        let (a, b, c, x) = (0.7_f64, 0.2, 1.1, 0.3);
        let via_cf = hyp2f1_cf(a, b, c, x, &cfg()).unwrap();
        let via_series = hys2f1(a, b, c, x, &cfg()).unwrap();
        assert!(((via_cf - via_series) / via_series).abs() < 1e-12);
    }

    #[test]
    fn too_close_to_the_cut() {
        // At 1 - x = 1e-8 neither the fraction nor the auxiliary sum can
        // finish inside the ceiling.
        assert_eq!(
            hyp2f1_cf(0.5, 1.0, 1.5, 0.99999999, &cfg()),
            Err(Error::NoConvergence)
        );
    }

    #[test]
    fn f32_smoke() {
        let y = hyp2f1_cf(1.0_f32, 1.0, 2.0, 0.6, &Config::default()).unwrap();
        let expected = -(1.0_f32 - 0.6).ln() / 0.6;
        assert!(((y - expected) / expected).abs() < 1e-4);
    }
}

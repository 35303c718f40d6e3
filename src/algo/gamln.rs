//! Gamma, log-gamma magnitude, and sign of gamma for real arguments.
//!
//! The positive axis uses Stirling's asymptotic expansion in the
//! Bernoulli coefficients (the DGAMLN scheme from SLATEC), with upward
//! recurrence below the expansion's convergence threshold. The negative
//! axis goes through the reflection formula Gamma(z)Gamma(1-z) =
//! pi/sin(pi z), with the magnitude in log space and the sign tracked
//! separately since gamma alternates sign between negative integers.
//!
//! Non-positive integer arguments are reported as [`Error::Pole`] rather
//! than any finite value; the transformation weights depend on that
//! signal to select their error branches.

// Bernoulli-derived constants at full published precision.
#![allow(clippy::excessive_precision)]

use crate::algo::constants::{LN2PI, LNPI, R1M5};
use crate::machine::HypFloat;
use crate::types::Error;
use crate::utils::{is_nonpos_int, sinpi};

/// Coefficients of the asymptotic expansion for ln(Gamma(z)):
///   CF(k) = B_{2k} / (2k * (2k-1)),  k = 1, 2, ..., 22.
#[rustfmt::skip]
const STIR_COEF: [f64; 22] = [
     8.33333333333333333e-02,   // B2/(1*2)    = 1/12
    -2.77777777777777778e-03,   // B4/(3*4)    = -1/360
     7.93650793650793651e-04,   // B6/(5*6)
    -5.95238095238095238e-04,   // B8/(7*8)
     8.41750841750841751e-04,   // B10/(9*10)
    -1.91752691752691753e-03,   // B12/(11*12)
     6.41025641025641026e-03,   // B14/(13*14)
    -2.95506535947712418e-02,   // B16/(15*16)
     1.79644372368830573e-01,   // B18/(17*18)
    -1.39243221690590112e+00,   // B20/(19*20)
     1.34028640441683920e+01,   // B22/(21*22)
    -1.56848284626002017e+02,
     2.19310333333333333e+03,
    -3.61087712537249894e+04,
     6.91472268851313067e+05,
    -1.52382215394074162e+07,
     3.82900751391414141e+08,
    -1.08822660357843911e+10,
     3.47320283765002252e+11,
    -1.23696021422692745e+13,
     4.88788064793079335e+14,
    -2.13203339609193739e+16,
];

/// Smallest argument at which the asymptotic expansion converges to
/// working precision: 1 + floor(1.8 + 0.3875 * fln), where fln clamps
/// log10(2)*DIGITS to [3, 20] minus 3. Evaluates to 7 for f64, 4 for f32.
fn stirling_threshold<T: HypFloat>() -> T {
    let rln = T::from_f64(R1M5) * T::from_f64(T::MACH_DIGITS as f64);
    let fln = rln.min(T::from_f64(20.0)).max(T::from_f64(3.0)) - T::from_f64(3.0);
    let zm = T::from_f64(1.8) + T::from_f64(0.3875) * fln;
    zm.floor() + T::one()
}

/// Compute ln(Gamma(z)) for z > 0.
///
/// Arguments below the Stirling threshold are pushed upward with
/// Gamma(z+n) = z(z+1)...(z+n-1) * Gamma(z) and the product subtracted
/// back in log space.
pub(crate) fn gamln<T: HypFloat>(z: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);

    if !(z > zero) {
        return Err(Error::Domain);
    }

    // Recurrence shift into the asymptotic region.
    let zmin = stirling_threshold::<T>();
    let mut zs = z;
    let mut shift = one;
    while zs < zmin {
        shift = shift * zs;
        zs = zs + one;
    }

    // Stirling's series: S(z) = sum_k CF(k) * z^{-(2k-1)}, truncated once
    // a term drops below the first term scaled by the working tolerance.
    let wdtol = (T::from_f64(2.0) * T::MACH_EPSILON).max(T::from_f64(0.5e-18));
    let rz = one / zs;
    let first = T::from_f64(STIR_COEF[0]) * rz;
    let mut s = first;
    if rz >= wdtol {
        let rz2 = rz * rz;
        let cutoff = first * wdtol;
        let mut zp = rz;
        for cf in &STIR_COEF[1..] {
            zp = zp * rz2;
            let trm = T::from_f64(*cf) * zp;
            if trm.abs() < cutoff {
                break;
            }
            s = s + trm;
        }
    }

    // ln Gamma(z) = z(ln z - 1) + (ln(2 pi) - ln z)/2 + S(z), minus the
    // log of the recurrence product when a shift was applied.
    let lzs = zs.ln();
    let base = zs * (lzs - one) + half * (T::from_f64(LN2PI) - lzs) + s;
    if shift == one {
        Ok(base)
    } else {
        Ok(base - shift.ln())
    }
}

/// Compute (ln|Gamma(z)|, sign of Gamma(z)) for any real z.
///
/// Returns [`Error::Pole`] at z = 0, -1, -2, ...
pub(crate) fn gamln_sign<T: HypFloat>(z: T) -> Result<(T, T), Error> {
    let one = T::one();

    if z > T::zero() {
        return Ok((gamln(z)?, one));
    }
    if is_nonpos_int(z) {
        return Err(Error::Pole);
    }

    // Reflection: |Gamma(z)| = pi / (|sin(pi z)| * Gamma(1 - z)), and the
    // sign is the sign of sin(pi z) because Gamma(1 - z) > 0 here.
    let sp = sinpi(z);
    let magnitude = T::from_f64(LNPI) - sp.abs().ln() - gamln(one - z)?;
    let sign = if sp < T::zero() { -one } else { one };
    Ok((magnitude, sign))
}

/// Compute Gamma(z) for real z, signalling poles and overflow.
pub(crate) fn gamma<T: HypFloat>(z: T) -> Result<T, Error> {
    let (magnitude, sign) = gamln_sign(z)?;
    if magnitude >= T::exp_limit() {
        return Err(Error::Overflow);
    }
    Ok(sign * magnitude.exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqrt_pi() -> f64 {
        core::f64::consts::PI.sqrt()
    }

    #[test]
    fn gamln_small_integers() {
        // Gamma(1) = Gamma(2) = 1, Gamma(3) = 2, Gamma(7) = 720
        assert!(gamln(1.0_f64).unwrap().abs() < 1e-14);
        assert!(gamln(2.0_f64).unwrap().abs() < 1e-14);
        assert!((gamln(3.0_f64).unwrap() - 2.0_f64.ln()).abs() < 1e-14);
        assert!((gamln(7.0_f64).unwrap() - 720.0_f64.ln()).abs() < 1e-13);
    }

    #[test]
    fn gamln_half_integers() {
        // Gamma(0.5) = sqrt(pi); Gamma(5.5) = 4.5*3.5*2.5*1.5*0.5*sqrt(pi)
        let expected = 0.5 * core::f64::consts::PI.ln();
        assert!((gamln(0.5_f64).unwrap() - expected).abs() < 1e-14);

        let product: f64 = 4.5 * 3.5 * 2.5 * 1.5 * 0.5;
        let expected55 = product.ln() + expected;
        assert!((gamln(5.5_f64).unwrap() - expected55).abs() < 1e-13);
    }

    #[test]
    fn gamln_large_argument() {
        // ln Gamma(150) = ln(149!) = sum of ln k
        let val = gamln(150.0_f64).unwrap();
        let mut expected = 0.0_f64;
        for k in 1..150 {
            expected += (k as f64).ln();
        }
        assert!((val - expected).abs() / expected < 1e-14);
    }

    #[test]
    fn gamln_small_positive() {
        // Gamma(0.1) = 9.51350769866873...
        assert!((gamln(0.1_f64).unwrap() - 2.2527126517342055).abs() < 1e-13);
    }

    #[test]
    fn gamln_rejects_nonpositive() {
        assert_eq!(gamln(0.0_f64), Err(Error::Domain));
        assert_eq!(gamln(-1.5_f64), Err(Error::Domain));
    }

    #[test]
    fn sign_on_negative_axis() {
        // Gamma(-0.5) = -2 sqrt(pi): sign -1
        let (ln, sign) = gamln_sign(-0.5_f64).unwrap();
        assert_eq!(sign, -1.0);
        assert!((ln - (2.0 * sqrt_pi()).ln()).abs() < 1e-13);

        // Gamma(-1.5) = 4 sqrt(pi)/3: sign +1
        let (ln, sign) = gamln_sign(-1.5_f64).unwrap();
        assert_eq!(sign, 1.0);
        assert!((ln - (4.0 * sqrt_pi() / 3.0).ln()).abs() < 1e-13);

        // Gamma(-2.5) = -8 sqrt(pi)/15: sign -1 again
        let (_, sign) = gamln_sign(-2.5_f64).unwrap();
        assert_eq!(sign, -1.0);
    }

    #[test]
    fn poles_are_signalled() {
        assert_eq!(gamln_sign(0.0_f64), Err(Error::Pole));
        assert_eq!(gamln_sign(-1.0_f64), Err(Error::Pole));
        assert_eq!(gamln_sign(-40.0_f64), Err(Error::Pole));
        assert_eq!(gamma(-7.0_f64), Err(Error::Pole));
    }

    #[test]
    fn gamma_recurrence() {
        // Gamma(z+1) = z * Gamma(z) across the negative axis
        let g_m05 = gamma(-0.5_f64).unwrap();
        let g_05 = gamma(0.5_f64).unwrap();
        assert!((g_m05 * (-0.5) - g_05).abs() < 1e-14);

        let g_m15 = gamma(-1.5_f64).unwrap();
        assert!((g_m15 * (-1.5) - g_m05).abs() < 1e-13);

        assert!((gamma(5.0_f64).unwrap() - 24.0).abs() < 1e-11);
    }

    #[test]
    fn gamma_overflow() {
        // Gamma overflows f64 shortly past 171
        assert_eq!(gamma(200.0_f64), Err(Error::Overflow));
    }

    #[test]
    fn gamln_f32() {
        let val = gamln(3.0_f32).unwrap();
        assert!((val - 2.0_f32.ln()).abs() < 1e-6);
        let (ln, sign) = gamln_sign(-0.5_f32).unwrap();
        assert_eq!(sign, -1.0);
        assert!((ln - (2.0 * core::f32::consts::PI.sqrt()).ln()).abs() < 1e-5);
    }
}

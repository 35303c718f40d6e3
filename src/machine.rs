//! Machine constants and the `HypFloat` trait.
//!
//! Constants follow the Fortran I1MACH/D1MACH conventions of the
//! SLATEC-descended special-function codes.

use num_traits::Float;

/// Floating-point trait for hypergeometric evaluation.
///
/// Implemented for `f64` and `f32`. Provides machine constants and the
/// derived thresholds used by the evaluation strategies.
pub trait HypFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon (D1MACH(3)).
    const MACH_EPSILON: Self;
    /// Smallest positive normal number (D1MACH(1)).
    const MACH_TINY: Self;
    /// Largest representable number (D1MACH(2)).
    const MACH_HUGE: Self;
    /// Number of binary digits in the mantissa (I1MACH(14)).
    const MACH_DIGITS: i32;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it truncates via `as f32`.
    /// All algorithm constants originate as f64 literals, so this
    /// conversion always succeeds for the supported types.
    fn from_f64(x: f64) -> Self;

    /// Default relative convergence tolerance: 5 * MACH_EPSILON.
    fn tol() -> Self;
    /// Largest w for which exp(w) is representable: ln(MACH_HUGE).
    fn exp_limit() -> Self;
    /// Magnitude bound for series terms and sums: MACH_HUGE / 16.
    fn term_limit() -> Self;
}

impl HypFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;
    const MACH_DIGITS: i32 = 53;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn tol() -> f64 {
        1.1102230246251565e-15
    } // 5 * MACH_EPSILON
    #[inline]
    fn exp_limit() -> f64 {
        709.782712893384
    } // ln(MACH_HUGE)
    #[inline]
    fn term_limit() -> f64 {
        1.1235582092889473e+307
    } // MACH_HUGE / 16
}

// Derived constants are written at full f64 precision to document the
// exact formula results; the compiler rounds to f32 at compile time.
#[allow(clippy::excessive_precision)]
impl HypFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MACH_HUGE: f32 = 3.4028235e+38;
    const MACH_DIGITS: i32 = 24;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn tol() -> f32 {
        5.9604645e-7
    } // 5 * MACH_EPSILON
    #[inline]
    fn exp_limit() -> f32 {
        88.72284
    } // ln(MACH_HUGE)
    #[inline]
    fn term_limit() -> f32 {
        2.1267647e+37
    } // MACH_HUGE / 16
}

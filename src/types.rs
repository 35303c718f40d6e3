//! Core types for hypergeometric evaluation.

use core::fmt;

use crate::machine::HypFloat;

/// Error type for hypergeometric evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Parameters lie outside every defined branch (x on or beyond the
    /// branch cut with a non-terminating series, or a non-finite input).
    Domain,
    /// A required denominator (c, or a gamma argument in the
    /// transformation path) is a non-positive integer with no cancellation.
    Pole,
    /// Iteration ceiling reached without meeting the tolerance criterion.
    NoConvergence,
    /// An intermediate term or the final result exceeds the representable
    /// range.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain => {
                write!(f, "domain error: argument outside every defined branch")
            }
            Error::Pole => {
                write!(f, "pole: denominator parameter is a non-positive integer")
            }
            Error::NoConvergence => {
                write!(
                    f,
                    "convergence failure: iteration ceiling reached before tolerance"
                )
            }
            Error::Overflow => {
                write!(f, "overflow: magnitude exceeds representable range")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Evaluation controls: relative tolerance and iteration ceiling.
///
/// The defaults come from the machine constants of [`HypFloat`]; tests
/// probing edge-of-convergence behavior can tighten or loosen both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T: HypFloat> {
    /// Relative convergence tolerance for series terms and continued
    /// fraction convergents.
    pub rel_tol: T,
    /// Iteration ceiling shared by the series and continued-fraction
    /// loops.
    pub max_iter: usize,
}

/// Default iteration ceiling.
pub(crate) const DEFAULT_MAX_ITER: usize = 3000;

impl<T: HypFloat> Default for Config<T> {
    fn default() -> Self {
        Config {
            rel_tol: T::tol(),
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// Evaluation strategy selected by the domain dispatcher.
///
/// Exactly one variant is chosen per call; the variants are alternatives,
/// not pipeline stages. See the rule ordering in `dispatch::classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Result is 1 exactly (x = 0, or a zero upper parameter).
    One,
    /// a = c or b = c: F collapses to the binomial (1-x)^(-exponent),
    /// with the surviving upper parameter as exponent.
    Binomial,
    /// Terminating series: a or b is a non-positive integer, summation
    /// is exact for any x.
    Polynomial,
    /// Direct power series at x, |x| < 0.5.
    Series,
    /// Linear transformation to argument 1-x, 0.5 <= x < 1.
    Reflect,
    /// Gauss continued fraction, 0.5 <= x < 1 with c-a-b near an integer.
    Cfrac,
    /// Pfaff connection formula to argument x/(x-1), x <= -0.5.
    Transform,
    /// x = 1 with c-a-b > 0: Gauss summation limit.
    GaussLimit,
    /// c is a non-positive integer with no truncation before the pole.
    PoleC,
    /// No defined branch (x on or past the cut, non-finite input).
    OutOfDomain,
}

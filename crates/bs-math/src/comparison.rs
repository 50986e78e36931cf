//! Floating-point comparison utilities.

use bs_core::Real;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Relative error of `a` against the reference value `b`.
///
/// The denominator is floored at 1 so that references near zero do not blow
/// the ratio up: `|a - b| / max(1, |b|)`.
#[inline]
pub fn relative_error(a: Real, b: Real) -> Real {
    (a - b).abs() / b.abs().max(1.0)
}

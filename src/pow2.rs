//! Exact powers of two.
//!
//! Pure table lookups after range normalization; no rounding anywhere in
//! the representable range. Exponents below `-1074` saturate to `+0.0`,
//! exponents above `1023` saturate to `+Infinity`.

use thiserror::Error;

use crate::table::{EXPONENT_OFFSET, MAX_EXPONENT, MIN_EXPONENT, POW2};

/// Error returned by [`pow2`] when the exponent has a fractional part or
/// is not finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("exponent must be an integer-valued number")]
pub struct NonIntegerExponent;

/// Exact `2^exponent`.
///
/// Saturates: `0.0` below `-1074`, `+Infinity` above `1023`. Every
/// in-range result is the exact power of two.
#[inline(always)]
pub fn pow2i(exponent: i32) -> f64 {
    if exponent < MIN_EXPONENT {
        return 0.0;
    }
    if exponent > MAX_EXPONENT {
        return f64::INFINITY;
    }
    POW2[(exponent + EXPONENT_OFFSET) as usize]
}

/// Exact `2^exponent` for an integer-valued `f64` exponent.
///
/// The exponent may lie far outside `[-1074, 1023]`; out-of-range values
/// saturate like [`pow2i`]. `-0.0` is accepted and yields `1.0`, same as
/// `+0.0`.
///
/// # Errors
///
/// [`NonIntegerExponent`] if `exponent` has a nonzero fractional part, is
/// NaN, or is infinite.
pub fn pow2(exponent: f64) -> Result<f64, NonIntegerExponent> {
    if !is_integer_valued(exponent) {
        return Err(NonIntegerExponent);
    }
    // Saturating cast: an exponent past i32's range is already past the
    // representable exponent range in the same direction.
    Ok(pow2i(exponent as i32))
}

// Fraction test on the bit pattern, in the style of a bit-level floor:
// no mantissa bits may survive below the binary point.
#[inline(always)]
fn is_integer_valued(x: f64) -> bool {
    let u = x.to_bits();
    let e = ((u >> 52) & 0x7ff) as i32;
    if e == 0x7ff {
        return false; // NaN or infinity
    }
    let j0 = e - 1023;
    if j0 < 0 {
        // |x| < 1: only +-0 qualifies
        return (u << 1) == 0;
    }
    if j0 >= 52 {
        return true;
    }
    (u & ((1u64 << (52 - j0)) - 1)) == 0
}

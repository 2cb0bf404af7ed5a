//! Exact floored base-2 logarithm.
//!
//! Two interchangeable strategies for positive finite inputs: a binary
//! search over the power-of-two table, and a direct read of the IEEE 754
//! exponent field. They agree exactly on the whole positive finite domain.
//! [`floor_log2`] is the total entry point that screens special values
//! before delegating.

use crate::table::{EXPONENT_OFFSET, POW2, TABLE_LEN};

const EXP_BIAS: i32 = 1023;
const TWO52: f64 = f64::from_bits(0x4330_0000_0000_0000); // 2^52

/// `floor(log2(x))` for positive finite `x`, by binary search over the
/// power-of-two table.
///
/// Comparison-only; needs no access to the bit representation. Kept as
/// the cross-check for [`floor_log2_positive_finite_fast`] and for hosts
/// where bit reinterpretation is off the table.
///
/// The positive-finite precondition is not checked; other inputs return
/// garbage.
pub fn floor_log2_positive_finite_portable(x: f64) -> i32 {
    // Largest a with POW2[a] <= x.
    let mut a = 0usize;
    let mut c = TABLE_LEN;
    while c - a >= 2 {
        let b = (a + c) >> 1;
        if x < POW2[b] {
            c = b;
        } else {
            a = b;
        }
    }
    a as i32 - EXPONENT_OFFSET
}

/// `floor(log2(x))` for positive finite `x`, read from the exponent field.
///
/// The positive-finite precondition is not checked; other inputs return
/// garbage.
#[inline(always)]
pub fn floor_log2_positive_finite_fast(x: f64) -> i32 {
    let e = ((x.to_bits() >> 52) & 0x7ff) as i32;
    if e != 0 {
        return e - EXP_BIAS;
    }
    // Subnormal: scaling by 2^52 is exact and lands in the normal range;
    // the extra 52 comes back off with the bias.
    let e = (((x * TWO52).to_bits() >> 52) & 0x7ff) as i32;
    e - (EXP_BIAS + 52)
}

/// `floor(log2(x))` for positive finite `x`.
///
/// Same contract as [`floor_log2_positive_finite_fast`], which it resolves
/// to: bit reinterpretation is a language primitive here, so the fast
/// strategy is always available.
#[inline(always)]
pub fn floor_log2_positive_finite(x: f64) -> i32 {
    floor_log2_positive_finite_fast(x)
}

/// `floor(log2(x))` with IEEE 754 special-value semantics.
///
/// - negative `x` or NaN: NaN
/// - `+0.0` and `-0.0`: `-Infinity`
/// - `+Infinity`: `+Infinity`
/// - positive finite `x`: the exact floored exponent
///
/// Never errors.
#[inline]
pub fn floor_log2(x: f64) -> f64 {
    if x < 0.0 || x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }
    floor_log2_positive_finite(x) as f64
}

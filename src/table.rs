//! Power-of-two table covering every finite binary64 exponent.
//!
//! Index `i` holds `2^(i - 1074)`, from the smallest positive subnormal
//! (`2^-1074`) up to `2^1023`. Built at compile time by repeated doubling;
//! doubling is exact at every step, including across the subnormal-to-normal
//! transition, so each entry is the exact power of two.

/// Smallest exponent whose power of two is finite and nonzero in binary64.
pub(crate) const MIN_EXPONENT: i32 = -1074;

/// Largest exponent whose power of two is finite in binary64.
pub(crate) const MAX_EXPONENT: i32 = 1023;

/// Shift from exponent to table index.
pub(crate) const EXPONENT_OFFSET: i32 = 1074;

pub(crate) const TABLE_LEN: usize = (MAX_EXPONENT + EXPONENT_OFFSET + 1) as usize;

pub(crate) static POW2: [f64; TABLE_LEN] = build();

const fn build() -> [f64; TABLE_LEN] {
    let mut table = [0.0f64; TABLE_LEN];
    table[0] = f64::from_bits(1); // 2^-1074
    let mut i = 1;
    while i < TABLE_LEN {
        table[i] = table[i - 1] * 2.0;
        i += 1;
    }
    table
}

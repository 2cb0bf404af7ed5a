#![no_std]

//! Exact `2^n` and `floor(log2(x))` over IEEE 754 binary64.
//!
//! The precision of a host `pow`/`log2` is implementation-defined; when a
//! caller needs the exact power of two or the exact floored exponent of a
//! double, these functions compute them from a precomputed table and the
//! raw bit layout instead.

#[cfg(test)]
extern crate std;

mod floorlog2;
mod pow2;
mod table;

pub use floorlog2::{
    floor_log2, floor_log2_positive_finite, floor_log2_positive_finite_fast,
    floor_log2_positive_finite_portable,
};
pub use pow2::{pow2, pow2i, NonIntegerExponent};

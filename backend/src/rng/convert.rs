//! Output transforms
//!
//! Pure functions applied to one raw state word. Kept separate from the
//! generator so the range guarantees can be checked against any `u64`,
//! not just the words a particular seed happens to produce.

use super::params::{
    LL, MASK_B, MASK_C, SCALE_CLOSED, SCALE_HALF_OPEN, SCALE_OPEN, SS, TT, UU,
};

/// Tempering permutation (a bijection on `u64`)
#[inline]
pub fn temper(mut x: u64) -> u64 {
    x ^= x >> UU;
    x ^= (x << SS) & MASK_B;
    x ^= (x << TT) & MASK_C;
    x ^= x >> LL;
    x
}

/// Map a tempered word onto [0.0, 1.0]
#[inline]
pub fn to_real_closed(x: u64) -> f64 {
    x as f64 * SCALE_CLOSED
}

/// Map a tempered word onto [0.0, 1.0)
#[inline]
pub fn to_real_half_open(x: u64) -> f64 {
    x as f64 * SCALE_HALF_OPEN
}

/// Map a tempered word onto (0.0, 1.0) using its top 52 bits
///
/// `(x >> 12) + 0.5` is exact in a double, so the result never rounds onto
/// either endpoint.
#[inline]
pub fn to_real_open(x: u64) -> f64 {
    ((x >> 12) as f64 + 0.5) * SCALE_OPEN
}

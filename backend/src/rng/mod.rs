//! Deterministic random number generation
//!
//! 64-bit Mersenne Twister (five-term recurrence, period 2^19937-1).
//! CRITICAL: the output stream must match the reference algorithm bit for
//! bit. The conformance tests pin it against known seed → output vectors.

mod checkpoint;
mod convert;
mod mt64;
mod params;

pub use checkpoint::{compute_checksum, StateError, StateSnapshot};
pub use convert::{temper, to_real_closed, to_real_half_open, to_real_open};
pub use mt64::Mt64;
pub use params::{DEFAULT_SEED, M0, M1, M2, NN, UNSEEDED};

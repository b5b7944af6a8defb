//! Algorithm parameters
//!
//! Every value here is part of the output contract. Changing any of them
//! produces a different (but plausible-looking) stream, so the conformance
//! tests pin the stream rather than these numbers.

/// Number of 64-bit words in the state vector
pub const NN: usize = 312;

/// Tap offsets used by the five-term recurrence
pub const M0: usize = 63;
pub const M1: usize = 151;
pub const M2: usize = 224;

/// Twist matrix constant, xored in when the dropped bit is 1
pub const MATRIX_A: u64 = 0xB381_5B62_4FC8_2E2F;

/// Bits >= 31 of a word
pub const UMASK: u64 = 0xFFFF_FFFF_8000_0000;
/// Lowest 31 bits of a word
pub const LMASK: u64 = 0x7FFF_FFFF;

// Tempering
pub const MASK_B: u64 = 0x599C_FCBF_CA66_0000;
pub const MASK_C: u64 = 0xFFFA_AFFE_0000_0000;
pub const UU: u32 = 26;
pub const SS: u32 = 17;
pub const TT: u32 = 33;
pub const LL: u32 = 39;

// Seeding
pub const SEED_MULTIPLIER: u64 = 9_797_719_289_936_477;
pub const SEED_INCREMENT: u64 = 1_234_567;
pub const SEED_POSITION_STEP: u64 = 789;

/// Seed used when output is requested before any explicit `seed()`
pub const DEFAULT_SEED: u64 = 987_654_321;

/// Cursor value of a generator that has never been seeded
pub const UNSEEDED: usize = NN + 1;

/// Scale mapping `u64::MAX` exactly onto 1.0 (this is 2^-64)
pub const SCALE_CLOSED: f64 = 5.421010862427522170e-20;
/// Largest double below 2^-64, so `u64::MAX` maps strictly below 1.0
pub const SCALE_HALF_OPEN: f64 = 5.421010862427521568e-20;
/// 2^-52, one step of a 52-bit mantissa
pub const SCALE_OPEN: f64 = 2.220446049250313081e-16;

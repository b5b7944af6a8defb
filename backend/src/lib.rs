//! MT64 Core - Rust Engine
//!
//! 64-bit Mersenne Twister (five-term recurrence) with bit-exact output.
//!
//! # Architecture
//!
//! - **rng**: State store, seeding, twist, tempering and real conversions
//! - **rng checkpoint**: Snapshot/restore of generator state
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same stream, on every platform
//! 2. An unseeded generator behaves as if seeded with 987654321
//! 3. Real outputs never leave their documented interval
//! 4. No internal synchronization: one `&mut` caller at a time

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{Mt64, StateError, StateSnapshot, DEFAULT_SEED};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mt64_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<ffi::generator::PyMt64>()?;
    Ok(())
}

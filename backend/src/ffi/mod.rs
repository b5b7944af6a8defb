//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: one class, one method per generator operation
//! 2. **Simple types**: integers, floats and JSON strings only
//! 3. **Safe errors**: snapshot errors become Python `ValueError`
//! 4. **No references**: Python owns its generator; nothing is shared

pub mod generator;

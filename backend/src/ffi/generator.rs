//! PyO3 wrapper for Mt64

use pyo3::prelude::*;

use crate::rng::{Mt64, StateSnapshot};

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from mt64_core_rs import Mt64
///
/// rng = Mt64()
/// rng.seed(12345)
/// print(rng.next_uint64(), rng.next_real_open())
///
/// saved = rng.snapshot_json()
/// resumed = Mt64.from_snapshot_json(saved)
/// ```
#[pyclass(name = "Mt64")]
pub struct PyMt64 {
    inner: Mt64,
}

#[pymethods]
impl PyMt64 {
    /// Create a generator, seeded if `seed` is given
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => Mt64::with_seed(seed),
            None => Mt64::new(),
        };
        PyMt64 { inner }
    }

    fn seed(&mut self, value: u64) {
        self.inner.seed(value);
    }

    fn advance(&mut self) {
        self.inner.advance();
    }

    fn next_uint64(&mut self) -> u64 {
        self.inner.next_uint64()
    }

    fn next_real_closed(&mut self) -> f64 {
        self.inner.next_real_closed()
    }

    fn next_real_half_open(&mut self) -> f64 {
        self.inner.next_real_half_open()
    }

    fn next_real_open(&mut self) -> f64 {
        self.inner.next_real_open()
    }

    /// Serialize the current state to a JSON string
    ///
    /// # Errors
    ///
    /// Raises ValueError if serialization fails
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner
            .snapshot()
            .to_json()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Rebuild a generator from `snapshot_json` output
    ///
    /// # Errors
    ///
    /// Raises ValueError if:
    /// - JSON is malformed
    /// - Word count or cursor is invalid
    /// - Checksum does not match
    #[staticmethod]
    fn from_snapshot_json(json: &str) -> PyResult<Self> {
        let inner = StateSnapshot::from_json(json)
            .and_then(Mt64::restore)
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Failed to restore generator: {}",
                    e
                ))
            })?;
        Ok(PyMt64 { inner })
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_matches_rust_generator() {
        let mut py_rng = PyMt64::new(Some(12345));
        let mut rng = Mt64::with_seed(12345);

        assert_eq!(py_rng.next_uint64(), rng.next_uint64());
        assert_eq!(py_rng.next_real_closed(), rng.next_real_closed());
        assert_eq!(py_rng.next_real_half_open(), rng.next_real_half_open());
        assert_eq!(py_rng.next_real_open(), rng.next_real_open());
    }

    #[test]
    fn test_wrapper_unseeded_uses_default_stream() {
        let mut py_rng = PyMt64::new(None);
        assert_eq!(py_rng.next_uint64(), 0xe517_92c8_3691_2ea6);
    }

    #[test]
    fn test_wrapper_snapshot_round_trip() {
        let mut py_rng = PyMt64::new(Some(7));
        py_rng.advance();
        py_rng.next_uint64();

        let json = py_rng.snapshot_json().unwrap();
        let mut resumed = PyMt64::from_snapshot_json(&json).unwrap();
        assert_eq!(py_rng.next_uint64(), resumed.next_uint64());
    }

    #[test]
    fn test_wrapper_rejects_bad_snapshot() {
        assert!(PyMt64::from_snapshot_json("{\"words\": []}").is_err());
    }
}

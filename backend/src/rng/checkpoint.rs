//! Checkpoint - Save/Restore Generator State
//!
//! Captures the full state vector and cursor so a generator can be paused
//! and resumed mid-stream. The snapshot format is specific to this crate;
//! the algorithm itself defines none.
//!
//! # Critical Invariants
//!
//! - **Continuity**: a restored generator emits exactly the values the
//!   original would have emitted next
//! - **Integrity**: the SHA256 checksum must match the words and cursor
//! - **Shape**: exactly `NN` words, cursor in `0..=NN` or the unseeded marker

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use super::mt64::Mt64;
use super::params::{NN, UNSEEDED};

/// Errors raised while restoring a generator from a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("State vector has {actual} words, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Cursor {cursor} out of range (max 312, or 313 for unseeded)")]
    CursorOutOfRange { cursor: usize },

    #[error("Checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("State vector is all zeros and would only ever produce zeros")]
    DegenerateState,

    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),
}

/// Serializable copy of a generator's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Raw state vector (untempered)
    pub words: Vec<u64>,

    /// Words consumed from the current generation
    pub cursor: usize,

    /// SHA256 of cursor and words, lowercase hex
    pub checksum: String,
}

impl StateSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(|e| StateError::Serialization(e.to_string()))
    }

    /// Parse from a JSON string (shape only; use [`Mt64::restore`] to validate)
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        serde_json::from_str(json).map_err(|e| StateError::Serialization(e.to_string()))
    }
}

/// Compute the snapshot checksum
///
/// Hashes the cursor followed by every word, all as little-endian `u64`.
pub fn compute_checksum(words: &[u64], cursor: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update((cursor as u64).to_le_bytes());
    for word in words {
        hasher.update(word.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

impl Mt64 {
    /// Capture the current state
    ///
    /// # Example
    /// ```
    /// use mt64_core_rs::Mt64;
    ///
    /// let mut rng = Mt64::with_seed(12345);
    /// rng.next_uint64();
    ///
    /// let snapshot = rng.snapshot();
    /// let mut resumed = Mt64::restore(snapshot).unwrap();
    /// assert_eq!(rng.next_uint64(), resumed.next_uint64());
    /// ```
    pub fn snapshot(&self) -> StateSnapshot {
        let words = self.words().to_vec();
        let cursor = self.cursor();
        let checksum = compute_checksum(&words, cursor);
        StateSnapshot {
            words,
            cursor,
            checksum,
        }
    }

    /// Rebuild a generator from a snapshot, validating it first
    ///
    /// # Errors
    /// - `WrongLength` if the word count is not `NN`
    /// - `CursorOutOfRange` if the cursor is above `NN` and not the unseeded marker
    /// - `ChecksumMismatch` if the snapshot was altered
    /// - `DegenerateState` if a seeded state is all zeros
    pub fn restore(snapshot: StateSnapshot) -> Result<Self, StateError> {
        let words: [u64; NN] =
            snapshot
                .words
                .as_slice()
                .try_into()
                .map_err(|_| StateError::WrongLength {
                    expected: NN,
                    actual: snapshot.words.len(),
                })?;

        if snapshot.cursor > NN && snapshot.cursor != UNSEEDED {
            return Err(StateError::CursorOutOfRange {
                cursor: snapshot.cursor,
            });
        }

        let actual = compute_checksum(&words, snapshot.cursor);
        if actual != snapshot.checksum {
            return Err(StateError::ChecksumMismatch {
                expected: snapshot.checksum,
                actual,
            });
        }

        if snapshot.cursor == UNSEEDED {
            debug!("restored unseeded generator");
            return Ok(Mt64::new());
        }

        if words.iter().all(|&w| w == 0) {
            return Err(StateError::DegenerateState);
        }

        debug!(cursor = snapshot.cursor, "restored generator from snapshot");
        Ok(Mt64::from_parts(words, snapshot.cursor))
    }
}

impl From<Mt64> for StateSnapshot {
    fn from(rng: Mt64) -> Self {
        rng.snapshot()
    }
}

impl TryFrom<StateSnapshot> for Mt64 {
    type Error = StateError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        Mt64::restore(snapshot)
    }
}

//! Storage-specific error type.

use scoreboard_domain::error::ScoreboardError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding the store lock.
    #[error("match store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for ScoreboardError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

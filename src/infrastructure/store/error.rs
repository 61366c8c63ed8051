//! Store error types.

use thiserror::Error;

/// Errors raised by [`KeyValueStore`](super::KeyValueStore) implementations
/// and by the JSON document codec layered on top of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store is unreachable or rejected the operation.
    ///
    /// Fatal for the in-flight request; callers do not retry.
    #[error("Store unavailable: {message}")]
    Unavailable {
        /// Detailed error message.
        message: String,
    },

    /// A stored document could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Detailed error message.
        message: String,
    },
}

impl StoreError {
    /// Creates a new `Unavailable` error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a new `Serialization` error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an `Unavailable` error.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Returns `true` if this is a `Serialization` error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(error: redis::RedisError) -> Self {
        Self::Unavailable {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON: {error}"),
        }
    }
}

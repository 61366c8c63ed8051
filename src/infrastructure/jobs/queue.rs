//! Job queue port and its error types.

use async_trait::async_trait;
use thiserror::Error;

use super::record::{JobCommand, JobId, JobRecord};

/// Errors raised by [`JobQueue`] implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueError {
    /// No job record exists for the given id.
    #[error("Job with id '{0}' not found")]
    JobNotFound(JobId),

    /// The queue's backing store is unreachable or rejected the operation.
    #[error("Queue unavailable: {message}")]
    Unavailable {
        /// Detailed error message.
        message: String,
    },

    /// A job record could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Detailed error message.
        message: String,
    },
}

impl QueueError {
    /// Creates a new `Unavailable` error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a `JobNotFound` error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::JobNotFound(_))
    }
}

impl From<crate::infrastructure::store::StoreError> for QueueError {
    fn from(error: crate::infrastructure::store::StoreError) -> Self {
        use crate::infrastructure::store::StoreError;
        match error {
            StoreError::Unavailable { message } => Self::Unavailable { message },
            StoreError::Serialization { message } => Self::Serialization { message },
        }
    }
}

impl From<redis::RedisError> for QueueError {
    fn from(error: redis::RedisError) -> Self {
        Self::Unavailable {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for QueueError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON: {error}"),
        }
    }
}

/// Port for the FIFO job queue and its status records.
///
/// One producer (the API layer), any number of competing consumers — the
/// pop in [`dequeue`](JobQueue::dequeue) must be atomic so no job is
/// processed twice.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Creates a `queued` record for `command`, appends it to the tail of
    /// the queue, and returns its id. Never blocks the caller.
    async fn enqueue(&self, command: JobCommand) -> Result<JobId, QueueError>;

    /// Returns the current snapshot of a job record.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::JobNotFound` if the id is unknown.
    async fn fetch(&self, id: &JobId) -> Result<JobRecord, QueueError>;

    /// Pops the oldest queued job, blocking until one is available.
    async fn dequeue(&self) -> Result<JobRecord, QueueError>;

    /// Persists an updated job record (worker-side status transitions).
    async fn update(&self, record: &JobRecord) -> Result<(), QueueError>;
}

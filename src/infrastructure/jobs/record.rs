//! Job records and the commands they carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// JobId
// =============================================================================

/// Opaque unique identifier assigned at enqueue time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// JobCommand
// =============================================================================

/// Commands that can cross the queue boundary.
///
/// A closed, serializable set: no function values on the wire. The worker
/// dispatches on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobCommand {
    /// Mark every incomplete item in the list as completed.
    CompleteAll { todo_list_id: u64 },
}

// =============================================================================
// JobStatus
// =============================================================================

/// Job lifecycle: `queued -> started -> (finished | failed)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Started,
    Finished,
    Failed,
}

impl JobStatus {
    /// Whether the job has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Queued => "queued",
            Self::Started => "started",
            Self::Finished => "finished",
            Self::Failed => "failed",
        };
        write!(formatter, "{label}")
    }
}

// =============================================================================
// JobRecord
// =============================================================================

/// A job's current snapshot: status plus outcome and timestamps.
///
/// Created at enqueue time; mutated only by the worker, through the
/// transition methods. Records are never deleted by the application —
/// expiration is a store-level concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub command: JobCommand,
    pub status: JobStatus,
    /// Structured payload, present only once the job finished.
    pub result: Option<serde_json::Value>,
    /// Failure description, present only once the job failed.
    pub error: Option<String>,
    pub enqueued_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl JobRecord {
    /// Creates a `queued` record with a fresh id.
    #[must_use]
    pub fn new(command: JobCommand) -> Self {
        Self {
            id: JobId::generate(),
            command,
            status: JobStatus::Queued,
            result: None,
            error: None,
            enqueued_at: Utc::now(),
            started_at: None,
            ended_at: None,
        }
    }

    /// Marks the job as picked up by the worker.
    pub fn mark_started(&mut self) {
        self.status = JobStatus::Started;
        self.started_at = Some(Utc::now());
    }

    /// Marks the job as finished with its result payload.
    pub fn mark_finished(&mut self, result: serde_json::Value) {
        self.status = JobStatus::Finished;
        self.result = Some(result);
        self.ended_at = Some(Utc::now());
    }

    /// Marks the job as failed with an error description.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = JobStatus::Failed;
        self.error = Some(error.into());
        self.ended_at = Some(Utc::now());
    }
}

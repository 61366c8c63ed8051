//! Process-local in-memory job queue.
//!
//! Pending ids live in a `VecDeque` behind a mutex; a `Notify` wakes the
//! worker when work arrives. Locks are never held across an `.await` point.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::queue::{JobQueue, QueueError};
use super::record::{JobCommand, JobId, JobRecord};

#[derive(Debug, Default)]
struct QueueState {
    pending: VecDeque<JobId>,
    records: HashMap<String, JobRecord>,
}

/// In-memory [`JobQueue`] implementation.
#[derive(Debug, Default)]
pub struct InMemoryJobQueue {
    state: Mutex<QueueState>,
    notify: Notify,
}

impl InMemoryJobQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, QueueState>, QueueError> {
        self.state
            .lock()
            .map_err(|_| QueueError::unavailable("queue mutex poisoned"))
    }

    fn try_pop(&self) -> Result<Option<JobRecord>, QueueError> {
        let mut state = self.lock()?;
        while let Some(id) = state.pending.pop_front() {
            if let Some(record) = state.records.get(id.as_str()).cloned() {
                return Ok(Some(record));
            }
            tracing::warn!("Dropping pending job '{id}' with no record");
        }
        Ok(None)
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn enqueue(&self, command: JobCommand) -> Result<JobId, QueueError> {
        let record = JobRecord::new(command);
        let id = record.id.clone();
        {
            let mut state = self.lock()?;
            state.records.insert(id.as_str().to_string(), record);
            state.pending.push_back(id.clone());
        }
        self.notify.notify_one();
        Ok(id)
    }

    async fn fetch(&self, id: &JobId) -> Result<JobRecord, QueueError> {
        let state = self.lock()?;
        state
            .records
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| QueueError::JobNotFound(id.clone()))
    }

    async fn dequeue(&self) -> Result<JobRecord, QueueError> {
        loop {
            if let Some(record) = self.try_pop()? {
                return Ok(record);
            }
            self.notify.notified().await;
        }
    }

    async fn update(&self, record: &JobRecord) -> Result<(), QueueError> {
        let mut state = self.lock()?;
        state
            .records
            .insert(record.id.as_str().to_string(), record.clone());
        Ok(())
    }
}

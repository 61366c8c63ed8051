//! Redis-backed job queue adapter.
//!
//! Pending job ids live in a Redis list (`LPUSH`/`BRPOP`, so the pop is
//! atomic across competing workers); each job record is a JSON document
//! under its own key. The queue uses its own logical database, separate
//! from application data.

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::infrastructure::store::RedisConnection;

use super::queue::{JobQueue, QueueError};
use super::record::{JobCommand, JobId, JobRecord};

const PENDING_KEY: &str = "jobs:pending";

/// `BRPOP` wait per round; bounded so the worker's shutdown check
/// interleaves with the blocking wait.
const DEQUEUE_WAIT_SECONDS: f64 = 5.0;

/// Redis-backed [`JobQueue`] implementation.
#[derive(Debug, Clone)]
pub struct RedisJobQueue {
    connection: RedisConnection,
}

impl RedisJobQueue {
    #[must_use]
    pub const fn new(connection: RedisConnection) -> Self {
        Self { connection }
    }

    fn job_key(&self, id: &JobId) -> String {
        self.connection.format_key(&format!("job:{id}"))
    }
}

#[async_trait]
impl JobQueue for RedisJobQueue {
    async fn enqueue(&self, command: JobCommand) -> Result<JobId, QueueError> {
        let record = JobRecord::new(command);
        let id = record.id.clone();
        let data = serde_json::to_string(&record)?;

        let mut connection = self.connection.get_async_connection().await?;
        let _: () = connection.set(self.job_key(&id), data).await?;
        let _: () = connection
            .lpush(self.connection.format_key(PENDING_KEY), id.as_str())
            .await?;
        Ok(id)
    }

    async fn fetch(&self, id: &JobId) -> Result<JobRecord, QueueError> {
        let mut connection = self.connection.get_async_connection().await?;
        let data: Option<String> = connection.get(self.job_key(id)).await?;
        match data {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Err(QueueError::JobNotFound(id.clone())),
        }
    }

    async fn dequeue(&self) -> Result<JobRecord, QueueError> {
        let pending_key = self.connection.format_key(PENDING_KEY);
        loop {
            let mut connection = self.connection.get_async_connection().await?;
            let popped: Option<(String, String)> = connection
                .brpop(&pending_key, DEQUEUE_WAIT_SECONDS)
                .await?;
            let Some((_, id)) = popped else {
                continue;
            };

            match self.fetch(&JobId::from(id)).await {
                Ok(record) => return Ok(record),
                Err(QueueError::JobNotFound(id)) => {
                    tracing::warn!("Dropping pending job '{id}' with no record");
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn update(&self, record: &JobRecord) -> Result<(), QueueError> {
        let data = serde_json::to_string(record)?;
        let mut connection = self.connection.get_async_connection().await?;
        let _: () = connection.set(self.job_key(&record.id), data).await?;
        Ok(())
    }
}

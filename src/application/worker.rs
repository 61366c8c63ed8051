//! Background worker consuming the job queue.
//!
//! One job at a time, in enqueue order. Task-level failures are recorded on
//! the job record and never crash the loop; only shutdown stops it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::infrastructure::jobs::{JobCommand, JobQueue, JobRecord};
use crate::infrastructure::store::StoreError;

use super::errors::ServiceError;
use super::todo_items::TodoItemService;

/// Single-consumer job worker.
pub struct Worker {
    queue: Arc<dyn JobQueue>,
    items: TodoItemService,
}

impl Worker {
    #[must_use]
    pub fn new(queue: Arc<dyn JobQueue>, items: TodoItemService) -> Self {
        Self { queue, items }
    }

    /// Runs the consume loop until the shutdown channel flips to `true` or
    /// its sender is dropped.
    ///
    /// The dequeue blocks until work is available; shutdown is checked
    /// between jobs, so an in-flight job always runs to completion.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!("Worker started; waiting for jobs");
        loop {
            if *shutdown.borrow() {
                break;
            }

            let record = tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        // Sender dropped: nobody can ask us to stop anymore.
                        break;
                    }
                    continue;
                }
                dequeued = self.queue.dequeue() => match dequeued {
                    Ok(record) => record,
                    Err(error) => {
                        tracing::error!("Failed to dequeue job: {error}");
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        continue;
                    }
                },
            };

            self.process(record).await;
        }
        tracing::info!("Worker stopped");
    }

    /// Executes one job, recording the outcome on its record.
    ///
    /// Execution failures end the job as `failed`; they are never
    /// propagated.
    pub async fn process(&self, mut record: JobRecord) {
        tracing::info!("Processing job '{}'", record.id);

        record.mark_started();
        if let Err(error) = self.queue.update(&record).await {
            tracing::warn!("Failed to mark job '{}' as started: {error}", record.id);
        }

        match self.execute(record.command.clone()).await {
            Ok(result) => {
                tracing::info!("Job '{}' finished", record.id);
                record.mark_finished(result);
            }
            Err(error) => {
                tracing::warn!("Job '{}' failed: {error}", record.id);
                record.mark_failed(error.to_string());
            }
        }

        if let Err(error) = self.queue.update(&record).await {
            tracing::error!("Failed to record outcome of job '{}': {error}", record.id);
        }
    }

    /// Dispatches a command against the services.
    ///
    /// # Errors
    ///
    /// Returns the underlying `ServiceError`; the caller decides whether to
    /// record or propagate it.
    pub async fn execute(&self, command: JobCommand) -> Result<serde_json::Value, ServiceError> {
        match command {
            JobCommand::CompleteAll { todo_list_id } => {
                let outcome = self.items.complete_all(todo_list_id).await?;
                Ok(serde_json::to_value(outcome).map_err(StoreError::from)?)
            }
        }
    }
}

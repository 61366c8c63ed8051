//! Background job queue: records, the queue port, and its adapters.
//!
//! Jobs carry a closed, serializable command rather than a function value,
//! so the same payload crosses the in-memory and Redis queue boundaries
//! unchanged. One producer (the API layer), one consumer (the worker), FIFO
//! order, no retry, no cancellation.

mod memory;
mod queue;
mod record;
mod redis;

pub use memory::InMemoryJobQueue;
pub use queue::{JobQueue, QueueError};
pub use record::{JobCommand, JobId, JobRecord, JobStatus};
pub use self::redis::RedisJobQueue;

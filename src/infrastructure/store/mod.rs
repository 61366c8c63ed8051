//! Key-value store abstraction backing both entity data and counters.
//!
//! # Design
//!
//! - **Trait-based abstraction**: [`KeyValueStore`] allows different
//!   implementations (Redis for deployment, in-memory for development and
//!   tests)
//! - **String values**: documents are stored as JSON strings; the services
//!   own the codec
//! - **No transactions**: every mutation is a whole-document
//!   read-modify-write with no cross-key atomicity — last writer wins

use async_trait::async_trait;

mod error;
mod memory;
mod redis;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use self::redis::{RedisConnection, RedisStore};

/// Port for key-value persistence.
///
/// Implementations must be thread-safe (`Send + Sync`); they are shared
/// behind an `Arc` by the services and the worker.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`, returning whether it was present.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Returns every key starting with `prefix`, in no particular order.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Atomically increments the counter stored under `counter_key`.
    ///
    /// The first call on a fresh counter returns 1.
    async fn next_id(&self, counter_key: &str) -> Result<u64, StoreError>;
}

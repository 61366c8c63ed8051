//! Redis-backed store adapter.

use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use super::error::StoreError;
use super::KeyValueStore;

// =============================================================================
// RedisConnection
// =============================================================================

/// Shared Redis client with key-prefix support.
///
/// Cloning is cheap; the underlying client is reference-counted. Each
/// operation obtains a multiplexed async connection from the client.
#[derive(Clone)]
pub struct RedisConnection {
    client: Arc<redis::Client>,
    key_prefix: Arc<str>,
}

impl RedisConnection {
    /// Wraps an existing client.
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: &str) -> Self {
        Self {
            client: Arc::new(client),
            key_prefix: Arc::from(key_prefix),
        }
    }

    /// Opens a client for `url` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the URL cannot be parsed.
    pub fn connect(url: &str, key_prefix: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        Ok(Self::new(client, key_prefix))
    }

    /// Obtains a multiplexed async connection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the server is unreachable.
    pub async fn get_async_connection(&self) -> Result<MultiplexedConnection, StoreError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(StoreError::from)
    }

    /// Prepends the configured key prefix to a logical key.
    #[must_use]
    pub fn format_key(&self, suffix: &str) -> String {
        format!("{}{}", self.key_prefix, suffix)
    }

    /// Strips the configured key prefix from a physical key.
    #[must_use]
    pub fn strip_key<'a>(&self, key: &'a str) -> &'a str {
        key.strip_prefix(self.key_prefix.as_ref()).unwrap_or(key)
    }
}

impl std::fmt::Debug for RedisConnection {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RedisConnection")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// RedisStore
// =============================================================================

/// Redis-backed [`KeyValueStore`] implementation.
///
/// Documents are JSON strings; counters use `INCR`, so `next_id` is atomic
/// across processes.
#[derive(Debug, Clone)]
pub struct RedisStore {
    connection: RedisConnection,
}

impl RedisStore {
    #[must_use]
    pub const fn new(connection: RedisConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut connection = self.connection.get_async_connection().await?;
        let value: Option<String> = connection.get(self.connection.format_key(key)).await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut connection = self.connection.get_async_connection().await?;
        let _: () = connection
            .set(self.connection.format_key(key), value)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut connection = self.connection.get_async_connection().await?;
        let removed: i64 = connection.del(self.connection.format_key(key)).await?;
        Ok(removed > 0)
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut connection = self.connection.get_async_connection().await?;
        let pattern = format!("{}*", self.connection.format_key(prefix));
        let keys: Vec<String> = connection.keys(pattern).await?;
        Ok(keys
            .iter()
            .map(|key| self.connection.strip_key(key).to_string())
            .collect())
    }

    async fn next_id(&self, counter_key: &str) -> Result<u64, StoreError> {
        let mut connection = self.connection.get_async_connection().await?;
        let value: u64 = connection
            .incr(self.connection.format_key(counter_key), 1)
            .await?;
        Ok(value)
    }
}

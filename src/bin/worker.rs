//! Standalone job worker entry point.
//!
//! Consumes the Redis-backed job queue and executes commands against the
//! Redis-backed store, independently of the API server process. With the
//! in-memory backend the queue is process-local and the server runs the
//! worker itself, so this binary always talks to Redis.

use todolist::application::{TodoItemService, Worker};
use todolist::infrastructure::{AppConfig, RedisConnection, RedisJobQueue, RedisStore};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todolist=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting worker. Connecting to Redis...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let data_connection = RedisConnection::connect(&config.redis_url, &config.redis_key_prefix)
        .expect("Failed to open Redis client for data");
    let queue_connection =
        RedisConnection::connect(&config.redis_queue_url, &config.redis_key_prefix)
            .expect("Failed to open Redis client for the job queue");

    let store = std::sync::Arc::new(RedisStore::new(data_connection));
    let queue = std::sync::Arc::new(RedisJobQueue::new(queue_connection));
    let worker = Worker::new(queue, TodoItemService::new(store));

    // Flip the shutdown channel on CTRL+C; the worker finishes its in-flight
    // job before stopping.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    tracing::info!("Worker ready. Waiting for jobs...");
    worker.run(shutdown_rx).await;
}

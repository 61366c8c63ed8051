//! TodoList API server entry point.

use std::sync::Arc;

use todolist::api::routes::create_router;
use todolist::application::Worker;
use todolist::infrastructure::{
    AppConfig, AppDependencies, InMemoryJobQueue, InMemoryStore, JobQueue, KeyValueStore,
    RedisConnection, RedisJobQueue, RedisStore, StoreBackend,
};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
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

    tracing::info!("Starting TodoList API...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}, backend={}",
                config.app_host,
                config.app_port,
                config.store_backend
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    // Initialize infrastructure for the selected backend
    let (store, job_queue): (Arc<dyn KeyValueStore>, Arc<dyn JobQueue>) =
        match config.store_backend {
            StoreBackend::Memory => {
                tracing::info!("Infrastructure initialized (in-memory mode)");
                (
                    Arc::new(InMemoryStore::new()),
                    Arc::new(InMemoryJobQueue::new()),
                )
            }
            StoreBackend::Redis => {
                let data_connection =
                    RedisConnection::connect(&config.redis_url, &config.redis_key_prefix)
                        .expect("Failed to open Redis client for data");
                let queue_connection =
                    RedisConnection::connect(&config.redis_queue_url, &config.redis_key_prefix)
                        .expect("Failed to open Redis client for the job queue");
                tracing::info!("Infrastructure initialized (redis mode)");
                (
                    Arc::new(RedisStore::new(data_connection)),
                    Arc::new(RedisJobQueue::new(queue_connection)),
                )
            }
        };

    // Create dependencies container
    let deps = AppDependencies::new(config.clone(), store, job_queue);

    // With the in-memory backend the queue is process-local, so the worker
    // must run inside this process. With Redis it runs as the separate
    // `worker` binary.
    let (worker_shutdown_tx, worker_shutdown_rx) = watch::channel(false);
    if config.store_backend == StoreBackend::Memory {
        let worker = Worker::new(Arc::clone(deps.job_queue()), deps.todo_items());
        tokio::spawn(worker.run(worker_shutdown_rx));
        tracing::info!("In-process worker spawned");
    }

    // Create router with middleware
    let app = create_router(deps)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let listener = TcpListener::bind(&bind_address).await.unwrap();
    tracing::info!("TodoList API started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    /api/todolists                                - All lists");
    tracing::info!("  POST   /api/todolists                                - Create list");
    tracing::info!("  GET    /api/todolists/:id                            - Get list");
    tracing::info!("  PUT    /api/todolists/:id                            - Rename list");
    tracing::info!("  DELETE /api/todolists/:id                            - Delete list");
    tracing::info!("  GET    /api/todolists/:id/items                      - All items");
    tracing::info!("  POST   /api/todolists/:id/items                      - Create item");
    tracing::info!("  GET    /api/todolists/:id/items/:item_id             - Get item");
    tracing::info!("  PUT    /api/todolists/:id/items/:item_id             - Update item");
    tracing::info!("  PATCH  /api/todolists/:id/items/:item_id/toggle      - Toggle item");
    tracing::info!("  DELETE /api/todolists/:id/items/:item_id             - Delete item");
    tracing::info!("  POST   /api/todolists/:id/items/complete-all         - Queue bulk completion");
    tracing::info!("  GET    /api/jobs/:job_id                             - Job status");
    tracing::info!("  GET    /health                                       - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    let _ = worker_shutdown_tx.send(true);
    tracing::info!("TodoList API stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}

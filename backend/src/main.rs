use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use conference_central::adapters::auth::JwtSessionValidator;
use conference_central::adapters::cache::RedisMemoCache;
use conference_central::adapters::http::{build_app_router, AppState};
use conference_central::adapters::postgres::{
    PostgresConferenceRepository, PostgresProfileRepository, PostgresRegistrationLedger,
    PostgresSessionRepository, MIGRATOR,
};
use conference_central::adapters::tasks::{task_channel, TaskWorker};
use conference_central::application::handlers::tasks::TaskRunner;
use conference_central::config::{AppConfig, ServerConfig};

const WORKER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    // --- Configuration ---
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    // --- Tracing ---
    init_tracing(&config.server);
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = ?config.server.environment,
        "Loaded configuration"
    );

    // --- Database ---
    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    if config.database.run_migrations {
        MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to run database migrations");
        tracing::info!("Database migrations applied");
    }

    // --- Cache ---
    let cache = Arc::new(
        RedisMemoCache::connect(&config.redis)
            .await
            .expect("Failed to connect to Redis"),
    );
    tracing::info!("Redis connection established");

    // --- Task worker ---
    let (tasks, receiver) = task_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = TaskWorker::new(receiver, TaskRunner::new(cache.clone()));
    let worker_handle = tokio::spawn(worker.run(shutdown_rx));

    // --- App state ---
    let state = AppState {
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        conferences: Arc::new(PostgresConferenceRepository::new(pool.clone())),
        sessions: Arc::new(PostgresSessionRepository::new(pool.clone())),
        ledger: Arc::new(PostgresRegistrationLedger::new(pool.clone())),
        tasks: Arc::new(tasks),
        cache,
        validator: Arc::new(JwtSessionValidator::new(&config.auth)),
    };

    let app = build_app_router(state, &config.server);

    // --- Start server ---
    let addr = config
        .server
        .socket_addr()
        .expect("Invalid bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, draining tasks");
    let _ = shutdown_tx.send(true);
    if tokio::time::timeout(WORKER_SHUTDOWN_TIMEOUT, worker_handle)
        .await
        .is_err()
    {
        tracing::warn!("Task worker did not stop in time");
    }

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.clone()));

    let registry = tracing_subscriber::registry().with(filter);
    if server.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}

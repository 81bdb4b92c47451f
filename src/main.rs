//! Students API entry point.
//!
//! Loads configuration, opens the SQLite database, provisions the
//! students table and serves the REST API until SIGTERM/SIGINT.

use std::sync::Arc;
use std::time::Duration;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use students_api::config::AppConfig;
use students_api::domain::StudentRepositoryInterface;
use students_api::infrastructure::database::migrator::Migrator;
use students_api::infrastructure::database::repositories::StudentRepository;
use students_api::shared::shutdown::ShutdownCoordinator;
use students_api::{
    create_api_router, default_config_path, init_database, request_timeout_layer, DatabaseConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("STUDENTS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Students API");
    info!("Environment: {}", app_cfg.env);
    info!("Storage path: {}", app_cfg.database.storage_path);

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let students: Arc<dyn StudentRepositoryInterface> =
        Arc::new(StudentRepository::new(db.clone()));

    // ── HTTP server with graceful shutdown ─────────────────────
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout_secs);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    let router = create_api_router(students).layer(request_timeout_layer(Duration::from_secs(
        app_cfg.server.timeout_secs,
    )));
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    let drain_signal = shutdown_signal.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                drain_signal.wait().await;
                info!("Draining in-flight requests...");
            })
            .await
    });

    // Run until the server fails on its own or a shutdown signal arrives;
    // on shutdown, give it the configured drain window before giving up
    // on in-flight requests.
    tokio::select! {
        result = &mut server => match result {
            Ok(Ok(())) => info!("Server stopped"),
            Ok(Err(e)) => error!("Server error: {}", e),
            Err(e) => error!("Server task panicked: {}", e),
        },
        _ = shutdown_signal.wait() => {
            match tokio::time::timeout(shutdown.drain_timeout(), server).await {
                Ok(Ok(Ok(()))) => info!("Server stopped gracefully"),
                Ok(Ok(Err(e))) => error!("Server error during shutdown: {}", e),
                Ok(Err(e)) => error!("Server task panicked: {}", e),
                Err(_) => warn!("Drain timeout elapsed, aborting remaining requests"),
            }
        }
    }

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Students API shutdown complete");
    Ok(())
}

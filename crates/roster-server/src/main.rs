//! Roster Server
//!
//! HTTP server for the user resource.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_api::AppState;
use roster_core::config::AppConfig;
use roster_db::{Database, DatabaseConfig, InMemoryUserRepository, PgUserRepository};
use roster_services::UserStore;

mod health;

use health::HealthChecker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG from it reaches the filter
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting Roster"
    );

    let (store, database) = open_store(&config).await;

    let app = build_router(AppState::new(store.users.clone()), Arc::new(store.health));

    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = database {
        db.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,roster_server=debug,roster_api=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// The store the API runs against, with its health checker
struct OpenedStore {
    users: UserStore,
    health: HealthChecker,
}

/// Connect to PostgreSQL when configured, otherwise run in memory
///
/// A configured database that cannot be reached is logged and replaced by
/// the in-memory store.
async fn open_store(config: &AppConfig) -> (OpenedStore, Option<Database>) {
    if let Some(url) = &config.database.url {
        let db_config = DatabaseConfig::with_url(url).with_max_connections(config.database.pool_size);

        let connected = match Database::connect(&db_config).await {
            Ok(db) => db.ensure_schema().await.map(|_| db),
            Err(e) => Err(e),
        };

        match connected {
            Ok(db) => {
                info!("Connected to database");
                let users: UserStore = Arc::new(PgUserRepository::new(db.pool().clone()));
                let health = HealthChecker::new(users.clone(), "postgres");
                return (OpenedStore { users, health }, Some(db));
            }
            Err(e) => {
                warn!("Failed to connect to database: {}. Using in-memory store.", e);
            }
        }
    } else {
        info!("DATABASE_URL not set, using in-memory store");
    }

    let users: UserStore = Arc::new(InMemoryUserRepository::new());
    let health = HealthChecker::new(users.clone(), "memory");
    (OpenedStore { users, health }, None)
}

/// Build the application router
fn build_router(state: AppState, health: Arc<HealthChecker>) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(health);

    Router::new()
        .merge(health_routes)
        .merge(roster_api::app(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

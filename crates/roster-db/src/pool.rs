//! Database connection pool management
//!
//! Provides PostgreSQL connection pooling using SQLx.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use roster_core::traits::Entity;
use roster_models::User;

use crate::users::CREATE_USERS_TABLE;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout for connections in seconds
    pub idle_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Create config with a specific URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 5,
            idle_timeout_secs: 600,
        }
    }

    /// Override the pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self.min_connections = self.min_connections.min(self.max_connections);
        self
    }
}

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `users` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        tracing::info!(table = User::TABLE_NAME, "Table ready");
        Ok(())
    }

    /// Close the connection pool
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

//! # roster-db
//!
//! Persistence layer for Roster.
//!
//! This crate provides the user store behind a single trait, with:
//!
//! - PostgreSQL connection pool management (SQLx)
//! - A PostgreSQL-backed [`UserRepository`] implementation
//! - An in-process implementation with the same contract
//!
//! ## Example
//!
//! ```ignore
//! use roster_db::{Database, DatabaseConfig, PgUserRepository, UserRepository};
//!
//! let config = DatabaseConfig::with_url("postgres://localhost/roster");
//! let db = Database::connect(&config).await?;
//! db.ensure_schema().await?;
//!
//! let repo = PgUserRepository::new(db.pool().clone());
//! let user = repo.find_by_id(1).await?;
//! ```

pub mod memory;
pub mod pool;
pub mod repository;
pub mod users;

// Re-exports
pub use memory::InMemoryUserRepository;
pub use pool::{Database, DatabaseConfig};
pub use repository::{RepositoryError, RepositoryResult, UserFilter, UserRepository};
pub use users::PgUserRepository;

#[cfg(any(test, feature = "test-support"))]
pub use repository::MockUserRepository;

/// Helpers for tests of crates built on the user store
#[cfg(any(test, feature = "test-support"))]
pub mod testing {
    use crate::repository::RepositoryError;

    /// The error a store returns once its pool is exhausted
    pub fn store_down() -> RepositoryError {
        RepositoryError::Database(sqlx::Error::PoolTimedOut)
    }
}

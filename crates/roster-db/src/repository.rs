//! Repository traits
//!
//! The store contract every user store implements.

use async_trait::async_trait;
use roster_core::error::RosterError;
use roster_core::traits::Id;
use roster_models::{NewUser, User, UserChanges};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for RosterError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(error = %err, "User store failure");
        RosterError::Internal(err.to_string())
    }
}

/// Listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Exact match on `role`
    pub role: Option<String>,
}

impl UserFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.role.as_deref().map_or(true, |role| user.role == role)
    }
}

/// User store
///
/// Each method is a single atomic store operation. Listing is ordered by
/// ascending id. Ids are assigned by the store and never reused, including
/// after [`UserRepository::delete_all`].
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<User>>;

    /// List users matching the filter
    async fn find_all(&self, filter: &UserFilter) -> RepositoryResult<Vec<User>>;

    /// Count all users
    async fn count(&self) -> RepositoryResult<i64>;

    /// Insert a new user, returning the stored record
    async fn create(&self, new_user: NewUser) -> RepositoryResult<User>;

    /// Apply the supplied fields; `None` when the user does not exist
    async fn update(&self, id: Id, changes: &UserChanges) -> RepositoryResult<Option<User>>;

    /// Delete a user; returns whether a row was removed
    async fn delete(&self, id: Id) -> RepositoryResult<bool>;

    /// Delete every user, returning the number of rows removed
    async fn delete_all(&self) -> RepositoryResult<u64>;

    /// Check the store is reachable
    async fn ping(&self) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        let user = NewUser::new("John Doe", "developer", 85).into_user(1);

        assert!(UserFilter::all().matches(&user));
        assert!(UserFilter::by_role("developer").matches(&user));
        assert!(!UserFilter::by_role("Developer").matches(&user));
        assert!(!UserFilter::by_role("").matches(&user));
    }

    #[tokio::test]
    async fn test_mock_store_reports_failures() {
        let mut store = MockUserRepository::new();
        store
            .expect_ping()
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        assert!(store.ping().await.is_err());
    }

    #[test]
    fn test_error_converts_to_internal() {
        let err: RosterError = RepositoryError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }
}

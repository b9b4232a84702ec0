//! User repository
//!
//! PostgreSQL operations for the `users` table.

use async_trait::async_trait;
use roster_core::traits::Id;
use roster_models::{NewUser, User, UserChanges};
use sqlx::PgPool;

use crate::repository::{RepositoryResult, UserFilter, UserRepository};

/// Table definition applied by [`crate::Database::ensure_schema`]
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        full_name VARCHAR(255) NOT NULL,
        role VARCHAR(255) NOT NULL,
        efficiency BIGINT NOT NULL CHECK (efficiency >= 0)
    )
"#;

/// PostgreSQL user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, role, efficiency
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self, filter: &UserFilter) -> RepositoryResult<Vec<User>> {
        let rows = match &filter.role {
            Some(role) => {
                sqlx::query_as::<_, User>(
                    r#"
                    SELECT id, full_name, role, efficiency
                    FROM users
                    WHERE role = $1
                    ORDER BY id ASC
                    "#,
                )
                .bind(role)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, User>(
                    r#"
                    SELECT id, full_name, role, efficiency
                    FROM users
                    ORDER BY id ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn create(&self, new_user: NewUser) -> RepositoryResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, role, efficiency)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, role, efficiency
            "#,
        )
        .bind(&new_user.full_name)
        .bind(&new_user.role)
        .bind(new_user.efficiency)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: Id, changes: &UserChanges) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                full_name = COALESCE($1, full_name),
                role = COALESCE($2, role),
                efficiency = COALESCE($3, efficiency)
            WHERE id = $4
            RETURNING id, full_name, role, efficiency
            "#,
        )
        .bind(&changes.full_name)
        .bind(&changes.role)
        .bind(changes.efficiency)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Id) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> RepositoryResult<u64> {
        // Plain DELETE keeps the id sequence, so ids are never handed out twice
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

//! In-process user store
//!
//! Same contract as the PostgreSQL store, kept in a map guarded by a
//! `tokio` RwLock. Used by tests and when the server runs without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use roster_core::traits::Id;
use roster_models::{NewUser, User, UserChanges};
use tokio::sync::RwLock;

use crate::repository::{RepositoryResult, UserFilter, UserRepository};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<Id, User>,
    next_id: Id,
}

/// In-memory user repository
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self, filter: &UserFilter) -> RepositoryResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn create(&self, new_user: NewUser) -> RepositoryResult<User> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let user = new_user.into_user(id);
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Id, changes: &UserChanges) -> RepositoryResult<Option<User>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|user| {
            user.apply(changes);
            user.clone()
        }))
    }

    async fn delete(&self, id: Id) -> RepositoryResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn delete_all(&self) -> RepositoryResult<u64> {
        let mut table = self.table.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

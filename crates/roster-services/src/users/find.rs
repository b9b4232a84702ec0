//! Lookup Service for Users

use async_trait::async_trait;
use roster_core::result::{OptionExt, RosterResult};
use roster_core::traits::Id;
use roster_db::UserFilter;
use roster_models::User;

use super::USER_ENTITY;
use crate::base::{Callable, UserStore};

/// What to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// Exactly one user; missing is an error
    ById(Id),
    /// Every user matching the filter, possibly none
    All(UserFilter),
}

/// Service for reading users
///
/// Both lookups answer with a list so callers can render one shape.
pub struct FindUsersService {
    store: UserStore,
}

impl FindUsersService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    pub async fn find(&self, id: Id) -> RosterResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .or_not_found(USER_ENTITY, id)
    }

    pub async fn list(&self, filter: &UserFilter) -> RosterResult<Vec<User>> {
        let users = self.store.find_all(filter).await?;
        tracing::debug!(role = ?filter.role, count = users.len(), "Listed users");
        Ok(users)
    }
}

#[async_trait]
impl Callable<UserLookup, Vec<User>> for FindUsersService {
    async fn call(&self, lookup: UserLookup) -> RosterResult<Vec<User>> {
        match lookup {
            UserLookup::ById(id) => Ok(vec![self.find(id).await?]),
            UserLookup::All(filter) => self.list(&filter).await,
        }
    }
}

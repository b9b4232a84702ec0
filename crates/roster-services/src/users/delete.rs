//! Delete Service for Users

use async_trait::async_trait;
use roster_core::error::RosterError;
use roster_core::result::{OptionExt, RosterResult};
use roster_core::traits::Id;
use roster_models::User;

use super::USER_ENTITY;
use crate::base::{Callable, UserStore};

/// Result of a delete call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One user removed; carries the record as it was before removal
    Deleted(User),
    /// Bulk delete; number of rows removed
    Cleared(u64),
}

/// Service for deleting one user or all of them
pub struct DeleteUserService {
    store: UserStore,
}

impl DeleteUserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    async fn delete_one(&self, id: Id) -> RosterResult<User> {
        let user = self
            .store
            .find_by_id(id)
            .await?
            .or_not_found(USER_ENTITY, id)?;

        // A concurrent delete may win between the read and the delete
        if !self.store.delete(id).await? {
            return Err(RosterError::not_found(USER_ENTITY, id));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(user)
    }
}

#[async_trait]
impl Callable<Option<Id>, DeleteOutcome> for DeleteUserService {
    async fn call(&self, id: Option<Id>) -> RosterResult<DeleteOutcome> {
        match id {
            Some(id) => Ok(DeleteOutcome::Deleted(self.delete_one(id).await?)),
            None => {
                let removed = self.store.delete_all().await?;
                tracing::info!(removed, "All users deleted");
                Ok(DeleteOutcome::Cleared(removed))
            }
        }
    }
}

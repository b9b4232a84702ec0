//! Create Service for Users

use async_trait::async_trait;
use roster_contracts::users::CreateUserContract;
use roster_contracts::{Attributes, Contract};
use roster_core::error::RosterError;
use roster_core::result::RosterResult;
use roster_models::{NewUser, User};
use validator::Validate;

use crate::base::{from_validator, Callable, UserStore};

/// Service for creating users
///
/// # Example
/// ```ignore
/// let service = CreateUserService::new(store);
/// let user = service.call(attributes).await?;
/// ```
pub struct CreateUserService {
    store: UserStore,
    contract: CreateUserContract,
}

impl CreateUserService {
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            contract: CreateUserContract::new(),
        }
    }

    /// Insert an already-typed user
    pub async fn create(&self, new_user: NewUser) -> RosterResult<User> {
        new_user
            .validate()
            .map_err(|e| RosterError::Validation(from_validator(&e)))?;

        let user = self.store.create(new_user).await?;
        tracing::info!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }
}

#[async_trait]
impl Callable<Attributes, User> for CreateUserService {
    async fn call(&self, attributes: Attributes) -> RosterResult<User> {
        let new_user = self.contract.validate(&attributes).map_err(|errors| {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Create rejected");
            RosterError::Validation(errors)
        })?;

        self.create(new_user).await
    }
}

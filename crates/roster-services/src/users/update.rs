//! Update Service for Users

use async_trait::async_trait;
use roster_contracts::users::UpdateUserContract;
use roster_contracts::{Attributes, Contract};
use roster_core::error::RosterError;
use roster_core::result::{OptionExt, RosterResult};
use roster_core::traits::parse_id;
use roster_models::User;

use super::USER_ENTITY;
use crate::base::{Callable, UserStore};

/// Parameters for updating a user
///
/// `id` is kept as the raw path text; it is only resolved once the payload
/// has passed validation.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: String,
    pub attributes: Attributes,
}

impl UpdateUserParams {
    pub fn new(id: impl ToString, attributes: Attributes) -> Self {
        Self {
            id: id.to_string(),
            attributes,
        }
    }
}

/// Service for updating users
///
/// The payload is validated before the id is resolved or the store is
/// consulted, so invalid input is a 422 even for an id that does not exist.
/// An empty payload succeeds and returns the record unchanged.
pub struct UpdateUserService {
    store: UserStore,
    contract: UpdateUserContract,
}

impl UpdateUserService {
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            contract: UpdateUserContract::new(),
        }
    }
}

#[async_trait]
impl Callable<UpdateUserParams, User> for UpdateUserService {
    async fn call(&self, params: UpdateUserParams) -> RosterResult<User> {
        let changes = self
            .contract
            .validate(&params.attributes)
            .map_err(RosterError::Validation)?;

        let id = parse_id(&params.id).or_not_found(USER_ENTITY, &params.id)?;

        let user = self
            .store
            .update(id, &changes)
            .await?
            .or_not_found(USER_ENTITY, id)?;

        let changed = UpdateUserContract::changes_of(&changes);
        tracing::info!(
            user_id = user.id,
            changed = ?changed.changed_attributes(),
            "User updated"
        );

        Ok(user)
    }
}

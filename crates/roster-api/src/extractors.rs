//! Axum extractors for API handlers

use std::sync::Arc;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use roster_contracts::{attributes_from_slice, Attributes};
use roster_core::traits::{parse_id, Id};
use roster_db::{InMemoryUserRepository, UserFilter};
use roster_services::users::USER_ENTITY;
use roster_services::UserStore;

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }

    /// State backed by a fresh in-process store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()))
    }
}

/// Request body as a raw attribute map
///
/// Bodies that are missing, malformed or not a JSON object decode to an
/// empty map; field-level checks are left to the contracts.
pub struct JsonAttributes(pub Attributes);

#[async_trait]
impl<S> FromRequest<S> for JsonAttributes
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let attributes = match Bytes::from_request(req, state).await {
            Ok(body) => attributes_from_slice(&body),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable request body");
                Attributes::new()
            }
        };
        Ok(JsonAttributes(attributes))
    }
}

/// User id taken from the `:id` path segment
///
/// A segment that is not an integer cannot name a user, so it is rejected as
/// not found rather than as a bad request.
pub struct UserId(pub Id);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found(USER_ENTITY, "?"))?;

        parse_id(&raw)
            .map(UserId)
            .ok_or_else(|| ApiError::not_found(USER_ENTITY, raw))
    }
}

/// Listing filter from the query string
///
/// A present `role` is always an exact match on its trimmed value, so a blank
/// `?role=` matches nobody. When the parameter repeats, the last one wins.
pub struct RoleFilter(pub UserFilter);

#[async_trait]
impl<S> FromRequestParts<S> for RoleFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|_| Query(Vec::new()));

        let filter = pairs
            .into_iter()
            .filter(|(key, _)| key == "role")
            .last()
            .map_or_else(UserFilter::all, |(_, role)| UserFilter::by_role(role.trim()));
        Ok(RoleFilter(filter))
    }
}

//! User resource handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use roster_core::traits::parse_id;
use roster_models::User;
use roster_services::users::{
    CreateUserService, DeleteOutcome, DeleteUserService, FindUsersService, UpdateUserParams,
    UpdateUserService, UserLookup, USER_ENTITY,
};
use roster_services::Callable;

use crate::envelope::{CreatedUser, Envelope, Reply, UserList};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{AppState, JsonAttributes, RoleFilter, UserId};

/// Create a user
///
/// POST /create
pub async fn create_user(
    State(state): State<AppState>,
    JsonAttributes(attributes): JsonAttributes,
) -> ApiResult<Reply<CreatedUser>> {
    let user = CreateUserService::new(state.users).call(attributes).await?;
    Ok(Reply::created(CreatedUser { id: user.id }))
}

/// List users, optionally filtered by role
///
/// GET /get
pub async fn list_users(
    State(state): State<AppState>,
    RoleFilter(filter): RoleFilter,
) -> ApiResult<Reply<UserList>> {
    let users = FindUsersService::new(state.users)
        .call(UserLookup::All(filter))
        .await?;
    Ok(Reply::ok(UserList { users }))
}

/// Get one user as a single-element list
///
/// GET /get/:id
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> ApiResult<Reply<UserList>> {
    let users = FindUsersService::new(state.users)
        .call(UserLookup::ById(id))
        .await?;
    Ok(Reply::ok(UserList { users }))
}

/// Partially update a user
///
/// The raw id is handed to the service, which resolves it only after the
/// payload validates.
///
/// PATCH /update/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonAttributes(attributes): JsonAttributes,
) -> ApiResult<Reply<User>> {
    let user = UpdateUserService::new(state.users)
        .call(UpdateUserParams::new(id, attributes))
        .await?;
    Ok(Reply::ok(user))
}

/// Delete one user, answering with its last values, or every user
///
/// DELETE /delete/:id
/// DELETE /delete
pub async fn delete_users(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> ApiResult<Response> {
    let id = match id {
        Some(Path(raw)) => Some(parse_id(&raw).ok_or_else(|| ApiError::not_found(USER_ENTITY, raw))?),
        None => None,
    };

    let outcome = DeleteUserService::new(state.users).call(id).await?;
    Ok(match outcome {
        DeleteOutcome::Deleted(user) => Reply::ok(user).into_response(),
        DeleteOutcome::Cleared(_) => Json(Envelope::done()).into_response(),
    })
}

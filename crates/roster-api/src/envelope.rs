//! Response envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_models::User;
use serde::Serialize;

/// `{"success": bool, "result": ...}`
///
/// `result` is left out of the body entirely when it is `None`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
        }
    }

    pub fn failure(result: T) -> Self {
        Self {
            success: false,
            result: Some(result),
        }
    }
}

impl Envelope<()> {
    /// Success without a payload
    pub fn done() -> Self {
        Self {
            success: true,
            result: None,
        }
    }
}

/// Envelope paired with its status code
pub struct Reply<T: Serialize>(pub StatusCode, pub Envelope<T>);

impl<T: Serialize> Reply<T> {
    pub fn ok(result: T) -> Self {
        Reply(StatusCode::OK, Envelope::success(result))
    }

    pub fn created(result: T) -> Self {
        Reply(StatusCode::CREATED, Envelope::success(result))
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

/// Result of a successful create
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: i64,
}

/// Result of a read
#[derive(Debug, Serialize)]
pub struct UserList {
    pub users: Vec<User>,
}

//! API error handling
//!
//! Renders failures inside the response envelope:
//! `{"success": false, "result": {"error": ...}}` where `error` is a message
//! string, or a map of field name to messages for validation failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::error::{RosterError, ValidationErrors};
use serde::Serialize;

use crate::envelope::Envelope;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound { resource: &'static str, id: String },
    Validation(ValidationErrors),
    Internal(String),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl std::fmt::Display) -> Self {
        ApiError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        tracing::debug!(code = err.error_code(), "Service returned an error");
        match err {
            RosterError::NotFound { entity, id } => ApiError::NotFound { resource: entity, id },
            RosterError::Validation(errors) => ApiError::Validation(errors),
            RosterError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Fields(ValidationErrors),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match self {
            ApiError::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Resource not found");
                ErrorDetail::Message(format!("{} not found", resource))
            }
            ApiError::Validation(errors) => {
                tracing::debug!(fields = errors.len(), "Validation failed");
                ErrorDetail::Fields(errors)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                ErrorDetail::Message(msg)
            }
        };

        (status, Json(Envelope::failure(ErrorBody { error }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

//! Core error types for Roster
//!
//! Every operation resolves to one of three failure kinds: a per-field
//! validation failure, a missing record, or an internal failure.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Core error type for all Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Internal(String),
}

impl RosterError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        RosterError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        RosterError::Internal(message.into())
    }

    /// HTTP status code mapping
    pub fn status_code(&self) -> u16 {
        match self {
            RosterError::NotFound { .. } => 404,
            RosterError::Validation(_) => 422,
            RosterError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RosterError::NotFound { .. } => "not_found",
            RosterError::Validation(_) => "validation_failed",
            RosterError::Internal(_) => "internal_error",
        }
    }
}

/// Validation errors collection: field name -> messages, in rule order per field
#[derive(Error, Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[error("{}", join_messages(.errors))]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `Ok(())` when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn join_messages(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors.values().flatten().cloned().collect::<Vec<_>>().join(" ")
}

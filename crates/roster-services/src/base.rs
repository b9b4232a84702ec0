//! Base service traits and helpers

use std::sync::Arc;

use async_trait::async_trait;
use roster_contracts::rules::display_name;
use roster_core::error::ValidationErrors;
use roster_core::result::RosterResult;
use roster_db::UserRepository;

/// Shared handle to the user store
pub type UserStore = Arc<dyn UserRepository>;

/// Base trait for all callable services
#[async_trait]
pub trait Callable<Params, Output> {
    /// Execute the service
    async fn call(&self, params: Params) -> RosterResult<Output>;
}

/// Convert derive-based model validation failures into per-field messages
pub fn from_validator(errors: &validator::ValidationErrors) -> ValidationErrors {
    let mut result = ValidationErrors::new();

    for (field, field_errors) in errors.field_errors() {
        let name = display_name(field);
        for error in field_errors {
            let param = |key: &str| {
                error
                    .params
                    .get(key)
                    .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            };
            let message = match (error.code.as_ref(), param("max"), param("min")) {
                ("length", Some(max), _) => {
                    format!("The {} field must not be greater than {} characters.", name, max)
                }
                ("range", _, Some(min)) => format!("The {} field must be at least {}.", name, min),
                (code, _, _) => format!("The {} field is invalid ({}).", name, code),
            };
            result.add(field, message);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_models::{NewUser, UserChanges};
    use validator::Validate;

    #[test]
    fn test_length_violation_message() {
        let new_user = NewUser::new("a".repeat(256), "developer", 1);
        let errors = from_validator(&new_user.validate().unwrap_err());

        assert_eq!(
            errors.get("full_name").unwrap(),
            &vec!["The full name field must not be greater than 255 characters.".to_string()]
        );
    }

    #[test]
    fn test_range_violation_message() {
        let changes = UserChanges::new().with_efficiency(-2);
        let errors = from_validator(&changes.validate().unwrap_err());

        assert_eq!(
            errors.get("efficiency").unwrap(),
            &vec!["The efficiency field must be at least 0.".to_string()]
        );
    }
}

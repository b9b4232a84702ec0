//! Create contract for users

use roster_core::error::ValidationErrors;
use roster_models::NewUser;

use super::base::{UserBaseContract, CREATE_RULES};
use crate::base::{Attributes, Contract, ValidationResult};
use crate::rules::display_name;

/// Contract for creating a new user: every field is required
pub struct CreateUserContract {
    base: UserBaseContract,
}

impl CreateUserContract {
    pub fn new() -> Self {
        Self {
            base: UserBaseContract::new(&CREATE_RULES),
        }
    }
}

impl Default for CreateUserContract {
    fn default() -> Self {
        Self::new()
    }
}

impl Contract for CreateUserContract {
    type Output = NewUser;

    fn validate(&self, attributes: &Attributes) -> ValidationResult<NewUser> {
        let fields = self.base.evaluate(attributes)?;

        match (fields.full_name, fields.role, fields.efficiency) {
            (Some(full_name), Some(role), Some(efficiency)) => {
                Ok(NewUser::new(full_name, role, efficiency))
            }
            (full_name, role, efficiency) => {
                let mut errors = ValidationErrors::new();
                for (field, present) in [
                    ("full_name", full_name.is_some()),
                    ("role", role.is_some()),
                    ("efficiency", efficiency.is_some()),
                ] {
                    if !present {
                        errors.add(field, format!("The {} field is required.", display_name(field)));
                    }
                }
                Err(errors)
            }
        }
    }
}

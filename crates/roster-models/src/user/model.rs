//! User model
//!
//! Table: users

use roster_core::traits::{Entity, Id};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Maximum length, in characters, of `full_name` and `role`
pub const MAX_TEXT_LENGTH: usize = 255;

/// User entity
///
/// Serializes to exactly the four public fields:
/// `{"id", "full_name", "role", "efficiency"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct User {
    pub id: Id,

    #[validate(length(max = 255))]
    pub full_name: String,

    #[validate(length(max = 255))]
    pub role: String,

    #[validate(range(min = 0))]
    pub efficiency: i64,
}

impl Entity for User {
    const TABLE_NAME: &'static str = "users";
    const TYPE_NAME: &'static str = "User";
}

impl User {
    /// Apply a partial update in place, leaving absent fields untouched
    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(full_name) = &changes.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(role) = &changes.role {
            self.role = role.clone();
        }
        if let Some(efficiency) = changes.efficiency {
            self.efficiency = efficiency;
        }
    }
}

/// New user creation parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(max = 255))]
    pub full_name: String,

    #[validate(length(max = 255))]
    pub role: String,

    #[validate(range(min = 0))]
    pub efficiency: i64,
}

impl NewUser {
    pub fn new(full_name: impl Into<String>, role: impl Into<String>, efficiency: i64) -> Self {
        Self {
            full_name: full_name.into(),
            role: role.into(),
            efficiency,
        }
    }

    /// Materialize the record once the store has assigned an id
    pub fn into_user(self, id: Id) -> User {
        User {
            id,
            full_name: self.full_name,
            role: self.role,
            efficiency: self.efficiency,
        }
    }
}

/// User update parameters; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UserChanges {
    #[validate(length(max = 255))]
    pub full_name: Option<String>,

    #[validate(length(max = 255))]
    pub role: Option<String>,

    #[validate(range(min = 0))]
    pub efficiency: Option<i64>,
}

impl UserChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_efficiency(mut self, efficiency: i64) -> Self {
        self.efficiency = Some(efficiency);
        self
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.role.is_none() && self.efficiency.is_none()
    }
}

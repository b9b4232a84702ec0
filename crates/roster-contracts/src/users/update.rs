//! Update contract for users

use roster_models::UserChanges;

use super::base::{UserBaseContract, UPDATE_RULES};
use crate::base::{Attributes, ChangeTracker, Contract, ValidationResult};

/// Contract for a partial update: every field is optional
///
/// Validation does not consult the store, so an invalid payload is rejected
/// whether or not the target record exists.
pub struct UpdateUserContract {
    base: UserBaseContract,
}

impl UpdateUserContract {
    pub fn new() -> Self {
        Self {
            base: UserBaseContract::new(&UPDATE_RULES),
        }
    }

    /// Attributes the payload actually changes
    pub fn changes_of(changes: &UserChanges) -> ChangeTracker {
        let mut tracker = ChangeTracker::new();
        if changes.full_name.is_some() {
            tracker.mark_changed("full_name");
        }
        if changes.role.is_some() {
            tracker.mark_changed("role");
        }
        if changes.efficiency.is_some() {
            tracker.mark_changed("efficiency");
        }
        tracker
    }
}

impl Default for UpdateUserContract {
    fn default() -> Self {
        Self::new()
    }
}

impl Contract for UpdateUserContract {
    type Output = UserChanges;

    fn validate(&self, attributes: &Attributes) -> ValidationResult<UserChanges> {
        let fields = self.base.evaluate(attributes)?;

        Ok(UserChanges {
            full_name: fields.full_name,
            role: fields.role,
            efficiency: fields.efficiency,
        })
    }
}

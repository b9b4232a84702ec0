//! Result type aliases

use crate::error::RosterError;

/// Standard Result type for Roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Turns a missing lookup into [`RosterError::NotFound`]
pub trait OptionExt<T> {
    fn or_not_found(self, entity: &'static str, id: impl std::fmt::Display) -> RosterResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, entity: &'static str, id: impl std::fmt::Display) -> RosterResult<T> {
        self.ok_or_else(|| RosterError::not_found(entity, id))
    }
}

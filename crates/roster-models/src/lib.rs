//! # roster-models
//!
//! Domain models for Roster.
//!
//! The `users` table is the only table; its entity implements `Entity`
//! from `roster-core`.

pub use roster_core::traits::{Entity, Id};

pub mod user;

pub use user::model::{NewUser, User, UserChanges};

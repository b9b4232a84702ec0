//! # roster-services
//!
//! Business logic services for Roster.
//!
//! Each service performs one operation against the injected user store and
//! returns an explicit `RosterResult`: validation failures, missing records
//! and store failures are all values, never panics.

pub mod base;
pub mod users;

pub use base::*;

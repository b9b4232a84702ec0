//! # roster-contracts
//!
//! Contract validation for Roster.
//!
//! Contracts turn a raw request attribute map into a typed write model, or
//! into per-field violation messages. Every field is checked against an
//! explicit rule list before anything reaches the store.

pub mod base;
pub mod rules;
pub mod users;

pub use base::*;

//! # roster-core
//!
//! Core types and utilities for Roster.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Error taxonomy (validation, not found, internal)
//! - Result type aliases
//! - Identifier and entity traits
//! - Configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;

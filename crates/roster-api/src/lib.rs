//! # roster-api
//!
//! HTTP surface for the user resource.
//!
//! Every response, success or failure, is wrapped in the
//! `{"success": bool, "result": {...}}` envelope.

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::AppState;
pub use routes::{app, router};

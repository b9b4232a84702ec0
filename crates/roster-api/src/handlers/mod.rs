//! API handlers

pub mod users;

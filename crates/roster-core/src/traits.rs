//! Core traits shared by models and stores

/// Primary key type
pub type Id = i64;

/// Parse an id as it arrives in a path segment
///
/// Text that is not a 64-bit integer names no record.
pub fn parse_id(raw: &str) -> Option<Id> {
    raw.trim().parse().ok()
}

/// Base trait for all domain entities
pub trait Entity: Send + Sync {
    /// The database table name
    const TABLE_NAME: &'static str;

    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}

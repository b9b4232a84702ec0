//! Base contract system

use roster_core::error::ValidationErrors;

/// Raw request attributes as decoded from a JSON object body
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Result of contract validation
pub type ValidationResult<T = ()> = Result<T, ValidationErrors>;

/// Base contract trait
pub trait Contract: Send + Sync {
    /// Typed write model produced by a successful validation
    type Output;

    /// Validate the attributes and build the write model
    fn validate(&self, attributes: &Attributes) -> ValidationResult<Self::Output>;
}

/// Change tracking for update contracts
#[derive(Debug, Default, Clone)]
pub struct ChangeTracker {
    changed_attributes: std::collections::BTreeSet<String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_changed(&mut self, attribute: impl Into<String>) {
        self.changed_attributes.insert(attribute.into());
    }

    pub fn is_changed(&self, attribute: &str) -> bool {
        self.changed_attributes.contains(attribute)
    }

    pub fn changed_attributes(&self) -> &std::collections::BTreeSet<String> {
        &self.changed_attributes
    }
}

/// Decode a request body into attributes
///
/// Anything that is not a JSON object (empty body, malformed JSON, arrays,
/// scalars) yields an empty attribute map.
pub fn attributes_from_slice(body: &[u8]) -> Attributes {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => Attributes::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

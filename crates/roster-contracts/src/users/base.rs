//! Base contract for users

use roster_core::error::ValidationErrors;

use crate::base::Attributes;
use crate::rules::{evaluate, FieldRules, Rule};

/// Constraint table applied on creation
pub static CREATE_RULES: [FieldRules; 3] = [
    FieldRules::new("full_name", &[Rule::Required, Rule::String, Rule::Max(255)]),
    FieldRules::new("role", &[Rule::Required, Rule::String, Rule::Max(255)]),
    FieldRules::new("efficiency", &[Rule::Required, Rule::Integer, Rule::Min(0)]),
];

/// Constraint table applied on partial updates
pub static UPDATE_RULES: [FieldRules; 3] = [
    FieldRules::new("full_name", &[Rule::Nullable, Rule::String, Rule::Max(255)]),
    FieldRules::new("role", &[Rule::Nullable, Rule::String, Rule::Max(255)]),
    FieldRules::new("efficiency", &[Rule::Nullable, Rule::Integer, Rule::Min(0)]),
];

/// Field values that survived validation, `None` when absent or invalid
#[derive(Debug, Default)]
pub struct UserFields {
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub efficiency: Option<i64>,
}

/// Evaluates a user constraint table against request attributes
pub struct UserBaseContract {
    rules: &'static [FieldRules],
}

impl UserBaseContract {
    pub fn new(rules: &'static [FieldRules]) -> Self {
        Self { rules }
    }

    /// Run every field's rules, collecting all violations
    pub fn evaluate(&self, attributes: &Attributes) -> Result<UserFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut fields = UserFields::default();

        for field_rules in self.rules {
            let value = evaluate(field_rules, attributes, &mut errors);
            match field_rules.field {
                "full_name" => fields.full_name = value.and_then(|v| v.into_text()),
                "role" => fields.role = value.and_then(|v| v.into_text()),
                "efficiency" => fields.efficiency = value.and_then(|v| v.into_integer()),
                _ => {}
            }
        }

        errors.into_result().map(|()| fields)
    }
}

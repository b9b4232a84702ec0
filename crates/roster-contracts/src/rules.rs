//! Per-field constraint tables
//!
//! A field is described by an ordered list of [`Rule`]s. Evaluation first
//! normalizes the raw value (strings are trimmed, blank strings become null),
//! then walks the rules in order, collecting one message per violated rule.
//! A failed presence or type rule stops evaluation of that field.

use roster_core::error::ValidationErrors;
use serde_json::Value;

use crate::base::Attributes;

/// A single validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present and non-null
    Required,
    /// Null or missing is accepted; the field is then treated as not supplied
    Nullable,
    /// Value must be a JSON string
    String,
    /// Value must be an integer (a JSON integer or an integer-valued string)
    Integer,
    /// Upper bound: characters for text, value for integers
    Max(i64),
    /// Lower bound: characters for text, value for integers
    Min(i64),
}

/// Rules attached to one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub const fn new(field: &'static str, rules: &'static [Rule]) -> Self {
        Self { field, rules }
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

/// A value that passed its type rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// Present, but no type rule narrowed it
    Raw(Value),
}

impl FieldValue {
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_integer(self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(value),
            _ => None,
        }
    }
}

/// Human-readable attribute name used in messages
pub fn display_name(field: &str) -> String {
    field.replace('_', " ")
}

fn normalize(value: Option<&Value>) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Value::String(trimmed.to_string()))
            }
        }
        Some(other) => Some(other.clone()),
    }
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            // Integral floats such as 85.0 count as integers
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Evaluate one field, recording messages in `errors`
///
/// Returns the typed value when the field is present and valid, `None` when
/// it is absent or invalid.
pub fn evaluate(field_rules: &FieldRules, attributes: &Attributes, errors: &mut ValidationErrors) -> Option<FieldValue> {
    let name = display_name(field_rules.field);

    let Some(raw) = normalize(attributes.get(field_rules.field)) else {
        if field_rules.is_required() {
            errors.add(field_rules.field, format!("The {} field is required.", name));
        }
        return None;
    };

    let mut value = FieldValue::Raw(raw);
    let mut failed = false;

    for rule in field_rules.rules {
        let mut narrowed = None;

        match (*rule, &value) {
            (Rule::Required | Rule::Nullable, _) => {}
            (Rule::String, FieldValue::Raw(Value::String(text))) => {
                narrowed = Some(FieldValue::Text(text.clone()));
            }
            (Rule::String, FieldValue::Text(_)) => {}
            (Rule::String, _) => {
                errors.add(field_rules.field, format!("The {} field must be a string.", name));
                return None;
            }
            (Rule::Integer, FieldValue::Integer(_)) => {}
            (Rule::Integer, FieldValue::Raw(raw)) => match parse_integer(raw) {
                Some(number) => narrowed = Some(FieldValue::Integer(number)),
                None => {
                    errors.add(field_rules.field, format!("The {} field must be an integer.", name));
                    return None;
                }
            },
            (Rule::Integer, FieldValue::Text(_)) => {
                errors.add(field_rules.field, format!("The {} field must be an integer.", name));
                return None;
            }
            (Rule::Max(max), FieldValue::Text(text)) => {
                if text.chars().count() as i64 > max {
                    errors.add(
                        field_rules.field,
                        format!("The {} field must not be greater than {} characters.", name, max),
                    );
                    failed = true;
                }
            }
            (Rule::Max(max), FieldValue::Integer(number)) => {
                if *number > max {
                    errors.add(field_rules.field, format!("The {} field must not be greater than {}.", name, max));
                    failed = true;
                }
            }
            (Rule::Min(min), FieldValue::Text(text)) => {
                if (text.chars().count() as i64) < min {
                    errors.add(
                        field_rules.field,
                        format!("The {} field must be at least {} characters.", name, min),
                    );
                    failed = true;
                }
            }
            (Rule::Min(min), FieldValue::Integer(number)) => {
                if *number < min {
                    errors.add(field_rules.field, format!("The {} field must be at least {}.", name, min));
                    failed = true;
                }
            }
            // Size rules need a typed value
            (Rule::Max(_) | Rule::Min(_), FieldValue::Raw(_)) => {}
        }

        if let Some(next) = narrowed {
            value = next;
        }
    }

    if failed {
        None
    } else {
        Some(value)
    }
}

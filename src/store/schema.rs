//! Collection schema
//!
//! The only validation in the system lives here: the store checks insert
//! payloads against a small set of field rules. Reads and updates are not
//! validated, matching the write-path-only behavior of schema-flexible
//! document stores.

use serde_json::Value;

/// Accepted value shapes for a declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string
    Text,
    /// JSON integer
    Integer,
}

impl FieldKind {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
        }
    }
}

/// A declared field with its shape and requiredness
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Field rules for one collection.
///
/// Undeclared fields pass through untouched; the schema is a floor, not a
/// whitelist.
#[derive(Debug, Clone)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// The movie collection: a required title, an optional integer startYear
    pub fn movie() -> Self {
        Self::new(vec![
            FieldRule {
                name: "title",
                kind: FieldKind::Text,
                required: true,
            },
            FieldRule {
                name: "startYear",
                kind: FieldKind::Integer,
                required: false,
            },
        ])
    }

    /// Check an insert payload against the rules.
    ///
    /// The payload must be an object and must not carry an `id`; identifiers
    /// are assigned by the store.
    pub fn check(&self, document: &Value) -> Result<(), String> {
        let Some(object) = document.as_object() else {
            return Err("document must be a JSON object".to_string());
        };

        if object.contains_key("id") {
            return Err("'id' is assigned by the store".to_string());
        }

        for rule in &self.rules {
            match object.get(rule.name) {
                None if rule.required => {
                    return Err(format!("required field '{}' is missing", rule.name));
                }
                None => {}
                Some(value) if !rule.kind.accepts(value) => {
                    return Err(format!(
                        "field '{}' must be a {}",
                        rule.name,
                        rule.kind.as_str()
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

//! # Filter Expression AST
//!
//! Describes which documents a read operation matches. A [`Filter`] is built
//! by the HTTP layer from route parameters and evaluated by the store; an
//! empty filter matches every document.

use regex::{Regex, RegexBuilder};
use serde_json::Value;
use thiserror::Error;

/// A predicate applied to a single document field
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Exact match against the raw request value.
    ///
    /// The value arrives as a query-string token; what it can match on a
    /// non-string field is the store's comparison policy, not the
    /// translator's.
    Eq(String),

    /// Case-insensitive containment. The fragment is used verbatim as a
    /// regex pattern; metacharacters are not escaped.
    Contains(String),

    /// Inclusive lower bound on an integer field
    Gte(i64),

    /// Inclusive upper bound on an integer field
    Lte(i64),
}

/// A predicate bound to the field it applies to
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPredicate {
    pub field: String,
    pub predicate: Predicate,
}

/// A set of field predicates combined with AND logic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub predicates: Vec<FieldPredicate>,
}

/// Filter compilation failure (invalid containment pattern)
#[derive(Debug, Error)]
#[error("invalid pattern for field '{field}': {source}")]
pub struct FilterError {
    pub field: String,
    #[source]
    pub source: regex::Error,
}

impl Filter {
    /// A filter matching every document
    pub fn all() -> Self {
        Self::default()
    }

    /// One exact-match predicate per key/value pair
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let predicates = pairs
            .into_iter()
            .map(|(field, value)| FieldPredicate {
                field,
                predicate: Predicate::Eq(value),
            })
            .collect();
        Self { predicates }
    }

    /// Case-insensitive containment on a single field
    pub fn contains(field: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            predicates: vec![FieldPredicate {
                field: field.into(),
                predicate: Predicate::Contains(fragment.into()),
            }],
        }
    }

    /// Inclusive `[lo, hi]` bounds on a single integer field
    pub fn between(field: impl Into<String>, lo: i64, hi: i64) -> Self {
        let field = field.into();
        Self {
            predicates: vec![
                FieldPredicate {
                    field: field.clone(),
                    predicate: Predicate::Gte(lo),
                },
                FieldPredicate {
                    field,
                    predicate: Predicate::Lte(hi),
                },
            ],
        }
    }

    /// Compile the filter into an evaluable form.
    ///
    /// Containment fragments become case-insensitive regexes here; a
    /// malformed fragment surfaces as an error rather than a non-match.
    pub fn compile(&self) -> Result<CompiledFilter, FilterError> {
        let mut predicates = Vec::with_capacity(self.predicates.len());

        for expr in &self.predicates {
            let compiled = match &expr.predicate {
                Predicate::Eq(raw) => CompiledPredicate::Eq(raw.clone()),
                Predicate::Contains(fragment) => {
                    let regex = RegexBuilder::new(fragment)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| FilterError {
                            field: expr.field.clone(),
                            source,
                        })?;
                    CompiledPredicate::Matches(regex)
                }
                Predicate::Gte(bound) => CompiledPredicate::Gte(*bound),
                Predicate::Lte(bound) => CompiledPredicate::Lte(*bound),
            };
            predicates.push((expr.field.clone(), compiled));
        }

        Ok(CompiledFilter { predicates })
    }
}

/// A filter ready for evaluation against documents
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    predicates: Vec<(String, CompiledPredicate)>,
}

#[derive(Debug, Clone)]
enum CompiledPredicate {
    Eq(String),
    Matches(Regex),
    Gte(i64),
    Lte(i64),
}

impl CompiledFilter {
    /// Check if a document matches all predicates.
    ///
    /// A predicate on a missing field never matches.
    pub fn matches(&self, doc: &Value) -> bool {
        self.predicates.iter().all(|(field, predicate)| {
            doc.get(field)
                .map(|value| predicate.matches(value))
                .unwrap_or(false)
        })
    }
}

impl CompiledPredicate {
    fn matches(&self, value: &Value) -> bool {
        match self {
            CompiledPredicate::Eq(raw) => eq_matches(raw, value),
            CompiledPredicate::Matches(regex) => {
                value.as_str().map(|s| regex.is_match(s)).unwrap_or(false)
            }
            CompiledPredicate::Gte(bound) => value.as_i64().map(|n| n >= *bound).unwrap_or(false),
            CompiledPredicate::Lte(bound) => value.as_i64().map(|n| n <= *bound).unwrap_or(false),
        }
    }
}

/// Loose comparison of a raw request token against a field value.
///
/// String fields compare exactly; numeric and boolean fields match when the
/// token parses to the field's value. This mirrors what a schema-aware
/// document store does when it casts query operands.
fn eq_matches(raw: &str, value: &Value) -> bool {
    match value {
        Value::String(s) => s == raw,
        Value::Number(n) => raw
            .parse::<f64>()
            .map(|parsed| n.as_f64() == Some(parsed))
            .unwrap_or(false),
        Value::Bool(b) => raw.parse::<bool>().map(|parsed| parsed == *b).unwrap_or(false),
        Value::Null => raw == "null",
        _ => false,
    }
}

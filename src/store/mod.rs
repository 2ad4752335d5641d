//! # Document Store Capability
//!
//! The HTTP layer is written against the [`DocumentStore`] trait and receives
//! its implementation at construction time; nothing in the request path
//! reaches for ambient connection state. The shipped implementation is
//! [`MemoryStore`].

mod errors;
mod memory;
mod schema;

pub use errors::{StoreError, StoreErrorKind, StoreResult};
pub use memory::MemoryStore;
pub use schema::{FieldKind, FieldRule, Schema};

use serde_json::Value;

use crate::query::Filter;

/// Operations a document store exposes to the HTTP layer.
///
/// Each call resolves exactly once: with a value, with a well-defined
/// absence (`None`/`false`), or with a classified [`StoreError`].
pub trait DocumentStore: Send + Sync {
    /// All documents matching the filter, in store order
    fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>>;

    /// Exact lookup by identifier; absence is `None`, not an error
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Value>>;

    /// Insert a new document; the store assigns the identifier and returns
    /// the stored form including defaults
    fn insert(&self, document: Value) -> StoreResult<Value>;

    /// Merge fields into an existing document and return the post-update
    /// form. Never creates a document.
    fn update(&self, id: &str, changes: &Value) -> StoreResult<Option<Value>>;

    /// Remove a document, reporting whether one was actually removed
    fn remove(&self, id: &str) -> StoreResult<bool>;
}

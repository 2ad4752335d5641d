//! In-memory document store
//!
//! Documents are JSON objects held behind an `RwLock`, in insertion order.
//! Identifiers are store-assigned UUIDs; `createdAt`/`updatedAt` are stamped
//! as store defaults. Good enough for a single process; anything needing
//! durability implements [`DocumentStore`] over a real engine.

use std::sync::RwLock;

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::query::Filter;

use super::errors::{StoreError, StoreResult};
use super::schema::Schema;
use super::DocumentStore;

/// RwLock-guarded vector of documents with a per-collection schema
pub struct MemoryStore {
    documents: RwLock<Vec<Value>>,
    schema: Schema,
}

impl MemoryStore {
    /// A store for the movie collection
    pub fn new() -> Self {
        Self::with_schema(Schema::movie())
    }

    pub fn with_schema(schema: Schema) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            schema,
        }
    }

    /// Parse an identifier; anything that is not a UUID cannot name a
    /// document and is a query failure, never a miss.
    fn parse_id(id: &str) -> StoreResult<String> {
        Uuid::parse_str(id)
            .map(|uuid| uuid.to_string())
            .map_err(|e| StoreError::MalformedId(format!("'{}': {}", id, e)))
    }

    fn document_id(document: &Value) -> Option<&str> {
        document.get("id").and_then(Value::as_str)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>> {
        let compiled = filter
            .compile()
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        Ok(documents
            .iter()
            .filter(|doc| compiled.matches(doc))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Value>> {
        let id = Self::parse_id(id)?;

        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        Ok(documents
            .iter()
            .find(|doc| Self::document_id(doc) == Some(id.as_str()))
            .cloned())
    }

    fn insert(&self, mut document: Value) -> StoreResult<Value> {
        self.schema
            .check(&document)
            .map_err(StoreError::InvalidDocument)?;

        let now = Utc::now().to_rfc3339();
        let Some(object) = document.as_object_mut() else {
            return Err(StoreError::InvalidDocument(
                "document must be a JSON object".to_string(),
            ));
        };
        object.insert("id".to_string(), json!(Uuid::new_v4().to_string()));
        object.insert("createdAt".to_string(), json!(now));
        object.insert("updatedAt".to_string(), json!(now));

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        documents.push(document.clone());

        Ok(document)
    }

    fn update(&self, id: &str, changes: &Value) -> StoreResult<Option<Value>> {
        let id = Self::parse_id(id)?;

        let Some(changes) = changes.as_object() else {
            return Err(StoreError::Query(
                "update payload must be a JSON object".to_string(),
            ));
        };

        // Identifiers are immutable; reject before touching the document
        if let Some(new_id) = changes.get("id") {
            if new_id.as_str() != Some(id.as_str()) {
                return Err(StoreError::Query("document id is immutable".to_string()));
            }
        }

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let Some(document) = documents
            .iter_mut()
            .find(|doc| Self::document_id(doc) == Some(id.as_str()))
        else {
            return Ok(None);
        };

        if let Some(object) = document.as_object_mut() {
            for (key, value) in changes {
                if key == "id" {
                    continue;
                }
                object.insert(key.clone(), value.clone());
            }
            object.insert("updatedAt".to_string(), json!(Utc::now().to_rfc3339()));
        }

        Ok(Some(document.clone()))
    }

    fn remove(&self, id: &str) -> StoreResult<bool> {
        let id = Self::parse_id(id)?;

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        match documents
            .iter()
            .position(|doc| Self::document_id(doc) == Some(id.as_str()))
        {
            Some(index) => {
                documents.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

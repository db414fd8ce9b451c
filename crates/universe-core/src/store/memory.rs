//! In-process document store
//!
//! Backs the reference deployment and the test suite. Collections live in a
//! single `RwLock`-guarded map keyed collection → id → fields, so a batch
//! delete holding the write lock is atomic with respect to every other
//! operation.

use super::document::{Document, into_object};
use super::DocumentStore;
use crate::error::{UniverseError, UniverseResult};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

type Collections = HashMap<String, HashMap<String, Map<String, Value>>>;

/// In-memory [`DocumentStore`] implementation
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }

    /// Whether a collection holds no documents
    pub async fn is_empty(&self, collection: &str) -> bool {
        self.len(collection).await == 0
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> UniverseResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn list(&self, collection: &str) -> UniverseResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let mut docs: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        // Stable order for callers; the map itself is unordered.
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(docs)
    }

    async fn find_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> UniverseResult<Vec<Document>> {
        let mut docs = self.list(collection).await?;
        docs.retain(|doc| doc.field(field) == Some(value));
        Ok(docs)
    }

    async fn create(&self, collection: &str, data: Value) -> UniverseResult<String> {
        let mut fields = into_object(data)?;
        let id = Uuid::new_v4().to_string();
        fields.insert(
            "created_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn set_merge(&self, collection: &str, id: &str, data: Value) -> UniverseResult<()> {
        let patch = into_object(data)?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        let fields = docs.entry(id.to_string()).or_default();
        // Shallow merge: top-level keys overwrite, everything else stays.
        for (key, value) in patch {
            fields.insert(key, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> UniverseResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    async fn delete_batch(&self, collection: &str, ids: &[String]) -> UniverseResult<usize> {
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| UniverseError::store(format!("unknown collection: {collection}")))?;
        // All-or-nothing: verify before mutating anything.
        for id in ids {
            if !docs.contains_key(id) {
                return Err(UniverseError::store(format!(
                    "batch delete aborted, missing document: {id}"
                )));
            }
        }
        for id in ids {
            docs.remove(id);
        }
        Ok(ids.len())
    }
}

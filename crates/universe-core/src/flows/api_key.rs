//! API key flows
//!
//! Key material is generated server-side on create. The full key is returned
//! exactly once, in the save outcome message; listings only ever expose the
//! masked form.

use super::{FlowOutcome, list_entities};
use crate::error::UniverseResult;
use crate::store::{DocumentStore, collections};
use crate::types::{ApiKey, SaveApiKeyInput};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Save, delete, and list API keys
#[derive(Clone)]
pub struct ApiKeyFlows {
    store: Arc<dyn DocumentStore>,
}

impl ApiKeyFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create a key (generating its material) or rename an existing one
    pub async fn save(&self, input: SaveApiKeyInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match &input.id {
            Some(id) => {
                // Renames never touch the key material.
                let patch = json!({"name": input.name, "tenant_id": input.tenant_id});
                match self.store.set_merge(collections::API_KEYS, id, patch).await {
                    Ok(()) => FlowOutcome::saved(id.clone(), "API key updated"),
                    Err(e) => FlowOutcome::failure(&e),
                }
            }
            None => {
                let key = generate_key();
                let body = json!({
                    "name": input.name,
                    "tenant_id": input.tenant_id,
                    "key": key,
                });
                match self.store.create(collections::API_KEYS, body).await {
                    Ok(id) => FlowOutcome::saved(id, key),
                    Err(e) => FlowOutcome::failure(&e),
                }
            }
        }
    }

    /// Remove an API key by id (idempotent)
    pub async fn delete(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::API_KEYS, id).await {
            Ok(()) => FlowOutcome::ok("API key deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch every API key with its material masked
    pub async fn list(&self) -> UniverseResult<Vec<ApiKey>> {
        let keys: Vec<ApiKey> = list_entities(&self.store, collections::API_KEYS).await?;
        Ok(keys.into_iter().map(ApiKey::masked).collect())
    }
}

/// Generate fresh key material
fn generate_key() -> String {
    format!("pu-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_create_returns_full_key_once() {
        let flows = ApiKeyFlows::new(Arc::new(MemoryStore::new()));
        let outcome = flows
            .save(SaveApiKeyInput {
                id: None,
                name: "ci".to_string(),
                tenant_id: None,
            })
            .await;
        assert!(outcome.success);
        assert!(outcome.message.starts_with("pu-"));

        let listed = flows.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_ne!(listed[0].key, outcome.message);
        assert!(listed[0].key.contains("..."));
    }

    #[tokio::test]
    async fn test_rename_keeps_key_material() {
        let store = Arc::new(MemoryStore::new());
        let flows = ApiKeyFlows::new(store.clone());
        let created = flows
            .save(SaveApiKeyInput {
                id: None,
                name: "ci".to_string(),
                tenant_id: None,
            })
            .await;
        let id = created.id.clone().unwrap();
        let original_key = created.message.clone();

        let renamed = flows
            .save(SaveApiKeyInput {
                id: Some(id.clone()),
                name: "ci-renamed".to_string(),
                tenant_id: None,
            })
            .await;
        assert!(renamed.success);

        let doc = store.get(collections::API_KEYS, &id).await.unwrap().unwrap();
        assert_eq!(doc.str_field("name"), Some("ci-renamed"));
        assert_eq!(doc.str_field("key"), Some(original_key.as_str()));
    }
}

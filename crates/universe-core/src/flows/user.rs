//! User CRUD flows

use super::{FlowOutcome, list_entities, save_entity};
use crate::error::UniverseResult;
use crate::store::{DocumentStore, collections};
use crate::types::{SaveUserInput, User};
use serde_json::json;
use std::sync::Arc;

/// Save, delete, and list users
#[derive(Clone)]
pub struct UserFlows {
    store: Arc<dyn DocumentStore>,
}

impl UserFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or merge-update a user
    pub async fn save(&self, input: SaveUserInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, collections::USERS, &input.id, &input).await {
            Ok(id) => FlowOutcome::saved(id, "user saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove a user by id (idempotent)
    pub async fn delete(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::USERS, id).await {
            Ok(()) => FlowOutcome::ok("user deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch every user
    pub async fn list(&self) -> UniverseResult<Vec<User>> {
        list_entities(&self.store, collections::USERS).await
    }

    /// Fetch the users belonging to one tenant
    pub async fn list_by_tenant(&self, tenant_id: &str) -> UniverseResult<Vec<User>> {
        let docs = self
            .store
            .find_eq(collections::USERS, "tenant_id", &json!(tenant_id))
            .await?;
        docs.iter().map(|doc| doc.decode()).collect()
    }
}

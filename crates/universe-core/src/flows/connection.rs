//! LLM connection CRUD flows

use super::{FlowOutcome, list_entities, save_entity};
use crate::error::UniverseResult;
use crate::store::{DocumentStore, collections};
use crate::types::{LlmConnection, SaveConnectionInput};
use std::sync::Arc;

/// Save, delete, and list LLM connections
#[derive(Clone)]
pub struct ConnectionFlows {
    store: Arc<dyn DocumentStore>,
}

impl ConnectionFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or merge-update a connection
    pub async fn save(&self, input: SaveConnectionInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, collections::CONNECTIONS, &input.id, &input).await {
            Ok(id) => FlowOutcome::saved(id, "connection saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove a connection by id (idempotent)
    pub async fn delete(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::CONNECTIONS, id).await {
            Ok(()) => FlowOutcome::ok("connection deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch every connection, credentials masked
    pub async fn list(&self) -> UniverseResult<Vec<LlmConnection>> {
        let mut connections: Vec<LlmConnection> =
            list_entities(&self.store, collections::CONNECTIONS).await?;
        for connection in &mut connections {
            connection.api_key = crate::types::mask_key(&connection.api_key);
        }
        Ok(connections)
    }
}

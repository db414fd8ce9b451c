//! Prompt CRUD flows
//!
//! Prompts additionally support archiving (a flag flip via merge) and
//! tenant-scoped listing: a tenant sees every universal prompt plus its own
//! exclusive ones.

use super::{FlowOutcome, list_entities, save_entity};
use crate::error::{UniverseError, UniverseResult};
use crate::store::{DocumentStore, collections};
use crate::types::{Prompt, PromptScope, SavePromptInput};
use serde_json::json;
use std::sync::Arc;

/// Save, delete, archive, and list prompts
#[derive(Clone)]
pub struct PromptFlows {
    store: Arc<dyn DocumentStore>,
}

impl PromptFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or merge-update a prompt
    pub async fn save(&self, input: SavePromptInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, collections::PROMPTS, &input.id, &input).await {
            Ok(id) => FlowOutcome::saved(id, "prompt saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove a prompt by id (idempotent)
    pub async fn delete(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::PROMPTS, id).await {
            Ok(()) => FlowOutcome::ok("prompt deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Flip the archived flag on a prompt
    pub async fn set_archived(&self, id: &str, archived: bool) -> FlowOutcome {
        match self
            .store
            .set_merge(collections::PROMPTS, id, json!({"archived": archived}))
            .await
        {
            Ok(()) => FlowOutcome::saved(
                id,
                if archived {
                    "prompt archived"
                } else {
                    "prompt unarchived"
                },
            ),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch a single prompt
    pub async fn get(&self, id: &str) -> UniverseResult<Prompt> {
        let doc = self
            .store
            .get(collections::PROMPTS, id)
            .await?
            .ok_or_else(|| UniverseError::not_found("prompt", id))?;
        doc.decode()
    }

    /// Fetch every prompt
    pub async fn list(&self) -> UniverseResult<Vec<Prompt>> {
        list_entities(&self.store, collections::PROMPTS).await
    }

    /// Fetch the prompts visible to one tenant: all universal prompts plus
    /// that tenant's exclusive ones, archived prompts excluded
    pub async fn list_for_tenant(&self, tenant_id: &str) -> UniverseResult<Vec<Prompt>> {
        let mut prompts: Vec<Prompt> = self.list().await?;
        prompts.retain(|p| {
            !p.archived
                && match p.scope {
                    PromptScope::Universal => true,
                    PromptScope::Exclusive => p.tenant_id.as_deref() == Some(tenant_id),
                }
        });
        Ok(prompts)
    }
}

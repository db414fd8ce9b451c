//! Tenant CRUD flows

use super::{FlowOutcome, list_entities, save_entity};
use crate::error::UniverseResult;
use crate::store::{DocumentStore, collections};
use crate::types::{SaveTenantInput, Tenant};
use std::sync::Arc;
use tracing::debug;

/// Save, delete, and list tenants
#[derive(Clone)]
pub struct TenantFlows {
    store: Arc<dyn DocumentStore>,
}

impl TenantFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or merge-update a tenant
    pub async fn save(&self, input: SaveTenantInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, collections::TENANTS, &input.id, &input).await {
            Ok(id) => {
                debug!(tenant_id = %id, "tenant saved");
                FlowOutcome::saved(id, "tenant saved")
            }
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove a tenant by id (idempotent)
    pub async fn delete(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::TENANTS, id).await {
            Ok(()) => FlowOutcome::ok("tenant deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch every tenant
    pub async fn list(&self) -> UniverseResult<Vec<Tenant>> {
        list_entities(&self.store, collections::TENANTS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::LifecycleStatus;

    fn flows() -> TenantFlows {
        TenantFlows::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_save_generates_id() {
        let flows = flows();
        let outcome = flows
            .save(SaveTenantInput {
                id: None,
                company_name: "Acme".to_string(),
                admin_email: "a@acme.com".to_string(),
                status: LifecycleStatus::Pending,
            })
            .await;
        assert!(outcome.success);
        assert!(outcome.id.is_some());
    }

    #[tokio::test]
    async fn test_invalid_input_fails_without_side_effect() {
        let store = Arc::new(MemoryStore::new());
        let flows = TenantFlows::new(store.clone());
        let outcome = flows
            .save(SaveTenantInput {
                id: None,
                company_name: String::new(),
                admin_email: "a@acme.com".to_string(),
                status: LifecycleStatus::Pending,
            })
            .await;
        assert!(!outcome.success);
        assert!(store.is_empty(collections::TENANTS).await);
    }

    #[tokio::test]
    async fn test_update_preserves_creation_timestamp() {
        let flows = flows();
        let outcome = flows
            .save(SaveTenantInput {
                id: None,
                company_name: "Acme".to_string(),
                admin_email: "a@acme.com".to_string(),
                status: LifecycleStatus::Pending,
            })
            .await;
        let id = outcome.id.unwrap();

        let outcome = flows
            .save(SaveTenantInput {
                id: Some(id.clone()),
                company_name: "Acme Corp".to_string(),
                admin_email: "a@acme.com".to_string(),
                status: LifecycleStatus::Active,
            })
            .await;
        assert!(outcome.success);
        assert_eq!(outcome.id.as_deref(), Some(id.as_str()));

        let tenants = flows.list().await.unwrap();
        let tenant = tenants.iter().find(|t| t.id == id).unwrap();
        assert_eq!(tenant.company_name, "Acme Corp");
        assert_eq!(tenant.status, LifecycleStatus::Active);
        assert!(tenant.created_at.is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_tenant_succeeds() {
        let outcome = flows().delete("no-such-id").await;
        assert!(outcome.success);
    }
}

//! Maintenance flows: orphan scan and batch purge
//!
//! Referential consistency is not enforced at write time, so documents can
//! outlive the tenant they reference. The scan walks the user and order
//! collections reporting broken tenant references ("orphaned") and
//! empty/missing required fields ("incomplete"); the purge removes a
//! reported id set per collection with the atomic batch write.

use super::FlowOutcome;
use crate::error::UniverseResult;
use crate::store::{Document, DocumentStore, collections};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Scan result over the user and order collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceReport {
    /// Users whose tenant reference points at a missing tenant
    pub orphaned_users: Vec<String>,
    /// Users with empty or missing required fields
    pub incomplete_users: Vec<String>,
    /// Orders whose tenant reference points at a missing tenant
    pub orphaned_orders: Vec<String>,
    /// Orders with empty or missing required fields
    pub incomplete_orders: Vec<String>,
}

impl MaintenanceReport {
    /// Whether the scan found anything to clean up
    pub fn is_clean(&self) -> bool {
        self.orphaned_users.is_empty()
            && self.incomplete_users.is_empty()
            && self.orphaned_orders.is_empty()
            && self.incomplete_orders.is_empty()
    }
}

/// Input for the purge flow: the ids to remove per collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurgeInput {
    #[serde(default)]
    pub user_ids: Vec<String>,
    #[serde(default)]
    pub order_ids: Vec<String>,
}

/// Orphan scan and batch purge
#[derive(Clone)]
pub struct MaintenanceFlows {
    store: Arc<dyn DocumentStore>,
}

impl MaintenanceFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Walk users and orders, reporting orphaned and incomplete documents
    pub async fn scan(&self) -> UniverseResult<MaintenanceReport> {
        let tenants = self.store.list(collections::TENANTS).await?;
        let tenant_ids: HashSet<&str> = tenants.iter().map(|doc| doc.id.as_str()).collect();

        let mut report = MaintenanceReport::default();

        for doc in self.store.list(collections::USERS).await? {
            if is_blank(&doc, "name") || is_blank(&doc, "email") {
                report.incomplete_users.push(doc.id.clone());
            } else if has_broken_tenant_ref(&doc, &tenant_ids) {
                report.orphaned_users.push(doc.id.clone());
            }
        }

        for doc in self.store.list(collections::ORDERS).await? {
            let empty_items = doc
                .field("items")
                .and_then(Value::as_array)
                .is_none_or(|items| items.is_empty());
            if is_blank(&doc, "tenant_id") || empty_items {
                report.incomplete_orders.push(doc.id.clone());
            } else if has_broken_tenant_ref(&doc, &tenant_ids) {
                report.orphaned_orders.push(doc.id.clone());
            }
        }

        info!(
            orphaned_users = report.orphaned_users.len(),
            incomplete_users = report.incomplete_users.len(),
            orphaned_orders = report.orphaned_orders.len(),
            incomplete_orders = report.incomplete_orders.len(),
            "maintenance scan finished"
        );
        Ok(report)
    }

    /// Batch-delete reported documents
    ///
    /// Each collection's batch is atomic on its own; a failed user batch
    /// stops the flow before orders are touched.
    pub async fn purge(&self, input: PurgeInput) -> FlowOutcome {
        let mut removed = 0;
        if !input.user_ids.is_empty() {
            match self
                .store
                .delete_batch(collections::USERS, &input.user_ids)
                .await
            {
                Ok(count) => removed += count,
                Err(e) => return FlowOutcome::failure(&e),
            }
        }
        if !input.order_ids.is_empty() {
            match self
                .store
                .delete_batch(collections::ORDERS, &input.order_ids)
                .await
            {
                Ok(count) => removed += count,
                Err(e) => return FlowOutcome::failure(&e),
            }
        }
        FlowOutcome::ok(format!("purged {removed} documents"))
    }
}

/// A tenant reference is broken when set but pointing at no stored tenant
fn has_broken_tenant_ref(doc: &Document, tenant_ids: &HashSet<&str>) -> bool {
    match doc.str_field("tenant_id") {
        Some(tenant_id) if !tenant_id.is_empty() => !tenant_ids.contains(tenant_id),
        _ => false,
    }
}

/// Whether a string field is missing or effectively empty
fn is_blank(doc: &Document, field: &str) -> bool {
    doc.str_field(field).is_none_or(|s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    async fn seed(store: &MemoryStore) -> (String, String) {
        let tenant_id = store
            .create(
                collections::TENANTS,
                json!({"company_name": "Acme", "admin_email": "a@acme.com"}),
            )
            .await
            .unwrap();
        let good_user = store
            .create(
                collections::USERS,
                json!({"name": "alice", "email": "alice@acme.com", "tenant_id": tenant_id}),
            )
            .await
            .unwrap();
        (tenant_id, good_user)
    }

    #[tokio::test]
    async fn test_scan_reports_orphans_and_incomplete() {
        let store = MemoryStore::new();
        let (_tenant_id, good_user) = seed(&store).await;

        let orphan = store
            .create(
                collections::USERS,
                json!({"name": "bob", "email": "bob@x.com", "tenant_id": "gone"}),
            )
            .await
            .unwrap();
        let incomplete = store
            .create(
                collections::USERS,
                json!({"name": "", "email": "c@x.com"}),
            )
            .await
            .unwrap();
        let empty_order = store
            .create(
                collections::ORDERS,
                json!({"tenant_id": "gone", "items": []}),
            )
            .await
            .unwrap();

        let flows = MaintenanceFlows::new(Arc::new(store));
        let report = flows.scan().await.unwrap();

        assert_eq!(report.orphaned_users, vec![orphan]);
        assert_eq!(report.incomplete_users, vec![incomplete]);
        // Empty items take precedence over the broken reference.
        assert_eq!(report.incomplete_orders, vec![empty_order]);
        assert!(report.orphaned_orders.is_empty());
        assert!(!report.orphaned_users.contains(&good_user));
    }

    #[tokio::test]
    async fn test_clean_store_reports_clean() {
        let store = MemoryStore::new();
        seed(&store).await;
        let flows = MaintenanceFlows::new(Arc::new(store));
        assert!(flows.scan().await.unwrap().is_clean());
    }

    #[tokio::test]
    async fn test_purge_removes_reported_documents() {
        let store = MemoryStore::new();
        seed(&store).await;
        let orphan = store
            .create(
                collections::USERS,
                json!({"name": "bob", "email": "b@x.com", "tenant_id": "gone"}),
            )
            .await
            .unwrap();

        let flows = MaintenanceFlows::new(Arc::new(store.clone()));
        let report = flows.scan().await.unwrap();
        let outcome = flows
            .purge(PurgeInput {
                user_ids: report.orphaned_users,
                order_ids: vec![],
            })
            .await;
        assert!(outcome.success);
        assert!(store.get(collections::USERS, &orphan).await.unwrap().is_none());
        assert!(flows.scan().await.unwrap().is_clean());
    }

    #[tokio::test]
    async fn test_purge_nothing_is_ok() {
        let flows = MaintenanceFlows::new(Arc::new(MemoryStore::new()));
        let outcome = flows.purge(PurgeInput::default()).await;
        assert!(outcome.success);
    }
}

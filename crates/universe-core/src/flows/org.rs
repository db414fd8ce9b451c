//! Organizational structure flows: roles, departments, positions

use super::{FlowOutcome, save_entity};
use crate::error::UniverseResult;
use crate::store::{DocumentStore, collections};
use crate::types::{
    Department, Position, Role, SaveDepartmentInput, SavePositionInput, SaveRoleInput,
};
use serde_json::json;
use std::sync::Arc;

/// CRUD over the three tenant-scoped org-structure collections
#[derive(Clone)]
pub struct OrgFlows {
    store: Arc<dyn DocumentStore>,
}

impl OrgFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or merge-update a role
    pub async fn save_role(&self, input: SaveRoleInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, collections::ROLES, &input.id, &input).await {
            Ok(id) => FlowOutcome::saved(id, "role saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Create or merge-update a department
    pub async fn save_department(&self, input: SaveDepartmentInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, collections::DEPARTMENTS, &input.id, &input).await {
            Ok(id) => FlowOutcome::saved(id, "department saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Create or merge-update a position
    pub async fn save_position(&self, input: SavePositionInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, collections::POSITIONS, &input.id, &input).await {
            Ok(id) => FlowOutcome::saved(id, "position saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove a role by id (idempotent)
    pub async fn delete_role(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::ROLES, id).await {
            Ok(()) => FlowOutcome::ok("role deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove a department by id (idempotent)
    pub async fn delete_department(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::DEPARTMENTS, id).await {
            Ok(()) => FlowOutcome::ok("department deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove a position by id (idempotent)
    pub async fn delete_position(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::POSITIONS, id).await {
            Ok(()) => FlowOutcome::ok("position deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch one tenant's roles
    pub async fn list_roles(&self, tenant_id: &str) -> UniverseResult<Vec<Role>> {
        self.list_scoped(collections::ROLES, tenant_id).await
    }

    /// Fetch one tenant's departments
    pub async fn list_departments(&self, tenant_id: &str) -> UniverseResult<Vec<Department>> {
        self.list_scoped(collections::DEPARTMENTS, tenant_id).await
    }

    /// Fetch one tenant's positions
    pub async fn list_positions(&self, tenant_id: &str) -> UniverseResult<Vec<Position>> {
        self.list_scoped(collections::POSITIONS, tenant_id).await
    }

    async fn list_scoped<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        tenant_id: &str,
    ) -> UniverseResult<Vec<T>> {
        let docs = self
            .store
            .find_eq(collection, "tenant_id", &json!(tenant_id))
            .await?;
        docs.iter().map(|doc| doc.decode()).collect()
    }
}

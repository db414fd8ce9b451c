//! Procurement order flows
//!
//! Saves enforce the order status state machine and recompute the stored
//! total from the line items, so the total can never drift from the items.

use super::{FlowOutcome, list_entities};
use crate::error::{UniverseError, UniverseResult};
use crate::store::{DocumentStore, collections};
use crate::types::{Order, SaveOrderInput};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

/// Save, delete, and list orders
#[derive(Clone)]
pub struct OrderFlows {
    store: Arc<dyn DocumentStore>,
}

impl OrderFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or merge-update an order
    ///
    /// Updates check the status transition table against the stored order;
    /// an illegal jump fails the flow before anything is written.
    pub async fn save(&self, input: SaveOrderInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match self.save_inner(input).await {
            Ok(id) => FlowOutcome::saved(id, "order saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    async fn save_inner(&self, input: SaveOrderInput) -> UniverseResult<String> {
        let mut body = serde_json::to_value(&input)?;
        if let Value::Object(map) = &mut body {
            map.remove("id");
            map.insert("total_cents".to_string(), json!(input.total_cents()));
            map.insert(
                "updated_at".to_string(),
                json!(Utc::now().to_rfc3339()),
            );
        }

        match &input.id {
            Some(id) => {
                let existing: Order = self
                    .store
                    .get(collections::ORDERS, id)
                    .await?
                    .ok_or_else(|| UniverseError::not_found("order", id.as_str()))?
                    .decode()?;
                if !existing.status.can_transition(input.status) {
                    return Err(UniverseError::validation(format!(
                        "illegal order status transition: {:?} -> {:?}",
                        existing.status, input.status
                    )));
                }
                self.store.set_merge(collections::ORDERS, id, body).await?;
                Ok(id.clone())
            }
            None => self.store.create(collections::ORDERS, body).await,
        }
    }

    /// Remove an order by id (idempotent)
    pub async fn delete(&self, id: &str) -> FlowOutcome {
        match self.store.delete(collections::ORDERS, id).await {
            Ok(()) => FlowOutcome::ok("order deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch every order
    pub async fn list(&self) -> UniverseResult<Vec<Order>> {
        list_entities(&self.store, collections::ORDERS).await
    }

    /// Fetch the orders placed by one tenant
    pub async fn list_by_tenant(&self, tenant_id: &str) -> UniverseResult<Vec<Order>> {
        let docs = self
            .store
            .find_eq(collections::ORDERS, "tenant_id", &json!(tenant_id))
            .await?;
        docs.iter().map(|doc| doc.decode()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{OrderItem, OrderStatus};

    fn input(id: Option<String>, status: OrderStatus) -> SaveOrderInput {
        SaveOrderInput {
            id,
            tenant_id: "t1".to_string(),
            items: vec![OrderItem {
                name: "Seat license".to_string(),
                quantity: 2,
                unit_price_cents: 2_500,
            }],
            status,
        }
    }

    #[tokio::test]
    async fn test_create_computes_total() {
        let flows = OrderFlows::new(Arc::new(MemoryStore::new()));
        let outcome = flows
            .save(input(None, OrderStatus::PendingConfirmation))
            .await;
        assert!(outcome.success);

        let orders = flows.list().await.unwrap();
        assert_eq!(orders[0].total_cents, 5_000);
        assert!(orders[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_legal_status_progression() {
        let flows = OrderFlows::new(Arc::new(MemoryStore::new()));
        let id = flows
            .save(input(None, OrderStatus::PendingConfirmation))
            .await
            .id
            .unwrap();

        for status in [
            OrderStatus::PendingPayment,
            OrderStatus::Configuring,
            OrderStatus::Complete,
        ] {
            let outcome = flows.save(input(Some(id.clone()), status)).await;
            assert!(outcome.success, "transition to {status:?} should succeed");
        }
    }

    #[tokio::test]
    async fn test_illegal_jump_rejected() {
        let flows = OrderFlows::new(Arc::new(MemoryStore::new()));
        let id = flows
            .save(input(None, OrderStatus::PendingConfirmation))
            .await
            .id
            .unwrap();

        let outcome = flows.save(input(Some(id), OrderStatus::Complete)).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("transition"));
    }

    #[tokio::test]
    async fn test_update_of_missing_order_fails() {
        let flows = OrderFlows::new(Arc::new(MemoryStore::new()));
        let outcome = flows
            .save(input(
                Some("missing".to_string()),
                OrderStatus::PendingConfirmation,
            ))
            .await;
        assert!(!outcome.success);
    }
}

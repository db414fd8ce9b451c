//! Procurement order entity, status state machine, and save input

use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a procurement order
///
/// Orders progress pending-confirmation → pending-payment → configuring →
/// complete; cancellation is allowed from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingConfirmation,
    PendingPayment,
    Configuring,
    Complete,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order may move from `self` to `next`
    ///
    /// Staying in the same status is always allowed (a merge-update that does
    /// not touch the status field is a no-op transition).
    pub fn can_transition(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        if *self == next {
            return true;
        }
        match (*self, next) {
            (PendingConfirmation, PendingPayment) => true,
            (PendingPayment, Configuring) => true,
            (Configuring, Complete) => true,
            (PendingConfirmation | PendingPayment | Configuring, Cancelled) => true,
            _ => false,
        }
    }

    /// Whether this status admits no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Complete | OrderStatus::Cancelled)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::PendingConfirmation
    }
}

/// A single order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price in minor currency units
    pub unit_price_cents: i64,
}

impl OrderItem {
    /// Line total in minor currency units
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

/// A procurement order placed by a tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: String,
    pub tenant_id: String,
    pub items: Vec<OrderItem>,
    /// Recomputed from items on every save
    pub total_cents: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating or updating an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveOrderInput {
    pub id: Option<String>,
    pub tenant_id: String,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
}

impl SaveOrderInput {
    /// Validate the input shape before any side effect
    pub fn validate(&self) -> UniverseResult<()> {
        if self.tenant_id.trim().is_empty() {
            return Err(UniverseError::validation("order requires a tenant reference"));
        }
        if self.items.is_empty() {
            return Err(UniverseError::validation("order requires at least one item"));
        }
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err(UniverseError::validation("order item name must not be empty"));
            }
            if item.quantity == 0 {
                return Err(UniverseError::validation(format!(
                    "order item '{}' has zero quantity",
                    item.name
                )));
            }
            if item.unit_price_cents < 0 {
                return Err(UniverseError::validation(format!(
                    "order item '{}' has negative price",
                    item.name
                )));
            }
        }
        Ok(())
    }

    /// Order total derived from line items
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(OrderItem::total_cents).sum()
    }
}

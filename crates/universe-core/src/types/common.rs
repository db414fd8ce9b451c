//! Enumerations shared across entities

use serde::{Deserialize, Serialize};

/// Lifecycle status of a tenant or user account
///
/// Transitions are admin-controlled; no automatic expiry. The original
/// deployment stored the pending state under its Chinese label, which is
/// accepted as a deserialization alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    /// Account is active and usable
    Active,
    /// Awaiting admin review
    #[serde(alias = "待审核")]
    Pending,
    /// Disabled by an admin
    Disabled,
}

impl Default for LifecycleStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleStatus::Active => write!(f, "active"),
            LifecycleStatus::Pending => write!(f, "pending"),
            LifecycleStatus::Disabled => write!(f, "disabled"),
        }
    }
}

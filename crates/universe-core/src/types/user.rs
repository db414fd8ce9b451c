//! User entity, role enumeration, and save input

use super::common::LifecycleStatus;
use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user on the platform
///
/// The set is closed; display labels are produced by a total function rather
/// than a lookup table, so a new variant cannot silently fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Operates the whole platform
    PlatformAdmin,
    /// Administers a single tenant
    TenantAdmin,
    /// Authors and maintains prompts
    Engineer,
    /// End user without management rights
    Individual,
}

impl UserRole {
    /// Human-readable label for the role
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::PlatformAdmin => "Platform Administrator",
            UserRole::TenantAdmin => "Tenant Administrator",
            UserRole::Engineer => "Prompt Engineer",
            UserRole::Individual => "Individual User",
        }
    }

    /// Whether the role may manage users within a tenant
    pub fn can_manage_tenant(&self) -> bool {
        matches!(self, UserRole::PlatformAdmin | UserRole::TenantAdmin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A platform user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: LifecycleStatus,
    /// Owning tenant, if the user belongs to one
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Org-structure references
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating or updating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveUserInput {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: LifecycleStatus,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,
}

impl SaveUserInput {
    /// Validate the input shape before any side effect
    pub fn validate(&self) -> UniverseResult<()> {
        if self.name.trim().is_empty() {
            return Err(UniverseError::validation("user name must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(UniverseError::validation(format!(
                "invalid email: {}",
                self.email
            )));
        }
        // Tenant admins and individuals under an org must name their tenant.
        if self.role == UserRole::TenantAdmin && self.tenant_id.is_none() {
            return Err(UniverseError::validation(
                "tenant admin requires a tenant reference",
            ));
        }
        Ok(())
    }
}

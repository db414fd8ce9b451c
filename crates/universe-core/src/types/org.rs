//! Tenant-scoped organizational structure: roles, departments, positions

use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named permission role within a tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A department within a tenant; departments may nest via `parent_id`
///
/// Cycle freedom is by convention only, matching the source data model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A position within a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating or updating a role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRoleInput {
    pub id: Option<String>,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Input for creating or updating a department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveDepartmentInput {
    pub id: Option<String>,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Input for creating or updating a position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePositionInput {
    pub id: Option<String>,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub department_id: Option<String>,
}

fn validate_named(tenant_id: &str, name: &str, what: &str) -> UniverseResult<()> {
    if tenant_id.trim().is_empty() {
        return Err(UniverseError::validation(format!(
            "{what} requires a tenant reference"
        )));
    }
    if name.trim().is_empty() {
        return Err(UniverseError::validation(format!(
            "{what} name must not be empty"
        )));
    }
    Ok(())
}

impl SaveRoleInput {
    pub fn validate(&self) -> UniverseResult<()> {
        validate_named(&self.tenant_id, &self.name, "role")
    }
}

impl SaveDepartmentInput {
    pub fn validate(&self) -> UniverseResult<()> {
        validate_named(&self.tenant_id, &self.name, "department")?;
        // A department cannot be its own parent.
        if let (Some(id), Some(parent)) = (&self.id, &self.parent_id) {
            if id == parent {
                return Err(UniverseError::validation(
                    "department cannot be its own parent",
                ));
            }
        }
        Ok(())
    }
}

impl SavePositionInput {
    pub fn validate(&self) -> UniverseResult<()> {
        validate_named(&self.tenant_id, &self.name, "position")
    }
}

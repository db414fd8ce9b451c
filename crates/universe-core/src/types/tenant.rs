//! Tenant entity and save input

use super::common::LifecycleStatus;
use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An organization-level account under which users are grouped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    /// Document id (server-assigned)
    #[serde(default)]
    pub id: String,
    /// Company display name
    pub company_name: String,
    /// Admin contact email
    pub admin_email: String,
    /// Lifecycle status
    #[serde(default)]
    pub status: LifecycleStatus,
    /// Registration timestamp (server-set on create)
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating or updating a tenant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveTenantInput {
    /// Existing document id; absent means create
    pub id: Option<String>,
    pub company_name: String,
    pub admin_email: String,
    #[serde(default)]
    pub status: LifecycleStatus,
}

impl SaveTenantInput {
    /// Validate the input shape before any side effect
    pub fn validate(&self) -> UniverseResult<()> {
        if self.company_name.trim().is_empty() {
            return Err(UniverseError::validation("company name must not be empty"));
        }
        if !self.admin_email.contains('@') {
            return Err(UniverseError::validation(format!(
                "invalid admin email: {}",
                self.admin_email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = SaveTenantInput {
            id: None,
            company_name: "Acme".to_string(),
            admin_email: "a@acme.com".to_string(),
            status: LifecycleStatus::Pending,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_company_name() {
        let input = SaveTenantInput {
            company_name: "  ".to_string(),
            admin_email: "a@acme.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(UniverseError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_bad_email() {
        let input = SaveTenantInput {
            company_name: "Acme".to_string(),
            admin_email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }
}

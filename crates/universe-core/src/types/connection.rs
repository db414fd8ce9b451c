//! LLM connection entity and save input

use super::common::LifecycleStatus;
use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configured binding to one external LLM provider/model
///
/// Connections carry a priority (1-100, lower wins) used when multiple
/// connections match a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConnection {
    #[serde(default)]
    pub id: String,
    /// Model identifier passed through to the provider
    pub model: String,
    /// Provider the connection targets (informational; the transport is
    /// selected by the embedder)
    pub provider: String,
    /// API credential
    pub api_key: String,
    /// Whether the connection is platform-wide or tenant-scoped
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Routing category, e.g. "chat" or "analysis"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: LifecycleStatus,
    /// 1-100, lower wins
    #[serde(default = "default_priority")]
    pub priority: u8,
    /// Default sampling temperature applied when the caller passes none
    #[serde(default)]
    pub default_temperature: Option<f32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_priority() -> u8 {
    50
}

/// Input for creating or updating an LLM connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveConnectionInput {
    pub id: Option<String>,
    pub model: String,
    pub provider: String,
    pub api_key: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: LifecycleStatus,
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default)]
    pub default_temperature: Option<f32>,
}

impl SaveConnectionInput {
    /// Validate the input shape before any side effect
    pub fn validate(&self) -> UniverseResult<()> {
        if self.model.trim().is_empty() {
            return Err(UniverseError::validation("model must not be empty"));
        }
        if self.provider.trim().is_empty() {
            return Err(UniverseError::validation("provider must not be empty"));
        }
        if !(1..=100).contains(&self.priority) {
            return Err(UniverseError::validation(format!(
                "priority must be within 1-100, got {}",
                self.priority
            )));
        }
        if let Some(t) = self.default_temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(UniverseError::validation(format!(
                    "temperature must be within 0.0-2.0, got {t}"
                )));
            }
        }
        Ok(())
    }
}

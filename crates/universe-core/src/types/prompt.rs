//! Prompt entity, scope, generated metadata, and save input

use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visibility scope of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptScope {
    /// Usable platform-wide
    Universal,
    /// Restricted to one tenant
    Exclusive,
}

impl Default for PromptScope {
    fn default() -> Self {
        Self::Universal
    }
}

/// Model-generated classification of a prompt
///
/// Produced by the metadata analyzer; all four fields are required in the
/// structured response, a partial result is treated as a failed analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMetadata {
    /// Where the prompt is applicable
    pub applicable_scope: String,
    /// Model the analyzer recommends for this prompt
    pub recommended_model: String,
    /// Constraints the prompt imposes on its output
    pub constraints: String,
    /// An example use-case
    pub use_case: String,
}

/// An AI prompt template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Owning expert-domain asset
    #[serde(default)]
    pub expert_domain_id: Option<String>,
    /// System instruction text
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// User-facing instruction template, may contain `{{variable}}` slots
    pub user_prompt: String,
    /// Context or examples prepended to the instruction
    #[serde(default)]
    pub context: Option<String>,
    /// Content the model should avoid producing
    #[serde(default)]
    pub negative_prompt: Option<String>,
    #[serde(default)]
    pub scope: PromptScope,
    /// Required when scope is exclusive
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Analyzer output, if analysis has been run
    #[serde(default)]
    pub metadata: Option<PromptMetadata>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating or updating a prompt
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavePromptInput {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub expert_domain_id: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    pub user_prompt: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub negative_prompt: Option<String>,
    #[serde(default)]
    pub scope: PromptScope,
    #[serde(default)]
    pub tenant_id: Option<String>,
}

impl SavePromptInput {
    /// Validate the input shape before any side effect
    pub fn validate(&self) -> UniverseResult<()> {
        if self.name.trim().is_empty() {
            return Err(UniverseError::validation("prompt name must not be empty"));
        }
        // The user prompt may be empty (a pure system prompt is legal) but it
        // must be present, which the struct shape already guarantees.
        if self.scope == PromptScope::Exclusive && self.tenant_id.is_none() {
            return Err(UniverseError::validation(
                "exclusive prompt requires a tenant reference",
            ));
        }
        Ok(())
    }
}

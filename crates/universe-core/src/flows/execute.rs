//! Prompt execution flow
//!
//! The end-to-end pipeline: load the prompt, render the user template,
//! assemble the role-tagged messages, resolve the connection, and issue a
//! single generation call.

use crate::error::{UniverseError, UniverseResult};
use crate::llm::{LlmExecutor, assemble_messages};
use crate::store::{DocumentStore, collections};
use crate::template::render_template;
use crate::types::{Prompt, PromptScope};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Input for a prompt execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutePromptInput {
    /// Prompt to execute
    pub prompt_id: String,
    /// Connection to execute against
    pub connection_id: String,
    /// Template variable bindings
    #[serde(default)]
    pub variables: HashMap<String, String>,
    /// Caller temperature override
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Tenant on whose behalf the execution runs; required to use that
    /// tenant's exclusive prompts
    #[serde(default)]
    pub tenant_id: Option<String>,
}

/// Result of a prompt execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutePromptOutput {
    /// Raw text returned by the provider
    pub text: String,
    /// Model that produced it
    pub model: Option<String>,
}

/// Executes prompts through the template → assembly → resolver pipeline
#[derive(Clone)]
pub struct ExecutePromptFlow {
    store: Arc<dyn DocumentStore>,
    executor: LlmExecutor,
}

impl ExecutePromptFlow {
    pub fn new(store: Arc<dyn DocumentStore>, executor: LlmExecutor) -> Self {
        Self { store, executor }
    }

    /// Run the full execution pipeline
    #[instrument(skip(self, input), fields(prompt_id = %input.prompt_id))]
    pub async fn execute(&self, input: ExecutePromptInput) -> UniverseResult<ExecutePromptOutput> {
        let prompt = self.load_prompt(&input).await?;

        let instruction = render_template(&prompt.user_prompt, &input.variables)?;
        let messages = assemble_messages(
            prompt.system_prompt.as_deref(),
            prompt.context.as_deref(),
            &instruction,
            prompt.negative_prompt.as_deref(),
        );

        let response = self
            .executor
            .execute(&input.connection_id, messages, input.temperature, None)
            .await?;

        Ok(ExecutePromptOutput {
            text: response.content,
            model: response.model,
        })
    }

    /// Load the prompt and enforce the scope and archive rules
    async fn load_prompt(&self, input: &ExecutePromptInput) -> UniverseResult<Prompt> {
        let prompt: Prompt = self
            .store
            .get(collections::PROMPTS, &input.prompt_id)
            .await?
            .ok_or_else(|| UniverseError::not_found("prompt", input.prompt_id.as_str()))?
            .decode()?;

        if prompt.archived {
            return Err(UniverseError::validation(format!(
                "prompt {} is archived",
                prompt.id
            )));
        }
        if prompt.scope == PromptScope::Exclusive
            && prompt.tenant_id.as_deref() != input.tenant_id.as_deref()
        {
            return Err(UniverseError::validation(format!(
                "prompt {} is exclusive to another tenant",
                prompt.id
            )));
        }
        Ok(prompt)
    }
}

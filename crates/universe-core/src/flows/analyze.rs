//! Metadata analyzer flow
//!
//! A secondary generation call that classifies a prompt: the model is asked
//! to return exactly four JSON fields (applicable scope, recommended model,
//! constraints, example use-case). A missing or invalid result is a fatal
//! failure for the operation.

use crate::error::{UniverseError, UniverseResult};
use crate::llm::{ChatMessage, LlmExecutor, ResponseFormat};
use crate::types::PromptMetadata;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const ANALYZER_SYSTEM_PROMPT: &str = "You are a prompt analyst. Given the parts of an AI prompt \
template, classify it. Respond with a single JSON object containing exactly these string \
fields: \"applicable_scope\", \"recommended_model\", \"constraints\", \"use_case\". \
Every field must be a non-empty string.";

/// The four prompt text fields submitted for analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzePromptInput {
    /// Connection the analysis call runs on
    pub connection_id: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// May be empty; an empty instruction is still analyzable
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub negative_prompt: Option<String>,
}

/// Classifies prompts through a structured generation call
#[derive(Clone)]
pub struct MetadataAnalyzer {
    executor: LlmExecutor,
}

impl MetadataAnalyzer {
    pub fn new(executor: LlmExecutor) -> Self {
        Self { executor }
    }

    /// Run the analysis call and parse its structured result
    #[instrument(skip(self, input), fields(connection_id = %input.connection_id))]
    pub async fn analyze(&self, input: AnalyzePromptInput) -> UniverseResult<PromptMetadata> {
        let messages = vec![
            ChatMessage::system(ANALYZER_SYSTEM_PROMPT),
            ChatMessage::user(describe_prompt(&input)),
        ];

        let response = self
            .executor
            .execute(
                &input.connection_id,
                messages,
                None,
                Some(ResponseFormat::JsonObject),
            )
            .await?;

        let metadata: PromptMetadata =
            serde_json::from_str(&response.content).map_err(|e| {
                UniverseError::execution(format!("analyzer returned no structured result: {e}"))
            })?;

        if metadata.applicable_scope.trim().is_empty()
            || metadata.recommended_model.trim().is_empty()
            || metadata.constraints.trim().is_empty()
            || metadata.use_case.trim().is_empty()
        {
            return Err(UniverseError::execution(
                "analyzer returned empty metadata fields",
            ));
        }
        Ok(metadata)
    }
}

/// Lay out the prompt parts for the analyst model
fn describe_prompt(input: &AnalyzePromptInput) -> String {
    let mut sections = Vec::with_capacity(4);
    if let Some(system) = &input.system_prompt {
        sections.push(format!("System prompt:\n{system}"));
    }
    sections.push(format!("User prompt:\n{}", input.user_prompt));
    if let Some(context) = &input.context {
        sections.push(format!("Context:\n{context}"));
    }
    if let Some(negative) = &input.negative_prompt {
        sections.push(format!("Negative prompt:\n{negative}"));
    }
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::MockChatProvider;
    use crate::llm::{ChatResponse, LlmExecutor};
    use crate::store::{DocumentStore, MemoryStore, collections};
    use serde_json::json;
    use std::sync::Arc;

    async fn analyzer(provider: MockChatProvider) -> (MetadataAnalyzer, String) {
        let store = MemoryStore::new();
        let connection_id = store
            .create(
                collections::CONNECTIONS,
                json!({
                    "model": "gpt-4o-mini",
                    "provider": "openai",
                    "api_key": "sk-test",
                    "status": "active",
                    "priority": 10,
                }),
            )
            .await
            .unwrap();
        let executor = LlmExecutor::new(Arc::new(store), Arc::new(provider), 0.7);
        (MetadataAnalyzer::new(executor), connection_id)
    }

    fn input(connection_id: String) -> AnalyzePromptInput {
        AnalyzePromptInput {
            connection_id,
            user_prompt: "Summarize {{document}}".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_structured_result_parsed() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_generate()
            .withf(|req| req.response_format == Some(ResponseFormat::JsonObject))
            .returning(|_| {
                Ok(ChatResponse::new(
                    json!({
                        "applicable_scope": "universal",
                        "recommended_model": "gpt-4o-mini",
                        "constraints": "input must be plain text",
                        "use_case": "document summarization",
                    })
                    .to_string(),
                ))
            });

        let (analyzer, connection_id) = analyzer(provider).await;
        let metadata = analyzer.analyze(input(connection_id)).await.unwrap();
        assert_eq!(metadata.applicable_scope, "universal");
        assert_eq!(metadata.use_case, "document summarization");
    }

    #[tokio::test]
    async fn test_unstructured_result_is_fatal() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_generate()
            .returning(|_| Ok(ChatResponse::new("I cannot classify this prompt.")));

        let (analyzer, connection_id) = analyzer(provider).await;
        let err = analyzer.analyze(input(connection_id)).await.unwrap_err();
        assert!(matches!(err, UniverseError::Execution(_)));
    }

    #[tokio::test]
    async fn test_empty_fields_are_fatal() {
        let mut provider = MockChatProvider::new();
        provider.expect_generate().returning(|_| {
            Ok(ChatResponse::new(
                json!({
                    "applicable_scope": "",
                    "recommended_model": "m",
                    "constraints": "c",
                    "use_case": "u",
                })
                .to_string(),
            ))
        });

        let (analyzer, connection_id) = analyzer(provider).await;
        assert!(analyzer.analyze(input(connection_id)).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_user_prompt_is_still_analyzable() {
        let mut provider = MockChatProvider::new();
        provider.expect_generate().returning(|_| {
            Ok(ChatResponse::new(
                json!({
                    "applicable_scope": "universal",
                    "recommended_model": "gpt-4o-mini",
                    "constraints": "none",
                    "use_case": "blank template baseline",
                })
                .to_string(),
            ))
        });

        let (analyzer, connection_id) = analyzer(provider).await;
        let metadata = analyzer
            .analyze(AnalyzePromptInput {
                connection_id,
                user_prompt: String::new(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!metadata.recommended_model.is_empty());
    }
}

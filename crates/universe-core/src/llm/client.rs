//! Connection resolution and generation execution
//!
//! A connection document binds a model name, a credential, and defaults;
//! resolution turns a connection id (or a routing category) into the
//! concrete [`GenerationRequest`] handed to the provider.

use super::messages::{ChatMessage, ChatResponse};
use super::provider::{ChatProvider, GenerationRequest, ResponseFormat};
use crate::error::{UniverseError, UniverseResult};
use crate::store::{DocumentStore, collections};
use crate::types::{LifecycleStatus, LlmConnection};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Looks up configured LLM connections in the document store
#[derive(Clone)]
pub struct ConnectionResolver {
    store: Arc<dyn DocumentStore>,
}

impl ConnectionResolver {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Resolve a connection by id
    pub async fn resolve(&self, connection_id: &str) -> UniverseResult<LlmConnection> {
        let doc = self
            .store
            .get(collections::CONNECTIONS, connection_id)
            .await?
            .ok_or_else(|| UniverseError::not_found("connection", connection_id))?;
        doc.decode()
    }

    /// Resolve the best active connection for a routing category
    ///
    /// When multiple connections match, the lowest priority value wins; ties
    /// break on id for determinism.
    pub async fn resolve_by_category(&self, category: &str) -> UniverseResult<LlmConnection> {
        let docs = self
            .store
            .find_eq(collections::CONNECTIONS, "category", &json!(category))
            .await?;

        let mut connections: Vec<LlmConnection> = docs
            .iter()
            .map(|doc| doc.decode::<LlmConnection>())
            .collect::<UniverseResult<_>>()?;
        connections.retain(|c| c.status == LifecycleStatus::Active);
        connections.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.id.cmp(&b.id)));

        connections
            .into_iter()
            .next()
            .ok_or_else(|| UniverseError::not_found("connection for category", category))
    }
}

/// Executes generation calls against resolved connections
#[derive(Clone)]
pub struct LlmExecutor {
    resolver: ConnectionResolver,
    provider: Arc<dyn ChatProvider>,
    /// Applied when neither the caller nor the connection supplies one
    default_temperature: f32,
}

impl LlmExecutor {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        provider: Arc<dyn ChatProvider>,
        default_temperature: f32,
    ) -> Self {
        Self {
            resolver: ConnectionResolver::new(store),
            provider,
            default_temperature,
        }
    }

    /// Access the underlying resolver
    pub fn resolver(&self) -> &ConnectionResolver {
        &self.resolver
    }

    /// Resolve the connection and issue a single generation call
    ///
    /// Temperature precedence: caller > connection default > executor
    /// default. Disabled connections refuse to execute.
    pub async fn execute(
        &self,
        connection_id: &str,
        messages: Vec<ChatMessage>,
        temperature: Option<f32>,
        response_format: Option<ResponseFormat>,
    ) -> UniverseResult<ChatResponse> {
        let connection = self.resolver.resolve(connection_id).await?;
        if connection.status != LifecycleStatus::Active {
            return Err(UniverseError::execution(format!(
                "connection {} is not active ({})",
                connection.id, connection.status
            )));
        }

        let temperature = temperature
            .or(connection.default_temperature)
            .unwrap_or(self.default_temperature);

        debug!(
            model = %connection.model,
            provider = %connection.provider,
            temperature,
            "executing generation call"
        );

        let request = GenerationRequest {
            model: connection.model,
            messages,
            temperature: Some(temperature),
            response_format,
        };
        self.provider.generate(&request).await
    }
}

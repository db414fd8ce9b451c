//! Business flows
//!
//! A flow is the smallest unit of business logic: a stateless async function
//! bound to a validated input and either a data result or a
//! [`FlowOutcome`]. Mutating flows never throw — they report failure in the
//! outcome so a caller can render it inline; read flows return
//! `UniverseResult` and rely on the caller's error handling.
//!
//! Every flow is constructed with an injected store handle; there are no
//! ambient singletons.

mod analyze;
mod api_key;
mod asset;
mod connection;
mod execute;
mod maintenance;
mod order;
mod org;
mod prompt;
mod tenant;
mod user;

pub use analyze::{AnalyzePromptInput, MetadataAnalyzer};
pub use api_key::ApiKeyFlows;
pub use asset::AssetFlows;
pub use connection::ConnectionFlows;
pub use execute::{ExecutePromptFlow, ExecutePromptInput, ExecutePromptOutput};
pub use maintenance::{MaintenanceFlows, MaintenanceReport, PurgeInput};
pub use order::OrderFlows;
pub use org::OrgFlows;
pub use prompt::PromptFlows;
pub use tenant::TenantFlows;
pub use user::UserFlows;

use crate::error::{UniverseError, UniverseResult};
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Result shape returned by every mutating flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowOutcome {
    pub success: bool,
    pub message: String,
    /// Document id touched by the flow, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl FlowOutcome {
    /// Successful outcome carrying a document id
    pub fn saved(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id.into()),
        }
    }

    /// Successful outcome without an id
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
        }
    }

    /// Failed outcome from an error
    pub fn failure(error: &UniverseError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            id: None,
        }
    }
}

/// Shared save semantics: id present means merge-update, absent means create
/// with a server-assigned id and creation timestamp
///
/// The `id` field is stripped from the document body; the id lives in the
/// document path, not in its fields.
pub(crate) async fn save_entity<T: Serialize>(
    store: &Arc<dyn DocumentStore>,
    collection: &str,
    id: &Option<String>,
    entity: &T,
) -> UniverseResult<String> {
    let mut value = serde_json::to_value(entity)?;
    if let Value::Object(map) = &mut value {
        map.remove("id");
    }
    match id {
        Some(existing) => {
            store.set_merge(collection, existing, value).await?;
            Ok(existing.clone())
        }
        None => store.create(collection, value).await,
    }
}

/// Decode every document in a collection into a typed list
pub(crate) async fn list_entities<T: serde::de::DeserializeOwned>(
    store: &Arc<dyn DocumentStore>,
    collection: &str,
) -> UniverseResult<Vec<T>> {
    let docs = store.list(collection).await?;
    docs.iter().map(|doc| doc.decode()).collect()
}

//! Document store abstraction
//!
//! The platform persists every entity as an independent document in a
//! managed document database. The database itself is an external
//! collaborator; this module defines the narrow surface the flows depend on
//! ([`DocumentStore`]) and ships an in-process implementation
//! ([`MemoryStore`]) used as the reference deployment and as the test double.

mod document;
mod memory;

pub use document::Document;
pub use memory::MemoryStore;

use crate::error::UniverseResult;
use async_trait::async_trait;
use serde_json::Value;

/// Collection names used by the platform
pub mod collections {
    pub const TENANTS: &str = "tenants";
    pub const USERS: &str = "users";
    pub const PROMPTS: &str = "prompts";
    pub const CONNECTIONS: &str = "llm_connections";
    pub const ORDERS: &str = "orders";
    pub const ROLES: &str = "roles";
    pub const DEPARTMENTS: &str = "departments";
    pub const POSITIONS: &str = "positions";
    pub const API_KEYS: &str = "api_keys";
    pub const EXPERT_DOMAINS: &str = "expert_domains";
    pub const CATEGORIES: &str = "categories";
    pub const TAGS: &str = "tags";
}

/// Per-collection CRUD over a document database
///
/// Semantics every implementation must honor:
///
/// - `create` assigns a fresh id and stamps `created_at` server-side.
/// - `set_merge` shallow-merges into the existing document, creating it when
///   absent; concurrent writers are last-write-wins.
/// - `delete` is idempotent: removing a missing id is a successful no-op.
/// - `delete_batch` is atomic: either every named document is removed or the
///   whole batch fails.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by id
    async fn get(&self, collection: &str, id: &str) -> UniverseResult<Option<Document>>;

    /// Fetch every document in a collection
    ///
    /// There is deliberately no pagination: listing flows map whole
    /// collections per call.
    async fn list(&self, collection: &str) -> UniverseResult<Vec<Document>>;

    /// Fetch documents whose `field` equals `value`
    async fn find_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> UniverseResult<Vec<Document>>;

    /// Create a new document with a server-assigned id and creation
    /// timestamp; returns the id
    async fn create(&self, collection: &str, data: Value) -> UniverseResult<String>;

    /// Shallow-merge `data` into the document, creating it if absent
    async fn set_merge(&self, collection: &str, id: &str, data: Value) -> UniverseResult<()>;

    /// Remove a document by id (no-op when the id does not exist)
    async fn delete(&self, collection: &str, id: &str) -> UniverseResult<()>;

    /// Remove a set of documents atomically; returns the number removed
    async fn delete_batch(&self, collection: &str, ids: &[String]) -> UniverseResult<usize>;
}

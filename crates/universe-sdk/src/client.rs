//! SDK client implementation

use std::sync::Arc;
use universe_core::config::UniverseConfig;
use universe_core::error::UniverseResult;
use universe_core::flows::{
    AnalyzePromptInput, ApiKeyFlows, AssetFlows, ConnectionFlows, ExecutePromptFlow,
    ExecutePromptInput, ExecutePromptOutput, MaintenanceFlows, MetadataAnalyzer, OrderFlows,
    OrgFlows, PromptFlows, TenantFlows, UserFlows,
};
use universe_core::llm::{ChatProvider, HttpChatProvider, LlmExecutor};
use universe_core::store::{DocumentStore, MemoryStore};
use universe_core::types::PromptMetadata;

/// High-level client for the Prompt Universe platform
///
/// `PromptUniverse` owns the injected store and provider handles and hands
/// out flow families constructed over them. Flow accessors are cheap; each
/// returned flow clones the shared handles.
pub struct PromptUniverse {
    store: Arc<dyn DocumentStore>,
    provider: Arc<dyn ChatProvider>,
    config: UniverseConfig,
}

impl PromptUniverse {
    /// Create a client over explicit store and provider handles
    pub fn new(store: Arc<dyn DocumentStore>, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            store,
            provider,
            config: UniverseConfig::default(),
        }
    }

    /// Create a client backed by the in-memory store and the HTTP provider
    /// configured from defaults (credential from the environment)
    pub fn in_memory() -> UniverseResult<Self> {
        Self::from_config(UniverseConfig::default())
    }

    /// Create an in-memory-store client with explicit configuration
    pub fn from_config(config: UniverseConfig) -> UniverseResult<Self> {
        let provider = HttpChatProvider::new(
            config.base_url.clone(),
            config.resolve_api_key(),
            config.request_timeout(),
        )?;
        Ok(Self {
            store: Arc::new(MemoryStore::new()),
            provider: Arc::new(provider),
            config,
        })
    }

    /// Replace the store handle
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = store;
        self
    }

    /// Replace the provider handle
    pub fn with_provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: UniverseConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Tenant CRUD flows
    pub fn tenants(&self) -> TenantFlows {
        TenantFlows::new(self.store.clone())
    }

    /// User CRUD flows
    pub fn users(&self) -> UserFlows {
        UserFlows::new(self.store.clone())
    }

    /// Prompt CRUD flows
    pub fn prompts(&self) -> PromptFlows {
        PromptFlows::new(self.store.clone())
    }

    /// LLM connection CRUD flows
    pub fn connections(&self) -> ConnectionFlows {
        ConnectionFlows::new(self.store.clone())
    }

    /// Order flows
    pub fn orders(&self) -> OrderFlows {
        OrderFlows::new(self.store.clone())
    }

    /// Org-structure flows
    pub fn org(&self) -> OrgFlows {
        OrgFlows::new(self.store.clone())
    }

    /// API key flows
    pub fn api_keys(&self) -> ApiKeyFlows {
        ApiKeyFlows::new(self.store.clone())
    }

    /// Reference-data asset flows
    pub fn assets(&self) -> AssetFlows {
        AssetFlows::new(self.store.clone())
    }

    /// Orphan scan and purge flows
    pub fn maintenance(&self) -> MaintenanceFlows {
        MaintenanceFlows::new(self.store.clone())
    }

    fn executor(&self) -> LlmExecutor {
        LlmExecutor::new(
            self.store.clone(),
            self.provider.clone(),
            self.config.default_temperature,
        )
    }

    /// Execute a prompt through the full pipeline
    pub async fn execute_prompt(
        &self,
        input: ExecutePromptInput,
    ) -> UniverseResult<ExecutePromptOutput> {
        ExecutePromptFlow::new(self.store.clone(), self.executor())
            .execute(input)
            .await
    }

    /// Run the metadata analyzer for a prompt
    pub async fn analyze_prompt(
        &self,
        input: AnalyzePromptInput,
    ) -> UniverseResult<PromptMetadata> {
        MetadataAnalyzer::new(self.executor()).analyze(input).await
    }
}

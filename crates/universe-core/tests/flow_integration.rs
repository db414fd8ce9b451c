//! End-to-end flow tests over the in-memory store
//!
//! Exercises the full pipeline the way an embedding application would: CRUD
//! flows against the store, then prompt execution and metadata analysis
//! against a recording provider standing in for the generation API.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use universe_core::error::UniverseResult;
use universe_core::flows::{
    AnalyzePromptInput, ConnectionFlows, ExecutePromptFlow, ExecutePromptInput,
    MaintenanceFlows, MetadataAnalyzer, PromptFlows, TenantFlows, UserFlows,
};
use universe_core::llm::{ChatProvider, ChatResponse, GenerationRequest, LlmExecutor};
use universe_core::store::{DocumentStore, MemoryStore};
use universe_core::types::{
    LifecycleStatus, SaveConnectionInput, SavePromptInput, SaveTenantInput, SaveUserInput,
    UserRole,
};

/// Provider double that records every request and replays canned responses
struct RecordingProvider {
    requests: Mutex<Vec<GenerationRequest>>,
    response: String,
}

impl RecordingProvider {
    fn new(response: impl Into<String>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: response.into(),
        }
    }

    fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingProvider {
    async fn generate(&self, request: &GenerationRequest) -> UniverseResult<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(ChatResponse::new(self.response.clone()).with_model(request.model.clone()))
    }
}

async fn seed_connection(store: &Arc<MemoryStore>) -> String {
    let flows = ConnectionFlows::new(store.clone());
    let outcome = flows
        .save(SaveConnectionInput {
            id: None,
            model: "gpt-4o-mini".to_string(),
            provider: "openai".to_string(),
            api_key: "sk-test".to_string(),
            tenant_id: None,
            category: Some("chat".to_string()),
            status: LifecycleStatus::Active,
            priority: 10,
            default_temperature: Some(0.3),
        })
        .await;
    assert!(outcome.success, "{}", outcome.message);
    outcome.id.unwrap()
}

#[tokio::test]
async fn test_tenant_save_then_list_round_trip() {
    let store = Arc::new(MemoryStore::new());
    let flows = TenantFlows::new(store.clone());

    // The legacy wire form of the pending status must be accepted.
    let input: SaveTenantInput = serde_json::from_value(json!({
        "company_name": "Acme",
        "admin_email": "a@acme.com",
        "status": "待审核",
    }))
    .unwrap();

    let outcome = flows.save(input).await;
    assert!(outcome.success);
    let id = outcome.id.expect("save must return a generated id");

    let tenants = flows.list().await.unwrap();
    let tenant = tenants.iter().find(|t| t.id == id).unwrap();
    assert_eq!(tenant.company_name, "Acme");
    assert_eq!(tenant.status, LifecycleStatus::Pending);
    assert!(tenant.created_at.is_some());
}

#[tokio::test]
async fn test_prompt_execution_sends_rendered_text() {
    let store = Arc::new(MemoryStore::new());
    let connection_id = seed_connection(&store).await;

    let prompts = PromptFlows::new(store.clone());
    let prompt_id = prompts
        .save(SavePromptInput {
            name: "Greeting".to_string(),
            system_prompt: Some("Be friendly.".to_string()),
            user_prompt: "Hello {{name}}".to_string(),
            negative_prompt: Some("sarcasm".to_string()),
            ..Default::default()
        })
        .await
        .id
        .unwrap();

    let provider = Arc::new(RecordingProvider::new("Hi World!"));
    let executor = LlmExecutor::new(store.clone() as Arc<dyn DocumentStore>, provider.clone(), 0.7);
    let flow = ExecutePromptFlow::new(store.clone(), executor);

    let output = flow
        .execute(ExecutePromptInput {
            prompt_id,
            connection_id,
            variables: HashMap::from([("name".to_string(), "World".to_string())]),
            temperature: None,
            tenant_id: None,
        })
        .await
        .unwrap();
    assert_eq!(output.text, "Hi World!");

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model, "gpt-4o-mini");
    // Connection default temperature applies when the caller passes none.
    assert_eq!(request.temperature, Some(0.3));
    assert!(
        request.messages.iter().any(|m| m.content.contains("Hello World")),
        "rendered text must reach the provider"
    );
    // The negative prompt rides along in the system block.
    assert!(request.messages[0].content.contains("sarcasm"));
}

#[tokio::test]
async fn test_metadata_analysis_round_trip() {
    let store = Arc::new(MemoryStore::new());
    let connection_id = seed_connection(&store).await;

    let canned = json!({
        "applicable_scope": "universal",
        "recommended_model": "gpt-4o-mini",
        "constraints": "plain text only",
        "use_case": "greeting generation",
    })
    .to_string();
    let provider = Arc::new(RecordingProvider::new(canned));
    let executor = LlmExecutor::new(store.clone() as Arc<dyn DocumentStore>, provider, 0.7);
    let analyzer = MetadataAnalyzer::new(executor);

    let metadata = analyzer
        .analyze(AnalyzePromptInput {
            connection_id,
            user_prompt: String::new(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(!metadata.applicable_scope.is_empty());
    assert!(!metadata.recommended_model.is_empty());
    assert!(!metadata.constraints.is_empty());
    assert!(!metadata.use_case.is_empty());
}

#[tokio::test]
async fn test_orphan_lifecycle_across_flows() {
    let store = Arc::new(MemoryStore::new());
    let tenants = TenantFlows::new(store.clone());
    let users = UserFlows::new(store.clone());
    let maintenance = MaintenanceFlows::new(store.clone());

    let tenant_id = tenants
        .save(SaveTenantInput {
            id: None,
            company_name: "Acme".to_string(),
            admin_email: "a@acme.com".to_string(),
            status: LifecycleStatus::Active,
        })
        .await
        .id
        .unwrap();

    let user_outcome = users
        .save(SaveUserInput {
            id: None,
            name: "alice".to_string(),
            email: "alice@acme.com".to_string(),
            role: UserRole::Engineer,
            status: LifecycleStatus::Active,
            tenant_id: Some(tenant_id.clone()),
            department_id: None,
            position_id: None,
        })
        .await;
    assert!(user_outcome.success);

    assert!(maintenance.scan().await.unwrap().is_clean());

    // Deleting the tenant orphans the user; write-time checks never fire.
    assert!(tenants.delete(&tenant_id).await.success);
    let report = maintenance.scan().await.unwrap();
    assert_eq!(report.orphaned_users.len(), 1);

    let outcome = maintenance
        .purge(universe_core::flows::PurgeInput {
            user_ids: report.orphaned_users,
            order_ids: vec![],
        })
        .await;
    assert!(outcome.success);
    assert!(users.list().await.unwrap().is_empty());
}

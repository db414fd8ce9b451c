//! Prompt Universe Core Library
//!
//! This crate provides the core functionality for the Prompt Universe platform:
//! the multi-tenant domain model, the document store abstraction, the prompt
//! template engine, LLM connection resolution and execution, and the business
//! flows that tie them together.

pub mod config;
pub mod error;
pub mod flows;
pub mod llm;
pub mod store;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use config::UniverseConfig;
pub use error::{UniverseError, UniverseResult};
pub use flows::FlowOutcome;
pub use llm::{
    ChatMessage, ChatProvider, ChatResponse, ConnectionResolver, GenerationRequest,
    HttpChatProvider, LlmExecutor, MessageRole, ResponseFormat,
};
pub use store::{Document, DocumentStore, MemoryStore};
pub use template::render_template;
pub use types::*;

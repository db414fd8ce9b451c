//! LLM integration layer
//!
//! Role-tagged message types, assembly of prompt fields into a chat request,
//! the provider seam, and connection resolution + execution.

pub mod assembly;
pub mod client;
pub mod messages;
pub mod provider;

pub use assembly::assemble_messages;
pub use client::{ConnectionResolver, LlmExecutor};
pub use messages::{ChatMessage, ChatResponse, MessageRole};
pub use provider::{ChatProvider, GenerationRequest, HttpChatProvider, ResponseFormat};

//! Prompt Universe SDK
//!
//! This crate provides a high-level client for embedding the Prompt Universe
//! platform. It composes a document store and a chat provider into a
//! ready-to-call flow surface.
//!
//! # Example
//!
//! ```no_run
//! use universe_sdk::PromptUniverse;
//! use universe_core::types::SaveTenantInput;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let universe = PromptUniverse::in_memory()?;
//!
//! let outcome = universe
//!     .tenants()
//!     .save(SaveTenantInput {
//!         id: None,
//!         company_name: "Acme".to_string(),
//!         admin_email: "a@acme.com".to_string(),
//!         status: Default::default(),
//!     })
//!     .await;
//! assert!(outcome.success);
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::PromptUniverse;

// Re-export commonly used types from core
pub use universe_core::{
    config::UniverseConfig,
    error::{UniverseError, UniverseResult},
    flows::FlowOutcome,
    types,
};

//! Domain entity types for the Prompt Universe platform
//!
//! Every entity is persisted as an independent document; the structs here are
//! the typed views the flows decode documents into. Save inputs live next to
//! their entities and carry their own validation.

mod api_key;
mod asset;
mod common;
mod connection;
mod order;
mod org;
mod prompt;
mod tenant;
mod user;

pub use api_key::{ApiKey, SaveApiKeyInput, mask_key};
pub use asset::{Asset, AssetBundle, AssetKind, SaveAssetInput};
pub use common::LifecycleStatus;
pub use connection::{LlmConnection, SaveConnectionInput};
pub use order::{Order, OrderItem, OrderStatus, SaveOrderInput};
pub use org::{
    Department, Position, Role, SaveDepartmentInput, SavePositionInput, SaveRoleInput,
};
pub use prompt::{Prompt, PromptMetadata, PromptScope, SavePromptInput};
pub use tenant::{SaveTenantInput, Tenant};
pub use user::{SaveUserInput, User, UserRole};

//! Platform reference-data assets: expert domains, categories, tags

use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a reference-data asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Expert domain a prompt belongs to
    ExpertDomain,
    /// Prompt category for browsing
    Category,
    /// Free-form tag
    Tag,
}

impl AssetKind {
    /// Collection the asset kind is stored in
    pub fn collection(&self) -> &'static str {
        match self {
            AssetKind::ExpertDomain => crate::store::collections::EXPERT_DOMAINS,
            AssetKind::Category => crate::store::collections::CATEGORIES,
            AssetKind::Tag => crate::store::collections::TAGS,
        }
    }
}

/// A reference-data asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// All three asset collections, fetched together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetBundle {
    pub expert_domains: Vec<Asset>,
    pub categories: Vec<Asset>,
    pub tags: Vec<Asset>,
}

/// Input for creating or updating an asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAssetInput {
    pub id: Option<String>,
    pub kind: AssetKind,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl SaveAssetInput {
    /// Validate the input shape before any side effect
    pub fn validate(&self) -> UniverseResult<()> {
        if self.name.trim().is_empty() {
            return Err(UniverseError::validation("asset name must not be empty"));
        }
        Ok(())
    }
}

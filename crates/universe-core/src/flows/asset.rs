//! Reference-data asset flows
//!
//! The three asset collections are independent, so the bundle fetch issues
//! the reads concurrently and awaits them together.

use super::{FlowOutcome, list_entities, save_entity};
use crate::error::UniverseResult;
use crate::store::{DocumentStore, collections};
use crate::types::{Asset, AssetBundle, AssetKind, SaveAssetInput};
use std::sync::Arc;

/// Save, delete, and list reference-data assets
#[derive(Clone)]
pub struct AssetFlows {
    store: Arc<dyn DocumentStore>,
}

impl AssetFlows {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or merge-update an asset in its kind's collection
    pub async fn save(&self, input: SaveAssetInput) -> FlowOutcome {
        if let Err(e) = input.validate() {
            return FlowOutcome::failure(&e);
        }
        match save_entity(&self.store, input.kind.collection(), &input.id, &input).await {
            Ok(id) => FlowOutcome::saved(id, "asset saved"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Remove an asset by kind and id (idempotent)
    pub async fn delete(&self, kind: AssetKind, id: &str) -> FlowOutcome {
        match self.store.delete(kind.collection(), id).await {
            Ok(()) => FlowOutcome::ok("asset deleted"),
            Err(e) => FlowOutcome::failure(&e),
        }
    }

    /// Fetch one kind of asset
    pub async fn list(&self, kind: AssetKind) -> UniverseResult<Vec<Asset>> {
        list_entities(&self.store, kind.collection()).await
    }

    /// Fetch all three asset collections concurrently
    pub async fn list_all(&self) -> UniverseResult<AssetBundle> {
        let (expert_domains, categories, tags) = tokio::join!(
            list_entities::<Asset>(&self.store, collections::EXPERT_DOMAINS),
            list_entities::<Asset>(&self.store, collections::CATEGORIES),
            list_entities::<Asset>(&self.store, collections::TAGS),
        );
        Ok(AssetBundle {
            expert_domains: expert_domains?,
            categories: categories?,
            tags: tags?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn input(kind: AssetKind, name: &str) -> SaveAssetInput {
        SaveAssetInput {
            id: None,
            kind,
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_bundle_fetches_all_three_kinds() {
        let flows = AssetFlows::new(Arc::new(MemoryStore::new()));
        flows.save(input(AssetKind::ExpertDomain, "Legal")).await;
        flows.save(input(AssetKind::ExpertDomain, "Medical")).await;
        flows.save(input(AssetKind::Category, "Drafting")).await;
        flows.save(input(AssetKind::Tag, "beta")).await;

        let bundle = flows.list_all().await.unwrap();
        assert_eq!(bundle.expert_domains.len(), 2);
        assert_eq!(bundle.categories.len(), 1);
        assert_eq!(bundle.tags.len(), 1);
    }

    #[tokio::test]
    async fn test_kinds_are_isolated() {
        let flows = AssetFlows::new(Arc::new(MemoryStore::new()));
        let outcome = flows.save(input(AssetKind::Tag, "beta")).await;
        let id = outcome.id.unwrap();

        // Deleting under the wrong kind leaves the asset in place.
        flows.delete(AssetKind::Category, &id).await;
        assert_eq!(flows.list(AssetKind::Tag).await.unwrap().len(), 1);

        flows.delete(AssetKind::Tag, &id).await;
        assert!(flows.list(AssetKind::Tag).await.unwrap().is_empty());
    }
}

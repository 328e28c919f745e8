//! Hand-built template trees for tests.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use reduxgen_core::{
    application::{ApplicationError, ports::AssetProvider},
    domain::{AssetTree, TemplateAsset},
    error::ReduxgenResult,
};

/// Thread-safe in-memory asset provider.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    inner: Arc<RwLock<HashMap<TemplateAsset, AssetTree>>>,
}

impl MemoryAssets {
    /// Provider with no assets; every load fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider where all three assets exist but hold no files.
    pub fn empty_trees() -> Self {
        let assets = Self::new();
        for asset in TemplateAsset::ALL {
            assets.insert(AssetTree::new(asset));
        }
        assets
    }

    /// Add one file to an asset, creating the tree on first use.
    pub fn with_file(
        self,
        asset: TemplateAsset,
        path: impl Into<PathBuf>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner
                .entry(asset)
                .or_insert_with(|| AssetTree::new(asset))
                .add_file(path, contents);
        }
        self
    }

    pub fn insert(&self, tree: AssetTree) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(tree.asset(), tree);
        }
    }
}

impl AssetProvider for MemoryAssets {
    fn load(&self, asset: TemplateAsset) -> ReduxgenResult<AssetTree> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::AdapterFailure("asset store lock poisoned".into()))?;

        inner.get(&asset).cloned().ok_or_else(|| {
            ApplicationError::AssetUnavailable {
                asset: asset.to_string(),
                reason: "not registered".into(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_asset_fails() {
        assert!(MemoryAssets::new().load(TemplateAsset::Store).is_err());
    }

    #[test]
    fn with_file_accumulates() {
        let assets = MemoryAssets::empty_trees()
            .with_file(TemplateAsset::Pages, "index.js", "a")
            .with_file(TemplateAsset::Pages, "_app.js", "b");
        assert_eq!(assets.load(TemplateAsset::Pages).unwrap().file_count(), 2);
        assert!(assets.load(TemplateAsset::Store).unwrap().is_empty());
    }
}

//! Templates read from a directory on disk.

use std::path::{Path, PathBuf};

use reduxgen_core::{
    application::{ApplicationError, ports::AssetProvider},
    domain::{AssetTree, TemplateAsset},
    error::ReduxgenResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

/// Asset provider that walks `<root>/<asset>/` on every load.
///
/// Symlinks are followed. A missing asset directory is an error; an empty one
/// is a valid, empty tree.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetProvider for DirectoryAssets {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, asset: TemplateAsset) -> ReduxgenResult<AssetTree> {
        let dir = self.root.join(asset.as_str());
        let unavailable = |reason: String| ApplicationError::AssetUnavailable {
            asset: asset.to_string(),
            reason,
        };

        if !dir.is_dir() {
            return Err(unavailable(format!("{} is not a directory", dir.display())).into());
        }

        let mut tree = AssetTree::new(asset);
        for entry in WalkDir::new(&dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| unavailable(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = match entry.path().strip_prefix(&dir) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => {
                    warn!(path = %entry.path().display(), "skipping entry outside asset root");
                    continue;
                }
            };
            let contents = std::fs::read(entry.path())
                .map_err(|e| unavailable(format!("{}: {e}", entry.path().display())))?;
            tree.add_file(relative, contents);
        }

        debug!(%asset, files = tree.file_count(), "asset loaded from directory");
        Ok(tree)
    }
}

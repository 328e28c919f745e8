use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::TemplateAsset};

/// One file of a template asset, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// File tree of a single template asset.
///
/// Contents are opaque bytes; nothing is rendered or substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTree {
    pub(crate) asset: TemplateAsset,
    pub(crate) files: Vec<AssetFile>,
}

impl AssetTree {
    pub fn new(asset: TemplateAsset) -> Self {
        Self {
            asset,
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.push(AssetFile {
            path: path.into(),
            contents: contents.into(),
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.add_file(path, contents);
        self
    }

    pub fn asset(&self) -> TemplateAsset {
        self.asset
    }

    pub fn files(&self) -> &[AssetFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every path must stay inside the asset root, once.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !is_contained(&file.path) {
                return Err(DomainError::InvalidAssetPath {
                    asset: self.asset.to_string(),
                    path: file.path.display().to_string(),
                });
            }
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicateAssetPath {
                    asset: self.asset.to_string(),
                    path: file.path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

fn is_contained(path: &Path) -> bool {
    let mut normal = 0usize;
    for component in path.components() {
        match component {
            Component::Normal(_) => normal += 1,
            Component::CurDir => {}
            _ => return false,
        }
    }
    normal > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_relative_paths_are_valid() {
        let tree = AssetTree::new(TemplateAsset::Features)
            .with_file("counter/counterSlice.js", "export {}")
            .with_file("./index.js", "");
        assert!(tree.validate().is_ok());
        assert_eq!(tree.file_count(), 2);
    }

    #[test]
    fn empty_tree_is_valid() {
        assert!(AssetTree::new(TemplateAsset::Pages).validate().is_ok());
    }

    #[test]
    fn parent_escape_is_rejected() {
        let tree = AssetTree::new(TemplateAsset::Store).with_file("../evil.js", "");
        assert!(matches!(
            tree.validate(),
            Err(DomainError::InvalidAssetPath { .. })
        ));
    }

    #[test]
    fn absolute_path_is_rejected() {
        let tree = AssetTree::new(TemplateAsset::Store).with_file("/etc/passwd", "");
        assert!(tree.validate().is_err());
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let tree = AssetTree::new(TemplateAsset::Store)
            .with_file("index.js", "a")
            .with_file("index.js", "b");
        assert!(matches!(
            tree.validate(),
            Err(DomainError::DuplicateAssetPath { .. })
        ));
    }
}

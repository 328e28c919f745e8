//! Templates compiled into the binary.

use std::path::PathBuf;

use reduxgen_core::{
    application::{ApplicationError, ports::AssetProvider},
    domain::{AssetTree, TemplateAsset},
    error::ReduxgenResult,
};
use rust_embed::RustEmbed;
use tracing::{instrument, trace};

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/"]
#[prefix = ""]
struct BundledTemplates;

/// Asset provider backed by the bundled `templates/` tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self
    }
}

impl AssetProvider for EmbeddedAssets {
    #[instrument(skip(self))]
    fn load(&self, asset: TemplateAsset) -> ReduxgenResult<AssetTree> {
        let prefix = format!("{}/", asset.as_str());

        // Embedded paths always use '/' separators.
        let mut paths: Vec<String> = BundledTemplates::iter()
            .filter(|p| p.starts_with(&prefix))
            .map(|p| p.into_owned())
            .collect();
        paths.sort();

        let mut tree = AssetTree::new(asset);
        for path in paths {
            let file = BundledTemplates::get(&path).ok_or_else(|| {
                ApplicationError::AssetUnavailable {
                    asset: asset.to_string(),
                    reason: format!("embedded file '{path}' disappeared"),
                }
            })?;
            let relative: PathBuf = path[prefix.len()..].split('/').collect();
            trace!(path = %relative.display(), bytes = file.data.len(), "embedded file");
            tree.add_file(relative, file.data.into_owned());
        }

        if tree.is_empty() {
            return Err(ApplicationError::AssetUnavailable {
                asset: asset.to_string(),
                reason: "no embedded files".into(),
            }
            .into());
        }

        Ok(tree)
    }
}

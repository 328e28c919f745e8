//! Template asset adapters.
//!
//! # Sources
//!
//! 1. **Embedded** (default): the `templates/` directory of this crate,
//!    compiled into the binary with `rust-embed`.
//! 2. **Directory**: a directory on disk with the same layout, selected with
//!    `--templates` or `REDUXGEN_TEMPLATES_DIR`.
//! 3. **Memory**: hand-built trees for tests.
//!
//! ```text
//! templates/
//! ├── store/
//! ├── features/
//! └── pages/
//! ```

mod directory;
mod embedded;
mod memory;

use std::path::PathBuf;

use reduxgen_core::application::ports::AssetProvider;
use tracing::debug;

pub use directory::DirectoryAssets;
pub use embedded::EmbeddedAssets;
pub use memory::MemoryAssets;

/// Pick the asset source: a directory when one is given, otherwise the
/// embedded set.
pub fn resolve(templates_dir: Option<PathBuf>) -> Box<dyn AssetProvider> {
    match templates_dir {
        Some(dir) => {
            debug!(path = %dir.display(), "using template directory");
            Box::new(DirectoryAssets::new(dir))
        }
        None => {
            debug!("using embedded templates");
            Box::new(EmbeddedAssets::new())
        }
    }
}

pub mod asset_tree;
pub mod config_files;
pub mod manifest;
pub mod plan;

pub use asset_tree::*;
pub use manifest::*;
pub use plan::*;

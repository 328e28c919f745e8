//! Infrastructure adapters for reduxgen.
//!
//! This crate implements the ports defined in `reduxgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod assets;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use assets::{DirectoryAssets, EmbeddedAssets, MemoryAssets};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ProcessRunner, RecordingRunner};

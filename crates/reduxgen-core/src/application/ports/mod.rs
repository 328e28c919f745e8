//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `reduxgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file creation
//!   - `AssetProvider`: bundled template trees
//!   - `CommandRunner`: blocking external processes
//!   - `ProgressSink`: user-facing progress
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `ProjectGenerator`)

pub mod output;

pub use output::{AssetProvider, CommandRunner, CommandStatus, Filesystem, ProgressSink, SilentProgress};

#[cfg(test)]
pub use output::{MockAssetProvider, MockCommandRunner, MockFilesystem};

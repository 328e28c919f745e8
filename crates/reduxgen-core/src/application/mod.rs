//! Application layer for reduxgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectGenerator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CommandPolicy, GeneratorConfig, ProjectGenerator};

// Re-export port traits (for adapter implementation)
pub use ports::{AssetProvider, CommandRunner, CommandStatus, Filesystem, ProgressSink, SilentProgress};

pub use error::ApplicationError;

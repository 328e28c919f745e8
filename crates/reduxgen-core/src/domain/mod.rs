//! Core domain layer for reduxgen.
//!
//! This module contains pure logic with no I/O. Filesystem access, template
//! lookup, and process spawning are reached through the ports defined in the
//! application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: plans and manifests are built once, never mutated
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    AssetFile, AssetTree, CommandOutcome, EntryMap, GenerationPlan, GenerationReport, Manifest,
    Step, config_files, manifest::MANIFEST_FILE,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{AppName, ExternalCommand, TemplateAsset, Toolchain};

pub use validation::DomainValidator;

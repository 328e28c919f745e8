//! reduxgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the reduxgen
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          reduxgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ProjectGenerator)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, AssetProvider, Runner)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     reduxgen-adapters (Infrastructure)  │
//! │ (LocalFilesystem, EmbeddedAssets, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (AppName, Manifest, GenerationPlan)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reduxgen_core::prelude::*;
//!
//! let name = AppName::new("demo")?;
//! let generator = ProjectGenerator::new(
//!     GeneratorConfig::new(std::env::current_dir()?),
//!     filesystem,
//!     assets,
//!     runner,
//! );
//! let report = generator.generate(&name)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommandPolicy, GeneratorConfig, ProjectGenerator,
        ports::{AssetProvider, CommandRunner, CommandStatus, Filesystem, ProgressSink},
    };
    pub use crate::domain::{
        AppName, AssetTree, ExternalCommand, GenerationPlan, GenerationReport, Manifest, Step,
        TemplateAsset, Toolchain,
    };
    pub use crate::error::{ReduxgenError, ReduxgenResult};
}

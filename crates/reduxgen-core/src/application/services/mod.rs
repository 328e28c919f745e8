//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "plan a run".

pub mod generator_service;

pub use generator_service::{CommandPolicy, GeneratorConfig, ProjectGenerator};

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be recorded in reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    #[error("Invalid path in template asset '{asset}': {path}")]
    InvalidAssetPath { asset: String, path: String },

    #[error("Duplicate path in template asset '{asset}': {path}")]
    DuplicateAssetPath { asset: String, path: String },

    #[error("Unknown template asset '{0}'")]
    UnknownAsset(String),

    // ========================================================================
    // Serialization
    // ========================================================================
    #[error("Failed to serialize package manifest: {0}")]
    ManifestSerialization(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAppName { .. } => vec![
                "Use letters, digits, '-', '_' and '.'".into(),
                "Start with a letter or number".into(),
                "Examples: demo, my-app, shop_front".into(),
            ],
            Self::InvalidAssetPath { asset, .. } | Self::DuplicateAssetPath { asset, .. } => vec![
                format!("The '{}' template tree is malformed", asset),
                "Check the directory passed with --templates".into(),
            ],
            Self::UnknownAsset(_) => vec!["Known template assets: store, features, pages".into()],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAppName { .. } => ErrorCategory::Validation,
            Self::InvalidAssetPath { .. }
            | Self::DuplicateAssetPath { .. }
            | Self::UnknownAsset(_) => ErrorCategory::Template,
            Self::ManifestSerialization(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}

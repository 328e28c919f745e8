//! Unified error handling for reduxgen core.
//!
//! Wraps domain and application errors behind one type with a category and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for reduxgen core operations.
#[derive(Debug, Error, Clone)]
pub enum ReduxgenError {
    /// Errors from the domain layer (invalid names, malformed assets).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, commands).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ReduxgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the target directory already existed.
    pub fn is_project_exists(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::ProjectExists { .. }))
    }

    /// Exit status of a failed external command, if that is what this is.
    pub fn command_exit_code(&self) -> Option<i32> {
        match self {
            Self::Application(ApplicationError::CommandFailed { code, .. }) => Some(code.unwrap_or(1)),
            Self::Application(ApplicationError::CommandSpawn { .. }) => Some(1),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input (app name).
    Validation,
    /// Target already exists.
    Conflict,
    /// Template assets missing or malformed.
    Template,
    /// An external tool failed.
    External,
    Internal,
}

/// Convenient result type alias.
pub type ReduxgenResult<T> = Result<T, ReduxgenError>;

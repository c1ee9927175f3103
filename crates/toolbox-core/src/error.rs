//! Unified error handling for the toolbox core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for toolbox core operations.
#[derive(Debug, Error, Clone)]
pub enum ToolboxError {
    /// Errors from the domain layer (placeholder, template and locale rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, HTTP, orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Project configuration could not be loaded.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ToolboxError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => vec![
                "Check the tolgee-toolbox.toml files under the base path".into(),
                "Run 'tolgee-toolbox projects' to see what was resolved".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in tolgee-toolbox".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Remote,
    Internal,
}

/// Convenient result type alias.
pub type ToolboxResult<T> = Result<T, ToolboxError>;

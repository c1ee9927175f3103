//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The Tolgee server answered with a non-success status.
    #[error("Tolgee server returned {status} for {reference}: {details}")]
    Server {
        status: u16,
        reference: String,
        details: String,
    },

    /// The request never got an answer.
    #[error("Request to {reference} failed: {reason}")]
    Transport { reference: String, reason: String },

    /// The server answered with a body we cannot read.
    #[error("Unexpected response from {reference}: {reason}")]
    MalformedResponse { reference: String, reason: String },

    /// `missing_namespace_fail` is set and the namespace is not in use remotely.
    #[error("Namespace {} is not used in Tolgee project {project_id}", describe_namespace(.namespace))]
    NamespaceMissing {
        project_id: u64,
        namespace: Option<String>,
    },

    /// A local file's locale has no counterpart among the project languages.
    #[error("Tolgee project {project_id} has no language '{locale}'")]
    LanguageNotFound { project_id: u64, locale: String },

    /// The uploaded file is not part of the import result.
    #[error("Import of '{file_name}' produced no entry in Tolgee project {project_id}")]
    ImportEntryMissing { project_id: u64, file_name: String },
}

fn describe_namespace(namespace: &Option<String>) -> String {
    match namespace {
        Some(name) => format!("'{name}'"),
        None => "(none configured)".into(),
    }
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the path exists and that you have permission to use it".into(),
            ],
            Self::Server { status: 401 | 403, .. } => vec![
                "The API key was rejected".into(),
                "Check TOLGEE_TOOLBOX_API_KEY and the key's project scopes".into(),
            ],
            Self::Server { status: 404, .. } => vec![
                "Check 'tolgee.id' and 'tolgee.api.url' in tolgee-toolbox.toml".into(),
            ],
            Self::Server { details, .. } => vec![format!("Server said: {details}")],
            Self::Transport { .. } => vec![
                "Check your network connection".into(),
                "Check 'tolgee.api.url' in tolgee-toolbox.toml".into(),
            ],
            Self::MalformedResponse { .. } => vec![
                "The server may not be a Tolgee instance, or its API version is unsupported"
                    .into(),
            ],
            Self::NamespaceMissing { .. } => vec![
                "Create the namespace in Tolgee first".into(),
                "Or set 'general.missing_namespace_fail = false'".into(),
            ],
            Self::LanguageNotFound { locale, .. } => vec![
                format!("Add the language '{locale}' to the Tolgee project"),
                "Or add it to 'excluded_locales' for this source".into(),
            ],
            Self::ImportEntryMissing { .. } => vec![
                "Check that the file format matches its 'type'".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::Server { .. } | Self::Transport { .. } | Self::MalformedResponse { .. } => {
                ErrorCategory::Remote
            }
            Self::NamespaceMissing { .. } | Self::LanguageNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::ImportEntryMissing { .. } => ErrorCategory::Remote,
        }
    }
}

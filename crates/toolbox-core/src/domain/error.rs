// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports and results)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Every variant carries the offending template, placeholder or path so the
/// operator can diagnose the failure without re-running with more verbosity.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Placeholder / template errors
    // ========================================================================
    #[error("Invalid locale placeholder '{placeholder}': {reason}")]
    PlaceholderSyntax { placeholder: String, reason: String },

    #[error("Placeholder '{placeholder}' not found in template '{template}'")]
    TemplateStructure {
        placeholder: String,
        template: String,
    },

    // ========================================================================
    // Locale resolution errors
    // ========================================================================
    #[error("Could not extract a locale from '{path}' (template '{template}'): {reason}")]
    LocaleExtraction {
        path: PathBuf,
        template: String,
        reason: String,
    },

    #[error("'{path}' does not match template '{template}'")]
    NoMatch { path: PathBuf, template: String },

    #[error("Invalid locale '{0}'")]
    InvalidLocale(String),

    #[error("Template '{template}' has no locale placeholder and no fixed locale")]
    MissingLocaleSource { template: String },

    // ========================================================================
    // Configuration values
    // ========================================================================
    #[error("Unknown {kind} format '{value}'")]
    UnknownFormat { kind: &'static str, value: String },

    #[error("Invalid project configuration: {0}")]
    InvalidProject(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PlaceholderSyntax { placeholder, .. } => vec![
                format!("Offending placeholder: {placeholder}"),
                "Placeholders look like: ${locale separator=underscore, region_case=upper}".into(),
                "Both 'separator' (underscore | dash) and 'region_case' (lower | upper) are required"
                    .into(),
            ],
            Self::TemplateStructure { .. } => vec![
                "The placeholder set does not belong to this template".into(),
                "This is a bug, please report it".into(),
            ],
            Self::LocaleExtraction { path, .. } => vec![
                format!("The file name '{}' contains a malformed locale", path.display()),
                "Check that the region case and separator match the placeholder".into(),
            ],
            Self::NoMatch { template, .. } => {
                vec![format!("Only files matching '{template}' belong to this entry")]
            }
            Self::InvalidLocale(tag) => vec![
                format!("'{tag}' is not a valid locale"),
                "Use a language code with an optional region, e.g. 'en' or 'en-US'".into(),
            ],
            Self::MissingLocaleSource { template } => vec![
                format!("Add a ${{locale ...}} placeholder to '{template}'"),
                "Or set 'locale = \"en-US\"' on the file entry".into(),
            ],
            Self::UnknownFormat { kind, .. } => vec![
                format!("Use one of the supported {kind} formats"),
                "Format names are written like JSON_ICU or PROPERTIES_JAVA".into(),
            ],
            Self::InvalidProject(msg) => vec![
                "Check your tolgee-toolbox.toml".into(),
                format!("Details: {msg}"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PlaceholderSyntax { .. }
            | Self::InvalidLocale(_)
            | Self::MissingLocaleSource { .. }
            | Self::UnknownFormat { .. }
            | Self::InvalidProject(_) => ErrorCategory::Validation,
            Self::LocaleExtraction { .. } => ErrorCategory::Validation,
            Self::NoMatch { .. } => ErrorCategory::NotFound,
            Self::TemplateStructure { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Result alias for pure domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

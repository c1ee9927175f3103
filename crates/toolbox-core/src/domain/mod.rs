//! Core domain layer for the Tolgee toolbox.
//!
//! Pure logic only: the locale placeholder engine and the project model.
//! File walking, HTTP and config parsing happen behind the application ports.
//!
//! ## Building blocks
//!
//! - [`placeholder`]: parses `${locale ...}` placeholders and renders locales
//!   into templates
//! - [`pattern`]: compiles a template into an anchored matcher and extracts
//!   locales from matched paths
//! - [`entities`]: projects, their source/target file entries, discovered
//!   message files and server records

pub mod entities;
pub mod error;
pub mod locale;
pub mod pattern;
pub mod placeholder;
pub mod value_objects;

mod validation;

pub use entities::{
    ImportLanguage, MessageFile, Namespace, Project, ProjectFile, ProjectFilesDefinition,
    ProjectLanguage, SourceFile, TargetFile,
};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use locale::Locale;
pub use pattern::FilePattern;
pub use placeholder::{LocalePlaceholder, parse_placeholders, render_template};
pub use validation::DomainValidator;
pub use value_objects::{ExportFormat, ImportFormat, RegionCase, Separator};

//! Tolgee Toolbox Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the Tolgee toolbox, which keeps local
//! message files and Tolgee projects in sync.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         toolbox-cli (CLI)               │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (FileDiscovery, PullService, Push...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ProjectLoader, Translation │
//! │  Server)                                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    toolbox-adapters (Infrastructure)    │
//! │ (LocalFilesystem, TomlProjectLoader,    │
//! │  HttpTolgeeClient)                      │
//! └─────────────────────────────────────────┘
//!
//!          Domain layer (pure logic):
//!   placeholders, file patterns, locales, projects
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use toolbox_core::domain::{Locale, ProjectFilesDefinition};
//!
//! let files = ProjectFilesDefinition::parse(
//!     "i18n/Messages_${locale separator=underscore, region_case=upper}.properties",
//! )
//! .unwrap();
//!
//! let locale = Locale::parse("en-US").unwrap();
//! let path = files.render(&locale);
//! assert_eq!(path, Path::new("i18n/Messages_en_US.properties"));
//!
//! let pattern = files.pattern().unwrap();
//! assert_eq!(pattern.extract_locale(&path).unwrap(), Some(locale));
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileDiscovery, PullService, PushService,
        ports::{Filesystem, ProjectLoader, TranslationServer},
    };
    pub use crate::domain::{
        ExportFormat, FilePattern, ImportFormat, Locale, MessageFile, Project,
        ProjectFilesDefinition,
    };
    pub use crate::error::{ToolboxError, ToolboxResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

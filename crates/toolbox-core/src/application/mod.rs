//! Application layer for the Tolgee toolbox.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FileDiscovery, PullService, PushService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    FileDiscovery, PullReport, PullService, PulledFile, PushReport, PushService, PushedFile,
};

pub use ports::{Filesystem, ProjectLoader, TranslationServer};

pub use error::ApplicationError;

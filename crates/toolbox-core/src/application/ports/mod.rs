//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `toolbox-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory walks and file I/O
//!   - `ProjectLoader`: project configuration
//!   - `TranslationServer`: the Tolgee REST API
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    ExportRequest, FileUpload, Filesystem, ProjectLoader, SingleStepImport, TranslationServer,
};

#[cfg(test)]
pub use output::{MockFilesystem, MockTranslationServer};

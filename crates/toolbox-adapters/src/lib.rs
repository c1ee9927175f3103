//! Infrastructure adapters for the Tolgee toolbox.
//!
//! This crate implements the ports defined in `toolbox-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod tolgee;
pub mod toml_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use tolgee::{ApiKey, HttpTolgeeClient};
pub use toml_loader::{CONFIG_FILE_NAME, TomlProjectLoader};

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `toolbox-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{
    ExportFormat, ImportFormat, ImportLanguage, Locale, Namespace, Project, ProjectLanguage,
};
use crate::error::ToolboxResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `toolbox_adapters::filesystem::LocalFilesystem` (production)
/// - `toolbox_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// All regular files below `root`, at most `max_depth` levels deep.
    ///
    /// Returned paths include the `root` prefix.
    fn walk_files(&self, root: &Path, max_depth: usize) -> ToolboxResult<Vec<PathBuf>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ToolboxResult<()>;

    /// Write content to a file, replacing it if it exists.
    fn write_file(&self, path: &Path, content: &[u8]) -> ToolboxResult<()>;

    fn read_file(&self, path: &Path) -> ToolboxResult<Vec<u8>>;
}

/// Port for project configuration.
///
/// Implemented by `toolbox_adapters::TomlProjectLoader`.
pub trait ProjectLoader: Send + Sync {
    /// Every project configured below `base_path`.
    fn load_projects(&self, base_path: &Path) -> ToolboxResult<Vec<Project>>;
}

/// A named file body sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Options of a single-step import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleStepImport {
    pub namespace: Option<String>,
    pub locale: Locale,
    pub format: ImportFormat,
}

/// What to export for one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub locale: Locale,
    pub format: ExportFormat,
    pub namespace: Option<String>,
}

/// Port for the Tolgee REST API.
///
/// Every call addresses the Tolgee project behind `project`
/// (`api_url` + `project_id`).
///
/// Implemented by `toolbox_adapters::tolgee::HttpTolgeeClient`.
#[cfg_attr(test, mockall::automock)]
pub trait TranslationServer: Send + Sync {
    fn project_languages(&self, project: &Project) -> ToolboxResult<Vec<ProjectLanguage>>;

    fn project_namespaces(&self, project: &Project) -> ToolboxResult<Vec<Namespace>>;

    /// Start (or extend) a two-step import with one file.
    fn import_add_file(
        &self,
        project: &Project,
        upload: &FileUpload,
    ) -> ToolboxResult<Vec<ImportLanguage>>;

    fn import_select_namespace(
        &self,
        project: &Project,
        import_file_id: u64,
        namespace: &str,
    ) -> ToolboxResult<()>;

    /// Map an imported language onto an existing project language.
    fn import_select_language(
        &self,
        project: &Project,
        import_language_id: u64,
        existing_language_id: u64,
    ) -> ToolboxResult<()>;

    fn single_step_import(
        &self,
        project: &Project,
        upload: &FileUpload,
        options: &SingleStepImport,
    ) -> ToolboxResult<()>;

    /// Rendered translations for one language.
    fn export(&self, project: &Project, request: &ExportRequest) -> ToolboxResult<Vec<u8>>;
}

//! Hierarchical `tolgee-toolbox.toml` project loader.
//!
//! Discovers every `tolgee-toolbox.toml` below a base path and turns each one
//! into the [`Project`]s it declares.
//!
//! # Directory layout expected
//!
//! ```text
//! repo/
//! ├── tolgee-toolbox.toml          ← shared settings (api url, ...)
//! ├── backend/
//! │   ├── tolgee-toolbox.toml      ← projects of the backend
//! │   └── src/main/resources/i18n/Messages_en_US.properties
//! └── web/
//!     └── tolgee-toolbox.toml      ← projects of the web app
//! ```
//!
//! Settings under `[tolgee.api]` and `[general]` are inherited: a file uses
//! the value of the nearest `tolgee-toolbox.toml` at or above it (but not
//! above the base path) that sets it. Projects are only ever read from the
//! file itself, and templates are relative to that file's directory.
//!
//! # `tolgee-toolbox.toml` format
//!
//! ```toml
//! [tolgee.api]
//! url = "https://app.tolgee.io"      # required somewhere in the hierarchy
//!
//! [general]
//! missing_namespace_fail = true      # optional, default false
//!
//! [[projects]]
//! tolgee.id = 42                     # required, unique per file
//! tolgee.namespace = "backend"       # optional
//!
//! [[projects.sources]]
//! files = "src/main/resources/i18n/Messages_${locale separator=underscore, region_case=upper}.properties"
//! type = "PROPERTIES_JAVA"
//! excluded_locales = ["en-US"]       # optional
//!
//! [[projects.targets]]
//! files = "src/main/resources/i18n/Messages.properties"
//! type = "PROPERTIES_JAVA"
//! locale = "en"                      # required when `files` has no placeholder
//! ```

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

use toolbox_core::{
    application::{ApplicationError, ports::ProjectLoader},
    domain::{DomainError, DomainValidator, Locale, Project, ProjectFile, ProjectFilesDefinition},
    error::{ToolboxError, ToolboxResult},
};

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "tolgee-toolbox.toml";

const CONFIG_MAX_DEPTH: usize = 1000;

/// Maven copies resources into its build output; those copies are not projects.
const BUILD_OUTPUT_MARKER: &str = "/target/classes/";

// ── Config file types ─────────────────────────────────────────────────────────

/// Deserialised `tolgee-toolbox.toml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub tolgee: TolgeeSection,
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// `[tolgee]` section.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TolgeeSection {
    #[serde(default)]
    pub api: ApiSection,
}

/// `[tolgee.api]` section.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiSection {
    pub url: Option<String>,
}

/// `[general]` section.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneralSection {
    pub missing_namespace_fail: Option<bool>,
}

/// One `[[projects]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectEntry {
    #[serde(default)]
    pub tolgee: ProjectTolgeeSection,
    #[serde(default)]
    pub sources: Vec<FileEntry>,
    #[serde(default)]
    pub targets: Vec<FileEntry>,
}

/// `tolgee.*` keys of a project.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProjectTolgeeSection {
    pub id: Option<u64>,
    pub namespace: Option<String>,
}

/// One `[[projects.sources]]` / `[[projects.targets]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct FileEntry {
    pub files: String,
    #[serde(rename = "type")]
    pub format: String,
    pub locale: Option<String>,
    #[serde(default)]
    pub excluded_locales: Vec<String>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads projects from the `tolgee-toolbox.toml` files under a base path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlProjectLoader;

impl TomlProjectLoader {
    pub fn new() -> Self {
        Self
    }

    /// Every config file below `base_path`, build output excluded.
    fn find_config_files(&self, base_path: &Path) -> ToolboxResult<Vec<PathBuf>> {
        let mut found = Vec::new();

        for entry in WalkDir::new(base_path)
            .max_depth(CONFIG_MAX_DEPTH)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(base_path).to_path_buf();
                ApplicationError::filesystem(path, e)
            })?;

            if !entry.file_type().is_file() || entry.file_name() != CONFIG_FILE_NAME {
                continue;
            }

            let path = entry.into_path();
            if path
                .to_string_lossy()
                .replace('\\', "/")
                .contains(BUILD_OUTPUT_MARKER)
            {
                trace!(path = %path.display(), "ignoring build output config file");
                continue;
            }
            found.push(path);
        }

        Ok(found)
    }

    fn parse_file(path: &Path) -> ToolboxResult<ConfigFile> {
        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::filesystem(path, e))?;
        toml::from_str(&raw).map_err(|e| {
            ToolboxError::configuration(format!("failed to parse '{}': {e}", path.display()))
        })
    }
}

impl ProjectLoader for TomlProjectLoader {
    #[instrument(skip(self), fields(base = %base_path.display()))]
    fn load_projects(&self, base_path: &Path) -> ToolboxResult<Vec<Project>> {
        let config_paths = self.find_config_files(base_path)?;

        let mut parsed: HashMap<PathBuf, ConfigFile> = HashMap::new();
        for path in &config_paths {
            parsed.insert(path.clone(), Self::parse_file(path)?);
        }

        let mut projects = Vec::new();
        for path in &config_paths {
            let hierarchy = hierarchy_of(path, base_path, &parsed);
            let file_projects = projects_from(path, &hierarchy)?;
            debug!(
                config = %path.display(),
                levels = hierarchy.len(),
                projects = file_projects.len(),
                "loaded config file"
            );
            projects.extend(file_projects);
        }

        Ok(projects)
    }
}

/// `path`'s own config followed by those of its ancestors inside `base_path`.
fn hierarchy_of<'a>(
    path: &Path,
    base_path: &Path,
    parsed: &'a HashMap<PathBuf, ConfigFile>,
) -> Vec<&'a ConfigFile> {
    let mut hierarchy = Vec::new();
    let mut dir = path.parent();

    while let Some(current) = dir {
        if let Some(config) = parsed.get(&current.join(CONFIG_FILE_NAME)) {
            hierarchy.push(config);
        }
        dir = current.parent().filter(|parent| parent.starts_with(base_path));
    }

    hierarchy
}

/// Build the projects of the deepest file in `hierarchy`.
fn projects_from(path: &Path, hierarchy: &[&ConfigFile]) -> ToolboxResult<Vec<Project>> {
    let Some(own) = hierarchy.first() else {
        return Ok(Vec::new());
    };
    if own.projects.is_empty() {
        return Ok(Vec::new());
    }

    let api_url = hierarchy
        .iter()
        .find_map(|config| config.tolgee.api.url.clone())
        .ok_or_else(|| {
            ToolboxError::configuration(format!(
                "'tolgee.api.url' is not set for '{}' or any parent config file",
                path.display()
            ))
        })?;
    let missing_namespace_fail = hierarchy
        .iter()
        .find_map(|config| config.general.missing_namespace_fail)
        .unwrap_or(false);

    let project_path = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut projects = Vec::with_capacity(own.projects.len());
    for entry in &own.projects {
        let project_id = entry.tolgee.id.ok_or_else(|| {
            ToolboxError::configuration(format!(
                "a project in '{}' is missing 'tolgee.id'",
                path.display()
            ))
        })?;

        let project = Project {
            path: project_path.clone(),
            api_url: api_url.clone(),
            project_id,
            namespace: entry
                .tolgee
                .namespace
                .clone()
                .filter(|ns| !ns.trim().is_empty()),
            missing_namespace_fail,
            sources: project_files(&entry.sources)?,
            targets: project_files(&entry.targets)?,
        };
        DomainValidator::validate_project(&project)?;
        projects.push(project);
    }

    DomainValidator::validate_unique_ids(&projects).map_err(|e| {
        ToolboxError::configuration(format!("{e} in '{}'", path.display()))
    })?;

    Ok(projects)
}

fn project_files<F>(entries: &[FileEntry]) -> ToolboxResult<Vec<ProjectFile<F>>>
where
    F: FromStr<Err = DomainError>,
{
    entries
        .iter()
        .map(|entry| -> ToolboxResult<ProjectFile<F>> {
            let files = ProjectFilesDefinition::parse(&entry.files)?;
            let format = entry.format.parse::<F>()?;
            let locale = entry
                .locale
                .as_deref()
                .filter(|tag| !tag.trim().is_empty())
                .map(Locale::parse)
                .transpose()?;
            let excluded_locales = entry
                .excluded_locales
                .iter()
                .map(|tag| Locale::parse(tag))
                .collect::<Result<BTreeSet<_>, _>>()?;

            Ok(ProjectFile {
                files,
                format,
                locale,
                excluded_locales,
            })
        })
        .collect()
}

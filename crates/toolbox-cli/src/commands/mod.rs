//! Command handlers, one module per subcommand.

pub mod completions;
pub mod projects;
pub mod pull;
pub mod push;

use std::path::Path;

use tracing::debug;

use toolbox_adapters::{ApiKey, HttpTolgeeClient, TomlProjectLoader};
use toolbox_core::{application::ProjectLoader, domain::Project};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Projects configured below `base_path`, restricted to `ids` when given.
pub(crate) fn load_projects(base_path: &Path, ids: &[u64]) -> CliResult<Vec<Project>> {
    let mut projects = TomlProjectLoader::new().load_projects(base_path)?;
    if !ids.is_empty() {
        projects.retain(|project| ids.contains(&project.project_id));
    }
    debug!(count = projects.len(), "projects selected");

    if projects.is_empty() {
        return Err(CliError::NoProjects {
            base_path: base_path.display().to_string(),
        });
    }
    Ok(projects)
}

/// Tolgee client for the configured API key.
pub(crate) fn tolgee_client(config: &AppConfig) -> CliResult<HttpTolgeeClient> {
    let key = config
        .api_key
        .as_deref()
        .ok_or(CliError::MissingCredential)?;
    Ok(HttpTolgeeClient::new(ApiKey::new(key))?)
}

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it. Per-project settings
//! live in `tolgee-toolbox.toml` files and are read by the project loader.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `TOLGEE_TOOLBOX_*` (a `.env` file is loaded first)
//! 3. Config file (`--config FILE`, or the per-user config file if present)
//! 4. Built-in defaults (always present)

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read into [`AppConfig`].
pub const ENV_PREFIX: &str = "TOLGEE_TOOLBOX";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tolgee API key, usually from `TOLGEE_TOOLBOX_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the given file (or the per-user default
    /// location) and the process environment.
    ///
    /// An explicit `--config` file must exist; the default one is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(config_file, None)
    }

    /// [`Self::load`] with an explicit environment map instead of the process
    /// environment.
    fn load_with(
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let settings = Config::builder()
            .set_default("output.no_color", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("failed to read configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("invalid configuration")?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.api_key = self
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tolgee-toolbox.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("nl", "serviceplanet", "tolgee-toolbox")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tolgee-toolbox.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_have_no_key() {
        let cfg = AppConfig::default();
        assert!(cfg.api_key.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn api_key_comes_from_environment() {
        let cfg = AppConfig::load_with(None, env(&[("TOLGEE_TOOLBOX_API_KEY", "tgpak_env")]))
            .unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("tgpak_env"));
    }

    #[test]
    fn nested_keys_use_double_underscore() {
        let cfg = AppConfig::load_with(None, env(&[("TOLGEE_TOOLBOX_OUTPUT__NO_COLOR", "true")]))
            .unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = \"tgpak_file\"\n[output]\nno_color = true\n").unwrap();

        let from_file = AppConfig::load_with(Some(&path), env(&[])).unwrap();
        assert_eq!(from_file.api_key.as_deref(), Some("tgpak_file"));
        assert!(from_file.output.no_color);

        let overridden =
            AppConfig::load_with(Some(&path), env(&[("TOLGEE_TOOLBOX_API_KEY", "tgpak_env")]))
                .unwrap();
        assert_eq!(overridden.api_key.as_deref(), Some("tgpak_env"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = AppConfig::load_with(None, env(&[("TOLGEE_TOOLBOX_API_KEY", "  ")])).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load_with(Some(&missing), env(&[])).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}

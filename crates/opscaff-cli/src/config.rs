//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns it; the core crate only ever sees the `ProjectConfig`
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command, not here)
//! 2. `OPSCAFF_*` environment variables, `__` between key segments
//!    (`OPSCAFF_DEFAULTS__DOMAIN=example.org`)
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use opscaff_core::domain::License;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "OPSCAFF";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for `opscaff init` flags.
    pub defaults: InitDefaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Values used by `init` when the matching flag is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitDefaults {
    pub project_version: String,
    pub domain: String,
    pub license: License,
    /// Empty means "no owner" in the copyright line.
    pub owner: String,
    pub image: String,
    pub controller_runtime_version: String,
    pub controller_tools_version: String,
    pub boilerplate_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for InitDefaults {
    fn default() -> Self {
        Self {
            project_version: "2".into(),
            domain: "my.domain".into(),
            license: License::Apache2,
            owner: String::new(),
            image: "controller:latest".into(),
            controller_runtime_version: "v0.4.0".into(),
            controller_tools_version: "v0.2.4".into(),
            boilerplate_path: opscaff_core::application::services::DEFAULT_BOILERPLATE_PATH.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?,
            )
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.opscaff.toml` in
    /// the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "opscaff", "opscaff")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".opscaff.toml"))
    }

    /// The configuration as a TOML document.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}

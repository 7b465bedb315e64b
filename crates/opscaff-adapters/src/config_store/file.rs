//! TOML-backed config store writing the `PROJECT` file.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use opscaff_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::ProjectConfig,
    error::OpscaffResult,
};

/// File name of the persisted project configuration.
pub const PROJECT_FILE: &str = "PROJECT";

/// Persists the configuration to `<root>/PROJECT`.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(PROJECT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist_error(&self, reason: impl ToString) -> ApplicationError {
        ApplicationError::ConfigPersist {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl ConfigStore for TomlConfigStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, config: &ProjectConfig) -> OpscaffResult<()> {
        let body = toml::to_string_pretty(config).map_err(|e| self.persist_error(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.persist_error(e))?;
        }
        std::fs::write(&self.path, body).map_err(|e| self.persist_error(e))?;

        debug!("project configuration saved");
        Ok(())
    }
}

//! Init Scaffolder - bootstraps a new operator project.
//!
//! Runs in two phases because most generated sources embed the license
//! header, and that header is itself a generated file:
//!
//! 1. Persist the project configuration
//! 2. Render the bootstrap batch (boilerplate header and static files)
//! 3. Read the boilerplate back from disk
//! 4. Render the version catalog with the boilerplate in scope
//!
//! Every step is fail-fast. Nothing is rolled back: a failed run leaves the
//! files it already wrote, and a re-run repairs them.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfigStore, Filesystem, TemplateCatalog},
        services::scaffold::{Scaffold, ScaffoldReport},
    },
    domain::{DomainError, ProjectConfig, ProjectVersion, RelativePath, Universe},
    error::OpscaffResult,
};

/// Where the license header lands unless overridden.
pub const DEFAULT_BOILERPLATE_PATH: &str = "hack/boilerplate.go.txt";

/// Variable carrying the boilerplate location, relative to the root.
pub const BOILERPLATE_PATH_VAR: &str = "BOILERPLATE_PATH";

/// Variable carrying the copyright year.
pub const YEAR_VAR: &str = "YEAR";

/// Phases of an init run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStage {
    SaveConfig,
    Bootstrap,
    LoadBoilerplate,
    Catalog,
}

impl InitStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SaveConfig => "save-config",
            Self::Bootstrap => "bootstrap",
            Self::LoadBoilerplate => "load-boilerplate",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a successful init run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub version: ProjectVersion,
    pub bootstrap: ScaffoldReport,
    pub catalog: ScaffoldReport,
}

impl InitReport {
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.bootstrap.written.iter().chain(&self.catalog.written)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &PathBuf> {
        self.bootstrap.skipped.iter().chain(&self.catalog.skipped)
    }
}

/// Two-phase project bootstrapper.
///
/// Build one with [`InitScaffolder::builder`].
pub struct InitScaffolder {
    config: Arc<ProjectConfig>,
    catalog: Box<dyn TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn ConfigStore>,
    root: PathBuf,
    boilerplate_path: RelativePath,
    year: Option<String>,
}

impl InitScaffolder {
    pub fn builder() -> InitScaffolderBuilder {
        InitScaffolderBuilder::default()
    }

    /// Run the whole init sequence.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::ConfigPersist` before any file is written
    /// - any unit failure from either batch, wrapped with its declared path
    /// - `ApplicationError::BoilerplateRead` if the header cannot be read back
    /// - `DomainError::UnsupportedVersion` after the bootstrap batch is on disk
    #[instrument(
        skip_all,
        fields(
            root = %self.root.display(),
            repo = %self.config.repo,
            version = %self.config.version
        )
    )]
    pub fn scaffold(&self) -> OpscaffResult<InitReport> {
        info!("Writing scaffold for you to edit...");

        info!(stage = %InitStage::SaveConfig, "persisting project configuration");
        self.store.save(&self.config)?;

        let universe = self.base_universe();
        let executor = Scaffold::new(&self.root, self.filesystem.as_ref());

        info!(stage = %InitStage::Bootstrap, "rendering bootstrap files");
        let bootstrap = executor.execute(&universe, &self.catalog.bootstrap())?;

        info!(
            stage = %InitStage::LoadBoilerplate,
            path = %self.boilerplate_path,
            "loading boilerplate"
        );
        let boilerplate = self.read_boilerplate()?;

        let version = self.config.project_version()?;
        info!(stage = %InitStage::Catalog, %version, "rendering project files");
        let universe = universe.with_boilerplate(boilerplate);
        let catalog = executor.execute(&universe, &self.catalog.for_version(version))?;

        info!(
            written = bootstrap.written.len() + catalog.written.len(),
            skipped = bootstrap.skipped.len() + catalog.skipped.len(),
            "scaffold complete"
        );
        Ok(InitReport {
            version,
            bootstrap,
            catalog,
        })
    }

    fn base_universe(&self) -> Universe {
        let universe = Universe::new(Arc::clone(&self.config))
            .with_variable(BOILERPLATE_PATH_VAR, self.boilerplate_path.to_string());
        match &self.year {
            Some(year) => universe.with_variable(YEAR_VAR, year.as_str()),
            None => universe,
        }
    }

    fn read_boilerplate(&self) -> OpscaffResult<String> {
        let path = self.root.join(self.boilerplate_path.as_path());
        self.filesystem.read_to_string(&path).map_err(|e| {
            ApplicationError::BoilerplateRead {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Builder for [`InitScaffolder`].
///
/// `config`, `catalog`, `filesystem` and `store` are required.
#[derive(Default)]
pub struct InitScaffolderBuilder {
    config: Option<ProjectConfig>,
    catalog: Option<Box<dyn TemplateCatalog>>,
    filesystem: Option<Box<dyn Filesystem>>,
    store: Option<Box<dyn ConfigStore>>,
    root: Option<PathBuf>,
    boilerplate_path: Option<String>,
    year: Option<String>,
}

impl InitScaffolderBuilder {
    pub fn config(mut self, config: ProjectConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn catalog(mut self, catalog: Box<dyn TemplateCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn filesystem(mut self, filesystem: Box<dyn Filesystem>) -> Self {
        self.filesystem = Some(filesystem);
        self
    }

    pub fn store(mut self, store: Box<dyn ConfigStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Output root; defaults to the current directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Boilerplate location relative to the root.
    pub fn boilerplate_path(mut self, path: impl Into<String>) -> Self {
        self.boilerplate_path = Some(path.into());
        self
    }

    /// Copyright year exposed as `{{YEAR}}`.
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn build(self) -> OpscaffResult<InitScaffolder> {
        let config = self
            .config
            .ok_or(DomainError::MissingRequiredField { field: "config" })?;
        let catalog = self
            .catalog
            .ok_or(DomainError::MissingRequiredField { field: "catalog" })?;
        let filesystem = self
            .filesystem
            .ok_or(DomainError::MissingRequiredField { field: "filesystem" })?;
        let store = self
            .store
            .ok_or(DomainError::MissingRequiredField { field: "store" })?;
        let boilerplate_path = RelativePath::parse(
            self.boilerplate_path
                .as_deref()
                .unwrap_or(DEFAULT_BOILERPLATE_PATH),
        )?;

        Ok(InitScaffolder {
            config: Arc::new(config),
            catalog,
            filesystem,
            store,
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            boilerplate_path,
            year: self.year.filter(|y| !y.is_empty()),
        })
    }
}

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `opscaff-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ProjectConfig, ProjectVersion, Template};
use crate::error::OpscaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `opscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `opscaff_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// ## Design Notes
///
/// - Paths handed to the port are already joined onto the output root
/// - The port never applies existence policies; `FileWriter` does
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> OpscaffResult<()>;

    /// Write content to a file, truncating any existing content.
    fn write_file(&self, path: &Path, content: &[u8]) -> OpscaffResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> OpscaffResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for persisting the project configuration.
///
/// Invoked exactly once per init run, before any rendering.
#[cfg_attr(test, automock)]
pub trait ConfigStore: Send + Sync {
    /// Persist `config`.
    ///
    /// # Errors
    /// `ApplicationError::ConfigPersist` if the store is unwritable.
    fn save(&self, config: &ProjectConfig) -> OpscaffResult<()>;
}

/// Port supplying template batches.
///
/// Implemented by `opscaff_adapters::catalog::BuiltinCatalog`. The engine
/// never inspects the units beyond the `Template` capability set.
#[cfg_attr(test, automock)]
pub trait TemplateCatalog: Send + Sync {
    /// Units rendered before the boilerplate is read back: the boilerplate
    /// file itself plus static files that do not embed it.
    ///
    /// The boilerplate unit must be declared at `{{BOILERPLATE_PATH}}`.
    fn bootstrap(&self) -> Vec<Box<dyn Template>>;

    /// Version-specific units rendered after read-back.
    fn for_version(&self, version: ProjectVersion) -> Vec<Box<dyn Template>>;
}

//! Infrastructure adapters for opscaff.
//!
//! This crate implements the ports defined in `opscaff-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod config_store;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use config_store::{MemoryConfigStore, PROJECT_FILE, TomlConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `opscaff-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ConfigStore`: Project configuration persistence
//!   - `TemplateCatalog`: Per-version template lists
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ConfigStore, Filesystem, TemplateCatalog};

#[cfg(test)]
pub use output::{MockConfigStore, MockFilesystem, MockTemplateCatalog};

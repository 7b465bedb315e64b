//! Application layer for opscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InitScaffolder, Scaffold, FileWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but contains no
//! resolution logic itself. Placeholder rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    FileWriter, InitReport, InitScaffolder, InitScaffolderBuilder, InitStage, Scaffold,
    ScaffoldReport, WriteOutcome,
};

// Port traits, for adapter implementation
pub use ports::{ConfigStore, Filesystem, TemplateCatalog};

pub use error::ApplicationError;

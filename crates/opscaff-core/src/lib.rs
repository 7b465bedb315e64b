//! opscaff core - hexagonal scaffold engine
//!
//! This crate provides the domain and application layers of the opscaff
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           opscaff-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (InitScaffolder, Scaffold, FileWriter) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ConfigStore, Catalog)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     opscaff-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TomlConfigStore, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Universe, Template, ProjectConfig)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use opscaff_core::prelude::*;
//!
//! let config = ProjectConfig::new("2", "example.com/guestbook", "controller:latest")
//!     .with_domain("my.domain");
//!
//! let report = InitScaffolder::builder()
//!     .config(config)
//!     .catalog(Box::new(catalog))       // impl TemplateCatalog
//!     .filesystem(Box::new(filesystem)) // impl Filesystem
//!     .store(Box::new(store))           // impl ConfigStore
//!     .root("./guestbook")
//!     .build()?
//!     .scaffold()?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, InitReport, InitScaffolder, Scaffold, ScaffoldReport, WriteOutcome,
        ports::{ConfigStore, Filesystem, TemplateCatalog},
    };
    pub use crate::domain::{
        DependencyPins, DomainError, ExistencePolicy, FileTemplate, License, ProjectConfig,
        ProjectVersion, RelativePath, Template, Universe,
    };
    pub use crate::error::{OpscaffError, OpscaffResult};
}

//! Application services - orchestrate use cases.
//!
//! - [`FileWriter`] applies existence policies to single files
//! - [`Scaffold`] renders and writes one batch of templates
//! - [`InitScaffolder`] runs the two-phase project bootstrap

pub mod init_scaffolder;
pub mod scaffold;
pub mod writer;

pub use init_scaffolder::{
    BOILERPLATE_PATH_VAR, DEFAULT_BOILERPLATE_PATH, InitReport, InitScaffolder,
    InitScaffolderBuilder, InitStage, YEAR_VAR,
};
pub use scaffold::{Scaffold, ScaffoldReport};
pub use writer::{FileWriter, WriteOutcome};

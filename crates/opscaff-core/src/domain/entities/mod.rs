pub mod common;
pub mod config;
pub mod template;
pub mod universe;

pub use crate::domain::DomainError;
pub use config::ProjectConfig;
pub use template::{FileTemplate, Template};
pub use universe::Universe;

//! Persisted project configuration.
//!
//! [`ProjectConfig`] is the record written by the config store before any
//! rendering happens. The engine treats it as read-only input; the only
//! interpretation it performs is [`ProjectConfig::project_version`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{License, ProjectVersion},
};

/// Declared project settings shared by every template in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Schema version as persisted (`"1"`, `"2"`). Kept as a string so an
    /// unknown value can be stored and reported instead of failing to load.
    pub version: String,

    /// Go module / import path of the project.
    pub repo: String,

    /// API group domain (e.g. `my.domain`).
    #[serde(default)]
    pub domain: String,

    /// Resource kinds already declared in the project.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,

    /// Container image reference for the manager.
    pub image: String,

    /// License used for the boilerplate header.
    #[serde(default)]
    pub license: License,

    /// Copyright owner written into the boilerplate header.
    #[serde(default)]
    pub owner: String,

    /// Dependency-manager version pins (v2 projects).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyPins>,
}

/// A group/version/kind triple already scaffolded in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub group: String,
    pub version: String,
    pub kind: String,
}

/// Versions pinned into `go.mod` and the Makefile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPins {
    pub controller_runtime: String,
    pub controller_tools: String,
}

impl ProjectConfig {
    /// Start a config with the required fields; the rest take defaults.
    pub fn new(
        version: impl Into<String>,
        repo: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            repo: repo.into(),
            domain: String::new(),
            resources: Vec::new(),
            image: image.into(),
            license: License::default(),
            owner: String::new(),
            dependencies: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_license(mut self, license: License) -> Self {
        self.license = license;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_dependencies(
        mut self,
        controller_runtime: impl Into<String>,
        controller_tools: impl Into<String>,
    ) -> Self {
        self.dependencies = Some(DependencyPins {
            controller_runtime: controller_runtime.into(),
            controller_tools: controller_tools.into(),
        });
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Interpret the persisted version string.
    ///
    /// # Errors
    /// `UnsupportedVersion` for anything other than v1/v2.
    pub fn project_version(&self) -> Result<ProjectVersion, DomainError> {
        ProjectVersion::from_str(&self.version)
    }

    pub fn is_v1(&self) -> bool {
        matches!(self.project_version(), Ok(ProjectVersion::V1))
    }

    pub fn is_v2(&self) -> bool {
        matches!(self.project_version(), Ok(ProjectVersion::V2))
    }
}

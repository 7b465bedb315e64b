//! Domain value objects: ProjectVersion, License, ExistencePolicy.
//!
//! # Design
//!
//! These are pure `Copy` value types compared by value.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding a Project Version
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a catalog for it in the adapters crate
//! 4. Done: the executor never changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectVersion ───────────────────────────────────────────────────────────

/// Schema version of a generated project.
///
/// Selects which catalog renders the second batch of an init run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectVersion {
    V1,
    V2,
}

impl ProjectVersion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
        }
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "v1" => Ok(Self::V1),
            "2" | "v2" => Ok(Self::V2),
            _ => Err(DomainError::UnsupportedVersion {
                version: s.to_string(),
            }),
        }
    }
}

// ── License ──────────────────────────────────────────────────────────────────

/// License used for the boilerplate header of generated sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum License {
    #[default]
    #[serde(alias = "apache-2.0", alias = "apache")]
    Apache2,
    None,
}

impl License {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apache2 => "apache2",
            Self::None => "none",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apache2" | "apache-2.0" | "apache" => Ok(Self::Apache2),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::UnsupportedLicense {
                license: other.to_string(),
            }),
        }
    }
}

// ── ExistencePolicy ──────────────────────────────────────────────────────────

/// What the writer does when a file already exists at a unit's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExistencePolicy {
    /// Truncate and rewrite.
    Overwrite,
    /// Leave the existing file untouched and report success.
    SkipIfExists,
    /// Fail the unit with `AlreadyExists`.
    ErrorIfExists,
}

impl ExistencePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::SkipIfExists => "skip-if-exists",
            Self::ErrorIfExists => "error-if-exists",
        }
    }
}

impl fmt::Display for ExistencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_version_parses_both_spellings() {
        assert_eq!(ProjectVersion::from_str("1").unwrap(), ProjectVersion::V1);
        assert_eq!(ProjectVersion::from_str("v2").unwrap(), ProjectVersion::V2);
        assert_eq!(ProjectVersion::from_str(" V2 ").unwrap(), ProjectVersion::V2);
    }

    #[test]
    fn project_version_rejects_unknown() {
        let err = ProjectVersion::from_str("3-alpha").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedVersion {
                version: "3-alpha".into()
            }
        );
    }

    #[test]
    fn license_parses_aliases() {
        assert_eq!(License::from_str("Apache-2.0").unwrap(), License::Apache2);
        assert_eq!(License::from_str("none").unwrap(), License::None);
        assert!(License::from_str("gpl3").is_err());
    }

    #[test]
    fn policy_display_is_kebab_case() {
        assert_eq!(ExistencePolicy::SkipIfExists.to_string(), "skip-if-exists");
        assert_eq!(ExistencePolicy::ErrorIfExists.to_string(), "error-if-exists");
    }
}

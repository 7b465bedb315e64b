// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for opscaff.
//!
//! This module contains pure logic with no I/O. Filesystem access and
//! configuration persistence are reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, clock or environment reads
//! - **Immutable context**: `Universe` is rebuilt, never mutated
//! - **Pure resolution**: `resolve(unit, universe)` is deterministic
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    config::{DependencyPins, ProjectConfig, Resource},
    template::{
        FileTemplate, RenderedFile, Template, TemplateContent, TemplateSource, resolve, substitute,
    },
    universe::{BOILERPLATE_VAR, Universe},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ExistencePolicy, License, ProjectVersion};

#[cfg(test)]
mod tests {
    use super::*;

    fn config(version: &str) -> ProjectConfig {
        ProjectConfig::new(version, "example.com/memcached-operator", "controller:latest")
            .with_domain("example.com")
            .with_owner("The Memcached Authors")
            .with_dependencies("v0.4.0", "v0.2.4")
    }

    // ========================================================================
    // Two-phase context
    // ========================================================================

    #[test]
    fn catalog_unit_fails_before_boilerplate_is_loaded() {
        let unit = FileTemplate::parameterized("main.go", "{{BOILERPLATE}}\n\npackage main\n");
        let before = Universe::new(config("2"));

        let err = resolve(&unit, &before).unwrap_err();
        assert!(matches!(
            err,
            DomainError::ContentResolution { ref variable, .. } if variable == BOILERPLATE_VAR
        ));

        let after = before.with_boilerplate("/*\nCopyright 2026.\n*/");
        let file = resolve(&unit, &after).unwrap();
        assert!(
            String::from_utf8(file.content)
                .unwrap()
                .starts_with("/*\nCopyright 2026.\n*/\n\npackage main")
        );
    }

    #[test]
    fn changed_config_changes_content() {
        let unit = FileTemplate::parameterized("config/manager/manager.yaml", "image: {{IMAGE}}\n");
        let first = resolve(&unit, &Universe::new(config("2"))).unwrap();

        let mut changed = config("2");
        changed.image = "registry.example.com/op:v1".into();
        let second = resolve(&unit, &Universe::new(changed)).unwrap();

        assert_eq!(first.content, b"image: controller:latest\n");
        assert_eq!(second.content, b"image: registry.example.com/op:v1\n");
    }

    #[test]
    fn version_selects_from_config() {
        assert_eq!(config("1").project_version().unwrap(), ProjectVersion::V1);
        assert_eq!(config("v2").project_version().unwrap(), ProjectVersion::V2);
        assert!(matches!(
            config("3").project_version(),
            Err(DomainError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn error_categories() {
        assert_eq!(
            DomainError::UnsupportedVersion {
                version: "9".into()
            }
            .category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            DomainError::PathEscapesRoot { path: "..".into() }.category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn boilerplate_suggestion_mentions_ordering() {
        let err = DomainError::ContentResolution {
            path: "main.go".into(),
            variable: BOILERPLATE_VAR.into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("bootstrap")));
    }
}

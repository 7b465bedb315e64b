//! Built-in template catalog.
//!
//! Template bodies live under `templates/` in this crate and are compiled
//! in with `include_str!`, so the binary needs no files at runtime.
//!
//! | Batch | Units | Module |
//! |-------|-------|--------|
//! | bootstrap | 4 | [`project`] |
//! | v1 | 15 | [`v1`] |
//! | v2 | 24 | [`v2`] |
//!
//! User-owned files (Go sources, build files) are `skip-if-exists`;
//! generated `config/**` manifests and the boilerplate are `overwrite`.

pub mod project;
pub mod v1;
pub mod v2;

use opscaff_core::{
    application::ports::TemplateCatalog,
    domain::{FileTemplate, ProjectVersion, Template},
};

pub use project::Boilerplate;

/// Generated file, rewritten on every run.
pub(crate) fn manifest(path: &'static str, body: &'static str) -> Box<dyn Template> {
    FileTemplate::parameterized(path, body).boxed()
}

/// User-owned file, written once and then left alone.
pub(crate) fn scaffold_once(path: &'static str, body: &'static str) -> Box<dyn Template> {
    FileTemplate::parameterized(path, body)
        .skip_if_exists()
        .boxed()
}

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn bootstrap(&self) -> Vec<Box<dyn Template>> {
        project::bootstrap()
    }

    fn for_version(&self, version: ProjectVersion) -> Vec<Box<dyn Template>> {
        match version {
            ProjectVersion::V1 => v1::catalog(),
            ProjectVersion::V2 => v2::catalog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use opscaff_core::domain::{ExistencePolicy, ProjectConfig, Universe, resolve};

    fn full_universe() -> Universe {
        Universe::new(
            ProjectConfig::new("2", "example.com/guestbook", "controller:latest")
                .with_domain("my.domain")
                .with_owner("The Guestbook Authors")
                .with_dependencies("v0.4.0", "v0.2.4"),
        )
        .with_variable("BOILERPLATE_PATH", "hack/boilerplate.go.txt")
        .with_variable("YEAR", "2026")
        .with_boilerplate("/*\nCopyright 2026 The Guestbook Authors.\n*/")
    }

    fn declared(batch: &[Box<dyn Template>]) -> BTreeSet<&str> {
        batch.iter().map(|u| u.path()).collect()
    }

    #[test]
    fn catalog_sizes() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(catalog.bootstrap().len(), 4);
        assert_eq!(catalog.for_version(ProjectVersion::V1).len(), 15);
        assert_eq!(catalog.for_version(ProjectVersion::V2).len(), 24);
    }

    #[test]
    fn paths_are_unique_within_each_batch() {
        let catalog = BuiltinCatalog::new();
        for batch in [
            catalog.bootstrap(),
            catalog.for_version(ProjectVersion::V1),
            catalog.for_version(ProjectVersion::V2),
        ] {
            assert_eq!(declared(&batch).len(), batch.len());
        }
    }

    #[test]
    fn every_unit_resolves_with_a_full_universe() {
        let catalog = BuiltinCatalog::new();
        let universe = full_universe();
        for version in [ProjectVersion::V1, ProjectVersion::V2] {
            for unit in catalog.bootstrap().iter().chain(&catalog.for_version(version)) {
                if let Err(e) = resolve(unit.as_ref(), &universe) {
                    panic!("{} failed: {e}", unit.path());
                }
            }
        }
    }

    #[test]
    fn policies_follow_ownership() {
        let catalog = BuiltinCatalog::new();
        let units: Vec<_> = catalog
            .bootstrap()
            .into_iter()
            .chain(catalog.for_version(ProjectVersion::V1))
            .chain(catalog.for_version(ProjectVersion::V2))
            .collect();

        for unit in &units {
            let expected = if unit.path().starts_with("config/") || unit.path() == Boilerplate::PATH
            {
                ExistencePolicy::Overwrite
            } else {
                ExistencePolicy::SkipIfExists
            };
            assert_eq!(unit.policy(), expected, "{}", unit.path());
        }
    }

    #[test]
    fn go_sources_embed_the_boilerplate() {
        let universe = full_universe();
        for unit in v2::catalog().iter().chain(&v1::catalog()) {
            if unit.path().ends_with(".go") {
                let file = resolve(unit.as_ref(), &universe).unwrap();
                assert!(
                    file.content.starts_with(b"/*\nCopyright 2026 The Guestbook Authors.\n*/\n\npackage"),
                    "{}",
                    unit.path()
                );
            }
        }
    }

    #[test]
    fn v2_pins_flow_into_build_files() {
        let universe = full_universe();
        let batch = v2::catalog();
        let render = |path: &str| {
            let unit = batch.iter().find(|u| u.path() == path).unwrap();
            String::from_utf8(resolve(unit.as_ref(), &universe).unwrap().content).unwrap()
        };

        assert!(render("go.mod").contains("sigs.k8s.io/controller-runtime v0.4.0"));
        let makefile = render("Makefile");
        assert!(makefile.contains("controller-gen@v0.2.4"));
        assert!(makefile.contains("IMG ?= controller:latest"));
        assert!(makefile.contains("headerFile=./hack/boilerplate.go.txt"));
        assert!(makefile.contains("\n\tgo build -o bin/manager main.go\n"));
        assert!(render("config/default/kustomization.yaml").contains("namespace: guestbook-system"));
    }
}

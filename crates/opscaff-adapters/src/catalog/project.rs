//! Units shared by every project version: the bootstrap batch.

use opscaff_core::domain::{
    DomainError, ExistencePolicy, License, Template, Universe, substitute,
};

use super::{manifest, scaffold_once};

const APACHE2_NOTICE: &str = include_str!("../../templates/project/apache2.txt");

/// License header written to `{{BOILERPLATE_PATH}}` and later embedded in
/// every Go source through `{{BOILERPLATE}}`.
///
/// The copyright line needs `{{YEAR}}`; `{{OWNER}}` is optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boilerplate;

impl Boilerplate {
    pub const PATH: &'static str = "{{BOILERPLATE_PATH}}";
}

impl Template for Boilerplate {
    fn path(&self) -> &str {
        Self::PATH
    }

    fn policy(&self) -> ExistencePolicy {
        ExistencePolicy::Overwrite
    }

    fn resolve_content(&self, universe: &Universe) -> Result<Vec<u8>, DomainError> {
        let line = if universe.get("OWNER").is_some() {
            "Copyright {{YEAR}} {{OWNER}}."
        } else {
            "Copyright {{YEAR}}."
        };
        let copyright =
            substitute(line, universe).map_err(|variable| DomainError::ContentResolution {
                path: Self::PATH.to_string(),
                variable,
            })?;

        let mut text = format!("/*\n{copyright}\n");
        if let License::Apache2 = universe.config().license {
            text.push('\n');
            text.push_str(APACHE2_NOTICE);
        }
        text.push_str("*/");
        Ok(text.into_bytes())
    }
}

/// Boilerplate first, then the static files that do not embed it.
pub fn bootstrap() -> Vec<Box<dyn Template>> {
    vec![
        Box::new(Boilerplate),
        scaffold_once(".gitignore", include_str!("../../templates/project/gitignore")),
        manifest(
            "config/rbac/auth_proxy_role.yaml",
            include_str!("../../templates/project/config/rbac/auth_proxy_role.yaml"),
        ),
        manifest(
            "config/rbac/auth_proxy_role_binding.yaml",
            include_str!("../../templates/project/config/rbac/auth_proxy_role_binding.yaml"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use opscaff_core::domain::ProjectConfig;

    fn universe(license: License, owner: &str) -> Universe {
        Universe::new(
            ProjectConfig::new("2", "example.com/guestbook", "controller:latest")
                .with_license(license)
                .with_owner(owner),
        )
        .with_variable("YEAR", "2026")
    }

    fn header(u: &Universe) -> String {
        String::from_utf8(Boilerplate.resolve_content(u).unwrap()).unwrap()
    }

    #[test]
    fn apache_header_with_owner() {
        let text = header(&universe(License::Apache2, "The Guestbook Authors"));
        assert!(text.starts_with("/*\nCopyright 2026 The Guestbook Authors.\n\nLicensed under"));
        assert!(text.ends_with("limitations under the License.\n*/"));
    }

    #[test]
    fn no_owner_drops_the_name() {
        let text = header(&universe(License::Apache2, ""));
        assert!(text.starts_with("/*\nCopyright 2026.\n"));
    }

    #[test]
    fn no_license_keeps_only_copyright() {
        assert_eq!(
            header(&universe(License::None, "Acme")),
            "/*\nCopyright 2026 Acme.\n*/"
        );
    }

    #[test]
    fn year_is_required() {
        let u = Universe::new(ProjectConfig::new("2", "example.com/x", "controller:latest"));
        let err = Boilerplate.resolve_content(&u).unwrap_err();
        assert_eq!(
            err,
            DomainError::ContentResolution {
                path: Boilerplate::PATH.into(),
                variable: "YEAR".into(),
            }
        );
    }

    #[test]
    fn boilerplate_leads_the_bootstrap_batch() {
        let batch = bootstrap();
        assert_eq!(batch.len(), 4);
        assert_eq!(batch[0].path(), Boilerplate::PATH);
        assert!(batch.iter().all(|u| u.policy() != ExistencePolicy::ErrorIfExists));
    }
}

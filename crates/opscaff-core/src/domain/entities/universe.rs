//! The shared rendering context handed to every template in a batch.
//!
//! A [`Universe`] is a **Value Object**: built once per executor call and
//! never mutated afterwards. Adding the boilerplate text or an extra
//! variable consumes the value and returns a new one, so a stage that was
//! given a universe without boilerplate can never observe it changing.
//!
//! ## Variables
//!
//! | Variable | Source |
//! |----------|--------|
//! | `PROJECT_VERSION` | `config.version` |
//! | `REPO` | `config.repo` |
//! | `PROJECT_NAME` | last segment of `config.repo` |
//! | `DOMAIN` | `config.domain` |
//! | `IMAGE` | `config.image` |
//! | `LICENSE` | `config.license` |
//! | `OWNER` | `config.owner` |
//! | `CONTROLLER_RUNTIME_VERSION` | `config.dependencies` |
//! | `CONTROLLER_TOOLS_VERSION` | `config.dependencies` |
//! | `BOILERPLATE` | read back from disk by the bootstrapper |
//!
//! Empty strings are not registered, so a template that needs an unset
//! field fails resolution instead of rendering a hole.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::config::ProjectConfig;

/// Variable name under which the boilerplate text is exposed.
pub const BOILERPLATE_VAR: &str = "BOILERPLATE";

#[derive(Debug, Clone)]
pub struct Universe {
    config: Arc<ProjectConfig>,
    boilerplate: Option<String>,
    variables: BTreeMap<String, String>,
}

impl Universe {
    /// Build a universe with no boilerplate loaded.
    pub fn new(config: impl Into<Arc<ProjectConfig>>) -> Self {
        let config = config.into();
        let mut variables = BTreeMap::new();

        let mut put = |key: &str, value: &str| {
            if !value.is_empty() {
                variables.insert(key.to_string(), value.to_string());
            }
        };
        put("PROJECT_VERSION", &config.version);
        put("REPO", &config.repo);
        put("PROJECT_NAME", project_name(&config.repo));
        put("DOMAIN", &config.domain);
        put("IMAGE", &config.image);
        put("LICENSE", config.license.as_str());
        put("OWNER", &config.owner);
        if let Some(pins) = &config.dependencies {
            put("CONTROLLER_RUNTIME_VERSION", &pins.controller_runtime);
            put("CONTROLLER_TOOLS_VERSION", &pins.controller_tools);
        }

        Self {
            config,
            boilerplate: None,
            variables,
        }
    }

    /// Return a new universe carrying the loaded boilerplate text.
    ///
    /// An empty text is still "loaded": `{{BOILERPLATE}}` then renders as
    /// an empty string instead of failing.
    pub fn with_boilerplate(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.variables
            .insert(BOILERPLATE_VAR.to_string(), text.clone());
        self.boilerplate = Some(text);
        self
    }

    /// Add a run-level variable (e.g. `YEAR`, `BOILERPLATE_PATH`).
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Boilerplate text, `None` until the bootstrapper has read it back.
    pub fn boilerplate(&self) -> Option<&str> {
        self.boilerplate.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// `example.com/org/guestbook` → `guestbook`.
fn project_name(repo: &str) -> &str {
    repo.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        ProjectConfig::new("2", "example.com/guestbook", "controller:latest")
            .with_domain("my.domain")
            .with_dependencies("v0.4.0", "v0.2.4")
    }

    #[test]
    fn derives_variables_from_config() {
        let u = Universe::new(config());
        assert_eq!(u.get("REPO"), Some("example.com/guestbook"));
        assert_eq!(u.get("DOMAIN"), Some("my.domain"));
        assert_eq!(u.get("IMAGE"), Some("controller:latest"));
        assert_eq!(u.get("LICENSE"), Some("apache2"));
        assert_eq!(u.get("CONTROLLER_TOOLS_VERSION"), Some("v0.2.4"));
        assert_eq!(u.get("PROJECT_NAME"), Some("guestbook"));
    }

    #[test]
    fn project_name_is_last_repo_segment() {
        assert_eq!(project_name("github.com/acme/memcached-operator/"), "memcached-operator");
        assert_eq!(project_name("guestbook"), "guestbook");
        assert_eq!(project_name(""), "");
    }

    #[test]
    fn empty_fields_are_absent() {
        let u = Universe::new(config());
        assert_eq!(u.get("OWNER"), None);
    }

    #[test]
    fn boilerplate_absent_until_loaded() {
        let u = Universe::new(config());
        assert!(u.boilerplate().is_none());
        assert!(u.get(BOILERPLATE_VAR).is_none());

        let loaded = u.clone().with_boilerplate("/* header */");
        assert_eq!(loaded.boilerplate(), Some("/* header */"));
        assert_eq!(loaded.get(BOILERPLATE_VAR), Some("/* header */"));
        // the original value is untouched
        assert!(u.boilerplate().is_none());
    }

    #[test]
    fn empty_boilerplate_still_counts_as_loaded() {
        let u = Universe::new(config()).with_boilerplate("");
        assert_eq!(u.get(BOILERPLATE_VAR), Some(""));
    }

    #[test]
    fn extra_variables() {
        let u = Universe::new(config()).with_variable("YEAR", "2026");
        assert_eq!(u.get("YEAR"), Some("2026"));
    }
}

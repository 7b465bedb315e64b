//! In-memory config store for tests.

use std::sync::{Arc, RwLock};

use opscaff_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::ProjectConfig,
    error::OpscaffResult,
};

/// Keeps every saved configuration. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    saved: Arc<RwLock<Vec<ProjectConfig>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently saved configuration.
    pub fn last(&self) -> Option<ProjectConfig> {
        self.saved.read().ok()?.last().cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saved.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn save(&self, config: &ProjectConfig) -> OpscaffResult<()> {
        self.saved
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_last_save() {
        let store = MemoryConfigStore::new();
        assert!(store.last().is_none());

        let config = ProjectConfig::new("1", "example.com/x", "controller:latest");
        store.save(&config).unwrap();
        store.clone().save(&config.clone().with_domain("x.io")).unwrap();

        assert_eq!(store.save_count(), 2);
        assert_eq!(store.last().unwrap().domain, "x.io");
    }
}

//! File writer - applies existence policies on top of the `Filesystem` port.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ExistencePolicy,
    error::OpscaffResult,
};

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Writes resolved files, creating parent directories as needed.
///
/// Not transactional: a failure leaves earlier writes in place.
pub struct FileWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write `content` to `path` under `policy`.
    ///
    /// | Policy | File absent | File present |
    /// |--------|-------------|--------------|
    /// | `Overwrite` | Created | Overwritten |
    /// | `SkipIfExists` | Created | Skipped (no I/O) |
    /// | `ErrorIfExists` | Created | `AlreadyExists` |
    pub fn write(
        &self,
        path: &Path,
        content: &[u8],
        policy: ExistencePolicy,
    ) -> OpscaffResult<WriteOutcome> {
        let exists = self.filesystem.exists(path);

        match (policy, exists) {
            (ExistencePolicy::SkipIfExists, true) => {
                debug!(path = %path.display(), "exists, skipping");
                return Ok(WriteOutcome::Skipped);
            }
            (ExistencePolicy::ErrorIfExists, true) => {
                return Err(ApplicationError::AlreadyExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            _ => {}
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;

        debug!(path = %path.display(), bytes = content.len(), %policy, "wrote file");
        Ok(if exists {
            WriteOutcome::Overwritten
        } else {
            WriteOutcome::Created
        })
    }
}

//! Scaffold executor - renders and writes one batch of template units.
//!
//! Each call is independent: the executor keeps no state between batches
//! beyond the filesystem it writes to.
//!
//! 1. For each unit, in declared order:
//!    - resolve path and content against the universe
//!    - write under the unit's existence policy
//! 2. On the first failure, stop and return the error wrapped with the
//!    unit's declared path. Later units are never attempted and earlier
//!    writes are not rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::Filesystem,
        services::writer::{FileWriter, WriteOutcome},
    },
    domain::{Template, Universe, resolve},
    error::{OpscaffError, OpscaffResult},
};

/// Paths touched by one batch, relative to the output root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn file_count(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// Batch executor bound to an output root.
pub struct Scaffold<'a> {
    root: &'a Path,
    filesystem: &'a dyn Filesystem,
}

impl<'a> Scaffold<'a> {
    pub fn new(root: &'a Path, filesystem: &'a dyn Filesystem) -> Self {
        Self { root, filesystem }
    }

    /// Render and write `batch` in order, failing fast.
    #[instrument(skip_all, fields(root = %self.root.display(), units = batch.len()))]
    pub fn execute(
        &self,
        universe: &Universe,
        batch: &[Box<dyn Template>],
    ) -> OpscaffResult<ScaffoldReport> {
        let writer = FileWriter::new(self.filesystem);
        let mut report = ScaffoldReport::default();

        for unit in batch {
            let (path, outcome) = self
                .execute_unit(&writer, universe, unit.as_ref())
                .map_err(|e| {
                    warn!(unit = unit.path(), error = %e, "unit failed, aborting batch");
                    OpscaffError::unit(unit.path(), e)
                })?;

            debug!(path = %path.display(), ?outcome, "unit done");
            match outcome {
                WriteOutcome::Skipped => report.skipped.push(path),
                WriteOutcome::Created | WriteOutcome::Overwritten => report.written.push(path),
            }
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "batch complete"
        );
        Ok(report)
    }

    fn execute_unit(
        &self,
        writer: &FileWriter<'_>,
        universe: &Universe,
        unit: &dyn Template,
    ) -> OpscaffResult<(PathBuf, WriteOutcome)> {
        let file = resolve(unit, universe)?;
        let target = self.root.join(file.path.as_path());
        let outcome = writer.write(&target, &file.content, file.policy)?;
        Ok((file.path.into_path_buf(), outcome))
    }
}

//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in
//! resolution. Resolution errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while persisting, writing, or reading back files.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The config store could not persist the project configuration.
    #[error("failed to persist project configuration at {path}: {reason}")]
    ConfigPersist { path: PathBuf, reason: String },

    /// An `error-if-exists` unit found a file at its path.
    #[error("file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Creating a directory or writing a file failed (I/O, permissions).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemWrite { path: PathBuf, reason: String },

    /// Reading a file failed.
    #[error("failed to read {path}: {reason}")]
    FilesystemRead { path: PathBuf, reason: String },

    /// The boilerplate file written by the bootstrap batch could not be
    /// read back. The engine just wrote it, so this is an internal fault.
    #[error("failed to read back boilerplate {path}: {reason}")]
    BoilerplateRead { path: PathBuf, reason: String },

    /// Port implementation lock was poisoned.
    #[error("adapter state is unavailable (lock poisoned)")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigPersist { path, .. } => vec![
                format!("Could not write {}", path.display()),
                "Check that the target directory is writable".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("'{}' already exists and must not be replaced", path.display()),
                "Remove or rename the file, then run the command again".into(),
            ],
            Self::FilesystemWrite { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::FilesystemRead { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::BoilerplateRead { .. } => vec![
                "The boilerplate header vanished right after it was written".into(),
                "Make sure nothing else is modifying the target directory".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::ConfigPersist { .. }
            | Self::FilesystemWrite { .. }
            | Self::FilesystemRead { .. }
            | Self::BoilerplateRead { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

//! Unified error handling for opscaff core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for opscaff core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OpscaffError {
    /// Errors from the domain layer (resolution, configuration values).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (persistence, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A template unit failed; `path` is its declared (unsubstituted) path.
    #[error("template '{path}' failed: {source}")]
    Unit {
        path: String,
        #[source]
        source: Box<OpscaffError>,
    },
}

impl OpscaffError {
    /// Wrap an error with the declared path of the unit that produced it.
    pub fn unit(path: impl Into<String>, source: impl Into<OpscaffError>) -> Self {
        Self::Unit {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }

    /// The underlying error with any unit wrappers removed.
    pub fn cause(&self) -> &OpscaffError {
        match self {
            Self::Unit { source, .. } => source.cause(),
            other => other,
        }
    }

    /// Declared path of the failing unit, if this error came from one.
    pub fn unit_path(&self) -> Option<&str> {
        match self {
            Self::Unit { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Unit { source, .. } => source.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Unit { source, .. } => source.category(),
        }
    }

    /// Check if re-running the whole init could succeed without changes.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.cause(),
            Self::Application(ApplicationError::LockPoisoned)
                | Self::Application(ApplicationError::FilesystemWrite { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type OpscaffResult<T> = Result<T, OpscaffError>;

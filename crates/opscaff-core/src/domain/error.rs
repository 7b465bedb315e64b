// ============================================================================
// domain/error.rs - RESOLUTION AND CONFIGURATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside unit-failure wrappers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Resolution Errors
    // ========================================================================
    #[error("cannot resolve path '{path}': variable '{variable}' is not defined")]
    PathResolution { path: String, variable: String },

    #[error("cannot resolve content of '{path}': variable '{variable}' is not defined")]
    ContentResolution { path: String, variable: String },

    #[error("path '{path}' does not name a file")]
    EmptyPath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("path '{path}' escapes the project root")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("unknown project version '{version}'")]
    UnsupportedVersion { version: String },

    #[error("unknown license '{license}'")]
    UnsupportedLicense { license: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathResolution { variable, .. } | Self::ContentResolution { variable, .. }
                if variable == "BOILERPLATE" =>
            {
                vec![
                    "The boilerplate header has not been loaded yet".into(),
                    "Templates that embed it must run after the bootstrap batch".into(),
                ]
            }
            Self::PathResolution { variable, .. } | Self::ContentResolution { variable, .. } => {
                vec![
                    format!("Provide a value for '{}' in the project configuration", variable),
                    "Check the flags passed to `opscaff init`".into(),
                ]
            }
            Self::UnsupportedVersion { version } => vec![
                format!("Project version '{}' is not supported", version),
                "Supported versions: 1, 2".into(),
                "Example: opscaff init --project-version 2 --repo example.com/app".into(),
            ],
            Self::UnsupportedLicense { license } => vec![
                format!("License '{}' is not supported", license),
                "Supported licenses: apache2, none".into(),
            ],
            Self::EmptyPath { path } => vec![
                format!("'{}' resolves to the project root itself", path),
                "Give the path a file name, e.g. hack/boilerplate.go.txt".into(),
            ],
            Self::AbsolutePathNotAllowed { path } | Self::PathEscapesRoot { path } => vec![
                format!("Template path '{}' must stay inside the project", path),
                "Use a path relative to the project root".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathResolution { .. }
            | Self::ContentResolution { .. }
            | Self::EmptyPath { .. }
            | Self::UnsupportedVersion { .. }
            | Self::UnsupportedLicense { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Configuration,
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Internal,
}

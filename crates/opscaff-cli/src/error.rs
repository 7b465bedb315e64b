//! Error handling for the opscaff CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use opscaff_core::error::{ErrorCategory as CoreCategory, OpscaffError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `config get` was asked for a key that does not exist.
    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    /// The configuration file would be overwritten without `--force`.
    #[error("Configuration file already exists at {path}")]
    ConfigExists { path: PathBuf },

    /// An error propagated from `opscaff-core`.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] OpscaffError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Use 'opscaff config init --force' to restore the defaults".into(),
            ],

            Self::UnknownConfigKey { key } => vec![
                format!("'{}' is not a configuration key", key),
                "Use 'opscaff config list' to see every key".into(),
            ],

            Self::ConfigExists { path } => vec![
                format!("'{}' was left untouched", path.display()),
                "Use 'opscaff config init --force' to overwrite it".into(),
            ],

            Self::Core(core_err) => {
                let mut suggestions = core_err.suggestions();
                if core_err.is_retryable() {
                    suggestions.push(
                        "Files written so far were kept; re-run the same command once the cause is fixed"
                            .into(),
                    );
                }
                suggestions
            }

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// The error as a JSON object, for `--output-format json`.
    pub fn to_json(&self) -> serde_json::Value {
        let unit = match self {
            Self::Core(core) => core.unit_path().map(str::to_owned),
            _ => None,
        };
        serde_json::json!({
            "error": self.to_string(),
            "category": self.category().as_str(),
            "exit_code": self.exit_code(),
            "unit": unit,
            "suggestions": self.suggestions(),
        })
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserError => "user",
            Self::NotFound => "not_found",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use opscaff_core::application::ApplicationError;
    use opscaff_core::domain::DomainError;

    fn unsupported_version() -> CliError {
        CliError::Core(
            DomainError::UnsupportedVersion {
                version: "3".into(),
            }
            .into(),
        )
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn core_suggestions_are_forwarded() {
        assert!(
            unsupported_version()
                .suggestions()
                .iter()
                .any(|s| s.contains("Supported versions"))
        );
    }

    #[test]
    fn retryable_core_errors_mention_rerun() {
        let err = CliError::Core(OpscaffError::unit(
            "Makefile",
            ApplicationError::FilesystemWrite {
                path: PathBuf::from("/p/Makefile"),
                reason: "disk full".into(),
            },
        ));
        assert!(err.suggestions().iter().any(|s| s.contains("re-run")));
    }

    #[test]
    fn config_exists_suggests_force() {
        let err = CliError::ConfigExists {
            path: PathBuf::from("/tmp/config.toml"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let conflict = CliError::Core(OpscaffError::unit(
            "go.mod",
            ApplicationError::AlreadyExists {
                path: PathBuf::from("/p/go.mod"),
            },
        ));
        assert_eq!(conflict.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::UnknownConfigKey { key: "x".into() }.exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(unsupported_version().exit_code(), 4);
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = unsupported_version().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_chain() {
        let err = CliError::Core(OpscaffError::unit(
            "main.go",
            DomainError::ContentResolution {
                path: "main.go".into(),
                variable: "BOILERPLATE".into(),
            },
        ));
        let s = err.format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn json_names_the_failing_unit() {
        let err = CliError::Core(OpscaffError::unit(
            "go.mod",
            ApplicationError::AlreadyExists {
                path: PathBuf::from("/p/go.mod"),
            },
        ));
        let json = err.to_json();
        assert_eq!(json["unit"], "go.mod");
        assert_eq!(json["category"], "user");
        assert_eq!(json["exit_code"], 2);
    }
}

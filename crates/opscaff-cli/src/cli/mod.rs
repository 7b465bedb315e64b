//! CLI argument definitions using the clap derive API.
//!
//! Argument names, help text and value enums live here. No business logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "opscaff",
    bin_name = "opscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Kubernetes operator projects",
    long_about = "opscaff writes the initial file tree of a Go operator project: \
                  license header, Makefile, Dockerfile, manager entry point and \
                  kustomize manifests for RBAC, webhooks and metrics.",
    after_help = "EXAMPLES:\n\
        \x20 opscaff init --repo example.com/guestbook --domain my.domain\n\
        \x20 opscaff init --dir ./guestbook --repo example.com/guestbook --project-version 1\n\
        \x20 opscaff config list\n\
        \x20 opscaff completions bash > /usr/share/bash-completion/completions/opscaff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the initial scaffold of an operator project.
    #[command(
        about = "Initialise a new operator project",
        after_help = "EXAMPLES:\n\
            \x20 opscaff init --repo example.com/guestbook\n\
            \x20 opscaff init --repo example.com/guestbook --license none --owner \"The Authors\"\n\
            \x20 opscaff init --repo example.com/guestbook --output-format json"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 opscaff completions bash > ~/.local/share/bash-completion/completions/opscaff\n\
            \x20 opscaff completions zsh  > ~/.zfunc/_opscaff\n\
            \x20 opscaff completions fish > ~/.config/fish/completions/opscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the opscaff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 opscaff config get defaults.domain\n\
            \x20 opscaff config list\n\
            \x20 opscaff config init --force"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `opscaff init`.
///
/// Every optional flag falls back to the matching `defaults.*` entry of
/// the loaded configuration.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to scaffold into.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Target directory (created if missing)"
    )]
    pub dir: PathBuf,

    /// Go module path of the project.
    #[arg(
        long = "repo",
        value_name = "REPO",
        help = "Go module path, e.g. example.com/guestbook"
    )]
    pub repo: String,

    #[arg(long = "domain", value_name = "DOMAIN", help = "API group domain")]
    pub domain: Option<String>,

    #[arg(
        long = "project-version",
        value_name = "VERSION",
        help = "Project layout version (1 or 2)"
    )]
    pub project_version: Option<String>,

    #[arg(
        long = "license",
        value_enum,
        value_name = "LICENSE",
        help = "License for the boilerplate header"
    )]
    pub license: Option<LicenseArg>,

    #[arg(
        long = "owner",
        value_name = "OWNER",
        help = "Copyright owner for the boilerplate header"
    )]
    pub owner: Option<String>,

    #[arg(long = "image", value_name = "IMAGE", help = "Manager container image")]
    pub image: Option<String>,

    #[arg(
        long = "controller-runtime-version",
        value_name = "VERSION",
        help = "controller-runtime version pinned in go.mod"
    )]
    pub controller_runtime_version: Option<String>,

    #[arg(
        long = "controller-tools-version",
        value_name = "VERSION",
        help = "controller-gen version pinned in the Makefile"
    )]
    pub controller_tools_version: Option<String>,

    #[arg(
        long = "boilerplate-path",
        value_name = "PATH",
        help = "Where to write the license header, relative to DIR"
    )]
    pub boilerplate_path: Option<String>,
}

/// License choices accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LicenseArg {
    Apache2,
    None,
}

impl From<LicenseArg> for opscaff_core::domain::License {
    fn from(arg: LicenseArg) -> Self {
        match arg {
            LicenseArg::Apache2 => Self::Apache2,
            LicenseArg::None => Self::None,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `opscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `opscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.domain`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write the built-in defaults to the configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_with_defaults() {
        let cli = Cli::parse_from(["opscaff", "init", "--repo", "example.com/app"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.repo, "example.com/app");
        assert_eq!(args.dir, PathBuf::from("."));
        assert!(args.project_version.is_none());
        assert!(args.license.is_none());
    }

    #[test]
    fn parse_init_with_every_flag() {
        let cli = Cli::parse_from([
            "opscaff",
            "init",
            "--dir",
            "out",
            "--repo",
            "example.com/app",
            "--domain",
            "example.org",
            "--project-version",
            "1",
            "--license",
            "none",
            "--owner",
            "Me",
            "--image",
            "app:dev",
            "--controller-runtime-version",
            "v0.5.0",
            "--controller-tools-version",
            "v0.2.5",
            "--boilerplate-path",
            "hack/header.txt",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.dir, PathBuf::from("out"));
        assert_eq!(args.license, Some(LicenseArg::None));
        assert_eq!(args.controller_tools_version.as_deref(), Some("v0.2.5"));
        assert_eq!(args.boilerplate_path.as_deref(), Some("hack/header.txt"));
    }

    #[test]
    fn init_requires_repo() {
        assert!(Cli::try_parse_from(["opscaff", "init"]).is_err());
    }

    #[test]
    fn license_arg_converts() {
        use opscaff_core::domain::License;
        assert_eq!(License::from(LicenseArg::Apache2), License::Apache2);
        assert_eq!(License::from(LicenseArg::None), License::None);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["opscaff", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}

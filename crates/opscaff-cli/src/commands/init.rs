//! `opscaff init` - write the initial scaffold of an operator project.

use chrono::Local;
use tracing::{debug, instrument};

use opscaff_adapters::{BuiltinCatalog, LocalFilesystem, TomlConfigStore};
use opscaff_core::prelude::*;

use crate::{
    cli::{InitArgs, OutputFormat},
    config::{AppConfig, InitDefaults},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run the init scaffolder against `args.dir`.
#[instrument(skip_all, fields(dir = %args.dir.display(), repo = %args.repo))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = project_config(&args, &config.defaults)?;
    let boilerplate_path = args
        .boilerplate_path
        .clone()
        .unwrap_or_else(|| config.defaults.boilerplate_path.clone());
    debug!(?project, %boilerplate_path, "resolved project configuration");

    let scaffolder = InitScaffolder::builder()
        .config(project)
        .catalog(Box::new(BuiltinCatalog::new()))
        .filesystem(Box::new(LocalFilesystem::new()))
        .store(Box::new(TomlConfigStore::new(&args.dir)))
        .root(&args.dir)
        .boilerplate_path(boilerplate_path)
        .year(Local::now().format("%Y").to_string())
        .build()?;

    let json = output.format() == OutputFormat::Json;
    if !json {
        output.info("Writing scaffold for you to edit...")?;
    }

    let report = scaffolder.scaffold()?;

    if json {
        output.json(&report)?;
    } else {
        print_summary(&output, &args, &report)?;
    }
    Ok(())
}

/// Merge flags over configured defaults. Empty values count as unset.
fn project_config(args: &InitArgs, defaults: &InitDefaults) -> CliResult<ProjectConfig> {
    let repo = args.repo.trim();
    if repo.is_empty() {
        return Err(CliError::InvalidInput {
            message: "--repo must not be empty".into(),
        });
    }

    let pick = |flag: &Option<String>, fallback: &str| -> String {
        flag.as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };

    let license = args.license.map(License::from).unwrap_or(defaults.license);
    let mut project = ProjectConfig::new(
        pick(&args.project_version, &defaults.project_version),
        repo,
        pick(&args.image, &defaults.image),
    )
    .with_domain(pick(&args.domain, &defaults.domain))
    .with_license(license)
    .with_owner(pick(&args.owner, &defaults.owner));

    let runtime = pick(
        &args.controller_runtime_version,
        &defaults.controller_runtime_version,
    );
    let tools = pick(
        &args.controller_tools_version,
        &defaults.controller_tools_version,
    );
    // v1 projects vendor dependencies through Gopkg.toml and carry no pins.
    if !project.is_v1() && !runtime.is_empty() && !tools.is_empty() {
        project = project.with_dependencies(runtime, tools);
    }
    Ok(project)
}

fn print_summary(output: &OutputManager, args: &InitArgs, report: &InitReport) -> CliResult<()> {
    let written = report.written().count();
    let skipped = report.skipped().count();

    output.success(&format!(
        "Scaffolded a version {} project in {}",
        report.version,
        args.dir.display()
    ))?;
    for path in report.written() {
        output.file_line('+', &path.display().to_string(), "")?;
    }
    for path in report.skipped() {
        output.file_line('=', &path.display().to_string(), "  (kept existing)")?;
    }
    output.print(&format!("{written} written, {skipped} kept"))?;
    output.print("Next: run `make` to build the manager")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(repo: &str) -> InitArgs {
        InitArgs {
            dir: PathBuf::from("."),
            repo: repo.into(),
            domain: None,
            project_version: None,
            license: None,
            owner: None,
            image: None,
            controller_runtime_version: None,
            controller_tools_version: None,
            boilerplate_path: None,
        }
    }

    #[test]
    fn defaults_fill_missing_flags() {
        let project = project_config(&args("example.com/app"), &InitDefaults::default()).unwrap();
        assert_eq!(project.version, "2");
        assert_eq!(project.domain, "my.domain");
        assert_eq!(project.image, "controller:latest");
        assert_eq!(project.license, License::Apache2);
        assert_eq!(
            project.dependencies,
            Some(DependencyPins {
                controller_runtime: "v0.4.0".into(),
                controller_tools: "v0.2.4".into(),
            })
        );
    }

    #[test]
    fn flags_win_over_defaults() {
        let mut a = args("example.com/app");
        a.domain = Some("example.org".into());
        a.license = Some(crate::cli::LicenseArg::None);
        a.owner = Some("The Authors".into());
        a.controller_runtime_version = Some("v0.5.0".into());

        let project = project_config(&a, &InitDefaults::default()).unwrap();
        assert_eq!(project.domain, "example.org");
        assert_eq!(project.license, License::None);
        assert_eq!(project.owner, "The Authors");
        assert_eq!(
            project.dependencies.map(|d| d.controller_runtime),
            Some("v0.5.0".to_string())
        );
    }

    #[test]
    fn empty_flag_falls_back_to_default() {
        let mut a = args("example.com/app");
        a.image = Some("  ".into());
        let project = project_config(&a, &InitDefaults::default()).unwrap();
        assert_eq!(project.image, "controller:latest");
    }

    #[test]
    fn v1_carries_no_pins() {
        let mut a = args("example.com/app");
        a.project_version = Some("1".into());
        let project = project_config(&a, &InitDefaults::default()).unwrap();
        assert!(project.dependencies.is_none());
    }

    #[test]
    fn empty_pin_drops_both() {
        let defaults = InitDefaults {
            controller_tools_version: String::new(),
            ..InitDefaults::default()
        };
        let project = project_config(&args("example.com/app"), &defaults).unwrap();
        assert!(project.dependencies.is_none());
    }

    #[test]
    fn empty_repo_is_rejected() {
        assert!(matches!(
            project_config(&args(" "), &InitDefaults::default()),
            Err(CliError::InvalidInput { .. })
        ));
    }
}

//! `opscaff config` - inspect and initialise the configuration file.

use std::path::Path;

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = global.config.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.format() == OutputFormat::Json {
                output.json(&value)?;
            } else {
                output.print(&format!("{key} = {}", display_value(&value)))?;
            }
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.print(&to_toml(&config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            write_defaults(&path, force)?;
            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `defaults.domain`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    key.split('.')
        .try_fold(&tree, |node, segment| node.get(segment))
        .filter(|value| !value.is_object())
        .cloned()
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{s:?}"),
        other => other.to_string(),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    config.to_toml().map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: Some(e.into()),
    })
}

fn write_defaults(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let toml = to_toml(&AppConfig::default())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

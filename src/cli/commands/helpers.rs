// src/cli/commands/helpers.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::azure::{AzError, AzureCli, DeploymentOutputs};
use crate::cli::config::Config;

/// Load config or error with helpful message
pub fn require_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!(
            "No {} found. Run 'cogdeploy init --subscription <id> --resource-group <name>' first, or pass --config <path>.",
            path.display()
        );
    }
    Config::load_from(path)
}

/// Azure CLI wrapper configured from the config file
pub fn azure_cli(config: &Config) -> AzureCli {
    AzureCli::new().with_program(config.az_command.as_str())
}

/// Resolve a relative path from the config file against the config file's
/// directory
pub fn resolve_relative_to(config_path: &Path, path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Keep hard errors, downgrade command failures to "no result".
///
/// Invalid input aborts the run; a failed `az` call is logged and the step
/// reports nothing.
pub fn soften<T>(step: &str, result: Result<T, AzError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_command_failure() => {
            tracing::error!(step, error = %e, "command failed");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("{} failed", step)),
    }
}

/// Print deployment outputs as pretty JSON on stdout (`null` when absent)
pub fn print_outputs(outputs: Option<&DeploymentOutputs>) -> Result<()> {
    let rendered = match outputs {
        Some(outputs) => serde_json::to_string_pretty(outputs)?,
        None => "null".to_string(),
    };
    println!("{}", rendered);
    Ok(())
}

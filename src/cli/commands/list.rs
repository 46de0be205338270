// src/cli/commands/list.rs
use anyhow::Result;
use std::path::Path;

use super::helpers::{azure_cli, require_config, soften};
use crate::azure::{AzureCli, CommandRunner};
use crate::cli::config::Config;

/// Set the subscription and list the resource group's deployment names.
///
/// `None` when the `az` call fails or the response is not a list.
pub fn deployment_names<R: CommandRunner>(
    az: &AzureCli<R>,
    config: &Config,
) -> Result<Option<Vec<String>>> {
    soften(
        "set subscription",
        az.account().set_subscription(&config.subscription_id),
    )?;

    eprintln!("==> Deployments in {}", config.resource_group);
    let names = soften(
        "list deployments",
        az.deployment().list(&config.resource_group),
    )?
    .flatten();
    Ok(names)
}

pub fn execute_list(config_path: &Path) -> Result<()> {
    let config = require_config(config_path)?;

    let az = azure_cli(&config);
    let names = deployment_names(&az, &config)?.unwrap_or_default();

    if names.is_empty() {
        eprintln!("    (none)");
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

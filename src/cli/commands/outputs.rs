// src/cli/commands/outputs.rs
use anyhow::Result;
use std::path::Path;

use super::helpers::{azure_cli, print_outputs, require_config, soften};
use crate::azure::{AzureCli, CommandRunner, DeploymentOutputs};
use crate::cli::config::Config;
use crate::cli::OutputsArgs;

/// Set the subscription and read the outputs of `deployment_name`.
///
/// Failed `az` calls are logged and the result is `None`.
pub fn deployment_outputs<R: CommandRunner>(
    az: &AzureCli<R>,
    config: &Config,
    deployment_name: &str,
) -> Result<Option<DeploymentOutputs>> {
    soften(
        "set subscription",
        az.account().set_subscription(&config.subscription_id),
    )?;

    eprintln!(
        "==> Outputs of deployment '{}' in {}",
        deployment_name, config.resource_group
    );
    let outputs = soften(
        "get deployment outputs",
        az.deployment()
            .outputs(&config.resource_group, deployment_name),
    )?
    .flatten();

    if outputs.is_none() {
        eprintln!("    Deployment reports no outputs");
    }
    Ok(outputs)
}

pub fn execute_outputs(config_path: &Path, args: OutputsArgs) -> Result<()> {
    let config = require_config(config_path)?;
    let deployment_name = args
        .deployment_name
        .unwrap_or_else(|| config.deployment_name.clone());

    let az = azure_cli(&config);
    let outputs = deployment_outputs(&az, &config, &deployment_name)?;
    print_outputs(outputs.as_ref())
}

// src/cli/commands/provision.rs
use anyhow::Result;
use std::path::Path;

use super::helpers::{azure_cli, print_outputs, require_config, resolve_relative_to, soften};
use crate::azure::{AzureCli, CommandRunner, DeploymentOutputs};
use crate::cli::config::Config;
use crate::cli::ProvisionArgs;
use crate::deployment::CognitiveServiceDeployment;

/// What a provisioning run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionReport {
    pub group_created: bool,
    pub outputs: Option<DeploymentOutputs>,
}

/// Set the subscription, ensure the resource group, then deploy the
/// cognitive service (or read the existing deployment's outputs when
/// `config.deploy` is false).
///
/// Invalid input aborts the run. Failed `az` calls are logged and reported
/// as `false` / no outputs, and the remaining steps still run.
pub fn provision<R: CommandRunner>(az: &AzureCli<R>, config: &Config) -> Result<ProvisionReport> {
    eprintln!("==> Setting current subscription: {}", config.subscription_id);
    soften(
        "set subscription",
        az.account().set_subscription(&config.subscription_id),
    )?;

    let group_created = soften(
        "create resource group",
        az.group().create(&config.resource_group, &config.region),
    )?
    .unwrap_or(false);
    eprintln!(
        "    Create resource group : {} = {}",
        config.resource_group, group_created
    );

    let outputs = if config.deploy {
        eprintln!(
            "==> Deploying {} '{}' ({})...",
            config.service_kind, config.service_name, config.sku
        );
        let deployment = CognitiveServiceDeployment::with_sku(
            config.service_kind,
            &config.service_name,
            &config.region,
            &config.sku,
        );
        soften(
            "create deployment",
            az.deployment().create(
                &config.resource_group,
                &config.deployment_name,
                &config.template_file,
                Some(deployment.parameters()),
            ),
        )?
    } else {
        eprintln!(
            "==> Getting outputs of deployment '{}'",
            config.deployment_name
        );
        soften(
            "get deployment outputs",
            az.deployment()
                .outputs(&config.resource_group, &config.deployment_name),
        )?
        .flatten()
    };

    Ok(ProvisionReport {
        group_created,
        outputs,
    })
}

pub fn execute_provision(config_path: &Path, args: ProvisionArgs) -> Result<()> {
    let mut config = require_config(config_path)?;
    if let Some(kind) = args.kind {
        config.service_kind = kind;
    }
    if let Some(sku) = args.sku {
        config.sku = sku;
    }
    if args.outputs_only {
        config.deploy = false;
    }
    config.template_file = resolve_relative_to(config_path, &config.template_file);

    let az = azure_cli(&config);
    let report = provision(&az, &config)?;

    eprintln!("Deployment Outputs:");
    print_outputs(report.outputs.as_ref())
}

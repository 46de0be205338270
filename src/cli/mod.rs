pub mod commands;
pub mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::deployment::CognitiveService;

#[derive(Parser)]
#[command(name = "cogdeploy")]
#[command(about = "Provision Azure Cognitive Services with the Azure CLI")]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "COGDEPLOY_CONFIG", default_value = config::CONFIG_FILENAME)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file for a subscription and resource group
    Init(InitArgs),
    /// Set the subscription, ensure the resource group, then deploy
    Provision(ProvisionArgs),
    /// Show the outputs of an existing deployment
    Outputs(OutputsArgs),
    /// List deployments in the resource group
    List,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Azure subscription ID
    #[arg(long, env = "AZURE_SUBSCRIPTION_ID")]
    pub subscription: String,

    /// Resource group to deploy into
    #[arg(long)]
    pub resource_group: String,

    /// Azure region, e.g. eastus
    #[arg(long)]
    pub region: Option<String>,

    /// Cognitive service to deploy
    #[arg(long, value_enum)]
    pub kind: Option<CognitiveService>,

    /// Name of the cognitive service resource
    #[arg(long)]
    pub service_name: Option<String>,

    /// Path to the ARM template
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Deployment name used when creating and reading outputs
    #[arg(long)]
    pub deployment_name: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct ProvisionArgs {
    /// Override the configured cognitive service
    #[arg(long, value_enum)]
    pub kind: Option<CognitiveService>,

    /// Override the configured SKU
    #[arg(long)]
    pub sku: Option<String>,

    /// Skip the deployment and only read the existing deployment's outputs
    #[arg(long)]
    pub outputs_only: bool,
}

#[derive(clap::Args)]
pub struct OutputsArgs {
    /// Deployment to read (defaults to the configured deployment name)
    #[arg(long)]
    pub deployment_name: Option<String>,
}

/// Initialize tracing subscriber writing to stderr.
/// Uses RUST_LOG env var for filtering (defaults to info).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(true))
        .with(filter)
        .init();
}

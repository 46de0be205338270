use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::config::Config;
use crate::cli::InitArgs;

pub fn execute_init(config_path: &Path, args: InitArgs) -> Result<()> {
    // Check if config already exists
    if config_path.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    if args.subscription.is_empty() {
        bail!("--subscription must not be empty");
    }
    if args.resource_group.is_empty() {
        bail!("--resource-group must not be empty");
    }

    let mut config = Config::new(&args.subscription, &args.resource_group);
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(kind) = args.kind {
        config.service_kind = kind;
    }
    if let Some(service_name) = args.service_name {
        config.service_name = service_name;
    }
    if let Some(template_file) = args.template_file {
        config.template_file = template_file;
    }
    if let Some(deployment_name) = args.deployment_name {
        config.deployment_name = deployment_name;
    }

    config.save_to(config_path)?;

    eprintln!("Created {}", config_path.display());
    eprintln!("  subscription: {}", config.subscription_id);
    eprintln!("  resource group: {} ({})", config.resource_group, config.region);
    eprintln!("  service: {} '{}'", config.service_kind, config.service_name);
    eprintln!("  template: {}", config.template_file.display());
    eprintln!();
    eprintln!("Next: cogdeploy provision");

    Ok(())
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::azure::DEFAULT_AZ_COMMAND;
use crate::deployment::{CognitiveService, DEFAULT_SKU};

pub const CONFIG_FILENAME: &str = ".cogdeploy.toml";

pub const DEFAULT_REGION: &str = "eastus";
pub const DEFAULT_SERVICE_NAME: &str = "test_comp_vis";
pub const DEFAULT_TEMPLATE_FILE: &str = "./arm_templates/cog-services-template.json";
pub const DEFAULT_DEPLOYMENT_NAME: &str = "comp_vis_deployment";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub subscription_id: String,
    pub resource_group: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_service_kind")]
    pub service_kind: CognitiveService,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_sku")]
    pub sku: String,
    #[serde(default = "default_template_file")]
    pub template_file: PathBuf,
    #[serde(default = "default_deployment_name")]
    pub deployment_name: String,
    /// Deploy the service; when false only fetch the existing deployment's outputs
    #[serde(default = "default_deploy")]
    pub deploy: bool,
    #[serde(default = "default_az_command")]
    pub az_command: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_service_kind() -> CognitiveService {
    CognitiveService::ComputerVision
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_sku() -> String {
    DEFAULT_SKU.to_string()
}

fn default_template_file() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_FILE)
}

fn default_deployment_name() -> String {
    DEFAULT_DEPLOYMENT_NAME.to_string()
}

fn default_deploy() -> bool {
    true
}

fn default_az_command() -> String {
    DEFAULT_AZ_COMMAND.to_string()
}

impl Config {
    /// Config with the given identity and defaults everywhere else
    pub fn new(subscription_id: &str, resource_group: &str) -> Self {
        Self {
            subscription_id: subscription_id.to_string(),
            resource_group: resource_group.to_string(),
            region: default_region(),
            service_kind: default_service_kind(),
            service_name: default_service_name(),
            sku: default_sku(),
            template_file: default_template_file(),
            deployment_name: default_deployment_name(),
            deploy: default_deploy(),
            az_command: default_az_command(),
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        load_config_from_path(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        Ok(())
    }
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config in {}", path.as_ref().display()))?;
    Ok(config)
}

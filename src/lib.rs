// src/lib.rs
pub mod azure;
pub mod cli;
pub mod deployment;

pub use azure::{AzError, AzureCli, CommandError, CommandRunner, DeploymentOutputs, SystemRunner};
pub use deployment::{CognitiveService, CognitiveServiceDeployment, DeploymentParameters};

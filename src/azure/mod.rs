// src/azure/mod.rs
//! Azure CLI wrapper.
//!
//! [`AzureCli`] owns the program name and a [`CommandRunner`]; the service
//! accessors ([`AzureCli::account`], [`AzureCli::group`],
//! [`AzureCli::deployment`]) borrow it and build argument vectors for the
//! individual `az` subcommands.

mod account;
mod deployment;
mod group;
pub mod json;
pub mod runner;

#[cfg(test)]
pub(crate) mod fake;

pub use account::AccountCli;
pub use deployment::DeploymentCli;
pub use group::GroupCli;
pub use json::{get_path, outputs_from_response, DeploymentOutputs};
pub use runner::{CommandError, CommandRunner, SystemRunner};

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_AZ_COMMAND: &str = "az";

#[derive(Debug, Error)]
pub enum AzError {
    #[error("{operation}: {argument} must not be empty")]
    EmptyArgument {
        operation: &'static str,
        argument: &'static str,
    },

    #[error("{operation}: template file not found: {}", .path.display())]
    TemplateNotFound {
        operation: &'static str,
        path: PathBuf,
    },

    #[error("failed to write deployment parameters to {}: {source}", .path.display())]
    ParamsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl AzError {
    /// True when the error came from the external command rather than from
    /// invalid input or local file handling.
    pub fn is_command_failure(&self) -> bool {
        matches!(self, AzError::Command(_))
    }
}

pub(crate) fn require_non_empty(
    operation: &'static str,
    argument: &'static str,
    value: &str,
) -> Result<(), AzError> {
    if value.is_empty() {
        return Err(AzError::EmptyArgument {
            operation,
            argument,
        });
    }
    Ok(())
}

pub(crate) fn to_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Core Azure CLI wrapper
pub struct AzureCli<R: CommandRunner = SystemRunner> {
    runner: R,
    program: String,
    params_dir: PathBuf,
}

impl AzureCli {
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for AzureCli {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> AzureCli<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            program: DEFAULT_AZ_COMMAND.to_string(),
            params_dir: PathBuf::from("."),
        }
    }

    /// Use a different executable in place of `az`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Directory that transient `<deployment>_params.json` files are written to
    pub fn with_params_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.params_dir = dir.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn params_dir(&self) -> &Path {
        &self.params_dir
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    // Service accessors
    pub fn account(&self) -> AccountCli<'_, R> {
        AccountCli { az: self }
    }
    pub fn group(&self) -> GroupCli<'_, R> {
        GroupCli { az: self }
    }
    pub fn deployment(&self) -> DeploymentCli<'_, R> {
        DeploymentCli { az: self }
    }

    pub(crate) fn run(&self, args: &[String]) -> Result<String, CommandError> {
        runner::run(&self.runner, &self.program, args)
    }

    pub(crate) fn run_json(&self, args: &[String]) -> Result<Value, CommandError> {
        runner::run_json(&self.runner, &self.program, args)
    }
}

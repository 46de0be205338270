// src/azure/runner.rs
use serde_json::Value;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Failure of a single external command invocation
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to execute {program}: {source}. Is it installed and on PATH?")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} returned output that is not valid JSON: {source}")]
    InvalidJson {
        program: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Spawns an external program and hands back its stdout.
///
/// Implementations block until the process exits. There is no timeout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CommandError::Failed {
                program: program.to_string(),
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Run a command and return its raw stdout
pub fn run<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    args: &[String],
) -> Result<String, CommandError> {
    tracing::debug!(program, args = ?args, "running command");
    runner.run(program, args).inspect_err(|e| {
        tracing::warn!(program, error = %e, "command failed");
    })
}

/// Run a command and parse its stdout as JSON
pub fn run_json<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    args: &[String],
) -> Result<Value, CommandError> {
    let stdout = run(runner, program, args)?;
    serde_json::from_str(&stdout).map_err(|source| {
        tracing::warn!(program, error = %source, "command output is not JSON");
        CommandError::InvalidJson {
            program: program.to_string(),
            source,
        }
    })
}

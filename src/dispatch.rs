use std::process::Output;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::GitConfig;
use crate::git::{CommandRunner, SystemRunner};
use crate::request::{InvocationRequest, RequestError};
use crate::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Normalized outcome of one external call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub status: Status,
    pub output: String,
}

impl OperationResult {
    pub fn success(output: impl AsRef<str>) -> Self {
        Self {
            status: Status::Success,
            output: output.as_ref().trim().to_string(),
        }
    }

    pub fn error(output: impl AsRef<str>) -> Self {
        Self {
            status: Status::Error,
            output: output.as_ref().trim().to_string(),
        }
    }

    /// Exit 0 keeps stdout, anything else keeps stderr.
    pub fn from_output(output: &Output) -> Self {
        if output.status.success() {
            Self::success(String::from_utf8_lossy(&output.stdout))
        } else {
            Self::error(String::from_utf8_lossy(&output.stderr))
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Turns requests into exactly one external call each.
pub struct Dispatcher<R = SystemRunner> {
    config: GitConfig,
    runner: R,
}

impl Dispatcher<SystemRunner> {
    pub fn new(config: GitConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn with_runner(config: GitConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Validate and run `request`. Validation failures return `Err` before
    /// anything is spawned; every outcome of the external call, including a
    /// failure to start it, comes back as an `OperationResult`.
    pub fn execute(&self, request: &InvocationRequest) -> Result<OperationResult, RequestError> {
        let args = routes::plan(request)?;
        debug!(
            command = %request.command,
            program = %self.config.program,
            cwd = %self.config.repo_path.display(),
            ?args,
            "running external tool"
        );

        let result = match self.runner.run(&self.config.program, &args, &self.config.repo_path) {
            Ok(output) => {
                debug!(status = ?output.status.code(), "external tool exited");
                OperationResult::from_output(&output)
            }
            Err(e) => {
                warn!(program = %self.config.program, error = %e, "failed to start external tool");
                OperationResult::error(format!("failed to run `{}`: {}", self.config.program, e))
            }
        };
        Ok(result)
    }
}

//! Step runners
//!
//! [`StepRunner`] is the seam between the gate and the external tools.
//! [`ProcessRunner`] runs the configured command as a child process.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, error, info, warn};

use super::Step;
use super::exit_policy::{ExitCodePolicy, PylintCategory};
use super::verdict::StepResult;
use crate::config::StepConfig;

/// Runs one step to completion and reports whether it passed
pub trait StepRunner {
    fn run(&mut self, step: Step, config: &StepConfig) -> StepResult;
}

/// Runs steps as blocking child processes inside the workspace
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    workspace: PathBuf,
}

impl ProcessRunner {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }
}

impl StepRunner for ProcessRunner {
    fn run(&mut self, step: Step, config: &StepConfig) -> StepResult {
        debug!(
            step = %step,
            command = %config.command_line(),
            workspace = %self.workspace.display(),
            "Starting step"
        );

        // stdio is inherited so the tool's report reaches the CI log unchanged
        let status = match Command::new(&config.program)
            .args(&config.args)
            .current_dir(&self.workspace)
            .status()
        {
            Ok(status) => status,
            Err(err) => {
                error!(step = %step, program = %config.program, error = %err, "Failed to start tool");
                return StepResult::Failed;
            }
        };

        let code = status.code();
        match code {
            None => warn!(step = %step, "Tool was terminated by a signal"),
            Some(code) if config.exit_codes == ExitCodePolicy::Pylint && code != 0 => {
                let categories: Vec<String> = PylintCategory::decode(code)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                debug!(step = %step, code, categories = %categories.join(","), "Decoded pylint status");
            }
            Some(_) => {}
        }

        let result = StepResult::from_passed(config.passes(code));
        info!(step = %step, code = ?code, passed = result.passed(), "Step finished");
        result
    }
}

//! The lint-then-test gate
//!
//! Runs the lint step, then the test step, and folds both results into a
//! [`Verdict`]. The test step always runs, and never before the lint result
//! has been captured. Tool failures never abort the gate; only writing the
//! progress lines can fail.

pub mod exit_policy;
pub mod runner;
pub mod verdict;

use std::fmt;
use std::io::Write;

use tracing::info;

use crate::config::GateConfig;
use crate::error::Result;

pub use runner::{ProcessRunner, StepRunner};
pub use verdict::{StepResult, Verdict};

/// The two steps of the gate, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Lint,
    Test,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Self::Lint => "lint",
            Self::Test => "test",
        }
    }

    /// Line printed before the step starts
    pub fn progress_message(self) -> &'static str {
        match self {
            Self::Lint => "Linting code...",
            Self::Test => "Running tests...",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run both steps and print the verdict to `out`
pub fn run<R, W>(runner: &mut R, config: &GateConfig, out: &mut W) -> Result<Verdict>
where
    R: StepRunner + ?Sized,
    W: Write + ?Sized,
{
    let lint = run_step(runner, Step::Lint, config, out)?;
    let test = run_step(runner, Step::Test, config, out)?;

    let verdict = Verdict::from_results(lint, test);
    info!(lint = ?lint, test = ?test, verdict = ?verdict, "Gate finished");

    writeln!(out, "{}", verdict.render())?;
    out.flush()?;

    Ok(verdict)
}

fn run_step<R, W>(
    runner: &mut R,
    step: Step,
    config: &GateConfig,
    out: &mut W,
) -> Result<StepResult>
where
    R: StepRunner + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", step.progress_message())?;
    // The child writes to the same stdout; our line has to land first
    out.flush()?;

    Ok(runner.run(step, config.step(step)))
}

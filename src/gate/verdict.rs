//! Step results and the aggregated verdict

use console::Style;

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Passed,
    Failed,
}

impl StepResult {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Self::Passed } else { Self::Failed }
    }

    pub fn passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Aggregated outcome of the lint and test steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    TestsFailed,
    LintFailed,
    BothFailed,
}

impl Verdict {
    pub fn from_results(lint: StepResult, test: StepResult) -> Self {
        match (lint, test) {
            (StepResult::Passed, StepResult::Passed) => Self::Success,
            (StepResult::Passed, StepResult::Failed) => Self::TestsFailed,
            (StepResult::Failed, StepResult::Passed) => Self::LintFailed,
            (StepResult::Failed, StepResult::Failed) => Self::BothFailed,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "Success!",
            Self::TestsFailed => "Linting passed, but tests failed.",
            Self::LintFailed => "Tests passed, but linting failed.",
            Self::BothFailed => "Both tests and linting failed :c",
        }
    }

    /// Process exit code reported to the caller
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::TestsFailed | Self::LintFailed => 1,
            Self::BothFailed => 2,
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().bold().green(),
            Self::TestsFailed | Self::LintFailed => Style::new().bold().yellow(),
            Self::BothFailed => Style::new().bold().red(),
        }
    }

    /// Message styled for the terminal; plain when stdout is not a tty
    pub fn render(self) -> String {
        self.style().apply_to(self.message()).to_string()
    }
}

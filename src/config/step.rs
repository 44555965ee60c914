//! Per-step command configuration

use serde::Deserialize;

use crate::error::{GateError, Result};
use crate::gate::Step;
use crate::gate::exit_policy::{ExitCodePolicy, PylintCategory};

/// Command run for one step, and how its exit status is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    /// Executable, looked up on PATH
    pub program: String,

    pub args: Vec<String>,

    pub exit_codes: ExitCodePolicy,

    /// Extra pylint categories that fail the step (pylint policy only)
    pub fail_on: Vec<PylintCategory>,
}

impl StepConfig {
    /// Pylint over the package and its tests, refactor, convention and fixme
    /// findings disabled
    pub fn default_lint() -> Self {
        Self {
            program: "pylint".to_string(),
            args: vec![
                "--disable=R,C,fixme".to_string(),
                "psclient".to_string(),
                "tests".to_string(),
            ],
            exit_codes: ExitCodePolicy::NonZero,
            fail_on: Vec::new(),
        }
    }

    /// Pytest over the test directory
    pub fn default_test() -> Self {
        Self {
            program: "pytest".to_string(),
            args: vec!["tests/".to_string()],
            exit_codes: ExitCodePolicy::NonZero,
            fail_on: Vec::new(),
        }
    }

    pub fn default_for(step: Step) -> Self {
        match step {
            Step::Lint => Self::default_lint(),
            Step::Test => Self::default_test(),
        }
    }

    /// Whether a tool exiting with `code` passed this step
    pub fn passes(&self, code: Option<i32>) -> bool {
        self.exit_codes.passes(code, &self.fail_on)
    }

    /// Command line for log output
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn validate(&self, step: Step) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(GateError::ConfigInvalid {
                message: format!("{step}.program must not be empty"),
            });
        }

        if !self.fail_on.is_empty() && self.exit_codes != ExitCodePolicy::Pylint {
            return Err(GateError::ConfigInvalid {
                message: format!(
                    "{step}.fail_on requires exit_codes: pylint (got exit_codes: {})",
                    self.exit_codes
                ),
            });
        }

        Ok(())
    }
}

/// Step section as written in the file; unset fields keep the defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct StepOverrides {
    program: Option<String>,
    args: Option<Vec<String>>,
    exit_codes: Option<ExitCodePolicy>,
    fail_on: Option<Vec<PylintCategory>>,
}

impl StepOverrides {
    pub(super) fn apply(self, base: StepConfig) -> StepConfig {
        StepConfig {
            program: self.program.unwrap_or(base.program),
            args: self.args.unwrap_or(base.args),
            exit_codes: self.exit_codes.unwrap_or(base.exit_codes),
            fail_on: self.fail_on.unwrap_or(base.fail_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lint_command() {
        assert_eq!(
            StepConfig::default_lint().command_line(),
            "pylint --disable=R,C,fixme psclient tests"
        );
    }

    #[test]
    fn test_default_test_command() {
        assert_eq!(StepConfig::default_test().command_line(), "pytest tests/");
    }

    #[test]
    fn test_defaults_use_nonzero_policy() {
        for step in [Step::Lint, Step::Test] {
            let config = StepConfig::default_for(step);
            assert_eq!(config.exit_codes, ExitCodePolicy::NonZero);
            assert!(config.passes(Some(0)));
            assert!(!config.passes(Some(2)));
            assert!(config.validate(step).is_ok());
        }
    }

    #[test]
    fn test_empty_program_rejected() {
        let config = StepConfig {
            program: "  ".to_string(),
            ..StepConfig::default_test()
        };
        let err = config.validate(Step::Test).unwrap_err();
        assert!(matches!(err, GateError::ConfigInvalid { .. }));
        assert!(err.to_string().contains("test.program"));
    }

    #[test]
    fn test_fail_on_requires_pylint_policy() {
        let config = StepConfig {
            fail_on: vec![PylintCategory::Error],
            ..StepConfig::default_lint()
        };
        let err = config.validate(Step::Lint).unwrap_err();
        assert!(err.to_string().contains("lint.fail_on requires exit_codes: pylint"));

        let config = StepConfig {
            exit_codes: ExitCodePolicy::Pylint,
            ..config
        };
        assert!(config.validate(Step::Lint).is_ok());
    }

    #[test]
    fn test_overrides_keep_unset_fields() {
        let overrides = StepOverrides {
            args: Some(vec!["-x".to_string(), "tests/".to_string()]),
            ..StepOverrides::default()
        };
        let config = overrides.apply(StepConfig::default_test());
        assert_eq!(config.program, "pytest");
        assert_eq!(config.command_line(), "pytest -x tests/");
    }
}

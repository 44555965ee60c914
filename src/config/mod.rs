//! Gate configuration (gatecheck.yaml)
//!
//! The file is optional. Without it the gate runs the built-in pylint and
//! pytest commands. A file may override any subset of either step:
//!
//! ```yaml
//! lint:
//!   args: ["--disable=R,C,fixme", "src", "tests"]
//!   exit_codes: pylint
//!   fail_on: [error]
//! test:
//!   program: python3
//!   args: ["-m", "pytest", "tests/"]
//! ```

mod step;

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{GateError, Result};
use crate::gate::Step;

pub use step::StepConfig;
use step::StepOverrides;

/// File looked up in the workspace root when no --config is given
pub const CONFIG_FILE_NAME: &str = "gatecheck.yaml";

/// Commands for both gate steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub lint: StepConfig,
    pub test: StepConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            lint: StepConfig::default_for(Step::Lint),
            test: StepConfig::default_for(Step::Test),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GateConfigFile {
    #[serde(default)]
    lint: StepOverrides,
    #[serde(default)]
    test: StepOverrides,
}

impl GateConfig {
    /// Parse configuration from a YAML string, filling gaps with defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file = if is_blank(yaml) {
            GateConfigFile::default()
        } else {
            serde_yaml::from_str::<GateConfigFile>(yaml)?
        };

        let config = Self {
            lint: file.lint.apply(StepConfig::default_for(Step::Lint)),
            test: file.test.apply(StepConfig::default_for(Step::Test)),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration for a workspace.
    ///
    /// An explicit path must exist. Otherwise `gatecheck.yaml` in the
    /// workspace is used when present, and the defaults when not.
    pub fn load(workspace: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(GateError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = workspace.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    debug!(workspace = %workspace.display(), "No config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        Self::from_file(&path)
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading config");

        let content =
            std::fs::read_to_string(path).map_err(|e| GateError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content).map_err(|e| match e {
            GateError::ConfigParseFailed { reason, .. } => GateError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn step(&self, step: Step) -> &StepConfig {
        match step {
            Step::Lint => &self.lint,
            Step::Test => &self.test,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.lint.validate(Step::Lint)?;
        self.test.validate(Step::Test)
    }
}

/// Empty or comment-only documents mean "all defaults"
fn is_blank(yaml: &str) -> bool {
    yaml.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

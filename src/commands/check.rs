//! Check command implementation
//!
//! Resolves the workspace, loads its configuration and runs the gate with
//! real child processes.

use std::path::PathBuf;

use tracing::debug;

use crate::config::GateConfig;
use crate::error::{GateError, Result};
use crate::gate::{self, ProcessRunner, Verdict};

/// Run the lint and test steps in `workspace` and print the verdict
pub fn run(workspace: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Verdict> {
    let workspace = resolve_workspace(workspace)?;
    let config = GateConfig::load(&workspace, config_path.as_deref())?;

    debug!(
        workspace = %workspace.display(),
        lint = %config.lint.command_line(),
        test = %config.test.command_line(),
        "Running gate"
    );

    let mut runner = ProcessRunner::new(&workspace);
    gate::run(&mut runner, &config, &mut std::io::stdout().lock())
}

fn resolve_workspace(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let workspace = match workspace {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if !workspace.is_dir() {
        return Err(GateError::WorkspaceNotFound {
            path: workspace.display().to_string(),
        });
    }

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_existing_workspace() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_workspace(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(resolved, temp.path());
    }

    #[test]
    fn test_resolve_defaults_to_current_dir() {
        let resolved = resolve_workspace(None).unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_missing_workspace() {
        let temp = TempDir::new().unwrap();
        let err = resolve_workspace(Some(temp.path().join("missing"))).unwrap_err();
        assert!(matches!(err, GateError::WorkspaceNotFound { .. }));
    }

    #[test]
    fn test_invalid_config_stops_before_any_step() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("gatecheck.yaml"), "lint:\n  program: ''\n").unwrap();

        let err = run(Some(temp.path().to_path_buf()), None).unwrap_err();
        assert!(matches!(err, GateError::ConfigInvalid { .. }));
    }
}

//! Common test utilities for gatecheck integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway project directory for the gate to run in
pub struct TestWorkspace {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a gatecheck.yaml whose lint and test steps are `sh -c` scripts
    pub fn configure_steps(&self, lint_script: &str, test_script: &str) {
        self.write_file(
            "gatecheck.yaml",
            &format!(
                "lint:\n  program: sh\n  args: [\"-c\", {}]\ntest:\n  program: sh\n  args: [\"-c\", {}]\n",
                yaml_string(lint_script),
                yaml_string(test_script)
            ),
        );
    }

    /// Fake tools that append their step name to order.log, then exit with the given codes
    pub fn configure_exit_codes(&self, lint_code: i32, test_code: i32) {
        self.configure_steps(
            &format!("echo lint >> order.log; exit {lint_code}"),
            &format!("echo test >> order.log; exit {test_code}"),
        );
    }

    /// The gatecheck binary, running against this workspace
    pub fn gatecheck(&self) -> Command {
        let mut cmd = gatecheck_cmd();
        cmd.arg("--workspace").arg(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The real gatecheck binary with a clean logging environment
pub fn gatecheck_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gatecheck"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Double-quoted YAML scalar
fn yaml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

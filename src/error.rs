//! Error types and handling for gatecheck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Lint and test failures are not errors: they are folded into the verdict.
//! Everything here stops the gate before either step runs.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gatecheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(gatecheck::config::not_found),
        help("Check the path passed to --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(gatecheck::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(gatecheck::config::parse_failed),
        help("Check the YAML syntax; known keys are 'lint' and 'test'")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(gatecheck::config::invalid))]
    ConfigInvalid { message: String },

    // Workspace errors
    #[error("Workspace directory not found: {path}")]
    #[diagnostic(
        code(gatecheck::workspace::not_found),
        help("Pass an existing project directory with --workspace")
    )]
    WorkspaceNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(gatecheck::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GateError {
    fn from(err: std::io::Error) -> Self {
        GateError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for GateError {
    fn from(err: serde_yaml::Error) -> Self {
        GateError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GateError>;

/// Text printed on stderr when the gate cannot start: the message, then the
/// diagnostic's help hint when it has one
pub fn render_report(err: &GateError) -> String {
    match err.help() {
        Some(help) => format!("Error: {err}\n  help: {help}"),
        None => format!("Error: {err}"),
    }
}

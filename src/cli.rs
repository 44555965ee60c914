//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gatecheck - lint and test gate for CI
///
/// Runs the linter, then the test suite, and exits 0 when both pass, 1 when
/// one fails and 2 when both fail.
#[derive(Parser, Debug)]
#[command(
    name = "gatecheck",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Lint and test gate for CI",
    long_about = "gatecheck runs the project's linter, then its test suite, and reports a \
                  single verdict. Exit status: 0 when both pass, 1 when exactly one fails, \
                  2 when both fail or the gate could not start.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  gatecheck\n    \
                  gatecheck --workspace ./project\n    \
                  gatecheck --config ci/gatecheck.yaml --verbose\n    \
                  gatecheck completions bash"
)]
pub struct Cli {
    /// Project directory the tools run in (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to gatecheck.yaml in the workspace, if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    // None runs the gate
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the lint and test steps (the default)
    Check,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gatecheck completions bash > ~/.bash_completion.d/gatecheck\n\n\
                  Generate zsh completions:\n    gatecheck completions zsh > ~/.zfunc/_gatecheck\n\n\
                  Generate fish completions:\n    gatecheck completions fish > ~/.config/fish/completions/gatecheck.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

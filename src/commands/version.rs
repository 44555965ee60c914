//! Version command implementation
//!
//! Besides the version, shows what a bare `gatecheck` would run, which is the
//! first thing to check when a CI gate behaves unexpectedly.

use std::io::Write;

use crate::config::StepConfig;
use crate::error::Result;
use crate::gate::Step;

/// Run version command
pub fn run() -> Result<()> {
    write_info(&mut std::io::stdout().lock())
}

fn write_info<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "gatecheck {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    // MSRV from Cargo.toml; the compiler version is not recorded
    writeln!(out, "  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
    writeln!(out, "  Profile: {}", build_profile())?;
    writeln!(out)?;
    writeln!(out, "Built-in steps (without gatecheck.yaml):")?;
    for step in [Step::Lint, Step::Test] {
        writeln!(
            out,
            "  Default {step}: {}",
            StepConfig::default_for(step).command_line()
        )?;
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

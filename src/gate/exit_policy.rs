//! Exit-code policies
//!
//! A policy turns the raw exit status of a tool into pass or fail. The
//! default treats zero as the only success. The `pylint` policy decodes the
//! bitmask pylint exits with, the way `pylint-exit` normalizes it.

use std::fmt;

use serde::Deserialize;

/// Largest status pylint can exit with (all six category bits set)
const PYLINT_MAX_STATUS: i32 = 0b11_1111;

/// How a step's exit status is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitCodePolicy {
    /// Zero passes, anything else fails
    #[default]
    NonZero,
    /// Pylint status bitmask
    Pylint,
}

impl ExitCodePolicy {
    /// Whether a tool that exited with `code` passed.
    ///
    /// `None` means the process was terminated by a signal, which always fails.
    pub fn passes(self, code: Option<i32>, fail_on: &[PylintCategory]) -> bool {
        match (self, code) {
            (_, None) => false,
            (Self::NonZero, Some(code)) => code == 0,
            (Self::Pylint, Some(code)) => pylint_passes(code, fail_on),
        }
    }
}

impl fmt::Display for ExitCodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonZero => write!(f, "nonzero"),
            Self::Pylint => write!(f, "pylint"),
        }
    }
}

/// Message categories encoded in pylint's exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PylintCategory {
    Fatal,
    Error,
    Warning,
    Refactor,
    Convention,
    Usage,
}

impl PylintCategory {
    /// Categories that fail the step no matter what `fail_on` says
    pub const ALWAYS_FAIL: [PylintCategory; 2] = [PylintCategory::Fatal, PylintCategory::Usage];

    const ALL: [PylintCategory; 6] = [
        PylintCategory::Fatal,
        PylintCategory::Error,
        PylintCategory::Warning,
        PylintCategory::Refactor,
        PylintCategory::Convention,
        PylintCategory::Usage,
    ];

    /// Bit this category occupies in pylint's exit status
    pub fn bit(self) -> i32 {
        match self {
            Self::Fatal => 1,
            Self::Error => 2,
            Self::Warning => 4,
            Self::Refactor => 8,
            Self::Convention => 16,
            Self::Usage => 32,
        }
    }

    /// Categories whose bits are set in `code`
    pub fn decode(code: i32) -> Vec<PylintCategory> {
        Self::ALL
            .into_iter()
            .filter(|category| code & category.bit() != 0)
            .collect()
    }
}

impl fmt::Display for PylintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Refactor => "refactor",
            Self::Convention => "convention",
            Self::Usage => "usage",
        };
        f.write_str(name)
    }
}

fn pylint_passes(code: i32, fail_on: &[PylintCategory]) -> bool {
    if !(0..=PYLINT_MAX_STATUS).contains(&code) {
        return false;
    }

    let failing_mask = PylintCategory::ALWAYS_FAIL
        .iter()
        .chain(fail_on)
        .fold(0, |mask, category| mask | category.bit());

    code & failing_mask == 0
}

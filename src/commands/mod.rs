//! Command implementations for gatecheck CLI

pub mod check;
pub mod completions;
pub mod version;

//! Command implementations for the fatjar CLI

pub mod completions;
pub mod process;

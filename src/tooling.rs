//! Tooling & Integration Layer
//!
//! Command-line entry points: local invocation of the intent handler and the
//! slot vocabulary generator.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, SlotsCli};

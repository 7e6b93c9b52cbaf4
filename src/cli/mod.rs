//! CLI module for the schema exporter
//!
//! Provides the command-line interface:
//! - export: compose the plant schema and write the canonical JSON document

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, PlantArg};
pub use commands::{export, run, run_command};
pub use errors::{CliError, CliResult};

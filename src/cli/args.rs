//! CLI argument definitions using clap
//!
//! Commands:
//! - pmc-schema export [--plant <55a0|demo>] [--output <path>] [--compact]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::plant::Plant;

/// pmc-schema - A strict, deterministic plant-configuration schema exporter
#[derive(Parser, Debug)]
#[command(name = "pmc-schema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the plant schema and write the canonical JSON document
    Export {
        /// Which plant composition to export
        #[arg(long, value_enum, default_value = "55a0")]
        plant: PlantArg,

        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

/// CLI-facing plant selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantArg {
    /// The 55.A0 magnetics plant
    #[value(name = "55a0")]
    P55a0,
    /// The demo plant
    Demo,
}

impl From<PlantArg> for Plant {
    fn from(arg: PlantArg) -> Self {
        match arg {
            PlantArg::P55a0 => Plant::P55A0,
            PlantArg::Demo => Plant::Demo,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI command implementations
//!
//! The export pipeline is compose -> serialize -> write: the tree is fully
//! constructed and frozen before the first byte is written, so a failed
//! composition can never leave a partial document behind.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::observability::Logger;
use crate::plant::{self, Plant};
use crate::schema::{write_document, Composer};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches an already-parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Export {
            plant,
            output,
            compact,
        } => export(plant.into(), output, compact),
    }
}

/// Composes the selected plant and writes the canonical document.
pub fn export(plant: Plant, output: Option<PathBuf>, compact: bool) -> CliResult<()> {
    Logger::info("compose_started", &[("plant", plant.name())]);

    let mut composer = Composer::new();
    let document = plant::compose(plant, &mut composer)?;

    Logger::info(
        "compose_complete",
        &[
            ("plant", plant.name()),
            ("roots", &document.roots().len().to_string()),
            ("aliases", &composer.alias_index().len().to_string()),
        ],
    );

    let target = match &output {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|source| CliError::Output {
                path: path.display().to_string(),
                source,
            })?;
            write_document(&document, BufWriter::new(file), compact)?;
        }
        None => {
            let stdout = io::stdout();
            write_document(&document, stdout.lock(), compact)?;
        }
    }

    Logger::info(
        "export_complete",
        &[("plant", plant.name()), ("output", &target)],
    );
    Ok(())
}

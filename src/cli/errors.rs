//! CLI-specific error types
//!
//! Schema-definition defects and output I/O failures both abort the
//! process with a non-zero exit status; no partial document is ever
//! written because composition completes before the first byte of output.

use std::io;

use thiserror::Error;

use crate::schema::{ExportError, SchemaError};

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Defect in the declarative schema composition
    #[error("schema definition error: {0}")]
    Schema(#[from] SchemaError),

    /// The output sink refused the document
    #[error("{0}")]
    Export(#[from] ExportError),

    /// The output file could not be created
    #[error("cannot create output file `{path}`: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Stable error code for log consumers.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Schema(_) => "PMC_SCHEMA_DEFECT",
            CliError::Export(_) => "PMC_EXPORT_IO",
            CliError::Output { .. } => "PMC_OUTPUT_IO",
        }
    }
}

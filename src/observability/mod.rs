//! Observability for the schema exporter
//!
//! Structured, synchronous JSON logging on stderr. The exported document
//! owns stdout.

mod logger;

pub use logger::{Logger, Severity};

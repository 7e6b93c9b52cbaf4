//! pmc-schema - A strict, deterministic plant-configuration schema exporter

pub mod cli;
pub mod observability;
pub mod plant;
pub mod schema;

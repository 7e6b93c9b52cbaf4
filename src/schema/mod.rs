//! Typed variable schema for the plant configuration export
//!
//! # Design Principles
//!
//! - Build once, then freeze: the tree is composed bottom-up and never
//!   mutated afterwards
//! - Explicit ordered registration, no field introspection
//!   (registration order is serialization order)
//! - Every schema defect aborts composition with the offending node path
//! - Deterministic, byte-stable JSON projection
//! - Rules are declared here and evaluated by the downstream consumer

mod errors;
mod registry;
mod serializer;
mod types;
mod validation;

pub use errors::{NodePath, SchemaError, SchemaErrorKind, SchemaResult};
pub use registry::{AliasEntry, AliasIndex, Composer, StructBuilder};
pub use serializer::{
    document_from_value, node_from_value, to_json_string, write_document, ExportError,
    ExportResult, SchemaDocument,
};
pub use types::{DeclaredType, Literal, ScalarType, Shape, VariableKind, VariableNode};
pub use validation::{RuleKind, ValidationRule, Violation};

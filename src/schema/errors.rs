//! Schema-definition error types
//!
//! Every construction failure is a defect in the declarative schema itself,
//! not a recoverable runtime condition. Composition aborts on the first
//! defect and the error carries the path of names from the root to the
//! offending node, accumulated as the error propagates upward through the
//! enclosing builders.

use thiserror::Error;

/// Result type for schema composition.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Path of node names from the root to the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// Segments in root-to-leaf order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        write!(f, "{}", self.0.join("::"))
    }
}

/// What went wrong, independent of where in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaErrorKind {
    /// Non-positive dimension, or value/element arity not matching the shape
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Two siblings registered under the same name
    #[error("duplicate child `{0}`")]
    DuplicateChild(String),

    /// Struct children differ from the declared field list of its type
    #[error("struct field mismatch: {0}")]
    FieldMismatch(String),

    /// Alias holders disagree on declared type or shape
    #[error("alias type conflict: {0}")]
    AliasTypeConflict(String),

    /// Rule operands are neither empty, a single broadcast value, nor
    /// one value per element
    #[error("validation rule arity mismatch: {0}")]
    RuleArityMismatch(String),

    /// Struct type name never registered
    #[error("unknown struct type `{0}`")]
    UnknownStructType(String),

    /// Struct type name registered twice
    #[error("duplicate struct type `{0}`")]
    DuplicateStructType(String),
}

/// A schema-definition error with the offending node path attached.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} (at {path})")]
pub struct SchemaError {
    path: NodePath,
    kind: SchemaErrorKind,
}

impl SchemaError {
    /// Creates an error rooted at a single node.
    pub fn new(node: impl Into<String>, kind: SchemaErrorKind) -> Self {
        SchemaError {
            path: NodePath(vec![node.into()]),
            kind,
        }
    }

    pub fn shape_mismatch(node: &str, detail: impl Into<String>) -> Self {
        Self::new(node, SchemaErrorKind::ShapeMismatch(detail.into()))
    }

    pub fn duplicate_child(node: &str, child: &str) -> Self {
        Self::new(node, SchemaErrorKind::DuplicateChild(child.to_string()))
    }

    pub fn field_mismatch(node: &str, detail: impl Into<String>) -> Self {
        Self::new(node, SchemaErrorKind::FieldMismatch(detail.into()))
    }

    pub fn alias_type_conflict(node: &str, detail: impl Into<String>) -> Self {
        Self::new(node, SchemaErrorKind::AliasTypeConflict(detail.into()))
    }

    pub fn rule_arity_mismatch(node: &str, detail: impl Into<String>) -> Self {
        Self::new(node, SchemaErrorKind::RuleArityMismatch(detail.into()))
    }

    pub fn unknown_struct_type(node: &str, type_name: &str) -> Self {
        Self::new(node, SchemaErrorKind::UnknownStructType(type_name.to_string()))
    }

    pub fn duplicate_struct_type(type_name: &str) -> Self {
        SchemaError {
            path: NodePath::default(),
            kind: SchemaErrorKind::DuplicateStructType(type_name.to_string()),
        }
    }

    /// Prepends an enclosing node name while the error bubbles up.
    pub fn within(mut self, parent: &str) -> Self {
        self.path.0.insert(0, parent.to_string());
        self
    }

    pub fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }
}

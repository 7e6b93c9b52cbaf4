//! Schema node definitions
//!
//! The whole plant schema is one tree of [`VariableNode`]s, composed
//! bottom-up at definition time and frozen afterwards:
//! - scalar: a single typed value, shape `[1]`
//! - array: a typed value container with a fixed multi-dimensional shape
//! - struct: a fixed, ordered list of named child variables
//! - array-of-struct: a shaped, row-major block of same-typed struct children
//! - library: a grouping root with no own value, optionally aliased
//!
//! # Invariants
//!
//! - Every shape dimension is >= 1
//! - Scalar/array values flatten to exactly `shape.element_count()` leaves
//! - Sibling names are unique within one parent
//! - Array-of-struct children all share the declared struct type

use super::errors::{SchemaError, SchemaResult};
use super::validation::{ValidationRule, Violation};

/// Primitive value types carried by scalar and array variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// 32-bit signed integer
    Int32,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    Str,
}

impl ScalarType {
    /// Returns the canonical type name used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Int32 => "int32",
            ScalarType::Float32 => "float32",
            ScalarType::Double => "double",
            ScalarType::Str => "string",
        }
    }

    /// Parses a canonical type name back into a tag.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int32" => Some(ScalarType::Int32),
            "float32" => Some(ScalarType::Float32),
            "double" => Some(ScalarType::Double),
            "string" => Some(ScalarType::Str),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The declared type of a variable.
///
/// Scalars and arrays carry a primitive tag; structs and arrays-of-struct
/// carry the name of a struct type; grouping structs assembled ad hoc (coil
/// groups, plant sections) have no named type and serialize as `""`;
/// libraries carry the fixed `library` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// Primitive scalar tag
    Scalar(ScalarType),
    /// Named struct type, checked against the struct registry
    Struct(String),
    /// Unnamed grouping struct
    Anonymous,
    /// Library grouping root
    Library,
}

impl DeclaredType {
    /// Wire representation of the type field.
    pub fn wire_name(&self) -> &str {
        match self {
            DeclaredType::Scalar(t) => t.name(),
            DeclaredType::Struct(name) => name,
            DeclaredType::Anonymous => "",
            DeclaredType::Library => "library",
        }
    }

    /// Returns the primitive tag if this is a scalar type.
    pub fn scalar(&self) -> Option<ScalarType> {
        match self {
            DeclaredType::Scalar(t) => Some(*t),
            _ => None,
        }
    }
}

/// An ordered sequence of positive dimension sizes. `[1]` is a plain scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Creates a shape, rejecting empty shapes and zero-sized dimensions.
    pub fn new(node: &str, dims: &[usize]) -> SchemaResult<Self> {
        if dims.is_empty() {
            return Err(SchemaError::shape_mismatch(node, "shape has no dimensions"));
        }
        if dims.contains(&0) {
            return Err(SchemaError::shape_mismatch(
                node,
                "dimension of size 0 is not positive",
            ));
        }
        Ok(Shape(dims.to_vec()))
    }

    /// The `[1]` scalar shape.
    pub fn scalar() -> Self {
        Shape(vec![1])
    }

    /// Dimension sizes in declaration order.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Total number of flat elements (product of dimensions).
    pub fn element_count(&self) -> usize {
        self.0.iter().product()
    }

    /// Resolves a multi-dimensional index tuple to a row-major flat offset.
    ///
    /// Returns `None` when the tuple arity differs from the shape rank or
    /// any coordinate is out of range.
    pub fn flat_index(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.0.len() {
            return None;
        }
        let mut flat = 0;
        for (i, dim) in index.iter().zip(&self.0) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        Some(flat)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

/// A typed literal, possibly nested to mirror a multi-dimensional shape.
///
/// Float32 leaves are stored as `f32` so that serialization round-trips
/// through 32-bit precision instead of widening to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i32),
    Float(f32),
    Double(f64),
    Str(String),
    Seq(Vec<Literal>),
}

impl Literal {
    /// Wraps a slice of `i32` values into a flat sequence.
    pub fn ints(values: &[i32]) -> Self {
        Literal::Seq(values.iter().map(|v| Literal::Int(*v)).collect())
    }

    /// Wraps a slice of `f32` values into a flat sequence.
    pub fn floats(values: &[f32]) -> Self {
        Literal::Seq(values.iter().map(|v| Literal::Float(*v)).collect())
    }

    /// Wraps a slice of `f64` values into a flat sequence.
    pub fn doubles(values: &[f64]) -> Self {
        Literal::Seq(values.iter().map(|v| Literal::Double(*v)).collect())
    }

    /// Leaf literals in depth-first order.
    pub fn flatten(&self) -> Vec<&Literal> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Literal>) {
        match self {
            Literal::Seq(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
            leaf => out.push(leaf),
        }
    }

    /// Number of leaf literals.
    pub fn leaf_count(&self) -> usize {
        match self {
            Literal::Seq(items) => items.iter().map(Literal::leaf_count).sum(),
            _ => 1,
        }
    }

    /// The runtime type tag of a leaf literal; `None` for sequences.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            Literal::Int(_) => Some(ScalarType::Int32),
            Literal::Float(_) => Some(ScalarType::Float32),
            Literal::Double(_) => Some(ScalarType::Double),
            Literal::Str(_) => Some(ScalarType::Str),
            Literal::Seq(_) => None,
        }
    }

    /// Numeric view of a leaf literal, widening to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Int(v) => Some(f64::from(*v)),
            Literal::Float(v) => Some(f64::from(*v)),
            Literal::Double(v) => Some(*v),
            _ => None,
        }
    }
}

/// Discriminates the five variable flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Scalar,
    Array,
    Struct,
    ArrayOfStruct,
    Library,
}

/// A named, typed, shaped, validated configuration parameter node.
///
/// Nodes are immutable once constructed; composite nodes own their children
/// exclusively. Equality is structural and recursive, which the round-trip
/// tests rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableNode {
    name: String,
    description: String,
    kind: VariableKind,
    declared_type: DeclaredType,
    shape: Shape,
    value: Option<Literal>,
    is_live_variable: bool,
    library_alias: Option<String>,
    validations: Vec<ValidationRule>,
    children: Vec<VariableNode>,
}

impl VariableNode {
    /// Assembles a node after checking the intrinsic invariants: value
    /// arity against the shape, sibling-name uniqueness, rule operand
    /// arity, and array-of-struct uniformity.
    ///
    /// Registry-backed invariants (struct field lists, alias consistency)
    /// are enforced by the composer before it delegates here.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        name: String,
        description: String,
        kind: VariableKind,
        declared_type: DeclaredType,
        shape: Shape,
        value: Option<Literal>,
        is_live_variable: bool,
        library_alias: Option<String>,
        validations: Vec<ValidationRule>,
        children: Vec<VariableNode>,
    ) -> SchemaResult<Self> {
        if let Some(value) = &value {
            let expected = shape.element_count();
            let actual = value.leaf_count();
            if actual != expected {
                return Err(SchemaError::shape_mismatch(
                    &name,
                    format!(
                        "value flattens to {} elements but shape {} requires {}",
                        actual, shape, expected
                    ),
                ));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for child in &children {
            if !seen.insert(child.name.as_str()) {
                return Err(SchemaError::duplicate_child(&name, &child.name));
            }
        }

        if kind == VariableKind::ArrayOfStruct {
            let expected = shape.element_count();
            if children.len() != expected {
                return Err(SchemaError::shape_mismatch(
                    &name,
                    format!(
                        "{} struct elements registered but shape {} requires {}",
                        children.len(),
                        shape,
                        expected
                    ),
                ));
            }
            if let Some(odd) = children.iter().find(|c| c.declared_type != declared_type) {
                return Err(SchemaError::shape_mismatch(
                    &name,
                    format!(
                        "element `{}` has type `{}`, expected `{}`",
                        odd.name,
                        odd.declared_type.wire_name(),
                        declared_type.wire_name()
                    ),
                ));
            }
        }

        for rule in &validations {
            rule.check_arity(&name, &shape)?;
        }

        Ok(VariableNode {
            name,
            description,
            kind,
            declared_type,
            shape,
            value,
            is_live_variable,
            library_alias,
            validations,
            children,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared_type
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn value(&self) -> Option<&Literal> {
        self.value.as_ref()
    }

    pub fn is_live_variable(&self) -> bool {
        self.is_live_variable
    }

    /// Whether the node is a grouping root without its own value.
    pub fn is_library(&self) -> bool {
        self.kind == VariableKind::Library
    }

    /// Whether the node serializes with `isStruct: true`.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, VariableKind::Struct | VariableKind::ArrayOfStruct)
    }

    pub fn library_alias(&self) -> Option<&str> {
        self.library_alias.as_deref()
    }

    pub fn validations(&self) -> &[ValidationRule] {
        &self.validations
    }

    /// Children in registration order.
    pub fn children(&self) -> &[VariableNode] {
        &self.children
    }

    /// Looks up a named child of a struct or library node.
    pub fn child(&self, name: &str) -> Option<&VariableNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Resolves an array-of-struct element by multi-dimensional index tuple.
    pub fn child_at(&self, index: &[usize]) -> Option<&VariableNode> {
        if self.kind != VariableKind::ArrayOfStruct {
            return None;
        }
        self.shape.flat_index(index).and_then(|i| self.children.get(i))
    }

    /// Evaluates every attached rule against a candidate value, collecting
    /// all violations in rule order rather than stopping at the first.
    pub fn check(&self, candidate: &Literal) -> Vec<Violation> {
        let declared = self.declared_type.scalar();
        self.validations
            .iter()
            .flat_map(|rule| rule.evaluate(declared, candidate))
            .collect()
    }
}

//! Struct registry, alias index and tree composition
//!
//! Composite nodes are built through explicit, ordered child registration:
//! each struct type is declared once as a fixed, ordered field list, and
//! building an instance appends children in exactly that order. There is
//! no implicit field harvesting; append order is declaration order and the
//! serializer preserves it end to end.
//!
//! The [`AliasIndex`] is filled as a side observation during composition.
//! It never feeds serialization; it exists so cross-library consistency
//! (same alias implies same declared type and shape) can be checked at
//! construction time and audited afterwards.

use std::collections::{HashMap, HashSet};

use super::errors::{SchemaError, SchemaResult};
use super::types::{DeclaredType, Literal, ScalarType, Shape, VariableKind, VariableNode};
use super::validation::ValidationRule;

/// One alias holder: enough of the node's identity to check invariant
/// consistency and to audit which variables are interchangeable.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasEntry {
    /// Name of the aliased node
    pub node: String,
    /// Declared type the alias holders must agree on
    pub declared_type: DeclaredType,
    /// Shape the alias holders must agree on
    pub shape: Shape,
}

/// Cross-cutting lookup from alias key to the nodes sharing it.
#[derive(Debug, Default)]
pub struct AliasIndex {
    entries: HashMap<String, Vec<AliasEntry>>,
}

impl AliasIndex {
    /// Records an alias holder, rejecting type/shape disagreement with any
    /// previously registered holder of the same alias.
    fn register(
        &mut self,
        alias: &str,
        node: &str,
        declared_type: &DeclaredType,
        shape: &Shape,
    ) -> SchemaResult<()> {
        if let Some(existing) = self.entries.get(alias).and_then(|v| v.first()) {
            if existing.declared_type != *declared_type || existing.shape != *shape {
                return Err(SchemaError::alias_type_conflict(
                    node,
                    format!(
                        "alias `{}` already held by `{}` with type `{}` shape {}, \
                         cannot also cover type `{}` shape {}",
                        alias,
                        existing.node,
                        existing.declared_type.wire_name(),
                        existing.shape,
                        declared_type.wire_name(),
                        shape
                    ),
                ));
            }
        }
        self.entries.entry(alias.to_string()).or_default().push(AliasEntry {
            node: node.to_string(),
            declared_type: declared_type.clone(),
            shape: shape.clone(),
        });
        Ok(())
    }

    /// All holders of an alias, in registration order.
    pub fn holders(&self, alias: &str) -> &[AliasEntry] {
        self.entries.get(alias).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct aliases observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Named struct types, each a fixed, ordered list of field names.
#[derive(Debug, Default)]
struct StructRegistry {
    shapes: HashMap<String, Vec<String>>,
}

/// Owns the struct registry and alias index for one schema composition.
///
/// All node construction flows through the composer so the registry-backed
/// invariants are enforced in one place. The composer is single-threaded
/// and discarded (or kept for alias audits) once the tree is frozen.
#[derive(Debug, Default)]
pub struct Composer {
    registry: StructRegistry,
    aliases: AliasIndex,
}

impl Composer {
    pub fn new() -> Self {
        Composer::default()
    }

    /// Declares a struct type as its ordered field list. Each type is
    /// declared exactly once.
    pub fn register_struct(&mut self, type_name: &str, fields: &[&str]) -> SchemaResult<()> {
        if self.registry.shapes.contains_key(type_name) {
            return Err(SchemaError::duplicate_struct_type(type_name));
        }
        self.registry.shapes.insert(
            type_name.to_string(),
            fields.iter().map(|f| f.to_string()).collect(),
        );
        Ok(())
    }

    /// A single typed value with shape `[1]`.
    pub fn scalar(
        &mut self,
        name: &str,
        description: &str,
        scalar_type: ScalarType,
        value: Literal,
        validations: Vec<ValidationRule>,
    ) -> SchemaResult<VariableNode> {
        VariableNode::assemble(
            name.to_string(),
            description.to_string(),
            VariableKind::Scalar,
            DeclaredType::Scalar(scalar_type),
            Shape::scalar(),
            Some(value),
            false,
            None,
            validations,
            Vec::new(),
        )
    }

    /// A typed value container with the given multi-dimensional shape.
    pub fn array(
        &mut self,
        name: &str,
        description: &str,
        scalar_type: ScalarType,
        dims: &[usize],
        value: Literal,
        validations: Vec<ValidationRule>,
    ) -> SchemaResult<VariableNode> {
        let shape = Shape::new(name, dims)?;
        VariableNode::assemble(
            name.to_string(),
            description.to_string(),
            VariableKind::Array,
            DeclaredType::Scalar(scalar_type),
            shape,
            Some(value),
            false,
            None,
            validations,
            Vec::new(),
        )
    }

    /// A scalar carrying a library alias.
    pub fn aliased_scalar(
        &mut self,
        name: &str,
        description: &str,
        scalar_type: ScalarType,
        value: Literal,
        validations: Vec<ValidationRule>,
        alias: &str,
    ) -> SchemaResult<VariableNode> {
        let shape = Shape::scalar();
        let node = VariableNode::assemble(
            name.to_string(),
            description.to_string(),
            VariableKind::Scalar,
            DeclaredType::Scalar(scalar_type),
            shape,
            Some(value),
            false,
            Some(alias.to_string()),
            validations,
            Vec::new(),
        )?;
        self.aliases
            .register(alias, name, node.declared_type(), node.shape())?;
        Ok(node)
    }

    /// An array carrying a library alias.
    #[allow(clippy::too_many_arguments)]
    pub fn aliased_array(
        &mut self,
        name: &str,
        description: &str,
        scalar_type: ScalarType,
        dims: &[usize],
        value: Literal,
        validations: Vec<ValidationRule>,
        alias: &str,
    ) -> SchemaResult<VariableNode> {
        let shape = Shape::new(name, dims)?;
        let node = VariableNode::assemble(
            name.to_string(),
            description.to_string(),
            VariableKind::Array,
            DeclaredType::Scalar(scalar_type),
            shape,
            Some(value),
            false,
            Some(alias.to_string()),
            validations,
            Vec::new(),
        )?;
        self.aliases
            .register(alias, name, node.declared_type(), node.shape())?;
        Ok(node)
    }

    /// A grouping root with no own value, optionally aliased.
    pub fn library(
        &mut self,
        name: &str,
        description: &str,
        alias: Option<&str>,
        children: Vec<VariableNode>,
    ) -> SchemaResult<VariableNode> {
        let shape = Shape::scalar();
        let node = VariableNode::assemble(
            name.to_string(),
            description.to_string(),
            VariableKind::Library,
            DeclaredType::Library,
            shape,
            None,
            false,
            alias.map(str::to_string),
            Vec::new(),
            children,
        )?;
        if let Some(alias) = alias {
            self.aliases
                .register(alias, name, node.declared_type(), node.shape())?;
        }
        Ok(node)
    }

    /// A shaped, row-major block of same-typed struct elements.
    pub fn array_of_structs(
        &mut self,
        name: &str,
        description: &str,
        type_name: &str,
        dims: &[usize],
        elements: Vec<VariableNode>,
    ) -> SchemaResult<VariableNode> {
        if !self.registry.shapes.contains_key(type_name) {
            return Err(SchemaError::unknown_struct_type(name, type_name));
        }
        let shape = Shape::new(name, dims)?;
        VariableNode::assemble(
            name.to_string(),
            description.to_string(),
            VariableKind::ArrayOfStruct,
            DeclaredType::Struct(type_name.to_string()),
            shape,
            None,
            false,
            None,
            Vec::new(),
            elements,
        )
    }

    /// The alias index built up as a side observation of composition.
    pub fn alias_index(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Holders of an alias, in registration order.
    pub fn alias_holders(&self, alias: &str) -> &[AliasEntry] {
        self.aliases.holders(alias)
    }

    fn finish_struct(&mut self, builder: StructBuilder) -> SchemaResult<VariableNode> {
        let declared_type = match &builder.type_name {
            Some(type_name) => {
                let fields = self
                    .registry
                    .shapes
                    .get(type_name)
                    .ok_or_else(|| SchemaError::unknown_struct_type(&builder.name, type_name))?;
                let got: Vec<&str> = builder.children.iter().map(|c| c.name()).collect();
                let want: Vec<&str> = fields.iter().map(String::as_str).collect();
                if got != want {
                    return Err(SchemaError::field_mismatch(
                        &builder.name,
                        format!(
                            "type `{}` declares fields [{}] but [{}] were registered",
                            type_name,
                            want.join(", "),
                            got.join(", ")
                        ),
                    ));
                }
                DeclaredType::Struct(type_name.clone())
            }
            None => DeclaredType::Anonymous,
        };

        let node = VariableNode::assemble(
            builder.name,
            builder.description,
            VariableKind::Struct,
            declared_type,
            Shape::scalar(),
            None,
            builder.is_live_variable,
            builder.alias,
            Vec::new(),
            builder.children,
        )?;
        if let Some(alias) = node.library_alias() {
            self.aliases
                .register(alias, node.name(), node.declared_type(), node.shape())?;
        }
        Ok(node)
    }
}

/// Ordered child registration for one struct instance.
///
/// `child` appends exactly once per name and rejects duplicates on the
/// spot; `finish` checks the registered names against the declared field
/// list of the struct type (when the instance has one) and hands the node
/// back to the caller, which attaches it to its own parent. No ambient
/// shared state is involved.
#[derive(Debug)]
pub struct StructBuilder {
    name: String,
    description: String,
    type_name: Option<String>,
    is_live_variable: bool,
    alias: Option<String>,
    children: Vec<VariableNode>,
    seen: HashSet<String>,
}

impl StructBuilder {
    /// An instance of a registered struct type.
    pub fn typed(name: &str, description: &str, type_name: &str) -> Self {
        StructBuilder {
            name: name.to_string(),
            description: description.to_string(),
            type_name: Some(type_name.to_string()),
            is_live_variable: false,
            alias: None,
            children: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// An ad hoc grouping struct with no declared type.
    pub fn group(name: &str, description: &str) -> Self {
        StructBuilder {
            name: name.to_string(),
            description: description.to_string(),
            type_name: None,
            is_live_variable: false,
            alias: None,
            children: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Marks the variable as updatable from a live-data feed.
    pub fn live(mut self, live: bool) -> Self {
        self.is_live_variable = live;
        self
    }

    /// Marks this instance as interchangeable with others under the alias.
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Appends a child; registration order is serialization order.
    pub fn child(mut self, node: VariableNode) -> SchemaResult<Self> {
        if !self.seen.insert(node.name().to_string()) {
            return Err(SchemaError::duplicate_child(&self.name, node.name()));
        }
        self.children.push(node);
        Ok(self)
    }

    /// Appends a child built by a fallible constructor, attaching this
    /// node's name to the error path when construction failed.
    pub fn try_child(self, node: SchemaResult<VariableNode>) -> SchemaResult<Self> {
        match node {
            Ok(node) => self.child(node),
            Err(e) => {
                let name = self.name.clone();
                Err(e.within(&name))
            }
        }
    }

    /// Closes the instance, enforcing the declared field list and alias
    /// consistency through the composer.
    pub fn finish(self, composer: &mut Composer) -> SchemaResult<VariableNode> {
        composer.finish_struct(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer_with_coil() -> Composer {
        let mut c = Composer::new();
        c.register_struct("coil", &["r", "z", "angle"]).unwrap();
        c
    }

    fn float_scalar(c: &mut Composer, name: &str, v: f32) -> VariableNode {
        c.scalar(name, "a coordinate", ScalarType::Float32, Literal::floats(&[v]), vec![])
            .unwrap()
    }

    #[test]
    fn test_typed_struct_requires_exact_fields() {
        let mut c = composer_with_coil();
        let r = float_scalar(&mut c, "r", 1.0);
        let z = float_scalar(&mut c, "z", 2.0);

        // Omitting a declared field fails.
        let partial = StructBuilder::typed("M2001", "a coil", "coil")
            .child(r.clone())
            .unwrap()
            .child(z.clone())
            .unwrap()
            .finish(&mut c);
        assert!(matches!(
            partial.unwrap_err().kind(),
            super::super::errors::SchemaErrorKind::FieldMismatch(_)
        ));

        let angle = float_scalar(&mut c, "angle", -90.0);
        let full = StructBuilder::typed("M2001", "a coil", "coil")
            .child(r)
            .unwrap()
            .child(z)
            .unwrap()
            .child(angle)
            .unwrap()
            .finish(&mut c)
            .unwrap();
        assert_eq!(full.children().len(), 3);
        assert_eq!(full.declared_type().wire_name(), "coil");
    }

    #[test]
    fn test_duplicate_child_rejected_on_append() {
        let mut c = composer_with_coil();
        let r1 = float_scalar(&mut c, "r", 1.0);
        let r2 = float_scalar(&mut c, "r", 2.0);
        let err = StructBuilder::group("G", "a group")
            .child(r1)
            .unwrap()
            .child(r2)
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            super::super::errors::SchemaErrorKind::DuplicateChild(_)
        ));
    }

    #[test]
    fn test_alias_conflict_on_shape() {
        let mut c = Composer::new();
        let first = c.library("LIB_A", "first holder", Some("EMB"), vec![]);
        assert!(first.is_ok());

        // Same alias on a different declared type must fail.
        let err = StructBuilder::group("LIB_B", "second holder")
            .alias("EMB")
            .finish(&mut c)
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            super::super::errors::SchemaErrorKind::AliasTypeConflict(_)
        ));
        assert_eq!(c.alias_holders("EMB").len(), 1);
    }

    #[test]
    fn test_alias_holders_retrievable() {
        let mut c = Composer::new();
        c.library("LIB_A", "first", Some("EMB"), vec![]).unwrap();
        c.library("LIB_B", "second", Some("EMB"), vec![]).unwrap();
        let holders = c.alias_holders("EMB");
        assert_eq!(holders.len(), 2);
        assert_eq!(holders[0].node, "LIB_A");
        assert_eq!(holders[1].node, "LIB_B");
    }

    #[test]
    fn test_array_of_structs_element_count() {
        let mut c = composer_with_coil();
        let mut elements = Vec::new();
        for i in 0..3 {
            let r = float_scalar(&mut c, "r", i as f32);
            let z = float_scalar(&mut c, "z", 0.0);
            let angle = float_scalar(&mut c, "angle", 0.0);
            elements.push(
                StructBuilder::typed(&format!("e{}", i), "an element", "coil")
                    .child(r)
                    .unwrap()
                    .child(z)
                    .unwrap()
                    .child(angle)
                    .unwrap()
                    .finish(&mut c)
                    .unwrap(),
            );
        }
        // 3 elements cannot fill a 2x2 block.
        let err = c
            .array_of_structs("BLOCK", "a block", "coil", &[2, 2], elements.clone())
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            super::super::errors::SchemaErrorKind::ShapeMismatch(_)
        ));

        let ok = c
            .array_of_structs("BLOCK", "a block", "coil", &[3], elements)
            .unwrap();
        assert_eq!(ok.child_at(&[1]).unwrap().name(), "e1");
        assert!(ok.child_at(&[3]).is_none());
    }

    #[test]
    fn test_array_of_structs_rejects_mixed_element_types() {
        let mut c = composer_with_coil();
        c.register_struct("gap", &["x0", "y0"]).unwrap();

        let r = float_scalar(&mut c, "r", 1.0);
        let z = float_scalar(&mut c, "z", 0.0);
        let angle = float_scalar(&mut c, "angle", 0.0);
        let coil = StructBuilder::typed("e0", "a coil", "coil")
            .child(r)
            .unwrap()
            .child(z)
            .unwrap()
            .child(angle)
            .unwrap()
            .finish(&mut c)
            .unwrap();

        let x0 = float_scalar(&mut c, "x0", 0.0);
        let y0 = float_scalar(&mut c, "y0", 0.0);
        let gap = StructBuilder::typed("e1", "a gap", "gap")
            .child(x0)
            .unwrap()
            .child(y0)
            .unwrap()
            .finish(&mut c)
            .unwrap();

        let err = c
            .array_of_structs("BLOCK", "a block", "coil", &[2], vec![coil, gap])
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            super::super::errors::SchemaErrorKind::ShapeMismatch(_)
        ));
    }

    #[test]
    fn test_failed_library_leaves_no_alias_entry() {
        let mut c = Composer::new();
        let a = float_scalar(&mut c, "V", 1.0);
        let b = float_scalar(&mut c, "V", 2.0);

        // Duplicate children abort assembly before the alias is indexed.
        let err = c.library("LIB", "a library", Some("EMB"), vec![a, b]).unwrap_err();
        assert!(matches!(
            err.kind(),
            super::super::errors::SchemaErrorKind::DuplicateChild(_)
        ));
        assert!(c.alias_holders("EMB").is_empty());
    }

    #[test]
    fn test_failed_struct_leaves_no_alias_entry() {
        let mut c = composer_with_coil();
        let r = float_scalar(&mut c, "r", 1.0);

        let err = StructBuilder::typed("M2001", "a coil", "coil")
            .alias("EMB")
            .child(r)
            .unwrap()
            .finish(&mut c)
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            super::super::errors::SchemaErrorKind::FieldMismatch(_)
        ));
        assert!(c.alias_holders("EMB").is_empty());
    }

    #[test]
    fn test_unknown_struct_type() {
        let mut c = Composer::new();
        let err = StructBuilder::typed("X", "an instance", "ghost")
            .finish(&mut c)
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            super::super::errors::SchemaErrorKind::UnknownStructType(_)
        ));
    }
}

//! Canonical JSON projection of a frozen schema tree
//!
//! The serializer walks each root depth-first and emits every node with a
//! fixed key order: `name, description, type, shape, isStruct,
//! isLiveVariable, isLibrary, libraryAlias, validation, value, children`.
//! Output is streamed straight through `serde_json`'s writer, which emits
//! keys in call order, so the document is byte-stable across runs given the
//! same composition. Nothing is ever reordered by name or hash.
//!
//! Float32 leaves are written from `f32`, so `1.001f32` prints as `1.001`
//! and not as the widened double `1.0010000467300415`.
//!
//! Serialization of a structurally valid tree is total; the only failure
//! mode is the output sink refusing bytes.

use std::io;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::errors::{SchemaError, SchemaResult};
use super::types::{DeclaredType, Literal, ScalarType, Shape, VariableKind, VariableNode};
use super::validation::{RuleKind, ValidationRule};

/// Result type for document export.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors surfaced while writing the document to its sink.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output sink refused written bytes
    #[error("failed to write schema document: {0}")]
    Io(#[from] io::Error),
}

/// The ordered set of top-level composites making up one export.
///
/// Root order is insertion order; root names are unique.
#[derive(Debug, Default, PartialEq)]
pub struct SchemaDocument {
    roots: Vec<VariableNode>,
}

impl SchemaDocument {
    pub fn new() -> Self {
        SchemaDocument::default()
    }

    /// Appends a top-level composite; root names must be unique.
    pub fn push_root(&mut self, node: VariableNode) -> SchemaResult<()> {
        if self.roots.iter().any(|r| r.name() == node.name()) {
            return Err(SchemaError::duplicate_child("<document>", node.name()));
        }
        self.roots.push(node);
        Ok(())
    }

    /// Roots in insertion order.
    pub fn roots(&self) -> &[VariableNode] {
        &self.roots
    }

    pub fn root(&self, name: &str) -> Option<&VariableNode> {
        self.roots.iter().find(|r| r.name() == name)
    }
}

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roots.len()))?;
        for root in &self.roots {
            map.serialize_entry(root.name(), root)?;
        }
        map.end()
    }
}

impl Serialize for VariableNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("description", self.description())?;
        map.serialize_entry("type", self.declared_type().wire_name())?;
        map.serialize_entry("shape", self.shape().dims())?;
        map.serialize_entry("isStruct", &self.is_struct())?;
        map.serialize_entry("isLiveVariable", &self.is_live_variable())?;
        map.serialize_entry("isLibrary", &self.is_library())?;
        map.serialize_entry("libraryAlias", self.library_alias().unwrap_or(""))?;
        map.serialize_entry("validation", self.validations())?;
        if let Some(value) = self.value() {
            map.serialize_entry("value", value)?;
        }
        if self.is_struct() || self.is_library() {
            map.serialize_entry("children", self.children())?;
        }
        map.end()
    }
}

impl Serialize for ValidationRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", self.kind().wire_name())?;
        map.serialize_entry("configuration", self.operands())?;
        map.serialize_entry("description", self.message())?;
        map.end()
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::Int(v) => serializer.serialize_i32(*v),
            Literal::Float(v) => serializer.serialize_f32(*v),
            Literal::Double(v) => serializer.serialize_f64(*v),
            Literal::Str(v) => serializer.serialize_str(v),
            Literal::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Renders the document as pretty-printed canonical JSON.
pub fn to_json_string(document: &SchemaDocument) -> ExportResult<String> {
    let mut out = Vec::new();
    write_document(document, &mut out, false)?;
    // The serializer only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Streams the document into the sink, pretty-printed unless `compact`,
/// followed by a trailing newline.
pub fn write_document<W: io::Write>(
    document: &SchemaDocument,
    mut writer: W,
    compact: bool,
) -> ExportResult<()> {
    if compact {
        serde_json::to_writer(&mut writer, document).map_err(io::Error::from)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, document).map_err(io::Error::from)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reconstructs a document from previously exported JSON.
///
/// Lenient by design: unknown keys are ignored and malformed structure
/// yields `None`. Root order follows the parsed map, which `serde_json`
/// keeps sorted, so ordering across roots is not preserved; within one
/// root the children arrays carry the original order. Intended for
/// round-trip consistency checks, not as a runtime input path.
pub fn document_from_value(value: &Value) -> Option<SchemaDocument> {
    let map = value.as_object()?;
    let mut document = SchemaDocument::new();
    for root in map.values() {
        document.push_root(node_from_value(root)?).ok()?;
    }
    Some(document)
}

/// Reconstructs a single node from its exported JSON object.
pub fn node_from_value(value: &Value) -> Option<VariableNode> {
    let obj = value.as_object()?;
    let name = obj.get("name")?.as_str()?.to_string();
    let description = obj.get("description")?.as_str().unwrap_or("").to_string();
    let type_name = obj.get("type")?.as_str()?;

    let dims: Vec<usize> = obj
        .get("shape")?
        .as_array()?
        .iter()
        .map(|d| d.as_u64().map(|d| d as usize))
        .collect::<Option<_>>()?;
    let shape = Shape::new(&name, &dims).ok()?;

    let is_struct = obj.get("isStruct")?.as_bool()?;
    let is_live = obj.get("isLiveVariable").and_then(Value::as_bool).unwrap_or(false);
    let is_library = obj.get("isLibrary").and_then(Value::as_bool).unwrap_or(false);
    let alias = obj
        .get("libraryAlias")
        .and_then(Value::as_str)
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    let validations = match obj.get("validation") {
        Some(Value::Array(rules)) => rules
            .iter()
            .map(rule_from_value)
            .collect::<Option<Vec<_>>>()?,
        _ => Vec::new(),
    };

    let (kind, declared_type) = if is_library {
        (VariableKind::Library, DeclaredType::Library)
    } else if is_struct {
        let declared = if type_name.is_empty() {
            DeclaredType::Anonymous
        } else {
            DeclaredType::Struct(type_name.to_string())
        };
        if shape.element_count() > 1 {
            (VariableKind::ArrayOfStruct, declared)
        } else {
            (VariableKind::Struct, declared)
        }
    } else {
        let scalar = ScalarType::from_name(type_name)?;
        if shape.element_count() > 1 || shape.dims() != [1] {
            (VariableKind::Array, DeclaredType::Scalar(scalar))
        } else {
            (VariableKind::Scalar, DeclaredType::Scalar(scalar))
        }
    };

    let node_value = match (kind, obj.get("value")) {
        (VariableKind::Scalar | VariableKind::Array, Some(v)) => {
            let scalar = declared_type.scalar()?;
            Some(typed_literal_from_value(v, scalar)?)
        }
        _ => None,
    };

    let children = match obj.get("children") {
        Some(Value::Array(children)) => children
            .iter()
            .map(node_from_value)
            .collect::<Option<Vec<_>>>()?,
        _ => Vec::new(),
    };

    VariableNode::assemble(
        name,
        description,
        kind,
        declared_type,
        shape,
        node_value,
        is_live,
        alias,
        validations,
        children,
    )
    .ok()
}

fn rule_from_value(value: &Value) -> Option<ValidationRule> {
    let obj = value.as_object()?;
    let kind = match obj.get("type")?.as_str()? {
        "checkMin" => RuleKind::CheckMin,
        "checkMax" => RuleKind::CheckMax,
        "checkType" => RuleKind::CheckType,
        name => RuleKind::Custom(name.to_string()),
    };
    let operands = match obj.get("configuration") {
        Some(Value::Array(items)) => items
            .iter()
            .map(operand_from_value)
            .collect::<Option<Vec<_>>>()?,
        _ => Vec::new(),
    };
    let message = obj.get("description")?.as_str()?.to_string();
    Some(ValidationRule::new(kind, operands, message))
}

// Rule operands carry no declared type of their own; numbers come back as
// doubles, which is how the domain declares its bounds.
fn operand_from_value(value: &Value) -> Option<Literal> {
    match value {
        Value::Number(n) => n.as_f64().map(Literal::Double),
        Value::String(s) => Some(Literal::Str(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(operand_from_value)
            .collect::<Option<Vec<_>>>()
            .map(Literal::Seq),
        _ => None,
    }
}

fn typed_literal_from_value(value: &Value, scalar: ScalarType) -> Option<Literal> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|v| typed_literal_from_value(v, scalar))
            .collect::<Option<Vec<_>>>()
            .map(Literal::Seq),
        Value::Number(n) => match scalar {
            ScalarType::Int32 => n.as_i64().map(|v| Literal::Int(v as i32)),
            ScalarType::Float32 => n.as_f64().map(|v| Literal::Float(v as f32)),
            ScalarType::Double => n.as_f64().map(Literal::Double),
            ScalarType::Str => None,
        },
        Value::String(s) => match scalar {
            ScalarType::Str => Some(Literal::Str(s.clone())),
            _ => None,
        },
        _ => None,
    }
}

//! Schema Construction Invariant Tests
//!
//! Construction-time invariants of the variable tree:
//! - Shape dimensions are positive and value arity matches the shape
//! - Sibling names are unique
//! - Typed structs carry exactly their declared field list
//! - Alias holders agree on declared type and shape
//! - Errors identify the offending node path from the root

use pmc_schema::plant;
use pmc_schema::schema::{
    Composer, Literal, ScalarType, SchemaErrorKind, StructBuilder, ValidationRule, VariableNode,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn int_scalar(c: &mut Composer, name: &str, v: i32) -> VariableNode {
    c.scalar(name, "a variable", ScalarType::Int32, Literal::ints(&[v]), vec![])
        .unwrap()
}

// =============================================================================
// Shape / Value Arity
// =============================================================================

#[test]
fn test_zero_dimension_rejected() {
    let mut c = Composer::new();
    let err = c
        .array(
            "V",
            "an array",
            ScalarType::Double,
            &[4, 0],
            Literal::doubles(&[]),
            vec![],
        )
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::ShapeMismatch(_)));
}

#[test]
fn test_value_arity_must_match_shape() {
    let mut c = Composer::new();
    let err = c
        .array(
            "V",
            "an array",
            ScalarType::Double,
            &[4],
            Literal::doubles(&[1.0, 2.0, 3.0]),
            vec![],
        )
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::ShapeMismatch(_)));
}

#[test]
fn test_nested_value_flattens_against_shape() {
    let mut c = Composer::new();
    // [2,2] filled by two rows of two.
    let ok = c.array(
        "V",
        "a matrix",
        ScalarType::Double,
        &[2, 2],
        Literal::Seq(vec![
            Literal::doubles(&[1.0, 0.0]),
            Literal::doubles(&[0.0001, 1.0]),
        ]),
        vec![],
    );
    assert!(ok.is_ok());

    // Ragged rows flattening to 3 leaves cannot fill it.
    let err = c
        .array(
            "V",
            "a matrix",
            ScalarType::Double,
            &[2, 2],
            Literal::Seq(vec![
                Literal::doubles(&[1.0]),
                Literal::doubles(&[0.0001, 1.0]),
            ]),
            vec![],
        )
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::ShapeMismatch(_)));
}

#[test]
fn test_composed_plants_satisfy_arity_everywhere() {
    fn walk(node: &VariableNode) {
        if let Some(value) = node.value() {
            assert_eq!(
                value.leaf_count(),
                node.shape().element_count(),
                "node `{}` value arity",
                node.name()
            );
        }
        for child in node.children() {
            walk(child);
        }
    }

    for plant in [plant::Plant::P55A0, plant::Plant::Demo] {
        let mut c = Composer::new();
        let document = plant::compose(plant, &mut c).unwrap();
        for root in document.roots() {
            walk(root);
        }
    }
}

// =============================================================================
// Sibling Uniqueness / Struct Fields
// =============================================================================

#[test]
fn test_duplicate_sibling_rejected() {
    let mut c = Composer::new();
    let a = int_scalar(&mut c, "V", 1);
    let b = int_scalar(&mut c, "V", 2);
    let err = StructBuilder::group("G", "a group")
        .child(a)
        .unwrap()
        .child(b)
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::DuplicateChild(_)));
}

#[test]
fn test_struct_missing_declared_field_rejected() {
    let mut c = Composer::new();
    plant::register_55a0_types(&mut c).unwrap();

    // A coil without its angle is not a coil.
    let r = c
        .scalar("r", "r location", ScalarType::Float32, Literal::floats(&[1.0]), vec![])
        .unwrap();
    let z = c
        .scalar("z", "z location", ScalarType::Float32, Literal::floats(&[2.0]), vec![])
        .unwrap();
    let err = StructBuilder::typed("M2001", "a coil", plant::COIL_TYPE)
        .child(r)
        .unwrap()
        .child(z)
        .unwrap()
        .finish(&mut c)
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::FieldMismatch(_)));
}

#[test]
fn test_struct_field_order_is_part_of_the_contract() {
    let mut c = Composer::new();
    plant::register_55a0_types(&mut c).unwrap();

    let r = c
        .scalar("r", "r location", ScalarType::Float32, Literal::floats(&[1.0]), vec![])
        .unwrap();
    let z = c
        .scalar("z", "z location", ScalarType::Float32, Literal::floats(&[2.0]), vec![])
        .unwrap();
    let angle = c
        .scalar("angle", "the angle", ScalarType::Float32, Literal::floats(&[0.0]), vec![])
        .unwrap();

    // Same names, wrong order.
    let err = StructBuilder::typed("M2001", "a coil", plant::COIL_TYPE)
        .child(angle)
        .unwrap()
        .child(r)
        .unwrap()
        .child(z)
        .unwrap()
        .finish(&mut c)
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::FieldMismatch(_)));
}

// =============================================================================
// Alias Consistency
// =============================================================================

#[test]
fn test_alias_shape_conflict_rejected() {
    let mut c = Composer::new();
    c.aliased_scalar(
        "V1",
        "a scalar",
        ScalarType::Double,
        Literal::doubles(&[1.0]),
        vec![],
        "GAIN",
    )
    .unwrap();

    // Same alias, shape [4] instead of [1].
    let err = c
        .aliased_array(
            "V2",
            "an array",
            ScalarType::Double,
            &[4],
            Literal::doubles(&[1.0, 2.0, 3.0, 4.0]),
            vec![],
            "GAIN",
        )
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::AliasTypeConflict(_)));
    assert_eq!(c.alias_holders("GAIN").len(), 1);
}

#[test]
fn test_alias_agreement_accepted_and_indexed() {
    let mut c = Composer::new();
    c.aliased_scalar(
        "V1",
        "a scalar",
        ScalarType::Double,
        Literal::doubles(&[1.0]),
        vec![],
        "GAIN",
    )
    .unwrap();
    c.aliased_scalar(
        "V2",
        "another scalar",
        ScalarType::Double,
        Literal::doubles(&[2.0]),
        vec![],
        "GAIN",
    )
    .unwrap();

    let holders = c.alias_holders("GAIN");
    assert_eq!(holders.len(), 2);
    assert_eq!(holders[0].node, "V1");
    assert_eq!(holders[1].node, "V2");
}

// =============================================================================
// Rule Operand Arity
// =============================================================================

#[test]
fn test_rule_operand_arity_checked_at_attachment() {
    let mut c = Composer::new();
    // Three bounds for four elements is neither broadcast nor paired.
    let err = c
        .array(
            "V",
            "an array",
            ScalarType::Double,
            &[4],
            Literal::doubles(&[1.0, 2.0, 3.0, 4.0]),
            vec![ValidationRule::check_max(
                vec![Literal::doubles(&[1.0, 2.0, 3.0])],
                "Check the maximum value",
            )],
        )
        .unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::RuleArityMismatch(_)));
}

// =============================================================================
// Error Paths
// =============================================================================

#[test]
fn test_error_reports_path_from_root() {
    let mut c = Composer::new();
    let bad = c.array(
        "taps",
        "an array",
        ScalarType::Double,
        &[4],
        Literal::doubles(&[1.0]),
        vec![],
    );
    let err = StructBuilder::group("PLANT", "a plant")
        .try_child(bad)
        .unwrap_err();
    assert_eq!(err.path().to_string(), "PLANT::taps");
}

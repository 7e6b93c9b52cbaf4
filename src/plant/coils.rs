//! Coil parameter constructors
//!
//! Two coil struct types exist in the plant: discrete coils located by an
//! (r, z) point and a mounting angle, and loop coils spanning two points
//! and an angular extent. Every coordinate carries a type-check rule;
//! angles additionally carry the +/-180 degree bounds the downstream
//! service re-applies against live values.

use crate::schema::{
    Composer, Literal, ScalarType, SchemaResult, StructBuilder, ValidationRule, VariableNode,
};

/// Struct type of a discrete coil.
pub const COIL_TYPE: &str = "coil";
/// Declared field order of a discrete coil.
pub const COIL_FIELDS: &[&str] = &["r", "z", "angle"];

/// Struct type of a loop coil.
pub const LOOP_COIL_TYPE: &str = "loopcoil";
/// Declared field order of a loop coil.
pub const LOOP_COIL_FIELDS: &[&str] = &["r1", "z1", "r2", "z2", "phi1", "phi2"];

fn type_rule() -> ValidationRule {
    ValidationRule::check_type("Check the type")
}

fn angle_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::check_max(vec![Literal::doubles(&[180.0])], "Maximum allowed angle"),
        ValidationRule::check_min(vec![Literal::doubles(&[-180.0])], "Minimum allowed angle"),
        type_rule(),
    ]
}

fn coordinate(
    c: &mut Composer,
    name: &str,
    description: &str,
    value: f32,
) -> SchemaResult<VariableNode> {
    c.scalar(
        name,
        description,
        ScalarType::Float32,
        Literal::floats(&[value]),
        vec![type_rule()],
    )
}

fn angle(
    c: &mut Composer,
    name: &str,
    description: &str,
    value: f32,
) -> SchemaResult<VariableNode> {
    c.scalar(
        name,
        description,
        ScalarType::Float32,
        Literal::floats(&[value]),
        angle_rules(),
    )
}

/// A discrete coil at (r, z) mounted at `angle_deg` to its main axis.
pub fn discrete_coil(
    c: &mut Composer,
    name: &str,
    description: &str,
    r: f32,
    z: f32,
    angle_deg: f32,
) -> SchemaResult<VariableNode> {
    StructBuilder::typed(name, description, COIL_TYPE)
        .try_child(coordinate(c, "r", "r location of the coil", r))?
        .try_child(coordinate(c, "z", "z location of the coil", z))?
        .try_child(angle(
            c,
            "angle",
            "Angle of the coil w.r.t. to its main axis",
            angle_deg,
        ))?
        .finish(c)
}

/// A loop coil spanning (r1, z1)-(r2, z2) over the [phi1, phi2] arc.
#[allow(clippy::too_many_arguments)]
pub fn loop_coil(
    c: &mut Composer,
    name: &str,
    description: &str,
    r1: f32,
    z1: f32,
    r2: f32,
    z2: f32,
    phi1: f32,
    phi2: f32,
) -> SchemaResult<VariableNode> {
    StructBuilder::typed(name, description, LOOP_COIL_TYPE)
        .try_child(coordinate(c, "r1", "r1 location of the coil", r1))?
        .try_child(coordinate(c, "z1", "z1 location of the coil", z1))?
        .try_child(coordinate(c, "r2", "r2 location of the coil", r2))?
        .try_child(coordinate(c, "z2", "z2 location of the coil", z2))?
        .try_child(angle(c, "phi1", "Starting angle of the loop", phi1))?
        .try_child(angle(c, "phi2", "Ending angle of the loop", phi2))?
        .finish(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> Composer {
        let mut c = Composer::new();
        c.register_struct(COIL_TYPE, COIL_FIELDS).unwrap();
        c.register_struct(LOOP_COIL_TYPE, LOOP_COIL_FIELDS).unwrap();
        c
    }

    #[test]
    fn test_discrete_coil_fields_in_order() {
        let mut c = composer();
        let coil = discrete_coil(&mut c, "M2001", "55.A5.00-MSS-2001", 3.2324, -2.81374, -90.0)
            .unwrap();
        let names: Vec<&str> = coil.children().iter().map(|n| n.name()).collect();
        assert_eq!(names, COIL_FIELDS);
        assert_eq!(coil.declared_type().wire_name(), "coil");
    }

    #[test]
    fn test_angle_bounds_attached() {
        let mut c = composer();
        let coil = discrete_coil(&mut c, "M2001", "a coil", 1.0, 2.0, -90.0).unwrap();
        let angle = coil.child("angle").unwrap();
        assert_eq!(angle.validations().len(), 3);

        // 200 degrees breaks exactly the max bound.
        let violations = angle.check(&Literal::Float(200.0));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Maximum allowed angle");

        assert!(angle.check(&Literal::Float(-90.0)).is_empty());
    }

    #[test]
    fn test_loop_coil_fields_in_order() {
        let mut c = composer();
        let coil = loop_coil(
            &mut c, "M1001", "55.AD.00-MSA-1001", 3.567, -1.653, 3.567, -2.55, 16.05, 47.67,
        )
        .unwrap();
        let names: Vec<&str> = coil.children().iter().map(|n| n.name()).collect();
        assert_eq!(names, LOOP_COIL_FIELDS);
    }
}

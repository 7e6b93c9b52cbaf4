//! Demo plant composition
//!
//! A small plant exercising every schema feature: bounded scalars, arrays
//! with per-element bounds, nested test structs, a shape struct holding
//! gap children, and multi-dimensional arrays-of-struct. Used for consumer
//! integration testing without the real coil tables.

use crate::schema::{
    Composer, Literal, ScalarType, SchemaDocument, SchemaResult, StructBuilder, ValidationRule,
    VariableNode,
};

/// Struct type of a gap between limiter segments.
pub const GAP_TYPE: &str = "gap";
/// Declared field order of a gap.
pub const GAP_FIELDS: &[&str] = &["x0", "y0", "x1", "y1"];

/// Struct type of the test struct.
pub const TEST_STRUCT_TYPE: &str = "teststruct1";
/// Declared field order of the test struct.
pub const TEST_STRUCT_FIELDS: &[&str] = &["var1", "var2", "var3", "var4", "var5"];

/// Struct type of a shape-with-gaps.
pub const SHAPE_TYPE: &str = "shape";
/// Declared field order of a shape.
pub const SHAPE_FIELDS: &[&str] = &["goldgap", "gaps", "cube"];

/// Registers the demo struct types.
pub fn register_types(c: &mut Composer) -> SchemaResult<()> {
    c.register_struct(GAP_TYPE, GAP_FIELDS)?;
    c.register_struct(TEST_STRUCT_TYPE, TEST_STRUCT_FIELDS)?;
    c.register_struct(SHAPE_TYPE, SHAPE_FIELDS)?;
    Ok(())
}

fn type_rule() -> ValidationRule {
    ValidationRule::check_type("Check the type")
}

fn gap_coordinate(c: &mut Composer, name: &str, value: f32) -> SchemaResult<VariableNode> {
    c.scalar(
        name,
        "A gap coordinate",
        ScalarType::Float32,
        Literal::floats(&[value]),
        vec![type_rule()],
    )
}

/// A gap between two limiter points.
pub fn gap(
    c: &mut Composer,
    name: &str,
    description: &str,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
) -> SchemaResult<VariableNode> {
    StructBuilder::typed(name, description, GAP_TYPE)
        .try_child(gap_coordinate(c, "x0", x0))?
        .try_child(gap_coordinate(c, "y0", y0))?
        .try_child(gap_coordinate(c, "x1", x1))?
        .try_child(gap_coordinate(c, "y1", y1))?
        .finish(c)
}

fn bounded_float(
    c: &mut Composer,
    name: &str,
    description: &str,
    value: f32,
    max: f64,
    min: f64,
) -> SchemaResult<VariableNode> {
    c.scalar(
        name,
        description,
        ScalarType::Float32,
        Literal::floats(&[value]),
        vec![
            type_rule(),
            ValidationRule::check_max(vec![Literal::doubles(&[max])], "Check the maximum value"),
            ValidationRule::check_min(vec![Literal::doubles(&[min])], "Check the minimum value"),
        ],
    )
}

fn bounded_int(
    c: &mut Composer,
    name: &str,
    description: &str,
    value: i32,
    max: f64,
    min: f64,
) -> SchemaResult<VariableNode> {
    c.scalar(
        name,
        description,
        ScalarType::Int32,
        Literal::ints(&[value]),
        vec![
            type_rule(),
            ValidationRule::check_max(vec![Literal::doubles(&[max])], "Check the maximum value"),
            ValidationRule::check_min(vec![Literal::doubles(&[min])], "Check the minimum value"),
        ],
    )
}

/// A test struct with four bounded coefficients plus a derived 4-element
/// array whose bounds scale with the coefficients.
pub fn test_struct(
    c: &mut Composer,
    name: &str,
    description: &str,
    var1: f32,
    var2: f32,
    var3: i32,
    var4: i32,
) -> SchemaResult<VariableNode> {
    let delta = 50.0;
    let taps = [var1, var2, var3 as f32, var4 as f32];
    let upper: Vec<f64> = taps.iter().map(|v| f64::from(delta * v + delta)).collect();
    let lower: Vec<f64> = upper.iter().map(|v| -v).collect();
    let var5 = c.array(
        "var5",
        "An array",
        ScalarType::Float32,
        &[4],
        Literal::floats(&taps),
        vec![
            ValidationRule::check_max(
                vec![Literal::Seq(vec![Literal::doubles(&upper)])],
                "Check the maximum value",
            ),
            ValidationRule::check_min(
                vec![Literal::Seq(vec![Literal::doubles(&lower)])],
                "Check the minimum value",
            ),
            type_rule(),
        ],
    );

    StructBuilder::typed(name, description, TEST_STRUCT_TYPE)
        .try_child(bounded_float(c, "var1", "A coefficient", var1, 10.0, -1.0))?
        .try_child(bounded_float(c, "var2", "Another coefficient", var2, 5.0, -1.5))?
        .try_child(bounded_int(c, "var3", "And another coefficient", var3, 10.0, -10.0))?
        .try_child(bounded_int(c, "var4", "And another coefficient", var4, 30.0, -100.0))?
        .try_child(var5)?
        .finish(c)
}

/// A 3x2x4 cube of gaps, named `cube0..cube23` in row-major order.
fn gap_cube(c: &mut Composer, name: &str) -> SchemaResult<VariableNode> {
    let dims = [3, 2, 4];
    let mut elements = Vec::with_capacity(24);
    for i in 0..dims[0] {
        for j in 0..dims[1] {
            for k in 0..dims[2] {
                let flat = i * dims[1] * dims[2] + j * dims[2] + k;
                elements.push(gap(
                    c,
                    &format!("cube{}", flat),
                    "Test gap",
                    i as f32,
                    j as f32,
                    k as f32,
                    0.0,
                )?);
            }
        }
    }
    c.array_of_structs(name, "A cube of test gaps", GAP_TYPE, &dims, elements)
}

/// The shape struct: a reference gap, a row of limiter gaps and the test
/// cube.
pub fn shape(
    c: &mut Composer,
    name: &str,
    description: &str,
    limiter_gaps: Vec<VariableNode>,
) -> SchemaResult<VariableNode> {
    let goldgap = gap(c, "goldgap", "A gold gap", 1.0, 2.0, 3.0, 4.0);
    let count = limiter_gaps.len();
    let gaps = c.array_of_structs("gaps", "The limiter gaps", GAP_TYPE, &[count], limiter_gaps);
    let cube = gap_cube(c, "cube");
    StructBuilder::typed(name, description, SHAPE_TYPE)
        .try_child(goldgap)?
        .try_child(gaps)?
        .try_child(cube)?
        .finish(c)
}

/// Composes the demo plant document.
pub fn compose(c: &mut Composer) -> SchemaResult<SchemaDocument> {
    register_types(c)?;

    let var1 = c.scalar(
        "VAR1",
        "A variable",
        ScalarType::Int32,
        Literal::ints(&[1]),
        vec![
            ValidationRule::check_max(vec![Literal::doubles(&[10.0])], "Check the maximum value"),
            ValidationRule::check_min(vec![Literal::doubles(&[-1.0])], "Check the minimum value"),
            type_rule(),
        ],
    )?;

    let var2 = c.array(
        "VAR2",
        "An array",
        ScalarType::Float32,
        &[4],
        Literal::floats(&[7.0, 8.0, 9.0, 0.0]),
        vec![
            ValidationRule::check_max(
                vec![Literal::Seq(vec![Literal::doubles(&[10.0, 11.0, 12.0, 13.0])])],
                "Check the maximum value",
            ),
            ValidationRule::check_min(
                vec![Literal::Seq(vec![Literal::doubles(&[-1.0, -2.0, -3.0, -4.0])])],
                "Check the minimum value",
            ),
            type_rule(),
        ],
    )?;

    let var3 = test_struct(c, "VAR3", "A complex structure", 1.0, 2.0, 3, 4)?;

    let limiter = vec![
        gap(c, "gap1", "A gap", 0.0, 0.0, 1.0, 1.0)?,
        gap(c, "gap2", "Another gap", 0.0, 0.0, 2.0, 3.0)?,
        gap(c, "gap3", "Another gap", 0.0, 0.0, 2.0, 4.0)?,
    ];
    let var4 = shape(c, "VAR4", "A shape", limiter)?;

    let elements = vec![
        gap(c, "gap4", "A gap", 0.0, 0.0, 1.0, 1.0)?,
        gap(c, "gap5", "Another gap", 0.0, 0.0, 2.0, 3.0)?,
        gap(c, "gap6", "A gap", 0.0, 0.0, 1.0, 1.0)?,
        gap(c, "gap7", "Another gap", 0.0, 0.0, 2.0, 3.0)?,
    ];
    let var5 = c.array_of_structs(
        "VAR5",
        "A multi dimensional variable",
        GAP_TYPE,
        &[2, 2],
        elements,
    )?;

    let mut document = SchemaDocument::new();
    document.push_root(var1)?;
    document.push_root(var2)?;
    document.push_root(var3)?;
    document.push_root(var4)?;
    document.push_root(var5)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_composes() {
        let mut c = Composer::new();
        let document = compose(&mut c).unwrap();
        assert_eq!(document.roots().len(), 5);

        let cube = document.root("VAR4").unwrap().child("cube").unwrap();
        assert_eq!(cube.children().len(), 24);
        assert_eq!(cube.child_at(&[0, 1, 3]).unwrap().name(), "cube7");
        assert_eq!(cube.child_at(&[2, 1, 3]).unwrap().name(), "cube23");
    }

    #[test]
    fn test_multi_dim_indexing() {
        let mut c = Composer::new();
        let document = compose(&mut c).unwrap();
        let var5 = document.root("VAR5").unwrap();
        assert_eq!(var5.child_at(&[0, 0]).unwrap().name(), "gap4");
        assert_eq!(var5.child_at(&[1, 1]).unwrap().name(), "gap7");
        assert!(var5.child_at(&[2, 0]).is_none());
    }

    #[test]
    fn test_derived_array_bounds() {
        let mut c = Composer::new();
        register_types(&mut c).unwrap();
        let node = test_struct(&mut c, "T", "a test struct", 1.0, 2.0, 3, 4).unwrap();
        let var5 = node.child("var5").unwrap();

        // Bounds are 50*v + 50 per element: [100, 150, 200, 250].
        assert!(var5
            .check(&Literal::floats(&[99.0, 149.0, 199.0, 249.0]))
            .is_empty());
        let violations = var5.check(&Literal::floats(&[101.0, 0.0, 0.0, 251.0]));
        let indices: Vec<usize> = violations.iter().map(|v| v.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }
}

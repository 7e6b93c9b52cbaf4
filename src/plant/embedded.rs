//! Embedded subsystem settings
//!
//! Each power-supply controller carries the same block of embedded
//! configuration parameters: window-open/close times, chopper frequency,
//! the input filter coefficients and the chopper equaliser taps, plus a
//! library grouping root. Instances share a library alias so their values
//! can be transplanted between controllers of the same type.

use crate::schema::{
    Composer, Literal, ScalarType, SchemaResult, StructBuilder, ValidationRule, VariableNode,
};

/// Struct type of one embedded settings block.
pub const EMBEDDED_TYPE: &str = "embedded";
/// Declared field order of the embedded settings block.
pub const EMBEDDED_FIELDS: &[&str] = &[
    "WO",
    "EO",
    "CHOPPERF",
    "FILTER",
    "CHOPPEREQIN",
    "CHOPPEREQOUT",
    "LIBRARY",
];

fn type_rule() -> ValidationRule {
    ValidationRule::check_type("Check the type")
}

fn bounded_time(
    c: &mut Composer,
    name: &str,
    description: &str,
    value: f32,
    max: f64,
    max_message: &str,
    min_message: &str,
) -> SchemaResult<VariableNode> {
    c.scalar(
        name,
        description,
        ScalarType::Float32,
        Literal::floats(&[value]),
        vec![
            ValidationRule::check_max(vec![Literal::doubles(&[max])], max_message),
            ValidationRule::check_min(vec![Literal::doubles(&[0.0])], min_message),
            type_rule(),
        ],
    )
}

fn equaliser(
    c: &mut Composer,
    name: &str,
    description: &str,
    taps: &[f64; 4],
) -> SchemaResult<VariableNode> {
    c.array(
        name,
        description,
        ScalarType::Double,
        &[4],
        Literal::doubles(taps),
        vec![
            ValidationRule::check_max(
                vec![Literal::Seq(vec![Literal::doubles(&[1.001, 1.001, 1.001, 1.001])])],
                "Check the maximum value",
            ),
            ValidationRule::check_min(
                vec![Literal::Seq(vec![Literal::doubles(&[
                    -1.001, -1.001, -1.001, -1.001,
                ])])],
                "Check the minimum value",
            ),
            type_rule(),
        ],
    )
}

/// One embedded settings block, optionally aliased for cross-library
/// value transplanting.
pub fn embedded(
    c: &mut Composer,
    name: &str,
    description: &str,
    alias: Option<&str>,
) -> SchemaResult<VariableNode> {
    let wo = bounded_time(
        c,
        "WO",
        "WO time in seconds",
        1.0,
        3600.0,
        "The maximum WO time (cannot be greater than the pulse length)",
        "The WO time must be greater than zero",
    );
    let eo = bounded_time(
        c,
        "EO",
        "EO time in seconds",
        1.0,
        3600.0,
        "The maximum EO time (cannot be greater than the pulse length)",
        "The EO time must be greater than zero",
    );
    let chopper_frequency = bounded_time(
        c,
        "CHOPPERF",
        "Chopper frequency",
        1.0,
        500_000.0,
        "The maximum chopper frequency",
        "The minimum chopper frequency",
    );
    // Numerator and denominator coefficient rows of the input filter.
    let filter = c.array(
        "FILTER",
        "The input filter",
        ScalarType::Double,
        &[2, 2],
        Literal::Seq(vec![
            Literal::doubles(&[1.0, 0.0]),
            Literal::doubles(&[0.0001, 1.0]),
        ]),
        vec![type_rule()],
    );
    let eq_in = equaliser(
        c,
        "CHOPPEREQIN",
        "Chopper equaliser input taps",
        &[0.8, 0.9, 1.0, 1.0],
    );
    let eq_out = equaliser(
        c,
        "CHOPPEREQOUT",
        "Chopper equaliser output taps",
        &[-1.0, -1.0, 1.0, 1.0],
    );
    let library = c.library(
        "LIBRARY",
        "Library to group all the embedded configuration parameters",
        None,
        Vec::new(),
    );

    let mut builder = StructBuilder::typed(name, description, EMBEDDED_TYPE);
    if let Some(alias) = alias {
        builder = builder.alias(alias);
    }
    builder
        .try_child(wo)?
        .try_child(eo)?
        .try_child(chopper_frequency)?
        .try_child(filter)?
        .try_child(eq_in)?
        .try_child(eq_out)?
        .try_child(library)?
        .finish(c)
}

/// The plant's embedded section: one settings block per power supply, all
/// sharing one alias.
pub fn embedded_list(c: &mut Composer, name: &str) -> SchemaResult<VariableNode> {
    StructBuilder::group(name, "55 A0 embedded subsystem settings")
        .try_child(embedded(
            c,
            "PS1",
            "Power supply 1 embedded settings",
            Some("55A0-EMBEDDED"),
        ))?
        .try_child(embedded(
            c,
            "PS2",
            "Power supply 2 embedded settings",
            Some("55A0-EMBEDDED"),
        ))?
        .finish(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> Composer {
        let mut c = Composer::new();
        c.register_struct(EMBEDDED_TYPE, EMBEDDED_FIELDS).unwrap();
        c
    }

    #[test]
    fn test_embedded_field_order() {
        let mut c = composer();
        let node = embedded(&mut c, "PS1", "a block", None).unwrap();
        let names: Vec<&str> = node.children().iter().map(|n| n.name()).collect();
        assert_eq!(names, EMBEDDED_FIELDS);
        assert!(node.child("LIBRARY").unwrap().is_library());
    }

    #[test]
    fn test_equaliser_bounds_per_element() {
        let mut c = composer();
        let node = embedded(&mut c, "PS1", "a block", None).unwrap();
        let eq = node.child("CHOPPEREQIN").unwrap();

        assert!(eq.check(&Literal::doubles(&[0.8, 0.9, 1.0, 1.0])).is_empty());

        let violations = eq.check(&Literal::doubles(&[1.2, 0.9, 1.0, 1.0]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].index, 0);
        assert_eq!(violations[0].message, "Check the maximum value");
    }

    #[test]
    fn test_instances_share_alias() {
        let mut c = composer();
        embedded_list(&mut c, "EMBEDDED").unwrap();
        let holders = c.alias_holders("55A0-EMBEDDED");
        assert_eq!(holders.len(), 2);
        assert_eq!(holders[0].node, "PS1");
        assert_eq!(holders[1].node, "PS2");
    }
}

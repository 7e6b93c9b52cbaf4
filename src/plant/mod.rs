//! Plant 55.A0 magnetics configuration
//!
//! Domain composition for the magnetics diagnostic plant: discrete and
//! loop coil trees built from the survey coordinate tables, the embedded
//! power-supply settings, and a small demo plant for consumer integration
//! tests. All composition goes through the schema composer; the coil
//! tables themselves are opaque data.

mod coils;
mod demo;
mod discrete_coils;
mod embedded;
mod loop_coils;

pub use coils::{discrete_coil, loop_coil, COIL_FIELDS, COIL_TYPE, LOOP_COIL_FIELDS, LOOP_COIL_TYPE};
pub use demo::{gap, shape, test_struct, GAP_FIELDS, GAP_TYPE, SHAPE_FIELDS, SHAPE_TYPE};
pub use embedded::{embedded, embedded_list, EMBEDDED_FIELDS, EMBEDDED_TYPE};

use crate::schema::{Composer, SchemaDocument, SchemaResult, StructBuilder, VariableNode};

/// Selects which plant composition to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plant {
    /// The 55.A0 magnetics plant
    P55A0,
    /// The demo plant
    Demo,
}

impl Plant {
    pub fn name(&self) -> &'static str {
        match self {
            Plant::P55A0 => "55A0",
            Plant::Demo => "DEMO0",
        }
    }
}

/// Composes the selected plant into a frozen document, building the alias
/// index as a side effect on the given composer.
pub fn compose(plant: Plant, c: &mut Composer) -> SchemaResult<SchemaDocument> {
    match plant {
        Plant::P55A0 => compose_55a0(c),
        Plant::Demo => demo::compose(c),
    }
}

/// Registers the struct types of the 55.A0 plant.
pub fn register_55a0_types(c: &mut Composer) -> SchemaResult<()> {
    c.register_struct(COIL_TYPE, COIL_FIELDS)?;
    c.register_struct(LOOP_COIL_TYPE, LOOP_COIL_FIELDS)?;
    c.register_struct(EMBEDDED_TYPE, EMBEDDED_FIELDS)?;
    Ok(())
}

fn discrete_coil_group(
    c: &mut Composer,
    name: &str,
    description: &str,
    rows: &[discrete_coils::DiscreteCoilRow],
) -> SchemaResult<VariableNode> {
    let mut builder = StructBuilder::group(name, description);
    for (coil, coil_description, r, z, angle) in rows {
        builder = builder.try_child(discrete_coil(c, coil, coil_description, *r, *z, *angle))?;
    }
    builder.finish(c)
}

fn loop_coil_group(
    c: &mut Composer,
    name: &str,
    description: &str,
    rows: &[loop_coils::LoopCoilRow],
) -> SchemaResult<VariableNode> {
    let mut builder = StructBuilder::group(name, description);
    for (coil, coil_description, r1, z1, r2, z2, phi1, phi2) in rows {
        builder = builder.try_child(loop_coil(
            c,
            coil,
            coil_description,
            *r1,
            *z1,
            *r2,
            *z2,
            *phi1,
            *phi2,
        ))?;
    }
    builder.finish(c)
}

/// Composes the 55.A0 plant: discrete coil sections, loop coil sections
/// and the embedded power-supply settings.
pub fn compose_55a0(c: &mut Composer) -> SchemaResult<SchemaDocument> {
    register_55a0_types(c)?;

    let discrete = StructBuilder::group("MLFS", "55 A0 discrete coils")
        .try_child(discrete_coil_group(
            c,
            "A5",
            "55 A5 discrete coils",
            discrete_coils::A5_COILS,
        ))?
        .try_child(discrete_coil_group(
            c,
            "A9",
            "55 A9 discrete coils",
            discrete_coils::A9_COILS,
        ))?
        .try_child(discrete_coil_group(
            c,
            "AL",
            "55 AL discrete coils",
            discrete_coils::AL_COILS,
        ))?
        .finish(c)?;

    let loops = StructBuilder::group("MSAS", "55 A0 loop coils")
        .try_child(loop_coil_group(
            c,
            "AD",
            "55 AD loop coils",
            loop_coils::AD_COILS,
        ))?
        .finish(c)?;

    let embedded = embedded_list(c, "EMBEDDED")?;

    let mut document = SchemaDocument::new();
    document.push_root(discrete)?;
    document.push_root(loops)?;
    document.push_root(embedded)?;
    Ok(document)
}

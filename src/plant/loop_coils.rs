//! Loop coil coordinate tables
//!
//! One row per saddle loop: (name, description, r1, z1, r2, z2, phi1, phi2).

/// (name, description, r1, z1, r2, z2, phi1, phi2)
pub(crate) type LoopCoilRow = (&'static str, &'static str, f32, f32, f32, f32, f32, f32);

/// 55.AD saddle loops
pub(crate) const AD_COILS: &[LoopCoilRow] = &[
    ("M1001", "55.AD.00-MSA-1001", 3.567, -1.653, 3.567, -2.55, 16.05, 47.67),
    ("M1013", "55.AD.00-MSA-1013", 8.740, 1.84, 8.36, 2.68, 35.13, 44.67),
];

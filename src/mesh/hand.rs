use gfx_maths::*;

use super::{push_box, HandSpec, MeshData};

/// Builds a clock hand as a thin rectangular prism spanning from the pivot at
/// the origin to `length` along +Y, with a `thickness` cross-section in X and
/// Z. At zero rotation the hand points at 12 o'clock.
///
/// Preconditions: `length > 0` and `thickness > 0`.
pub fn generate(spec: &HandSpec, color: Vec4) -> MeshData {
    assert!(spec.length > 0.0, "hand length must be positive");
    assert!(spec.thickness > 0.0, "hand thickness must be positive");

    let half_thickness = spec.thickness * 0.5;
    let half_length = spec.length * 0.5;

    let mut mesh = MeshData::default();
    push_box(
        &mut mesh,
        Vec3::new(0.0, half_length, 0.0),
        Vec3::new(half_thickness, half_length, half_thickness),
        0.0,
        color,
    );
    mesh
}

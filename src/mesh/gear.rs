use gfx_maths::*;

use super::{push_box, Face, GearSpec, MeshData, Vertex};

/// Angular samples around the main circumference.
const RING_SEGMENTS: u32 = 32;
/// Angular samples around the tube cross-section.
const TUBE_SEGMENTS: u32 = 32;
/// How far a tooth extrudes past the outer radius, in tube radii.
const TOOTH_EXTRUDE: f32 = 0.5;
/// How deep a tooth roots into the torus body, in tube radii.
const TOOTH_ROOT: f32 = 0.5;
/// Share of the pitch arc occupied by one tooth.
const TOOTH_ARC: f32 = 0.4;

/// Builds a gear wheel as a torus with one rectangular tooth stamped per
/// `spec.teeth`, evenly spaced around the circumference. The wheel lies in
/// the XY plane; the rotation axis is +Z.
///
/// Preconditions: `outer_radius > inner_radius > 0` and `teeth > 0`.
pub fn generate(spec: &GearSpec, color: Vec4) -> MeshData {
    assert!(spec.inner_radius > 0.0, "inner radius must be positive");
    assert!(
        spec.outer_radius > spec.inner_radius,
        "outer radius must exceed inner radius"
    );
    assert!(spec.teeth > 0, "tooth count must be positive");

    let tube_radius = (spec.outer_radius - spec.inner_radius) * 0.5;
    let ring_radius = spec.inner_radius + tube_radius;
    let two_pi = 2.0 * std::f32::consts::PI;

    let mut mesh = MeshData::default();

    for i in 0..=RING_SEGMENTS {
        let theta = two_pi * i as f32 / RING_SEGMENTS as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        for j in 0..=TUBE_SEGMENTS {
            let phi = two_pi * j as f32 / TUBE_SEGMENTS as f32;
            let (sin_p, cos_p) = phi.sin_cos();

            let radial = ring_radius + tube_radius * cos_p;
            mesh.vertices.push(Vertex {
                position: Vec3::new(radial * cos_t, radial * sin_t, tube_radius * sin_p),
                // radial vector from the tube center, unit length by construction
                normal: Vec3::new(cos_p * cos_t, cos_p * sin_t, sin_p),
                color,
            });
        }
    }

    // both triangles split the quad along the current..next+1 diagonal and
    // wind counter-clockwise seen from outside the tube
    for i in 0..RING_SEGMENTS {
        for j in 0..TUBE_SEGMENTS {
            let current = i * (TUBE_SEGMENTS + 1) + j;
            let next = (i + 1) * (TUBE_SEGMENTS + 1) + j;
            mesh.faces.push(Face {
                indices: [current, next, next + 1],
            });
            mesh.faces.push(Face {
                indices: [current, next + 1, current + 1],
            });
        }
    }

    // One tooth per pitch, rooted into the torus and extruded outwards.
    let radial_outer = spec.outer_radius + TOOTH_EXTRUDE * tube_radius;
    let radial_inner = spec.outer_radius - TOOTH_ROOT * tube_radius;
    let half_radial = (radial_outer - radial_inner) * 0.5;
    let pitch_arc = two_pi * spec.outer_radius / spec.teeth as f32;
    let half_tangential = TOOTH_ARC * pitch_arc * 0.5;
    let half_axial = tube_radius * 0.5;

    for k in 0..spec.teeth {
        let alpha = two_pi * k as f32 / spec.teeth as f32;
        push_box(
            &mut mesh,
            Vec3::new(radial_inner + half_radial, 0.0, 0.0),
            Vec3::new(half_radial, half_tangential, half_axial),
            alpha,
            color,
        );
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray() -> Vec4 {
        Vec4::new(0.7, 0.7, 0.75, 1.0)
    }

    #[test]
    fn indices_stay_in_bounds() {
        for spec in [
            GearSpec::new(1.0, 0.5, 60, 1.0),
            GearSpec::new(0.2, 0.1, 12, -5.0),
            GearSpec::new(3.0, 0.25, 7, 0.5),
            GearSpec::new(0.02, 0.01, 1, 10.0),
        ] {
            let mesh = generate(&spec, gray());
            let vertex_count = mesh.vertices.len() as u32;
            for face in &mesh.faces {
                for index in face.indices {
                    assert!(index < vertex_count);
                }
            }
            assert_eq!(mesh.index_count() % 3, 0);
        }
    }

    #[test]
    fn face_count_follows_resolution_and_teeth() {
        let spec = GearSpec::new(1.0, 0.5, 60, 1.0);
        let mesh = generate(&spec, gray());
        let torus_faces = (RING_SEGMENTS * TUBE_SEGMENTS * 2) as usize;
        assert_eq!(mesh.faces.len(), torus_faces + 60 * 12);
        assert_eq!(
            mesh.vertices.len(),
            ((RING_SEGMENTS + 1) * (TUBE_SEGMENTS + 1)) as usize + 60 * 24
        );
    }

    #[test]
    fn wheel_fits_its_radii() {
        let spec = GearSpec::new(1.0, 0.5, 24, 1.0);
        let mesh = generate(&spec, gray());
        let (min, max) = mesh.bounds().unwrap();

        let tube_radius = (spec.outer_radius - spec.inner_radius) * 0.5;
        let tooth_tip = spec.outer_radius + TOOTH_EXTRUDE * tube_radius;
        assert!((max.x - tooth_tip).abs() < 1e-4);
        // axial extent comes from the torus tube alone
        assert!((max.z - tube_radius).abs() < 1e-4);
        assert!((min.z + tube_radius).abs() < 1e-4);
    }

    #[test]
    fn torus_normals_are_unit_length() {
        let spec = GearSpec::new(1.0, 0.5, 12, 1.0);
        let mesh = generate(&spec, gray());
        let torus_vertices = ((RING_SEGMENTS + 1) * (TUBE_SEGMENTS + 1)) as usize;
        for vertex in &mesh.vertices[..torus_vertices] {
            let n = vertex.normal;
            let len = (n.x * n.x + n.y * n.y + n.z * n.z).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn winding_agrees_with_stored_normals() {
        // every triangle must wind counter-clockwise seen from outside, so
        // its geometric normal points the same way as the vertex normals
        for spec in [
            GearSpec::new(1.0, 0.5, 12, 1.0),
            GearSpec::new(0.2, 0.1, 5, -5.0),
        ] {
            let mesh = generate(&spec, gray());
            for face in &mesh.faces {
                let [a, b, c] = face.indices.map(|i| mesh.vertices[i as usize]);
                let (e1x, e1y, e1z) = (
                    b.position.x - a.position.x,
                    b.position.y - a.position.y,
                    b.position.z - a.position.z,
                );
                let (e2x, e2y, e2z) = (
                    c.position.x - a.position.x,
                    c.position.y - a.position.y,
                    c.position.z - a.position.z,
                );
                let geometric = Vec3::new(
                    e1y * e2z - e1z * e2y,
                    e1z * e2x - e1x * e2z,
                    e1x * e2y - e1y * e2x,
                );
                let n = a.normal + b.normal + c.normal;
                let dot = geometric.x * n.x + geometric.y * n.y + geometric.z * n.z;
                assert!(
                    dot > 0.0,
                    "face {:?} winds against its normals",
                    face.indices
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn zero_teeth_is_a_precondition_violation() {
        generate(&GearSpec::new(1.0, 0.5, 0, 1.0), gray());
    }

    #[test]
    #[should_panic]
    fn inverted_radii_are_a_precondition_violation() {
        generate(&GearSpec::new(0.5, 1.0, 12, 1.0), gray());
    }
}

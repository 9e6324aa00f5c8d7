pub mod gear;
pub mod hand;

use gfx_maths::*;

/// Shape and nominal speed of one gear wheel. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSpec {
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub teeth: u32,
    /// Rotation rate in revolutions per minute. Negative values rotate the
    /// other way around the +Z axis.
    pub rpm: f32,
}

impl GearSpec {
    pub fn new(outer_radius: f32, inner_radius: f32, teeth: u32, rpm: f32) -> Self {
        Self {
            outer_radius,
            inner_radius,
            teeth,
            rpm,
        }
    }

    /// Spec for a gear meshing with `driver`: counter-rotating, with the
    /// angular rate scaled by the tooth ratio so the tooth-pitch velocity
    /// matches at the contact point.
    pub fn driven_by(driver: &GearSpec, outer_radius: f32, inner_radius: f32, teeth: u32) -> Self {
        Self {
            outer_radius,
            inner_radius,
            teeth,
            rpm: -driver.rpm * driver.teeth as f32 / teeth as f32,
        }
    }
}

/// Shape of one clock hand (also used for the hour markers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSpec {
    pub length: f32,
    pub thickness: f32,
}

impl HandSpec {
    pub fn new(length: f32, thickness: f32) -> Self {
        Self { length, thickness }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Face {
    pub indices: [u32; 3],
}

/// A static triangle mesh. Built once by a generator in this module,
/// immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl MeshData {
    pub fn index_count(&self) -> usize {
        self.faces.len() * 3
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        let mut min = first;
        let mut max = first;
        for vertex in &self.vertices[1..] {
            let p = vertex.position;
            min = Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some((min, max))
    }
}

fn rotate_z(v: Vec3, cos: f32, sin: f32) -> Vec3 {
    Vec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Stamps an axis-aligned box (rotated about +Z by `angle_z`) into `mesh`,
/// with per-face normals. Emits 24 vertices and 12 faces.
pub(crate) fn push_box(
    mesh: &mut MeshData,
    center: Vec3,
    half_extents: Vec3,
    angle_z: f32,
    color: Vec4,
) {
    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);
    let (sin, cos) = angle_z.sin_cos();

    // (face normal, four corners counter-clockwise seen from outside)
    let faces = [
        (
            Vec3::new(0.0, 0.0, 1.0),
            [
                Vec3::new(-hx, -hy, hz),
                Vec3::new(hx, -hy, hz),
                Vec3::new(hx, hy, hz),
                Vec3::new(-hx, hy, hz),
            ],
        ),
        (
            Vec3::new(0.0, 0.0, -1.0),
            [
                Vec3::new(hx, -hy, -hz),
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(-hx, hy, -hz),
                Vec3::new(hx, hy, -hz),
            ],
        ),
        (
            Vec3::new(0.0, 1.0, 0.0),
            [
                Vec3::new(-hx, hy, hz),
                Vec3::new(hx, hy, hz),
                Vec3::new(hx, hy, -hz),
                Vec3::new(-hx, hy, -hz),
            ],
        ),
        (
            Vec3::new(0.0, -1.0, 0.0),
            [
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(hx, -hy, -hz),
                Vec3::new(hx, -hy, hz),
                Vec3::new(-hx, -hy, hz),
            ],
        ),
        (
            Vec3::new(1.0, 0.0, 0.0),
            [
                Vec3::new(hx, -hy, hz),
                Vec3::new(hx, -hy, -hz),
                Vec3::new(hx, hy, -hz),
                Vec3::new(hx, hy, hz),
            ],
        ),
        (
            Vec3::new(-1.0, 0.0, 0.0),
            [
                Vec3::new(-hx, -hy, -hz),
                Vec3::new(-hx, -hy, hz),
                Vec3::new(-hx, hy, hz),
                Vec3::new(-hx, hy, -hz),
            ],
        ),
    ];

    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u32;
        let normal = rotate_z(normal, cos, sin);
        for corner in corners {
            mesh.vertices.push(Vertex {
                position: rotate_z(center + corner, cos, sin),
                normal,
                color,
            });
        }
        mesh.faces.push(Face {
            indices: [base, base + 1, base + 2],
        });
        mesh.faces.push(Face {
            indices: [base + 2, base + 3, base],
        });
    }
}

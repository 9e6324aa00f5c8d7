use gfx_maths::*;

/// Per-object placement, produced fresh each frame by the kinematics
/// functions and consumed immediately by the draw pass.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quaternion,
    pub scale: Vec3,
}

impl Transform {
    pub fn get_model_matrix(&self) -> Mat4 {
        Mat4::local_to_world(self.position, self.rotation, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            rotation: Quaternion::identity(),
            scale: Vec3::one(),
        }
    }
}

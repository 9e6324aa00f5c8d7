use gfx_maths::Vec4;

use crate::graphics::{BufferHandle, GraphicsBackend, GraphicsResult};
use crate::mesh::{gear, hand, GearSpec, HandSpec, MeshData};

/// A gear wheel in the scene: its immutable spec and mesh, plus the backend
/// buffers once uploaded. The buffer pair is created at most once and
/// released exactly once.
pub struct GearModel {
    pub spec: GearSpec,
    mesh: MeshData,
    buffers: Option<BufferHandle>,
}

impl GearModel {
    pub fn new(spec: GearSpec, color: Vec4) -> Self {
        Self {
            mesh: gear::generate(&spec, color),
            spec,
            buffers: None,
        }
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn handle(&self) -> Option<BufferHandle> {
        self.buffers
    }

    pub(crate) fn upload(&mut self, backend: &mut dyn GraphicsBackend) -> GraphicsResult<()> {
        if self.buffers.is_none() {
            self.buffers = Some(backend.create_mesh_buffers(&self.mesh)?);
        }
        Ok(())
    }

    pub(crate) fn release(&mut self, backend: &mut dyn GraphicsBackend) -> GraphicsResult<()> {
        if let Some(handle) = self.buffers.take() {
            backend.destroy_mesh_buffers(handle)?;
        }
        Ok(())
    }
}

/// A clock hand (or hour marker) in the scene.
pub struct HandModel {
    pub spec: HandSpec,
    mesh: MeshData,
    buffers: Option<BufferHandle>,
}

impl HandModel {
    pub fn new(spec: HandSpec, color: Vec4) -> Self {
        Self {
            mesh: hand::generate(&spec, color),
            spec,
            buffers: None,
        }
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn handle(&self) -> Option<BufferHandle> {
        self.buffers
    }

    pub(crate) fn upload(&mut self, backend: &mut dyn GraphicsBackend) -> GraphicsResult<()> {
        if self.buffers.is_none() {
            self.buffers = Some(backend.create_mesh_buffers(&self.mesh)?);
        }
        Ok(())
    }

    pub(crate) fn release(&mut self, backend: &mut dyn GraphicsBackend) -> GraphicsResult<()> {
        if let Some(handle) = self.buffers.take() {
            backend.destroy_mesh_buffers(handle)?;
        }
        Ok(())
    }
}

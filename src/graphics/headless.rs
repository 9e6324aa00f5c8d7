use std::collections::HashMap;

use gfx_maths::Mat4;
use log::trace;

use crate::mesh::MeshData;

use super::{BufferHandle, GraphicsBackend, GraphicsError, GraphicsResult};

/// A backend without a graphics device behind it: validates handles, records
/// every upload and draw, and logs at trace level. Lets the scene run (and be
/// tested) without a window or GPU.
pub struct HeadlessBackend {
    next_handle: u64,
    buffers: HashMap<BufferHandle, UploadedMesh>,
    current_matrix: Mat4,
    draws: Vec<DrawCall>,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertex/index counts retained for an uploaded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadedMesh {
    pub vertex_count: usize,
    pub index_count: usize,
}

/// One recorded draw: which buffers, under which model matrix.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub handle: BufferHandle,
    pub model_matrix: Mat4,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            buffers: HashMap::new(),
            current_matrix: Mat4::identity(),
            draws: Vec::new(),
        }
    }

    pub fn live_buffer_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Forgets recorded draws; uploaded buffers stay alive.
    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl GraphicsBackend for HeadlessBackend {
    fn create_mesh_buffers(&mut self, mesh: &MeshData) -> GraphicsResult<BufferHandle> {
        if mesh.vertices.is_empty() || mesh.faces.is_empty() {
            return Err(GraphicsError::EmptyMesh);
        }
        let handle = BufferHandle(self.next_handle);
        self.next_handle += 1;
        self.buffers.insert(
            handle,
            UploadedMesh {
                vertex_count: mesh.vertices.len(),
                index_count: mesh.index_count(),
            },
        );
        trace!(
            "created {:?}: {} vertices, {} indices",
            handle,
            mesh.vertices.len(),
            mesh.index_count()
        );
        Ok(handle)
    }

    fn set_model_matrix(&mut self, matrix: Mat4) -> GraphicsResult<()> {
        self.current_matrix = matrix;
        Ok(())
    }

    fn draw_indexed(&mut self, handle: BufferHandle) -> GraphicsResult<()> {
        let mesh = self
            .buffers
            .get(&handle)
            .ok_or(GraphicsError::InvalidHandle(handle))?;
        trace!("draw {:?}: {} indices", handle, mesh.index_count);
        self.draws.push(DrawCall {
            handle,
            model_matrix: self.current_matrix,
        });
        Ok(())
    }

    fn destroy_mesh_buffers(&mut self, handle: BufferHandle) -> GraphicsResult<()> {
        self.buffers
            .remove(&handle)
            .ok_or(GraphicsError::InvalidHandle(handle))?;
        trace!("destroyed {:?}", handle);
        Ok(())
    }
}

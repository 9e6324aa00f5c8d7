pub mod headless;

use gfx_maths::Mat4;

use crate::mesh::MeshData;

/// Error type for every function in the graphics layer
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum GraphicsError {
    /// A handle that was never allocated, or was already destroyed.
    #[error("Invalid buffer handle: {0:?}")]
    InvalidHandle(BufferHandle),
    /// Uploading a mesh without any geometry.
    #[error("Refusing to upload an empty mesh")]
    EmptyMesh,
    /// All errors for which no specific variant is available
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GraphicsResult<T> = Result<T, GraphicsError>;

/// Opaque handle to one vertex/index buffer pair owned by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u64);

/// The capability surface the scene core needs from a rendering backend:
/// allocate and release buffer pairs, upload the model matrix uniform, and
/// issue indexed triangle-list draws. Window and shader management live with
/// the backend, not here.
pub trait GraphicsBackend {
    /// Allocates a vertex/index buffer pair from the mesh's raw arrays.
    fn create_mesh_buffers(&mut self, mesh: &MeshData) -> GraphicsResult<BufferHandle>;

    /// Uploads the model matrix used by subsequent draws.
    fn set_model_matrix(&mut self, matrix: Mat4) -> GraphicsResult<()>;

    /// Binds the handle and draws its full index range as a triangle list.
    fn draw_indexed(&mut self, handle: BufferHandle) -> GraphicsResult<()>;

    /// Releases the buffer pair. The handle must not be used afterwards.
    fn destroy_mesh_buffers(&mut self, handle: BufferHandle) -> GraphicsResult<()>;
}

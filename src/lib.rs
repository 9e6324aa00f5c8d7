pub mod core;
pub mod graphics;
pub mod mesh;
pub mod scene;

pub mod prelude {
    pub use crate::core;
    pub use crate::graphics;
    pub use crate::mesh;
    pub use crate::scene;
    pub use gfx_maths::*;
}

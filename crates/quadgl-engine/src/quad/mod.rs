//! The indexed quad: fixed geometry, fixed shader sources, and the scene that
//! owns their GPU objects.

mod scene;
mod shaders;

pub use scene::{quad_vertices, QuadScene, QUAD_INDICES, QUAD_VERTICES};
pub use shaders::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE};

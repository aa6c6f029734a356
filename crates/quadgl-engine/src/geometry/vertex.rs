use bytemuck::{Pod, Zeroable};

use crate::gl::VertexAttribute;

/// Position-only vertex, `location = 0` in the vertex shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const POSITION: VertexAttribute = VertexAttribute::packed_f32(0, 3);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

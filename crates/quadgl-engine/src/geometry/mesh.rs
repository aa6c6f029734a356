use crate::gl::{Buffer, BufferKind, GlDriver, GlError, VertexArray};

use super::vertex::Vertex;

/// Indexed triangle mesh living in GPU memory.
///
/// Owns one vertex array, one vertex buffer and one element buffer. The vertex
/// array records both the position layout and the element buffer binding, so
/// drawing only needs the vertex array bound.
#[derive(Debug)]
pub struct Mesh<D: GlDriver> {
    vertex_array: VertexArray<D>,
    vertex_buffer: Buffer<D>,
    element_buffer: Buffer<D>,
    index_count: i32,
}

impl<D: GlDriver> Mesh<D> {
    /// Uploads `vertices` and `indices`.
    ///
    /// Byte sizes come from the slices themselves: `12 * vertices.len()` for the
    /// vertex buffer and `4 * indices.len()` for the element buffer.
    pub fn upload(gl: &D, vertices: &[Vertex], indices: &[u32]) -> Result<Self, GlError> {
        let index_count = draw_count(indices.len())?;

        let vertex_array = VertexArray::new(gl)?;
        vertex_array.bind(gl);

        let vertex_buffer =
            match Buffer::with_data(gl, BufferKind::Vertex, bytemuck::cast_slice(vertices)) {
                Ok(b) => b,
                Err(e) => {
                    VertexArray::unbind(gl);
                    vertex_array.release(gl);
                    return Err(e);
                }
            };

        let element_buffer =
            match Buffer::with_data(gl, BufferKind::Element, bytemuck::cast_slice(indices)) {
                Ok(b) => b,
                Err(e) => {
                    VertexArray::unbind(gl);
                    vertex_buffer.release(gl);
                    vertex_array.release(gl);
                    return Err(e);
                }
            };

        vertex_array.set_attribute(gl, Vertex::POSITION);

        // The attribute pointer already captured the vertex buffer. The element
        // buffer must stay bound until the vertex array is unbound.
        gl.bind_buffer(BufferKind::Vertex.target(), None);
        VertexArray::unbind(gl);

        log::debug!(
            "mesh uploaded: {} vertices ({} bytes), {} indices ({} bytes)",
            vertices.len(),
            vertex_buffer.len(),
            indices.len(),
            element_buffer.len()
        );

        Ok(Self {
            vertex_array,
            vertex_buffer,
            element_buffer,
            index_count,
        })
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.index_count as usize
    }

    pub fn vertex_array(&self) -> &VertexArray<D> {
        &self.vertex_array
    }

    pub fn vertex_buffer(&self) -> &Buffer<D> {
        &self.vertex_buffer
    }

    pub fn element_buffer(&self) -> &Buffer<D> {
        &self.element_buffer
    }

    /// Binds the vertex array and draws every index as triangles.
    pub fn draw(&self, gl: &D) {
        self.vertex_array.bind(gl);
        gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
    }

    pub fn release(self, gl: &D) {
        self.vertex_array.release(gl);
        self.vertex_buffer.release(gl);
        self.element_buffer.release(gl);
    }
}

/// Index count as the driver's `GLsizei`.
fn draw_count(len: usize) -> Result<i32, GlError> {
    i32::try_from(len).map_err(|_| GlError::TooManyIndices(len))
}

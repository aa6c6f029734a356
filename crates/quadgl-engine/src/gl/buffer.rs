use super::driver::GlDriver;
use super::error::GlError;

/// Binding target of a buffer object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferKind {
    /// Per-vertex attributes (`ARRAY_BUFFER`).
    Vertex,
    /// Topology indices (`ELEMENT_ARRAY_BUFFER`).
    Element,
}

impl BufferKind {
    #[inline]
    pub const fn target(self) -> u32 {
        match self {
            BufferKind::Vertex => glow::ARRAY_BUFFER,
            BufferKind::Element => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Owned driver buffer object, written once at creation.
#[derive(Debug)]
pub struct Buffer<D: GlDriver> {
    raw: D::Buffer,
    len: usize,
}

impl<D: GlDriver> Buffer<D> {
    /// Creates a buffer, binds it to its target and uploads `bytes`.
    ///
    /// The buffer is left bound. Element buffers bind into whichever vertex
    /// array is current, so create them while the owning vertex array is bound.
    pub fn with_data(gl: &D, kind: BufferKind, bytes: &[u8]) -> Result<Self, GlError> {
        let raw = gl.create_buffer().map_err(|message| GlError::Create {
            what: "buffer object",
            message,
        })?;
        gl.bind_buffer(kind.target(), Some(raw));
        gl.buffer_data(kind.target(), bytes);

        Ok(Self { raw, len: bytes.len() })
    }

    #[inline]
    pub fn raw(&self) -> D::Buffer {
        self.raw
    }

    /// Size of the uploaded data in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn release(self, gl: &D) {
        gl.delete_buffer(self.raw);
    }
}

/// Float vertex attribute layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub location: u32,
    /// Number of `f32` components (1..=4).
    pub components: i32,
    pub normalized: bool,
    /// Byte distance between consecutive vertices.
    pub stride: i32,
    /// Byte offset of the first component.
    pub offset: i32,
}

impl VertexAttribute {
    /// Tightly packed `f32` attribute at offset zero.
    pub const fn packed_f32(location: u32, components: i32) -> Self {
        Self {
            location,
            components,
            normalized: false,
            stride: components * std::mem::size_of::<f32>() as i32,
            offset: 0,
        }
    }
}

/// Owned driver vertex array object.
#[derive(Debug)]
pub struct VertexArray<D: GlDriver> {
    raw: D::VertexArray,
}

impl<D: GlDriver> VertexArray<D> {
    pub fn new(gl: &D) -> Result<Self, GlError> {
        let raw = gl.create_vertex_array().map_err(|message| GlError::Create {
            what: "vertex array object",
            message,
        })?;
        Ok(Self { raw })
    }

    #[inline]
    pub fn raw(&self) -> D::VertexArray {
        self.raw
    }

    pub fn bind(&self, gl: &D) {
        gl.bind_vertex_array(Some(self.raw));
    }

    pub fn unbind(gl: &D) {
        gl.bind_vertex_array(None);
    }

    /// Records `attr` against the currently bound `ARRAY_BUFFER` and enables it.
    /// The vertex array must be bound.
    pub fn set_attribute(&self, gl: &D, attr: VertexAttribute) {
        gl.vertex_attrib_pointer_f32(
            attr.location,
            attr.components,
            attr.normalized,
            attr.stride,
            attr.offset,
        );
        gl.enable_vertex_attrib_array(attr.location);
    }

    pub fn release(self, gl: &D) {
        gl.delete_vertex_array(self.raw);
    }
}

use crate::geometry::{Mesh, Vertex};
use crate::gl::{GlDriver, GlError, Program, ShaderPipeline};

use super::shaders::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE};

/// Four corners of an axis-aligned square centred at the origin, in the order
/// top-right, bottom-right, bottom-left, top-left.
pub const fn quad_vertices(half_extent: f32) -> [Vertex; 4] {
    let h = half_extent;
    [
        Vertex::new(h, h, 0.0),
        Vertex::new(h, -h, 0.0),
        Vertex::new(-h, -h, 0.0),
        Vertex::new(-h, h, 0.0),
    ]
}

pub const QUAD_VERTICES: [Vertex; 4] = quad_vertices(0.5);

/// Two triangles sharing the top-right/bottom-left diagonal.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Quad mesh plus the program that shades it.
///
/// `program` is `None` when the shader pipeline failed to build. The failure
/// has been logged by then, and frames still clear but skip the draw.
#[derive(Debug)]
pub struct QuadScene<D: GlDriver> {
    mesh: Mesh<D>,
    program: Option<Program<D>>,
}

impl<D: GlDriver> QuadScene<D> {
    /// Uploads the built-in quad and builds the built-in shader pair.
    pub fn new(gl: &D) -> Result<Self, GlError> {
        Self::with_sources(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)
    }

    /// Like [`new`](Self::new) with caller-provided shader sources.
    ///
    /// Only geometry upload failures are returned; shader failures are logged
    /// and leave the scene without a program.
    pub fn with_sources(gl: &D, vertex_src: &str, fragment_src: &str) -> Result<Self, GlError> {
        let mesh = Mesh::upload(gl, &QUAD_VERTICES, &QUAD_INDICES)?;

        let program = match ShaderPipeline::new(vertex_src, fragment_src).build(gl) {
            Ok(program) => Some(program),
            Err(e) => {
                log::error!("{e}");
                None
            }
        };

        Ok(Self { mesh, program })
    }

    #[inline]
    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    pub fn mesh(&self) -> &Mesh<D> {
        &self.mesh
    }

    /// Binds the program and vertex array and issues one indexed draw.
    pub fn draw(&self, gl: &D) {
        let Some(program) = &self.program else { return };
        program.bind(gl);
        self.mesh.draw(gl);
    }

    pub fn release(self, gl: &D) {
        if let Some(program) = self.program {
            program.release(gl);
        }
        self.mesh.release(gl);
    }
}

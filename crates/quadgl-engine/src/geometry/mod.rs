//! CPU-side geometry and its upload into GPU buffers.
//!
//! Positions are in normalized device coordinates; no transform is applied
//! between upload and rasterization.

mod mesh;
mod vertex;

pub use mesh::Mesh;
pub use vertex::Vertex;

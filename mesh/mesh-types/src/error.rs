//! Error types for mesh buffer checks.

use thiserror::Error;

/// A violation of the ribbon mesh buffer contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The UV buffer is not parallel to the vertex buffer.
    #[error("uv buffer has {uvs} entries for {vertices} vertices")]
    UvCountMismatch {
        /// Number of vertices.
        vertices: usize,
        /// Number of texture coordinates.
        uvs: usize,
    },

    /// The index buffer does not hold whole triangles.
    #[error("index buffer length {len} is not a multiple of 3")]
    PartialTriangle {
        /// Length of the index buffer.
        len: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("index {value} at position {position} is out of range for {vertices} vertices")]
    IndexOutOfRange {
        /// Position in the index buffer.
        position: usize,
        /// The offending index.
        value: u32,
        /// Number of vertices.
        vertices: usize,
    },

    /// Vertices are emitted in pairs, so the count must be even.
    #[error("vertex count {0} is odd")]
    OddVertexCount(usize),

    /// The vertex count no longer fits a 32-bit index.
    #[error("vertex count {0} exceeds the 32-bit index range")]
    IndexOverflow(usize),
}

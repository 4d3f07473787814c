//! Error types for mesh-from-curves operations.

use curve_types::PathError;
use mesh_types::MeshError;
use thiserror::Error;

/// Result type for mesh-from-curves operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur during curve-to-mesh operations.
#[derive(Debug, Error)]
pub enum CurveError {
    /// The path was rejected before sweeping.
    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    /// No cross-section direction exists at this sample.
    #[error("cross-section direction is undefined at sample {index}")]
    DegenerateCrossSection {
        /// Index of the sample.
        index: usize,
    },

    /// Half width is invalid (zero, negative or not finite).
    #[error("invalid half width: {0}")]
    InvalidHalfWidth(f64),

    /// The orientation reference vector is zero or not finite.
    #[error("invalid orientation reference: [{x}, {y}, {z}]")]
    InvalidReference {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
        /// Z component.
        z: f64,
    },

    /// The mesh would hold more vertices than a `u32` index can address.
    #[error("sweep needs {required} vertices, more than 32-bit indices can address")]
    TooManyVertices {
        /// Vertex count the sweep would reach.
        required: usize,
    },

    /// Combining ribbon buffers failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The mesh sink refused the finished mesh.
    #[error("mesh sink rejected the mesh: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

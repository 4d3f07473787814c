//! Parallel vertex, UV and index buffers.

use crate::{MeshError, MeshTopology};
use nalgebra::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle mesh stored as three parallel, append-only buffers.
///
/// This is the layout renderers and mesh-asset containers expect:
///
/// - `vertices`: positions, indexable `0..N`
/// - `uvs`: one texture coordinate per vertex, same order
/// - `indices`: consecutive triples name one triangle each
///
/// # Winding Order
///
/// The order of each triple is the front-face winding. Reversing a triple
/// turns its triangle into a backface.
///
/// # Example
///
/// ```
/// use mesh_types::{MeshTopology, Point2, Point3, RibbonMesh};
///
/// let mut mesh = RibbonMesh::new();
/// mesh.vertices.extend([
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, -1.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(1.0, 0.0, -1.0),
/// ]);
/// mesh.uvs.extend([
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 0.5),
///     Point2::new(1.0, 0.5),
/// ]);
/// mesh.indices.extend([0, 1, 2, 1, 3, 2]);
///
/// assert_eq!(mesh.face_count(), 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibbonMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Texture coordinates, parallel to `vertices`.
    pub uvs: Vec<Point2<f64>>,

    /// Triangle vertex indices, three per triangle.
    pub indices: Vec<u32>,
}

impl RibbonMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with room for `vertex_count` vertices (and as many UVs)
    /// and `index_count` indices.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Reserve capacity for additional vertices and indices.
    pub fn reserve(&mut self, additional_vertices: usize, additional_indices: usize) {
        self.vertices.reserve(additional_vertices);
        self.uvs.reserve(additional_vertices);
        self.indices.reserve(additional_indices);
    }

    /// Get a triangle's vertex indices.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let start = index.checked_mul(3)?;
        let end = start.checked_add(3)?;
        match self.indices.get(start..end)? {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Iterate over triangles as vertex index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Append another mesh, rebasing its indices past this mesh's vertices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOverflow`] if the combined vertex count does
    /// not fit a `u32` index. `self` is left untouched in that case.
    pub fn append(&mut self, other: Self) -> Result<(), MeshError> {
        let combined = self.vertices.len() + other.vertices.len();
        if u32::try_from(combined).is_err() {
            return Err(MeshError::IndexOverflow(combined));
        }
        let offset = u32::try_from(self.vertices.len())
            .map_err(|_| MeshError::IndexOverflow(self.vertices.len()))?;

        self.vertices.extend(other.vertices);
        self.uvs.extend(other.uvs);
        self.indices
            .extend(other.indices.into_iter().map(|i| i + offset));
        Ok(())
    }

    /// Check the buffer contract consumers rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found:
    /// - [`MeshError::UvCountMismatch`] if `uvs` is not parallel to `vertices`
    /// - [`MeshError::OddVertexCount`] if vertices are not paired
    /// - [`MeshError::PartialTriangle`] if the index count is not a multiple of 3
    /// - [`MeshError::IndexOutOfRange`] if an index names a missing vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertices = self.vertices.len();

        if self.uvs.len() != vertices {
            return Err(MeshError::UvCountMismatch {
                vertices,
                uvs: self.uvs.len(),
            });
        }

        if vertices % 2 != 0 {
            return Err(MeshError::OddVertexCount(vertices));
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle {
                len: self.indices.len(),
            });
        }

        if let Some((position, &value)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertices)
        {
            return Err(MeshError::IndexOutOfRange {
                position,
                value,
                vertices,
            });
        }

        Ok(())
    }

    /// Remove all data, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.uvs.clear();
        self.indices.clear();
    }
}

impl MeshTopology for RibbonMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.indices.len() / 3
    }
}

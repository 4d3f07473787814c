//! Core mesh types for swept ribbon geometry.
//!
//! This crate provides the output side of the ribbon mesh pipeline:
//!
//! - [`RibbonMesh`] - Parallel vertex, texture-coordinate and index buffers
//! - [`MeshSink`] - The capability a host implements to receive finished meshes
//! - [`MeshTopology`] - Vertex and face counts
//! - [`MeshError`] - Buffer contract violations reported by [`RibbonMesh::validate`]
//!
//! # Layer 0 Crate
//!
//! No rendering framework dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Editor plugins
//! - Other game engines
//!
//! # Units
//!
//! This library is **unit-agnostic**. Positions and texture coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshTopology, Point2, Point3, RibbonMesh};
//!
//! let mut mesh = RibbonMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 1.0, 0.0));
//! mesh.uvs.extend([Point2::new(0.0, 0.0); 4]);
//! mesh.indices.extend([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod ribbon;
mod traits;

pub use error::MeshError;
pub use ribbon::RibbonMesh;
pub use traits::{MeshSink, MeshTopology};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

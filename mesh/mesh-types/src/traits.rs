//! Traits for mesh types.

use crate::RibbonMesh;

/// Trait for types that provide mesh topology information.
///
/// This trait defines the minimal interface for a mesh structure,
/// allowing consumers to work with different mesh representations.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces (triangles).
    fn face_count(&self) -> usize;

    /// Check if the mesh is empty.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }
}

/// A consumer of finished meshes.
///
/// Hosts implement this for whatever holds renderable geometry (a mesh
/// asset, a GPU upload queue, a file writer). The buffers handed over
/// satisfy [`RibbonMesh::validate`].
pub trait MeshSink {
    /// Error returned when the consumer cannot take the mesh.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Take a finished mesh, replacing whatever was accepted before.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn accept(&mut self, mesh: &RibbonMesh) -> Result<(), Self::Error>;
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
    type Error = S::Error;

    fn accept(&mut self, mesh: &RibbonMesh) -> Result<(), Self::Error> {
        (**self).accept(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Default)]
    struct Latest(Option<RibbonMesh>);

    impl MeshSink for Latest {
        type Error = Infallible;

        fn accept(&mut self, mesh: &RibbonMesh) -> Result<(), Infallible> {
            self.0 = Some(mesh.clone());
            Ok(())
        }
    }

    fn hand_over<K: MeshSink>(mut sink: K, mesh: &RibbonMesh) {
        sink.accept(mesh).unwrap();
    }

    #[test]
    fn sink_replaces_previous_mesh() {
        let mut sink = Latest::default();
        let mut mesh = RibbonMesh::new();
        sink.accept(&mesh).unwrap();

        mesh.vertices.push(nalgebra::Point3::origin());
        mesh.uvs.push(nalgebra::Point2::origin());
        hand_over(&mut sink, &mesh);

        assert_eq!(sink.0.map(|m| m.vertex_count()), Some(1));
    }

    #[test]
    fn topology_is_empty_without_faces() {
        let mut mesh = RibbonMesh::new();
        mesh.vertices.push(nalgebra::Point3::origin());
        mesh.uvs.push(nalgebra::Point2::origin());
        assert!(mesh.is_empty());
    }
}

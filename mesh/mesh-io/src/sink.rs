//! A mesh sink that writes OBJ files.

use std::path::{Path, PathBuf};

use mesh_types::{MeshSink, RibbonMesh};

use crate::error::IoError;
use crate::obj::save_obj;

/// Writes every accepted mesh to one OBJ file, replacing the previous one.
///
/// # Example
///
/// ```no_run
/// use mesh_from_curves::RibbonBuilder;
/// use mesh_io::ObjSink;
/// use nalgebra::Point3;
///
/// let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
/// let mut sink = ObjSink::new("track.obj");
/// RibbonBuilder::default().generate(&points, &mut sink).unwrap();
/// assert_eq!(sink.written(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ObjSink {
    path: PathBuf,
    written: usize,
}

impl ObjSink {
    /// Create a sink writing to `path`. Nothing is written until a mesh is
    /// accepted.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            written: 0,
        }
    }

    /// The output file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How many meshes have been written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl MeshSink for ObjSink {
    type Error = IoError;

    fn accept(&mut self, mesh: &RibbonMesh) -> Result<(), IoError> {
        save_obj(mesh, &self.path)?;
        self.written += 1;
        Ok(())
    }
}

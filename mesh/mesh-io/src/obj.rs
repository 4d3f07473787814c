//! Wavefront OBJ export.
//!
//! Ribbon meshes keep positions and texture coordinates in parallel buffers,
//! so every face references the same 1-based index for both:
//!
//! ```text
//! v x y z
//! vt u v
//! f a/a b/b c/c
//! ```
//!
//! Index order is written as stored, preserving the front-face winding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_types::{MeshTopology, RibbonMesh};
use tracing::info;

use crate::error::{IoError, IoResult};

/// Save a mesh to an OBJ file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path, replaced if it exists
///
/// # Errors
///
/// Returns an error if:
/// - The mesh breaks the buffer contract (see [`RibbonMesh::validate`])
/// - The file cannot be written
///
/// # Example
///
/// ```no_run
/// use mesh_from_curves::{RibbonConfig, ribbon_from_polyline};
/// use mesh_io::save_obj;
/// use nalgebra::Point3;
///
/// let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 5.0, 0.0)];
/// let mesh = ribbon_from_polyline(&points, &RibbonConfig::default()).unwrap();
/// save_obj(&mesh, "track.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &RibbonMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;

    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.face_count(),
        "Wrote OBJ file"
    );
    Ok(())
}

/// Write a mesh as OBJ text to any writer.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] if the mesh breaks the buffer
/// contract, or [`IoError::Io`] if writing fails. Nothing is written for an
/// invalid mesh.
///
/// # Example
///
/// ```
/// use mesh_io::write_obj;
/// use mesh_types::{Point2, Point3, RibbonMesh};
///
/// let mut mesh = RibbonMesh::new();
/// mesh.vertices.extend([
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, -1.0),
///     Point3::new(0.0, 1.0, 1.0),
///     Point3::new(0.0, 1.0, -1.0),
/// ]);
/// mesh.uvs.extend([
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 0.5),
///     Point2::new(1.0, 0.5),
/// ]);
/// mesh.indices.extend([0, 1, 2, 1, 3, 2]);
///
/// let mut out = Vec::new();
/// write_obj(&mesh, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("f 1/1 2/2 3/3\n"));
/// assert!(text.contains("f 2/2 4/4 3/3\n"));
/// ```
pub fn write_obj<W: Write>(mesh: &RibbonMesh, mut writer: W) -> IoResult<()> {
    mesh.validate()
        .map_err(|e| IoError::invalid_content(format!("cannot export mesh: {e}")))?;

    writeln!(writer, "# Ribbon mesh generated by mesh-io")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.face_count()
    )?;

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    for uv in &mesh.uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mesh_types::{Point2, Point3};

    fn strip() -> RibbonMesh {
        let mut mesh = RibbonMesh::new();
        for k in 0_u8..3 {
            let y = f64::from(k);
            mesh.vertices.push(Point3::new(0.0, y, 1.0));
            mesh.vertices.push(Point3::new(0.0, y, -1.0));
            mesh.uvs.push(Point2::new(0.0, y / 3.0));
            mesh.uvs.push(Point2::new(1.0, y / 3.0));
        }
        mesh.indices.extend([0, 1, 2, 1, 3, 2, 2, 3, 4, 3, 5, 4]);
        mesh
    }

    fn lines_starting(text: &str, prefix: &str) -> Vec<String> {
        text.lines()
            .filter(|l| l.starts_with(prefix))
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn writes_one_line_per_element() {
        let mut out = Vec::new();
        write_obj(&strip(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(lines_starting(&text, "v ").len(), 6);
        assert_eq!(lines_starting(&text, "vt ").len(), 6);
        assert_eq!(lines_starting(&text, "f ").len(), 4);
    }

    #[test]
    fn faces_are_one_based_and_keep_winding() {
        let mut out = Vec::new();
        write_obj(&strip(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            lines_starting(&text, "f "),
            vec![
                "f 1/1 2/2 3/3",
                "f 2/2 4/4 3/3",
                "f 3/3 4/4 5/5",
                "f 4/4 6/6 5/5",
            ]
        );
    }

    #[test]
    fn invalid_mesh_writes_nothing() {
        let mut mesh = strip();
        mesh.indices.push(0);

        let mut out = Vec::new();
        let err = write_obj(&mesh, &mut out).unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn empty_mesh_has_header_only() {
        let mut out = Vec::new();
        write_obj(&RibbonMesh::new(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().all(|l| l.starts_with('#')));
    }
}

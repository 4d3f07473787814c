//! The single-ribbon sweep.
//!
//! One pass walks the path once, emitting a vertex pair and a UV pair per
//! sample and one quad (two triangles) per segment. Passes append to shared
//! buffers; each starts from the vertex count it finds there.

use curve_types::TrackPath;
use mesh_types::RibbonMesh;
use nalgebra::Point2;
use tracing::debug;

use crate::config::RibbonConfig;
use crate::error::{CurveError, CurveResult};
use crate::frame::{CrossSection, cross_sections};

/// Rotation of the first ribbon's cross-section.
pub const VERTICAL_ROTATION_DEGREES: f64 = 0.0;

/// Rotation of the second ribbon's cross-section.
pub const HORIZONTAL_ROTATION_DEGREES: f64 = 90.0;

/// The vertex range written by one sweep pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPass {
    /// Index of the first vertex this pass emitted.
    pub first_vertex: u32,
    /// Vertex count after the pass; the next pass starts here.
    pub next_vertex: u32,
}

impl SweepPass {
    /// Number of vertices emitted by the pass.
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.next_vertex - self.first_vertex
    }
}

/// Sweep one ribbon along `path`, appending to `mesh`.
///
/// For `N` samples this appends `2N` vertices, `2N` UVs and `6(N - 1)`
/// indices. Sample `k` contributes `p + d` then `p - d`, where `d` is the
/// cross-section direction rotated by `rotation_degrees` and scaled by the
/// half width. Each segment closes the quad between consecutive pairs with
/// triangles `(l-2, l-1, l)` and `(l-1, l+1, l)`, `l` being the new pair's
/// first vertex.
///
/// # Errors
///
/// Returns an error, without touching `mesh`, if:
/// - The configuration is invalid
/// - A cross-section direction is undefined (see [`cross_sections`])
/// - The mesh would exceed the `u32` index range
///
/// # Example
///
/// ```
/// use curve_types::TrackPath;
/// use mesh_from_curves::{RibbonConfig, sweep};
/// use mesh_types::RibbonMesh;
/// use nalgebra::Point3;
///
/// let path = TrackPath::try_new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ])
/// .unwrap();
///
/// let mut mesh = RibbonMesh::new();
/// let pass = sweep(&path, 0.0, &RibbonConfig::default(), &mut mesh).unwrap();
///
/// assert_eq!(pass.next_vertex, 6);
/// assert_eq!(&mesh.indices[..6], &[0, 1, 2, 1, 3, 2]);
/// ```
pub fn sweep(
    path: &TrackPath,
    rotation_degrees: f64,
    config: &RibbonConfig,
    mesh: &mut RibbonMesh,
) -> CurveResult<SweepPass> {
    config.validate()?;
    let sections = cross_sections(path, &config.orientation)?;
    push_ribbon(path, &sections, rotation_degrees, config, mesh)
}

/// Emit one ribbon from precomputed sections.
pub(crate) fn push_ribbon(
    path: &TrackPath,
    sections: &[CrossSection],
    rotation_degrees: f64,
    config: &RibbonConfig,
    mesh: &mut RibbonMesh,
) -> CurveResult<SweepPass> {
    let samples = path.len();
    let start = mesh.vertices.len();
    let end = start + 2 * samples;

    let (Ok(first_vertex), Ok(next_vertex)) = (u32::try_from(start), u32::try_from(end)) else {
        return Err(CurveError::TooManyVertices { required: end });
    };

    mesh.reserve(2 * samples, 6 * (samples - 1));

    let mut left = first_vertex;
    for (k, (&point, section)) in path.points().iter().zip(sections).enumerate() {
        let offset = section.rotated(rotation_degrees) * config.half_width;
        mesh.vertices.push(point + offset);
        mesh.vertices.push(point - offset);

        let v = config.uv_mapping.v_at(path, k);
        mesh.uvs.push(Point2::new(0.0, v));
        mesh.uvs.push(Point2::new(1.0, v));

        // A single pair cannot close a quad
        if k > 0 {
            mesh.indices
                .extend_from_slice(&[left - 2, left - 1, left, left - 1, left + 1, left]);
        }

        left += 2;
    }

    debug!(
        rotation_degrees,
        first_vertex, next_vertex, "Swept ribbon pass"
    );

    Ok(SweepPass {
        first_vertex,
        next_vertex,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::cast_precision_loss
)]
mod tests {
    use super::*;
    use crate::config::{Orientation, UvMapping};
    use approx::assert_relative_eq;
    use curve_types::Point3;
    use mesh_types::MeshTopology;

    fn straight(n: usize) -> TrackPath {
        TrackPath::try_new(
            (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn two_sample_pass() {
        let path = straight(2);
        let mut mesh = RibbonMesh::new();
        let pass = sweep(&path, VERTICAL_ROTATION_DEGREES, &RibbonConfig::default(), &mut mesh)
            .unwrap();

        assert_eq!(pass, SweepPass { first_vertex: 0, next_vertex: 4 });
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.uvs[0], Point2::new(0.0, 0.0));
        assert_eq!(mesh.uvs[1], Point2::new(1.0, 0.0));
        assert_eq!(mesh.indices, vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn straight_vertices_straddle_path() {
        let path = straight(3);
        let mut mesh = RibbonMesh::new();
        sweep(&path, 0.0, &RibbonConfig::default(), &mut mesh).unwrap();

        // Transport frame along +X has normal +Z
        assert_relative_eq!(mesh.vertices[0], Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices[1], Point3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices[4], Point3::new(2.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices[5], Point3::new(2.0, 0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn second_pass_continues_offsets() {
        let path = straight(3);
        let config = RibbonConfig::default();
        let mut mesh = RibbonMesh::new();

        let first = sweep(&path, VERTICAL_ROTATION_DEGREES, &config, &mut mesh).unwrap();
        let second = sweep(&path, HORIZONTAL_ROTATION_DEGREES, &config, &mut mesh).unwrap();

        assert_eq!(second.first_vertex, first.next_vertex);
        assert_eq!(second.vertex_count(), 6);
        assert_eq!(&mesh.indices[12..18], &[6, 7, 8, 7, 9, 8]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn half_width_scales_offsets() {
        let path = straight(2);
        let config = RibbonConfig::default().with_half_width(0.25);
        let mut mesh = RibbonMesh::new();
        sweep(&path, 0.0, &config, &mut mesh).unwrap();

        assert_relative_eq!((mesh.vertices[0] - mesh.vertices[1]).norm(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn failed_sweep_leaves_mesh_untouched() {
        let path = straight(3);
        let mut mesh = RibbonMesh::new();
        let result = sweep(&path, 0.0, &RibbonConfig::legacy(), &mut mesh);

        assert!(matches!(
            result,
            Err(CurveError::DegenerateCrossSection { index: 0 })
        ));
        assert!(mesh.vertices.is_empty());
        assert!(mesh.uvs.is_empty());
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn arc_length_uvs_reach_one() {
        let path = straight(4);
        let config = RibbonConfig::default().with_uv_mapping(UvMapping::ArcLength);
        let mut mesh = RibbonMesh::new();
        sweep(&path, 0.0, &config, &mut mesh).unwrap();

        assert_relative_eq!(mesh.uvs[7].y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.uvs[2].y, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn legacy_orientation_off_origin() {
        let path = TrackPath::try_new(vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ])
        .unwrap();
        let config = RibbonConfig::default().with_orientation(Orientation::OriginCross);
        let mut mesh = RibbonMesh::new();
        sweep(&path, 0.0, &config, &mut mesh).unwrap();

        // (0,1,0) × (1,0,0) = (0,0,-1)
        assert_relative_eq!(mesh.vertices[0], Point3::new(0.0, 1.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices[1], Point3::new(0.0, 1.0, 1.0), epsilon = 1e-12);
    }
}

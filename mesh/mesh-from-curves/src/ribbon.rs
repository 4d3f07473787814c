//! Cross-shaped ribbon meshes from track paths.
//!
//! A ribbon mesh is two perpendicular quad strips swept along the same
//! path: a vertical one (0°) and a horizontal one (90°), stored as one
//! drawable surface.

use curve_types::{PathSource, TrackPath};
use mesh_types::{MeshSink, MeshTopology, RibbonMesh};
use nalgebra::Point3;
use tracing::{info, warn};

use crate::config::RibbonConfig;
use crate::error::{CurveError, CurveResult};
use crate::frame::{CrossSection, cross_sections};
use crate::sweep::{HORIZONTAL_ROTATION_DEGREES, VERTICAL_ROTATION_DEGREES, push_ribbon};

/// Builds cross-shaped ribbon meshes.
///
/// Each call to [`build`](Self::build) produces a fresh mesh; nothing is
/// cached between calls.
///
/// # Example
///
/// ```
/// use curve_types::TrackPath;
/// use mesh_from_curves::{RibbonBuilder, RibbonConfig};
/// use mesh_types::MeshTopology;
/// use nalgebra::Point3;
///
/// let path = TrackPath::try_new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 5.0, 0.0),
///     Point3::new(2.0, 8.0, 1.0),
/// ])
/// .unwrap();
///
/// let mesh = RibbonBuilder::new(RibbonConfig::default()).build(&path).unwrap();
///
/// // Two ribbons, 2 vertices per sample and 2 triangles per segment each
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.face_count(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RibbonBuilder {
    config: RibbonConfig,
}

impl RibbonBuilder {
    /// Create a builder with the given configuration.
    #[must_use]
    pub fn new(config: RibbonConfig) -> Self {
        Self { config }
    }

    /// The builder's configuration.
    #[must_use]
    pub fn config(&self) -> &RibbonConfig {
        &self.config
    }

    /// Sweep both ribbons along `path`.
    ///
    /// The vertical ribbon occupies vertices `0..2N`, the horizontal one
    /// `2N..4N`; no triangle crosses between them.
    ///
    /// # Errors
    ///
    /// Fails before emitting anything if the configuration is invalid or a
    /// cross-section direction is undefined. No partial mesh is returned.
    pub fn build(&self, path: &TrackPath) -> CurveResult<RibbonMesh> {
        self.config.validate().inspect_err(|e| {
            warn!(samples = path.len(), error = %e, "Rejected ribbon configuration");
        })?;
        let sections = cross_sections(path, &self.config.orientation).inspect_err(|e| {
            warn!(samples = path.len(), error = %e, "Rejected track path");
        })?;

        let mesh = if self.config.parallel {
            let (vertical, horizontal) = rayon::join(
                || self.single_ribbon(path, &sections, VERTICAL_ROTATION_DEGREES),
                || self.single_ribbon(path, &sections, HORIZONTAL_ROTATION_DEGREES),
            );
            let mut mesh = vertical?;
            mesh.append(horizontal?)?;
            mesh
        } else {
            let samples = path.len();
            let mut mesh = RibbonMesh::with_capacity(4 * samples, 12 * (samples - 1));
            let vertical = push_ribbon(
                path,
                &sections,
                VERTICAL_ROTATION_DEGREES,
                &self.config,
                &mut mesh,
            )?;
            let horizontal = push_ribbon(
                path,
                &sections,
                HORIZONTAL_ROTATION_DEGREES,
                &self.config,
                &mut mesh,
            )?;
            debug_assert_eq!(horizontal.first_vertex, vertical.next_vertex);
            mesh
        };

        info!(
            samples = path.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.face_count(),
            parallel = self.config.parallel,
            "Built ribbon mesh"
        );

        Ok(mesh)
    }

    /// Read a path from `source`, build it and hand the mesh to `sink`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Path`] if the source's samples are not a valid path
    /// - Any error from [`build`](Self::build)
    /// - [`CurveError::Sink`] if the sink refuses the mesh
    pub fn generate<S, K>(&self, source: &S, sink: &mut K) -> CurveResult<()>
    where
        S: PathSource + ?Sized,
        K: MeshSink + ?Sized,
    {
        let path = validated(source.points())?;
        let mesh = self.build(&path)?;
        sink.accept(&mesh).map_err(|e| CurveError::Sink(Box::new(e)))
    }

    fn single_ribbon(
        &self,
        path: &TrackPath,
        sections: &[CrossSection],
        rotation_degrees: f64,
    ) -> CurveResult<RibbonMesh> {
        let samples = path.len();
        let mut mesh = RibbonMesh::with_capacity(2 * samples, 6 * (samples - 1));
        push_ribbon(path, sections, rotation_degrees, &self.config, &mut mesh)?;
        Ok(mesh)
    }
}

/// Generate a ribbon mesh along a polyline.
///
/// # Arguments
///
/// * `points` - Track centerline samples, in order
/// * `config` - Ribbon configuration
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than 2 points are provided
/// - A coordinate is not finite
/// - Two consecutive points coincide
/// - The configuration is invalid or a cross-section direction is undefined
///
/// # Example
///
/// ```
/// use mesh_from_curves::{RibbonConfig, ribbon_from_polyline};
/// use nalgebra::Point3;
///
/// let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0)];
/// assert!(ribbon_from_polyline(&points, &RibbonConfig::default()).is_err());
/// ```
pub fn ribbon_from_polyline(
    points: &[Point3<f64>],
    config: &RibbonConfig,
) -> CurveResult<RibbonMesh> {
    let path = validated(points)?;
    RibbonBuilder::new(config.clone()).build(&path)
}

fn validated(points: &[Point3<f64>]) -> CurveResult<TrackPath> {
    TrackPath::try_from(points).map_err(|e| {
        warn!(samples = points.len(), error = %e, "Rejected track path");
        CurveError::Path(e)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use approx::assert_relative_eq;
    use curve_types::PathError;
    use std::fmt;

    fn track() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 1.0),
            Point3::new(3.0, 6.0, 2.0),
            Point3::new(5.0, 5.0, 2.0),
        ]
    }

    #[derive(Default)]
    struct Recorder(Vec<RibbonMesh>);

    impl MeshSink for Recorder {
        type Error = std::convert::Infallible;

        fn accept(&mut self, mesh: &RibbonMesh) -> Result<(), Self::Error> {
            self.0.push(mesh.clone());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Full;

    impl fmt::Display for Full {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("sink is full")
        }
    }

    impl std::error::Error for Full {}

    struct Refusing;

    impl MeshSink for Refusing {
        type Error = Full;

        fn accept(&mut self, _mesh: &RibbonMesh) -> Result<(), Full> {
            Err(Full)
        }
    }

    #[test]
    fn build_counts() {
        let mesh = ribbon_from_polyline(&track(), &RibbonConfig::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.uvs.len(), 16);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn ribbons_are_perpendicular() {
        let mesh = ribbon_from_polyline(&track(), &RibbonConfig::default()).unwrap();
        let samples = track().len();
        for k in 0..samples {
            let vertical = mesh.vertices[2 * k] - mesh.vertices[2 * k + 1];
            let horizontal =
                mesh.vertices[2 * samples + 2 * k] - mesh.vertices[2 * samples + 2 * k + 1];
            assert_relative_eq!(vertical.dot(&horizontal), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let sequential = ribbon_from_polyline(&track(), &RibbonConfig::default()).unwrap();
        let parallel =
            ribbon_from_polyline(&track(), &RibbonConfig::default().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn rejected_path_is_reported() {
        let mut points = track();
        points.insert(1, points[0]);
        let err = ribbon_from_polyline(&points, &RibbonConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CurveError::Path(PathError::DegenerateSegment { index: 0 })
        ));
    }

    #[test]
    fn rejected_config_builds_nothing() {
        let path = TrackPath::try_new(track()).unwrap();
        for parallel in [false, true] {
            let config = RibbonConfig::default()
                .with_half_width(-2.0)
                .with_parallel(parallel);
            let err = RibbonBuilder::new(config).build(&path).unwrap_err();
            assert!(matches!(err, CurveError::InvalidHalfWidth(w) if w < 0.0));
        }
    }

    #[test]
    fn legacy_rejects_path_from_origin() {
        let err = ribbon_from_polyline(&track(), &RibbonConfig::legacy()).unwrap_err();
        assert!(matches!(err, CurveError::DegenerateCrossSection { index: 0 }));
    }

    #[test]
    fn generate_hands_mesh_to_sink() {
        let builder = RibbonBuilder::default();
        let mut sink = Recorder::default();
        builder.generate(&track(), &mut sink).unwrap();
        builder.generate(&track(), &mut sink).unwrap();

        assert_eq!(sink.0.len(), 2);
        assert_eq!(sink.0[0], sink.0[1]);
        assert_eq!(sink.0[0].vertex_count(), 16);
    }

    #[test]
    fn generate_skips_sink_on_invalid_path() {
        // Reference runs along the first segment
        let up = nalgebra::Vector3::new(0.0, 4.0, 1.0);
        let builder =
            RibbonBuilder::new(RibbonConfig::default().with_orientation(Orientation::ReferenceUp(up)));
        let mut sink = Recorder::default();
        let result = builder.generate(&track()[..2], &mut sink);
        assert!(result.is_err());
        assert!(sink.0.is_empty());
    }

    #[test]
    fn generate_reports_sink_failure() {
        let err = RibbonBuilder::default()
            .generate(&track(), &mut Refusing)
            .unwrap_err();
        assert!(matches!(err, CurveError::Sink(_)));
        assert!(err.to_string().contains("sink is full"));
    }
}

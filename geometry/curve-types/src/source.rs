//! The path-source capability.

use crate::TrackPath;
use nalgebra::Point3;

/// Anything that can supply an ordered list of track samples.
///
/// Hosts implement this for their own curve components; the mesh builders
/// only depend on this contract. The samples are not validated here, see
/// [`TrackPath::try_new`].
pub trait PathSource {
    /// The samples, in path order.
    fn points(&self) -> &[Point3<f64>];
}

impl PathSource for TrackPath {
    fn points(&self) -> &[Point3<f64>] {
        TrackPath::points(self)
    }
}

impl PathSource for [Point3<f64>] {
    fn points(&self) -> &[Point3<f64>] {
        self
    }
}

impl PathSource for Vec<Point3<f64>> {
    fn points(&self) -> &[Point3<f64>] {
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_count<S: PathSource + ?Sized>(source: &S) -> usize {
        source.points().len()
    }

    #[test]
    fn sources_expose_their_points() {
        let points = vec![Point3::origin(), Point3::new(0.0, 0.0, 2.0)];
        assert_eq!(sample_count(&points), 2);
        assert_eq!(sample_count(points.as_slice()), 2);

        let path = TrackPath::try_new(points.clone()).unwrap();
        assert_eq!(PathSource::points(&path), points.as_slice());
    }
}

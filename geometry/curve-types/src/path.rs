//! Track paths: validated polylines used as sweep centerlines.
//!
//! A track path is a sequence of connected samples supplied by a host
//! (an editor curve, a spline sampler, a file). It is never resampled or
//! smoothed here; validation only guarantees that every segment has a
//! direction.

use crate::{PathError, Result};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segments shorter than this are treated as coincident points.
pub const DEGENERATE_SEGMENT_LENGTH: f64 = 1e-10;

/// An ordered, validated sequence of 3D samples describing a track centerline.
///
/// # Invariants
///
/// - At least 2 samples
/// - All coordinates are finite
/// - No two consecutive samples coincide
///
/// # Example
///
/// ```
/// use curve_types::TrackPath;
/// use nalgebra::Point3;
///
/// let path = TrackPath::try_new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
/// ])
/// .unwrap();
///
/// assert_eq!(path.num_segments(), 2);
/// assert!((path.arc_length() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Point3<f64>>", into = "Vec<Point3<f64>>")
)]
pub struct TrackPath {
    points: Vec<Point3<f64>>,
    /// Cumulative arc length at each sample; the first entry is 0.
    cumulative_lengths: Vec<f64>,
    total_length: f64,
}

impl TrackPath {
    /// Validate the samples and build a path.
    ///
    /// # Errors
    ///
    /// - [`PathError::InsufficientPoints`] if fewer than 2 samples
    /// - [`PathError::NonFinitePoint`] if any coordinate is NaN or infinite
    /// - [`PathError::DegenerateSegment`] if two consecutive samples coincide
    pub fn try_new(points: Vec<Point3<f64>>) -> Result<Self> {
        if points.len() < 2 {
            return Err(PathError::insufficient_points(2, points.len()));
        }

        if let Some(index) = points.iter().position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(PathError::NonFinitePoint { index });
        }

        let mut cumulative_lengths = Vec::with_capacity(points.len());
        cumulative_lengths.push(0.0);
        let mut total_length = 0.0;

        for (index, pair) in points.windows(2).enumerate() {
            let seg_len = (pair[1] - pair[0]).norm();
            if seg_len < DEGENERATE_SEGMENT_LENGTH {
                return Err(PathError::DegenerateSegment { index });
            }
            total_length += seg_len;
            cumulative_lengths.push(total_length);
        }

        Ok(Self {
            points,
            cumulative_lengths,
            total_length,
        })
    }

    /// The samples, in path order.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a validated path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of segments (`len() - 1`).
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }

    /// Get a sample by index.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Point3<f64>> {
        self.points.get(index)
    }

    /// Unnormalized direction of segment `index`, `p[index + 1] - p[index]`.
    #[must_use]
    pub fn segment_delta(&self, index: usize) -> Option<Vector3<f64>> {
        if index < self.num_segments() {
            Some(self.points[index + 1] - self.points[index])
        } else {
            None
        }
    }

    /// Total length of the path.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.total_length
    }

    /// Arc length from the first sample up to sample `index`.
    #[must_use]
    pub fn arc_length_at(&self, index: usize) -> Option<f64> {
        self.cumulative_lengths.get(index).copied()
    }

    /// Whether the last sample returns to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        (last - first).norm() < DEGENERATE_SEGMENT_LENGTH
    }

    /// Consume the path and return its samples.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl TryFrom<Vec<Point3<f64>>> for TrackPath {
    type Error = PathError;

    fn try_from(points: Vec<Point3<f64>>) -> Result<Self> {
        Self::try_new(points)
    }
}

impl TryFrom<&[Point3<f64>]> for TrackPath {
    type Error = PathError;

    fn try_from(points: &[Point3<f64>]) -> Result<Self> {
        Self::try_new(points.to_vec())
    }
}

impl From<TrackPath> for Vec<Point3<f64>> {
    fn from(path: TrackPath) -> Self {
        path.into_points()
    }
}

//! Cross-section frames along a track path.
//!
//! Every sample gets a unit cross-section direction orthogonal to the local
//! path direction. How that direction is picked depends on the
//! [`Orientation`]; rotating it about the path direction gives the second
//! ribbon.

use curve_types::TrackPath;
use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

use crate::config::Orientation;
use crate::error::{CurveError, CurveResult};

/// Cross products shorter than this have no usable direction.
pub const DEGENERATE_DIRECTION_NORM: f64 = 1e-12;

/// The unrotated cross-section at one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    /// Unit path direction; the rotation axis.
    pub axis: Vector3<f64>,
    /// Unit cross-section direction, orthogonal to `axis`.
    pub direction: Vector3<f64>,
}

impl CrossSection {
    /// The direction rotated by `degrees` about the path direction.
    ///
    /// Positive angles turn counter-clockwise when looking down the axis
    /// (right-hand rule). Zero returns the direction unchanged.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Vector3<f64> {
        let axis = Unit::new_normalize(self.axis);
        UnitQuaternion::from_axis_angle(&axis, degrees.to_radians()) * self.direction
    }
}

/// A reference frame at a point on a curve.
///
/// Consists of three orthonormal vectors: tangent, normal, and binormal.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Tangent direction (forward along curve).
    pub tangent: Vector3<f64>,
    /// Normal direction (perpendicular to tangent).
    pub normal: Vector3<f64>,
    /// Binormal direction (perpendicular to both tangent and normal).
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Create an initial frame from a tangent vector.
    ///
    /// Computes a perpendicular normal and binormal.
    #[must_use]
    pub fn from_tangent(tangent: Vector3<f64>) -> Self {
        let tangent = tangent.try_normalize(f64::EPSILON).unwrap_or(Vector3::z());

        let normal = find_perpendicular(tangent);
        let binormal = tangent.cross(&normal);

        Self {
            tangent,
            normal,
            binormal,
        }
    }
}

impl From<Frame> for CrossSection {
    fn from(frame: Frame) -> Self {
        Self {
            axis: frame.tangent,
            direction: frame.normal,
        }
    }
}

/// Find a vector perpendicular to the given vector.
fn find_perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    // Choose the axis most perpendicular to v
    let abs_x = v.x.abs();
    let abs_y = v.y.abs();
    let abs_z = v.z.abs();

    let perp = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::x()
    } else if abs_y <= abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&perp)
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::y())
}

/// Compute the cross-section at every sample of `path`.
///
/// All sections are computed before anything is emitted, so a degenerate
/// sample fails the whole sweep up front.
///
/// # Errors
///
/// Returns [`CurveError::DegenerateCrossSection`] when a reference-based
/// orientation has no direction at a sample (the reference is parallel to the
/// path there). [`Orientation::ParallelTransport`] never fails.
///
/// # Example
///
/// ```
/// use curve_types::TrackPath;
/// use mesh_from_curves::{Orientation, cross_sections};
/// use nalgebra::Point3;
///
/// let path = TrackPath::try_new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ])
/// .unwrap();
///
/// let sections = cross_sections(&path, &Orientation::ParallelTransport).unwrap();
/// assert_eq!(sections.len(), 2);
///
/// // The first sample sits at the origin: no origin-cross direction.
/// assert!(cross_sections(&path, &Orientation::OriginCross).is_err());
/// ```
pub fn cross_sections(
    path: &TrackPath,
    orientation: &Orientation,
) -> CurveResult<Vec<CrossSection>> {
    match *orientation {
        Orientation::ParallelTransport => Ok(parallel_transport_frames(path)
            .into_iter()
            .map(CrossSection::from)
            .collect()),
        Orientation::OriginCross => reference_sections(path, |point| point.coords),
        Orientation::ReferenceUp(up) => reference_sections(path, |_| up),
    }
}

/// Sections from `normalize(reference × delta)`, where `delta` is the
/// outgoing segment at the first sample and the incoming one afterwards.
fn reference_sections(
    path: &TrackPath,
    reference: impl Fn(&Point3<f64>) -> Vector3<f64>,
) -> CurveResult<Vec<CrossSection>> {
    let points = path.points();

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let delta = if index == 0 {
                points[1] - points[0]
            } else {
                *point - points[index - 1]
            };
            let axis = delta
                .try_normalize(f64::EPSILON)
                .ok_or(CurveError::DegenerateCrossSection { index })?;
            let direction = reference(point)
                .cross(&axis)
                .try_normalize(DEGENERATE_DIRECTION_NORM)
                .ok_or(CurveError::DegenerateCrossSection { index })?;
            Ok(CrossSection { axis, direction })
        })
        .collect()
}

/// Compute parallel transport frames along a path.
///
/// Uses rotation minimizing frames to avoid twisting. The tangent at each
/// sample is the incoming segment direction (the first segment at sample 0),
/// so every normal is orthogonal to the segment that reaches its sample.
#[must_use]
pub fn parallel_transport_frames(path: &TrackPath) -> Vec<Frame> {
    let points = path.points();
    let mut frames = Vec::with_capacity(points.len());

    let first_tangent = (points[1] - points[0])
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::z());
    frames.push(Frame::from_tangent(first_tangent));

    for i in 1..points.len() {
        let prev_frame = frames[i - 1];
        let tangent = (points[i] - points[i - 1])
            .try_normalize(f64::EPSILON)
            .unwrap_or(prev_frame.tangent);

        frames.push(parallel_transport_frame(&prev_frame, tangent));
    }

    frames
}

/// Transport a frame from one tangent to another.
///
/// Uses the rotation that maps the old tangent to the new one
/// to transform the normal and binormal.
fn parallel_transport_frame(prev_frame: &Frame, new_tangent: Vector3<f64>) -> Frame {
    let new_tangent = new_tangent
        .try_normalize(f64::EPSILON)
        .unwrap_or(prev_frame.tangent);

    let axis = prev_frame.tangent.cross(&new_tangent);

    match Unit::try_new(axis, f64::EPSILON) {
        Some(axis) => {
            let angle = prev_frame.tangent.dot(&new_tangent).clamp(-1.0, 1.0).acos();
            let rotation = UnitQuaternion::from_axis_angle(&axis, angle);
            Frame {
                tangent: new_tangent,
                normal: rotation * prev_frame.normal,
                binormal: rotation * prev_frame.binormal,
            }
        }
        // Tangents are parallel
        None if prev_frame.tangent.dot(&new_tangent) > 0.0 => Frame {
            tangent: new_tangent,
            normal: prev_frame.normal,
            binormal: prev_frame.binormal,
        },
        None => Frame {
            tangent: new_tangent,
            normal: -prev_frame.normal,
            binormal: -prev_frame.binormal,
        },
    }
}

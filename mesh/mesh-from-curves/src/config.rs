//! Configuration for ribbon sweeps.
//!
//! # Presets
//!
//! - [`RibbonConfig::default()`] - Rotation-minimizing frames, unit half width
//! - [`RibbonConfig::legacy()`] - Reproduces meshes from the legacy track
//!   generator, including its origin-dependent orientation
//!
//! # Example
//!
//! ```
//! use mesh_from_curves::{Orientation, RibbonConfig, UvMapping};
//! use nalgebra::Vector3;
//!
//! let config = RibbonConfig::default()
//!     .with_half_width(0.25)
//!     .with_orientation(Orientation::ReferenceUp(Vector3::z()))
//!     .with_uv_mapping(UvMapping::ArcLength);
//!
//! assert!((config.half_width - 0.25).abs() < f64::EPSILON);
//! ```

use curve_types::TrackPath;
use nalgebra::Vector3;

use crate::error::{CurveError, CurveResult};
use crate::frame::DEGENERATE_DIRECTION_NORM;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the unrotated cross-section direction is chosen at each sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Cross the sample position (as a vector from the origin) with the
    /// local path direction.
    ///
    /// Matches the legacy generator. The orientation depends on where the
    /// path sits relative to the origin, and samples at the origin or
    /// segments pointing at it have no direction.
    OriginCross,

    /// Cross a fixed reference vector with the local path direction.
    ///
    /// Fails where the path runs parallel to the reference.
    ReferenceUp(Vector3<f64>),

    /// Rotation-minimizing frames carried along the path.
    ///
    /// Defined for every valid path and free of twist on straight runs.
    #[default]
    ParallelTransport,
}

/// How the `v` texture coordinate advances along the path.
///
/// `u` is always 0 on the `+direction` edge and 1 on the `-direction` edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UvMapping {
    /// `v = k / N` for sample `k` of `N`.
    ///
    /// The last sample gets `(N - 1) / N`, never 1.
    #[default]
    SampleIndex,

    /// `v` is the arc length fraction, reaching exactly 1 at the last sample.
    ArcLength,
}

impl UvMapping {
    /// The `v` coordinate of sample `index` on `path`.
    ///
    /// Indices past the last sample are clamped to it in both mappings.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss only past 2^52 samples
    pub fn v_at(self, path: &TrackPath, index: usize) -> f64 {
        let last = path.len() - 1;
        let index = index.min(last);
        match self {
            Self::SampleIndex => index as f64 / path.len() as f64,
            Self::ArcLength => {
                let traveled = path.arc_length_at(index).unwrap_or_else(|| path.arc_length());
                traveled / path.arc_length()
            }
        }
    }
}

/// Configuration for ribbon generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibbonConfig {
    /// Distance from the path to each ribbon edge.
    pub half_width: f64,
    /// How cross-section directions are chosen.
    pub orientation: Orientation,
    /// How texture coordinates advance along the path.
    pub uv_mapping: UvMapping,
    /// Whether to sweep the two ribbons concurrently (via rayon).
    pub parallel: bool,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            half_width: 1.0,
            orientation: Orientation::default(),
            uv_mapping: UvMapping::default(),
            parallel: false,
        }
    }
}

impl RibbonConfig {
    /// Configuration that reproduces the legacy generator's output.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_from_curves::{Orientation, RibbonConfig};
    ///
    /// let config = RibbonConfig::legacy();
    /// assert_eq!(config.orientation, Orientation::OriginCross);
    /// ```
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            orientation: Orientation::OriginCross,
            ..Self::default()
        }
    }

    /// Set the half width.
    #[must_use]
    pub fn with_half_width(mut self, half_width: f64) -> Self {
        self.half_width = half_width;
        self
    }

    /// Set the orientation strategy.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the texture coordinate mapping.
    #[must_use]
    pub fn with_uv_mapping(mut self, uv_mapping: UvMapping) -> Self {
        self.uv_mapping = uv_mapping;
        self
    }

    /// Enable or disable concurrent ribbon sweeps.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the settings before any geometry is produced.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidHalfWidth`] if the half width is not finite and positive
    /// - [`CurveError::InvalidReference`] if a reference vector is zero or not finite
    pub fn validate(&self) -> CurveResult<()> {
        if self.half_width <= 0.0 || !self.half_width.is_finite() {
            return Err(CurveError::InvalidHalfWidth(self.half_width));
        }

        if let Orientation::ReferenceUp(up) = self.orientation {
            if !up.iter().all(|c| c.is_finite()) || up.norm() <= DEGENERATE_DIRECTION_NORM {
                return Err(CurveError::InvalidReference {
                    x: up.x,
                    y: up.y,
                    z: up.z,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn uneven_path() -> TrackPath {
        TrackPath::try_new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn config_default() {
        let config = RibbonConfig::default();
        assert_relative_eq!(config.half_width, 1.0);
        assert_eq!(config.orientation, Orientation::ParallelTransport);
        assert_eq!(config.uv_mapping, UvMapping::SampleIndex);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builders() {
        let config = RibbonConfig::legacy()
            .with_half_width(0.5)
            .with_uv_mapping(UvMapping::ArcLength)
            .with_parallel(true);

        assert_relative_eq!(config.half_width, 0.5);
        assert_eq!(config.orientation, Orientation::OriginCross);
        assert_eq!(config.uv_mapping, UvMapping::ArcLength);
        assert!(config.parallel);
    }

    #[test]
    fn invalid_half_width() {
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RibbonConfig::default().with_half_width(width);
            assert!(matches!(
                config.validate(),
                Err(CurveError::InvalidHalfWidth(_))
            ));
        }
    }

    #[test]
    fn invalid_reference() {
        let config =
            RibbonConfig::default().with_orientation(Orientation::ReferenceUp(Vector3::zeros()));
        assert!(matches!(
            config.validate(),
            Err(CurveError::InvalidReference { .. })
        ));

        let config = RibbonConfig::default()
            .with_orientation(Orientation::ReferenceUp(Vector3::new(0.0, f64::NAN, 1.0)));
        assert!(config.validate().is_err());
    }

    #[test]
    fn sample_index_mapping_stops_short_of_one() {
        let path = uneven_path();
        let mapping = UvMapping::SampleIndex;
        assert_relative_eq!(mapping.v_at(&path, 0), 0.0);
        assert_relative_eq!(mapping.v_at(&path, 1), 1.0 / 3.0);
        assert_relative_eq!(mapping.v_at(&path, 2), 2.0 / 3.0);
    }

    #[test]
    fn out_of_range_index_clamps_to_last_sample() {
        let path = uneven_path();
        for mapping in [UvMapping::SampleIndex, UvMapping::ArcLength] {
            assert_relative_eq!(mapping.v_at(&path, 3), mapping.v_at(&path, 2));
            assert_relative_eq!(mapping.v_at(&path, usize::MAX), mapping.v_at(&path, 2));
        }
        assert_relative_eq!(UvMapping::ArcLength.v_at(&path, 9), 1.0);
    }

    #[test]
    fn arc_length_mapping_follows_distance() {
        let path = uneven_path();
        let mapping = UvMapping::ArcLength;
        assert_relative_eq!(mapping.v_at(&path, 0), 0.0);
        assert_relative_eq!(mapping.v_at(&path, 1), 0.25);
        assert_relative_eq!(mapping.v_at(&path, 2), 1.0);
    }
}

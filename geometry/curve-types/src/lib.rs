//! Track path types for curve sweeping.
//!
//! This crate provides the input side of the ribbon mesh pipeline:
//!
//! - [`TrackPath`] - A validated polyline of track centerline samples
//! - [`PathSource`] - The capability a host implements to supply samples
//! - [`PathError`] - Why a sample list was rejected
//!
//! Paths are taken as given: no smoothing, no resampling. Validation rejects
//! anything a sweep cannot orient (too few samples, non-finite coordinates,
//! coincident consecutive samples).
//!
//! # Example
//!
//! ```
//! use curve_types::{PathSource, TrackPath};
//! use nalgebra::Point3;
//!
//! let samples = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 0.0),
//! ];
//! assert!(TrackPath::try_new(samples).is_err());
//!
//! let path = TrackPath::try_new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 4.0, 0.0),
//! ])
//! .unwrap();
//! assert_eq!(path.points().len(), 2);
//! ```
//!
//! # Coordinate System
//!
//! Right-handed, consistent with the rest of the workspace:
//!
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! # Feature Flags
//!
//! - `serde`: Serialize a [`TrackPath`] as its sample list; deserialization
//!   runs the same validation as [`TrackPath::try_new`].

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod path;
mod source;

pub use error::PathError;
pub use path::{DEGENERATE_SEGMENT_LENGTH, TrackPath};
pub use source::PathSource;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

/// Result type for path operations.
pub type Result<T> = std::result::Result<T, PathError>;

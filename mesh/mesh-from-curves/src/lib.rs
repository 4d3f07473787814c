//! Generate ribbon meshes from track paths.
//!
//! A ribbon mesh is the cheapest readable stand-in for a track: two flat
//! quad strips swept along the same centerline, one rotated 90° from the
//! other, so the track stays visible from any viewing angle.
//!
//! # Features
//!
//! - **Cross ribbons**: Vertical and horizontal strips in one set of buffers
//! - **Orientation strategies**: Parallel transport, fixed reference vector,
//!   or the legacy origin cross product
//! - **Texture coordinates**: Per-sample or arc-length `v` mapping
//! - **Concurrent sweeps**: Optional rayon-backed build of the two strips
//!
//! # Quick Start
//!
//! ```
//! use mesh_from_curves::{RibbonConfig, ribbon_from_polyline};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 10.0, 0.0),
//! ];
//!
//! let mesh = ribbon_from_polyline(&points, &RibbonConfig::default()).unwrap();
//!
//! // 4 vertices and one quad per ribbon
//! assert_eq!(mesh.vertices.len(), 8);
//! assert_eq!(mesh.indices, vec![0, 1, 2, 1, 3, 2, 4, 5, 6, 5, 7, 6]);
//! ```
//!
//! # Single Passes
//!
//! [`sweep`] runs one pass at an arbitrary rotation and appends to an
//! existing mesh, which is how [`RibbonBuilder`] assembles its output:
//!
//! ```
//! use curve_types::TrackPath;
//! use mesh_from_curves::{RibbonConfig, sweep};
//! use mesh_types::RibbonMesh;
//! use nalgebra::Point3;
//!
//! let path = TrackPath::try_new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//! ])
//! .unwrap();
//!
//! let mut mesh = RibbonMesh::new();
//! let config = RibbonConfig::default();
//! sweep(&path, 0.0, &config, &mut mesh).unwrap();
//! let diagonal = sweep(&path, 45.0, &config, &mut mesh).unwrap();
//! assert_eq!(diagonal.first_vertex, 4);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod frame;
mod ribbon;
mod sweep;

pub use config::{Orientation, RibbonConfig, UvMapping};
pub use error::{CurveError, CurveResult};
pub use frame::{
    CrossSection, DEGENERATE_DIRECTION_NORM, Frame, cross_sections, parallel_transport_frames,
};
pub use ribbon::{RibbonBuilder, ribbon_from_polyline};
pub use sweep::{HORIZONTAL_ROTATION_DEGREES, SweepPass, VERTICAL_ROTATION_DEGREES, sweep};

//! Track point lists in, Wavefront OBJ out.
//!
//! This crate connects the ribbon pipeline to files:
//!
//! - **Point lists** - One `x y z` sample per line, read as a [`PathSource`]
//! - **OBJ** (Wavefront) - ASCII positions, texture coordinates and faces,
//!   written through a [`MeshSink`]
//!
//! The sweep crates never touch the filesystem; everything file-shaped lives
//! here.
//!
//! # Layer 0 Crate
//!
//! No rendering framework dependencies. It can be used in:
//! - CLI tools
//! - Editor plugins
//! - Asset build scripts
//!
//! # Example
//!
//! ```no_run
//! use mesh_from_curves::{RibbonBuilder, RibbonConfig};
//! use mesh_io::{ObjSink, PointFile};
//!
//! let source = PointFile::open("track.txt").unwrap();
//! let mut sink = ObjSink::new("track.obj");
//!
//! RibbonBuilder::new(RibbonConfig::default().with_half_width(0.5))
//!     .generate(&source, &mut sink)
//!     .unwrap();
//! ```
//!
//! [`PathSource`]: curve_types::PathSource
//! [`MeshSink`]: mesh_types::MeshSink

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;
mod points;
mod sink;

pub use error::{IoError, IoResult};
pub use obj::{save_obj, write_obj};
pub use points::{PointFile, load_points, parse_points, save_points, write_points};
pub use sink::ObjSink;

//! Plain-text point lists.
//!
//! One track sample per line:
//!
//! ```text
//! # x y z
//! 0.0 0.0 0.0
//! 0.0, 4.0, 1.5
//! ```
//!
//! Coordinates are separated by whitespace, commas, or both. Blank lines and
//! lines starting with `#` are skipped; a trailing `# ...` on a data line is
//! ignored too.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use curve_types::PathSource;
use nalgebra::Point3;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Load a point list from a file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`IoError::FileNotFound`])
/// - The file cannot be read
/// - A line is not exactly three numbers ([`IoError::InvalidLine`])
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_points;
///
/// let points = load_points("track.txt").unwrap();
/// println!("Loaded {} samples", points.len());
/// ```
pub fn load_points<P: AsRef<Path>>(path: P) -> IoResult<Vec<Point3<f64>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    let points = parse_points(BufReader::new(file))?;

    debug!(path = %path.display(), samples = points.len(), "Loaded point list");
    Ok(points)
}

/// Parse a point list from any buffered reader.
///
/// # Errors
///
/// Returns [`IoError::InvalidLine`] with the 1-based line number of the first
/// malformed line, or [`IoError::Io`] if reading fails.
///
/// # Example
///
/// ```
/// use mesh_io::parse_points;
///
/// let text = "# centerline\n0 0 0\n1, 2, 3\n";
/// let points = parse_points(text.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].y, 2.0);
/// ```
pub fn parse_points<R: BufRead>(reader: R) -> IoResult<Vec<Point3<f64>>> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let data = line.split('#').next().unwrap_or_default().trim();

        if data.is_empty() {
            continue;
        }

        points.push(parse_point(data, index + 1)?);
    }

    Ok(points)
}

fn parse_point(data: &str, line: usize) -> IoResult<Point3<f64>> {
    let parts: Vec<&str> = data
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let &[x, y, z] = parts.as_slice() else {
        return Err(IoError::invalid_line(
            line,
            format!("expected 3 coordinates, found {}", parts.len()),
        ));
    };

    let coordinate = |text: &str, axis: char| {
        text.parse::<f64>()
            .map_err(|_| IoError::invalid_line(line, format!("invalid {axis} coordinate: {text}")))
    };

    Ok(Point3::new(
        coordinate(x, 'x')?,
        coordinate(y, 'y')?,
        coordinate(z, 'z')?,
    ))
}

/// Save a point list, one `x y z` line per sample.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_points<P: AsRef<Path>>(points: &[Point3<f64>], path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_points(points, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a point list to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_points<W: Write>(points: &[Point3<f64>], mut writer: W) -> IoResult<()> {
    writeln!(writer, "# Track samples generated by mesh-io")?;
    writeln!(writer, "# Format: x y z")?;

    for point in points {
        writeln!(writer, "{} {} {}", point.x, point.y, point.z)?;
    }

    Ok(())
}

/// A point list loaded from disk, usable as a [`PathSource`].
///
/// # Example
///
/// ```no_run
/// use mesh_from_curves::RibbonBuilder;
/// use mesh_io::{ObjSink, PointFile};
///
/// let source = PointFile::open("track.txt").unwrap();
/// let mut sink = ObjSink::new("track.obj");
/// RibbonBuilder::default().generate(&source, &mut sink).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PointFile {
    path: PathBuf,
    points: Vec<Point3<f64>>,
}

impl PointFile {
    /// Load the point list at `path`.
    ///
    /// # Errors
    ///
    /// See [`load_points`].
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        Ok(Self {
            points: load_points(path)?,
            path: path.to_path_buf(),
        })
    }

    /// The file the samples were read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the samples.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl PathSource for PointFile {
    fn points(&self) -> &[Point3<f64>] {
        &self.points
    }
}

//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A point list line that is not three numbers.
    #[error("line {line}: {message}")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Create an `InvalidLine` error for a 1-based line number.
    #[must_use]
    pub fn invalid_line(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidLine {
            line,
            message: message.into(),
        }
    }

    /// Map an open failure, reporting a missing file as [`IoError::FileNotFound`].
    pub(crate) fn from_open(error: std::io::Error, path: &std::path::Path) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = IoError::from_open(
            std::io::Error::from(std::io::ErrorKind::NotFound),
            Path::new("track.txt"),
        );
        assert!(matches!(err, IoError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "file not found: track.txt");
    }

    #[test]
    fn other_open_failures_stay_io() {
        let err = IoError::from_open(
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            Path::new("track.txt"),
        );
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn invalid_line_display() {
        let err = IoError::invalid_line(7, "expected 3 coordinates, found 2");
        assert_eq!(err.to_string(), "line 7: expected 3 coordinates, found 2");
    }
}

//! Error types for track path construction.

use thiserror::Error;

/// Errors that can occur when building a [`TrackPath`](crate::TrackPath).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// Insufficient points to define a path.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },

    /// Two consecutive points coincide, so the segment has no direction.
    #[error("degenerate segment {index}: points {index} and {next} coincide", next = .index + 1)]
    DegenerateSegment {
        /// Index of the zero-length segment.
        index: usize,
    },
}

impl PathError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Check if this is an insufficient points error.
    #[must_use]
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }

    /// Check if this is a degenerate segment error.
    #[must_use]
    pub fn is_degenerate_segment(&self) -> bool {
        matches!(self, Self::DegenerateSegment { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PathError::insufficient_points(2, 1);
        assert!(err.to_string().contains("need at least 2"));
        assert!(err.to_string().contains("got 1"));

        let err = PathError::DegenerateSegment { index: 3 };
        assert_eq!(
            err.to_string(),
            "degenerate segment 3: points 3 and 4 coincide"
        );

        let err = PathError::NonFinitePoint { index: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_error_predicates() {
        let err = PathError::insufficient_points(2, 0);
        assert!(err.is_insufficient_points());
        assert!(!err.is_degenerate_segment());

        let err = PathError::DegenerateSegment { index: 0 };
        assert!(err.is_degenerate_segment());
        assert!(!err.is_insufficient_points());
    }
}

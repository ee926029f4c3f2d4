//! Error types for triangulation runs.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TriangulationError>;

/// Errors raised by a single triangulation call.
///
/// None of these leave the caller's polygon modified; every run works on a clone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// Fewer than 3 vertices were supplied.
    #[error("invalid polygon: need at least 3 vertices, got {vertices}")]
    InvalidPolygon {
        /// Number of vertices in the rejected ring.
        vertices: usize,
    },

    /// Ear clipping ran out of ears; the input was not a simple polygon.
    #[error("triangulation stalled with {remaining} vertices left and no ear")]
    TriangulationStalled {
        /// Vertices still in the working ring when the ear set ran dry.
        remaining: usize,
    },

    /// An angle was requested at a vertex with a zero-length side.
    #[error("degenerate geometry at ({x}, {y})")]
    DegenerateGeometry {
        /// x coordinate of the offending vertex.
        x: f64,
        /// y coordinate of the offending vertex.
        y: f64,
    },
}

impl TriangulationError {
    pub(crate) fn degenerate_at(p: &nalgebra::Vector2<f64>) -> Self {
        Self::DegenerateGeometry { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_condition() {
        let e = TriangulationError::InvalidPolygon { vertices: 2 };
        assert_eq!(
            e.to_string(),
            "invalid polygon: need at least 3 vertices, got 2"
        );
        let e = TriangulationError::TriangulationStalled { remaining: 5 };
        assert!(e.to_string().contains("5 vertices"));
        let e = TriangulationError::degenerate_at(&nalgebra::Vector2::new(1.0, 2.5));
        assert_eq!(e.to_string(), "degenerate geometry at (1, 2.5)");
    }
}

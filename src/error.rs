//! Error types.
//!
//! Every fallible operation in the crate returns one of these enums. At the
//! WASM boundary they convert into `JsError` through `?`.

use thiserror::Error;

/// Errors reported by [`KdTree`](crate::spatial::KdTree).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KdTreeError {
    /// A point with a NaN or infinite coordinate was passed in.
    #[error("point has a non-finite coordinate: ({x}, {y})")]
    NonFinitePoint {
        /// The offending x coordinate.
        x: f64,
        /// The offending y coordinate.
        y: f64,
    },

    /// A flat `[x0, y0, x1, y1, ...]` buffer with an unpaired coordinate.
    #[error("position buffer has odd length {len}; expected [x0, y0, x1, y1, ...]")]
    OddCoordinateCount {
        /// Number of values in the buffer.
        len: usize,
    },

    /// Nearest-neighbor query on a tree with no points.
    #[error("nearest-neighbor query on an empty tree")]
    EmptyTree,
}

/// Errors reported when building geometry primitives.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Rectangle bounds are inverted or NaN.
    #[error("invalid rectangle bounds: [{xmin}, {xmax}] x [{ymin}, {ymax}]")]
    InvalidRect {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
}

/// Errors reported by [`UndirectedGraph`](crate::graph::UndirectedGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index at or past the graph's vertex count.
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KdTreeError::NonFinitePoint {
            x: f64::NAN,
            y: 1.0,
        };
        assert_eq!(err.to_string(), "point has a non-finite coordinate: (NaN, 1)");

        assert_eq!(
            KdTreeError::OddCoordinateCount { len: 3 }.to_string(),
            "position buffer has odd length 3; expected [x0, y0, x1, y1, ...]"
        );

        assert_eq!(
            KdTreeError::EmptyTree.to_string(),
            "nearest-neighbor query on an empty tree"
        );

        let err = GraphError::VertexOutOfRange {
            vertex: 7,
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "vertex 7 out of range for a graph with 3 vertices"
        );
    }
}

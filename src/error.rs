//! Error type shared by the container and the search algorithms.
//!
//! Only programmer errors surface as a [`GraphError`]: invalid ids handed to a
//! bounds-checked accessor, an invalid start or end vertex for a search, or a
//! cursor that belongs to another container. Expected absence (a missing edge,
//! an exhausted cursor, an unreachable target) is reported through sentinel
//! return values instead.

use thiserror::Error;

/// Errors raised by [`MatrixGraph`](crate::MatrixGraph) and the algorithms in
/// [`algorithms`](crate::algorithms).
///
/// # Examples
///
/// ```rust
/// use matrix_graph::{GraphError, MatrixGraph};
///
/// let graph: MatrixGraph<&str, u32> = MatrixGraph::new();
/// match graph.vertex_data(3) {
///     Err(GraphError::VertexOutOfRange { id, vertex_count }) => {
///         assert_eq!((id, vertex_count), (3, 0));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id was not below the current vertex count.
    #[error("vertex {id} does not exist (vertex count is {vertex_count})")]
    VertexOutOfRange {
        /// The offending id.
        id: usize,
        /// Vertex count at the time of the call.
        vertex_count: usize,
    },

    /// No edge is stored in the matrix cell `[from][to]`.
    #[error("edge [{from}][{to}] does not exist")]
    EdgeNotFound {
        /// Row of the requested cell.
        from: usize,
        /// Column of the requested cell.
        to: usize,
    },

    /// A traversal was started from a vertex that does not exist.
    #[error("invalid traversal start {id} (vertex count is {vertex_count})")]
    InvalidStart {
        /// The requested start id.
        id: usize,
        /// Vertex count at the time of the call.
        vertex_count: usize,
    },

    /// A shortest-path search was given a start or end vertex that does not exist.
    #[error("invalid search endpoint {id} (vertex count is {vertex_count})")]
    InvalidVertex {
        /// The larger of the two endpoints.
        id: usize,
        /// Vertex count at the time of the call.
        vertex_count: usize,
    },

    /// A cursor created by one container was handed to another.
    #[error("cursor belongs to a different graph")]
    CrossContainerCursor,
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

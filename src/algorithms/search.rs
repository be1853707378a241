//! Callback-driven depth-first and breadth-first search.
//!
//! Both functions run a [`Traversal`] to completion and hand each vertex
//! payload to the visitor in traversal order. A vertex is marked visited when
//! it is first discovered, so the visitor runs exactly once per reachable
//! vertex even when several predecessors discover it.

use tracing::trace;

use crate::algorithms::traversal::{Order, Traversal};
use crate::error::{GraphError, Result};
use crate::graph::GraphView;

/// Visits every vertex reachable from `start` in depth-first order.
///
/// Neighbours are explored smallest id first.
///
/// # Errors
/// [`GraphError::InvalidStart`] if `start` is not a vertex of `graph`.
///
/// ```rust
/// use matrix_graph::{algorithms::dfs, InsertMode, MatrixGraph};
///
/// let mut g = MatrixGraph::new();
/// for name in ["a", "b", "c"] {
///     g.insert_vertex(name);
/// }
/// g.insert_edge(0, 2, (), InsertMode::Upsert);
/// g.insert_edge(2, 1, (), InsertMode::Upsert);
///
/// let mut names = Vec::new();
/// dfs(&g, 0, |name| names.push(*name)).unwrap();
/// assert_eq!(names, ["a", "c", "b"]);
/// ```
pub fn dfs<G, F>(graph: &G, start: usize, visitor: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&G::Vertex),
{
    search(graph, start, Order::DepthFirst, visitor)
}

/// Visits every vertex reachable from `start` in breadth-first (level) order.
///
/// Within a level, vertices appear in ascending id order of discovery.
///
/// # Errors
/// [`GraphError::InvalidStart`] if `start` is not a vertex of `graph`.
pub fn bfs<G, F>(graph: &G, start: usize, visitor: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&G::Vertex),
{
    search(graph, start, Order::BreadthFirst, visitor)
}

/// Visits every vertex reachable from `start` in the given order.
///
/// # Errors
/// [`GraphError::InvalidStart`] if `start` is not a vertex of `graph`.
pub fn search<G, F>(graph: &G, start: usize, order: Order, mut visitor: F) -> Result<()>
where
    G: GraphView + ?Sized,
    F: FnMut(&G::Vertex),
{
    let vertex_count = graph.vertex_count();
    if start >= vertex_count {
        return Err(GraphError::InvalidStart {
            id: start,
            vertex_count,
        });
    }

    let mut traversal = Traversal::new(graph, start, order);
    let mut visits = 0usize;
    for id in traversal.by_ref() {
        visitor(graph.vertex_data(id)?);
        visits += 1;
    }
    trace!(start, ?order, visits, discovered = traversal.discovered_count(), "search finished");
    Ok(())
}

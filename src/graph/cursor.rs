//! Position cursors over a [`MatrixGraph`] and the borrowing iterators built on them.
//!
//! Cursors are plain `Copy` values: a container identity plus a position. They
//! do not borrow the graph, so they can be held across mutations and handed
//! back to the graph's cursor-addressed operations. The price is that a cursor
//! is only as fresh as the last mutation: after a vertex removal any cursor
//! above the removed id refers to a shifted vertex. Operations that mutate and
//! return a cursor (`remove_vertex`, `remove_edge`) always return a valid one.
//!
//! Handing a cursor to a graph other than the one that created it fails with
//! [`GraphError::CrossContainerCursor`].

use crate::error::{GraphError, Result};
use crate::graph::matrix_graph::{GraphId, MatrixGraph};

/// A position in a graph's vertex sequence (ascending id order).
///
/// Two vertex cursors are equal when they come from the same graph and point
/// at the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexCursor {
    pub(crate) graph: GraphId,
    pub(crate) index: usize,
}

impl VertexCursor {
    #[inline]
    pub(crate) const fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    /// Returns the vertex id this cursor points at.
    #[inline(always)]
    pub fn id(&self) -> usize {
        self.index
    }

    /// Returns the identity of the graph that created this cursor.
    #[inline(always)]
    pub fn graph_id(&self) -> GraphId {
        self.graph
    }

    /// Returns `true` if the cursor belongs to `graph` and points at an existing vertex.
    pub fn is_valid<V, E>(&self, graph: &MatrixGraph<V, E>) -> bool {
        self.graph == graph.id() && self.index < graph.vertex_count()
    }

    /// Returns `true` if the cursor is at or past the end of `graph`'s vertices.
    pub fn at_end<V, E>(&self, graph: &MatrixGraph<V, E>) -> bool {
        self.index >= graph.vertex_count()
    }

    /// Moves to the next vertex id.
    #[inline]
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Returns the payload of the vertex under the cursor.
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if the cursor belongs to another graph,
    /// [`GraphError::VertexOutOfRange`] if the cursor is at the end.
    pub fn get<'g, V, E>(&self, graph: &'g MatrixGraph<V, E>) -> Result<&'g V> {
        graph.check_cursor(self.graph)?;
        graph.vertex_data(self.index)
    }

    /// Returns the payload of the vertex under the cursor, mutably.
    ///
    /// # Errors
    /// Same as [`VertexCursor::get`].
    pub fn get_mut<'g, V, E>(&self, graph: &'g mut MatrixGraph<V, E>) -> Result<&'g mut V> {
        graph.check_cursor(self.graph)?;
        graph.vertex_data_mut(self.index)
    }
}

/// A position on a present edge, enumerated in row-major order (`from` outer,
/// `to` inner).
///
/// The terminal position is `(vertex_count, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeCursor {
    pub(crate) graph: GraphId,
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl EdgeCursor {
    #[inline]
    pub(crate) const fn new(graph: GraphId, row: usize, col: usize) -> Self {
        Self { graph, row, col }
    }

    /// Returns the source vertex id.
    #[inline(always)]
    pub fn from(&self) -> usize {
        self.row
    }

    /// Returns the target vertex id.
    #[inline(always)]
    pub fn to(&self) -> usize {
        self.col
    }

    /// Returns the identity of the graph that created this cursor.
    #[inline(always)]
    pub fn graph_id(&self) -> GraphId {
        self.graph
    }

    /// Returns `true` if the cursor belongs to `graph` and sits on a present edge.
    pub fn is_valid<V, E>(&self, graph: &MatrixGraph<V, E>) -> bool {
        self.graph == graph.id() && graph.edge_exists(self.row, self.col)
    }

    /// Returns `true` once the cursor has run off the last row.
    pub fn at_end<V, E>(&self, graph: &MatrixGraph<V, E>) -> bool {
        self.row >= graph.vertex_count()
    }

    /// Moves to the next present edge, or to the end position.
    ///
    /// Advancing an end cursor leaves it at the end.
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if the cursor belongs to another graph.
    pub fn advance<V, E>(&mut self, graph: &MatrixGraph<V, E>) -> Result<()> {
        graph.check_cursor(self.graph)?;
        if !self.at_end(graph) {
            *self = graph.edge_cursor_from(self.row, self.col + 1);
        }
        Ok(())
    }

    /// Returns the label of the edge under the cursor.
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if the cursor belongs to another graph,
    /// otherwise whatever [`MatrixGraph::edge_label`] reports for the position.
    pub fn label<'g, V, E>(&self, graph: &'g MatrixGraph<V, E>) -> Result<&'g E> {
        graph.check_cursor(self.graph)?;
        graph.edge_label(self.row, self.col)
    }

    /// Returns the label of the edge under the cursor, mutably.
    ///
    /// # Errors
    /// Same as [`EdgeCursor::label`].
    pub fn label_mut<'g, V, E>(&self, graph: &'g mut MatrixGraph<V, E>) -> Result<&'g mut E> {
        graph.check_cursor(self.graph)?;
        graph.edge_label_mut(self.row, self.col)
    }
}

/// Iterator over `(id, &payload)` in ascending id order.
///
/// Created by [`MatrixGraph::vertices`].
pub struct Vertices<'g, V, E> {
    graph: &'g MatrixGraph<V, E>,
    cursor: VertexCursor,
}

impl<'g, V, E> Vertices<'g, V, E> {
    pub(crate) fn new(graph: &'g MatrixGraph<V, E>) -> Self {
        Self {
            cursor: graph.begin_vertices(),
            graph,
        }
    }
}

impl<'g, V, E> Iterator for Vertices<'g, V, E> {
    type Item = (usize, &'g V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor.id();
        let data = self.graph.vertex_data(id).ok()?;
        self.cursor.advance();
        Some((id, data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.graph.vertex_count().saturating_sub(self.cursor.id());
        (left, Some(left))
    }
}

impl<V, E> ExactSizeIterator for Vertices<'_, V, E> {}

/// Iterator over present edges as `(from, to, &label)` in row-major order.
///
/// Created by [`MatrixGraph::edges`].
pub struct Edges<'g, V, E> {
    graph: &'g MatrixGraph<V, E>,
    cursor: EdgeCursor,
}

impl<'g, V, E> Edges<'g, V, E> {
    pub(crate) fn new(graph: &'g MatrixGraph<V, E>) -> Self {
        Self {
            cursor: graph.begin_edges(),
            graph,
        }
    }
}

impl<'g, V, E> Iterator for Edges<'g, V, E> {
    type Item = (usize, usize, &'g E);

    fn next(&mut self) -> Option<Self::Item> {
        let (from, to) = (self.cursor.from(), self.cursor.to());
        let label = self.graph.edge_label(from, to).ok()?;
        // The cursor was created by `self.graph`, so advancing cannot fail.
        self.cursor.advance(self.graph).ok()?;
        Some((from, to, label))
    }
}

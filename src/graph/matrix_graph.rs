//! A generic directed graph stored as an adjacency matrix.
//!
//! Vertices carry a payload `V` and are identified by a dense id `0..n`.
//! Edges carry a label `E` and live in an `n x n` matrix of optional cells, so
//! presence tests and label lookups are \(O(1)\).
//!
//! Ids are positions, not handles: removing vertex `k` shifts every vertex
//! above `k` down by one and drops row `k` and column `k` of the matrix.

use core::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collections::SquareMatrix;
use crate::error::{GraphError, Result};
use crate::graph::cursor::{EdgeCursor, Edges, VertexCursor, Vertices};
use crate::graph::display::MatrixDisplay;
use crate::graph::view::GraphView;

/// Identity of a graph instance.
///
/// Every graph, including every clone, receives a distinct id. Cursors record
/// the id of the graph that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// What [`MatrixGraph::insert_edge`] does when the edge already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InsertMode {
    /// Leave an existing label untouched and report "not inserted".
    InsertIfAbsent,
    /// Overwrite an existing label.
    #[default]
    Upsert,
}

impl From<bool> for InsertMode {
    /// `true` means "replace".
    fn from(replace: bool) -> Self {
        if replace {
            Self::Upsert
        } else {
            Self::InsertIfAbsent
        }
    }
}

/// A directed graph backed by an adjacency matrix.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert_vertex` | \(O(n)\) amortized | grows the matrix by one row and column |
/// | `remove_vertex` | \(O(n^2)\) | compacts the matrix and renumbers |
/// | `insert_edge` | \(O(1)\) | |
/// | `remove_edge` | \(O(n^2)\) worst case | scans for the next present edge |
/// | `edge_exists` | \(O(1)\) | out-of-range ids yield `false` |
/// | `edge_count` | \(O(1)\) | cached |
/// | `in_degree` / `out_degree` | \(O(n)\) | row or column scan |
///
/// # Examples
///
/// ```rust
/// use matrix_graph::{InsertMode, MatrixGraph};
///
/// let mut g = MatrixGraph::new();
/// let a = g.insert_vertex("a").id();
/// let b = g.insert_vertex("b").id();
/// let (_, inserted) = g.insert_edge(a, b, 5u32, InsertMode::InsertIfAbsent);
/// assert!(inserted);
/// assert!(g.edge_exists(a, b));
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug)]
pub struct MatrixGraph<V, E> {
    id: GraphId,
    vertices: Vec<V>,
    edges: SquareMatrix<E>,
    edge_count: usize,
}

impl<V, E> Default for MatrixGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, E: Clone> Clone for MatrixGraph<V, E> {
    /// Deep-copies payloads and labels. The clone gets a fresh identity, so
    /// cursors of the original are rejected by it.
    fn clone(&self) -> Self {
        Self {
            id: GraphId::next(),
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            edge_count: self.edge_count,
        }
    }
}

impl<V, E> MatrixGraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            id: GraphId::next(),
            vertices: Vec::new(),
            edges: SquareMatrix::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            id: GraphId::next(),
            vertices: Vec::with_capacity(vertex_count),
            edges: SquareMatrix::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Returns this graph's identity.
    #[inline(always)]
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn check_cursor(&self, graph: GraphId) -> Result<()> {
        if graph == self.id {
            Ok(())
        } else {
            Err(GraphError::CrossContainerCursor)
        }
    }

    fn check_vertex(&self, id: usize) -> Result<()> {
        if id < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                id,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_edge(&self, from: usize, to: usize) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if self.edges.is_present(from, to) {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound { from, to })
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Appends a vertex and returns a cursor to it.
    ///
    /// The new vertex has id `vertex_count() - 1` and no incident edges.
    pub fn insert_vertex(&mut self, data: V) -> VertexCursor {
        let id = self.vertices.len();
        self.vertices.push(data);
        self.edges.grow();
        debug_assert_eq!(self.edges.dim(), self.vertices.len());
        trace!(id, "inserted vertex");
        VertexCursor::new(self.id, id)
    }

    /// Stores `label` on the edge `from -> to`.
    ///
    /// Returns the cursor of the edge and whether the label was written:
    /// - either id out of range: `(end_edges(), false)`, nothing changes;
    /// - edge present and `mode` is [`InsertMode::InsertIfAbsent`]:
    ///   `(cursor, false)`, the existing label is kept;
    /// - otherwise the label is written and `(cursor, true)` is returned.
    pub fn insert_edge(
        &mut self,
        from: usize,
        to: usize,
        label: E,
        mode: InsertMode,
    ) -> (EdgeCursor, bool) {
        let n = self.vertex_count();
        if from >= n || to >= n {
            trace!(from, to, vertex_count = n, "edge insertion out of range");
            return (self.end_edges(), false);
        }

        let cursor = EdgeCursor::new(self.id, from, to);
        if self.edges.is_present(from, to) && mode == InsertMode::InsertIfAbsent {
            return (cursor, false);
        }
        if self.edges.set(from, to, label).is_none() {
            self.edge_count += 1;
        }
        trace!(from, to, edge_count = self.edge_count, "stored edge");
        (cursor, true)
    }

    /// Cursor-addressed form of [`MatrixGraph::insert_edge`].
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if either cursor belongs to another graph.
    pub fn insert_edge_between(
        &mut self,
        from: VertexCursor,
        to: VertexCursor,
        label: E,
        mode: InsertMode,
    ) -> Result<(EdgeCursor, bool)> {
        self.check_cursor(from.graph)?;
        self.check_cursor(to.graph)?;
        Ok(self.insert_edge(from.index, to.index, label, mode))
    }

    /// Removes vertex `id` with all incident edges.
    ///
    /// Every vertex above `id` shifts down by one. Returns a cursor to the
    /// vertex that now occupies `id`, or [`MatrixGraph::end_vertices`] if `id`
    /// was the last vertex or did not exist.
    pub fn remove_vertex(&mut self, id: usize) -> VertexCursor {
        if id >= self.vertex_count() {
            return self.end_vertices();
        }

        self.vertices.remove(id);
        let dropped = self.edges.remove_row_col(id);
        self.edge_count -= dropped;
        debug_assert_eq!(self.edges.dim(), self.vertices.len());
        debug_assert_eq!(self.edges.count_present(), self.edge_count);
        debug!(
            id,
            dropped_edges = dropped,
            renumbered = self.vertex_count() - id,
            "removed vertex"
        );

        VertexCursor::new(self.id, id)
    }

    /// Cursor-addressed form of [`MatrixGraph::remove_vertex`].
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if the cursor belongs to another graph.
    pub fn remove_vertex_at(&mut self, vertex: VertexCursor) -> Result<VertexCursor> {
        self.check_cursor(vertex.graph)?;
        Ok(self.remove_vertex(vertex.index))
    }

    /// Removes the edge `from -> to`.
    ///
    /// Returns a cursor to the first present edge at or after `(from, to)` in
    /// row-major order, or [`MatrixGraph::end_edges`] if there is none. If the
    /// edge did not exist nothing changes and the end cursor is returned.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> EdgeCursor {
        if self.edges.take(from, to).is_none() {
            return self.end_edges();
        }
        self.edge_count -= 1;
        debug_assert_eq!(self.edges.count_present(), self.edge_count);
        trace!(from, to, edge_count = self.edge_count, "removed edge");
        self.edge_cursor_from(from, to)
    }

    /// Cursor-addressed form of [`MatrixGraph::remove_edge`].
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if the cursor belongs to another graph.
    pub fn remove_edge_at(&mut self, edge: EdgeCursor) -> Result<EdgeCursor> {
        self.check_cursor(edge.graph)?;
        Ok(self.remove_edge(edge.row, edge.col))
    }

    /// Removes the edge between two vertex cursors. See [`MatrixGraph::remove_edge`].
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if either cursor belongs to another graph.
    pub fn remove_edge_between(&mut self, from: VertexCursor, to: VertexCursor) -> Result<EdgeCursor> {
        self.check_cursor(from.graph)?;
        self.check_cursor(to.graph)?;
        Ok(self.remove_edge(from.index, to.index))
    }

    /// Removes every vertex and edge. The graph keeps its identity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.edge_count = 0;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Returns `true` if the edge `from -> to` exists. Out-of-range ids yield `false`.
    #[inline]
    pub fn edge_exists(&self, from: usize, to: usize) -> bool {
        self.edges.is_present(from, to)
    }

    /// Cursor-addressed form of [`MatrixGraph::edge_exists`].
    ///
    /// # Errors
    /// [`GraphError::CrossContainerCursor`] if either cursor belongs to another graph.
    pub fn edge_exists_between(&self, from: VertexCursor, to: VertexCursor) -> Result<bool> {
        self.check_cursor(from.graph)?;
        self.check_cursor(to.graph)?;
        Ok(self.edge_exists(from.index, to.index))
    }

    /// Returns the payload of vertex `id`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `id >= vertex_count()`.
    pub fn vertex_data(&self, id: usize) -> Result<&V> {
        self.check_vertex(id)?;
        Ok(&self.vertices[id])
    }

    /// Returns the payload of vertex `id`, mutably.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `id >= vertex_count()`.
    pub fn vertex_data_mut(&mut self, id: usize) -> Result<&mut V> {
        self.check_vertex(id)?;
        Ok(&mut self.vertices[id])
    }

    /// Returns the label of edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if either id is out of range,
    /// [`GraphError::EdgeNotFound`] if the edge is absent.
    pub fn edge_label(&self, from: usize, to: usize) -> Result<&E> {
        self.check_edge(from, to)?;
        self.edges
            .get(from, to)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Returns the label of edge `from -> to`, mutably.
    ///
    /// # Errors
    /// Same as [`MatrixGraph::edge_label`].
    pub fn edge_label_mut(&mut self, from: usize, to: usize) -> Result<&mut E> {
        self.check_edge(from, to)?;
        self.edges
            .get_mut(from, to)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Returns the ids `v` with an edge `vertex -> v`, ascending.
    ///
    /// Yields nothing for an out-of-range `vertex`.
    pub fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .row(vertex)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(to, cell)| cell.as_ref().map(|_| to))
    }

    /// Returns the ids `u` with an edge `u -> vertex`, ascending.
    pub fn in_neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count()).filter(move |&from| self.edges.is_present(from, vertex))
    }

    /// Returns the out-degree of a vertex (0 when out of range).
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.out_neighbors(vertex).count()
    }

    /// Returns the in-degree of a vertex (0 when out of range).
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.in_neighbors(vertex).count()
    }

    /// Computes out-degree statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = (0..vertex_count).map(|v| self.out_degree(v)).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if vertex_count == 0 {
                0.0
            } else {
                edge_count as f64 / vertex_count as f64
            },
        }
    }

    /// Returns a `Display` adapter that prints the presence grid.
    pub fn matrix_display(&self) -> MatrixDisplay<'_, V, E> {
        MatrixDisplay::new(self)
    }

    // ------------------------------------------------------------------
    // Cursors and iterators
    // ------------------------------------------------------------------

    /// Returns a cursor to vertex `id`, or the end cursor if it does not exist.
    pub fn vertex(&self, id: usize) -> VertexCursor {
        if id < self.vertex_count() {
            VertexCursor::new(self.id, id)
        } else {
            self.end_vertices()
        }
    }

    /// Returns a cursor to edge `from -> to`, or the end cursor if it does not exist.
    pub fn edge(&self, from: usize, to: usize) -> EdgeCursor {
        if self.edge_exists(from, to) {
            EdgeCursor::new(self.id, from, to)
        } else {
            self.end_edges()
        }
    }

    /// Returns a cursor to the vertex with the smallest id.
    pub fn begin_vertices(&self) -> VertexCursor {
        VertexCursor::new(self.id, 0)
    }

    /// Returns the one-past-the-last vertex cursor.
    pub fn end_vertices(&self) -> VertexCursor {
        VertexCursor::new(self.id, self.vertex_count())
    }

    /// Returns a cursor to the first present edge in row-major order.
    pub fn begin_edges(&self) -> EdgeCursor {
        self.edge_cursor_from(0, 0)
    }

    /// Returns the terminal edge cursor, positioned at `(vertex_count, 0)`.
    pub fn end_edges(&self) -> EdgeCursor {
        EdgeCursor::new(self.id, self.vertex_count(), 0)
    }

    /// Settles on the first present edge at or after `(row, col)`.
    pub(crate) fn edge_cursor_from(&self, row: usize, col: usize) -> EdgeCursor {
        match self.edges.next_present(row, col) {
            Some((row, col)) => EdgeCursor::new(self.id, row, col),
            None => self.end_edges(),
        }
    }

    /// Iterates over `(id, &payload)` in ascending id order.
    pub fn vertices(&self) -> Vertices<'_, V, E> {
        Vertices::new(self)
    }

    /// Iterates over present edges as `(from, to, &label)` in row-major order.
    pub fn edges(&self) -> Edges<'_, V, E> {
        Edges::new(self)
    }
}

impl<V, E> GraphView for MatrixGraph<V, E> {
    type Vertex = V;
    type Edge = E;

    #[inline]
    fn vertex_count(&self) -> usize {
        MatrixGraph::vertex_count(self)
    }

    #[inline]
    fn edge_exists(&self, from: usize, to: usize) -> bool {
        MatrixGraph::edge_exists(self, from, to)
    }

    #[inline]
    fn vertex_data(&self, id: usize) -> Result<&V> {
        MatrixGraph::vertex_data(self, id)
    }

    #[inline]
    fn edge_label(&self, from: usize, to: usize) -> Result<&E> {
        MatrixGraph::edge_label(self, from, to)
    }
}

impl<'g, V, E> IntoIterator for &'g MatrixGraph<V, E> {
    type Item = &'g V;
    type IntoIter = core::slice::Iter<'g, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Out-degree statistics of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Minimum out-degree over all vertices.
    pub min_degree: usize,
    /// Maximum out-degree over all vertices.
    pub max_degree: usize,
    /// Median out-degree over all vertices.
    pub median_degree: usize,
    /// Average out-degree \(= m/n\).
    pub average_degree: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> MatrixGraph<usize, u32> {
        let mut g = MatrixGraph::new();
        for i in 0..n {
            g.insert_vertex(i);
        }
        for i in 1..n {
            g.insert_edge(i - 1, i, 1, InsertMode::Upsert);
        }
        g
    }

    #[test]
    fn insert_vertex_returns_cursor_to_new_vertex() {
        let mut g: MatrixGraph<&str, ()> = MatrixGraph::new();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        assert_eq!(a.id(), 0);
        assert_eq!(b.id(), 1);
        assert_eq!(b.get(&g), Ok(&"b"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn insert_edge_modes() {
        let mut g = path_graph(2);

        let (c, inserted) = g.insert_edge(0, 1, 9, InsertMode::InsertIfAbsent);
        assert!(!inserted);
        assert_eq!((c.from(), c.to()), (0, 1));
        assert_eq!(g.edge_label(0, 1), Ok(&1));

        let (_, inserted) = g.insert_edge(0, 1, 9, InsertMode::Upsert);
        assert!(inserted);
        assert_eq!(g.edge_label(0, 1), Ok(&9));
        assert_eq!(g.edge_count(), 1);

        let (c, inserted) = g.insert_edge(0, 5, 9, true.into());
        assert!(!inserted);
        assert_eq!(c, g.end_edges());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn remove_vertex_renumbers_and_drops_incident_edges() {
        let mut g = path_graph(4);
        let next = g.remove_vertex(1);
        assert_eq!(next.id(), 1);
        assert_eq!(next.get(&g), Ok(&2));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert!(g.edge_exists(1, 2));
        assert!(!g.edge_exists(0, 1));
    }

    #[test]
    fn remove_vertex_edge_cases() {
        let mut g = path_graph(3);
        assert_eq!(g.remove_vertex(3), g.end_vertices());
        assert_eq!(g.vertex_count(), 3);

        let c = g.remove_vertex(2);
        assert_eq!(c, g.end_vertices());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn cached_edge_count_matches_matrix_after_removals() {
        let mut g = path_graph(6);
        for (u, v) in [(5, 0), (2, 2), (3, 1), (0, 4)] {
            g.insert_edge(u, v, 2, InsertMode::Upsert);
        }
        assert_eq!(g.edges.count_present(), g.edge_count());

        g.remove_vertex(2);
        assert_eq!(g.edges.count_present(), g.edge_count());
        g.remove_edge(0, 3);
        g.remove_vertex(0);
        assert_eq!(g.edges.count_present(), g.edge_count());
        assert_eq!(g.edge_count(), g.edges().count());
    }

    #[test]
    fn self_loop_is_counted_once_on_removal() {
        let mut g = path_graph(2);
        g.insert_edge(1, 1, 4, InsertMode::Upsert);
        assert_eq!(g.edge_count(), 2);
        g.remove_vertex(1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn remove_edge_returns_successor() {
        let mut g = path_graph(4);
        let next = g.remove_edge(1, 2);
        assert_eq!((next.from(), next.to()), (2, 3));
        assert_eq!(g.edge_count(), 2);

        assert_eq!(g.remove_edge(1, 2), g.end_edges());
        assert_eq!(g.remove_edge(2, 3), g.end_edges());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn bounds_checked_accessors() {
        let mut g = path_graph(2);
        assert_eq!(
            g.vertex_data(2),
            Err(GraphError::VertexOutOfRange { id: 2, vertex_count: 2 })
        );
        assert_eq!(g.edge_label(1, 0), Err(GraphError::EdgeNotFound { from: 1, to: 0 }));
        assert!(matches!(
            g.edge_label(0, 9),
            Err(GraphError::VertexOutOfRange { id: 9, .. })
        ));
        *g.vertex_data_mut(0).unwrap() = 10;
        assert_eq!(g.vertex_data(0), Ok(&10));
        assert!(!g.edge_exists(7, 7));
    }

    #[test]
    fn cursor_addressed_operations_check_identity() {
        let mut g = path_graph(3);
        let other = path_graph(3);
        let foreign = other.vertex(0);
        let local = g.vertex(2);

        assert_eq!(
            g.insert_edge_between(foreign, local, 1, InsertMode::Upsert),
            Err(GraphError::CrossContainerCursor)
        );
        assert_eq!(g.edge_exists_between(local, foreign), Err(GraphError::CrossContainerCursor));
        assert_eq!(g.remove_vertex_at(foreign), Err(GraphError::CrossContainerCursor));
        assert_eq!(g.remove_edge_at(other.begin_edges()), Err(GraphError::CrossContainerCursor));

        let (edge, inserted) = g
            .insert_edge_between(local, g.vertex(0), 5, InsertMode::Upsert)
            .unwrap();
        assert!(inserted);
        assert_eq!(g.edge_exists_between(local, g.vertex(0)), Ok(true));
        assert_eq!(g.remove_edge_at(edge), Ok(g.end_edges()));

        assert_eq!(g.remove_edge_between(g.vertex(0), foreign), Err(GraphError::CrossContainerCursor));
        let next = g.remove_edge_between(g.vertex(0), g.vertex(1)).unwrap();
        assert_eq!((next.from(), next.to()), (1, 2));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn clone_has_fresh_identity() {
        let g = path_graph(2);
        let copy = g.clone();
        assert_ne!(g.id(), copy.id());
        assert_eq!(copy.edge_label(0, 1), Ok(&1));
        assert_eq!(g.begin_vertices().get(&copy), Err(GraphError::CrossContainerCursor));
    }

    #[test]
    fn lookups_and_clear() {
        let mut g = path_graph(3);
        assert_eq!(g.vertex(5), g.end_vertices());
        assert_eq!(g.edge(1, 0), g.end_edges());
        assert_eq!(g.edge(1, 2).to(), 2);

        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.begin_edges(), g.end_edges());
    }

    #[test]
    fn neighbors_and_degrees() {
        let mut g = path_graph(4);
        g.insert_edge(0, 2, 1, InsertMode::Upsert);
        g.insert_edge(3, 2, 1, InsertMode::Upsert);

        assert_eq!(g.out_neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(g.in_neighbors(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(g.out_degree(3), 1);
        assert_eq!(g.in_degree(2), 3);
        assert_eq!(g.out_neighbors(9).count(), 0);
    }

    #[test]
    fn statistics_summarise_out_degrees() {
        let mut g = path_graph(4);
        g.insert_edge(0, 2, 1, InsertMode::Upsert);
        g.insert_edge(0, 3, 1, InsertMode::Upsert);
        let stats = g.statistics();

        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.edge_count, 5);
        assert_eq!(stats.min_degree, 0);
        assert_eq!(stats.max_degree, 3);
        // sorted: 0,1,1,3 -> (1 + 1) / 2
        assert_eq!(stats.median_degree, 1);
        assert!((stats.average_degree - 1.25).abs() < 1e-9);
    }

    #[test]
    fn into_iterator_yields_payloads() {
        let g = path_graph(3);
        let payloads: Vec<usize> = (&g).into_iter().copied().collect();
        assert_eq!(payloads, vec![0, 1, 2]);
    }
}

//! The read-only capability surface the algorithms are written against.

use crate::error::Result;

/// Minimal read access to a directed graph with dense vertex ids `0..n`.
///
/// Traversals and shortest-path searches only ever call these four methods,
/// so any dense-id graph can be searched by implementing this trait.
pub trait GraphView {
    /// Vertex payload type.
    type Vertex;
    /// Edge label type.
    type Edge;

    /// Returns the number of vertices; valid ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if an edge `from -> to` exists. Out-of-range ids yield `false`.
    fn edge_exists(&self, from: usize, to: usize) -> bool;

    /// Returns the payload of vertex `id`.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange) if `id` is out of range.
    fn vertex_data(&self, id: usize) -> Result<&Self::Vertex>;

    /// Returns the label of edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`](crate::GraphError::EdgeNotFound) if the edge does not exist.
    fn edge_label(&self, from: usize, to: usize) -> Result<&Self::Edge>;
}

impl<G: GraphView + ?Sized> GraphView for &G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    #[inline]
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    #[inline]
    fn edge_exists(&self, from: usize, to: usize) -> bool {
        (**self).edge_exists(from, to)
    }

    #[inline]
    fn vertex_data(&self, id: usize) -> Result<&Self::Vertex> {
        (**self).vertex_data(id)
    }

    #[inline]
    fn edge_label(&self, from: usize, to: usize) -> Result<&Self::Edge> {
        (**self).edge_label(from, to)
    }
}

//! Shortest-path results and predecessor-chain reconstruction.

use serde::{Deserialize, Serialize};

/// A path found by a shortest-path search.
///
/// `vertices` runs from the start to the end vertex inclusive; `cost` is the
/// sum of the edge costs along it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath<C> {
    /// Total accumulated cost.
    pub cost: C,
    /// Vertex ids from start to end.
    pub vertices: Vec<usize>,
}

impl<C> ShortestPath<C> {
    /// Returns the first vertex of the path.
    pub fn start(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Returns the last vertex of the path.
    pub fn end(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Returns the number of edges on the path.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Iterates over the consecutive `(from, to)` pairs of the path.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Follows `predecessors` from `end` back to `start` and returns the path in
/// forward order.
///
/// Returns `None` if the chain breaks or does not reach `start` within
/// `predecessors.len()` steps.
pub(crate) fn reconstruct(predecessors: &[Option<usize>], start: usize, end: usize) -> Option<Vec<usize>> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        if path.len() > predecessors.len() {
            return None;
        }
        current = (*predecessors.get(current)?)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

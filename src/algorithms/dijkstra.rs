//! Single-source shortest path with early exit at the target.
//!
//! The frontier is chosen by a linear scan over the unvisited vertices, which
//! is the natural fit for an adjacency matrix: every step already scans a full
//! row, so the whole search is \(O(V^2)\) with no heap.

use tracing::{debug, trace};

use crate::algorithms::cost::Cost;
use crate::algorithms::path::{reconstruct, ShortestPath};
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::GraphView;

/// Rejects searches whose endpoints are not vertices of `graph`.
pub(crate) fn check_endpoints<G: GraphView + ?Sized>(graph: &G, start: usize, end: usize) -> Result<()> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count || end >= vertex_count {
        return Err(GraphError::InvalidVertex {
            id: start.max(end),
            vertex_count,
        });
    }
    Ok(())
}

/// Shortest path from `start` to `end`, using each edge label as its cost.
///
/// See [`dijkstra_by`] for the search itself.
///
/// # Errors
/// [`GraphError::InvalidVertex`] if `start` or `end` is not a vertex of `graph`.
///
/// ```rust
/// use matrix_graph::{algorithms::dijkstra, InsertMode, MatrixGraph};
///
/// let mut g = MatrixGraph::new();
/// for i in 0..4 {
///     g.insert_vertex(i);
/// }
/// for (u, v, w) in [(0, 1, 1u32), (1, 2, 2), (0, 2, 5), (2, 3, 1)] {
///     g.insert_edge(u, v, w, InsertMode::Upsert);
/// }
///
/// let path = dijkstra(&g, 0, 3).unwrap().expect("3 is reachable");
/// assert_eq!(path.vertices, vec![0, 1, 2, 3]);
/// assert_eq!(path.cost, 4);
/// ```
pub fn dijkstra<G>(graph: &G, start: usize, end: usize) -> Result<Option<ShortestPath<G::Edge>>>
where
    G: GraphView + ?Sized,
    G::Edge: Cost,
{
    dijkstra_by(graph, start, end, |label| *label)
}

/// Shortest path from `start` to `end`, with `edge_cost` mapping each edge
/// label to a non-negative cost.
///
/// Returns `Ok(None)` when `end` is unreachable from `start`. Among vertices
/// at equal distance the one with the lowest id is settled first, which makes
/// the chosen path deterministic.
///
/// # Errors
/// [`GraphError::InvalidVertex`] if `start` or `end` is not a vertex of `graph`.
pub fn dijkstra_by<G, C, F>(
    graph: &G,
    start: usize,
    end: usize,
    mut edge_cost: F,
) -> Result<Option<ShortestPath<C>>>
where
    G: GraphView + ?Sized,
    C: Cost,
    F: FnMut(&G::Edge) -> C,
{
    check_endpoints(graph, start, end)?;

    let n = graph.vertex_count();
    let mut visited = VisitedFlags::new(n);
    let mut distance = vec![C::infinity(); n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    distance[start] = C::zero();

    let mut current = start;
    while current != end {
        if current >= n {
            debug!(start, end, settled = visited.count(), "no path");
            return Ok(None);
        }
        visited.mark(current);

        let base = distance[current];
        let mut next = n;
        let mut best = C::infinity();
        for v in 0..n {
            if visited.is_visited(v) {
                continue;
            }
            if graph.edge_exists(current, v) {
                let candidate = base.cost_add(edge_cost(graph.edge_label(current, v)?));
                if candidate < distance[v] {
                    distance[v] = candidate;
                    predecessor[v] = Some(current);
                }
            }
            if distance[v] < best {
                best = distance[v];
                next = v;
            }
        }
        trace!(settled = current, next, "dijkstra step");
        current = next;
    }

    let Some(vertices) = reconstruct(&predecessor, start, end) else {
        return Ok(None);
    };
    debug!(start, end, hops = vertices.len() - 1, "path found");
    Ok(Some(ShortestPath {
        cost: distance[end],
        vertices,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InsertMode, MatrixGraph};

    fn weighted(edges: &[(usize, usize, u32)], n: usize) -> MatrixGraph<usize, u32> {
        let mut g = MatrixGraph::new();
        for i in 0..n {
            g.insert_vertex(i);
        }
        for &(u, v, w) in edges {
            g.insert_edge(u, v, w, InsertMode::Upsert);
        }
        g
    }

    #[test]
    fn finds_cheapest_route() {
        let g = weighted(&[(0, 1, 1), (1, 2, 2), (0, 2, 5), (2, 3, 1)], 4);
        let path = dijkstra(&g, 0, 3).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2, 3]);
        assert_eq!(path.cost, 4);
    }

    #[test]
    fn unreachable_target_is_none() {
        let g = weighted(&[], 2);
        assert_eq!(dijkstra(&g, 0, 1), Ok(None));

        // Reachable the other way round only.
        let g = weighted(&[(1, 0, 3)], 2);
        assert_eq!(dijkstra(&g, 0, 1), Ok(None));
    }

    #[test]
    fn start_equals_end() {
        let g = weighted(&[(0, 1, 1)], 2);
        let path = dijkstra(&g, 1, 1).unwrap().unwrap();
        assert_eq!(path.vertices, vec![1]);
        assert_eq!(path.cost, 0);
    }

    #[test]
    fn invalid_endpoints() {
        let g = weighted(&[], 3);
        assert_eq!(
            dijkstra(&g, 0, 3),
            Err(GraphError::InvalidVertex { id: 3, vertex_count: 3 })
        );
        assert!(dijkstra(&g, 7, 0).is_err());
    }

    #[test]
    fn ties_prefer_lowest_id() {
        // Two routes of cost 2: via 1 and via 2.
        let g = weighted(&[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)], 4);
        let path = dijkstra(&g, 0, 3).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 1, 3]);
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn large_costs_saturate_instead_of_overflowing() {
        let g = weighted(&[(0, 1, 3_000_000_000), (1, 2, 3_000_000_000)], 3);
        assert_eq!(dijkstra(&g, 0, 2), Ok(None));

        let g = weighted(&[(0, 1, 3_000_000_000), (1, 2, 3_000_000_000), (0, 2, 4_000_000_000)], 3);
        let path = dijkstra(&g, 0, 2).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 2]);
        assert_eq!(path.cost, 4_000_000_000);
    }

    #[test]
    fn maximum_cost_is_reserved_for_unreached() {
        let g = weighted(&[(0, 1, u32::MAX)], 2);
        assert_eq!(dijkstra(&g, 0, 1), Ok(None));

        let g = weighted(&[(0, 1, u32::MAX - 1)], 2);
        assert_eq!(dijkstra(&g, 0, 1).unwrap().map(|p| p.cost), Some(u32::MAX - 1));
    }

    #[test]
    fn custom_cost_extractor() {
        let mut g: MatrixGraph<(), &str> = MatrixGraph::new();
        for _ in 0..3 {
            g.insert_vertex(());
        }
        g.insert_edge(0, 1, "long-road", InsertMode::Upsert);
        g.insert_edge(0, 2, "x", InsertMode::Upsert);
        g.insert_edge(2, 1, "y", InsertMode::Upsert);

        let path = dijkstra_by(&g, 0, 1, |label| label.len() as f64).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 2, 1]);
        assert!((path.cost - 2.0).abs() < f64::EPSILON);
    }
}

//! A* search guided by a caller-supplied heuristic.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::algorithms::cost::Cost;
use crate::algorithms::dijkstra::check_endpoints;
use crate::algorithms::path::{reconstruct, ShortestPath};
use crate::error::Result;
use crate::graph::GraphView;

/// Shortest path from `start` to `end` guided by `heuristic`.
///
/// `heuristic(graph, vertex, end)` estimates the remaining cost from `vertex`
/// to `end`; `edge_cost` maps an edge label to its cost. The open set is
/// scanned in ascending id order and the first vertex with the minimal
/// `f = g + h` score is expanded, so ties go to the lowest id. Self-loops are
/// never relaxed.
///
/// The result is optimal only if the heuristic is admissible and consistent;
/// this is not checked. With a heuristic that is constantly zero the search
/// degenerates to Dijkstra's algorithm.
///
/// Returns `Ok(None)` when `end` is unreachable.
///
/// # Errors
/// [`GraphError::InvalidVertex`](crate::GraphError::InvalidVertex) if `start`
/// or `end` is not a vertex of `graph`.
///
/// ```rust
/// use matrix_graph::{algorithms::astar, InsertMode, MatrixGraph};
///
/// // Vertices on a number line; the heuristic is the distance between them.
/// let mut g = MatrixGraph::new();
/// for x in [0.0, 1.0, 2.0, 3.0] {
///     g.insert_vertex(x);
/// }
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (0, 3)] {
///     g.insert_edge(u, v, if (u, v) == (0, 3) { 10.0 } else { 1.0 }, InsertMode::Upsert);
/// }
///
/// let line = |g: &MatrixGraph<f64, f64>, v: usize, end: usize| -> f64 {
///     (g.vertex_data(end).unwrap() - g.vertex_data(v).unwrap()).abs()
/// };
/// let path = astar(&g, 0, 3, line, |w: &f64| *w).unwrap().unwrap();
/// assert_eq!(path.vertices, vec![0, 1, 2, 3]);
/// assert_eq!(path.cost, 3.0);
/// ```
pub fn astar<G, C, H, F>(
    graph: &G,
    start: usize,
    end: usize,
    mut heuristic: H,
    mut edge_cost: F,
) -> Result<Option<ShortestPath<C>>>
where
    G: GraphView + ?Sized,
    C: Cost,
    H: FnMut(&G, usize, usize) -> C,
    F: FnMut(&G::Edge) -> C,
{
    check_endpoints(graph, start, end)?;

    let n = graph.vertex_count();
    let mut open = BTreeSet::from([start]);
    let mut came_from: Vec<Option<usize>> = vec![None; n];
    let mut g_score = vec![C::infinity(); n];
    let mut f_score = vec![C::infinity(); n];
    g_score[start] = C::zero();
    f_score[start] = heuristic(graph, start, end);

    let mut expanded = 0usize;
    // Open vertices always have a finite g-score, so any of them may be
    // expanded even when its f-score is capped at infinity.
    while let Some(&first) = open.first() {
        let mut current = first;
        let mut best = f_score[first];
        for &node in open.iter().skip(1) {
            if f_score[node] < best {
                best = f_score[node];
                current = node;
            }
        }

        if current == end {
            let Some(vertices) = reconstruct(&came_from, start, end) else {
                break;
            };
            debug!(start, end, expanded, hops = vertices.len() - 1, "path found");
            return Ok(Some(ShortestPath {
                cost: g_score[end],
                vertices,
            }));
        }

        open.remove(&current);
        expanded += 1;
        trace!(current, open = open.len(), "astar expand");

        for neighbor in 0..n {
            if neighbor == current || !graph.edge_exists(current, neighbor) {
                continue;
            }
            let tentative = g_score[current].cost_add(edge_cost(graph.edge_label(current, neighbor)?));
            if tentative < g_score[neighbor] {
                came_from[neighbor] = Some(current);
                g_score[neighbor] = tentative;
                f_score[neighbor] = tentative.cost_add(heuristic(graph, neighbor, end));
                open.insert(neighbor);
            }
        }
    }

    debug!(start, end, expanded, "no path");
    Ok(None)
}

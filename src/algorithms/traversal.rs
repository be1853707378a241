//! A forward-only traversal cursor shared by depth-first and breadth-first order.
//!
//! The exploration discipline is picked at run time through [`Order`]: a stack
//! for depth-first, a queue for breadth-first. Vertices are marked visited when
//! they are *discovered*, so every reachable vertex is produced exactly once.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::access::visited::VisitedFlags;
use crate::graph::{GraphView, MatrixGraph};

/// Exploration order of a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Last-in-first-out. Neighbours are pushed in descending id order, so the
    /// smallest unvisited neighbour is explored first.
    DepthFirst,
    /// First-in-first-out. Neighbours are enqueued in ascending id order,
    /// producing level order.
    BreadthFirst,
}

/// Pending vertices, stored with the discipline of the chosen [`Order`].
#[derive(Debug, Clone)]
enum Frontier {
    Stack(Vec<usize>),
    Queue(VecDeque<usize>),
}

impl Frontier {
    fn new(order: Order) -> Self {
        match order {
            Order::DepthFirst => Self::Stack(Vec::new()),
            Order::BreadthFirst => Self::Queue(VecDeque::new()),
        }
    }

    #[inline]
    fn push(&mut self, id: usize) {
        match self {
            Self::Stack(s) => s.push(id),
            Self::Queue(q) => q.push_back(id),
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Stack(s) => s.pop(),
            Self::Queue(q) => q.pop_front(),
        }
    }

    #[inline]
    fn peek(&self) -> Option<usize> {
        match self {
            Self::Stack(s) => s.last().copied(),
            Self::Queue(q) => q.front().copied(),
        }
    }
}

/// A lazy DFS/BFS over the vertices reachable from a start vertex.
///
/// The cursor always sits on the next vertex to be produced; once the frontier
/// is empty it moves to the terminal position `vertex_count`. Besides the
/// explicit cursor API ([`current`](Self::current), [`advance`](Self::advance),
/// [`at_end`](Self::at_end)) it implements `Iterator<Item = usize>`.
///
/// Two traversals compare equal when they walk the same graph instance and
/// agree on the current and start vertices; every exhausted traversal of a
/// graph equals [`Traversal::end`].
///
/// ```rust
/// use matrix_graph::{InsertMode, MatrixGraph};
///
/// let mut g = MatrixGraph::new();
/// for name in ["a", "b", "c"] {
///     g.insert_vertex(name);
/// }
/// g.insert_edge(0, 2, (), InsertMode::Upsert);
/// g.insert_edge(0, 1, (), InsertMode::Upsert);
///
/// let order: Vec<usize> = g.bfs_iter(0).collect();
/// assert_eq!(order, vec![0, 1, 2]);
/// ```
pub struct Traversal<'g, G: ?Sized> {
    graph: &'g G,
    order: Order,
    current: usize,
    start: usize,
    visited: VisitedFlags,
    frontier: Frontier,
}

impl<'g, G: GraphView + ?Sized> Traversal<'g, G> {
    /// Starts a traversal at `start`.
    ///
    /// An out-of-range `start` yields a traversal that is already at its end.
    pub fn new(graph: &'g G, start: usize, order: Order) -> Self {
        let n = graph.vertex_count();
        if start >= n {
            return Self::end(graph, order);
        }

        let mut visited = VisitedFlags::new(n);
        visited.mark(start);
        let mut frontier = Frontier::new(order);
        frontier.push(start);

        Self {
            graph,
            order,
            current: start,
            start,
            visited,
            frontier,
        }
    }

    /// Depth-first traversal from `start`.
    pub fn depth_first(graph: &'g G, start: usize) -> Self {
        Self::new(graph, start, Order::DepthFirst)
    }

    /// Breadth-first traversal from `start`.
    pub fn breadth_first(graph: &'g G, start: usize) -> Self {
        Self::new(graph, start, Order::BreadthFirst)
    }

    /// The terminal traversal of `graph`.
    pub fn end(graph: &'g G, order: Order) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            order,
            current: n,
            start: n,
            visited: VisitedFlags::default(),
            frontier: Frontier::new(order),
        }
    }

    /// Returns the exploration order.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns the vertex under the cursor, or `vertex_count` once exhausted.
    #[inline(always)]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns `true` once every reachable vertex has been produced.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.current >= self.graph.vertex_count()
    }

    /// Returns the number of vertices discovered so far, including pending ones.
    pub fn discovered_count(&self) -> usize {
        self.visited.count()
    }

    /// Returns the payload of the vertex under the cursor.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange) at the end.
    pub fn vertex_data(&self) -> Result<&'g G::Vertex> {
        self.graph.vertex_data(self.current)
    }

    /// Moves to the next vertex in traversal order.
    ///
    /// Advancing an exhausted traversal is a no-op.
    pub fn advance(&mut self) {
        if let Some(id) = self.frontier.pop() {
            let n = self.visited.len();
            match self.order {
                Order::DepthFirst => {
                    for next in (0..n).rev() {
                        self.discover(id, next);
                    }
                }
                Order::BreadthFirst => {
                    for next in 0..n {
                        self.discover(id, next);
                    }
                }
            }
        }

        match self.frontier.peek() {
            Some(next) => self.current = next,
            None => {
                self.current = self.graph.vertex_count();
                self.start = self.current;
            }
        }
    }

    #[inline]
    fn discover(&mut self, from: usize, to: usize) {
        if self.graph.edge_exists(from, to) && self.visited.try_visit(to) {
            self.frontier.push(to);
        }
    }
}

impl<G: GraphView + ?Sized> Iterator for Traversal<'_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.at_end() {
            return None;
        }
        let id = self.current;
        self.advance();
        Some(id)
    }
}

impl<G: ?Sized> Clone for Traversal<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            order: self.order,
            current: self.current,
            start: self.start,
            visited: self.visited.clone(),
            frontier: self.frontier.clone(),
        }
    }
}

impl<G: ?Sized> PartialEq for Traversal<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph)
            && self.current == other.current
            && self.start == other.start
    }
}

impl<V, E> MatrixGraph<V, E> {
    /// Depth-first traversal from `start`.
    pub fn dfs_iter(&self, start: usize) -> Traversal<'_, Self> {
        Traversal::depth_first(self, start)
    }

    /// Breadth-first traversal from `start`.
    pub fn bfs_iter(&self, start: usize) -> Traversal<'_, Self> {
        Traversal::breadth_first(self, start)
    }
}

//! # `matrix_graph` - Adjacency-Matrix Graphs and Searches
//!
//! A generic directed graph container backed by an adjacency matrix, plus
//! depth-first, breadth-first, Dijkstra and A* searches over it.
//!
//! ## Key Features
//!
//! - **Dense ids**: vertices are numbered `0..n` with no gaps; removing a vertex
//!   renumbers everything above it.
//! - **O(1) edge tests**: labels live in an `n x n` matrix of optional cells.
//! - **Value cursors**: [`VertexCursor`] and [`EdgeCursor`] are `Copy` positions
//!   tagged with the identity of their graph, so a cursor handed to the wrong
//!   graph is rejected instead of silently misread.
//! - **Capability-based algorithms**: every search takes any [`GraphView`],
//!   the four-method read interface the container implements.
//!
//! ## Error Policy
//!
//! Expected absence never fails: [`MatrixGraph::edge_exists`] answers `false`,
//! [`MatrixGraph::insert_edge`] reports "not inserted", an exhausted cursor sits
//! at its end position, and an unreachable target is `Ok(None)`. Only programmer
//! errors (bad ids passed to bounds-checked accessors or searches, foreign
//! cursors) produce a [`GraphError`].
//!
//! ## Concurrency
//!
//! The container is not internally synchronised. Reads through `&MatrixGraph`
//! may be shared freely; mutation needs `&mut` and therefore exclusive access.
//!
//! ## Example
//!
//! ```rust
//! use matrix_graph::{algorithms, InsertMode, MatrixGraph};
//!
//! let mut g = MatrixGraph::new();
//! for city in ["Gdansk", "Torun", "Warsaw", "Krakow"] {
//!     g.insert_vertex(city);
//! }
//! g.insert_edge(0, 1, 1u32, InsertMode::Upsert);
//! g.insert_edge(1, 2, 2, InsertMode::Upsert);
//! g.insert_edge(0, 2, 5, InsertMode::Upsert);
//! g.insert_edge(2, 3, 1, InsertMode::Upsert);
//!
//! let path = algorithms::dijkstra(&g, 0, 3)?.expect("Krakow is reachable");
//! assert_eq!(path.vertices, vec![0, 1, 2, 3]);
//! assert_eq!(path.cost, 4);
//!
//! let mut visited = Vec::new();
//! algorithms::bfs(&g, 0, |city| visited.push(*city))?;
//! assert_eq!(visited, ["Gdansk", "Torun", "Warsaw", "Krakow"]);
//! # Ok::<(), matrix_graph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod algorithms;
pub mod collections;
pub mod error;
pub mod graph;

pub use algorithms::{Order, ShortestPath, Traversal};
pub use collections::SquareMatrix;
pub use error::{GraphError, Result};
pub use graph::{
    EdgeCursor, GraphId, GraphStatistics, GraphView, InsertMode, MatrixGraph, VertexCursor,
};

// Cursors are small position values meant to be copied around freely.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexCursor>() <= mem::size_of::<u64>() * 2);
    assert!(mem::size_of::<EdgeCursor>() <= mem::size_of::<u64>() * 3);
    assert!(mem::size_of::<GraphId>() == mem::size_of::<u64>());
};

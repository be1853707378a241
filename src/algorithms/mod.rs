//! Traversals and shortest-path searches.
//!
//! Everything here is written against the [`GraphView`](crate::GraphView)
//! capability trait and keeps its scratch state (visited markers, distance
//! tables, open sets) local to the call.
//!
//! - [`Traversal`]: lazy DFS/BFS cursor, order picked through [`Order`]
//! - [`dfs`] / [`bfs`]: callback-driven traversals
//! - [`dijkstra`] / [`dijkstra_by`]: single-source shortest path
//! - [`astar`]: heuristic-guided shortest path

pub mod astar;
pub mod cost;
pub mod dijkstra;
pub mod path;
pub mod search;
pub mod traversal;

pub use astar::astar;
pub use cost::Cost;
pub use dijkstra::{dijkstra, dijkstra_by};
pub use path::ShortestPath;
pub use search::{bfs, dfs, search};
pub use traversal::{Order, Traversal};

//! The adjacency-matrix graph container and its cursors.
//!
//! - `matrix_graph`: the container itself
//! - `cursor`: vertex and edge position cursors plus borrowing iterators
//! - `view`: the read-only capability trait consumed by the algorithms
//! - `display`: debug rendering of the presence matrix

pub mod cursor;
pub mod display;
pub mod matrix_graph;
pub mod view;
pub(crate) mod access;

pub use cursor::{EdgeCursor, Edges, VertexCursor, Vertices};
pub use display::MatrixDisplay;
pub use matrix_graph::{GraphId, GraphStatistics, InsertMode, MatrixGraph};
pub use view::GraphView;

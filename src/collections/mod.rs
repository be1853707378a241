//! Storage primitives backing the graph container.

pub mod matrix;

pub use matrix::SquareMatrix;

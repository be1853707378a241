//! Debug rendering of the adjacency matrix.

use core::fmt;

use crate::graph::matrix_graph::MatrixGraph;

/// `Display` adapter that prints vertex/edge counts and the presence grid.
///
/// ```text
/// vertices: 2
/// edges: 1
///
/// +---+---+
/// | 0 | 1 |
/// +---+---+
/// | 0 | 0 |
/// +---+---+
/// ```
pub struct MatrixDisplay<'g, V, E> {
    graph: &'g MatrixGraph<V, E>,
}

impl<'g, V, E> MatrixDisplay<'g, V, E> {
    pub(crate) fn new(graph: &'g MatrixGraph<V, E>) -> Self {
        Self { graph }
    }
}

impl<V, E> fmt::Display for MatrixDisplay<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.graph.vertex_count();
        writeln!(f, "vertices: {n}")?;
        writeln!(f, "edges: {}", self.graph.edge_count())?;

        if n == 0 {
            return writeln!(f, "+");
        }
        writeln!(f)?;

        let border = "+---".repeat(n);
        for from in 0..n {
            writeln!(f, "{border}+")?;
            for to in 0..n {
                write!(f, "| {} ", u8::from(self.graph.edge_exists(from, to)))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}+")
    }
}

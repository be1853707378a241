//! A dense, growable `n x n` matrix of optional cells.
//!
//! Cells live in one contiguous row-major buffer. The buffer is laid out with a
//! *stride* (row pitch) that is at least the logical dimension, so growing the
//! matrix by one row and one column only relocates cells when the stride is
//! exhausted. The stride doubles on relocation, giving amortised \(O(n)\)
//! growth per added row/column.
//!
//! Invariant: every cell outside the logical `dim x dim` square is `None`.

/// A growable square matrix of `Option<T>` cells.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `get` / `set` / `take` | \(O(1)\) | bounds-checked |
/// | `grow` | \(O(n)\) amortized | relocates only when the stride is full |
/// | `remove_row_col` | \(O(n^2)\) | compacts the remaining cells in place |
/// | `next_present` | \(O(n^2)\) worst case | row-major scan |
#[derive(Debug, Clone)]
pub struct SquareMatrix<T> {
    cells: Vec<Option<T>>,
    dim: usize,
    stride: usize,
}

impl<T> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SquareMatrix<T> {
    const MIN_STRIDE: usize = 4;

    /// Creates an empty `0 x 0` matrix.
    pub const fn new() -> Self {
        Self {
            cells: Vec::new(),
            dim: 0,
            stride: 0,
        }
    }

    /// Creates an empty matrix able to hold `dim x dim` cells without relocating.
    pub fn with_capacity(dim: usize) -> Self {
        let mut matrix = Self::new();
        if dim > 0 {
            matrix.relocate(dim);
        }
        matrix
    }

    /// Returns the logical dimension (number of rows, equal to number of columns).
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the row pitch of the backing buffer.
    #[cfg(test)]
    pub(crate) fn stride(&self) -> usize {
        self.stride
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.stride + col
    }

    #[inline(always)]
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.dim && col < self.dim
    }

    /// Returns `true` if `(row, col)` is in bounds and holds a value.
    #[inline]
    pub fn is_present(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Returns a shared reference to the value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if self.in_bounds(row, col) {
            self.cells[self.offset(row, col)].as_ref()
        } else {
            None
        }
    }

    /// Returns a mutable reference to the value at `(row, col)`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if self.in_bounds(row, col) {
            let idx = self.offset(row, col);
            self.cells[idx].as_mut()
        } else {
            None
        }
    }

    /// Stores `value` at `(row, col)`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Option<T> {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) out of bounds for dim={}",
            self.dim
        );
        let idx = self.offset(row, col);
        self.cells[idx].replace(value)
    }

    /// Clears `(row, col)` and returns the value it held.
    pub fn take(&mut self, row: usize, col: usize) -> Option<T> {
        if self.in_bounds(row, col) {
            let idx = self.offset(row, col);
            self.cells[idx].take()
        } else {
            None
        }
    }

    /// Returns row `row` as a slice of `dim` cells.
    pub fn row(&self, row: usize) -> Option<&[Option<T>]> {
        if row < self.dim {
            let start = self.offset(row, 0);
            Some(&self.cells[start..start + self.dim])
        } else {
            None
        }
    }

    /// Adds one empty row and one empty column.
    pub fn grow(&mut self) {
        if self.dim == self.stride {
            let next = (self.stride * 2).max(Self::MIN_STRIDE);
            self.relocate(next);
        }
        // Cells outside the logical square are already `None`.
        self.dim += 1;
    }

    fn relocate(&mut self, stride: usize) {
        debug_assert!(stride >= self.dim);
        let mut cells = Vec::with_capacity(stride * stride);
        cells.resize_with(stride * stride, || None);
        for row in 0..self.dim {
            for col in 0..self.dim {
                let old = self.offset(row, col);
                cells[row * stride + col] = self.cells[old].take();
            }
        }
        self.cells = cells;
        self.stride = stride;
    }

    /// Removes row `idx` and column `idx`, shifting every later row up and
    /// every later column left by one.
    ///
    /// Returns the number of present cells that were dropped. A value on the
    /// diagonal `(idx, idx)` is counted once.
    ///
    /// # Panics
    /// Panics if `idx >= dim`.
    pub fn remove_row_col(&mut self, idx: usize) -> usize {
        assert!(idx < self.dim, "row/col {idx} out of bounds for dim={}", self.dim);

        let mut dropped = 0usize;
        for col in 0..self.dim {
            let cell = self.offset(idx, col);
            dropped += usize::from(self.cells[cell].take().is_some());
        }
        for row in 0..self.dim {
            let cell = self.offset(row, idx);
            dropped += usize::from(self.cells[cell].take().is_some());
        }

        // Compact in row-major order: every target offset is <= its source, so
        // a target is always vacated before it is written.
        for row in 0..self.dim {
            if row == idx {
                continue;
            }
            let new_row = row - usize::from(row > idx);
            for col in 0..self.dim {
                if col == idx {
                    continue;
                }
                let new_col = col - usize::from(col > idx);
                let src = self.offset(row, col);
                let dst = self.offset(new_row, new_col);
                if src != dst {
                    self.cells[dst] = self.cells[src].take();
                }
            }
        }

        self.dim -= 1;
        dropped
    }

    /// Returns the first present cell at or after `(row, col)` in row-major order.
    pub fn next_present(&self, mut row: usize, mut col: usize) -> Option<(usize, usize)> {
        if col >= self.dim {
            col = 0;
            row += 1;
        }
        while row < self.dim {
            let start = self.offset(row, 0);
            if let Some(offset) = self.cells[start + col..start + self.dim]
                .iter()
                .position(Option::is_some)
            {
                return Some((row, col + offset));
            }
            row += 1;
            col = 0;
        }
        None
    }

    /// Counts the present cells. \(O(n^2)\); used to check cached counts.
    pub(crate) fn count_present(&self) -> usize {
        (0..self.dim)
            .map(|row| {
                let start = self.offset(row, 0);
                self.cells[start..start + self.dim]
                    .iter()
                    .filter(|c| c.is_some())
                    .count()
            })
            .sum()
    }

    /// Iterates over present cells as `(row, col, &value)` in row-major order.
    #[cfg(test)]
    pub(crate) fn iter_present(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..self.dim).flat_map(move |row| {
            let start = self.offset(row, 0);
            self.cells[start..start + self.dim]
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|v| (row, col, v)))
        })
    }

    /// Drops every cell and resets the dimension to zero.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.dim = 0;
        self.stride = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(dim: usize) -> SquareMatrix<usize> {
        let mut m = SquareMatrix::new();
        for _ in 0..dim {
            m.grow();
        }
        for r in 0..dim {
            for c in 0..dim {
                m.set(r, c, r * 10 + c);
            }
        }
        m
    }

    #[test]
    fn grow_keeps_cells_across_relocation() {
        let mut m = SquareMatrix::new();
        m.grow();
        m.set(0, 0, 'a');
        for _ in 0..9 {
            m.grow();
        }
        assert_eq!(m.dim(), 10);
        assert!(m.stride() >= 10);
        assert_eq!(m.get(0, 0), Some(&'a'));
        assert_eq!(m.count_present(), 1);
        assert!(m.get(9, 9).is_none());
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let m = filled(2);
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 2).is_none());
        assert!(!m.is_present(5, 5));
        assert!(m.row(2).is_none());
    }

    #[test]
    fn remove_row_col_shifts_and_counts() {
        let mut m = filled(4);
        let dropped = m.remove_row_col(1);
        // Row 1 has 4 cells, column 1 has 3 more (diagonal counted once).
        assert_eq!(dropped, 7);
        assert_eq!(m.dim(), 3);
        assert_eq!(m.get(0, 0), Some(&0));
        assert_eq!(m.get(0, 1), Some(&2));
        assert_eq!(m.get(1, 2), Some(&23));
        assert_eq!(m.get(2, 2), Some(&33));
        assert_eq!(m.count_present(), 9);
    }

    #[test]
    fn remove_last_and_regrow_leaves_no_stale_cells() {
        let mut m = filled(3);
        m.remove_row_col(2);
        m.grow();
        assert_eq!(m.dim(), 3);
        for i in 0..3 {
            assert!(m.get(2, i).is_none());
            assert!(m.get(i, 2).is_none());
        }
    }

    #[test]
    fn next_present_scans_row_major() {
        let mut m = SquareMatrix::new();
        for _ in 0..3 {
            m.grow();
        }
        m.set(0, 2, ());
        m.set(2, 0, ());
        assert_eq!(m.next_present(0, 0), Some((0, 2)));
        assert_eq!(m.next_present(0, 3), Some((2, 0)));
        assert_eq!(m.next_present(1, 0), Some((2, 0)));
        assert_eq!(m.next_present(2, 1), None);

        let seen: Vec<_> = m.iter_present().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(seen, vec![(0, 2), (2, 0)]);
    }
}

//! `IncidenceMatrix`: a 2D dense matrix whose shape changes one row or column at a time.
//!
//! Storage is a single contiguous row-major `Vec`, so a full row is always available as a
//! slice. This keeps per-row scans (degree counting) cache-friendly at the cost of
//! column insertion/removal, which has to compact the whole buffer.
//!
//! # Shape operations
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push_row` | \(O(\text{cols})\) amortized |
//! | `remove_row` | \(O(\text{rows} \cdot \text{cols})\) |
//! | `push_col` | \(O(\text{rows} \cdot \text{cols})\) |
//! | `remove_col` / `retain_cols` | \(O(\text{rows} \cdot \text{cols})\) |

/// A row-major 2D matrix that can grow and shrink along both axes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncidenceMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> IncidenceMatrix<T> {
    /// Creates an empty `0 x 0` matrix.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates an empty matrix with room for `rows x cols` cells.
    pub fn with_capacity(rows: usize, cols: usize) -> Self {
        Self {
            data: Vec::with_capacity(rows.saturating_mul(cols)),
            rows: 0,
            cols: 0,
        }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice of length `cols()`.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterates over all rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| {
            let start = r * self.cols;
            &self.data[start..start + self.cols]
        })
    }

    /// Removes a row, shifting all subsequent rows up by one.
    ///
    /// # Panics
    /// Panics if `row >= rows()`.
    pub fn remove_row(&mut self, row: usize) {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        let start = row * self.cols;
        self.data.drain(start..start + self.cols);
        self.rows -= 1;
    }

    /// Removes a column, shifting all subsequent columns left by one.
    ///
    /// # Panics
    /// Panics if `col >= cols()`.
    pub fn remove_col(&mut self, col: usize) {
        assert!(col < self.cols, "column {col} out of bounds for {} columns", self.cols);
        self.retain_cols(|c| c != col);
    }

    /// Keeps only the columns for which `keep(col)` returns true, preserving order.
    ///
    /// `keep` is called exactly once per column, in ascending order.
    pub fn retain_cols<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize) -> bool,
    {
        if self.cols == 0 {
            return;
        }
        let mask: Vec<bool> = (0..self.cols).map(&mut keep).collect();
        let kept = mask.iter().filter(|&&k| k).count();
        if kept == self.cols {
            return;
        }

        let cols = self.cols;
        let mut i = 0usize;
        self.data.retain(|_| {
            let keep = mask[i % cols];
            i += 1;
            keep
        });
        self.cols = kept;
    }

    /// Removes every row and column.
    pub fn clear(&mut self) {
        self.data.clear();
        self.rows = 0;
        self.cols = 0;
    }
}

impl<T: Clone> IncidenceMatrix<T> {
    /// Appends a row filled with `fill`.
    pub fn push_row(&mut self, fill: T) {
        self.data.extend(core::iter::repeat(fill).take(self.cols));
        self.rows += 1;
    }

    /// Appends a column filled with `fill`.
    ///
    /// Every row grows by one cell, so the buffer is rebuilt.
    pub fn push_col(&mut self, fill: T) {
        let old = self.cols;
        let mut data = Vec::with_capacity(self.rows * (old + 1));
        for r in 0..self.rows {
            data.extend_from_slice(&self.data[r * old..(r + 1) * old]);
            data.push(fill.clone());
        }
        self.data = data;
        self.cols = old + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_grows_along_both_axes() {
        let mut mat = IncidenceMatrix::new();
        assert!(mat.is_empty());

        mat.push_row(0i8);
        mat.push_row(0);
        assert_eq!((mat.rows(), mat.cols()), (2, 0));
        assert_eq!(mat.row(0), Some(&[][..]));

        mat.push_col(0);
        mat.push_col(0);
        *mat.get_mut(0, 1).unwrap() = -1;
        *mat.get_mut(1, 1).unwrap() = 1;

        mat.push_row(7);
        assert_eq!(mat.row(0).unwrap(), &[0, -1]);
        assert_eq!(mat.row(1).unwrap(), &[0, 1]);
        assert_eq!(mat.row(2).unwrap(), &[7, 7]);
        assert_eq!(mat.get(2, 2), None);
        assert_eq!(mat.get(3, 0), None);
    }

    #[test]
    fn test_matrix_remove_row_and_col() {
        let mut mat = IncidenceMatrix::new();
        for _ in 0..3 {
            mat.push_row(0i32);
        }
        for _ in 0..3 {
            mat.push_col(0);
        }
        let mut val = 0;
        for r in 0..3 {
            for c in 0..3 {
                *mat.get_mut(r, c).unwrap() = val;
                val += 1;
            }
        }

        mat.remove_col(1);
        assert_eq!(mat.cols(), 2);
        assert_eq!(mat.row(0).unwrap(), &[0, 2]);
        assert_eq!(mat.row(2).unwrap(), &[6, 8]);

        mat.remove_row(0);
        assert_eq!(mat.rows(), 2);
        let rows: Vec<&[i32]> = mat.iter_rows().collect();
        assert_eq!(rows, vec![&[3, 5][..], &[6, 8][..]]);
    }

    #[test]
    fn test_matrix_retain_cols_keeps_order() {
        let mut mat = IncidenceMatrix::new();
        mat.push_row(0usize);
        for c in 0..5 {
            mat.push_col(c);
        }
        *mat.get_mut(0, 0).unwrap() = 10;
        mat.retain_cols(|c| c % 2 == 0);
        assert_eq!(mat.cols(), 3);
        assert_eq!(mat.row(0).unwrap(), &[10, 2, 4]);

        mat.retain_cols(|_| false);
        assert_eq!(mat.cols(), 0);
        assert_eq!(mat.rows(), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_matrix_remove_missing_col_panics() {
        let mut mat: IncidenceMatrix<i8> = IncidenceMatrix::new();
        mat.push_row(0);
        mat.remove_col(0);
    }

    #[test]
    fn test_matrix_clear() {
        let mut mat = IncidenceMatrix::with_capacity(4, 4);
        mat.push_row(1u8);
        mat.push_col(1);
        mat.clear();
        assert_eq!((mat.rows(), mat.cols()), (0, 0));
        mat.clear();
        assert!(mat.is_empty());
    }
}

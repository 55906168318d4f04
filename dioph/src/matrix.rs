//! Dense integer matrices.
//!
//! The entries are stored row-major in a flat buffer. Rows can be removed,
//! which is how the reducer drops redundant equations; the buffer is compacted
//! and the row count shrinks, so indices past the removed row simply shift up
//! by one.

use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

use itertools::Itertools as _;

use crate::Int;
use crate::vector::Vector;

/// A dense row-major matrix of integers.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    entries: Vec<T>,
}

impl<T: Int> Matrix<T> {
    /// Creates the zero matrix of the given dimensions.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![T::zero(); rows * cols],
        }
    }

    /// Creates the `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Creates a matrix of the given dimensions from an iterator over the
    /// entries in row-major order.
    pub fn from_iter<I: IntoIterator<Item = T>>(rows: usize, cols: usize, iter: I) -> Self {
        let entries: Vec<_> = iter.into_iter().collect();
        assert_eq!(
            entries.len(),
            rows * cols,
            "Iterator yielded the wrong number of entries."
        );
        Self { rows, cols, entries }
    }

    /// Creates a matrix from a slice of equally long rows.
    pub fn from_rows<U: AsRef<[T]>>(rows: &[U]) -> Self {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut entries = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "All rows must have the same length.");
            entries.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            entries,
        }
    }

    /// The number of rows of the matrix.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// The number of columns of the matrix.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Is the matrix empty, i.e. has it zero rows or columns?
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns the row `r` as a slice.
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.cols;
        &self.entries[start..start + self.cols]
    }

    /// Returns the row `r` as a mutable slice.
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start = r * self.cols;
        &mut self.entries[start..start + self.cols]
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> {
        (0..self.rows).map(|r| self.row(r))
    }

    /// Returns an iterator over the entries of column `c`, top to bottom.
    pub fn col(&self, c: usize) -> impl DoubleEndedIterator<Item = T> {
        (0..self.rows).map(move |r| self[(r, c)])
    }

    /// Swap two columns, applied to every row.
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }

        for r in 0..self.rows {
            self.entries.swap(r * self.cols + i, r * self.cols + j);
        }
    }

    /// Adds `c` times column `src` to column `dst`, applied to every row.
    pub fn col_multiply_add(&mut self, dst: usize, src: usize, c: T) {
        assert_ne!(dst, src, "Tried to add a column to itself.");
        for r in 0..self.rows {
            let e = self[(r, src)];
            self[(r, dst)] = self[(r, dst)] + c * e;
        }
    }

    /// Removes row `r`, shifting the rows below it up by one.
    pub fn remove_row(&mut self, r: usize) {
        assert!(r < self.rows, "Row index out of bounds.");
        let start = r * self.cols;
        self.entries.drain(start..start + self.cols);
        self.rows -= 1;
    }

    /// Matrix-vector product.
    pub fn mul_vec(&self, v: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.cols,
            v.dim(),
            "Vector must have an entry for each column in the matrix."
        );
        Vector::from_iter(self.rows, self.rows().map(|r| v.dot(r)))
    }
}

impl<T: Int> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(r < self.rows && c < self.cols, "Matrix index out of bounds.");
        &self.entries[r * self.cols + c]
    }
}

impl<T: Int> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(r < self.rows && c < self.cols, "Matrix index out of bounds.");
        &mut self.entries[r * self.cols + c]
    }
}

impl<T: Int> Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "[{}]", row.iter().format(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identity_layout() {
        let m = Matrix::<i64>::identity(3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(m[(r, c)], if r == c { 1 } else { 0 });
            }
        }
    }

    #[test]
    fn swap_columns_applies_to_every_row() {
        let mut m = Matrix::from_rows(&[[1i64, 2, 3], [4, 5, 6]]);
        m.swap_columns(0, 2);
        assert_eq!(m.row(0), &[3, 2, 1]);
        assert_eq!(m.row(1), &[6, 5, 4]);
        assert_eq!(m.col(0).collect::<Vec<_>>(), vec![3, 6]);
    }

    #[test]
    fn col_multiply_add_applies_to_every_row() {
        let mut m = Matrix::from_rows(&[[1i64, 2], [3, 4]]);
        m.col_multiply_add(1, 0, -2);
        assert_eq!(m.row(0), &[1, 0]);
        assert_eq!(m.row(1), &[3, -2]);
    }

    #[test]
    fn remove_first_row() {
        let mut m = Matrix::from_rows(&[[1i64, 2], [3, 4], [5, 6]]);
        m.remove_row(0);
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.row(0), &[3, 4]);
        assert_eq!(m.row(1), &[5, 6]);
    }

    #[test]
    fn remove_middle_row() {
        let mut m = Matrix::from_rows(&[[1i64, 2], [3, 4], [5, 6]]);
        m.remove_row(1);
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.row(0), &[1, 2]);
        assert_eq!(m.row(1), &[5, 6]);
    }

    #[test]
    fn mul_vec() {
        let m = Matrix::from_rows(&[[2i64, 0, 1], [-1, 3, 0]]);
        let v = Vector::from_entries([1i64, 2, 3]);
        assert_eq!(m.mul_vec(&v).as_slice(), &[5, 5]);
    }

    #[test]
    fn zero_column_matrix_has_empty_rows() {
        let m = Matrix::<i64>::zero(2, 0);
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 2);
        assert!(m.row(1).is_empty());
    }
}

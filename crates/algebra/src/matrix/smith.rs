//! In-place Smith reduction over a Euclidean domain.

use super::Matrix;
use crate::number_theory::{DivResult, DivisionByZero};
use crate::ring::{AdditiveGroup, EuclideanDomain, Ring};

/// A diagonalized matrix together with the number of non-zero diagonal
/// entries, as returned by [`Matrix::into_smith`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmithForm<T> {
    pub matrix: Matrix<T>,
    pub rank: usize,
}

impl<T: EuclideanDomain> Matrix<T> {
    /// Diagonalizes the matrix in place under unimodular row and column
    /// operations and returns the number of non-zero diagonal entries.
    ///
    /// For each leading index the entry of smallest Euclidean function in
    /// the trailing submatrix is swapped into the pivot position, then the
    /// column below and the row to the right of the pivot are cleared by
    /// Euclidean division. Whenever a division leaves a non-zero remainder,
    /// that remainder has a strictly smaller Euclidean function than the
    /// pivot, so re-running the pivot search terminates: the Euclidean
    /// function takes values in the non-negative integers and cannot
    /// decrease forever.
    ///
    /// Diagonal entries are normalized by their
    /// [`canonical_unit`](EuclideanDomain::canonical_unit), so over the
    /// integers the diagonal is non-negative.
    pub fn smith(&mut self) -> usize {
        let limit = self.nrows.min(self.ncols);
        for k in 0..limit {
            if !self.place_and_clear_pivot(k) {
                self.normalize_diagonal(k);
                return k;
            }
        }
        self.normalize_diagonal(limit);
        limit
    }

    /// Consuming variant of [`Matrix::smith`].
    pub fn into_smith(mut self) -> SmithForm<T> {
        let rank = self.smith();
        SmithForm { matrix: self, rank }
    }

    /// Establishes a non-zero pivot at `(k, k)` with its column and row
    /// cleared. Returns `false` when the trailing submatrix is entirely
    /// zero.
    fn place_and_clear_pivot(&mut self, k: usize) -> bool {
        loop {
            let Some((pivot_row, pivot_col)) = self.min_norm_entry(k) else {
                return false;
            };
            self.swap_rows_from(pivot_row, k, k);
            self.swap_cols_from(pivot_col, k, k);
            let pivot = self[(k, k)];

            let mut clean = true;
            for row in k + 1..self.nrows {
                let entry = self[(row, k)];
                if entry.is_zero() {
                    continue;
                }
                let DivResult {
                    quotient,
                    remainder,
                } = euclidean_step(entry, pivot);
                self.add_scaled_row_from(k, row, -quotient, k);
                clean &= remainder.is_zero();
            }
            if !clean {
                continue;
            }
            for col in k + 1..self.ncols {
                let entry = self[(k, col)];
                if entry.is_zero() {
                    continue;
                }
                let DivResult {
                    quotient,
                    remainder,
                } = euclidean_step(entry, pivot);
                self.add_scaled_col_from(k, col, -quotient, k);
                clean &= remainder.is_zero();
            }
            if clean {
                return true;
            }
        }
    }

    /// The position of a non-zero entry of minimal Euclidean function in the
    /// submatrix rooted at `(k, k)`, scanning row-major so ties keep the
    /// first occurrence.
    fn min_norm_entry(&self, k: usize) -> Option<(usize, usize)> {
        let mut best: Option<(u64, (usize, usize))> = None;
        for row in k..self.nrows {
            for col in k..self.ncols {
                let entry = self.entries[self.flat(row, col)];
                if entry.is_zero() {
                    continue;
                }
                let norm = entry.euclidean_function();
                if best.is_none_or(|(smallest, _)| norm < smallest) {
                    best = Some((norm, (row, col)));
                }
            }
        }
        best.map(|(_, position)| position)
    }

    fn normalize_diagonal(&mut self, count: usize) {
        for i in 0..count {
            let unit = self[(i, i)].canonical_unit();
            if unit != T::one() {
                self.scale_row(i, unit);
            }
        }
    }
}

/// Division by the pivot. The pivot is non-zero by construction.
fn euclidean_step<T: EuclideanDomain>(entry: T, pivot: T) -> DivResult<T> {
    match entry.divide(pivot) {
        Ok(result) => result,
        Err(DivisionByZero) => unreachable!("the pivot is a non-zero entry"),
    }
}

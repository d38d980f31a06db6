//! In-place row-echelon reduction over a field.

use super::Matrix;
use crate::ring::{AdditiveGroup, Field};

/// A matrix in row-echelon form together with its rank, as returned by
/// [`Matrix::into_row_echelon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEchelonForm<T> {
    pub matrix: Matrix<T>,
    pub rank: usize,
}

impl<T: Field> Matrix<T> {
    /// Reduces the matrix to row-echelon form in place and returns the
    /// number of non-zero rows, i.e. the rank.
    ///
    /// The result is row equivalent to the input but not necessarily
    /// *reduced*: entries above a pivot are left alone, which is all the
    /// rank computation needs. Arithmetic over a field is exact, so pivot
    /// selection just takes the first non-zero entry of the column.
    pub fn row_echelon(&mut self) -> usize {
        let mut pivot_row = 0;
        for col in 0..self.ncols {
            let Some(row) = (pivot_row..self.nrows).find(|&row| !self[(row, col)].is_zero())
            else {
                continue;
            };
            self.swap_rows_from(row, pivot_row, col);
            for below in pivot_row + 1..self.nrows {
                if self[(below, col)].is_zero() {
                    continue;
                }
                let factor = -self[(below, col)] / self[(pivot_row, col)];
                self.add_scaled_row_from(pivot_row, below, factor, col);
            }
            pivot_row += 1;
        }
        pivot_row
    }

    /// Consuming variant of [`Matrix::row_echelon`].
    pub fn into_row_echelon(mut self) -> RowEchelonForm<T> {
        let rank = self.row_echelon();
        RowEchelonForm { matrix: self, rank }
    }

    /// The rank, computed on a scratch copy.
    pub fn rank(&self) -> usize {
        self.clone().row_echelon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ZMod, Z2};

    fn matrix<const P: u32>(entries: &[i64], nrows: usize, ncols: usize) -> Matrix<ZMod<P>> {
        Matrix::from_row_major(
            entries.iter().map(|&n| ZMod::new(n)).collect(),
            nrows,
            ncols,
        )
        .unwrap()
    }

    /// Leading-entry columns must strictly increase, with zero rows only at
    /// the bottom.
    fn is_row_echelon<T: Field>(matrix: &Matrix<T>) -> bool {
        let leading = |row: usize| (0..matrix.ncols()).find(|&col| !matrix[(row, col)].is_zero());
        let mut previous = None;
        for row in 0..matrix.nrows() {
            match (previous, leading(row)) {
                (Some(None), Some(_)) => return false,
                (Some(Some(last)), Some(col)) if col <= last => return false,
                (_, current) => previous = Some(current),
            }
        }
        true
    }

    #[test]
    fn identity_is_already_reduced() {
        let mut m = Matrix::<ZMod<7>>::id(5);
        assert!(is_row_echelon(&m));
        let expected = m.clone();
        assert_eq!(m.row_echelon(), 5);
        assert_eq!(m, expected);
    }

    #[test]
    fn zero_matrices_have_rank_zero() {
        for (nrows, ncols) in [(2, 5), (4, 4), (6, 3)] {
            let m = Matrix::<ZMod<11>>::zero(nrows, ncols);
            assert!(is_row_echelon(&m));
            let result = m.clone().into_row_echelon();
            assert_eq!(result.matrix, m);
            assert_eq!(result.rank, 0);
        }
    }

    #[test]
    fn empty_matrices_have_rank_zero() {
        assert_eq!(Matrix::<ZMod<5>>::zero(0, 3).row_echelon(), 0);
        assert_eq!(Matrix::<ZMod<5>>::zero(3, 0).row_echelon(), 0);
    }

    #[test]
    fn full_rank_rectangle() {
        let m = matrix::<13>(&[2, 0, 3, 2, 1, 5, 3, 0], 2, 4);
        let result = m.clone().into_row_echelon();
        assert!(is_row_echelon(&result.matrix));
        assert_eq!(result.rank, 2);

        let transposed = m.transpose().into_row_echelon();
        assert!(is_row_echelon(&transposed.matrix));
        assert_eq!(transposed.rank, 2);
    }

    #[test]
    fn dependent_rows_drop_the_rank() {
        // Row 2 = row 0 + row 1 over Z/5.
        let m = matrix::<5>(&[1, 2, 0, 0, 1, 3, 1, 3, 3], 3, 3);
        let result = m.into_row_echelon();
        assert!(is_row_echelon(&result.matrix));
        assert_eq!(result.rank, 2);
    }

    #[test]
    fn all_zero_columns_are_skipped() {
        let m = matrix::<3>(&[0, 1, 2, 0, 1, 0, 0, 0, 1], 3, 3);
        let result = m.into_row_echelon();
        assert!(is_row_echelon(&result.matrix));
        assert_eq!(result.rank, 2);
    }

    #[test]
    fn reduction_over_the_two_element_field() {
        let entries = [1, 1, 0, 1, 0, 1, 0, 1, 1].map(Z2::new);
        let m = Matrix::from_row_major(entries.to_vec(), 3, 3).unwrap();
        let result = m.into_row_echelon();
        assert!(is_row_echelon(&result.matrix));
        assert_eq!(result.rank, 2);
    }
}

//! Dense matrices generic over a coefficient carrier.
//!
//! A matrix owns its entries in a single row-major buffer. The way the
//! entries are stored means row operations are cheaper than column
//! operations, which is the access pattern of both reductions; column
//! operations are only performed by the Smith reduction, where they are
//! unavoidable.
//!
//! Fallible operations come in two flavours: `checked_*` methods return a
//! [`MatrixError`] by value, and the operator impls (`+`, `-`, `*`, indexing)
//! are sugar over those that panic on misuse, like the primitive numeric
//! types.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use itertools::Itertools;

use crate::ring::{AdditiveGroup, Ring};

mod echelon;
mod smith;

pub use echelon::RowEchelonForm;
pub use smith::SmithForm;

/// Shape and bounds errors for matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The shapes of the operands do not fit the operation. For
    /// construction, `rhs` reports the storage as a `len x 1` shape.
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Indexed access outside of the matrix.
    OutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { lhs, rhs } => write!(
                f,
                "shape mismatch: {}x{} against {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            Self::OutOfRange { index, shape } => write!(
                f,
                "index ({}, {}) out of range for a {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// A dense `nrows x ncols` matrix with entries in `T`.
///
/// Zero-sized matrices (no rows or no columns) are permitted; they show up
/// as the boundary operators of the extreme dimensions of a chain complex.
/// Equality is component-wise and requires identical shapes.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    entries: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from entries listed row by row. The storage length
    /// must be exactly `nrows * ncols`.
    pub fn from_row_major(
        entries: Vec<T>,
        nrows: usize,
        ncols: usize,
    ) -> Result<Self, MatrixError> {
        if entries.len() != nrows * ncols {
            return Err(MatrixError::ShapeMismatch {
                lhs: (nrows, ncols),
                rhs: (entries.len(), 1),
            });
        }
        Ok(Self {
            nrows,
            ncols,
            entries,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    fn flat(&self, row: usize, col: usize) -> usize {
        row * self.ncols + col
    }

    /// Bounds-checked access to the entry at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::OutOfRange {
                index: (row, col),
                shape: (self.nrows, self.ncols),
            });
        }
        let index = self.flat(row, col);
        Ok(&self.entries[index])
    }

    /// Bounds-checked mutable access to the entry at `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::OutOfRange {
                index: (row, col),
                shape: (self.nrows, self.ncols),
            });
        }
        let index = self.flat(row, col);
        Ok(&mut self.entries[index])
    }

    /// The underlying row-major storage.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch {
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(())
    }
}

impl<T: Copy> Matrix<T> {
    /// A new matrix with rows and columns exchanged.
    pub fn transpose(&self) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len());
        for col in 0..self.ncols {
            for row in 0..self.nrows {
                entries.push(self.entries[self.flat(row, col)]);
            }
        }
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            entries,
        }
    }

    /// Swaps rows `r1` and `r2`, restricted to the columns at or after
    /// `from_col`.
    pub(crate) fn swap_rows_from(&mut self, r1: usize, r2: usize, from_col: usize) {
        if r1 == r2 {
            return;
        }
        for col in from_col..self.ncols {
            let (i1, i2) = (self.flat(r1, col), self.flat(r2, col));
            self.entries.swap(i1, i2);
        }
    }

    /// Swaps columns `c1` and `c2`, restricted to the rows at or after
    /// `from_row`.
    pub(crate) fn swap_cols_from(&mut self, c1: usize, c2: usize, from_row: usize) {
        if c1 == c2 {
            return;
        }
        for row in from_row..self.nrows {
            let (i1, i2) = (self.flat(row, c1), self.flat(row, c2));
            self.entries.swap(i1, i2);
        }
    }
}

impl<T: AdditiveGroup> Matrix<T> {
    /// The `nrows x ncols` zero matrix.
    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: vec![T::zero(); nrows * ncols],
        }
    }

    /// Whether every entry is zero. A zero-sized matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(T::is_zero)
    }

    /// Component-wise sum; the shapes must agree.
    pub fn checked_add(mut self, rhs: &Self) -> Result<Self, MatrixError> {
        self.checked_add_assign(rhs)?;
        Ok(self)
    }

    /// Component-wise difference; the shapes must agree.
    pub fn checked_sub(mut self, rhs: &Self) -> Result<Self, MatrixError> {
        self.checked_sub_assign(rhs)?;
        Ok(self)
    }

    pub fn checked_add_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(rhs)?;
        for (lhs, rhs) in self.entries.iter_mut().zip_eq(&rhs.entries) {
            *lhs += *rhs;
        }
        Ok(())
    }

    pub fn checked_sub_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(rhs)?;
        for (lhs, rhs) in self.entries.iter_mut().zip_eq(&rhs.entries) {
            *lhs -= *rhs;
        }
        Ok(())
    }
}

impl<T: Ring> Matrix<T> {
    /// The `n x n` identity matrix.
    ///
    /// # Example
    /// ```
    /// # use algebra::{Int, Matrix};
    /// let id = Matrix::<Int>::id(2);
    /// assert_eq!(id[(0, 0)], Int::new(1));
    /// assert_eq!(id[(0, 1)], Int::new(0));
    /// ```
    pub fn id(n: usize) -> Self {
        let mut id = Self::zero(n, n);
        for i in 0..n {
            id[(i, i)] = T::one();
        }
        id
    }

    /// The matrix product, by the standard triple loop. The inner dimensions
    /// must agree.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch {
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let mut product = Self::zero(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = T::zero();
                for k in 0..self.ncols {
                    sum += self.entries[self.flat(i, k)] * rhs.entries[rhs.flat(k, j)];
                }
                product[(i, j)] = sum;
            }
        }
        Ok(product)
    }

    /// Adds `scale * row(source)` to `row(target)`, restricted to the columns
    /// at or after `from_col`.
    pub(crate) fn add_scaled_row_from(
        &mut self,
        source: usize,
        target: usize,
        scale: T,
        from_col: usize,
    ) {
        for col in from_col..self.ncols {
            let value = scale * self.entries[self.flat(source, col)];
            let index = self.flat(target, col);
            self.entries[index] += value;
        }
    }

    /// Adds `scale * col(source)` to `col(target)`, restricted to the rows at
    /// or after `from_row`.
    pub(crate) fn add_scaled_col_from(
        &mut self,
        source: usize,
        target: usize,
        scale: T,
        from_row: usize,
    ) {
        for row in from_row..self.nrows {
            let value = scale * self.entries[self.flat(row, source)];
            let index = self.flat(row, target);
            self.entries[index] += value;
        }
    }

    /// Multiplies `row` by `scale` in place.
    pub(crate) fn scale_row(&mut self, row: usize, scale: T) {
        for col in 0..self.ncols {
            let index = self.flat(row, col);
            self.entries[index] *= scale;
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    /// Panics when the index is out of range; see [`Matrix::at`] for the
    /// checked access.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(entry) => entry,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.at_mut(row, col) {
            Ok(entry) => entry,
            Err(error) => panic!("{error}"),
        }
    }
}

/// # Panics
/// The operator impls panic on shape mismatches; the `checked_*` methods
/// report them by value instead.
impl<T: AdditiveGroup> Add for Matrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match self.checked_add(&rhs) {
            Ok(sum) => sum,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: AdditiveGroup> Sub for Matrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match self.checked_sub(&rhs) {
            Ok(difference) => difference,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: AdditiveGroup> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(error) = self.checked_add_assign(rhs) {
            panic!("{error}");
        }
    }
}

impl<T: AdditiveGroup> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(error) = self.checked_sub_assign(rhs) {
            panic!("{error}");
        }
    }
}

impl<T: AdditiveGroup> Neg for Matrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for entry in &mut self.entries {
            *entry = -*entry;
        }
        self
    }
}

impl<T: Ring> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Matrix<T> {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: Ring> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix {}x{} ", self.nrows, self.ncols)?;
        f.debug_list()
            .entries(self.entries.chunks(self.ncols.max(1)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Int;

    fn matrix(entries: &[i64], nrows: usize, ncols: usize) -> Matrix<Int> {
        Matrix::from_row_major(entries.iter().map(|&n| Int::new(n)).collect(), nrows, ncols)
            .unwrap()
    }

    #[test]
    fn construction_checks_the_storage_length() {
        assert!(Matrix::from_row_major(vec![Int::new(1); 6], 2, 3).is_ok());
        assert!(Matrix::from_row_major(vec![Int::new(1); 6], 0, 0).is_err());
        assert_eq!(
            Matrix::from_row_major(vec![Int::new(1); 5], 2, 3),
            Err(MatrixError::ShapeMismatch {
                lhs: (2, 3),
                rhs: (5, 1)
            })
        );
        let empty = Matrix::<Int>::from_row_major(Vec::new(), 0, 4).unwrap();
        assert_eq!(empty.nrows(), 0);
        assert_eq!(empty.ncols(), 4);
        assert!(empty.is_zero());
    }

    #[test]
    fn indexed_access() {
        let mut m = matrix(&[1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(m[(0, 0)], Int::new(1));
        assert_eq!(m[(1, 2)], Int::new(6));
        m[(1, 0)] = Int::new(-4);
        assert_eq!(*m.at(1, 0).unwrap(), Int::new(-4));
        assert_eq!(
            m.at(2, 0),
            Err(MatrixError::OutOfRange {
                index: (2, 0),
                shape: (2, 3)
            })
        );
        assert_eq!(
            m.at_mut(0, 3).err(),
            Some(MatrixError::OutOfRange {
                index: (0, 3),
                shape: (2, 3)
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_out_of_range_panics() {
        let m = matrix(&[1, 2, 3, 4], 2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn transpose() {
        let m = matrix(&[1, 2, 3, 4, 5, 6], 2, 3);
        let expected = matrix(&[1, 4, 2, 5, 3, 6], 3, 2);
        assert_eq!(m.transpose(), expected);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn addition_and_subtraction() {
        let a = matrix(&[1, 2, 3, 4], 2, 2);
        let b = matrix(&[5, 6, 7, 8], 2, 2);
        assert_eq!(a.clone() + b.clone(), matrix(&[6, 8, 10, 12], 2, 2));
        assert_eq!(b.clone() - a.clone(), matrix(&[4, 4, 4, 4], 2, 2));
        assert_eq!(-a.clone(), matrix(&[-1, -2, -3, -4], 2, 2));

        let mut c = a.clone();
        c += &b;
        c -= &a;
        assert_eq!(c, b);

        let wide = matrix(&[0, 0], 1, 2);
        assert_eq!(
            a.checked_add(&wide),
            Err(MatrixError::ShapeMismatch {
                lhs: (2, 2),
                rhs: (1, 2)
            })
        );
    }

    #[test]
    fn multiplication() {
        let a = matrix(&[1, 2, 3, 4, 5, 6], 2, 3);
        let b = matrix(&[7, 8, 9, 10, 11, 12], 3, 2);
        assert_eq!(&a * &b, matrix(&[58, 64, 139, 154], 2, 2));
        assert_eq!(
            a.clone() * Matrix::id(3),
            a,
            "the identity is a right unit"
        );
        assert_eq!(Matrix::id(2) * a.clone(), a, "the identity is a left unit");
        assert_eq!(
            a.checked_mul(&a),
            Err(MatrixError::ShapeMismatch {
                lhs: (2, 3),
                rhs: (2, 3)
            })
        );
    }

    #[test]
    fn multiplication_with_zero_inner_dimension() {
        let tall = Matrix::<Int>::zero(3, 0);
        let wide = Matrix::<Int>::zero(0, 2);
        let product = tall.checked_mul(&wide).unwrap();
        assert_eq!(product, Matrix::zero(3, 2));
    }

    #[test]
    fn factories() {
        let zero = Matrix::<Int>::zero(2, 4);
        assert!(zero.is_zero());
        assert_eq!(zero.nrows(), 2);
        assert_eq!(zero.ncols(), 4);

        let id = Matrix::<Int>::id(3);
        assert!(!id.is_zero());
        assert_eq!(&id * &id, id);
    }
}

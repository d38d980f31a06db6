//! Chain complexes of boundary matrices and their homology.
//!
//! A chain complex over `T` is the data of free modules `C_0, ..., C_{d-1}`
//! and boundary operators `B_n: C_n -> C_{n-1}` with `B_n * B_{n+1} = 0`. The
//! operators are stored as matrices, `B_0` with zero rows; homology is read
//! off the matrix reductions: ranks over a field, diagonal forms over a
//! Euclidean domain.

use std::fmt;

use itertools::Itertools;

use crate::matrix::Matrix;
use crate::ring::{EuclideanDomain, Field, Ring};

/// The error returned when boundary matrices do not form a chain complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainComplexError {
    /// `B_{dim - 1} * B_dim` is non-zero, or the two shapes are
    /// incompatible.
    ChainConditionViolated { dim: usize },
}

impl fmt::Display for ChainComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChainConditionViolated { dim } => write!(
                f,
                "boundary operators at dimensions {} and {} do not compose to zero",
                dim - 1,
                dim
            ),
        }
    }
}

impl std::error::Error for ChainComplexError {}

/// A bounded chain complex, stored as its sequence of boundary matrices
/// `B_0, ..., B_{d-1}`.
///
/// `B_n` maps `n`-chains to `(n-1)`-chains, so `ncols(B_n)` is the rank of
/// `C_n` and consecutive matrices satisfy `ncols(B_n) = nrows(B_{n+1})`.
/// `B_0` has zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainComplex<T> {
    boundaries: Vec<Matrix<T>>,
}

impl<T: Ring> ChainComplex<T> {
    /// Builds a chain complex after checking the chain condition
    /// `B_n * B_{n+1} = 0` on every consecutive pair.
    pub fn new(boundaries: Vec<Matrix<T>>) -> Result<Self, ChainComplexError> {
        let complex = Self::new_unchecked(boundaries);
        complex.validate()?;
        Ok(complex)
    }

    /// Builds a chain complex without checking the chain condition. The
    /// homology of a sequence that is not a chain complex is meaningless;
    /// this is for boundaries that are correct by construction.
    pub fn new_unchecked(boundaries: Vec<Matrix<T>>) -> Self {
        Self { boundaries }
    }

    fn validate(&self) -> Result<(), ChainComplexError> {
        for (n, (lower, upper)) in self.boundaries.iter().tuple_windows().enumerate() {
            let composite = lower
                .checked_mul(upper)
                .map_err(|_| ChainComplexError::ChainConditionViolated { dim: n + 1 })?;
            if !composite.is_zero() {
                return Err(ChainComplexError::ChainConditionViolated { dim: n + 1 });
            }
        }
        Ok(())
    }

    /// The number of chain groups `d`; the boundaries are
    /// `B_0, ..., B_{d-1}`.
    pub fn dimension(&self) -> usize {
        self.boundaries.len()
    }

    /// The boundary operator `B_n`.
    ///
    /// # Panics
    /// Panics when `n >= self.dimension()`.
    pub fn boundary(&self, n: usize) -> &Matrix<T> {
        &self.boundaries[n]
    }

    pub fn boundaries(&self) -> &[Matrix<T>] {
        &self.boundaries
    }
}

/// Betti numbers and torsion invariants of a chain complex, indexed by
/// dimension.
///
/// `torsion[n]` lists non-unit coefficients `a` such that the torsion part
/// of `H_n` is the direct sum of the cyclic modules `T/aT`. Over a field
/// every list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Homology<T> {
    pub betti_numbers: Vec<usize>,
    pub torsion: Vec<Vec<T>>,
}

/// Homology with coefficients in a field, via row-echelon ranks.
///
/// `betti[n] = dim C_n - rank B_n - rank B_{n+1}`, which is the dimension
/// of `ker B_n / im B_{n+1}`; fields have no torsion.
pub fn homology_field<T: Field>(chain_complex: &ChainComplex<T>) -> Homology<T> {
    let boundaries = chain_complex.boundaries();
    let mut homology = Homology {
        betti_numbers: vec![0; boundaries.len()],
        torsion: vec![Vec::new(); boundaries.len()],
    };
    let mut rank_above = 0;
    for (n, boundary) in boundaries.iter().enumerate().rev() {
        let rank = boundary.rank();
        let nullity = boundary.ncols() - rank;
        homology.betti_numbers[n] = nullity - rank_above;
        rank_above = rank;
    }
    homology
}

/// Homology with coefficients in a Euclidean domain, via Smith reductions.
///
/// The diagonal of the reduced `B_{n+1}` describes `im B_{n+1}` inside
/// `ker B_n`: unit entries cancel free generators one for one, and each
/// non-unit entry `a` both cancels a free generator and contributes a cyclic
/// summand `T/aT` to `H_n`.
pub fn homology_euclidean<T: EuclideanDomain>(chain_complex: &ChainComplex<T>) -> Homology<T> {
    let boundaries = chain_complex.boundaries();
    let mut homology = Homology {
        betti_numbers: vec![0; boundaries.len()],
        torsion: vec![Vec::new(); boundaries.len()],
    };
    let mut units_above = 0;
    let mut torsion_above: Vec<T> = Vec::new();
    for (n, boundary) in boundaries.iter().enumerate().rev() {
        let reduced = boundary.clone().into_smith();
        // The reduction does not promise that units precede the non-unit
        // entries on the diagonal, so split by value, not by position.
        let non_units: Vec<T> = (0..reduced.rank)
            .map(|i| reduced.matrix[(i, i)])
            .filter(|entry| entry.euclidean_function() != 1)
            .collect();
        let units = reduced.rank - non_units.len();
        let nullity = boundary.ncols() - reduced.rank;
        homology.betti_numbers[n] = nullity - units_above - torsion_above.len();
        homology.torsion[n] = std::mem::replace(&mut torsion_above, non_units);
        units_above = units;
    }
    homology
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Int, ZMod, Z2};

    fn points<T: Ring>(n: usize) -> ChainComplex<T> {
        ChainComplex::new(vec![Matrix::zero(0, n)]).unwrap()
    }

    fn points_reduced<T: Ring>(n: usize) -> ChainComplex<T> {
        let augmentation = Matrix::from_row_major(vec![T::one(); n], 1, n).unwrap();
        ChainComplex::new(vec![augmentation]).unwrap()
    }

    fn n_sphere<T: Ring>(n: usize) -> ChainComplex<T> {
        let mut boundaries = vec![Matrix::zero(0, 0); n + 1];
        match n {
            0 => boundaries[0] = Matrix::zero(0, 2),
            1 => {
                boundaries[0] = Matrix::zero(0, 1);
                boundaries[1] = Matrix::zero(1, 1);
            }
            _ => {
                boundaries[0] = Matrix::zero(0, 1);
                boundaries[1] = Matrix::zero(1, 0);
                boundaries[n] = Matrix::zero(0, 1);
            }
        }
        ChainComplex::new(boundaries).unwrap()
    }

    /// The cellular chain complex of the Klein bottle: one vertex, two
    /// edges, one face glued along `aba^{-1}b`.
    fn klein_bottle<T: Ring + From<i64>>() -> ChainComplex<T> {
        let b2 = Matrix::from_row_major(vec![T::from(2), T::from(0)], 2, 1).unwrap();
        ChainComplex::new(vec![Matrix::zero(0, 1), Matrix::zero(1, 2), b2]).unwrap()
    }

    #[test]
    fn accessors() {
        let complex = n_sphere::<Int>(2);
        assert_eq!(complex.dimension(), 3);
        assert_eq!(complex.boundary(0).ncols(), 1);
        assert_eq!(complex.boundaries().len(), 3);
    }

    #[test]
    fn the_checked_constructor_rejects_non_complexes() {
        let b1 = Matrix::from_row_major(vec![Int::new(1)], 1, 1).unwrap();
        let b2 = Matrix::from_row_major(vec![Int::new(1)], 1, 1).unwrap();
        assert_eq!(
            ChainComplex::new(vec![b1.clone(), b2.clone()]),
            Err(ChainComplexError::ChainConditionViolated { dim: 1 })
        );

        // Incompatible shapes are reported the same way.
        assert_eq!(
            ChainComplex::new(vec![Matrix::<Int>::zero(0, 2), Matrix::zero(3, 1)]),
            Err(ChainComplexError::ChainConditionViolated { dim: 1 })
        );

        // The unchecked constructor accepts anything.
        let complex = ChainComplex::new_unchecked(vec![b1, b2]);
        assert_eq!(complex.dimension(), 2);
    }

    #[test]
    fn homology_of_points() {
        for n in [1, 9] {
            let over_z2 = homology_field(&points::<Z2>(n));
            assert_eq!(over_z2.betti_numbers, vec![n]);
            assert_eq!(over_z2.torsion, vec![vec![]]);

            let over_z = homology_euclidean(&points::<Int>(n));
            assert_eq!(over_z.betti_numbers, vec![n]);
            assert_eq!(over_z.torsion, vec![vec![]]);

            let reduced_over_z2 = homology_field(&points_reduced::<Z2>(n));
            assert_eq!(reduced_over_z2.betti_numbers, vec![n - 1]);

            let reduced_over_z = homology_euclidean(&points_reduced::<Int>(n));
            assert_eq!(reduced_over_z.betti_numbers, vec![n - 1]);
            assert_eq!(reduced_over_z.torsion, vec![vec![]]);
        }
    }

    #[test]
    fn homology_of_spheres() {
        let expected_betti = |n: usize| {
            if n == 0 {
                vec![2]
            } else {
                let mut betti = vec![0; n + 1];
                betti[0] = 1;
                betti[n] = 1;
                betti
            }
        };

        for n in [0, 1, 2, 9] {
            let homology = homology_euclidean(&n_sphere::<Int>(n));
            assert_eq!(homology.betti_numbers, expected_betti(n), "S^{n} over Z");
            assert_eq!(homology.torsion, vec![Vec::<Int>::new(); n + 1]);

            let homology = homology_field(&n_sphere::<ZMod<5>>(n));
            assert_eq!(homology.betti_numbers, expected_betti(n), "S^{n} over Z/5");
        }
    }

    #[test]
    fn homology_of_the_klein_bottle() {
        let over_z = homology_euclidean(&klein_bottle::<Int>());
        assert_eq!(over_z.betti_numbers, vec![1, 1, 0]);
        assert_eq!(
            over_z.torsion,
            vec![vec![], vec![Int::new(2)], vec![]]
        );

        let over_z2 = homology_field(&klein_bottle::<Z2>());
        assert_eq!(over_z2.betti_numbers, vec![1, 2, 1]);
        assert_eq!(over_z2.torsion, vec![vec![], vec![], vec![]]);

        let over_z3 = homology_field(&klein_bottle::<ZMod<3>>());
        assert_eq!(over_z3.betti_numbers, vec![1, 1, 0]);
        assert_eq!(over_z3.torsion, vec![vec![], vec![], vec![]]);
    }

    #[test]
    fn torsion_ignores_units_anywhere_on_the_diagonal() {
        // This boundary reduces to the diagonal [2, 1]: the unit entry ends
        // up after the non-unit one, so the unit count must not assume a
        // unit prefix.
        let entries = [2, 2, 2, 3].map(Int::new);
        let b1 = Matrix::from_row_major(entries.to_vec(), 2, 2).unwrap();
        let complex = ChainComplex::new(vec![Matrix::zero(0, 2), b1]).unwrap();

        let homology = homology_euclidean(&complex);
        assert_eq!(homology.betti_numbers, vec![0, 0]);
        assert_eq!(homology.torsion, vec![vec![Int::new(2)], vec![]]);
    }

    #[test]
    fn field_and_euclidean_homology_agree_on_prime_fields() {
        for complex in [n_sphere::<ZMod<3>>(2), klein_bottle::<ZMod<3>>()] {
            let by_rank = homology_field(&complex);
            let by_smith = homology_euclidean(&complex);
            assert_eq!(by_rank, by_smith);
        }
    }
}

//! From a cubical complex to the chain complex of its boundary operators.

use algebra::{ChainComplex, Matrix, Ring};
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::complex::CubicalComplex;
use crate::simplex::CubicalSimplex;

/// Builds the chain complex of `complex` with coefficients in `T`.
///
/// `B_0` has zero rows (this computes non-reduced homology), and for `k >= 1`
/// the matrix `B_k` sends each `k`-simplex to the signed sum of its
/// codimension-1 faces. The sign schedule over the
/// [`boundary`](CubicalSimplex::boundary) enumeration is `+1, -1, -1, +1`,
/// repeating: collapsing coordinate `i` to its top and bottom endpoints
/// contributes `(-1)^i` and `(-1)^(i+1)` respectively.
///
/// Each dimension level is enumerated in the canonical order given by the
/// simplex total order, so the matrices, and everything computed from them,
/// are reproducible across runs regardless of how the complex was built.
///
/// The result is constructed without the chain-condition check: each
/// `(k-2)`-face appears in two faces of a `k`-simplex with cancelling signs,
/// so `B_{k-1} * B_k = 0` holds by construction. Callers holding the
/// boundaries to a higher standard can re-validate with
/// [`ChainComplex::new`].
pub fn chain_complex_over<T: Ring>(complex: &CubicalComplex) -> ChainComplex<T> {
    let levels = complex.simplices();
    if levels.is_empty() {
        return ChainComplex::new_unchecked(Vec::new());
    }
    let ordered: Vec<Vec<&CubicalSimplex>> = levels
        .iter()
        .map(|level| level.iter().sorted().collect())
        .collect();

    let mut boundaries = Vec::with_capacity(ordered.len());
    boundaries.push(Matrix::zero(0, ordered[0].len()));
    for dimension in 1..ordered.len() {
        let row_of: FxHashMap<&CubicalSimplex, usize> = ordered[dimension - 1]
            .iter()
            .enumerate()
            .map(|(row, &simplex)| (simplex, row))
            .collect();
        let mut boundary = Matrix::zero(ordered[dimension - 1].len(), ordered[dimension].len());
        for (col, simplex) in ordered[dimension].iter().enumerate() {
            for (position, face) in simplex.boundary().into_iter().enumerate() {
                let sign = match position % 4 {
                    0 | 3 => T::one(),
                    _ => -T::one(),
                };
                boundary[(row_of[&face], col)] = sign;
            }
        }
        boundaries.push(boundary);
    }
    ChainComplex::new_unchecked(boundaries)
}

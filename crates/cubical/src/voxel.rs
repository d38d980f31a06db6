//! A cubical complex over 3-dimensional voxel data.

use algebra::{homology_euclidean, homology_field, EuclideanDomain, Field, Homology, Int, Z2, Z3};

use crate::chain::chain_complex_over;
use crate::complex::CubicalComplex;
use crate::simplex::{product, CubicalSimplex};

/// A cubical complex with ambient dimension fixed at 3, built from unit
/// cubes on the voxel lattice.
///
/// This is the entry point for voxel data: a client walks its region,
/// calls [`add_cube`](Self::add_cube) for every solid voxel and asks for
/// homology over the coefficients of its choice.
///
/// # Example
/// ```
/// # use cubical::VoxelComplex;
/// let mut complex = VoxelComplex::new();
/// complex.add_cube(0, 0, 0);
/// complex.add_cube(1, 0, 0);
/// let homology = complex.z_homology();
/// assert_eq!(homology.betti_numbers, vec![1, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VoxelComplex {
    inner: CubicalComplex,
}

impl VoxelComplex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The solid cell of the unit cube with lowest corner `(x, y, z)`.
    fn cube(x: i32, y: i32, z: i32) -> CubicalSimplex {
        product(
            &product(&CubicalSimplex::interval(x), &CubicalSimplex::interval(y)),
            &CubicalSimplex::interval(z),
        )
    }

    /// Adds the closed unit cube with lowest corner `(x, y, z)`: the solid
    /// cell together with its faces, edges and vertices.
    pub fn add_cube(&mut self, x: i32, y: i32, z: i32) {
        match self.inner.add_recursive(Self::cube(x, y, z)) {
            Ok(()) => {}
            // Everything added through this interface has ambient dimension 3.
            Err(mismatch) => unreachable!("{mismatch}"),
        }
    }

    /// Removes the solid cell of the cube at `(x, y, z)`, leaving its
    /// boundary in place. Returns whether the cell is absent afterwards;
    /// `false` means the complex does not have that cell as a removable
    /// top-dimensional simplex.
    pub fn remove_cube(&mut self, x: i32, y: i32, z: i32) -> bool {
        self.inner.remove(&Self::cube(x, y, z))
    }

    /// The underlying cubical complex.
    pub fn complex(&self) -> &CubicalComplex {
        &self.inner
    }

    /// Homology with coefficients in a Euclidean domain, via Smith
    /// reductions of the boundary matrices.
    pub fn homology<T: EuclideanDomain>(&self) -> Homology<T> {
        homology_euclidean(&chain_complex_over(&self.inner))
    }

    /// Homology with coefficients in a field, via row-echelon ranks.
    pub fn field_homology<T: Field>(&self) -> Homology<T> {
        homology_field(&chain_complex_over(&self.inner))
    }

    /// Integral homology: Betti numbers and torsion invariants.
    pub fn z_homology(&self) -> Homology<Int> {
        self.homology()
    }

    /// Homology over the two-element field.
    pub fn z2_homology(&self) -> Homology<Z2> {
        self.field_homology()
    }

    /// Homology over the field with three elements.
    pub fn z3_homology(&self) -> Homology<Z3> {
        self.field_homology()
    }
}

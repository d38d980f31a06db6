//! Cubical complexes built from unit cubes, and the transformation into
//! chain complexes whose homology the [`algebra`] crate computes.
//!
//! The building blocks are [`BasicInterval`] (a lattice point or a unit
//! interval) and [`CubicalSimplex`] (a product of basic intervals). A
//! [`CubicalComplex`] groups simplices by topological dimension and
//! maintains face closure; [`chain_complex_over`] turns it into the chain
//! complex of signed boundary operators. [`VoxelComplex`] specializes the
//! construction to 3-dimensional voxel data.

pub mod chain;
pub mod complex;
pub mod interval;
pub mod simplex;
pub mod voxel;

pub use chain::chain_complex_over;
pub use complex::{AmbientDimensionMismatch, CubicalComplex};
pub use interval::BasicInterval;
pub use simplex::{product, CubicalSimplex, EmptyIntervalList};
pub use voxel::VoxelComplex;

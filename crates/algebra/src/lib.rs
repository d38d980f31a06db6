//! Generic linear algebra over exact coefficient rings, with the canonical
//! matrix reductions needed to compute the homology of a chain complex.
//!
//! The crate is organized bottom-up:
//! - [`number_theory`]: primality, Euclidean division with a non-negative
//!   remainder, extended GCD and modular inverses on machine integers;
//! - [`ring`]: the trait tower [`AdditiveGroup`] / [`Ring`] /
//!   [`CommutativeRing`] / [`EuclideanDomain`] / [`Field`], together with the
//!   concrete carriers [`Int`], [`ZMod`] and [`Z2`];
//! - [`matrix`]: dense matrices generic over a carrier, with in-place
//!   row-echelon reduction over a field and Smith reduction over a Euclidean
//!   domain;
//! - [`chain_complex`]: sequences of boundary matrices and the two homology
//!   computations built on the reductions.
//!
//! Everything is monomorphized; there is no dynamic dispatch on the carrier.

pub mod chain_complex;
pub mod matrix;
pub mod number_theory;
pub mod ring;

mod integer;
mod zmod;

pub use chain_complex::{
    homology_euclidean, homology_field, ChainComplex, ChainComplexError, Homology,
};
pub use integer::Int;
pub use matrix::{Matrix, MatrixError, RowEchelonForm, SmithForm};
pub use number_theory::{DivResult, DivisionByZero};
pub use ring::{AdditiveGroup, CommutativeRing, EuclideanDomain, Field, Ring};
pub use zmod::{Z2, Z3, Z5, Z7, ZMod};

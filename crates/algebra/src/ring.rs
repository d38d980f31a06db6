//! The trait tower describing coefficient carriers.
//!
//! Matrices and reductions are generic over these traits: addition and
//! subtraction need an [`AdditiveGroup`], the matrix product needs a
//! [`Ring`], row-echelon reduction needs a [`Field`], and Smith reduction
//! needs a [`EuclideanDomain`]. The tower passes through [`CommutativeRing`]
//! because the equivalence argument behind the Smith form needs commuting
//! multiplication; a non-commutative carrier does not get a `smith` method at
//! all.
//!
//! Carriers are small `Copy` values and all generics are monomorphized, so a
//! matrix over [`Int`](crate::Int) or [`ZMod`](crate::ZMod) compiles down to
//! loops over machine words.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::number_theory::{DivResult, DivisionByZero};

/// An abelian group written additively.
///
/// Semantically, `+` is associative and commutative, [`zero`](Self::zero) is
/// its neutral element and `-x` its inverse.
pub trait AdditiveGroup:
    Copy
    + Eq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// The additive identity.
    fn zero() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// A ring with unit. `*` distributes over `+` and [`one`](Self::one) is its
/// neutral element; multiplication need not commute.
pub trait Ring: AdditiveGroup + Mul<Output = Self> + MulAssign {
    /// The multiplicative identity.
    fn one() -> Self;
}

/// Marker for rings whose multiplication commutes.
///
/// This is the compile-time commutativity tag: algorithms that are only
/// correct over commutative rings (notably Smith reduction) bound on this
/// trait, so a non-commutative `Ring` is rejected by the type checker rather
/// than at runtime.
pub trait CommutativeRing: Ring {}

/// A commutative ring with a Euclidean function and a division algorithm.
///
/// For all `a` and non-zero `b`, `a.divide(b)` yields `q` and `r` with
/// `a = q * b + r` and `f(r) < f(b)`, where `f` is
/// [`euclidean_function`](Self::euclidean_function). Additionally `f(a) <=
/// f(a * b)` for non-zero `b`.
pub trait EuclideanDomain: CommutativeRing {
    /// The Euclidean function. Zero maps to zero and every non-zero value to
    /// a strictly positive integer.
    fn euclidean_function(&self) -> u64;

    /// Division with remainder. Fails if and only if `rhs` is zero.
    fn divide(self, rhs: Self) -> Result<DivResult<Self>, DivisionByZero>;

    /// A unit `u` such that `u * self` is the canonical representative of the
    /// associate class of `self`.
    ///
    /// The default is the identity; carriers with a total order (the
    /// integers) return the sign so that canonical representatives are
    /// non-negative. Smith reduction multiplies each diagonal row by this
    /// unit.
    fn canonical_unit(&self) -> Self {
        Self::one()
    }
}

/// A commutative ring in which every non-zero element is invertible.
///
/// `/` is total on non-zero divisors; dividing by zero panics, like the
/// primitive integer types. Checked inverses are provided by the concrete
/// carriers.
pub trait Field: CommutativeRing + Div<Output = Self> + DivAssign {}

//! Cubical complexes: sets of simplices grouped by dimension, closed under
//! taking faces.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::simplex::CubicalSimplex;

/// The error returned when a simplex's ambient dimension differs from the
/// complex's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientDimensionMismatch {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for AmbientDimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "all simplices of a complex must share one ambient dimension \
             (complex has {}, simplex has {})",
            self.expected, self.found
        )
    }
}

impl std::error::Error for AmbientDimensionMismatch {}

/// A finite cubical complex.
///
/// Simplices are stored in one hash set per topological dimension. The
/// structure maintains three invariants:
/// - every simplex has the same ambient dimension;
/// - face closure: every face of a stored simplex is stored one level down;
/// - the dimension levels are contiguous and the top level is non-empty.
///
/// Construction is incremental and interactive: [`add`](Self::add) and
/// [`remove`](Self::remove) report refusals through their return value
/// instead of an error, so callers can probe freely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CubicalComplex {
    simplices: Vec<FxHashSet<CubicalSimplex>>,
}

impl CubicalComplex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The highest topological dimension present; 0 for the empty complex.
    pub fn dimension(&self) -> usize {
        self.simplices.len().saturating_sub(1)
    }

    /// The shared ambient dimension, or 0 while the complex is empty.
    pub fn ambient_dimension(&self) -> usize {
        self.simplices
            .first()
            .and_then(|level| level.iter().next())
            .map_or(0, CubicalSimplex::ambient_dimension)
    }

    pub fn contains(&self, simplex: &CubicalSimplex) -> bool {
        self.simplices
            .get(simplex.dimension())
            .is_some_and(|level| level.contains(simplex))
    }

    /// The simplex sets, indexed by topological dimension.
    pub fn simplices(&self) -> &[FxHashSet<CubicalSimplex>] {
        &self.simplices
    }

    fn check_ambient(&self, simplex: &CubicalSimplex) -> Result<(), AmbientDimensionMismatch> {
        let expected = self.ambient_dimension();
        if expected != 0 && expected != simplex.ambient_dimension() {
            return Err(AmbientDimensionMismatch {
                expected,
                found: simplex.ambient_dimension(),
            });
        }
        Ok(())
    }

    /// Adds `simplex` if doing so keeps the complex closed under faces:
    /// its entire boundary must already be present, and its dimension must
    /// not leave a gap. Dimension-0 simplices are always addable.
    ///
    /// Returns whether the simplex was newly inserted; a refusal is
    /// `Ok(false)`, only an ambient-dimension mismatch is an error.
    pub fn add(&mut self, simplex: CubicalSimplex) -> Result<bool, AmbientDimensionMismatch> {
        self.check_ambient(&simplex)?;
        let dimension = simplex.dimension();
        if dimension == 0 {
            if self.simplices.is_empty() {
                self.simplices.push(FxHashSet::default());
            }
            return Ok(self.simplices[0].insert(simplex));
        }
        if dimension > self.dimension() + 1 {
            return Ok(false);
        }
        if !simplex.boundary().iter().all(|face| self.contains(face)) {
            return Ok(false);
        }
        if dimension == self.dimension() + 1 {
            self.simplices.push(FxHashSet::default());
        }
        Ok(self.simplices[dimension].insert(simplex))
    }

    /// Adds `simplex` together with its full face closure.
    pub fn add_recursive(
        &mut self,
        simplex: CubicalSimplex,
    ) -> Result<(), AmbientDimensionMismatch> {
        self.check_ambient(&simplex)?;
        if self.simplices.len() < simplex.dimension() + 1 {
            self.simplices
                .resize_with(simplex.dimension() + 1, FxHashSet::default);
        }
        self.add_closure(simplex);
        Ok(())
    }

    fn add_closure(&mut self, simplex: CubicalSimplex) {
        let dimension = simplex.dimension();
        if self.simplices[dimension].contains(&simplex) {
            return;
        }
        let boundary = simplex.boundary();
        self.simplices[dimension].insert(simplex);
        for face in boundary {
            self.add_closure(face);
        }
    }

    /// Removes `simplex`, unless some simplex one dimension up has it as a
    /// face; removing it then would break face closure. The co-face test is
    /// a linear scan over the boundaries of the level above.
    ///
    /// Returns whether the complex is free of the simplex afterwards: `true`
    /// also when it was not present, `false` exactly when a co-face blocks
    /// the removal. Empty top levels are shed, so the dimension shrinks as
    /// the top of the complex empties out.
    pub fn remove(&mut self, simplex: &CubicalSimplex) -> bool {
        let dimension = simplex.dimension();
        if self.simplices.is_empty() || dimension > self.dimension() {
            return false;
        }
        if dimension < self.dimension() {
            let blocked = self.simplices[dimension + 1]
                .iter()
                .any(|coface| coface.boundary().contains(simplex));
            if blocked {
                return false;
            }
        }
        self.simplices[dimension].remove(simplex);
        while self.simplices.last().is_some_and(|level| level.is_empty()) {
            self.simplices.pop();
        }
        true
    }
}

//! Cubical simplices: products of basic intervals.

use std::cmp::Ordering;
use std::fmt;

use crate::interval::BasicInterval;

/// The error returned when a simplex is constructed from an empty interval
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyIntervalList;

impl fmt::Display for EmptyIntervalList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a cubical simplex needs at least one interval")
    }
}

impl std::error::Error for EmptyIntervalList {}

/// A cubical simplex: a non-empty product of basic intervals, one per
/// ambient coordinate.
///
/// The *ambient dimension* is the number of factors; the *topological
/// dimension* is the number of non-degenerate factors. A unit square in the
/// plane is `[a, a+1] x [b, b+1]` (dimension 2), its right edge is
/// `[a+1] x [b, b+1]` (dimension 1).
///
/// Simplices are plain values: they hash structurally and carry no
/// references to their faces, which are recomputed by
/// [`boundary`](Self::boundary) on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubicalSimplex {
    intervals: Vec<BasicInterval>,
    dimension: usize,
}

impl CubicalSimplex {
    pub fn new(intervals: Vec<BasicInterval>) -> Result<Self, EmptyIntervalList> {
        if intervals.is_empty() {
            return Err(EmptyIntervalList);
        }
        let dimension = intervals
            .iter()
            .filter(|interval| !interval.is_trivial())
            .count();
        Ok(Self {
            intervals,
            dimension,
        })
    }

    /// The one-coordinate simplex `[p]`.
    pub fn point(p: i32) -> Self {
        Self {
            intervals: vec![BasicInterval::point(p)],
            dimension: 0,
        }
    }

    /// The one-coordinate simplex `[left, left + 1]`.
    pub fn interval(left: i32) -> Self {
        Self {
            intervals: vec![BasicInterval::interval(left)],
            dimension: 1,
        }
    }

    /// The topological dimension: the number of non-degenerate factors.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of factors.
    pub fn ambient_dimension(&self) -> usize {
        self.intervals.len()
    }

    pub fn intervals(&self) -> &[BasicInterval] {
        &self.intervals
    }

    /// The codimension-1 faces: for every non-degenerate coordinate in
    /// order, the face at its right endpoint followed by the face at its
    /// left endpoint.
    ///
    /// This enumeration order is a contract. It drives the alternating signs
    /// of the boundary matrices, and it makes the output strictly decreasing
    /// in the simplex order.
    pub fn boundary(&self) -> Vec<CubicalSimplex> {
        let mut faces = Vec::with_capacity(2 * self.dimension);
        for (position, interval) in self.intervals.iter().enumerate() {
            if interval.is_trivial() {
                continue;
            }
            faces.push(self.collapse(position, interval.right()));
            faces.push(self.collapse(position, interval.left()));
        }
        faces
    }

    /// The face with coordinate `position` collapsed onto `endpoint`.
    fn collapse(&self, position: usize, endpoint: i32) -> CubicalSimplex {
        let mut intervals = self.intervals.clone();
        intervals[position] = BasicInterval::point(endpoint);
        CubicalSimplex {
            intervals,
            dimension: self.dimension - 1,
        }
    }
}

/// The product simplex: the concatenation of the two interval sequences.
/// Ambient and topological dimensions both add.
pub fn product(s1: &CubicalSimplex, s2: &CubicalSimplex) -> CubicalSimplex {
    let mut intervals = s1.intervals.clone();
    intervals.extend_from_slice(&s2.intervals);
    CubicalSimplex {
        intervals,
        dimension: s1.dimension + s2.dimension,
    }
}

/// On a single coordinate, a full interval precedes any point; two intervals
/// of the same kind compare by their left endpoint.
fn compare_intervals(lhs: BasicInterval, rhs: BasicInterval) -> Ordering {
    match (lhs.is_trivial(), rhs.is_trivial()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => lhs.left().cmp(&rhs.left()),
    }
}

impl Ord for CubicalSimplex {
    /// First by topological dimension, then lexicographically by the
    /// interval sequences under [`compare_intervals`].
    fn cmp(&self, other: &Self) -> Ordering {
        self.dimension.cmp(&other.dimension).then_with(|| {
            self.intervals
                .iter()
                .zip(other.intervals.iter())
                .map(|(lhs, rhs)| compare_intervals(*lhs, *rhs))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| self.intervals.len().cmp(&other.intervals.len()))
        })
    }
}

impl PartialOrd for CubicalSimplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CubicalSimplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, interval) in self.intervals.iter().enumerate() {
            if position > 0 {
                f.write_str("x")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

/*!
# Utilities

Shared helpers used across the algorithm modules:
- [`Set`]: abstraction over set-like containers so traversals can choose
  between bitsets and hash sets,
- [`UnionFind`]: disjoint-set forest used by the Kruskal spanning tree,
- [`FromCapacity`]: capacity-aware constructors for the containers above,
- [`Probability`]: validity check for probability parameters of the random
  generators.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};
use num::{One, Zero};
use stream_bitset::{PrimIndex, bitset::BitSetImpl};

pub mod set;
pub mod union_find;

pub use set::Set;
pub use union_find::UnionFind;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Helper trait for datastructures that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for
    /// example) and the actual capacity that will be used (space-wise).
    ///
    /// If you only have one value as an upper bound, provide it as both
    /// arguments if possible.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `BitSetImpl<I>` as a Set requires initializing to the maximum element
        Self::new(I::from_usize(total).unwrap())
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `HashSet<T>` as a Set only requires initializing to the number of elements
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `FxHashSet<T>` as a Set only requires initializing to the number of elements
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

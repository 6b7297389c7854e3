//! Ordered merging of two sorted iterators.
//!
//! This module provides [`SortedMerge`], a lazy iterator that interleaves two
//! ascending inputs into one ascending output, pulling at most one element
//! ahead from each side. A [`MergePolicy`] decides, whenever both sides have a
//! head, whether to emit the left head, the right head, or a single value that
//! replaces both of them.
//!
//! # Entry points
//!
//! | Function                   | Policy                                       |
//! |----------------------------|----------------------------------------------|
//! | [`sorted_merge`]           | `Ord`, keeps every element                   |
//! | [`sorted_merge_by`]        | ascending-order predicate                    |
//! | [`sorted_merge_with`]      | three-way decision returning [`MergeStep`]   |
//! | [`sorted_merge_dedup_by`]  | predicate + duplicate rule + combine         |
//!
//! Each has an eager counterpart returning a `Vec` ([`merge_sorted_vec`] …) and a
//! method form on any [`IntoIterator`] through [`SortedMergeExt`].
//!
//! # Preconditions
//!
//! Both inputs must already be sorted with respect to the ordering the policy
//! uses. This is not validated: unsorted inputs or a policy that contradicts
//! the ordering produce a stream in unspecified order, without any error.
//!
//! # Examples
//!
//! ```rust
//! use sortwise::merge::SortedMergeExt;
//!
//! let july = vec![("Alex", 10), ("Bob", 20)];
//! let august = vec![("Bob", 20), ("Carl", 30)];
//!
//! let totals: Vec<(&str, i32)> = july
//!     .sorted_merging_dedup_by(
//!         august,
//!         |left, right| left.0 < right.0,
//!         |left, right| left.0 == right.0,
//!         |left, right| (left.0, left.1 + right.1),
//!     )
//!     .collect();
//!
//! assert_eq!(totals, vec![("Alex", 10), ("Bob", 40), ("Carl", 30)]);
//! ```

mod policy;
mod sorted_merge;

pub use policy::ByPredicates;
pub use policy::Decide;
pub use policy::MergePolicy;
pub use policy::MergeStep;
pub use sorted_merge::SortedMerge;

/// Policy type used by [`sorted_merge`]: orders by `Ord`, never combines.
pub type OrdPolicy<T> = ByPredicates<T, fn(&T, &T) -> bool>;

/// Policy type used by [`sorted_merge_dedup_by`].
pub type DedupPolicy<T, Less, Duplicates, Combine> = ByPredicates<T, Less, Duplicates, Combine>;

#[inline]
fn ascending<T: Ord>(left: &T, right: &T) -> bool {
    left < right
}

fn ord_policy<T: Ord>() -> OrdPolicy<T> {
    ByPredicates::new(ascending::<T> as fn(&T, &T) -> bool)
}

/// Merges two ascending iterators, keeping every element.
///
/// When heads are equal the right one is emitted first, the same tie rule as a
/// plain predicate merge with `<`.
///
/// # Complexity
///
/// O(1) to create; O(n + m) comparisons to drain.
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::sorted_merge;
///
/// let merged: Vec<i32> = sorted_merge(vec![1, 3, 5], vec![2, 3, 6]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 3, 5, 6]);
/// ```
pub fn sorted_merge<L, R>(
    left: L,
    right: R,
) -> SortedMerge<L::IntoIter, R::IntoIter, OrdPolicy<L::Item>>
where
    L: IntoIterator,
    L::Item: Ord,
    R: IntoIterator<Item = L::Item>,
{
    SortedMerge::new(left, right, ord_policy())
}

/// Merges two iterators that are ascending under `less`, keeping every element.
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::sorted_merge_by;
///
/// let merged: Vec<i32> =
///     sorted_merge_by([9, 5, 1], [8, 2], |left, right| left > right).collect();
/// assert_eq!(merged, vec![9, 8, 5, 2, 1]);
/// ```
pub fn sorted_merge_by<L, R, Less>(
    left: L,
    right: R,
    less: Less,
) -> SortedMerge<L::IntoIter, R::IntoIter, ByPredicates<L::Item, Less>>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    Less: FnMut(&L::Item, &L::Item) -> bool,
{
    SortedMerge::new(left, right, ByPredicates::new(less))
}

/// Merges two sorted iterators with a three-way decision for each pair of heads.
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::{sorted_merge_with, MergeStep};
///
/// let merged: Vec<(char, u32)> = sorted_merge_with(
///     [('a', 3), ('b', 2)],
///     [('b', 3), ('c', 4)],
///     |left, right| {
///         if left.0 == right.0 {
///             MergeStep::Both((left.0, left.1 + right.1))
///         } else if left.0 < right.0 {
///             MergeStep::Left
///         } else {
///             MergeStep::Right
///         }
///     },
/// )
/// .collect();
///
/// assert_eq!(merged, vec![('a', 3), ('b', 5), ('c', 4)]);
/// ```
pub fn sorted_merge_with<L, R, F>(
    left: L,
    right: R,
    decide: F,
) -> SortedMerge<L::IntoIter, R::IntoIter, Decide<F>>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    F: FnMut(&L::Item, &L::Item) -> MergeStep<L::Item>,
{
    SortedMerge::new(left, right, Decide::new(decide))
}

/// Merges two sorted iterators, collapsing each duplicate pair into one element.
///
/// For every pair of heads, `are_duplicates` is asked first; when it holds the
/// pair is replaced by `combine(left, right)` and both sides advance.
/// Otherwise `less` picks the side to emit.
///
/// Only pairs that meet as heads are combined: a run of equal elements on one
/// side is not collapsed with itself.
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::sorted_merge_dedup_by;
///
/// let merged: Vec<i32> = sorted_merge_dedup_by(
///     [1, 2, 3],
///     [2, 3, 4],
///     |left, right| left < right,
///     |left, right| left == right,
///     |left, _| *left,
/// )
/// .collect();
/// assert_eq!(merged, vec![1, 2, 3, 4]);
/// ```
pub fn sorted_merge_dedup_by<L, R, Less, Duplicates, Combine>(
    left: L,
    right: R,
    less: Less,
    are_duplicates: Duplicates,
    combine: Combine,
) -> SortedMerge<L::IntoIter, R::IntoIter, DedupPolicy<L::Item, Less, Duplicates, Combine>>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    Less: FnMut(&L::Item, &L::Item) -> bool,
    Duplicates: FnMut(&L::Item, &L::Item) -> bool,
    Combine: FnMut(&L::Item, &L::Item) -> L::Item,
{
    let policy = ByPredicates::new(less)
        .duplicates(are_duplicates)
        .combine(combine);
    SortedMerge::new(left, right, policy)
}

/// Eager form of [`sorted_merge`].
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::merge_sorted_vec;
///
/// assert_eq!(merge_sorted_vec(vec![1, 4], vec![2, 3]), vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn merge_sorted_vec<L, R>(left: L, right: R) -> Vec<L::Item>
where
    L: IntoIterator,
    L::Item: Ord,
    R: IntoIterator<Item = L::Item>,
{
    sorted_merge(left, right).into_vec()
}

/// Eager form of [`sorted_merge_by`].
#[must_use]
pub fn merge_sorted_vec_by<L, R, Less>(left: L, right: R, less: Less) -> Vec<L::Item>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    Less: FnMut(&L::Item, &L::Item) -> bool,
{
    sorted_merge_by(left, right, less).into_vec()
}

/// Eager form of [`sorted_merge_with`].
#[must_use]
pub fn merge_sorted_vec_with<L, R, F>(left: L, right: R, decide: F) -> Vec<L::Item>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    F: FnMut(&L::Item, &L::Item) -> MergeStep<L::Item>,
{
    sorted_merge_with(left, right, decide).into_vec()
}

/// Eager form of [`sorted_merge_dedup_by`].
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::merge_sorted_vec_dedup_by;
///
/// let merged = merge_sorted_vec_dedup_by(
///     vec![("Alice", 3), ("Bob", 2)],
///     vec![("Bob", 3), ("Cersei", 4)],
///     |left, right| left.0 < right.0,
///     |left, right| left.0 == right.0,
///     |left, right| (left.0, left.1 + right.1),
/// );
/// assert_eq!(merged, vec![("Alice", 3), ("Bob", 5), ("Cersei", 4)]);
/// ```
#[must_use]
pub fn merge_sorted_vec_dedup_by<L, R, Less, Duplicates, Combine>(
    left: L,
    right: R,
    less: Less,
    are_duplicates: Duplicates,
    combine: Combine,
) -> Vec<L::Item>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    Less: FnMut(&L::Item, &L::Item) -> bool,
    Duplicates: FnMut(&L::Item, &L::Item) -> bool,
    Combine: FnMut(&L::Item, &L::Item) -> L::Item,
{
    sorted_merge_dedup_by(left, right, less, are_duplicates, combine).into_vec()
}

/// Method-call forms of the merge functions for any [`IntoIterator`].
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::SortedMergeExt;
///
/// let merged: Vec<i32> = vec![1, 5].sorted_merging(vec![2, 3]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 5]);
/// ```
pub trait SortedMergeExt: IntoIterator + Sized {
    /// See [`sorted_merge`].
    fn sorted_merging<R>(self, other: R) -> SortedMerge<Self::IntoIter, R::IntoIter, OrdPolicy<Self::Item>>
    where
        Self::Item: Ord,
        R: IntoIterator<Item = Self::Item>,
    {
        sorted_merge(self, other)
    }

    /// See [`sorted_merge_by`].
    fn sorted_merging_by<R, Less>(
        self,
        other: R,
        less: Less,
    ) -> SortedMerge<Self::IntoIter, R::IntoIter, ByPredicates<Self::Item, Less>>
    where
        R: IntoIterator<Item = Self::Item>,
        Less: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        sorted_merge_by(self, other, less)
    }

    /// See [`sorted_merge_with`].
    fn sorted_merging_with<R, F>(
        self,
        other: R,
        decide: F,
    ) -> SortedMerge<Self::IntoIter, R::IntoIter, Decide<F>>
    where
        R: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> MergeStep<Self::Item>,
    {
        sorted_merge_with(self, other, decide)
    }

    /// See [`sorted_merge_dedup_by`].
    fn sorted_merging_dedup_by<R, Less, Duplicates, Combine>(
        self,
        other: R,
        less: Less,
        are_duplicates: Duplicates,
        combine: Combine,
    ) -> SortedMerge<Self::IntoIter, R::IntoIter, DedupPolicy<Self::Item, Less, Duplicates, Combine>>
    where
        R: IntoIterator<Item = Self::Item>,
        Less: FnMut(&Self::Item, &Self::Item) -> bool,
        Duplicates: FnMut(&Self::Item, &Self::Item) -> bool,
        Combine: FnMut(&Self::Item, &Self::Item) -> Self::Item,
    {
        sorted_merge_dedup_by(self, other, less, are_duplicates, combine)
    }
}

impl<I: IntoIterator> SortedMergeExt for I {}

static_assertions::assert_impl_all!(
    SortedMerge<std::vec::IntoIter<i32>, std::vec::IntoIter<i32>, OrdPolicy<i32>>:
        std::iter::FusedIterator, Send, Sync
);

static_assertions::assert_not_impl_any!(
    SortedMerge<std::vec::IntoIter<i32>, std::vec::IntoIter<i32>, OrdPolicy<i32>>: Clone
);

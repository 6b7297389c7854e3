//! Policies deciding which head a [`SortedMerge`](super::SortedMerge) emits next.
//!
//! A policy sees the current head of each side and answers with a
//! [`MergeStep`]. Two shapes are provided:
//!
//! - [`Decide`]: wraps a closure that returns the [`MergeStep`] directly.
//! - [`ByPredicates`]: builds the decision from an ascending-order predicate,
//!   an optional duplicate predicate and an optional combine function.
//!
//! Both drive exactly the same stepping code; [`ByPredicates`] is sugar that
//! reduces to
//!
//! ```text
//! are_duplicates(a, b) => Both(combine(a, b))
//! less(a, b)           => Left
//! otherwise            => Right
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Message used when two heads are declared duplicates without a combine function.
pub(crate) const MISSING_COMBINE_PANIC_MESSAGE: &str =
    "sorted merge: elements were declared duplicates but no combine function was supplied";

/// Instructs a [`SortedMerge`](super::SortedMerge) what to do with the two current heads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeStep<T> {
    /// Emit the left head and advance the left side.
    Left,
    /// Emit the right head and advance the right side.
    Right,
    /// Emit the supplied value and advance both sides.
    Both(T),
}

/// Decides the next step of an ordered merge from the two current heads.
///
/// Implementations must be consistent with the ordering of the inputs: they
/// should never choose [`MergeStep::Right`] when the left head sorts strictly
/// first, nor [`MergeStep::Left`] in the opposite case. Inconsistent policies
/// are not detected and simply produce unordered output.
pub trait MergePolicy<T> {
    /// Chooses what to emit given the left and right heads.
    fn step(&mut self, left: &T, right: &T) -> MergeStep<T>;
}

impl<T, P: MergePolicy<T> + ?Sized> MergePolicy<T> for &mut P {
    #[inline]
    fn step(&mut self, left: &T, right: &T) -> MergeStep<T> {
        (**self).step(left, right)
    }
}

/// A policy backed by a three-way decision closure.
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::{Decide, MergePolicy, MergeStep};
///
/// let mut policy = Decide::new(|left: &i32, right: &i32| {
///     if left == right {
///         MergeStep::Both(left * 10)
///     } else if left < right {
///         MergeStep::Left
///     } else {
///         MergeStep::Right
///     }
/// });
/// assert_eq!(policy.step(&1, &2), MergeStep::Left);
/// assert_eq!(policy.step(&3, &3), MergeStep::Both(30));
/// ```
#[derive(Clone, Copy)]
pub struct Decide<F> {
    decide: F,
}

impl<F> Decide<F> {
    /// Wraps a decision closure.
    #[inline]
    pub const fn new(decide: F) -> Self {
        Self { decide }
    }
}

impl<T, F> MergePolicy<T> for Decide<F>
where
    F: FnMut(&T, &T) -> MergeStep<T>,
{
    #[inline]
    fn step(&mut self, left: &T, right: &T) -> MergeStep<T> {
        (self.decide)(left, right)
    }
}

impl<F> fmt::Debug for Decide<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Decide").finish_non_exhaustive()
    }
}

/// The default duplicate predicate: no two elements are ever duplicates.
#[inline]
pub(crate) const fn never_duplicates<T>(_: &T, _: &T) -> bool {
    false
}

/// The default combine function. Reaching it is a programming error.
#[inline]
pub(crate) fn missing_combine<T>(_: &T, _: &T) -> T {
    panic!("{}", MISSING_COMBINE_PANIC_MESSAGE)
}

/// A policy built from an ordering predicate and an optional duplicate rule.
///
/// Created with [`ByPredicates::new`], then optionally refined with
/// [`duplicates`](ByPredicates::duplicates) and [`combine`](ByPredicates::combine).
///
/// # Panics
///
/// Stepping panics if `are_duplicates` reports a pair as duplicates while no
/// combine function has been supplied.
///
/// # Examples
///
/// ```rust
/// use sortwise::merge::{ByPredicates, MergePolicy, MergeStep};
///
/// let mut policy = ByPredicates::new(|left: &(char, u32), right: &(char, u32)| left.0 < right.0)
///     .duplicates(|left, right| left.0 == right.0)
///     .combine(|left, right| (left.0, left.1 + right.1));
///
/// assert_eq!(policy.step(&('a', 1), &('b', 2)), MergeStep::Left);
/// assert_eq!(policy.step(&('b', 1), &('b', 2)), MergeStep::Both(('b', 3)));
/// ```
pub struct ByPredicates<T, Less, Duplicates = fn(&T, &T) -> bool, Combine = fn(&T, &T) -> T> {
    less: Less,
    are_duplicates: Duplicates,
    combine: Combine,
    element: PhantomData<fn(&T) -> T>,
}

impl<T, Less> ByPredicates<T, Less>
where
    Less: FnMut(&T, &T) -> bool,
{
    /// Creates a policy that orders by `less` and never combines elements.
    #[inline]
    pub fn new(less: Less) -> Self {
        Self {
            less,
            are_duplicates: never_duplicates::<T>,
            combine: missing_combine::<T>,
            element: PhantomData,
        }
    }
}

impl<T, Less, Duplicates, Combine> ByPredicates<T, Less, Duplicates, Combine> {
    /// Replaces the duplicate predicate.
    ///
    /// Pairs for which `are_duplicates` returns `true` are combined into one
    /// element, so a combine function must be supplied as well.
    #[inline]
    pub fn duplicates<NewDuplicates>(
        self,
        are_duplicates: NewDuplicates,
    ) -> ByPredicates<T, Less, NewDuplicates, Combine>
    where
        NewDuplicates: FnMut(&T, &T) -> bool,
    {
        ByPredicates {
            less: self.less,
            are_duplicates,
            combine: self.combine,
            element: PhantomData,
        }
    }

    /// Replaces the function that combines a duplicate pair into one element.
    #[inline]
    pub fn combine<NewCombine>(self, combine: NewCombine) -> ByPredicates<T, Less, Duplicates, NewCombine>
    where
        NewCombine: FnMut(&T, &T) -> T,
    {
        ByPredicates {
            less: self.less,
            are_duplicates: self.are_duplicates,
            combine,
            element: PhantomData,
        }
    }
}

impl<T, Less, Duplicates, Combine> MergePolicy<T> for ByPredicates<T, Less, Duplicates, Combine>
where
    Less: FnMut(&T, &T) -> bool,
    Duplicates: FnMut(&T, &T) -> bool,
    Combine: FnMut(&T, &T) -> T,
{
    #[inline]
    fn step(&mut self, left: &T, right: &T) -> MergeStep<T> {
        if (self.are_duplicates)(left, right) {
            MergeStep::Both((self.combine)(left, right))
        } else if (self.less)(left, right) {
            MergeStep::Left
        } else {
            MergeStep::Right
        }
    }
}

impl<T, Less: Clone, Duplicates: Clone, Combine: Clone> Clone
    for ByPredicates<T, Less, Duplicates, Combine>
{
    fn clone(&self) -> Self {
        Self {
            less: self.less.clone(),
            are_duplicates: self.are_duplicates.clone(),
            combine: self.combine.clone(),
            element: PhantomData,
        }
    }
}

impl<T, Less, Duplicates, Combine> fmt::Debug for ByPredicates<T, Less, Duplicates, Combine> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ByPredicates").finish_non_exhaustive()
    }
}

//! The pull-based merge iterator.

use std::fmt;
use std::iter::{FusedIterator, Peekable};

use super::policy::{MergePolicy, MergeStep};

/// A lazy iterator that merges two sorted iterators into one sorted stream.
///
/// Each side is held behind a one-element lookahead; nothing else is buffered.
/// Every call to [`next`](Iterator::next) performs exactly one step:
///
/// | Left head | Right head | Action                                         |
/// |-----------|------------|------------------------------------------------|
/// | none      | none       | end of stream                                  |
/// | `a`       | none       | emit `a`, advance left                         |
/// | none      | `b`        | emit `b`, advance right                        |
/// | `a`       | `b`        | ask the policy: `Left`, `Right` or `Both(v)`   |
///
/// `Both(v)` emits `v` and advances both sides, so the output is one element
/// shorter than the inputs combined for every collapsed pair.
///
/// The iterator is single-pass. Dropping it early simply abandons both inputs.
///
/// Created by [`sorted_merge`](super::sorted_merge) and its siblings, or by the
/// [`SortedMergeExt`](super::SortedMergeExt) methods.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SortedMerge<L, R, P>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    left: Peekable<L>,
    right: Peekable<R>,
    policy: P,
}

impl<L, R, P> SortedMerge<L, R, P>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    P: MergePolicy<L::Item>,
{
    /// Creates a merge of `left` and `right` driven by `policy`.
    ///
    /// Neither input is pulled until the first element is requested.
    #[inline]
    pub fn new<A, B>(left: A, right: B, policy: P) -> Self
    where
        A: IntoIterator<IntoIter = L>,
        B: IntoIterator<IntoIter = R>,
    {
        Self {
            left: left.into_iter().peekable(),
            right: right.into_iter().peekable(),
            policy,
        }
    }

    /// Performs one merge step, returning the emitted element.
    fn step(&mut self) -> Option<L::Item> {
        let decision = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => MergeStep::Left,
            (None, Some(_)) => MergeStep::Right,
            (Some(left), Some(right)) => self.policy.step(left, right),
        };

        match decision {
            MergeStep::Left => self.left.next(),
            MergeStep::Right => self.right.next(),
            MergeStep::Both(value) => {
                self.left.next();
                self.right.next();
                Some(value)
            }
        }
    }

    /// Drains the merge eagerly into a `Vec`.
    ///
    /// Runs the same step function as the lazy iterator, so the result is
    /// identical to collecting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::merge::sorted_merge;
    ///
    /// let merged = sorted_merge([1, 3, 5], [2, 4]).into_vec();
    /// assert_eq!(merged, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn into_vec(mut self) -> Vec<L::Item> {
        let (lower, _) = self.size_hint();
        let mut merged = Vec::with_capacity(lower);
        while let Some(element) = self.step() {
            merged.push(element);
        }
        merged
    }

    /// Returns the policy driving this merge.
    #[inline]
    pub const fn policy(&self) -> &P {
        &self.policy
    }
}

impl<L, R, P> Iterator for SortedMerge<L, R, P>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    P: MergePolicy<L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    /// Every element of the longer side is emitted or folded into a combined
    /// element, so the lower bound is the larger of the two sides.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => left.checked_add(right),
            _ => None,
        };
        (left_lower.max(right_lower), upper)
    }
}

// `Peekable` caches an exhausted side, so neither input is polled again once
// it has reported its end.
impl<L, R, P> FusedIterator for SortedMerge<L, R, P>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    P: MergePolicy<L::Item>,
{
}

impl<L, R, P> fmt::Debug for SortedMerge<L, R, P>
where
    L: Iterator + fmt::Debug,
    R: Iterator<Item = L::Item> + fmt::Debug,
    L::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedMerge")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

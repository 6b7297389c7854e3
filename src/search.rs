//! Partition search over sorted slices.
//!
//! Every lookup in this crate reduces to one primitive: given a slice that is
//! *partitioned* by a predicate (the predicate is `false` for some prefix and
//! `true` for the remaining suffix), find the first index where it holds.
//!
//! ```text
//!   predicate:  false false false | true true true
//!   index:        0     1     2   |  3    4    5
//!                                 ^ partition_point == 3
//! ```
//!
//! The bound helpers are thin specializations of that primitive:
//!
//! | Helper          | Predicate           | Meaning                          |
//! |-----------------|---------------------|----------------------------------|
//! | [`lower_bound`] | `element >= target` | first position of `target`       |
//! | [`upper_bound`] | `element > target`  | one past the last `target`       |
//! | [`equal_range`] | both                | the run of elements equal to it  |
//!
//! # Preconditions
//!
//! The slice must be partitioned with respect to the predicate (for the bound
//! helpers: sorted in ascending order). This is not checked; on a slice that
//! violates it the returned index is unspecified but always within
//! `0..=slice.len()`.

use std::borrow::Borrow;
use std::ops::Range;

/// Returns the smallest index at which `predicate` holds, or `slice.len()` if
/// it holds nowhere.
///
/// # Complexity
///
/// O(log n) predicate evaluations.
///
/// # Examples
///
/// ```rust
/// use sortwise::search::partition_point;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(partition_point(&values, |value| *value > 4), 2);
/// assert_eq!(partition_point(&values, |value| *value > 100), 5);
/// assert_eq!(partition_point(&values, |_| true), 0);
/// ```
#[inline]
pub fn partition_point<T, P>(slice: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut low = 0;
    let mut high = slice.len();

    while low < high {
        let middle = low + (high - low) / 2;
        if predicate(&slice[middle]) {
            high = middle;
        } else {
            low = middle + 1;
        }
    }

    low
}

/// Returns the index of the first element that is not less than `target`.
///
/// # Examples
///
/// ```rust
/// use sortwise::search::lower_bound;
///
/// let values = [1, 2, 2, 2, 3];
/// assert_eq!(lower_bound(&values, &2), 1);
/// assert_eq!(lower_bound(&values, &0), 0);
/// assert_eq!(lower_bound(&values, &4), 5);
/// ```
#[inline]
pub fn lower_bound<T, Q>(slice: &[T], target: &Q) -> usize
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    partition_point(slice, |element| element.borrow() >= target)
}

/// Returns the index of the first element that is greater than `target`.
///
/// # Examples
///
/// ```rust
/// use sortwise::search::upper_bound;
///
/// let values = [1, 2, 2, 2, 3];
/// assert_eq!(upper_bound(&values, &2), 4);
/// assert_eq!(upper_bound(&values, &3), 5);
/// ```
#[inline]
pub fn upper_bound<T, Q>(slice: &[T], target: &Q) -> usize
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    partition_point(slice, |element| element.borrow() > target)
}

/// Returns the range of indices whose elements are equal to `target`.
///
/// The range is empty (but positioned where `target` would be inserted) when
/// no element matches.
///
/// # Examples
///
/// ```rust
/// use sortwise::search::equal_range;
///
/// let values = [1, 2, 2, 2, 3];
/// assert_eq!(equal_range(&values, &2), 1..4);
/// assert_eq!(equal_range(&values, &0), 0..0);
/// ```
#[inline]
pub fn equal_range<T, Q>(slice: &[T], target: &Q) -> Range<usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let start = lower_bound(slice, target);
    let end = start + upper_bound(&slice[start..], target);
    start..end
}

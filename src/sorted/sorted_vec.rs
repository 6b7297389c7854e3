//! Always-sorted vector.
//!
//! This module provides [`SortedVec`], a vector that maintains ascending order
//! after every mutation and answers lookups with partition search.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity                      |
//! |------------------|---------------------------------|
//! | `from` / collect | O(n log n)                      |
//! | `from_sorted_*`  | O(n)                            |
//! | `first_index_of` | O(log n)                        |
//! | `last_index_of`  | O(log n)                        |
//! | `contains`       | O(log n)                        |
//! | `insert`         | O(log n) search + O(n) shift    |
//! | `remove_at`      | O(n)                            |
//! | `remove`         | O(log n) search + O(n) shift    |
//! | `merging`        | O(n + m)                        |
//! | `extend`         | O(k log k + n + k)              |
//!
//! Duplicates are allowed. Inserting an element places it after every element
//! equal to it, so repeated inserts of equal elements keep their insertion
//! order.

use std::borrow::Borrow;
use std::fmt;
use std::ops::{Deref, Range};

use crate::error::IndexOutOfBounds;
use crate::merge::merge_sorted_vec;
use crate::search;

/// A vector that keeps its elements in ascending order.
///
/// `SortedVec` has value semantics: cloning it clones every element and the
/// copies never share storage.
///
/// Read-only slice methods are available through [`Deref`]; there is no
/// mutable access to the storage, so the order cannot be broken from outside
/// except through the trusted constructors.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Ord`.
///
/// # Examples
///
/// ```rust
/// use sortwise::sorted::SortedVec;
///
/// let mut values: SortedVec<i32> = [3, 1, 2, 4, 7].into_iter().collect();
/// assert_eq!(values.as_slice(), &[1, 2, 3, 4, 7]);
///
/// values.insert(5);
/// assert_eq!(values.as_slice(), &[1, 2, 3, 4, 5, 7]);
/// assert!(values.contains(&5));
/// assert_eq!(values[0], 1);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortedVec<T> {
    storage: Vec<T>,
}

impl<T: Ord> SortedVec<T> {
    /// Creates a new empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let values: SortedVec<i32> = SortedVec::new();
    /// assert!(values.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Creates a new empty vector with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// Creates a `SortedVec` from a `Vec` that is already sorted, without sorting it.
    ///
    /// # Preconditions
    ///
    /// `vec` must be in ascending order. This is trusted and not checked in
    /// any build profile: an unsorted input yields a `SortedVec` whose searches
    /// return unspecified results. Use [`is_sorted`](Self::is_sorted) to check
    /// when the source is not known to be ordered.
    ///
    /// # Complexity
    ///
    /// O(1); the vector is moved in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let values = SortedVec::from_sorted_vec(vec![2, 4, 6]);
    /// assert_eq!(values, SortedVec::from(vec![6, 4, 2]));
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_sorted_vec(vec: Vec<T>) -> Self {
        Self { storage: vec }
    }

    /// Creates a `SortedVec` from an iterator that yields ascending elements,
    /// without sorting.
    ///
    /// The same precondition as [`from_sorted_vec`](Self::from_sorted_vec) applies.
    #[must_use]
    pub fn from_sorted_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sorted_vec(iter.into_iter().collect())
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Consumes the vector and returns the sorted storage.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Returns `true` if the storage really is in ascending order.
    ///
    /// Always `true` unless a trusted constructor was given unsorted input.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.storage.is_sorted()
    }

    /// Returns the first index at which `predicate` holds.
    ///
    /// `predicate` must be monotone over the stored order: `false` for some
    /// prefix and `true` for the rest. Returns [`len`](Self::len) if it never
    /// holds.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let values = SortedVec::from([10, 20, 30, 40]);
    /// assert_eq!(values.partition_point(|value| *value >= 25), 2);
    /// ```
    #[inline]
    pub fn partition_point<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        search::partition_point(&self.storage, predicate)
    }

    /// Returns the index of the first element equal to `element`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let values = SortedVec::from([1, 2, 2, 2, 3]);
    /// assert_eq!(values.first_index_of(&2), Some(1));
    /// assert_eq!(values.first_index_of(&4), None);
    /// ```
    #[must_use]
    pub fn first_index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = search::lower_bound(&self.storage, element);
        self.storage
            .get(index)
            .filter(|candidate| (*candidate).borrow() == element)
            .map(|_| index)
    }

    /// Returns the index of the last element equal to `element`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let values = SortedVec::from([1, 2, 2, 2, 3]);
    /// assert_eq!(values.last_index_of(&2), Some(3));
    /// assert_eq!(values.last_index_of(&0), None);
    /// ```
    #[must_use]
    pub fn last_index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let end = search::upper_bound(&self.storage, element);
        let index = end.checked_sub(1)?;
        (self.storage[index].borrow() == element).then_some(index)
    }

    /// Returns `true` if an element equal to `element` is present.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.first_index_of(element).is_some()
    }

    /// Returns the range of indices holding elements equal to `element`.
    ///
    /// The range is empty when the element is absent; its start is then the
    /// position where the element would be inserted.
    #[inline]
    #[must_use]
    pub fn equal_range<Q>(&self, element: &Q) -> Range<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::equal_range(&self.storage, element)
    }

    /// Returns how many elements are equal to `element`.
    #[inline]
    #[must_use]
    pub fn count_of<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.equal_range(element).len()
    }

    /// Inserts an element, keeping the vector sorted, and returns its index.
    ///
    /// The element is placed after every element equal to it.
    ///
    /// # Complexity
    ///
    /// O(log n) search + O(n) shift
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let mut values = SortedVec::from([1, 3]);
    /// assert_eq!(values.insert(2), 1);
    /// assert_eq!(values.insert(3), 3);
    /// assert_eq!(values.as_slice(), &[1, 2, 3, 3]);
    /// ```
    pub fn insert(&mut self, element: T) -> usize {
        let index = search::upper_bound(&self.storage, &element);
        self.storage.insert(index, element);
        index
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let mut values = SortedVec::from([1, 2, 3]);
    /// assert_eq!(values.remove_at(0), 1);
    /// assert_eq!(values.as_slice(), &[2, 3]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        match self.try_remove_at(index) {
            Ok(element) => element,
            Err(error) => panic!("SortedVec::remove_at: {error}"),
        }
    }

    /// Removes and returns the element at `index`, or reports that the index
    /// is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= self.len()`; the vector is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::error::IndexOutOfBounds;
    /// use sortwise::sorted::SortedVec;
    ///
    /// let mut values = SortedVec::from([1, 2]);
    /// assert_eq!(values.try_remove_at(1), Ok(2));
    /// assert_eq!(values.try_remove_at(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
    /// ```
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index < self.storage.len() {
            Ok(self.storage.remove(index))
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.storage.len(),
            })
        }
    }

    /// Removes every element equal to `element` and returns how many were removed.
    ///
    /// The whole run of equal elements is removed in one shift. Removing an
    /// absent element is a no-op that returns `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let mut values = SortedVec::from([1, 2, 2, 2, 3]);
    /// assert_eq!(values.remove(&2), 3);
    /// assert_eq!(values.as_slice(), &[1, 3]);
    /// assert_eq!(values.remove(&2), 0);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (Some(first), Some(last)) = (self.first_index_of(element), self.last_index_of(element))
        else {
            return 0;
        };
        self.storage.drain(first..=last);
        last - first + 1
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    #[inline]
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.storage.retain(predicate);
    }

    /// Removes consecutive duplicates, leaving each distinct element once.
    #[inline]
    pub fn dedup(&mut self) {
        self.storage.dedup();
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Removes and returns the smallest element.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn pop_first(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            None
        } else {
            Some(self.storage.remove(0))
        }
    }

    /// Removes and returns the largest element.
    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Returns a new vector holding the elements of both `self` and `other`.
    ///
    /// Every element is kept, so the result has `self.len() + other.len()`
    /// elements. The merge runs in linear time and the result is built through
    /// [`from_sorted_vec`](Self::from_sorted_vec), without re-sorting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortwise::sorted::SortedVec;
    ///
    /// let left = SortedVec::from([1, 3, 5]);
    /// let right = SortedVec::from([2, 3, 4]);
    /// let merged = left.merging(&right);
    /// assert_eq!(merged.as_slice(), &[1, 2, 3, 3, 4, 5]);
    /// assert_eq!(left.len(), 3);
    /// ```
    #[must_use]
    pub fn merging(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::from_sorted_vec(merge_sorted_vec(
            self.storage.iter().cloned(),
            other.storage.iter().cloned(),
        ))
    }

    /// Consuming form of [`merging`](Self::merging); moves elements instead of
    /// cloning them.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        Self::from_sorted_vec(merge_sorted_vec(self.storage, other.storage))
    }
}

impl<T: Ord> Default for SortedVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SortedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.storage
    }
}

impl<T> AsRef<[T]> for SortedVec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.storage
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: Ord> From<Vec<T>> for SortedVec<T> {
    /// Sorts the vector in place; equal elements keep their relative order.
    fn from(mut vec: Vec<T>) -> Self {
        vec.sort();
        Self::from_sorted_vec(vec)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedVec<T> {
    fn from(array: [T; N]) -> Self {
        Self::from(Vec::from(array))
    }
}

impl<T> From<SortedVec<T>> for Vec<T> {
    #[inline]
    fn from(sorted: SortedVec<T>) -> Self {
        sorted.storage
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for SortedVec<T> {
    /// Sorts the incoming batch on its own and merges it into the storage.
    ///
    /// Incoming elements land after existing equal elements, as with
    /// [`insert`](SortedVec::insert).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut incoming: Vec<T> = iter.into_iter().collect();
        if incoming.is_empty() {
            return;
        }
        incoming.sort();
        let existing = std::mem::take(&mut self.storage);
        // Ties emit the right side first.
        self.storage = merge_sorted_vec(incoming, existing);
    }
}

impl<T> IntoIterator for SortedVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

static_assertions::assert_impl_all!(SortedVec<i32>: Send, Sync, Clone, Default, Eq);
static_assertions::assert_impl_all!(SortedVec<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let values: SortedVec<i32> = SortedVec::new();
        assert!(values.is_empty());
        assert_eq!(values.len(), 0);
        assert_eq!(values.as_slice(), &[] as &[i32]);
    }

    #[rstest]
    fn test_from_vec_sorts() {
        let values = SortedVec::from(vec![3, 1, 2, 4, 7]);
        assert_eq!(values.as_slice(), &[1, 2, 3, 4, 7]);
        assert_eq!(values.len(), 5);
        assert!(!values.is_empty());
        assert!(values.is_sorted());
    }

    #[rstest]
    fn test_from_sorted_vec_trusts_caller() {
        let values = SortedVec::from_sorted_vec(vec![3, 2, 7]);
        assert_eq!(values.as_slice(), &[3, 2, 7]);
        assert!(!values.is_sorted());
    }

    #[rstest]
    fn test_from_sorted_iter_matches_sorting_path() {
        let sorted = vec![1, 1, 4, 9, 9, 12];
        assert_eq!(
            SortedVec::from_sorted_iter(sorted.clone()),
            SortedVec::from(sorted)
        );
    }

    #[rstest]
    fn test_with_capacity_reserves() {
        let values: SortedVec<u8> = SortedVec::with_capacity(16);
        assert!(values.capacity() >= 16);
        assert!(values.is_empty());
    }

    #[rstest]
    #[case(0, None, None)]
    #[case(1, Some(0), Some(0))]
    #[case(2, Some(1), Some(3))]
    #[case(3, Some(4), Some(4))]
    #[case(4, None, None)]
    fn test_first_and_last_index_of(
        #[case] target: i32,
        #[case] first: Option<usize>,
        #[case] last: Option<usize>,
    ) {
        let values = SortedVec::from([1, 2, 2, 2, 3]);
        assert_eq!(values.first_index_of(&target), first);
        assert_eq!(values.last_index_of(&target), last);
        assert_eq!(values.contains(&target), first.is_some());
    }

    #[rstest]
    fn test_index_lookups_on_empty() {
        let values: SortedVec<i32> = SortedVec::new();
        assert_eq!(values.first_index_of(&1), None);
        assert_eq!(values.last_index_of(&1), None);
        assert!(!values.contains(&1));
        assert_eq!(values.count_of(&1), 0);
    }

    #[rstest]
    fn test_lookups_with_borrowed_str() {
        let names: SortedVec<String> = ["carol", "alice", "bob"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names.first_index_of("bob"), Some(1));
        assert!(names.contains("carol"));
        assert!(!names.contains("dave"));
    }

    #[rstest]
    fn test_equal_range_and_count_of() {
        let values = SortedVec::from([1, 2, 2, 2, 3]);
        assert_eq!(values.equal_range(&2), 1..4);
        assert_eq!(values.count_of(&2), 3);
        assert_eq!(values.count_of(&5), 0);
    }

    #[rstest]
    fn test_partition_point_on_container() {
        let values = SortedVec::from([5, 10, 15]);
        assert_eq!(values.partition_point(|value| *value > 7), 1);
        assert_eq!(values.partition_point(|value| *value > 100), 3);
    }

    /// Ordered by the key only; the tag records insertion identity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Keyed(i32, char);

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[rstest]
    fn test_insert_places_after_equal_elements() {
        let mut keyed: SortedVec<Keyed> = SortedVec::new();
        assert_eq!(keyed.insert(Keyed(1, 'a')), 0);
        assert_eq!(keyed.insert(Keyed(1, 'b')), 1);
        assert_eq!(keyed.insert(Keyed(0, 'c')), 0);
        assert_eq!(keyed.insert(Keyed(1, 'd')), 3);
        let tags: Vec<char> = keyed.iter().map(|element| element.1).collect();
        assert_eq!(tags, vec!['c', 'a', 'b', 'd']);
    }

    #[rstest]
    fn test_extend_places_after_equal_elements_like_insert() {
        let initial = [Keyed(1, 'a'), Keyed(0, 'c'), Keyed(1, 'b')];
        let batch = [Keyed(1, 'x'), Keyed(2, 'z'), Keyed(1, 'y')];

        let mut inserted: SortedVec<Keyed> = SortedVec::new();
        for element in initial.into_iter().chain(batch) {
            inserted.insert(element);
        }

        let mut extended: SortedVec<Keyed> = SortedVec::new();
        extended.extend(initial);
        extended.extend(batch);

        let tags = |values: &SortedVec<Keyed>| -> Vec<char> {
            values.iter().map(|element| element.1).collect()
        };
        assert_eq!(tags(&extended), vec!['c', 'a', 'b', 'x', 'y', 'z']);
        assert_eq!(tags(&extended), tags(&inserted));
    }

    #[rstest]
    fn test_insert_into_empty_then_front() {
        let mut values: SortedVec<(i32, char)> = SortedVec::new();
        assert_eq!(values.insert((2, 'x')), 0);
        assert_eq!(values.insert((1, 'y')), 0);
        assert_eq!(values.as_slice(), &[(1, 'y'), (2, 'x')]);
    }

    #[rstest]
    fn test_deletion_sequence() {
        let mut values = SortedVec::from([1, 2, 2, 2, 3]);
        let index = values.first_index_of(&1).unwrap();
        assert_eq!(values.remove_at(index), 1);
        assert_eq!(values.as_slice(), &[2, 2, 2, 3]);

        assert_eq!(values.remove(&2), 3);
        assert_eq!(values.as_slice(), &[3]);

        values.insert(1);
        values.insert(1);
        values.insert(2);
        assert_eq!(values, SortedVec::from([1, 1, 2, 3]));
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let mut values = SortedVec::from([1, 3]);
        assert_eq!(values.remove(&2), 0);
        assert_eq!(values.as_slice(), &[1, 3]);
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds: the len is 2 but the index is 2")]
    fn test_remove_at_out_of_range_panics() {
        let mut values = SortedVec::from([1, 2]);
        let _ = values.remove_at(2);
    }

    #[rstest]
    fn test_try_remove_at_out_of_range_leaves_vector_unchanged() {
        let mut values = SortedVec::from([1, 2]);
        assert_eq!(
            values.try_remove_at(9),
            Err(IndexOutOfBounds { index: 9, len: 2 })
        );
        assert_eq!(values.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_pop_first_and_last() {
        let mut values = SortedVec::from([2, 1, 3]);
        assert_eq!(values.pop_first(), Some(1));
        assert_eq!(values.pop_last(), Some(3));
        assert_eq!(values.pop_first(), Some(2));
        assert_eq!(values.pop_first(), None);
        assert_eq!(values.pop_last(), None);
    }

    #[rstest]
    fn test_retain_dedup_and_clear() {
        let mut values = SortedVec::from([1, 1, 2, 3, 3, 4]);
        values.dedup();
        assert_eq!(values.as_slice(), &[1, 2, 3, 4]);
        values.retain(|value| value % 2 == 0);
        assert_eq!(values.as_slice(), &[2, 4]);
        values.clear();
        assert!(values.is_empty());
    }

    #[rstest]
    fn test_merging_keeps_duplicates_and_originals() {
        let left = SortedVec::from([1, 3, 5]);
        let right = SortedVec::from([2, 3, 4]);
        let merged = left.merging(&right);
        assert_eq!(merged.as_slice(), &[1, 2, 3, 3, 4, 5]);
        assert_eq!(left.as_slice(), &[1, 3, 5]);
        assert_eq!(right.as_slice(), &[2, 3, 4]);
    }

    #[rstest]
    #[case(vec![], vec![], vec![])]
    #[case(vec![1], vec![], vec![1])]
    #[case(vec![], vec![1], vec![1])]
    #[case(vec![4, 8], vec![1, 9], vec![1, 4, 8, 9])]
    fn test_merge_consuming(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let merged = SortedVec::from(left).merge(SortedVec::from(right));
        assert_eq!(merged.into_vec(), expected);
    }

    #[rstest]
    fn test_extend_merges_unsorted_batch() {
        let mut values = SortedVec::from([2, 6]);
        values.extend(vec![5, 1, 7, 2]);
        assert_eq!(values.as_slice(), &[1, 2, 2, 5, 6, 7]);
        values.extend(Vec::new());
        assert_eq!(values.len(), 6);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = SortedVec::from([1, 2]);
        let mut copy = original.clone();
        copy.insert(0);
        assert_eq!(original.as_slice(), &[1, 2]);
        assert_eq!(copy.as_slice(), &[0, 1, 2]);
    }

    #[rstest]
    fn test_slice_access_through_deref() {
        let values = SortedVec::from([9, 4, 6]);
        assert_eq!(values[1], 6);
        assert_eq!(values.first(), Some(&4));
        assert_eq!(values.last(), Some(&9));
        assert_eq!(values.get(5), None);
    }

    #[rstest]
    fn test_into_iterator_owned_and_borrowed() {
        let values = SortedVec::from([3, 1, 2]);
        let borrowed: Vec<&i32> = (&values).into_iter().collect();
        assert_eq!(borrowed, vec![&1, &2, &3]);
        let owned: Vec<i32> = values.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_debug_prints_as_list() {
        let values = SortedVec::from([2, 1]);
        assert_eq!(format!("{values:?}"), "[1, 2]");
    }

    #[rstest]
    fn test_into_vec_conversion() {
        let values = SortedVec::from([2, 1]);
        let vec: Vec<i32> = values.into();
        assert_eq!(vec, vec![1, 2]);
    }
}

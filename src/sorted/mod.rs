//! Collections that keep their elements in ascending order.
//!
//! - [`SortedVec`]: a contiguous vector whose elements are always sorted,
//!   with `O(log n)` lookup through partition search
//!
//! # Invariant
//!
//! For every adjacent pair `(a, b)` in storage order, `a <= b`. Every public
//! mutating operation preserves it. The trusted constructors
//! ([`SortedVec::from_sorted_vec`], [`SortedVec::from_sorted_iter`]) skip the
//! sort and rely on the caller instead; feeding them unsorted data is not
//! detected and silently breaks later searches.
//!
//! # Examples
//!
//! ```rust
//! use sortwise::sorted::SortedVec;
//!
//! let mut values = SortedVec::from([1, 2, 2, 2, 3]);
//! assert_eq!(values.first_index_of(&2), Some(1));
//! assert_eq!(values.last_index_of(&2), Some(3));
//!
//! assert_eq!(values.remove(&2), 3);
//! assert_eq!(values.as_slice(), &[1, 3]);
//!
//! let merged = values.merging(&SortedVec::from([0, 2, 4]));
//! assert_eq!(merged.as_slice(), &[0, 1, 2, 3, 4]);
//! ```

mod sorted_vec;

pub use sorted_vec::SortedVec;

//! # sortwise
//!
//! Building blocks for working with data that is already in ascending order.
//!
//! ## Overview
//!
//! - **Partition search**: [`search::partition_point`] and the bound helpers built on it
//! - **Ordered merge**: a lazy, single-pass producer that merges two sorted iterators and
//!   can collapse matching pairs into one element
//! - **Sorted vector**: [`SortedVec`](sorted::SortedVec), a `Vec` that keeps its elements
//!   in ascending order with `O(log n)` lookup
//!
//! ## Feature Flags
//!
//! - `merge`: The ordered merge producer
//! - `sorted`: The sorted vector (implies `merge`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sortwise::prelude::*;
//!
//! let merged: Vec<i32> = sorted_merge([1, 4, 9], [2, 4, 5]).collect();
//! assert_eq!(merged, vec![1, 2, 4, 4, 5, 9]);
//!
//! let mut numbers = SortedVec::from(vec![5, 1, 3]);
//! numbers.insert(2);
//! assert_eq!(numbers.as_slice(), &[1, 2, 3, 5]);
//! assert_eq!(numbers.first_index_of(&3), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use sortwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::search::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;

    #[cfg(feature = "sorted")]
    pub use crate::sorted::*;
}

pub mod error;
pub mod search;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "sorted")]
pub mod sorted;

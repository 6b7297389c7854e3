//! Error types for recoverable index access.
//!
//! Most misuse in this crate is a programming error and panics. The only
//! failure callers may want to handle gracefully is addressing an element by
//! position, which [`IndexOutOfBounds`] describes.

/// Represents an attempt to address a position past the end of a collection.
///
/// # Examples
///
/// ```rust
/// use sortwise::error::IndexOutOfBounds;
///
/// let error = IndexOutOfBounds { index: 7, len: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "index out of bounds: the len is 3 but the index is 7"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfBounds {
    /// The position that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

impl std::fmt::Display for IndexOutOfBounds {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index out of bounds: the len is {} but the index is {}",
            self.len, self.index
        )
    }
}

impl std::error::Error for IndexOutOfBounds {}

//! Error type for the fallible list accessors.
//!
//! Only [`PersistentList::head`], [`PersistentList::tail`] and
//! [`PersistentList::at`] can fail. [`PersistentList::remove_at`] is lenient
//! and returns an equal list for an out-of-range index instead of an error.
//!
//! [`PersistentList::head`]: super::PersistentList::head
//! [`PersistentList::tail`]: super::PersistentList::tail
//! [`PersistentList::at`]: super::PersistentList::at
//! [`PersistentList::remove_at`]: super::PersistentList::remove_at

/// Represents a failed access to a [`PersistentList`](super::PersistentList).
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::{ListError, PersistentList};
///
/// let empty: PersistentList<i32> = PersistentList::new();
/// assert_eq!(
///     empty.head(),
///     Err(ListError::EmptyListAccess { operation: "head" })
/// );
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// let error = list.at(5).unwrap_err();
/// assert_eq!(format!("{error}"), "index 5 is out of range for a list of length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// `head` or `tail` was called on the empty list.
    EmptyListAccess {
        /// The name of the accessor that was called.
        operation: &'static str,
    },
    /// `at` was called with an index not smaller than the list's length.
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// The length of the list at the time of the call.
        length: usize,
    },
}

impl std::fmt::Display for ListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyListAccess { operation } => {
                write!(formatter, "{operation} of empty list")
            }
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index {index} is out of range for a list of length {length}"
            ),
        }
    }
}

impl std::error::Error for ListError {}

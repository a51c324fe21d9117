//! # conslist
//!
//! A persistent, immutable, singly-linked list with structural sharing.
//!
//! ## Overview
//!
//! [`PersistentList`](persistent::PersistentList) is a cons-list: every
//! version is a chain of immutable cells, and new versions share the cells
//! of old ones. The crate provides:
//!
//! - **Persistent List**: indexing, length, reversal, concatenation,
//!   removal, mapping, flat-mapping and filtering, all in constant
//!   call-stack depth
//! - **Type Classes**: Functor, Monad, Foldable, Semigroup and Monoid, which
//!   state the list's algebraic laws
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes through `Arc` instead of `Rc`, making lists
//!   `Send + Sync`
//! - `serde`: serialize and deserialize lists as sequences
//!
//! ## Example
//!
//! ```rust
//! use conslist::prelude::*;
//!
//! let list = PersistentList::new().cons(4).cons(3).cons(2).cons(1);
//! assert_eq!(list.at(2), Ok(&3));
//! assert_eq!(list.len(), 4);
//! assert_eq!(format!("{}", list.map(|x| x * 2)), "[2, 4, 6, 8]");
//! assert_eq!(list.at(9), Err(ListError::IndexOutOfRange { index: 9, length: 4 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use conslist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
    pub use crate::typeclass::*;
}

pub mod persistent;
pub mod typeclass;

//! Type class traits for the algebraic laws of [`PersistentList`].
//!
//! - [`TypeConstructor`]: emulates higher-kinded types with a GAT
//! - [`Functor`]: mapping over every element
//! - [`Monad`]: sequencing with `flat_map`
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Semigroup`]: an associative binary operation
//! - [`Monoid`]: a semigroup with an identity element
//!
//! All methods take their receiver by reference and their functions as
//! `FnMut`, since a list applies the function once per element and the
//! receiver stays valid after the call.
//!
//! # Examples
//!
//! ```rust
//! use conslist::persistent::PersistentList;
//! use conslist::typeclass::{Functor, Monoid, Semigroup};
//!
//! let list: PersistentList<i32> = (1..=3).collect();
//! let doubled = list.fmap(|x| x * 2);
//! assert_eq!(format!("{doubled}"), "[2, 4, 6]");
//!
//! let joined = PersistentList::combine_all(vec![list, doubled]);
//! assert_eq!(format!("{joined}"), "[1, 2, 3, 2, 4, 6]");
//! assert!(PersistentList::<i32>::empty().is_empty());
//! ```
//!
//! [`PersistentList`]: crate::persistent::PersistentList

mod foldable;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::{Monoid, Semigroup};

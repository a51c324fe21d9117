//! Functor type class - mapping a function over every element.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x.clone()) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(&f(x)))
//! ```

use super::TypeConstructor;
use crate::persistent::PersistentList;

/// A type class for containers that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::PersistentList;
/// use conslist::typeclass::Functor;
///
/// let list: PersistentList<i32> = (1..=4).collect();
/// let strings = list.fmap(|x| x.to_string());
/// assert_eq!(strings.at(3).map(String::as_str), Ok("4"));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to each element, preserving the structure.
    fn fmap<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    fn replace<B: Clone>(&self, value: B) -> Self::WithType<B> {
        self.fmap(|_| value.clone())
    }
}

impl<T> Functor for PersistentList<T> {
    #[inline]
    fn fmap<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

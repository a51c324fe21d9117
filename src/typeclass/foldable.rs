//! Foldable type class - reducing a structure to a single value.

use super::{Monoid, TypeConstructor};
use crate::persistent::PersistentList;

/// A type class for structures that can be folded from either end.
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::PersistentList;
/// use conslist::typeclass::Foldable;
///
/// let list: PersistentList<i32> = (1..=4).collect();
/// assert_eq!(Foldable::fold_left(&list, 0, |accumulator, x| accumulator + x), 10);
/// assert_eq!(Foldable::length(&list), 4);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the elements from left to right.
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Inner) -> B;

    /// Folds the elements from right to left.
    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results in order.
    fn fold_map<M, F>(&self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(&Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Counts the elements.
    fn length(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

impl<T> Foldable for PersistentList<T> {
    #[inline]
    fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        Self::fold_left(self, init, function)
    }

    #[inline]
    fn fold_right<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        Self::fold_right(self, init, function)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

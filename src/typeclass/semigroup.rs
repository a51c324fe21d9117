//! Semigroup and Monoid type classes.
//!
//! For lists, `combine` is concatenation and `empty` is the empty list.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! ## Identity
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use crate::persistent::PersistentList;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::PersistentList;
/// use conslist::typeclass::Semigroup;
///
/// let left: PersistentList<i32> = (1..=2).collect();
/// let right: PersistentList<i32> = (3..=4).collect();
/// assert_eq!(format!("{}", left.combine(right)), "[1, 2, 3, 4]");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

/// A semigroup with an identity element.
pub trait Monoid: Semigroup + Sized {
    /// Returns the identity element for `combine`.
    fn empty() -> Self;

    /// Combines all values in order, starting from `empty`.
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .fold(Self::empty(), |accumulator, value| accumulator.combine(value))
    }
}

impl<T: Clone> Semigroup for PersistentList<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<T: Clone> Monoid for PersistentList<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

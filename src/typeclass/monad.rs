//! Monad type class - sequencing computations that produce containers.
//!
//! For lists, `flat_map` applies a function to every element and
//! concatenates the produced lists in order.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(&a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(|x| pure(x.clone())) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::Functor;
use crate::persistent::PersistentList;

/// A type class for containers supporting `pure` and `flat_map`.
///
/// Produced elements are copied out of the intermediate containers, hence
/// the `Clone` bound on `B`.
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::PersistentList;
/// use conslist::typeclass::Monad;
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// let pairs = Monad::flat_map(&list, |x| PersistentList::from_sequence([*x, -x]));
/// assert_eq!(format!("{pairs}"), "[1, -1, 2, -2, 3, -3]");
///
/// let single: PersistentList<i32> = <PersistentList<()>>::pure(7);
/// assert_eq!(format!("{single}"), "[7]");
/// ```
pub trait Monad: Functor {
    /// Lifts a single value into the container.
    fn pure<A>(value: A) -> Self::WithType<A>;

    /// Applies `function` to each element and flattens the results.
    fn flat_map<B, F>(&self, function: F) -> Self::WithType<B>
    where
        B: Clone,
        F: FnMut(&Self::Inner) -> Self::WithType<B>;
}

impl<T> Monad for PersistentList<T> {
    #[inline]
    fn pure<A>(value: A) -> PersistentList<A> {
        PersistentList::singleton(value)
    }

    #[inline]
    fn flat_map<B, F>(&self, function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(&T) -> PersistentList<B>,
    {
        Self::flat_map(self, function)
    }
}

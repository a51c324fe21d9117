//! Higher-kinded type emulation.
//!
//! Rust has no native higher-kinded types. A Generic Associated Type lets a
//! trait name "the same container holding a different element type", which
//! is what [`Functor`](super::Functor) and [`Monad`](super::Monad) need.

use crate::persistent::PersistentList;

/// A type constructor applied to one element type.
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::PersistentList;
/// use conslist::typeclass::TypeConstructor;
///
/// fn rewrap<T: TypeConstructor<Inner = i32>>() -> Option<T::WithType<String>> {
///     None
/// }
///
/// let nothing: Option<PersistentList<String>> = rewrap::<PersistentList<i32>>();
/// assert!(nothing.is_none());
/// ```
pub trait TypeConstructor {
    /// The element type this constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for PersistentList<T> {
    type Inner = T;
    type WithType<B> = PersistentList<B>;
}

//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable cons-list whose
//! versions share structure.
//!
//! # Overview
//!
//! A list is a chain of nodes. Each node is either the empty terminal or a
//! cons cell pairing one element with a shared reference to the rest of the
//! list. No cell is ever mutated after construction, so any number of lists
//! may point into the same chain.
//!
//! - O(1) prepend (`cons`), `head`, `tail`
//! - O(n) `len`, `at`, `reverse`, `map`, `filter`
//! - O(n + m) `concat`
//!
//! Every traversal is an explicit loop, so operations on lists of any length
//! use constant call-stack depth. Dropping a long list is iterative as well.
//!
//! # Examples
//!
//! ```rust
//! use conslist::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(4).cons(3).cons(2).cons(1);
//! assert_eq!(list.at(2), Ok(&3));
//! assert_eq!(format!("{}", list.reverse()), "[4, 3, 2, 1]");
//! assert_eq!(format!("{}", list.remove_at(1)), "[1, 3, 4]");
//! assert_eq!(format!("{}", list.filter(|x| x % 2 == 1)), "[1, 3]");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use super::error::ListError;

/// A cons cell: one element and the remainder of the list.
struct Cell<T> {
    value: T,
    next: Node<T>,
}

/// Either the empty terminal or a shared cons cell.
enum Node<T> {
    Empty,
    Cons(ReferenceCounter<Cell<T>>),
}

impl<T> Clone for Node<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cons(cell) => Self::Cons(ReferenceCounter::clone(cell)),
        }
    }
}

impl<T> Default for Node<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

/// A persistent (immutable) singly-linked list.
///
/// `PersistentList` never mutates a node. Every operation returns a new
/// list, sharing as much of the existing chain as the operation allows.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `new`       | O(1)       |
/// | `cons`      | O(1)       |
/// | `head`      | O(1)       |
/// | `tail`      | O(1)       |
/// | `len`       | O(n)       |
/// | `at`        | O(n)       |
/// | `reverse`   | O(n)       |
/// | `concat`    | O(n + m)   |
/// | `remove_at` | O(index)   |
/// | `map`       | O(n)       |
/// | `flat_map`  | O(n * m)   |
/// | `filter`    | O(n)       |
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// assert_eq!(list.head(), Ok(&42));
/// ```
pub struct PersistentList<T> {
    node: Node<T>,
}

impl<T> Drop for PersistentList<T> {
    // Unlinks uniquely owned cells one at a time. The walk stops at the
    // first cell that another list still references.
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.node);
        while let Node::Cons(cell) = next {
            match ReferenceCounter::try_unwrap(cell) {
                Ok(Cell { next: rest, .. }) => next = rest,
                Err(_) => break,
            }
        }
    }
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// The empty list carries no allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { node: Node::Empty }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::singleton(42);
    /// assert_eq!(list.head(), Ok(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list from any finite sequence, keeping its iteration order.
    ///
    /// # Complexity
    ///
    /// O(n) time, with one intermediate buffer of n elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_sequence(1..=5);
    /// assert_eq!(format!("{list}"), "[1, 2, 3, 4, 5]");
    /// ```
    #[must_use]
    pub fn from_sequence<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::build_onto(items.into_iter().collect(), Node::Empty)
    }

    /// Prepends `elements` in order onto `base`.
    ///
    /// `Vec::pop` yields the elements back to front, so each one can be
    /// consed directly and the result keeps the Vec's order.
    fn build_onto(mut elements: Vec<T>, base: Node<T>) -> Self {
        let mut node = base;
        while let Some(value) = elements.pop() {
            node = Node::Cons(ReferenceCounter::new(Cell { value, next: node }));
        }
        Self { node }
    }

    /// Prepends an element to the front of the list.
    ///
    /// This is the constructor primitive: the new list holds one fresh cell
    /// and shares every node of the original list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[doc(alias = "prepend")]
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            node: Node::Cons(ReferenceCounter::new(Cell {
                value: element,
                next: self.node.clone(),
            })),
        }
    }

    /// Returns a reference to the first element of the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyListAccess`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::{ListError, PersistentList};
    ///
    /// let list = PersistentList::new().cons(2).cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    ///
    /// let empty: PersistentList<i32> = PersistentList::new();
    /// assert_eq!(empty.head(), Err(ListError::EmptyListAccess { operation: "head" }));
    /// ```
    #[inline]
    pub fn head(&self) -> Result<&T, ListError> {
        match &self.node {
            Node::Empty => Err(ListError::EmptyListAccess { operation: "head" }),
            Node::Cons(cell) => Ok(&cell.value),
        }
    }

    /// Returns the list without its first element.
    ///
    /// The returned list shares every node with the original.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyListAccess`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// let tail = list.tail().unwrap();
    /// assert_eq!(tail.head(), Ok(&2));
    /// assert_eq!(tail.len(), 2);
    /// ```
    #[inline]
    pub fn tail(&self) -> Result<Self, ListError> {
        match &self.node {
            Node::Empty => Err(ListError::EmptyListAccess { operation: "tail" }),
            Node::Cons(cell) => Ok(Self {
                node: cell.next.clone(),
            }),
        }
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(2).cons(1);
    /// if let Some((head, tail)) = list.uncons() {
    ///     assert_eq!(*head, 1);
    ///     assert_eq!(tail.head(), Ok(&2));
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        match &self.node {
            Node::Empty => None,
            Node::Cons(cell) => Some((
                &cell.value,
                Self {
                    node: cell.next.clone(),
                },
            )),
        }
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.node, Node::Empty)
    }

    /// Returns the number of elements in the list.
    ///
    /// The length is not cached; it is counted with a single loop over the
    /// chain.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) stack
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = &self.node;
        while let Node::Cons(cell) = current {
            count += 1;
            current = &cell.next;
        }
        count
    }

    /// Returns the element at the zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(n), one walk of the chain
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::{ListError, PersistentList};
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// assert_eq!(list.at(2), Ok(&3));
    /// assert_eq!(
    ///     list.at(4),
    ///     Err(ListError::IndexOutOfRange { index: 4, length: 4 })
    /// );
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, ListError> {
        let mut length = 0;
        let mut current = &self.node;
        while let Node::Cons(cell) = current {
            if length == index {
                return Ok(&cell.value);
            }
            length += 1;
            current = &cell.next;
        }
        Err(ListError::IndexOutOfRange { index, length })
    }

    /// Returns a reference to the element at the given index, or `None` if
    /// the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).ok()
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: &self.node,
        }
    }

    /// Returns `true` if the list contains an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Finds the index of the first element that satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=5).collect();
    /// assert_eq!(list.find_index(|x| *x > 3), Some(3));
    /// assert_eq!(list.find_index(|x| *x > 10), None);
    /// ```
    #[must_use]
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Applies `function` to every element, front to back, producing a new
    /// list of the results.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// let doubled = list.map(|x| x * 2);
    /// assert_eq!(format!("{doubled}"), "[2, 4, 6, 8]");
    ///
    /// let labels = list.map(|x| format!("#{x}"));
    /// assert_eq!(labels.head().map(String::as_str), Ok("#1"));
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        PersistentList::build_onto(self.iter().map(function).collect(), Node::Empty)
    }

    /// Folds the list from the front with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// assert_eq!(list.fold_left(0, |accumulator, x| accumulator * 10 + x), 1234);
    /// ```
    pub fn fold_left<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Folds the list from the back with an accumulator.
    ///
    /// The elements are buffered as references first, so the fold does not
    /// recurse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// assert_eq!(list.fold_right(0, |x, accumulator| accumulator * 10 + x), 4321);
    /// ```
    pub fn fold_right<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Applies a function to each element and concatenates the resulting
    /// lists in order.
    ///
    /// The produced elements are gathered into one buffer and the result
    /// chain is built once, so the cost does not grow with repeated
    /// concatenation.
    ///
    /// # Complexity
    ///
    /// O(n * m) where m is the average length of the produced lists
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// let result = list.flat_map(|x| PersistentList::from_sequence([*x, x * 2]));
    /// assert_eq!(format!("{result}"), "[1, 2, 2, 4, 3, 6, 4, 8]");
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, mut function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(&T) -> PersistentList<B>,
    {
        let mut elements = Vec::new();
        for element in self {
            elements.extend(function(element).iter().cloned());
        }
        PersistentList::build_onto(elements, Node::Empty)
    }
}

impl<T: Clone> PersistentList<T> {
    /// Creates a list from a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let mut node = Node::Empty;
        for value in slice.iter().rev() {
            node = Node::Cons(ReferenceCounter::new(Cell {
                value: value.clone(),
                next: node,
            }));
        }
        Self { node }
    }

    /// Returns a new list with elements in reverse order.
    ///
    /// The result is a fresh chain; no cell of the receiver is reused.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// let reversed = list.reverse();
    /// let collected: Vec<&i32> = reversed.iter().collect();
    /// assert_eq!(collected, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut node = Node::Empty;
        for value in self {
            node = Node::Cons(ReferenceCounter::new(Cell {
                value: value.clone(),
                next: node,
            }));
        }
        Self { node }
    }

    /// Concatenates `other` after this list.
    ///
    /// The elements of this list are copied, converted into the element type
    /// of `other`, and prepended onto `other`, whose nodes the result shares.
    /// With equal element types the conversion is the identity.
    ///
    /// # Complexity
    ///
    /// O(n) time and space where n = `self.len()`; `other` is not walked
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// let more = PersistentList::from_sequence([5, 6]);
    /// assert_eq!(format!("{}", list.concat(&more)), "[1, 2, 3, 4, 5, 6]");
    ///
    /// // Widening: a list of u8 joins a list of u32
    /// let small: PersistentList<u8> = PersistentList::from_sequence([1, 2]);
    /// let large: PersistentList<u32> = PersistentList::from_sequence([300]);
    /// assert_eq!(format!("{}", small.concat(&large)), "[1, 2, 300]");
    /// ```
    #[doc(alias = "append")]
    #[must_use]
    pub fn concat<S>(&self, other: &PersistentList<S>) -> PersistentList<S>
    where
        T: Into<S>,
    {
        if self.is_empty() {
            return other.clone();
        }
        let elements: Vec<S> = self.iter().cloned().map(Into::into).collect();
        PersistentList::build_onto(elements, other.node.clone())
    }

    /// Converts every element into `S`, producing a list of the wider type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let narrow: PersistentList<u8> = (1..=3).collect();
    /// let wide: PersistentList<u64> = narrow.widen();
    /// assert_eq!(wide.at(2), Ok(&3_u64));
    /// ```
    #[must_use]
    pub fn widen<S>(&self) -> PersistentList<S>
    where
        T: Into<S>,
    {
        self.iter().cloned().map(Into::into).collect()
    }

    /// Prepends an element of a wider type `S`.
    ///
    /// The receiver is widened first, which costs O(n). When the element
    /// type does not change use [`cons`](Self::cons), which is O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let narrow: PersistentList<i8> = (1..=2).collect();
    /// let wide: PersistentList<i64> = narrow.prepend(-1_000_i64);
    /// assert_eq!(format!("{wide}"), "[-1000, 1, 2]");
    /// ```
    #[must_use]
    pub fn prepend<S>(&self, element: S) -> PersistentList<S>
    where
        T: Into<S>,
    {
        self.widen().cons(element)
    }

    /// Returns a new list without the element at `index`.
    ///
    /// Removal is lenient: an index at or past the end yields a list equal
    /// to the receiver rather than an error. The elements before `index` are
    /// copied and the cells after it are shared.
    ///
    /// # Complexity
    ///
    /// O(index) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// assert_eq!(format!("{}", list.remove_at(1)), "[1, 3, 4]");
    /// assert_eq!(list.remove_at(99), list);
    /// ```
    #[must_use]
    pub fn remove_at(&self, index: usize) -> Self {
        let mut prefix = Vec::new();
        let mut current = &self.node;
        while let Node::Cons(cell) = current {
            if prefix.len() == index {
                return Self::build_onto(prefix, cell.next.clone());
            }
            prefix.push(cell.value.clone());
            current = &cell.next;
        }
        self.clone()
    }

    /// Keeps the elements that satisfy `predicate`, in their original order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// assert_eq!(format!("{}", list.filter(|x| x % 2 == 1)), "[1, 3]");
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = Vec::new();
        for element in self {
            if predicate(element) {
                kept.push(element.clone());
            }
        }
        Self::build_onto(kept, Node::Empty)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: &'a Node<T>,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current: &'a Node<T> = self.current;
        match current {
            Node::Empty => None,
            Node::Cons(cell) => {
                self.current = &cell.next;
                Some(&cell.value)
            }
        }
    }
}

impl<T> Clone for PersistentListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Cells owned only by the iterator give up their elements by move. An
/// element is cloned only while its cell is still shared with another list.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::take(&mut self.list.node) {
            Node::Empty => None,
            Node::Cons(cell) => match ReferenceCounter::try_unwrap(cell) {
                Ok(Cell { value, next }) => {
                    self.list.node = next;
                    Some(value)
                }
                Err(shared) => {
                    self.list.node = shared.next.clone();
                    Some(shared.value.clone())
                }
            },
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    /// Clones the list in O(1) by sharing its chain.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::build_onto(elements, Node::Empty)
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

/// Hashes each element in order, followed by the element count, so that
/// equal lists hash equally and the order of elements matters.
impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length: usize = 0;
        for element in self {
            element.hash(state);
            length += 1;
        }
        length.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `[e1, e2, ..., en]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self)
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(PersistentList::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn first_cell<T>(list: &PersistentList<T>) -> &ReferenceCounter<Cell<T>> {
        match &list.node {
            Node::Cons(cell) => cell,
            Node::Empty => panic!("expected a non-empty list"),
        }
    }

    #[rstest]
    fn test_new_has_no_cell() {
        let list: PersistentList<i32> = PersistentList::new();
        assert!(matches!(list.node, Node::Empty));
    }

    #[rstest]
    fn test_cons_shares_the_original_chain() {
        let list: PersistentList<i32> = (1..=3).collect();
        let extended = list.cons(0);
        assert_eq!(ReferenceCounter::strong_count(first_cell(&list)), 2);
        drop(extended);
        assert_eq!(ReferenceCounter::strong_count(first_cell(&list)), 1);
    }

    #[rstest]
    fn test_tail_shares_the_original_chain() {
        let list: PersistentList<i32> = (1..=3).collect();
        let tail = list.tail().unwrap();
        let second = first_cell(&tail);
        assert_eq!(ReferenceCounter::strong_count(second), 2);
    }

    #[rstest]
    fn test_reverse_builds_a_fresh_chain() {
        let list: PersistentList<i32> = (1..=3).collect();
        let reversed = list.reverse();
        assert_eq!(ReferenceCounter::strong_count(first_cell(&list)), 1);
        assert_eq!(ReferenceCounter::strong_count(first_cell(&reversed)), 1);
    }

    #[rstest]
    fn test_concat_shares_the_right_operand() {
        let left: PersistentList<i32> = (1..=2).collect();
        let right: PersistentList<i32> = (3..=4).collect();
        let combined = left.concat(&right);
        assert_eq!(ReferenceCounter::strong_count(first_cell(&right)), 2);
        assert_eq!(format!("{combined}"), "[1, 2, 3, 4]");
    }

    #[rstest]
    fn test_remove_at_shares_the_suffix() {
        let list: PersistentList<i32> = (1..=4).collect();
        let removed = list.remove_at(1);
        // [3, 4] is now referenced by the cell of 2 and the new cell of 1
        let third = first_cell(&list.tail().unwrap().tail().unwrap()).clone();
        assert_eq!(ReferenceCounter::strong_count(&third), 3);
        assert_eq!(format!("{removed}"), "[1, 3, 4]");
    }

    #[rstest]
    fn test_remove_at_out_of_range_shares_everything() {
        let list: PersistentList<i32> = (1..=4).collect();
        let unchanged = list.remove_at(4);
        assert!(ReferenceCounter::ptr_eq(
            first_cell(&list),
            first_cell(&unchanged)
        ));
    }

    #[rstest]
    fn test_drop_stops_at_shared_cell() {
        let shared: PersistentList<i32> = (0..10).collect();
        let extended = shared.cons(-1).cons(-2);
        drop(extended);
        assert_eq!(shared.len(), 10);
        assert_eq!(ReferenceCounter::strong_count(first_cell(&shared)), 1);
    }

    #[rstest]
    fn test_drop_long_unique_chain() {
        let list: PersistentList<u64> = (0..500_000).collect();
        drop(list);
    }

    #[rstest]
    fn test_into_iter_leaves_shared_list_intact() {
        let list: PersistentList<i32> = (1..=3).collect();
        let collected: Vec<i32> = list.clone().into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_into_iter_moves_out_of_unique_cells() {
        let list: PersistentList<ReferenceCounter<i32>> =
            (1..=3).map(ReferenceCounter::new).collect();
        let mut iterator = list.into_iter();
        let first = iterator.next().unwrap();
        assert_eq!(*first, 1);
        assert_eq!(ReferenceCounter::strong_count(&first), 1);
    }

    #[rstest]
    fn test_into_iter_clones_out_of_shared_cells() {
        let list: PersistentList<ReferenceCounter<i32>> =
            (1..=3).map(ReferenceCounter::new).collect();
        let first = list.clone().into_iter().next().unwrap();
        assert_eq!(*first, 1);
        assert_eq!(ReferenceCounter::strong_count(&first), 2);
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_into_iter_long_unique_chain() {
        let list: PersistentList<u64> = (0..300_000).collect();
        let mut iterator = list.into_iter();
        assert_eq!(iterator.next(), Some(0));
        assert_eq!(iterator.by_ref().take(99_999).count(), 99_999);
        drop(iterator);

        let total: u64 = (0..300_000).collect::<PersistentList<u64>>().into_iter().sum();
        assert_eq!(total, (0..300_000).sum::<u64>());
    }

    #[rstest]
    fn test_reverse_iterates_in_reverse_order() {
        let list = PersistentList::new().cons(3).cons(2).cons(1);
        let reversed = list.reverse();
        let collected: Vec<&i32> = reversed.iter().collect();
        assert_eq!(collected, vec![&3, &2, &1]);
    }

    #[rstest]
    #[case(vec![], "[]")]
    #[case(vec![42], "[42]")]
    #[case(vec![1, 2, 3], "[1, 2, 3]")]
    fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
        let list = PersistentList::from(elements);
        assert_eq!(format!("{list}"), expected);
    }

    #[rstest]
    fn test_debug() {
        let list: PersistentList<&str> = PersistentList::from_sequence(["a", "b"]);
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }

    #[rstest]
    fn test_eq_different_lengths() {
        let short: PersistentList<i32> = (1..=2).collect();
        let long: PersistentList<i32> = (1..=3).collect();
        assert_ne!(short, long);
        assert_ne!(long, short);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_sequence() {
        let list: PersistentList<i32> = (1..=3).collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
    }

    #[rstest]
    fn test_serialize_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert_eq!(serde_json::to_string(&list).unwrap(), "[]");
    }

    #[rstest]
    fn test_deserialize_keeps_order() {
        let list: PersistentList<i32> = serde_json::from_str("[3,1,2]").unwrap();
        assert_eq!(format!("{list}"), "[3, 1, 2]");
    }

    #[rstest]
    fn test_deserialize_rejects_non_sequence() {
        let result: Result<PersistentList<i32>, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}

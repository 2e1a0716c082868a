//! Hash-backed set.
//!
//! This module provides [`HashSet`], the hash-based realization of the
//! [`Set`] trait.
//!
//! # Overview
//!
//! `HashSet` is a wrapper around `HashMap<T, (), S>`: every element is a
//! key mapped to a unit marker, so uniqueness is guaranteed by the map
//! itself.
//!
//! - O(1) expected `add`, `remove` and `contains`
//! - O(1) `len` and `is_empty`
//!
//! Allocating operations return new sets, in-place operations mutate the
//! receiver only.
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::set::{HashSet, Set};
//!
//! let mut set: HashSet<i32> = HashSet::new();
//! assert!(set.add(1));
//! assert!(set.add(2));
//! assert!(!set.add(2)); // Already present
//!
//! assert!(set.contains(&1));
//! assert!(!set.contains(&3));
//! assert_eq!(set.len(), 2);
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use setalgebra::set::{HashSet, Set};
//!
//! let set_a = HashSet::from([1, 2, 3]);
//! let set_b = HashSet::from([3, 4, 5]);
//!
//! let union = set_a.union(&set_b);                        // {1, 2, 3, 4, 5}
//! let intersection = set_a.intersection(&set_b);          // {3}
//! let difference = set_a.difference(&set_b);              // {1, 2}
//! let symmetric_diff = set_a.symmetric_difference(&set_b); // {1, 2, 4, 5}
//!
//! assert_eq!(union.len(), 5);
//! assert_eq!(intersection.len(), 1);
//! assert_eq!(difference.len(), 2);
//! assert_eq!(symmetric_diff.len(), 4);
//!
//! // Operators are available on references
//! assert_eq!(&set_a | &set_b, union);
//! assert_eq!(&set_a & &set_b, intersection);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{DefaultHashBuilder, Set, write_set};

// =============================================================================
// HashSet Definition
// =============================================================================

/// A set of unique elements stored as keys of a hash map.
///
/// `HashSet` has no `Default` implementation: a set only comes into
/// existence through one of its constructors ([`new`](Self::new),
/// [`with_capacity`](Self::with_capacity), [`with_hasher`](Self::with_hasher),
/// [`singleton`](Self::singleton), `collect()` or `From<[T; N]>`).
///
/// # Time Complexity
///
/// | Operation              | Complexity     |
/// |------------------------|----------------|
/// | `new`                  | O(1)           |
/// | `add`                  | O(1) expected  |
/// | `remove`               | O(1) expected  |
/// | `contains`             | O(1) expected  |
/// | `len`                  | O(1)           |
/// | `union`                | O(n + m)       |
/// | `intersection`         | O(m)           |
/// | `difference`           | O(n * c)       |
/// | `symmetric_difference` | O(n + m)       |
/// | `merge`                | O(m)           |
/// | `retain`               | O(n * c)       |
/// | `subtract`             | O(n * c)       |
/// | `xor`                  | O(m)           |
/// | `equals`               | O(n * c)       |
/// | `is_subset`            | O(n * c)       |
/// | `is_superset`          | O(m)           |
/// | `elements`             | O(n)           |
///
/// Here `n` is the receiver's size, `m` the size of `other` and `c` the cost
/// of `other.contains` (O(1) when `other` is also a `HashSet`).
///
/// # Examples
///
/// ```rust
/// use setalgebra::set::{HashSet, Set};
///
/// let set = HashSet::singleton(42);
/// assert!(set.contains(&42));
/// assert_eq!(set.to_string(), "Set{42}");
/// ```
#[derive(Clone)]
pub struct HashSet<T, S = DefaultHashBuilder> {
    inner: HashMap<T, (), S>,
}

static_assertions::assert_not_impl_any!(HashSet<i32>: Default);
static_assertions::assert_not_impl_any!(HashSet<String>: Default);
static_assertions::assert_impl_all!(HashSet<i32>: Clone, Eq, fmt::Debug, fmt::Display);

// No `Default`: construction always goes through a named constructor.
#[allow(clippy::new_without_default)]
impl<T> HashSet<T> {
    /// Creates a new empty set using the [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set::HashSet;
    ///
    /// let set: HashSet<i32> = HashSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set::HashSet;
    ///
    /// let set: HashSet<i32> = HashSet::with_capacity(16);
    /// assert!(set.capacity() >= 16);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> HashSet<T, S> {
    /// Creates a new empty set that hashes elements with `hasher`.
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new empty set with room for `capacity` elements that
    /// hashes elements with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// The order is unspecified. Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set::HashSet;
    ///
    /// let set = HashSet::from([1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> HashSetIterator<'_, T> {
        HashSetIterator {
            inner: self.inner.keys(),
        }
    }
}

impl<T: Eq + Hash> HashSet<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set::HashSet;
    ///
    /// let set = HashSet::singleton("only");
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains("only"));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.inner.insert(element, ());
        set
    }
}

impl<T, S> HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set::HashSet;
    ///
    /// let set = HashSet::from(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Removes an element from the set, accepting any borrowed form of it.
    ///
    /// Returns `true` if the element was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::set::HashSet;
    ///
    /// let mut set = HashSet::from(["a".to_string(), "b".to_string()]);
    /// assert!(set.remove("a"));
    /// assert!(!set.remove("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        self.inner.remove(element).is_some()
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.inner.contains_key(element)
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn all<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn elements(&self) -> Vec<T> {
        self.inner.keys().cloned().collect()
    }

    fn union<O>(&self, other: &O) -> Self
    where
        O: Set<T> + ?Sized,
    {
        let mut result = self.clone();
        result.merge(other);
        result
    }

    fn intersection<O>(&self, other: &O) -> Self
    where
        O: Set<T> + ?Sized,
    {
        let mut result = Self::with_hasher(self.inner.hasher().clone());
        for element in other.all() {
            if self.inner.contains_key(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    fn difference<O>(&self, other: &O) -> Self
    where
        O: Set<T> + ?Sized,
    {
        let mut result = Self::with_hasher(self.inner.hasher().clone());
        for element in self.inner.keys() {
            if !other.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    fn symmetric_difference<O>(&self, other: &O) -> Self
    where
        O: Set<T> + ?Sized,
    {
        let mut result = self.clone();
        result.xor(other);
        result
    }

    fn merge<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized,
    {
        for element in other.all() {
            if !self.inner.contains_key(element) {
                self.inner.insert(element.clone(), ());
            }
        }
    }

    fn retain<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized,
    {
        self.inner.retain(|element, _| other.contains(element));
    }

    fn subtract<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized,
    {
        self.inner.retain(|element, _| !other.contains(element));
    }

    fn xor<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized,
    {
        for element in other.all() {
            if self.inner.remove(element).is_none() {
                self.inner.insert(element.clone(), ());
            }
        }
    }

    fn equals<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized,
    {
        if self.len() != other.len() {
            return false;
        }

        // Equal cardinality plus inclusion is equality for extensional sets.
        for element in self.inner.keys() {
            if !other.contains(element) {
                return false;
            }
        }
        true
    }

    fn is_subset<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized,
    {
        if self.len() > other.len() {
            return false;
        }

        for element in self.inner.keys() {
            if !other.contains(element) {
                return false;
            }
        }
        true
    }

    fn is_superset<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized,
    {
        if self.len() < other.len() {
            return false;
        }

        other
            .all()
            .all(|element| self.inner.contains_key(element))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`HashSet`].
pub struct HashSetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for HashSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for HashSetIterator<'_, T> {}

impl<T> Clone for HashSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`HashSet`].
pub struct HashSetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for HashSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for HashSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for HashSet<T>
where
    T: Eq + Hash,
{
    fn from(elements: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(elements);
        set
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T, S> Extend<&'a T> for HashSet<T, S>
where
    T: 'a + Eq + Hash + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for HashSet<T, S> {
    type Item = T;
    type IntoIter = HashSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        HashSetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoIter = HashSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
}

impl<T: fmt::Debug, S> fmt::Debug for HashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for HashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(formatter, self.iter())
    }
}

// =============================================================================
// Operator Overloads
// =============================================================================

impl<T, S, O> BitOr<&O> for &HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    type Output = HashSet<T, S>;

    /// Returns the union of `self` and `rhs` as a new set.
    fn bitor(self, rhs: &O) -> HashSet<T, S> {
        self.union(rhs)
    }
}

impl<T, S, O> BitAnd<&O> for &HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    type Output = HashSet<T, S>;

    /// Returns the intersection of `self` and `rhs` as a new set.
    fn bitand(self, rhs: &O) -> HashSet<T, S> {
        self.intersection(rhs)
    }
}

impl<T, S, O> Sub<&O> for &HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    type Output = HashSet<T, S>;

    /// Returns the difference of `self` and `rhs` as a new set.
    fn sub(self, rhs: &O) -> HashSet<T, S> {
        self.difference(rhs)
    }
}

impl<T, S, O> BitXor<&O> for &HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    type Output = HashSet<T, S>;

    /// Returns the symmetric difference of `self` and `rhs` as a new set.
    fn bitxor(self, rhs: &O) -> HashSet<T, S> {
        self.symmetric_difference(rhs)
    }
}

impl<T, S, O> BitOrAssign<&O> for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    /// Adds every element of `rhs` to this set.
    fn bitor_assign(&mut self, rhs: &O) {
        self.merge(rhs);
    }
}

impl<T, S, O> BitAndAssign<&O> for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    /// Keeps only the elements also present in `rhs`.
    fn bitand_assign(&mut self, rhs: &O) {
        self.retain(rhs);
    }
}

impl<T, S, O> SubAssign<&O> for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    /// Removes every element present in `rhs`.
    fn sub_assign(&mut self, rhs: &O) {
        self.subtract(rhs);
    }
}

impl<T, S, O> BitXorAssign<&O> for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    O: Set<T>,
{
    /// Toggles the membership of every element of `rhs`.
    fn bitxor_assign(&mut self, rhs: &O) {
        self.xor(rhs);
    }
}

// =============================================================================
// Tests
// =============================================================================

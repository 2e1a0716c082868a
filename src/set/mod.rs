//! Mathematical sets.
//!
//! This module provides the [`Set`] capability trait and its hash-backed
//! realization:
//!
//! - [`Set`]: what it means to be a set, independent of storage
//! - [`HashSet`]: a set storing elements as keys of a hash map with no payload
//!
//! # Heterogeneous Algebra
//!
//! Every operation that takes an `other` set is generic over any [`Set`]
//! implementation. Algorithms only rely on `other`'s [`Set::contains`],
//! [`Set::len`] and [`Set::all`], so the operands never need to share a
//! storage strategy.
//!
//! ```rust
//! use setalgebra::set::{HashSet, Set};
//!
//! let mut set: HashSet<i32> = HashSet::new();
//! set.add(1);
//! set.add(2);
//! set.add(3);
//!
//! let other = HashSet::from([2, 3, 4]);
//!
//! set.retain(&other);
//! assert!(set.equals(&HashSet::from([2, 3])));
//! assert_eq!(HashSet::singleton(1).to_set_string(), "Set{1}");
//! ```

use std::fmt;
use std::hash::Hash;

mod hasher;
mod hashset;

pub use hasher::DefaultHashBuilder;
pub use hashset::HashSet;
pub use hashset::HashSetIntoIterator;
pub use hashset::HashSetIterator;

// =============================================================================
// Set Definition
// =============================================================================

/// A collection of distinct elements supporting the standard set algebra.
///
/// Implementations guarantee that no element is stored twice and that
/// [`len`](Set::len) always equals the number of distinct elements.
/// Enumeration order is unspecified and is not part of a set's identity.
///
/// All operations are total. Allocating operations (`union`,
/// `intersection`, `difference`, `symmetric_difference`) mutate neither
/// operand and return a new, independently owned set. In-place operations
/// (`merge`, `retain`, `subtract`, `xor`) mutate only the receiver.
///
/// # Complexity
///
/// Bounds below are stated for the receiver having `n` elements, `other`
/// having `m`, and `c` being the cost of `other.contains`.
///
/// | Operation              | Complexity   |
/// |------------------------|--------------|
/// | `union`                | O(n + m)     |
/// | `intersection`         | O(m)         |
/// | `difference`           | O(n * c)     |
/// | `symmetric_difference` | O(n + m)     |
/// | `merge`                | O(m)         |
/// | `retain`               | O(n * c)     |
/// | `subtract`             | O(n * c)     |
/// | `xor`                  | O(m)         |
/// | `equals`, `is_subset`  | O(n * c)     |
/// | `is_superset`          | O(m)         |
pub trait Set<T>
where
    T: Eq + Hash,
{
    /// Inserts `element` into the set.
    ///
    /// Returns `true` if the element was not already present. Adding an
    /// existing element leaves the set unchanged.
    fn add(&mut self, element: T) -> bool;

    /// Removes `element` from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent
    /// element leaves the set unchanged.
    fn remove(&mut self, element: &T) -> bool;

    /// Reports whether `element` is a member of the set.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a lazy iterator over the elements.
    ///
    /// Each call starts a fresh traversal. The order is unspecified and may
    /// differ between calls and across mutations.
    fn all<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Collects the elements into a vector, in unspecified order.
    fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.len());
        elements.extend(self.all().cloned());
        elements
    }

    /// Returns a new set holding every element of `self` or `other`.
    #[must_use]
    fn union<O>(&self, other: &O) -> Self
    where
        Self: Sized,
        O: Set<T> + ?Sized;

    /// Returns a new set holding the elements present in both sets.
    #[must_use]
    fn intersection<O>(&self, other: &O) -> Self
    where
        Self: Sized,
        O: Set<T> + ?Sized;

    /// Returns a new set holding the elements of `self` absent from `other`.
    #[must_use]
    fn difference<O>(&self, other: &O) -> Self
    where
        Self: Sized,
        O: Set<T> + ?Sized;

    /// Returns a new set holding the elements present in exactly one set.
    #[must_use]
    fn symmetric_difference<O>(&self, other: &O) -> Self
    where
        Self: Sized,
        O: Set<T> + ?Sized;

    /// Adds every element of `other` to `self` (in-place union).
    fn merge<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized;

    /// Keeps only the elements also present in `other` (in-place intersection).
    fn retain<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized;

    /// Removes every element present in `other` (in-place difference).
    fn subtract<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized;

    /// Toggles the membership of every element of `other`
    /// (in-place symmetric difference).
    fn xor<O>(&mut self, other: &O)
    where
        O: Set<T> + ?Sized;

    /// Reports whether both sets hold exactly the same elements.
    fn equals<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized;

    /// Reports whether every element of `self` is in `other`.
    fn is_subset<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized;

    /// Reports whether every element of `other` is in `self`.
    fn is_superset<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized;

    /// Reports whether the sets share no element.
    fn is_disjoint<O>(&self, other: &O) -> bool
    where
        O: Set<T> + ?Sized,
    {
        if self.len() <= other.len() {
            self.all().all(|element| !other.contains(element))
        } else {
            other.all().all(|element| !self.contains(element))
        }
    }

    /// Renders the set as `Set{e1, e2, ...}`.
    ///
    /// Elements appear in the same unspecified order as [`all`](Set::all).
    ///
    /// Rendering stops at the first element whose [`Display`](fmt::Display)
    /// implementation returns an error, and the text written up to that
    /// point is returned. Format the set with `write!` through its `Display`
    /// implementation when the error must be observed.
    fn to_set_string(&self) -> String
    where
        T: fmt::Display,
    {
        let mut output = String::new();
        // `String` never fails; only an element's `Display` can.
        let _ = write_set(&mut output, self.all());
        output
    }
}

/// Writes `elements` in the canonical `Set{e1, e2, ...}` form.
pub(crate) fn write_set<'a, T, W>(
    output: &mut W,
    elements: impl Iterator<Item = &'a T>,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    W: fmt::Write + ?Sized,
{
    output.write_str("Set{")?;
    for (index, element) in elements.enumerate() {
        if index > 0 {
            output.write_str(", ")?;
        }
        write!(output, "{element}")?;
    }
    output.write_str("}")
}

// =============================================================================
// Tests
// =============================================================================

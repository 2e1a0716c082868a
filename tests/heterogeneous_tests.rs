//! Algebra across different `Set` realizations.
//!
//! `VecSet` stores its elements in a plain vector and answers `contains` by
//! linear scan. Combining it with `HashSet` checks that the algorithms rely
//! only on the trait's public operations.

use proptest::prelude::*;
use rstest::rstest;
use setalgebra::set::{HashSet, Set};
use std::hash::Hash;

/// A linear-scan set used only to exercise mixed-realization algebra.
#[derive(Clone, Debug)]
struct VecSet<T> {
    elements: Vec<T>,
}

impl<T: Eq + Hash + Clone> VecSet<T> {
    fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for VecSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.add(element);
        }
        set
    }
}

impl<T: Eq + Hash + Clone> Set<T> for VecSet<T> {
    fn add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|candidate| candidate == element) {
            Some(index) => {
                self.elements.swap_remove(index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn all<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.elements.iter()
    }

    fn union<O: Set<T> + ?Sized>(&self, other: &O) -> Self {
        let mut result = self.clone();
        result.merge(other);
        result
    }

    fn intersection<O: Set<T> + ?Sized>(&self, other: &O) -> Self {
        self.all()
            .filter(|element| other.contains(element))
            .cloned()
            .collect()
    }

    fn difference<O: Set<T> + ?Sized>(&self, other: &O) -> Self {
        self.all()
            .filter(|element| !other.contains(element))
            .cloned()
            .collect()
    }

    fn symmetric_difference<O: Set<T> + ?Sized>(&self, other: &O) -> Self {
        let mut result = self.clone();
        result.xor(other);
        result
    }

    fn merge<O: Set<T> + ?Sized>(&mut self, other: &O) {
        for element in other.all() {
            self.add(element.clone());
        }
    }

    fn retain<O: Set<T> + ?Sized>(&mut self, other: &O) {
        self.elements.retain(|element| other.contains(element));
    }

    fn subtract<O: Set<T> + ?Sized>(&mut self, other: &O) {
        self.elements.retain(|element| !other.contains(element));
    }

    fn xor<O: Set<T> + ?Sized>(&mut self, other: &O) {
        for element in other.all() {
            if !self.remove(element) {
                self.elements.push(element.clone());
            }
        }
    }

    fn equals<O: Set<T> + ?Sized>(&self, other: &O) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    fn is_subset<O: Set<T> + ?Sized>(&self, other: &O) -> bool {
        self.len() <= other.len() && self.all().all(|element| other.contains(element))
    }

    fn is_superset<O: Set<T> + ?Sized>(&self, other: &O) -> bool {
        self.len() >= other.len() && other.all().all(|element| self.contains(element))
    }
}

fn sorted<S: Set<i32>>(set: &S) -> Vec<i32> {
    let mut elements = set.elements();
    elements.sort_unstable();
    elements
}

// =============================================================================
// HashSet receiver, VecSet argument
// =============================================================================

#[rstest]
fn test_hashset_algebra_with_vecset_argument() {
    let hash_set = HashSet::from([1, 2, 3]);
    let vec_set: VecSet<i32> = [3, 4, 5].into_iter().collect();

    assert_eq!(sorted(&hash_set.union(&vec_set)), vec![1, 2, 3, 4, 5]);
    assert_eq!(sorted(&hash_set.intersection(&vec_set)), vec![3]);
    assert_eq!(sorted(&hash_set.difference(&vec_set)), vec![1, 2]);
    assert_eq!(
        sorted(&hash_set.symmetric_difference(&vec_set)),
        vec![1, 2, 4, 5]
    );
}

#[rstest]
fn test_hashset_in_place_with_vecset_argument() {
    let vec_set: VecSet<i32> = [2, 3].into_iter().collect();

    let mut merged = HashSet::from([1, 2]);
    merged.merge(&vec_set);
    assert_eq!(sorted(&merged), vec![1, 2, 3]);

    let mut retained = HashSet::from([1, 2]);
    retained.retain(&vec_set);
    assert_eq!(sorted(&retained), vec![2]);

    let mut subtracted = HashSet::from([1, 2, 3]);
    subtracted.subtract(&vec_set);
    assert_eq!(sorted(&subtracted), vec![1]);

    let mut toggled = HashSet::from([1, 2]);
    toggled.xor(&vec_set);
    assert_eq!(sorted(&toggled), vec![1, 3]);

    assert_eq!(sorted(&vec_set), vec![2, 3]);
}

#[rstest]
fn test_hashset_relations_with_vecset_argument() {
    let hash_set = HashSet::from([1, 2]);
    let larger: VecSet<i32> = [1, 2, 3].into_iter().collect();
    let same: VecSet<i32> = [2, 1].into_iter().collect();

    assert!(hash_set.is_subset(&larger));
    assert!(!hash_set.is_superset(&larger));
    assert!(hash_set.equals(&same));
    assert!(!hash_set.equals(&larger));
    assert!(hash_set.is_superset(&same));
    assert!(!hash_set.is_disjoint(&larger));
}

#[rstest]
fn test_operators_accept_any_realization() {
    let hash_set = HashSet::from([1, 2, 3]);
    let vec_set: VecSet<i32> = [3, 4].into_iter().collect();

    assert_eq!(sorted(&(&hash_set | &vec_set)), vec![1, 2, 3, 4]);
    assert_eq!(sorted(&(&hash_set & &vec_set)), vec![3]);
    assert_eq!(sorted(&(&hash_set - &vec_set)), vec![1, 2]);
    assert_eq!(sorted(&(&hash_set ^ &vec_set)), vec![1, 2, 4]);

    let mut receiver = HashSet::from([1]);
    receiver |= &vec_set;
    assert_eq!(sorted(&receiver), vec![1, 3, 4]);
}

// =============================================================================
// VecSet receiver, HashSet argument
// =============================================================================

#[rstest]
fn test_vecset_algebra_with_hashset_argument() {
    let vec_set: VecSet<i32> = [1, 2, 3].into_iter().collect();
    let hash_set = HashSet::from([3, 4, 5]);

    assert_eq!(sorted(&vec_set.union(&hash_set)), vec![1, 2, 3, 4, 5]);
    assert_eq!(sorted(&vec_set.intersection(&hash_set)), vec![3]);
    assert!(vec_set.union(&hash_set).equals(&hash_set.union(&vec_set)));
}

#[rstest]
fn test_string_form_through_trait() {
    let vec_set: VecSet<i32> = [1].into_iter().collect();
    assert_eq!(vec_set.to_set_string(), "Set{1}");
    assert_eq!(VecSet::<i32>::new().to_set_string(), "Set{}");
}

// =============================================================================
// Cross-realization laws
// =============================================================================

proptest! {
    #[test]
    fn prop_mixed_operands_agree_with_homogeneous(
        elements_a in prop::collection::vec(-15..15_i32, 0..25),
        elements_b in prop::collection::vec(-15..15_i32, 0..25)
    ) {
        let hash_a: HashSet<i32> = elements_a.iter().copied().collect();
        let hash_b: HashSet<i32> = elements_b.iter().copied().collect();
        let vec_b: VecSet<i32> = elements_b.iter().copied().collect();

        prop_assert_eq!(hash_a.union(&vec_b), hash_a.union(&hash_b));
        prop_assert_eq!(hash_a.intersection(&vec_b), hash_a.intersection(&hash_b));
        prop_assert_eq!(hash_a.difference(&vec_b), hash_a.difference(&hash_b));
        prop_assert_eq!(
            hash_a.symmetric_difference(&vec_b),
            hash_a.symmetric_difference(&hash_b)
        );
        prop_assert_eq!(hash_a.equals(&vec_b), hash_a.equals(&hash_b));
        prop_assert_eq!(hash_a.is_subset(&vec_b), hash_a.is_subset(&hash_b));
        prop_assert_eq!(hash_a.is_superset(&vec_b), hash_a.is_superset(&hash_b));
    }

    #[test]
    fn prop_mixed_equality_is_symmetric(
        elements in prop::collection::vec(-15..15_i32, 0..25)
    ) {
        let hash_set: HashSet<i32> = elements.iter().copied().collect();
        let vec_set: VecSet<i32> = elements.iter().copied().collect();

        prop_assert!(hash_set.equals(&vec_set));
        prop_assert!(vec_set.equals(&hash_set));
        prop_assert!(hash_set.is_subset(&vec_set) && vec_set.is_subset(&hash_set));
    }
}

//! Pluggable equality used by collection operations.
//!
//! A [`ComparisonStrategy`] decides when two elements count as equal, and
//! every membership check of the collection operations goes through it.
//! [`StandardComparisonStrategy`] keeps the element's intrinsic equality;
//! [`ComparatorStrategy`] replaces it with whatever a [`Comparator`] says,
//! so a case-insensitive comparator makes `"Frodo"` and `"FrODO"`
//! duplicates of each other.
use std::cmp::Ordering;

use crate::casing::IgnoreCaseExt;

/// An injectable ordering capability: the comparison function a
/// [`ComparatorStrategy`] derives its equality from.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a `Comparator`.
pub trait Comparator<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders strings by their case folded form, so that `"Frodo"` and
/// `"FrODO"` compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitiveStringComparator;

impl CaseInsensitiveStringComparator {
    fn compare_str(left: &str, right: &str) -> Ordering {
        left.to_folded_case().cmp(&right.to_folded_case())
    }
}

impl Comparator<&str> for CaseInsensitiveStringComparator {
    fn compare(&self, left: &&str, right: &&str) -> Ordering {
        Self::compare_str(left, right)
    }
}

impl Comparator<String> for CaseInsensitiveStringComparator {
    fn compare(&self, left: &String, right: &String) -> Ordering {
        Self::compare_str(left, right)
    }
}

/// An equality notion for elements of a sequence, together with the
/// collection operations built on top of it.
///
/// `are_equal` is the single required method; duplicate detection and
/// containment are provided on top of it and never fall back to `PartialEq`
/// or identity. Strategies are immutable and freely shareable; every
/// operation is a pure function of its input.
pub trait ComparisonStrategy<T> {
    /// Whether the two elements are equal under this strategy.
    fn are_equal(&self, left: &T, right: &T) -> bool;

    /// Whether any element of `iterable` is equal to `element` under this
    /// strategy. An absent iterable contains nothing.
    fn iterable_contains<'a, I>(&self, iterable: Option<I>, element: &T) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        iterable
            .into_iter()
            .flatten()
            .any(|candidate| self.are_equal(candidate, element))
    }

    /// Collects one representative of each element that occurs more than
    /// once in `iterable` under this strategy. An element appearing three
    /// times is still reported once. Absent and empty inputs both yield an
    /// empty result.
    fn duplicates_from<I>(&self, iterable: Option<I>) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut seen: Vec<T> = Vec::new();
        let mut duplicates: Vec<T> = Vec::new();
        for element in iterable.into_iter().flatten() {
            if self.slice_contains(&seen, &element) {
                if !self.slice_contains(&duplicates, &element) {
                    duplicates.push(element);
                }
            } else {
                seen.push(element);
            }
        }
        duplicates
    }

    /// Membership primitive shared by the provided operations.
    fn slice_contains(&self, haystack: &[T], element: &T) -> bool {
        haystack
            .iter()
            .any(|candidate| self.are_equal(candidate, element))
    }
}

/// The default strategy: elements are equal iff their intrinsic
/// [`PartialEq`] says so.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardComparisonStrategy;

impl<T: PartialEq> ComparisonStrategy<T> for StandardComparisonStrategy {
    fn are_equal(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// A strategy whose equality is derived from a [`Comparator`]: two elements
/// are equal iff the comparator returns [`Ordering::Equal`] for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparatorStrategy<C> {
    comparator: C,
}

impl<C> ComparatorStrategy<C> {
    pub fn new(comparator: C) -> Self {
        ComparatorStrategy { comparator }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl ComparatorStrategy<CaseInsensitiveStringComparator> {
    /// A strategy under which strings differing only in case are equal.
    pub fn case_insensitive() -> Self {
        ComparatorStrategy::new(CaseInsensitiveStringComparator)
    }
}

impl<T, C: Comparator<T>> ComparisonStrategy<T> for ComparatorStrategy<C> {
    fn are_equal(&self, left: &T, right: &T) -> bool {
        self.comparator.compare(left, right) == Ordering::Equal
    }
}

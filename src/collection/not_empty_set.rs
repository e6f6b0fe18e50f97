//! Unique-element non-empty container

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, TypeError};
use crate::number::StrictlyPositiveInt;

/// A set guaranteed to contain at least one element, with duplicates
/// collapsed to their first occurrence.
///
/// Elements are kept in first-occurrence order internally, which makes
/// [`head`](Self::head) deterministic, but callers must not rely on any
/// particular iteration order across versions. Equality is
/// order-insensitive set equality.
///
/// Deduplication compares pairwise (`O(n²)` construction); the crate
/// deliberately trades construction speed for requiring only
/// `PartialEq` on elements.
///
/// # Example
///
/// ```rust
/// use veritype::NotEmptySet;
///
/// let s = NotEmptySet::new(1, vec![2, 3, 1]);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.head(), &1);
/// assert!(s.contains(&3));
/// ```
#[derive(Debug, Clone)]
pub struct NotEmptySet<E> {
    head: E,
    tail: Vec<E>,
}

impl<E: PartialEq> NotEmptySet<E> {
    /// Builds a set from a head and the following elements, collapsing
    /// duplicates to their first occurrence.
    ///
    /// Non-emptiness is structural here, so construction never fails.
    pub fn new(head: E, tail: Vec<E>) -> Self {
        let mut unique: Vec<E> = Vec::with_capacity(tail.len());
        for element in tail {
            if element != head && !unique.contains(&element) {
                unique.push(element);
            }
        }
        Self { head, tail: unique }
    }

    /// Builds a single-element set.
    pub fn singleton(head: E) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Takes a deduplicated snapshot of `vec`, or returns `None` if it
    /// is empty.
    ///
    /// This is the or-null construction shape.
    pub fn from_vec(mut vec: Vec<E>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// Takes a deduplicated snapshot of `vec`, or reports that it was
    /// empty.
    ///
    /// This is the or-result construction shape.
    pub fn try_from_vec(vec: Vec<E>) -> Result<Self, TypeError> {
        Self::from_vec(vec).ok_or(TypeError::EmptyCollection)
    }

    /// Takes a deduplicated snapshot of `vec`.
    ///
    /// This is the or-throw construction shape.
    ///
    /// # Panics
    ///
    /// Panics if `vec` is empty.
    pub fn from_vec_unchecked(vec: Vec<E>) -> Self {
        match Self::try_from_vec(vec) {
            Ok(set) => set,
            Err(e) => panic!("{e}"),
        }
    }

    /// Whether `element` belongs to this set.
    pub fn contains(&self, element: &E) -> bool {
        self.head == *element || self.tail.contains(element)
    }
}

impl<E> NotEmptySet<E> {
    /// The first element inserted. Always present.
    pub fn head(&self) -> &E {
        &self.head
    }

    /// The number of distinct elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to mirror the standard collection
    /// surface.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The number of distinct elements, typed strictly positive.
    ///
    /// Sizes beyond `i32::MAX` clamp to `i32::MAX`.
    pub fn typed_len(&self) -> StrictlyPositiveInt {
        let len = i32::try_from(self.len()).unwrap_or(i32::MAX);
        StrictlyPositiveInt::new_unchecked(len)
    }

    /// Iterates over all distinct elements in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<E: PartialEq + Clone> NotEmptySet<E> {
    /// The set without its first element, or `None` for a
    /// single-element set.
    ///
    /// Clones the remaining elements, so this is O(n).
    pub fn tail(&self) -> Option<NotEmptySet<E>> {
        NotEmptySet::from_vec(self.tail.clone())
    }
}

impl<E: Eq + Hash + Clone> NotEmptySet<E> {
    /// Copies all elements into a `HashSet`.
    pub fn to_set(&self) -> HashSet<E> {
        self.iter().cloned().collect()
    }
}

impl<E> IntoIterator for NotEmptySet<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

// Set equality: same cardinality, same members, any order.
impl<E: PartialEq> PartialEq for NotEmptySet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<E: Eq> Eq for NotEmptySet<E> {}

impl<E: Serialize> Serialize for NotEmptySet<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Deserialize<'de> + PartialEq> Deserialize<'de> for NotEmptySet<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<E>::deserialize(deserializer)?;
        Self::try_from_vec(elements).map_err(|e| serde::de::Error::custom(DecodeError::new(e)))
    }
}

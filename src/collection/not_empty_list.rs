//! Ordered non-empty container

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, TypeError};
use crate::number::StrictlyPositiveInt;

/// A list guaranteed to contain at least one element, preserving order
/// and duplicates.
///
/// Stored as a head plus a tail vector, so [`head`](Self::head) is
/// O(1) by construction. The container is immutable after creation.
///
/// # Example
///
/// ```rust
/// use veritype::NotEmptyList;
///
/// let xs = NotEmptyList::new(1, vec![2, 3, 1]);
/// assert_eq!(xs.head(), &1);
/// assert_eq!(xs.to_vec(), vec![1, 2, 3, 1]);
///
/// let tail = xs.tail().unwrap();
/// assert_eq!(tail.to_vec(), vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotEmptyList<E> {
    head: E,
    tail: Vec<E>,
}

impl<E> NotEmptyList<E> {
    /// Builds a list from a head and the following elements.
    ///
    /// Non-emptiness is structural here, so no validation runs.
    pub fn new(head: E, tail: Vec<E>) -> Self {
        Self { head, tail }
    }

    /// Builds a single-element list.
    pub fn singleton(head: E) -> Self {
        Self::new(head, Vec::new())
    }

    /// Takes a snapshot of `vec`, or returns `None` if it is empty.
    ///
    /// This is the or-null construction shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritype::NotEmptyList;
    ///
    /// assert!(NotEmptyList::from_vec(vec![1]).is_some());
    /// assert!(NotEmptyList::<i32>::from_vec(vec![]).is_none());
    /// ```
    pub fn from_vec(mut vec: Vec<E>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// Takes a snapshot of `vec`, or reports that it was empty.
    ///
    /// This is the or-result construction shape.
    pub fn try_from_vec(vec: Vec<E>) -> Result<Self, TypeError> {
        Self::from_vec(vec).ok_or(TypeError::EmptyCollection)
    }

    /// Takes a snapshot of `vec`.
    ///
    /// This is the or-throw construction shape, for call sites that
    /// consider an empty source a programming error.
    ///
    /// # Panics
    ///
    /// Panics if `vec` is empty.
    pub fn from_vec_unchecked(vec: Vec<E>) -> Self {
        match Self::try_from_vec(vec) {
            Ok(list) => list,
            Err(e) => panic!("{e}"),
        }
    }

    /// The first element. Always present.
    pub fn head(&self) -> &E {
        &self.head
    }

    /// The last element. Always present.
    pub fn last(&self) -> &E {
        self.tail.last().unwrap_or(&self.head)
    }

    /// The number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present to mirror the standard collection
    /// surface.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The number of elements, typed strictly positive.
    ///
    /// Sizes beyond `i32::MAX` clamp to `i32::MAX`.
    pub fn typed_len(&self) -> StrictlyPositiveInt {
        let len = i32::try_from(self.len()).unwrap_or(i32::MAX);
        StrictlyPositiveInt::new_unchecked(len)
    }

    /// Iterates over all elements, head first.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Unwraps into a plain `Vec`, head first.
    pub fn into_vec(self) -> Vec<E> {
        let mut vec = Vec::with_capacity(1 + self.tail.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Applies `f` to every element, preserving order and
    /// non-emptiness.
    pub fn map<U, F>(self, mut f: F) -> NotEmptyList<U>
    where
        F: FnMut(E) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NotEmptyList::new(head, tail)
    }
}

impl<E: Clone> NotEmptyList<E> {
    /// Everything after the head, or `None` for a single-element list.
    ///
    /// Clones the remaining elements, so this is O(n).
    pub fn tail(&self) -> Option<NotEmptyList<E>> {
        NotEmptyList::from_vec(self.tail.clone())
    }

    /// Copies all elements into a plain `Vec`, head first.
    pub fn to_vec(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }
}

impl<E> IntoIterator for NotEmptyList<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<E> std::ops::Index<usize> for NotEmptyList<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

// Codec: the wire shape is a plain sequence; decoding re-checks
// non-emptiness so untrusted data cannot produce an empty container.
impl<E: Serialize> Serialize for NotEmptyList<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for NotEmptyList<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<E>::deserialize(deserializer)?;
        Self::try_from_vec(elements).map_err(|e| serde::de::Error::custom(DecodeError::new(e)))
    }
}

//! Collections guaranteed to hold at least one element
//!
//! Two shapes share the same contract:
//!
//! - [`NotEmptyList`]: ordered, duplicates preserved;
//! - [`NotEmptySet`]: duplicates collapsed to their first occurrence.
//!
//! Both decompose into a `head` (always present) and a `tail`
//! (`Option<Self>`, absent for single-element containers, which have
//! no non-empty remainder). Construction
//! from a head is structural and never fails; construction from an
//! arbitrary collection offers the usual trio. Every constructor takes
//! a snapshot: mutating the source afterwards never changes the
//! container.
//!
//! # Example
//!
//! ```rust
//! use veritype::{not_empty_list, not_empty_set, NotEmptyList};
//!
//! let xs = not_empty_list![1, 2, 3, 1];
//! assert_eq!(xs.head(), &1);
//! assert_eq!(xs.to_vec(), vec![1, 2, 3, 1]);
//!
//! let s = not_empty_set![1, 2, 3, 1];
//! assert_eq!(s.len(), 3);
//!
//! assert!(NotEmptyList::<i32>::from_vec(vec![]).is_none());
//! ```

mod not_empty_list;
mod not_empty_set;

pub use not_empty_list::NotEmptyList;
pub use not_empty_set::NotEmptySet;

/// Builds a [`NotEmptyList`] from at least one element.
///
/// ```rust
/// use veritype::not_empty_list;
///
/// let xs = not_empty_list![1, 2, 3];
/// assert_eq!(xs.head(), &1);
/// assert_eq!(xs.len(), 3);
/// ```
#[macro_export]
macro_rules! not_empty_list {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NotEmptyList::new($head, vec![$($tail),*])
    };
}

/// Builds a [`NotEmptySet`] from at least one element; duplicates
/// collapse to their first occurrence.
///
/// ```rust
/// use veritype::not_empty_set;
///
/// let s = not_empty_set![1, 2, 3, 1];
/// assert_eq!(s.head(), &1);
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! not_empty_set {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NotEmptySet::new($head, vec![$($tail),*])
    };
}

//! The not-blank string type
//!
//! [`NotBlankString`] refines `String` to guarantee at least one
//! non-whitespace character. Ordering is lexicographic on the
//! underlying string, and [`length`](NotBlankString::length) is typed
//! as a [`StrictlyPositiveInt`]: the blank-exclusion invariant means a
//! length of zero is impossible.
//!
//! Construction offers only the `Result` and `Option` shapes; callers
//! that want a panic wrap the result themselves.
//!
//! # Example
//!
//! ```rust
//! use veritype::NotBlankString;
//!
//! let name = NotBlankString::new("oranges".to_string()).unwrap();
//! assert_eq!(name.length(), 7);
//!
//! assert!(NotBlankString::or_none("   ".to_string()).is_none());
//! assert!(NotBlankString::new(String::new()).is_err());
//! ```

use std::str::FromStr;

use crate::error::TypeError;
use crate::number::StrictlyPositiveInt;
use crate::refined::{Predicate, Refined};

/// The string contains at least one non-whitespace character.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlank;

impl Predicate<String> for NotBlank {
    fn check(value: &String) -> Result<(), TypeError> {
        if value.trim().is_empty() {
            Err(TypeError::BlankString)
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "string with at least one non-whitespace character"
    }
}

/// A `String` guaranteed to satisfy [`NotBlank`].
pub type NotBlankString = Refined<String, NotBlank>;

impl Refined<String, NotBlank> {
    /// The number of characters in this string.
    ///
    /// Counts Unicode scalar values, not bytes. Never zero, so the
    /// result is typed strictly positive. Lengths beyond `i32::MAX`
    /// characters clamp to `i32::MAX`.
    pub fn length(&self) -> StrictlyPositiveInt {
        let count = self.get().chars().count();
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        StrictlyPositiveInt::new_unchecked(count)
    }
}

impl FromStr for Refined<String, NotBlank> {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, TypeError> {
        Self::new(s.to_string())
    }
}

impl TryFrom<&str> for Refined<String, NotBlank> {
    type Error = TypeError;

    fn try_from(value: &str) -> Result<Self, TypeError> {
        Self::new(value.to_string())
    }
}

impl TryFrom<String> for Refined<String, NotBlank> {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, TypeError> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_text() {
        let s = NotBlankString::new("hello world".to_string()).unwrap();
        assert_eq!(s.get(), "hello world");
    }

    #[test]
    fn test_accepts_text_padded_with_whitespace() {
        // Padding is kept; only all-whitespace content is rejected.
        let s = NotBlankString::new("  x  ".to_string()).unwrap();
        assert_eq!(s.get(), "  x  ");
        assert_eq!(s.length(), 5);
    }

    #[test]
    fn test_rejects_blank_content() {
        assert_eq!(
            NotBlankString::new("  ".to_string()).unwrap_err(),
            TypeError::BlankString
        );
        assert_eq!(
            NotBlankString::new("\t\n".to_string()).unwrap_err(),
            TypeError::BlankString
        );
        assert!(NotBlankString::or_none(String::new()).is_none());
    }

    #[test]
    fn test_length_counts_characters() {
        let s: NotBlankString = "héllo".parse().unwrap();
        assert_eq!(s.length(), 5);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a: NotBlankString = "apple".parse().unwrap();
        let b: NotBlankString = "banana".parse().unwrap();
        assert!(a < b);

        let mut fruits = vec![b.clone(), a.clone()];
        fruits.sort();
        assert_eq!(fruits, vec![a, b]);
    }

    #[test]
    fn test_conversion_sugar() {
        assert!(NotBlankString::try_from("ok").is_ok());
        assert!(NotBlankString::try_from(" ").is_err());
        assert!(NotBlankString::try_from("ok".to_string()).is_ok());
        assert!("".parse::<NotBlankString>().is_err());
    }

    #[test]
    fn test_display_shows_the_raw_string() {
        let s: NotBlankString = "plain".parse().unwrap();
        assert_eq!(s.to_string(), "plain");
    }
}

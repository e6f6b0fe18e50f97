//! Codec layer for refined scalars
//!
//! Encoding writes the underlying primitive, never the wrapper, so the
//! wire format of a refined type is identical to the raw type it
//! refines. Decoding reads the primitive and re-runs the full predicate:
//! deserialization is never a backdoor around validation. A failed
//! decode surfaces the [`DecodeError`] wording rather than the
//! construction-time [`TypeError`](crate::TypeError) wording, so callers
//! can tell untrusted-data failures from call-site bugs.
//!
//! # Example
//!
//! ```rust
//! use veritype::StrictlyPositiveInt;
//!
//! let n = StrictlyPositiveInt::new(7).unwrap();
//! let encoded = serde_json::to_string(&n).unwrap();
//! assert_eq!(encoded, "7");
//!
//! let decoded: StrictlyPositiveInt = serde_json::from_str(&encoded).unwrap();
//! assert_eq!(decoded, n);
//!
//! // Re-validation on decode rejects out-of-domain primitives.
//! let result: Result<StrictlyPositiveInt, _> = serde_json::from_str("0");
//! assert!(result.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Predicate, Refined};
use crate::error::DecodeError;

impl<T, P> Serialize for Refined<T, P>
where
    T: Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de>,
    P: Predicate<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::new(value).map_err(|e| serde::de::Error::custom(DecodeError::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::{NotBlankString, PositiveInt};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Account {
        owner: NotBlankString,
        balance: PositiveInt,
    }

    #[test]
    fn test_encode_writes_the_primitive() {
        let account = Account {
            owner: NotBlankString::new("Alice".to_string()).unwrap(),
            balance: PositiveInt::new(250).unwrap(),
        };

        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"owner":"Alice","balance":250}"#);
    }

    #[test]
    fn test_decode_revalidates() {
        let json = r#"{"owner":"Alice","balance":250}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.owner.get(), "Alice");
        assert_eq!(*account.balance.get(), 250);
    }

    #[test]
    fn test_decode_rejects_blank_owner() {
        let json = r#"{"owner":"   ","balance":250}"#;
        let result: Result<Account, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unable to deserialize"));
        assert!(err.contains("blank"));
    }

    #[test]
    fn test_decode_rejects_negative_balance() {
        let json = r#"{"owner":"Alice","balance":-1}"#;
        let result: Result<Account, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unable to deserialize"));
        assert!(err.contains("positive"));
    }

    #[test]
    fn test_roundtrip() {
        let original = Account {
            owner: NotBlankString::new("Bob".to_string()).unwrap(),
            balance: PositiveInt::new(0).unwrap(),
        };

        let json = serde_json::to_string(&original).unwrap();
        let restored: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}

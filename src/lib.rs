//! # Veritype
//!
//! Explicit types for Rust: wrappers that make illegal states
//! unrepresentable by construction. An integer known to be positive or
//! a string known to be non-blank is validated exactly once, at the
//! boundary, and trusted everywhere after.
//!
//! ## Philosophy
//!
//! Parse, don't validate. Instead of re-checking the same invariants at
//! every call site, refine the raw value into a type that carries the
//! proof:
//!
//! ```rust
//! use veritype::{NotBlankString, StrictlyPositiveInt};
//!
//! fn restock(product: &NotBlankString, quantity: StrictlyPositiveInt) {
//!     // No checks needed: the types guarantee validity.
//!     println!("adding {quantity} units of {product}");
//! }
//!
//! let product: NotBlankString = "tea".parse().unwrap();
//! let quantity = StrictlyPositiveInt::new(12).unwrap();
//! restock(&product, quantity);
//! ```
//!
//! ## Construction shapes
//!
//! Every refined type offers the same three entry points:
//!
//! ```rust
//! use veritype::PositiveInt;
//!
//! // or-result: an explicit outcome, never panics.
//! assert!(PositiveInt::new(-1).is_err());
//!
//! // or-null: an optional value, never panics.
//! assert!(PositiveInt::or_none(-1).is_none());
//!
//! // or-throw: panics with the catalogue wording on invalid input.
//! let n = PositiveInt::or_panic(0);
//! assert_eq!(n.into_inner(), 0);
//! ```
//!
//! ## Serialization
//!
//! Refined types encode as their raw primitive and re-validate on
//! decode, so deserialization is never a backdoor around the gate:
//!
//! ```rust
//! use veritype::NonZeroInt;
//!
//! let n: NonZeroInt = serde_json::from_str("5").unwrap();
//! assert_eq!(serde_json::to_string(&n).unwrap(), "5");
//! assert!(serde_json::from_str::<NonZeroInt>("0").is_err());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collection;
pub mod error;
pub mod number;
pub mod range;
pub mod refined;
pub mod text;

// Re-exports
pub use collection::{NotEmptyList, NotEmptySet};
pub use error::{DecodeError, TypeError};
pub use number::{
    BoundedInt, NegativeInt, NonZeroInt, PositiveInt, StrictlyNegativeInt, StrictlyPositiveInt,
};
pub use range::{Bound, NotEmptyRange};
pub use refined::{Predicate, Refined};
pub use text::NotBlankString;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collection::{NotEmptyList, NotEmptySet};
    pub use crate::error::{DecodeError, TypeError};
    pub use crate::number::{
        BoundedInt, NegativeInt, NonZeroInt, PositiveInt, StrictlyNegativeInt,
        StrictlyPositiveInt,
    };
    pub use crate::range::{Bound, NotEmptyRange};
    pub use crate::refined::{Predicate, Refined};
    pub use crate::text::NotBlankString;
}

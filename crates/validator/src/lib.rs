//! # veritas-validator
//!
//! A declarative field-validation engine: describe which rules apply to
//! which named fields, run the schema, get back every failure tagged with
//! the field it belongs to.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let name = String::from("alice");
//! let age = 17u8;
//!
//! let schema = schema! {
//!     field("name", &name) => nonzero().and(len(1, 32)),
//!     field("age", &age) => gte(18),
//! };
//! let errors = validate(&schema).unwrap_err();
//! assert_eq!(errors.to_string(), "age: is lower than given value");
//! ```
//!
//! ## Building Blocks
//!
//! - **Leaf rules**: [`Nonzero`](validators::Nonzero), [`Len`](validators::Len),
//!   [`Compare`](validators::Compare) (`eq`, `ne`, `gt`, `gte`, `lt`, `lte`),
//!   [`Assert`](combinators::Assert), and [`from_fn`](foundation::from_fn)
//!   for anything else
//! - **Composition**: [`All`](combinators::All), [`Any`](combinators::Any),
//!   [`Lazy`](combinators::Lazy)
//! - **Structure**: [`Nested`](combinators::Nested) and
//!   [`NestedMulti`](combinators::NestedMulti) qualify inner field names as
//!   `outer.inner`
//!
//! Implement [`Validate`](foundation::Validate) directly for custom rules.
//!
//! ## Features
//!
//! - `serde` (default): `Serialize` for errors and `to_json_value()`.

// ValidationErrors is returned by value from every rule; boxing it would add
// an allocation to the success-free path for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

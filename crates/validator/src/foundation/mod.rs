//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], [`Kind`], [`AsValue`], the closed set of kinds rules dispatch on
//! - **Fields & schemas**: [`Field`], [`Schema`], and the top-level [`validate`]
//! - **Traits**: [`Validate`], [`ValidateExt`], plus the [`from_fn`] leaf adapter
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`RuleError`]
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! Every rule, leaf or composite, maps a [`Field`] to
//! `Result<(), ValidationErrors>`. Combinators only ever see that contract.
//!
//! ## 2. Closed dispatch
//!
//! A field's value is classified once, when the field is built. Generic
//! rules such as `Nonzero` and `Len` then `match` on [`Value`]; there is no
//! runtime type inspection and the unrecognized case is an ordinary arm.
//!
//! ## 3. Errors are data
//!
//! A failed rule is an `Err` carrying field-qualified records. Only broken
//! rule construction (see [`RuleError`]) aborts.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let city = String::new();
//! let errors = nonzero().validate(&field("city", &city)).unwrap_err();
//! assert_eq!(errors.to_string(), "city: is zero valued");
//! ```

pub mod error;
pub mod field;
pub mod message;
pub mod schema;
pub mod traits;
pub mod value;

pub use error::{RuleError, ValidationError, ValidationErrors};
pub use field::{Field, field};
pub use schema::{Schema, validate};
pub use traits::{FromFn, SharedValidator, Validate, ValidateExt, ValidationResult, from_fn};
pub use value::{
    AsValue, Kind, Scalar, ScalarKind, ScalarValue, Value, ZERO_INSTANT_SECS, zero_instant,
};

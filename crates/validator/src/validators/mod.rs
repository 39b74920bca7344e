//! Built-in validators
//!
//! Kind-dispatched rules: each inspects the [`Value`](crate::foundation::Value)
//! behind a field and decides, per kind, whether the rule applies at all.
//!
//! - [`Nonzero`]: the value differs from its kind's zero
//! - [`Len`]: string or sequence length within inclusive bounds
//! - [`Compare`]: `eq`, `ne`, `gt`, `gte`, `lt`, `lte` against a fixed bound
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let name = String::from("alice");
//! let age = 30u8;
//!
//! let schema = Schema::new()
//!     .field(field("name", &name), nonzero().and(len(1, 32)))
//!     .field(field("age", &age), gte(18));
//! assert!(validate(&schema).is_ok());
//! ```

pub mod length;
pub mod nonzero;
pub mod range;

pub use length::{Len, LengthMode, len};
pub use nonzero::{Nonzero, nonzero};
pub use range::{Comparable, Compare, CompareOp, eq, gt, gte, lt, lte, ne};

use crate::foundation::{Field, Kind, ValidationError, ValidationErrors};

/// Failure for a rule applied to a kind it has no meaning for.
pub(crate) fn inapplicable(field: &Field<'_>, kind: Kind, rule: &'static str) -> ValidationErrors {
    tracing::warn!(field = field.name(), %kind, rule, "validator not applicable to field kind");
    ValidationError::new(field.name_cow(), format!("cannot use validator `{rule}`"))
        .with_code("inapplicable_rule")
        .with_param("kind", kind.to_string())
        .into()
}

/// Failure for a field whose type is outside the recognized set.
pub(crate) fn unrecognized(
    field: &Field<'_>,
    type_name: &'static str,
    rule: &'static str,
    message: &'static str,
) -> ValidationErrors {
    tracing::warn!(field = field.name(), type_name, rule, "unrecognized field type");
    ValidationError::new(field.name_cow(), message)
        .with_code("unrecognized_kind")
        .with_param("type", type_name)
        .into()
}

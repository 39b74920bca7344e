//! Nested schema validators
//!
//! This module lets one schema entry stand for a whole sub-structure.
//!
//! # Validators
//!
//! - [`Nested`] - Validates an inner schema under the outer field's name
//! - [`NestedMulti`] - Validates several inner schemas, reporting all failures
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let schema = Schema::new().field(
//!     Field::opaque("address", &person.address),
//!     nested(
//!         Schema::new()
//!             .field(field("country", &person.address.country), nonzero())
//!             .field(field("city", &person.address.city), nonzero()),
//!     ),
//! );
//!
//! // Errors are reported as "address.country", "address.city".
//! let result = validate(&schema);
//! ```

use crate::foundation::{Field, Schema, Validate, ValidationErrors, ValidationResult, validate};
use std::sync::Arc;

// ============================================================================
// NESTED
// ============================================================================

/// Validates an inner schema, qualifying its field names with the outer one.
///
/// On every call a new schema is built whose fields are renamed to
/// `outer.inner` and point at the same values; it is then run through the
/// top-level [`validate`], and the result is returned unchanged. The outer
/// field's own value is never inspected.
#[derive(Debug, Clone)]
pub struct Nested<'a> {
    schema: Schema<'a>,
}

impl<'a> Nested<'a> {
    /// Creates a nested validator over `schema`.
    pub fn new(schema: Schema<'a>) -> Self {
        Self { schema }
    }

    /// Returns the inner schema.
    pub fn schema(&self) -> &Schema<'a> {
        &self.schema
    }
}

impl Validate for Nested<'_> {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        tracing::trace!(
            field = field.name(),
            entries = self.schema.len(),
            "delegating to nested schema"
        );

        let qualified: Schema<'_> = self
            .schema
            .iter()
            .map(|(inner, validator)| (inner.prefixed(field.name()), Arc::clone(validator)))
            .collect();

        validate(&qualified)
    }
}

/// Creates a [`Nested`] validator.
pub fn nested(schema: Schema<'_>) -> Nested<'_> {
    Nested::new(schema)
}

// ============================================================================
// NESTED MULTI
// ============================================================================

/// Validates the same field against several inner schemas.
///
/// The factory runs exactly once, at construction; each schema it returns
/// becomes a [`Nested`] child. Every child is evaluated on every call (no
/// short-circuit) and all errors are concatenated in child order.
#[derive(Debug, Clone)]
pub struct NestedMulti<'a> {
    children: Vec<Nested<'a>>,
}

impl<'a> NestedMulti<'a> {
    /// Creates a multi-schema validator from a schema factory.
    pub fn new<F>(factory: F) -> Self
    where
        F: FnOnce() -> Vec<Schema<'a>>,
    {
        Self {
            children: factory().into_iter().map(Nested::new).collect(),
        }
    }

    /// Returns the number of inner schemas.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the factory produced no schemas.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Validate for NestedMulti<'_> {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        let mut errors = ValidationErrors::empty();
        for child in &self.children {
            if let Err(e) = child.validate(field) {
                errors.extend(e);
            }
        }
        errors.into_result()
    }
}

/// Creates a [`NestedMulti`] validator.
pub fn nested_multi<'a, F>(factory: F) -> NestedMulti<'a>
where
    F: FnOnce() -> Vec<Schema<'a>>,
{
    NestedMulti::new(factory)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::assert::assert;
    use crate::foundation::field;
    use pretty_assertions::assert_eq;

    struct Address {
        country: String,
        city: String,
    }

    fn names(result: ValidationResult) -> Vec<String> {
        result
            .err()
            .map(|errors| errors.iter().map(|e| e.field.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn qualifies_inner_field_names() {
        let address = Address {
            country: "FR".into(),
            city: String::new(),
        };
        let v = nested(
            Schema::new()
                .field(field("country", &address.country), assert(true))
                .field(field("city", &address.city), assert(false)),
        );

        let result = v.validate(&Field::opaque("address", &address));
        assert_eq!(names(result), vec!["address.city"]);
    }

    #[test]
    fn exposes_inner_schema() {
        let city = String::from("Paris");
        let v = nested(Schema::new().field(field("city", &city), assert(true)));
        let names: Vec<_> = v.schema().iter().map(|(f, _)| f.name()).collect();
        assert_eq!(names, vec!["city"]);
    }

    #[test]
    fn collects_across_inner_fields() {
        let address = Address {
            country: String::new(),
            city: String::new(),
        };
        let v = nested(
            Schema::new()
                .field(field("country", &address.country), assert(false))
                .field(field("city", &address.city), assert(false)),
        );

        let result = v.validate(&Field::opaque("address", &address));
        assert_eq!(names(result), vec!["address.country", "address.city"]);
    }

    #[test]
    fn deeper_nesting_builds_dotted_path() {
        let zip = 0u32;
        let inner = nested(Schema::new().field(field("zip", &zip), assert(false)));
        let outer = nested(Schema::new().field(Field::opaque("address", &()), inner));

        let result = outer.validate(&Field::opaque("person", &()));
        assert_eq!(names(result), vec!["person.address.zip"]);
    }

    #[test]
    fn multi_calls_factory_once_and_collects_all() {
        let value = 1i64;
        let mut calls = 0;
        let v = nested_multi(|| {
            calls += 1;
            vec![
                Schema::new().field(field("a", &value), assert(false)),
                Schema::new().field(field("b", &value), assert(true)),
                Schema::new().field(field("c", &value), assert(false)),
            ]
        });
        assert_eq!(calls, 1);
        assert_eq!(v.len(), 3);

        let f = Field::opaque("root", &());
        assert_eq!(names(v.validate(&f)), vec!["root.a", "root.c"]);
        assert_eq!(names(v.validate(&f)), vec!["root.a", "root.c"]);
    }

    #[test]
    fn multi_with_no_schemas_passes() {
        let v = nested_multi(Vec::new);
        assert!(v.is_empty());
        assert!(v.validate(&Field::opaque("root", &())).is_ok());
    }
}

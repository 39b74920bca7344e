//! Schemas and the top-level `validate` entry point.

use super::error::ValidationErrors;
use super::field::Field;
use super::traits::{SharedValidator, Validate, ValidationResult};
use std::sync::Arc;

/// An ordered mapping from fields to the validators that check them.
///
/// Entries are kept in insertion order, so errors come back in the order
/// the schema was written. The same field may appear more than once.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::prelude::*;
///
/// let name = String::from("alice");
/// let age = 30;
///
/// let schema = Schema::new()
///     .field(field("name", &name), len(1, 5))
///     .field(field("age", &age), gte(10));
///
/// assert!(validate(&schema).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct Schema<'a> {
    entries: Vec<(Field<'a>, SharedValidator<'a>)>,
}

impl<'a> Schema<'a> {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty schema with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds an entry, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(mut self, field: Field<'a>, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'a,
    {
        self.insert(field, validator);
        self
    }

    /// Adds an entry.
    pub fn insert<V>(&mut self, field: Field<'a>, validator: V)
    where
        V: Validate + Send + Sync + 'a,
    {
        self.entries.push((field, Arc::new(validator)));
    }

    /// Adds an entry whose validator is already shared.
    pub fn insert_shared(&mut self, field: Field<'a>, validator: SharedValidator<'a>) {
        self.entries.push((field, validator));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the schema has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Field<'a>, &SharedValidator<'a>)> {
        self.entries.iter().map(|(f, v)| (f, v))
    }
}

impl<'a> FromIterator<(Field<'a>, SharedValidator<'a>)> for Schema<'a> {
    fn from_iter<I: IntoIterator<Item = (Field<'a>, SharedValidator<'a>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<(Field<'a>, SharedValidator<'a>)> for Schema<'a> {
    fn extend<I: IntoIterator<Item = (Field<'a>, SharedValidator<'a>)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl std::fmt::Debug for Schema<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(field, _)| field.name()))
            .finish()
    }
}

/// Validates every entry of `schema` and concatenates the errors.
///
/// Independent fields never short-circuit each other: a failure on one
/// entry does not stop the next from being checked.
pub fn validate(schema: &Schema<'_>) -> ValidationResult {
    tracing::trace!(entries = schema.len(), "validating schema");

    let mut errors = ValidationErrors::empty();
    for (field, validator) in schema.iter() {
        if let Err(e) = validator.validate(field) {
            tracing::debug!(field = field.name(), errors = e.len(), "field failed validation");
            errors.extend(e);
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::field::field;
    use crate::foundation::traits::{ValidateExt, from_fn};
    use pretty_assertions::assert_eq;

    fn reject(message: &'static str) -> impl Validate + Send + Sync {
        from_fn(move |f| Err(ValidationErrors::new(f.name_cow(), message)))
    }

    fn accept() -> impl Validate + Send + Sync {
        from_fn(|_| Ok(()))
    }

    #[test]
    fn empty_schema_is_valid() {
        assert!(validate(&Schema::new()).is_ok());
    }

    #[test]
    fn collects_every_failing_entry_in_order() {
        let (a, b, c) = (1, 2, 3);
        let schema = Schema::new()
            .field(field("a", &a), reject("first"))
            .field(field("b", &b), accept())
            .field(field("c", &c), reject("third"));

        let errors = validate(&schema).unwrap_err();
        let rendered: Vec<_> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["a: first", "c: third"]);
    }

    #[test]
    fn shared_validator_in_several_entries() {
        let (a, b) = (1u8, 2u8);
        let shared = reject("no").shared();
        let mut schema = Schema::new();
        schema.insert_shared(field("a", &a), Arc::clone(&shared));
        schema.insert_shared(field("b", &b), shared);

        let errors = validate(&schema).unwrap_err();
        let rendered: Vec<_> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["a: no", "b: no"]);
    }

    #[test]
    fn empty_error_adds_nothing() {
        struct EmptyErr;

        impl Validate for EmptyErr {
            fn validate(&self, _field: &Field<'_>) -> ValidationResult {
                Err(ValidationErrors::empty())
            }
        }

        let (a, b) = (1, 2);
        let schema = Schema::new()
            .field(field("a", &a), EmptyErr)
            .field(field("b", &b), accept());
        assert_eq!(validate(&schema), Ok(()));
    }

    #[test]
    fn duplicate_names_are_kept() {
        let x = 0u8;
        let mut schema = Schema::with_capacity(2);
        schema.insert(field("x", &x), reject("one"));
        schema.insert(field("x", &x), reject("two"));
        assert_eq!(schema.len(), 2);
        assert_eq!(validate(&schema).unwrap_err().len(), 2);
    }
}

//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Any`] combinator (alias [`Or`]): the first
//! passing child wins; if none pass, every child's errors are reported.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let code = String::from("ab");
//! let validator = any![len(3, 3), len(5, 5)];
//! let errors = validator.validate(&field("code", &code)).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use crate::foundation::{Field, SharedValidator, Validate, ValidationErrors, ValidationResult};

/// Combines validators with logical OR.
///
/// Children run in order until one passes. If all fail, the result is the
/// concatenation of every child's errors in evaluation order.
///
/// An empty `Any` succeeds: nothing passed, but nothing failed either.
#[derive(Clone, Default)]
pub struct Any<'a> {
    validators: Vec<SharedValidator<'a>>,
}

/// Alias for [`Any`].
pub type Or<'a> = Any<'a>;

impl<'a> Any<'a> {
    /// Creates a new `Any` combinator over `validators`, in order.
    pub fn new(validators: Vec<SharedValidator<'a>>) -> Self {
        Self { validators }
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Appends another alternative, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn or<V>(mut self, other: V) -> Self
    where
        V: Validate + Send + Sync + 'a,
    {
        self.validators.push(std::sync::Arc::new(other));
        self
    }
}

impl Validate for Any<'_> {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        let mut errors = ValidationErrors::empty();

        for validator in &self.validators {
            match validator.validate(field) {
                Err(e) if !e.is_empty() => errors.extend(e),
                _ => return Ok(()),
            }
        }

        errors.into_result()
    }
}

impl std::fmt::Debug for Any<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Any")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Creates an [`Any`] combinator from shared validators.
///
/// See also the [`any!`](crate::any) macro, which accepts concrete rules.
pub fn any<'a>(validators: impl IntoIterator<Item = SharedValidator<'a>>) -> Any<'a> {
    Any::new(validators.into_iter().collect())
}

/// Alias for [`any`].
pub fn or<'a>(validators: impl IntoIterator<Item = SharedValidator<'a>>) -> Any<'a> {
    any(validators)
}

//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`All`] combinator (alias [`And`]): every child
//! must pass, and the first failure is returned as-is.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let name = String::from("toolongname");
//! let validator = all![nonzero(), len(1, 5)];
//! let errors = validator.validate(&field("name", &name)).unwrap_err();
//! assert_eq!(errors.to_string(), "name: with an invalid length");
//! ```

use crate::foundation::{Field, SharedValidator, Validate, ValidationResult};

/// Combines validators with logical AND.
///
/// Children run in order. On the first failing child its errors are
/// returned immediately and the remaining children are never invoked.
/// An empty `All` always succeeds.
#[derive(Clone, Default)]
pub struct All<'a> {
    validators: Vec<SharedValidator<'a>>,
}

/// Alias for [`All`].
pub type And<'a> = All<'a>;

impl<'a> All<'a> {
    /// Creates a new `All` combinator over `validators`, in order.
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

    /// Appends another child, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn and<V>(mut self, other: V) -> Self
    where
        V: Validate + Send + Sync + 'a,
    {
        self.validators.push(std::sync::Arc::new(other));
        self
    }
}

impl Validate for All<'_> {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        for validator in &self.validators {
            if let Err(errors) = validator.validate(field)
                && !errors.is_empty()
            {
                return Err(errors);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for All<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("All")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Creates an [`All`] combinator from shared validators.
///
/// See also the [`all!`](crate::all) macro, which accepts concrete rules.
pub fn all<'a>(validators: impl IntoIterator<Item = SharedValidator<'a>>) -> All<'a> {
    All::new(validators.into_iter().collect())
}

/// Alias for [`all`].
pub fn and<'a>(validators: impl IntoIterator<Item = SharedValidator<'a>>) -> All<'a> {
    all(validators)
}

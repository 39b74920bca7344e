//! Core traits for the validation system
//!
//! Every rule, leaf or composite, implements [`Validate`]. Combinators hold
//! their children as [`SharedValidator`]s so one rule instance can sit in
//! several schemas at once.

use super::error::ValidationErrors;
use super::field::Field;
use crate::combinators::{All, Any};
use std::sync::Arc;

/// Outcome of a single validation: `Ok(())` or at least one error.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A reference-counted, thread-safe validator.
pub type SharedValidator<'a> = Arc<dyn Validate + Send + Sync + 'a>;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract all validators implement.
///
/// Given a field, report whether its value satisfies the rule. Validators are
/// immutable after construction: calling `validate` twice on the same field
/// yields the same result, and the inspected value is never modified.
///
/// An `Err` should carry at least one record. Combinators and [`validate`]
/// treat an empty `Err` as success.
///
/// [`validate`]: super::validate
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::foundation::{Field, Validate, ValidationErrors, ValidationResult};
///
/// struct NotAdmin;
///
/// impl Validate for NotAdmin {
///     fn validate(&self, field: &Field<'_>) -> ValidationResult {
///         match field.value() {
///             Value::Scalar(Scalar::Str("admin")) => {
///                 Err(ValidationErrors::new(field.name_cow(), "is reserved"))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// Validates the value behind `field`.
    fn validate(&self, field: &Field<'_>) -> ValidationResult;
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        (**self).validate(field)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        (**self).validate(field)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        (**self).validate(field)
    }
}

// ============================================================================
// FUNCTION ADAPTER
// ============================================================================

/// A leaf validator made from a plain function.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F> Validate for FromFn<F>
where
    F: Fn(&Field<'_>) -> ValidationResult,
{
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        match (self.f)(field) {
            Err(errors) => errors.into_result(),
            Ok(()) => Ok(()),
        }
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Wraps a function as a leaf validator.
///
/// An empty `Err` from the function is reported as `Ok(())`.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::prelude::*;
///
/// let even = from_fn(|field| match field.value() {
///     Value::Scalar(Scalar::I32(n)) if n % 2 == 0 => Ok(()),
///     _ => Err(ValidationErrors::new(field.name_cow(), "is not even")),
/// });
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&Field<'_>) -> ValidationResult,
{
    FromFn { f }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every thread-safe [`Validate`] type.
pub trait ValidateExt: Validate + Send + Sync + Sized {
    /// Erases the concrete type into a [`SharedValidator`].
    fn shared<'a>(self) -> SharedValidator<'a>
    where
        Self: 'a,
    {
        Arc::new(self)
    }

    /// Conjunction of `self` then `other`; stops at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let username = nonzero().and(len(3, 20));
    /// ```
    fn and<'a, V>(self, other: V) -> All<'a>
    where
        Self: 'a,
        V: Validate + Send + Sync + 'a,
    {
        All::new(vec![self.shared(), Arc::new(other)])
    }

    /// Disjunction of `self` then `other`; stops at the first success.
    fn or<'a, V>(self, other: V) -> Any<'a>
    where
        Self: 'a,
        V: Validate + Send + Sync + 'a,
    {
        Any::new(vec![self.shared(), Arc::new(other)])
    }
}

impl<T: Validate + Send + Sync> ValidateExt for T {}

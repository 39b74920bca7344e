//! Error types for validation failures
//!
//! Two classes of error live here:
//!
//! - [`ValidationError`] / [`ValidationErrors`]: the expected outcome of a
//!   rule that did not hold. Returned through `Result`, never panicked.
//! - [`RuleError`]: a rule was constructed with arguments that make no sense
//!   (too many messages, inverted bounds). Plain constructors abort with it,
//!   `checked` constructors hand it back.
//!
//! All string fields use `Cow<'static, str>` so the built-in codes and
//! default messages never allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed rule, attached to the field it was checked against.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("address.city", "is zero valued").with_code("nonzero");
/// assert_eq!(error.to_string(), "address.city: is zero valued");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// Fully qualified field name, dotted for nested schemas.
    pub field: Cow<'static, str>,

    /// Machine-readable rule code, e.g. `"nonzero"`, `"len"`.
    pub code: Cow<'static, str>,

    /// Human-readable reason, written to follow the field name.
    pub message: Cow<'static, str>,

    /// Rule parameters (typically 0-3), e.g. `[("min", "1"), ("max", "5")]`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "SmallVec::is_empty"))]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>,
}

impl ValidationError {
    /// Code used when no rule-specific code was attached.
    pub const DEFAULT_CODE: &'static str = "invalid";

    /// Creates an error for `field` with the given message.
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            code: Cow::Borrowed(Self::DEFAULT_CODE),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Sets the rule code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "field": self.field,
            "code": self.code,
            "message": self.message,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered, append-only collection of [`ValidationError`]s.
///
/// Validators return `Result<(), ValidationErrors>`: `Ok(())` is the "no
/// errors" state, and an `Err` always holds at least one record. An empty
/// collection only exists transiently while a combinator is accumulating;
/// [`into_result`](Self::into_result) turns it back into `Ok(())`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a collection holding one error for `field`.
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::from(ValidationError::new(field, message))
    }

    /// Creates an empty accumulator.
    #[must_use]
    pub fn empty() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends a single error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error of `other`, keeping order.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns the errors reported for `field`.
    pub fn for_field<'s>(&'s self, field: &'s str) -> impl Iterator<Item = &'s ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Consumes the collection into its errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Converts the collection to a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.errors
                .iter()
                .map(ValidationError::to_json_value)
                .collect(),
        )
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// RULE CONSTRUCTION ERROR
// ============================================================================

/// A rule was built with arguments it cannot work with.
///
/// This is a programming mistake, not a data failure: it never appears
/// inside [`ValidationErrors`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// More than one custom message was supplied.
    #[error("`{rule}` only accepts at most one message, got {count}")]
    TooManyMessages { rule: &'static str, count: usize },

    /// A range rule whose lower bound exceeds its upper bound.
    #[error("`{rule}` has inverted bounds: min {min} > max {max}")]
    InvertedBounds {
        rule: &'static str,
        min: usize,
        max: usize,
    },
}

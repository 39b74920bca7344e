//! Length validator
//!
//! [`Len`] checks that a string or a sequence has an element count within
//! inclusive bounds. Strings are measured in bytes by default; use
//! [`Len::chars`] to count Unicode scalar values instead.

use std::borrow::Cow;

use super::{inapplicable, unrecognized};
use crate::foundation::{
    Field, RuleError, Scalar, Validate, ValidationError, ValidationResult, Value, message,
};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// LEN
// ============================================================================

/// Validates that a string or sequence length is within `[min, max]`.
///
/// | Kind                                    | Outcome                                |
/// |-----------------------------------------|----------------------------------------|
/// | string                                  | length checked                         |
/// | sequence of any scalar                  | length checked                         |
/// | other scalar, any optional, date-time   | fails: "cannot use validator `Len`"    |
/// | unrecognized                            | fails: "of an unrecognized type"       |
///
/// Both fixed messages win over a custom message.
///
/// `min > max` is accepted by [`Len::new`] and yields a rule no value can
/// satisfy; [`Len::checked`] rejects it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Len {
    min: usize,
    max: usize,
    mode: LengthMode,
    message: Cow<'static, str>,
}

impl Len {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "with an invalid length";

    /// Message used for values outside the recognized kinds.
    pub const UNRECOGNIZED_MESSAGE: &'static str = "of an unrecognized type";

    /// Creates a `Len` with at most one custom message.
    ///
    /// # Panics
    ///
    /// Panics if more than one message is given.
    #[track_caller]
    pub fn new(min: usize, max: usize, messages: &[&str]) -> Self {
        if min > max {
            tracing::warn!(min, max, "`Len` built with inverted bounds; it will reject every value");
        }
        Self {
            min,
            max,
            mode: LengthMode::Bytes,
            message: message::select("Len", Self::DEFAULT_MESSAGE, messages),
        }
    }

    /// Creates a `Len`, rejecting inverted bounds and extra messages.
    pub fn checked(min: usize, max: usize, messages: &[&str]) -> Result<Self, RuleError> {
        if min > max {
            return Err(RuleError::InvertedBounds {
                rule: "Len",
                min,
                max,
            });
        }
        Ok(Self {
            min,
            max,
            mode: LengthMode::Bytes,
            message: message::try_select("Len", Self::DEFAULT_MESSAGE, messages)?,
        })
    }

    /// Counts string length in Unicode scalar values.
    #[must_use = "builder methods must be chained or built"]
    pub fn chars(mut self) -> Self {
        self.mode = LengthMode::Chars;
        self
    }

    /// Returns the inclusive bounds.
    pub fn bounds(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    /// Returns how strings are measured.
    pub fn mode(&self) -> LengthMode {
        self.mode
    }

    fn check(&self, field: &Field<'_>, len: usize) -> ValidationResult {
        if len >= self.min && len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(field.name_cow(), self.message.clone())
                .with_code("len")
                .with_param("min", self.min.to_string())
                .with_param("max", self.max.to_string())
                .with_param("actual", len.to_string())
                .into())
        }
    }
}

impl Validate for Len {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        match field.value() {
            Value::Scalar(Scalar::Str(s)) => self.check(field, self.mode.measure(s)),
            Value::Sequence { len, .. } => self.check(field, len),
            value @ (Value::Scalar(_) | Value::Optional { .. }) => {
                Err(inapplicable(field, value.kind(), "Len"))
            }
            Value::Unrecognized { type_name } => {
                Err(unrecognized(field, type_name, "Len", Self::UNRECOGNIZED_MESSAGE))
            }
        }
    }
}

/// Creates a `Len` with the default message.
pub fn len(min: usize, max: usize) -> Len {
    Len::new(min, max, &[])
}

// ============================================================================
// TESTS
// ============================================================================

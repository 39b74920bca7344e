//! ASSERT combinator - a fixed outcome decided at construction
//!
//! The condition is evaluated by the caller when the schema is built, so
//! `Assert` is how cross-field facts ("end is after start") enter a schema
//! without the core knowing about other fields.

use std::borrow::Cow;

use crate::foundation::{Field, Validate, ValidationError, ValidationResult, message};

/// Always passes or always fails, regardless of the field's value.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::prelude::*;
///
/// let schema = Schema::new()
///     .field(field("end", &end), assert_that!(end > start, "must be after start"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assert {
    holds: bool,
    message: Cow<'static, str>,
}

impl Assert {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "is invalid";

    /// Creates an `Assert` from a condition and at most one custom message.
    ///
    /// # Panics
    ///
    /// Panics if more than one message is given.
    #[track_caller]
    pub fn new(holds: bool, messages: &[&str]) -> Self {
        Self {
            holds,
            message: message::select("Assert", Self::DEFAULT_MESSAGE, messages),
        }
    }

    /// Returns whether the condition held at construction.
    pub fn holds(&self) -> bool {
        self.holds
    }
}

impl Validate for Assert {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        if self.holds {
            Ok(())
        } else {
            Err(ValidationError::new(field.name_cow(), self.message.clone())
                .with_code("assert")
                .into())
        }
    }
}

/// Creates an `Assert` with the default message.
pub fn assert(holds: bool) -> Assert {
    Assert::new(holds, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::field;
    use pretty_assertions::assert_eq;

    #[test]
    fn true_always_passes() {
        let v = assert(true);
        for _ in 0..3 {
            assert!(v.validate(&field("anything", "value")).is_ok());
        }
    }

    #[test]
    fn false_always_fails_with_default_message() {
        let v = assert(false);
        for name in ["a", "b"] {
            let errors = v.validate(&field(name, &0)).unwrap_err();
            assert_eq!(errors.errors()[0].field, name);
            assert_eq!(errors.errors()[0].message, "is invalid");
            assert_eq!(errors.errors()[0].code, "assert");
        }
    }

    #[test]
    fn custom_message() {
        let v = Assert::new(false, &["must be after start"]);
        let errors = v.validate(&field("end", &0)).unwrap_err();
        assert_eq!(errors.to_string(), "end: must be after start");
    }

    #[test]
    #[should_panic(expected = "`Assert` only accepts at most one message")]
    fn two_messages_abort() {
        let _ = Assert::new(false, &["a", "b"]);
    }
}

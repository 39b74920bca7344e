//! Nonzero: the value differs from its kind's zero.

use std::borrow::Cow;

use super::unrecognized;
use crate::foundation::{Field, Validate, ValidationError, ValidationResult, Value, message};

/// Validates that a field is not zero valued.
///
/// | Kind                  | Passes when                                    |
/// |-----------------------|------------------------------------------------|
/// | scalar                | not `0`, `false`, `""`, or the zero instant    |
/// | optional scalar       | present, whatever the contained value          |
/// | sequence              | non-empty                                      |
/// | unrecognized          | never; fails with "of unrecognized type"       |
///
/// The unrecognized-kind message is fixed and takes precedence over any
/// custom message: it reports a misuse, not bad data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonzero {
    message: Cow<'static, str>,
}

impl Nonzero {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "is zero valued";

    /// Message used for values outside the recognized kinds.
    pub const UNRECOGNIZED_MESSAGE: &'static str = "of unrecognized type";

    /// Creates a `Nonzero` with at most one custom message.
    ///
    /// # Panics
    ///
    /// Panics if more than one message is given.
    #[track_caller]
    pub fn new(messages: &[&str]) -> Self {
        Self {
            message: message::select("Nonzero", Self::DEFAULT_MESSAGE, messages),
        }
    }

    /// Returns the message reported for zero values.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Nonzero {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl Validate for Nonzero {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        let valid = match field.value() {
            Value::Scalar(scalar) => !scalar.is_zero(),
            Value::Optional { value, .. } => value.is_some(),
            Value::Sequence { len, .. } => len != 0,
            Value::Unrecognized { type_name } => {
                return Err(unrecognized(field, type_name, "Nonzero", Self::UNRECOGNIZED_MESSAGE));
            }
        };

        if valid {
            Ok(())
        } else {
            Err(ValidationError::new(field.name_cow(), self.message.clone())
                .with_code("nonzero")
                .into())
        }
    }
}

/// Creates a `Nonzero` with the default message.
pub fn nonzero() -> Nonzero {
    Nonzero::default()
}

//! Field references: a name plus the value it points at.

use super::value::{AsValue, Value};
use std::borrow::Cow;

/// A named reference to the value being validated.
///
/// The field borrows its value for `'a` and never copies it; rules read the
/// borrowed [`Value`] and must not outlive the call.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    name: Cow<'static, str>,
    value: Value<'a>,
}

impl<'a> Field<'a> {
    /// Creates a field for any recognized value.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use veritas_validator::foundation::Field;
    ///
    /// let name = String::from("alice");
    /// let field = Field::new("name", &name);
    /// ```
    pub fn new<T>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self
    where
        T: AsValue + ?Sized,
    {
        Self {
            name: name.into(),
            value: value.as_value(),
        }
    }

    /// Creates a field for a value of any type outside the recognized set.
    ///
    /// Typically used for struct-valued fields validated through
    /// [`nested`](crate::combinators::nested). Kind-dispatched rules fail on
    /// such a field with an "unrecognized type" error.
    pub fn opaque<T: ?Sized>(name: impl Into<Cow<'static, str>>, _value: &'a T) -> Self {
        Self {
            name: name.into(),
            value: Value::Unrecognized {
                type_name: std::any::type_name::<T>(),
            },
        }
    }

    /// Creates a field from an already classified value.
    pub fn from_value(name: impl Into<Cow<'static, str>>, value: Value<'a>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field name as an owned-or-static string.
    pub fn name_cow(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    /// Returns the classified value.
    pub fn value(&self) -> Value<'a> {
        self.value
    }

    /// Returns a copy of this field renamed to `prefix.name`.
    pub fn prefixed(&self, prefix: &str) -> Field<'a> {
        Field {
            name: Cow::Owned(format!("{prefix}.{}", self.name)),
            value: self.value,
        }
    }
}

/// Shorthand for [`Field::new`].
pub fn field<'a, T>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Field<'a>
where
    T: AsValue + ?Sized,
{
    Field::new(name, value)
}

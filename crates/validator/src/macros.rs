//! Macros for building rules and schemas with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`all!`] / [`any!`]: conjunction / disjunction over concrete rules
//! - [`nonzero!`], [`len!`], [`assert_that!`]: leaf rules with an optional message
//! - [`schema!`]: an ordered list of `field => rule` entries
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let schema = schema! {
//!     field("name", &name) => all![nonzero!("is required"), len!(1, 32)],
//!     field("role", &role) => any![eq(1), eq(2)],
//!     field("end", &end) => assert_that!(end > start, "must be after start"),
//! };
//! validate(&schema)?;
//! ```

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Composes rules with AND logic into an [`All`](crate::combinators::All).
///
/// ```rust,ignore
/// let v = all![nonzero(), len(1, 5)];
/// ```
#[macro_export]
macro_rules! all {
    ($($validator:expr),* $(,)?) => {
        $crate::combinators::All::new(::std::vec![
            $($crate::foundation::ValidateExt::shared($validator)),*
        ])
    };
}

/// Composes rules with OR logic into an [`Any`](crate::combinators::Any).
///
/// ```rust,ignore
/// let v = any![len(2, 2), len(5, 5)];
/// ```
#[macro_export]
macro_rules! any {
    ($($validator:expr),* $(,)?) => {
        $crate::combinators::Any::new(::std::vec![
            $($crate::foundation::ValidateExt::shared($validator)),*
        ])
    };
}

// ============================================================================
// LEAF RULE MACROS
// ============================================================================

/// Builds a [`Nonzero`](crate::validators::Nonzero), optionally with a message.
///
/// A message is anything that is `AsRef<str>`, so `format!` output works.
/// Passing more than one message panics at construction.
#[macro_export]
macro_rules! nonzero {
    ($($message:expr),* $(,)?) => {
        $crate::validators::Nonzero::new(
            &[$(::core::convert::AsRef::<str>::as_ref(&$message)),*],
        )
    };
}

/// Builds a [`Len`](crate::validators::Len), optionally with a message.
#[macro_export]
macro_rules! len {
    ($min:expr, $max:expr $(, $message:expr)* $(,)?) => {
        $crate::validators::Len::new(
            $min,
            $max,
            &[$(::core::convert::AsRef::<str>::as_ref(&$message)),*],
        )
    };
}

/// Builds an [`Assert`](crate::combinators::Assert) from a condition
/// evaluated right here, optionally with a message.
#[macro_export]
macro_rules! assert_that {
    ($holds:expr $(, $message:expr)* $(,)?) => {
        $crate::combinators::Assert::new(
            $holds,
            &[$(::core::convert::AsRef::<str>::as_ref(&$message)),*],
        )
    };
}

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Builds a [`Schema`](crate::foundation::Schema) from `field => rule` pairs,
/// keeping their order.
#[macro_export]
macro_rules! schema {
    ($($field:expr => $validator:expr),* $(,)?) => {
        $crate::foundation::Schema::new()$(.field($field, $validator))*
    };
}

// ============================================================================
// TESTS
// ============================================================================

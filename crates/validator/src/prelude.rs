//! Prelude module for convenient imports.
//!
//! Provides a single `use veritas_validator::prelude::*;` import that brings
//! in the traits, types, rules, combinators and macros needed to describe
//! and run a schema.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritas_validator::prelude::*;
//!
//! let schema = Schema::new()
//!     .field(field("name", &name), nonzero().and(len(1, 32)))
//!     .field(field("age", &age), gte(18));
//! validate(&schema)?;
//! ```

// ============================================================================
// FOUNDATION: Traits, values, fields, schemas, errors
// ============================================================================

pub use crate::foundation::{
    AsValue, Field, FromFn, Kind, RuleError, Scalar, ScalarKind, ScalarValue, Schema,
    SharedValidator, Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult,
    Value, field, from_fn, validate, zero_instant,
};

// ============================================================================
// VALIDATORS: Built-in rules
// ============================================================================

pub use crate::validators::{
    Compare, CompareOp, Len, LengthMode, Nonzero, eq, gt, gte, len, lt, lte, ne, nonzero,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    All, And, Any, Assert, Lazy, Nested, NestedMulti, Or, all, any, assert, lazy, nested,
    nested_multi,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all, any, assert_that, len, nonzero, schema};

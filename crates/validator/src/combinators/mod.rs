//! Combinators that build validators out of other validators.
//!
//! | Combinator            | Evaluates                  | On failure                      |
//! |-----------------------|----------------------------|---------------------------------|
//! | [`All`] / [`And`]     | in order, stops at 1st err | that child's errors             |
//! | [`Any`] / [`Or`]      | in order, stops at 1st ok  | every child's errors, in order  |
//! | [`Assert`]            | nothing                    | fixed error                     |
//! | [`Lazy`]              | a fresh validator per call | whatever it returns             |
//! | [`Nested`]            | every inner entry          | all inner errors, dotted names  |
//! | [`NestedMulti`]       | every inner schema         | all errors of all schemas       |

pub mod and;
pub mod assert;
pub mod lazy;
pub mod nested;
pub mod or;

pub use and::{All, And, all, and};
pub use assert::{Assert, assert};
pub use lazy::{Lazy, lazy};
pub use nested::{Nested, NestedMulti, nested, nested_multi};
pub use or::{Any, Or, any, or};

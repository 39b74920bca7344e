//! Comparison validators: `eq`, `ne`, `gt`, `gte`, `lt`, `lte`.
//!
//! Numbers of any width compare exactly against numbers of any width:
//! integers through `i128`, floats as `f64`, and an integer against a float
//! without rounding either side. Date-times compare against date-times.
//! Strings, booleans, optionals and sequences are not comparable and fail
//! with "cannot use validator `<Name>`".

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

use super::{inapplicable, unrecognized};
use crate::foundation::{
    Field, Scalar, ScalarValue, Validate, ValidationError, ValidationResult, Value, message,
};

// ============================================================================
// COMPARABLE
// ============================================================================

/// A scalar reduced to something orderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparable {
    Int(i128),
    Float(f64),
    Instant(DateTime<Utc>),
}

impl Comparable {
    /// Reduces a scalar, or `None` for strings and booleans.
    pub fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        Some(match scalar {
            Scalar::U8(v) => Self::Int(v.into()),
            Scalar::U16(v) => Self::Int(v.into()),
            Scalar::U32(v) => Self::Int(v.into()),
            Scalar::U64(v) => Self::Int(v.into()),
            Scalar::Usize(v) => Self::Int(v as i128),
            Scalar::I8(v) => Self::Int(v.into()),
            Scalar::I16(v) => Self::Int(v.into()),
            Scalar::I32(v) => Self::Int(v.into()),
            Scalar::I64(v) => Self::Int(v.into()),
            Scalar::Isize(v) => Self::Int(v as i128),
            Scalar::F32(v) => Self::Float(v.into()),
            Scalar::F64(v) => Self::Float(v),
            Scalar::DateTime(v) => Self::Instant(v),
            Scalar::Bool(_) | Scalar::Str(_) => return None,
        })
    }

    /// Orders two comparables; `None` across numbers and instants, or NaN.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Float(b)) => int_float_cmp(*a, *b),
            (Self::Float(a), Self::Int(b)) => int_float_cmp(*b, *a).map(Ordering::reverse),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Instant(a), Self::Instant(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Exact ordering of an integer against a float; `None` only for NaN.
fn int_float_cmp(int: i128, float: f64) -> Option<Ordering> {
    // 2^127, exactly representable; every `i128` is below it.
    const I128_END: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

    if float.is_nan() {
        return None;
    }
    let floor = float.floor();
    if floor >= I128_END {
        return Some(Ordering::Less);
    }
    if floor < -I128_END {
        return Some(Ordering::Greater);
    }
    // In range and integral, so the cast is exact.
    #[allow(clippy::cast_possible_truncation)]
    let floor_int = floor as i128;
    Some(match int.cmp(&floor_int) {
        Ordering::Equal if floor < float => Ordering::Less,
        ordering => ordering,
    })
}

impl fmt::Display for Comparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Instant(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

// ============================================================================
// OPERATOR
// ============================================================================

/// The relation a [`Compare`] checks, value on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    /// Rule name as it appears in diagnostics.
    pub fn rule_name(self) -> &'static str {
        match self {
            Self::Eq => "Eq",
            Self::Ne => "Ne",
            Self::Gt => "Gt",
            Self::Gte => "Gte",
            Self::Lt => "Lt",
            Self::Lte => "Lte",
        }
    }

    /// Error code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }

    /// Default failure message.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Eq => "does not equal the given value",
            Self::Ne => "equals the given value",
            Self::Gt => "is lower than or equal to given value",
            Self::Gte => "is lower than given value",
            Self::Lt => "is greater than or equal to given value",
            Self::Lte => "is greater than given value",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => ordering.is_eq(),
            Self::Ne => ordering.is_ne(),
            Self::Gt => ordering.is_gt(),
            Self::Gte => ordering.is_ge(),
            Self::Lt => ordering.is_lt(),
            Self::Lte => ordering.is_le(),
        }
    }
}

// ============================================================================
// COMPARE
// ============================================================================

/// Compares a field's value against a fixed bound.
///
/// A bound that is itself not comparable (a string, a boolean) makes the
/// rule inapplicable to every field, reported at validation time like any
/// other kind mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    op: CompareOp,
    bound: Option<Comparable>,
    message: Cow<'static, str>,
}

impl Compare {
    /// Creates a comparison with at most one custom message.
    ///
    /// # Panics
    ///
    /// Panics if more than one message is given.
    #[track_caller]
    pub fn new<T: ScalarValue>(op: CompareOp, bound: T, messages: &[&str]) -> Self {
        let bound = Comparable::from_scalar(bound.as_scalar());
        if bound.is_none() {
            tracing::warn!(rule = op.rule_name(), "comparison bound is not orderable");
        }
        Self {
            op,
            bound,
            message: message::select(op.rule_name(), op.default_message(), messages),
        }
    }

    /// Returns the operator.
    pub fn op(&self) -> CompareOp {
        self.op
    }
}

impl Validate for Compare {
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        let rule = self.op.rule_name();
        let value = match field.value() {
            Value::Unrecognized { type_name } => {
                return Err(unrecognized(field, type_name, rule, "of an unrecognized type"));
            }
            Value::Scalar(scalar) => Comparable::from_scalar(scalar),
            Value::Optional { .. } | Value::Sequence { .. } => None,
        };

        let ordering = match (value, self.bound) {
            (Some(value), Some(bound)) => value.compare(&bound).map(|o| (o, bound)),
            _ => None,
        };

        let Some((ordering, bound)) = ordering else {
            return Err(inapplicable(field, field.value().kind(), rule));
        };

        if self.op.holds(ordering) {
            Ok(())
        } else {
            Err(ValidationError::new(field.name_cow(), self.message.clone())
                .with_code(self.op.code())
                .with_param("bound", bound.to_string())
                .into())
        }
    }
}

/// Value must equal `bound`.
pub fn eq<T: ScalarValue>(bound: T) -> Compare {
    Compare::new(CompareOp::Eq, bound, &[])
}

/// Value must differ from `bound`.
pub fn ne<T: ScalarValue>(bound: T) -> Compare {
    Compare::new(CompareOp::Ne, bound, &[])
}

/// Value must be greater than `bound`.
pub fn gt<T: ScalarValue>(bound: T) -> Compare {
    Compare::new(CompareOp::Gt, bound, &[])
}

/// Value must be greater than or equal to `bound`.
pub fn gte<T: ScalarValue>(bound: T) -> Compare {
    Compare::new(CompareOp::Gte, bound, &[])
}

/// Value must be less than `bound`.
pub fn lt<T: ScalarValue>(bound: T) -> Compare {
    Compare::new(CompareOp::Lt, bound, &[])
}

/// Value must be less than or equal to `bound`.
pub fn lte<T: ScalarValue>(bound: T) -> Compare {
    Compare::new(CompareOp::Lte, bound, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::field;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(gte(10), 10, true)]
    #[case(gte(10), 9, false)]
    #[case(gt(10), 10, false)]
    #[case(gt(10), 11, true)]
    #[case(lte(10), 10, true)]
    #[case(lt(10), 10, false)]
    #[case(eq(10), 10, true)]
    #[case(ne(10), 10, false)]
    fn integers(#[case] v: Compare, #[case] n: i32, #[case] valid: bool) {
        assert_eq!(v.validate(&field("n", &n)).is_ok(), valid);
    }

    #[test]
    fn mixed_widths_compare_exactly() {
        assert!(gte(10u8).validate(&field("n", &u64::MAX)).is_ok());
        assert!(lt(0i64).validate(&field("n", &-1i8)).is_ok());
        assert!(gte(2.5f64).validate(&field("n", &3u16)).is_ok());
        assert!(lt(2.5f32).validate(&field("n", &3usize)).is_err());
        assert!(eq(3.0f64).validate(&field("n", &3i8)).is_ok());
        assert!(gt(-0.5f64).validate(&field("n", &0u8)).is_ok());
        assert!(lt(-0.5f64).validate(&field("n", &-1i64)).is_ok());
    }

    #[test]
    fn integers_against_floats_do_not_round() {
        let two_53 = (1u64 << 53) as f64;
        assert!(gt(two_53).validate(&field("n", &((1u64 << 53) + 1))).is_ok());
        assert!(eq(two_53).validate(&field("n", &((1u64 << 53) + 1))).is_err());
        assert!(eq(two_53).validate(&field("n", &(1u64 << 53))).is_ok());

        let two_63 = 9_223_372_036_854_775_808.0f64;
        assert!(eq(two_63).validate(&field("n", &i64::MAX)).is_err());
        assert!(lt(two_63).validate(&field("n", &i64::MAX)).is_ok());
        assert!(gte(-two_63).validate(&field("n", &i64::MIN)).is_ok());
        assert!(eq(two_63).validate(&field("n", &(1u64 << 63))).is_ok());

        assert!(lt(f64::INFINITY).validate(&field("n", &u64::MAX)).is_ok());
        assert!(gt(f64::NEG_INFINITY).validate(&field("n", &i64::MIN)).is_ok());
        assert!(lt(1e300f64).validate(&field("n", &u64::MAX)).is_ok());
    }

    #[test]
    fn float_field_against_integer_bound() {
        let big = 9_223_372_036_854_775_808.0f64;
        assert!(gt(i64::MAX).validate(&field("x", &big)).is_ok());
        assert!(lte(3).validate(&field("x", &2.999f64)).is_ok());
        assert!(lte(3).validate(&field("x", &3.001f64)).is_err());
    }

    #[test]
    fn date_times() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert!(gt(start).validate(&field("at", &later)).is_ok());
        assert!(lt(start).validate(&field("at", &later)).is_err());
    }

    #[rstest]
    #[case(eq(1), CompareOp::Eq, "eq")]
    #[case(ne(1), CompareOp::Ne, "ne")]
    #[case(gt(1), CompareOp::Gt, "gt")]
    #[case(gte(1), CompareOp::Gte, "gte")]
    #[case(lt(1), CompareOp::Lt, "lt")]
    #[case(lte(1), CompareOp::Lte, "lte")]
    fn constructors_pick_operator(#[case] v: Compare, #[case] op: CompareOp, #[case] code: &str) {
        assert_eq!(v.op(), op);
        assert_eq!(op.code(), code);
    }

    #[test]
    fn failure_message_and_params() {
        let errors = gte(10).validate(&field("age", &3)).unwrap_err();
        assert_eq!(errors.to_string(), "age: is lower than given value");
        assert_eq!(errors.errors()[0].code, "gte");
        assert_eq!(errors.errors()[0].param("bound"), Some("10"));
    }

    #[test]
    fn custom_message() {
        let v = Compare::new(CompareOp::Lte, 120, &["is implausible"]);
        let errors = v.validate(&field("age", &200)).unwrap_err();
        assert_eq!(errors.to_string(), "age: is implausible");
    }

    #[rstest]
    #[case(gte(1).validate(&field("f", "abc")))]
    #[case(gte(1).validate(&field("f", &true)))]
    #[case(gte(1).validate(&field("f", &Some(3))))]
    #[case(gte(1).validate(&field("f", &vec![1, 2])))]
    #[case(gte(1).validate(&field("f", &Utc::now())))]
    #[case(gte("a").validate(&field("f", &3)))]
    fn not_comparable(#[case] result: ValidationResult) {
        let errors = result.unwrap_err();
        assert_eq!(errors.errors()[0].message, "cannot use validator `Gte`");
    }

    #[test]
    fn nan_is_not_comparable() {
        assert!(eq(f64::NAN).validate(&field("f", &1.0)).is_err());
    }

    #[test]
    fn unrecognized_kind() {
        let errors = lt(1).validate(&Field::opaque("f", &())).unwrap_err();
        assert_eq!(errors.to_string(), "f: of an unrecognized type");
    }
}

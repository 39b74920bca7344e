//! Value kinds and the closed dispatch set.
//!
//! A [`Field`](super::Field) does not carry a `&dyn Any`; it carries a
//! [`Value`], produced at field-construction time by [`AsValue`]. Rules
//! then `match` on the value, so every (rule, kind) pair is an explicit
//! arm and anything outside the set lands in [`Value::Unrecognized`].
//!
//! | Rust type                                  | [`Kind`]                 |
//! |--------------------------------------------|--------------------------|
//! | integers, floats, `bool`, `String`/`str`   | `Scalar(_)`              |
//! | `chrono::DateTime<Tz>`                     | `Scalar(DateTime)`       |
//! | `Option<S>` for any scalar `S`             | `Optional(_)`            |
//! | `Vec<S>` / `[S]` for any scalar `S`        | `Sequence(_)`            |
//! | anything via [`Field::opaque`](super::Field::opaque) | `Unrecognized` |

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
///
/// This is the zero instant of the date-time kind; the epoch itself is
/// a perfectly ordinary, nonzero date-time.
pub const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

/// Returns the zero instant, 0001-01-01T00:00:00Z.
#[must_use]
pub fn zero_instant() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ZERO_INSTANT_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

// ============================================================================
// KINDS
// ============================================================================

/// The scalar kinds rules know how to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
    Bool,
    Str,
    DateTime,
}

impl ScalarKind {
    /// Returns true for integer and float kinds.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool | Self::Str | Self::DateTime)
    }

    /// Short type-like name, used in log events.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::DateTime => "datetime",
        }
    }
}

/// The dispatch-relevant classification of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A plain scalar.
    Scalar(ScalarKind),
    /// A scalar that may be absent.
    Optional(ScalarKind),
    /// An ordered, homogeneous sequence of scalars.
    Sequence(ScalarKind),
    /// Anything outside the set above.
    Unrecognized,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(k) => write!(f, "{}", k.name()),
            Self::Optional(k) => write!(f, "Option<{}>", k.name()),
            Self::Sequence(k) => write!(f, "[{}]", k.name()),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

// ============================================================================
// VALUES
// ============================================================================

/// A scalar payload, borrowed where the source is borrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(&'a str),
    DateTime(DateTime<Utc>),
}

impl Scalar<'_> {
    /// Returns the kind of this scalar.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::U8(_) => ScalarKind::U8,
            Self::U16(_) => ScalarKind::U16,
            Self::U32(_) => ScalarKind::U32,
            Self::U64(_) => ScalarKind::U64,
            Self::Usize(_) => ScalarKind::Usize,
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
            Self::Isize(_) => ScalarKind::Isize,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Str(_) => ScalarKind::Str,
            Self::DateTime(_) => ScalarKind::DateTime,
        }
    }

    /// Returns true if the scalar equals its kind's zero value.
    ///
    /// Floats compare numerically, so `-0.0` is zero too.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::U8(v) => v == 0,
            Self::U16(v) => v == 0,
            Self::U32(v) => v == 0,
            Self::U64(v) => v == 0,
            Self::Usize(v) => v == 0,
            Self::I8(v) => v == 0,
            Self::I16(v) => v == 0,
            Self::I32(v) => v == 0,
            Self::I64(v) => v == 0,
            Self::Isize(v) => v == 0,
            Self::F32(v) => v == 0.0,
            Self::F64(v) => v == 0.0,
            Self::Bool(v) => !v,
            Self::Str(v) => v.is_empty(),
            Self::DateTime(v) => {
                v.timestamp() == ZERO_INSTANT_SECS && v.timestamp_subsec_nanos() == 0
            }
        }
    }
}

/// What a rule sees when it inspects a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A present scalar.
    Scalar(Scalar<'a>),
    /// A nullable scalar; `value` is `None` when absent.
    Optional {
        kind: ScalarKind,
        value: Option<Scalar<'a>>,
    },
    /// A sequence of scalars. Rules only ever need its length.
    Sequence { kind: ScalarKind, len: usize },
    /// A value outside the recognized set.
    Unrecognized { type_name: &'static str },
}

impl Value<'_> {
    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Scalar(s) => Kind::Scalar(s.kind()),
            Self::Optional { kind, .. } => Kind::Optional(*kind),
            Self::Sequence { kind, .. } => Kind::Sequence(*kind),
            Self::Unrecognized { .. } => Kind::Unrecognized,
        }
    }
}

// ============================================================================
// AS VALUE
// ============================================================================

/// Types that can be placed behind a [`Field`](super::Field).
///
/// Implemented for every recognized scalar, for `Option`, `Vec` and slices of
/// them, and through references. Types outside that set are validated via
/// [`Field::opaque`](super::Field::opaque).
pub trait AsValue {
    /// Classifies `self` and borrows whatever the rules need.
    fn as_value(&self) -> Value<'_>;
}

/// A recognized scalar type.
pub trait ScalarValue {
    /// The kind tag, available even when no value is at hand (`None`, `[]`).
    const KIND: ScalarKind;

    /// Borrows `self` as a [`Scalar`].
    fn as_scalar(&self) -> Scalar<'_>;
}

macro_rules! scalar_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ScalarValue for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                #[inline]
                fn as_scalar(&self) -> Scalar<'_> {
                    Scalar::$variant(*self)
                }
            }

            impl AsValue for $ty {
                #[inline]
                fn as_value(&self) -> Value<'_> {
                    Value::Scalar(self.as_scalar())
                }
            }
        )*
    };
}

scalar_value! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

impl ScalarValue for str {
    const KIND: ScalarKind = ScalarKind::Str;

    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Str(self)
    }
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::Scalar(Scalar::Str(self))
    }
}

impl ScalarValue for String {
    const KIND: ScalarKind = ScalarKind::Str;

    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Str(self.as_str())
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::Scalar(Scalar::Str(self.as_str()))
    }
}

impl<Tz: TimeZone> ScalarValue for DateTime<Tz> {
    const KIND: ScalarKind = ScalarKind::DateTime;

    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::DateTime(self.with_timezone(&Utc))
    }
}

impl<Tz: TimeZone> AsValue for DateTime<Tz> {
    fn as_value(&self) -> Value<'_> {
        Value::Scalar(self.as_scalar())
    }
}

impl<T: ScalarValue + ?Sized> ScalarValue for &T {
    const KIND: ScalarKind = T::KIND;

    fn as_scalar(&self) -> Scalar<'_> {
        (**self).as_scalar()
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: ScalarValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Optional {
            kind: T::KIND,
            value: self.as_ref().map(ScalarValue::as_scalar),
        }
    }
}

impl<T: ScalarValue> AsValue for [T] {
    fn as_value(&self) -> Value<'_> {
        Value::Sequence {
            kind: T::KIND,
            len: self.len(),
        }
    }
}

impl<T: ScalarValue> AsValue for Vec<T> {
    fn as_value(&self) -> Value<'_> {
        self.as_slice().as_value()
    }
}

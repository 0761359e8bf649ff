//! Values, bind arguments and conversions for sorm

pub use turso::Value;

use crate::error::Error;
use crate::error::Result;

/// Logical column types, mapped to DDL type names by a [`Dialect`](crate::dialect::Dialect)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Boolean,
    /// Up to 32-bit integers
    Integer,
    /// 64-bit integers
    BigInt,
    Float,
    Text,
    Blob,
    Timestamp,
}

/// Trait for converting Rust types into database values
///
/// ```ignore
/// let value: Value = 42i64.into_value();
/// let text: Value = "hello".into_value();
/// ```
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Trait for converting database values into Rust types
pub trait FromValue: Sized {
    /// # Errors
    ///
    /// Returns an error if the value cannot be converted to this type,
    /// or if the value is null and this type is not nullable.
    fn from_value(value: Value) -> Result<Self>;

    /// Like [`FromValue::from_value`] but maps null to `Self::default()`
    fn from_value_opt(value: Value) -> Result<Self>
    where Self: Default {
        if matches!(value, Value::Null) { Ok(Self::default()) } else { Self::from_value(value) }
    }
}

fn mismatch(expected: &'static str, actual: Value) -> Error {
    match actual {
        Value::Null => Error::UnexpectedNull,
        other => Error::TypeConversion { expected, actual: format!("{:?}", other) },
    }
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Integer(self as i64)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    let actual = format!("{:?}", value);
                    let wide = match value {
                        Value::Integer(v) => v,
                        Value::Real(v) => v as i64,
                        other => return Err(mismatch("Integer", other)),
                    };
                    <$ty>::try_from(wide).map_err(|_| Error::TypeConversion { expected: stringify!($ty), actual })
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32);

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Real(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Real(self as f64)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Real(v) => Ok(v),
            Value::Integer(v) => Ok(v as f64),
            other => Err(mismatch("Real", other)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(mismatch("Text", other)),
        }
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Blob(self)
    }
}

impl IntoValue for &[u8] {
    fn into_value(self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(v) => Ok(v),
            other => Err(mismatch("Blob", other)),
        }
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(v) => Ok(v != 0),
            other => Err(mismatch("Integer (boolean)", other)),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn from_value_opt(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

/// A positional bind argument
///
/// A `Sequence` is only meaningful right after an `IN` keyword, where it is
/// expanded into one placeholder per element before execution.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Scalar(Value),
    Sequence(Vec<Value>),
}

impl Arg {
    pub fn list<T: IntoValue>(values: impl IntoIterator<Item = T>) -> Self {
        Arg::Sequence(values.into_iter().map(IntoValue::into_value).collect())
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Arg::Sequence(_))
    }

    /// Unwraps a scalar; `index` is only used to report a stray sequence.
    pub fn into_scalar(self, index: usize) -> Result<Value> {
        match self {
            Arg::Scalar(value) => Ok(value),
            Arg::Sequence(_) => Err(Error::UnboundSequence { index }),
        }
    }
}

impl<T: IntoValue> From<T> for Arg {
    fn from(value: T) -> Self {
        Arg::Scalar(value.into_value())
    }
}

/// Builds a `Vec<Arg>` from anything convertible into [`Arg`]
///
/// ```ignore
/// session.where_("age > ? and id in (?)", args![18, Arg::list([1, 2, 3])]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

#[cfg(feature = "with-chrono")]
mod chrono_impl {
    use chrono::DateTime;
    use chrono::NaiveDate;
    use chrono::NaiveDateTime;
    use chrono::Utc;

    use super::*;

    const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    impl IntoValue for NaiveDateTime {
        fn into_value(self) -> Value {
            Value::Text(self.format(DATETIME_FORMAT).to_string())
        }
    }

    impl FromValue for NaiveDateTime {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
                    .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
                    .map_err(|_| Error::TypeConversion { expected: "NaiveDateTime", actual: s }),
                other => Err(mismatch("Text (datetime)", other)),
            }
        }
    }

    impl IntoValue for DateTime<Utc> {
        fn into_value(self) -> Value {
            Value::Text(self.format(DATETIME_FORMAT).to_string())
        }
    }

    impl FromValue for DateTime<Utc> {
        fn from_value(value: Value) -> Result<Self> {
            let naive = NaiveDateTime::from_value(value)?;
            Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
        }
    }

    impl IntoValue for NaiveDate {
        fn into_value(self) -> Value {
            Value::Text(self.format("%Y-%m-%d").to_string())
        }
    }

    impl FromValue for NaiveDate {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|_| Error::TypeConversion { expected: "NaiveDate", actual: s }),
                other => Err(mismatch("Text (date)", other)),
            }
        }
    }
}

#[cfg(feature = "with-uuid")]
mod uuid_impl {
    use uuid::Uuid;

    use super::*;

    impl IntoValue for Uuid {
        fn into_value(self) -> Value {
            Value::Text(self.to_string())
        }
    }

    impl FromValue for Uuid {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => Uuid::parse_str(&s).map_err(|_| Error::TypeConversion { expected: "UUID", actual: s }),
                Value::Blob(b) => Uuid::from_slice(&b)
                    .map_err(|_| Error::TypeConversion { expected: "UUID", actual: format!("{:?}", b) }),
                other => Err(mismatch("Text or Blob (UUID)", other)),
            }
        }
    }
}

#[cfg(feature = "with-json")]
pub use json_impl::Json;

#[cfg(feature = "with-json")]
mod json_impl {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::*;

    /// Stores `T` as JSON text
    #[derive(Clone, Debug, PartialEq)]
    pub struct Json<T>(pub T);

    impl<T: Serialize> IntoValue for Json<T> {
        fn into_value(self) -> Value {
            serde_json::to_string(&self.0).map_or(Value::Null, Value::Text)
        }
    }

    impl<T: DeserializeOwned> FromValue for Json<T> {
        fn from_value(value: Value) -> Result<Self> {
            match value {
                Value::Text(s) => Ok(Json(serde_json::from_str(&s)?)),
                other => Err(mismatch("Text (JSON)", other)),
            }
        }
    }
}

//! Database conversions for the scalar kinds.
//!
//! | Rust type                         | Stored as |
//! |-----------------------------------|-----------|
//! | `i8`, `i16`, `i32`, `i64`         | INTEGER   |
//! | `u8`, `u16`, `u32`                | INTEGER   |
//! | `u64`                             | INTEGER, up to `i64::MAX` |
//! | `f32`, `f64`                      | REAL      |
//!
//! Integers are checked in both directions. A stored integer that does not fit the target kind is an
//! [`OutOfRange`](crate::DecodeError::OutOfRange) error, and a `u64` above `i64::MAX` refuses to encode rather than
//! wrap. Float kinds also read INTEGER columns.
//!
//! `Option<T>` and both wrapper families map `None` or null to NULL.

use crate::{
    Scalar, Value,
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError},
};

macro_rules! impl_integer_value {
    ($($ty:ty),+) => {$(
        impl Encode for $ty {
            fn encode(self) -> Result<Value, EncodeError> {
                i64::try_from(self)
                    .map(Value::Integer)
                    .map_err(|_| EncodeError::OutOfRange {
                        kind: <$ty as Scalar>::KIND,
                        value: self.to_string(),
                    })
            }
        }

        impl Decode for $ty {
            fn decode(value: &Value) -> Result<Self, DecodeError> {
                let v = value.integer()?;
                Self::try_from(v).map_err(|_| DecodeError::OutOfRange {
                    kind: <$ty as Scalar>::KIND,
                    value: v.to_string(),
                })
            }
        }
    )+};
}

macro_rules! impl_float_value {
    ($($ty:ty),+) => {$(
        impl Encode for $ty {
            fn encode(self) -> Result<Value, EncodeError> {
                Ok(Value::Double(f64::from(self)))
            }
        }

        impl Decode for $ty {
            fn decode(value: &Value) -> Result<Self, DecodeError> {
                Ok(value.double()? as $ty)
            }
        }
    )+};
}

impl_integer_value!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float_value!(f32, f64);

//! The capability set every wrapped scalar kind provides.

use std::fmt::{Debug, Display};

use serde::Serialize;
use serde_json::Number;

use crate::error::NumberError;

mod private {
    pub trait Sealed {}
}

/// A primitive scalar that can be wrapped by [`Null`](crate::null::Null) and [`Zero`](crate::zero::Zero).
///
/// This trait is sealed. It is implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`, `f32` and
/// `f64`.
pub trait Scalar:
    Copy + PartialEq + Default + Debug + Display + Serialize + private::Sealed + 'static
{
    /// Kind name used in error messages, e.g. `"int16"`.
    const KIND: &'static str;
    /// The zero value of the kind.
    const ZERO: Self;
    /// Native bit width.
    const BITS: u32;
    /// Whether the kind can hold negative values.
    const SIGNED: bool;

    /// Parse base-10 text at native width, failing on overflow.
    fn parse_decimal(text: &str) -> Result<Self, NumberError>;

    /// Parse flat text. Kinds that narrow from a wider intermediate override this.
    fn parse_text(text: &str) -> Result<Self, NumberError> {
        Self::parse_decimal(text)
    }

    /// Convert a JSON number, returning `None` if it has no exact representation in this kind.
    fn from_json_number(number: &Number) -> Option<Self>;

    /// Whether the value can be written as a JSON number.
    fn is_finite(&self) -> bool {
        true
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

// A bare `-0` arrives as the float -0.0. Signed kinds read it as zero; `0.0` stays a type error.
fn is_negative_zero(number: &Number) -> bool {
    number.is_f64() && number.as_f64().is_some_and(|v| v == 0.0 && v.is_sign_negative())
}

macro_rules! impl_integer_scalar {
    ($ty:ty, $kind:literal, $signed:literal) => {
        impl private::Sealed for $ty {}

        impl Scalar for $ty {
            const KIND: &'static str = $kind;
            const ZERO: Self = 0;
            const BITS: u32 = <$ty>::BITS;
            const SIGNED: bool = $signed;

            fn parse_decimal(text: &str) -> Result<Self, NumberError> {
                Ok(text.parse::<$ty>()?)
            }

            fn from_json_number(number: &Number) -> Option<Self> {
                if $signed && is_negative_zero(number) {
                    return Some(0);
                }
                if let Some(v) = number.as_i64() {
                    Self::try_from(v).ok()
                } else {
                    number.as_u64().and_then(|v| Self::try_from(v).ok())
                }
            }
        }
    };

    // Historical flat-text behaviour: parse at 64 bits, then truncate to the native width.
    ($ty:ty, $kind:literal, $signed:literal, narrowing) => {
        impl private::Sealed for $ty {}

        impl Scalar for $ty {
            const KIND: &'static str = $kind;
            const ZERO: Self = 0;
            const BITS: u32 = <$ty>::BITS;
            const SIGNED: bool = $signed;

            fn parse_decimal(text: &str) -> Result<Self, NumberError> {
                Ok(text.parse::<$ty>()?)
            }

            fn parse_text(text: &str) -> Result<Self, NumberError> {
                let wide: i64 = text.parse()?;
                let narrowed = wide as $ty;
                if i64::from(narrowed) != wide {
                    tracing::debug!(
                        kind = $kind,
                        input = text,
                        narrowed,
                        "text value truncated to native width"
                    );
                }
                Ok(narrowed)
            }

            fn from_json_number(number: &Number) -> Option<Self> {
                if is_negative_zero(number) {
                    return Some(0);
                }
                number.as_i64().and_then(|v| Self::try_from(v).ok())
            }
        }
    };
}

impl_integer_scalar!(i8, "int8", true, narrowing);
impl_integer_scalar!(i16, "int16", true, narrowing);
impl_integer_scalar!(i32, "int32", true, narrowing);
impl_integer_scalar!(i64, "int64", true);
impl_integer_scalar!(u8, "uint8", false);
impl_integer_scalar!(u16, "uint16", false);
impl_integer_scalar!(u32, "uint32", false);
impl_integer_scalar!(u64, "uint64", false);

impl private::Sealed for f32 {}

impl Scalar for f32 {
    const KIND: &'static str = "float32";
    const ZERO: Self = 0.0;
    const BITS: u32 = 32;
    const SIGNED: bool = true;

    fn parse_decimal(text: &str) -> Result<Self, NumberError> {
        Ok(text.parse::<f32>()?)
    }

    fn from_json_number(number: &Number) -> Option<Self> {
        let wide = number.as_f64()?;
        let v = wide as f32;
        // Out-of-range magnitudes round to infinity.
        (v.is_finite() || !wide.is_finite()).then_some(v)
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl private::Sealed for f64 {}

impl Scalar for f64 {
    const KIND: &'static str = "float64";
    const ZERO: Self = 0.0;
    const BITS: u32 = 64;
    const SIGNED: bool = true;

    fn parse_decimal(text: &str) -> Result<Self, NumberError> {
        Ok(text.parse::<f64>()?)
    }

    fn from_json_number(number: &Number) -> Option<Self> {
        number.as_f64()
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

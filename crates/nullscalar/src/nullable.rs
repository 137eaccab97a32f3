//! The wrapper shared by both families.
//!
//! A [`Nullable`] is a value plus a validity flag. Everything that differs between the families (which values
//! count as null on the way in, what a null encodes to, and how `is_zero` and `equal` treat zero) is answered by
//! the [`Family`] type parameter. Use the aliases [`Null`](crate::Null) and [`Zero`](crate::Zero) rather than
//! naming this type directly.

use std::{fmt, marker::PhantomData, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    Scalar, Value,
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError, Error},
    json, text,
};

mod private {
    pub trait Sealed {}
}

/// The null policy of a wrapper family.
///
/// This trait is sealed. It is implemented by [`StrictNull`] and [`ZeroAsNull`].
pub trait Family: Copy + Default + fmt::Debug + private::Sealed + 'static {
    /// Whether `value`, arriving through a constructor or a JSON or text decode, makes the wrapper valid.
    fn admits<T: Scalar>(value: T) -> bool;

    /// The value written in place of a null wrapper, or `None` to write the encoding's null token.
    fn null_value<T: Scalar>() -> Option<T>;

    fn is_zero<T: Scalar>(value: T, valid: bool) -> bool;

    fn equal<T: Scalar>(a: (T, bool), b: (T, bool)) -> bool;
}

/// Zero is an ordinary value. Null is written as `null` in JSON and blank text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictNull;

impl private::Sealed for StrictNull {}

impl Family for StrictNull {
    fn admits<T: Scalar>(_: T) -> bool {
        true
    }

    fn null_value<T: Scalar>() -> Option<T> {
        None
    }

    fn is_zero<T: Scalar>(value: T, valid: bool) -> bool {
        !valid || value.is_zero()
    }

    // Null compares as zero.
    fn equal<T: Scalar>(a: (T, bool), b: (T, bool)) -> bool {
        let or_zero = |(v, valid): (T, bool)| if valid { v } else { T::ZERO };
        or_zero(a) == or_zero(b)
    }
}

/// Zero is null on the way in, and null is written as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroAsNull;

impl private::Sealed for ZeroAsNull {}

impl Family for ZeroAsNull {
    fn admits<T: Scalar>(value: T) -> bool {
        !value.is_zero()
    }

    fn null_value<T: Scalar>() -> Option<T> {
        Some(T::ZERO)
    }

    fn is_zero<T: Scalar>(_: T, valid: bool) -> bool {
        !valid
    }

    fn equal<T: Scalar>((av, a): (T, bool), (bv, b): (T, bool)) -> bool {
        a == b && (!a || av == bv)
    }
}

/// A nullable scalar whose null policy is set by `F`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<T, F> {
    value: T,
    valid: bool,
    family: PhantomData<F>,
}

impl<T: Scalar, F: Family> Nullable<T, F> {
    /// Creates a wrapper with exactly the given state. Zero is never collapsed here.
    pub const fn new(value: T, valid: bool) -> Self {
        Nullable {
            value,
            valid,
            family: PhantomData,
        }
    }

    /// Creates a wrapper holding `value`, valid unless the family treats `value` as null.
    pub fn from_value(value: T) -> Self {
        Self::new(value, F::admits(value))
    }

    /// Creates a wrapper that is null if `value` is `None`, otherwise as [`Nullable::from_value`].
    pub fn from_ptr(value: Option<&T>) -> Self {
        match value {
            Some(v) => Self::from_value(*v),
            None => Self::new(T::ZERO, false),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The stored value, which is meaningless while the wrapper is null.
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the inner value if valid, otherwise zero.
    pub fn value_or_zero(&self) -> T {
        if self.valid { self.value } else { T::ZERO }
    }

    /// Changes the value and marks the wrapper valid, even if `value` is zero.
    ///
    /// This mutates in place; sharing one wrapper across threads needs external synchronization.
    pub fn set_valid(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }

    /// Returns a reference to the value, or `None` if null.
    pub fn ptr(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn as_option(&self) -> Option<T> {
        self.ptr().copied()
    }

    /// Whether the wrapper counts as empty, e.g. for omitting a field from JSON output.
    pub fn is_zero(&self) -> bool {
        F::is_zero(self.value, self.valid)
    }

    pub fn equal(&self, other: &Self) -> bool {
        F::equal((self.value, self.valid), (other.value, other.valid))
    }

    /// Decodes JSON null, a number, or a numeric string.
    ///
    /// On error the wrapper is left unchanged.
    pub fn decode_json(&mut self, data: &[u8]) -> Result<(), Error> {
        let decoded = json::decode(data)?;
        self.apply(decoded);
        Ok(())
    }

    pub fn encode_json(&self) -> Result<String, Error> {
        match self.written() {
            Some(v) => json::encode(v),
            None => Ok("null".into()),
        }
    }

    /// Decodes blank text or `null` as null, anything else as a number.
    ///
    /// On error the wrapper is left unchanged.
    pub fn decode_text(&mut self, text: &str) -> Result<(), Error> {
        let decoded = text::decode(text)?;
        self.apply(decoded);
        Ok(())
    }

    pub fn encode_text(&self) -> String {
        self.written().map(|v| v.to_string()).unwrap_or_default()
    }

    /// Loads a database value. NULL becomes null and anything else is valid, zero included.
    pub fn scan(&mut self, value: &Value) -> Result<(), DecodeError>
    where
        T: Decode,
    {
        *self = Self::decode(value)?;
        Ok(())
    }

    /// The database value for this wrapper: NULL if null, the plain scalar otherwise.
    pub fn value_for_db(&self) -> Result<Value, EncodeError>
    where
        T: Encode,
    {
        self.as_option().encode()
    }

    /// The value an encoder writes, or `None` for the null token.
    fn written(&self) -> Option<T> {
        self.as_option().or_else(F::null_value)
    }

    fn apply(&mut self, decoded: Option<T>) {
        match decoded {
            Some(v) => {
                self.value = v;
                self.valid = F::admits(v);
            }
            None => self.valid = false,
        }
    }
}

impl<T: Scalar, F: Family> PartialEq for Nullable<T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Scalar, F: Family> From<T> for Nullable<T, F> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Scalar, F: Family> From<Option<T>> for Nullable<T, F> {
    fn from(value: Option<T>) -> Self {
        Self::from_ptr(value.as_ref())
    }
}

impl<T: Scalar, F: Family> From<Nullable<T, F>> for Option<T> {
    fn from(value: Nullable<T, F>) -> Self {
        value.as_option()
    }
}

impl<T: Scalar, F: Family> fmt::Display for Nullable<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_text())
    }
}

impl<T: Scalar, F: Family> FromStr for Nullable<T, F> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut n = Self::default();
        n.decode_text(s)?;
        Ok(n)
    }
}

impl<T: Scalar, F: Family> Serialize for Nullable<T, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.written() {
            Some(v) if !v.is_finite() => Err(serde::ser::Error::custom(Error::UnsupportedValue {
                kind: T::KIND,
                input: v.to_string(),
            })),
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Accepts null, a number or a numeric string, like [`Nullable::decode_json`].
///
/// The input is read with `deserialize_any`, so a wrapper never sees a missing struct field. Mark wrapper fields
/// `#[serde(default)]` to decode an absent field as null rather than fail with a "missing field" error.
impl<'de, T: Scalar, F: Family> Deserialize<'de> for Nullable<T, F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut n = Self::default();
        n.apply(json::deserialize(deserializer)?);
        Ok(n)
    }
}

impl<T: Scalar + Encode, F: Family> Encode for Nullable<T, F> {
    fn encode(self) -> Result<Value, EncodeError> {
        self.as_option().encode()
    }
}

/// The database has its own NULL, so a stored zero is read as a valid zero in both families.
impl<T: Scalar + Decode, F: Family> Decode for Nullable<T, F> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(match Option::<T>::decode(value)? {
            Some(v) => Self::new(v, true),
            None => Self::new(T::ZERO, false),
        })
    }
}

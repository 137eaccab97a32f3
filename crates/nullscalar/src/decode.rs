//! Conversion of database values into wrappers and scalars.
use crate::{Value, error::DecodeError};

/// A type that can be read from a database column.
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self, DecodeError>;
}

/// NULL is read as `None`; anything else must decode as `T`.
impl<T> Decode for Option<T>
where
    T: Decode,
{
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::decode(value).map(Some)
        }
    }
}

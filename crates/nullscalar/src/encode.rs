//! Conversion of wrappers and scalars into database values.
use crate::{Value, error::EncodeError};

/// A type that can be written to a database column.
pub trait Encode: Sized {
    fn encode(self) -> Result<Value, EncodeError>;
}

impl<T> Encode for &T
where
    T: Encode + Copy,
{
    fn encode(self) -> Result<Value, EncodeError> {
        (*self).encode()
    }
}

/// `None` is written as NULL.
impl<T> Encode for Option<T>
where
    T: Encode,
{
    fn encode(self) -> Result<Value, EncodeError> {
        match self {
            Some(v) => v.encode(),
            None => Ok(Value::Null),
        }
    }
}

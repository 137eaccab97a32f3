use std::fmt::{self, Display, Formatter};

use crate::error::DecodeError;

/// The storage class of a database value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DataType {
    Null,
    Integer,
    Float,
    Text,
    Blob,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Null => "NULL",
            DataType::Integer => "INTEGER",
            DataType::Float => "REAL",
            DataType::Text => "TEXT",
            DataType::Blob => "BLOB",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A value as exchanged with a database driver.
///
/// Wrappers produce one with [`Encode`](crate::encode::Encode) and consume one with
/// [`Decode`](crate::decode::Decode). Integers always travel as `i64`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Null,
            Value::Integer(_) => DataType::Integer,
            Value::Double(_) => DataType::Float,
            Value::Text(_) => DataType::Text,
            Value::Blob(_) => DataType::Blob,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The stored integer. Any other storage class is a type error.
    pub(crate) fn integer(&self) -> Result<i64, DecodeError> {
        match self {
            Value::Integer(v) => Ok(*v),
            other => Err(other.mismatch()),
        }
    }

    /// The stored float, widening a stored integer.
    pub(crate) fn double(&self) -> Result<f64, DecodeError> {
        match self {
            Value::Double(v) => Ok(*v),
            Value::Integer(v) => Ok(*v as f64),
            other => Err(other.mismatch()),
        }
    }

    fn mismatch(&self) -> DecodeError {
        match self {
            Value::Null => DecodeError::UnexpectedNull,
            other => DecodeError::DataType(other.data_type()),
        }
    }
}

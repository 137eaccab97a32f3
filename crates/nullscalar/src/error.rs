//! Types for working with errors produced by nullscalar.

use std::num::{ParseFloatError, ParseIntError};

use crate::DataType;

/// A specialized `Result` type for nullscalar.
pub type Result<T> = std::result::Result<T, Error>;

/// The reason a decimal number failed to parse.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    /// The text parsed to NaN or an infinity, which has no JSON form.
    #[error("number is not finite")]
    NotFinite,
}

/// Represents all the ways a JSON or text conversion can fail.
///
/// Every variant carries the scalar kind being decoded (`"int16"`, `"uint8"`, ...) and the raw input that was
/// rejected.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// JSON input had a shape other than null, a number of the target kind, or a string.
    #[error("{kind}: JSON input is invalid type (need number or string), found {found}: {input}")]
    InvalidType {
        kind: &'static str,
        found: String,
        input: String,
    },

    /// A quoted JSON string did not hold a number of the target kind.
    #[error("{kind}: couldn't convert string {input} to number: {source}")]
    InvalidNumericString {
        kind: &'static str,
        input: String,
        #[source]
        source: NumberError,
    },

    /// Text input was neither blank, `null`, nor a number of the target kind.
    #[error("{kind}: couldn't unmarshal text {input:?}: {source}")]
    InvalidNumericText {
        kind: &'static str,
        input: String,
        #[source]
        source: NumberError,
    },

    /// The value has no JSON representation (NaN or an infinity).
    #[error("{kind}: unsupported value for JSON: {input}")]
    UnsupportedValue { kind: &'static str, input: String },
}

impl Error {
    /// The scalar kind the failed conversion targeted.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidType { kind, .. }
            | Error::InvalidNumericString { kind, .. }
            | Error::InvalidNumericText { kind, .. }
            | Error::UnsupportedValue { kind, .. } => *kind,
        }
    }

    /// The raw input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Error::InvalidType { input, .. }
            | Error::InvalidNumericString { input, .. }
            | Error::InvalidNumericText { input, .. }
            | Error::UnsupportedValue { input, .. } => input,
        }
    }
}

/// A database value could not be read into the target type.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("incompatible storage class: {0}")]
    DataType(DataType),
    #[error("unexpected NULL")]
    UnexpectedNull,
    #[error("{kind}: stored value {value} is out of range")]
    OutOfRange { kind: &'static str, value: String },
}

/// A value could not be written as a database value.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("{kind}: {value} is out of range for an INTEGER column")]
    OutOfRange { kind: &'static str, value: String },
}

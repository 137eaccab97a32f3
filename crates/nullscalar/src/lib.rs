//! Nullable scalar wrappers that round-trip through JSON, flat text and database values.
//!
//! Two families wrap the same primitive kinds (`i8` through `u64`, `f32`, `f64`):
//!
//! - [`null::Null`] treats absence as a state of its own. Zero is an ordinary value. Absent values encode as `null`
//!   in JSON and as blank text.
//! - [`zero::Zero`] treats zero as absence. Constructing or decoding zero yields a null wrapper, and null wrappers
//!   encode as `0`.
//!
//! Both are the one [`Nullable`] type with a different [`Family`]. Both accept numbers and numeric strings in JSON,
//! blank text or `null` as absent flat text, and map to and from a database [`Value`] without any zero collapsing.

mod error;
mod json;
mod nullable;
mod scalar;
mod text;
mod value;

pub mod decode;
pub mod encode;
pub mod null;
pub mod types;
pub mod zero;

pub use crate::{
    error::{DecodeError, EncodeError, Error, NumberError, Result},
    null::Null,
    nullable::{Family, Nullable, StrictNull, ZeroAsNull},
    scalar::Scalar,
    value::{DataType, Value},
    zero::Zero,
};

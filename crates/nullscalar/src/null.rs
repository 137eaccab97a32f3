//! Nullable scalars that do not consider zero to be null.
//!
//! A [`Null`] is absent or present independently of its numeric content: `0` is an ordinary present value. It
//! encodes to `null` in JSON and to a blank string in text when absent, and decodes those back to absent.
//!
//! ```
//! use nullscalar::null;
//!
//! let mut n = null::Uint8::default();
//! n.decode_json(br#""0""#).unwrap();
//! assert_eq!(n.ptr(), Some(&0));
//! assert_eq!(n.encode_json().unwrap(), "0");
//! assert_eq!(null::Uint8::new(9, false).encode_json().unwrap(), "null");
//! ```

use crate::nullable::{Nullable, StrictNull};

/// A nullable scalar. Zero is a valid, non-null value.
pub type Null<T> = Nullable<T, StrictNull>;

pub type Int8 = Null<i8>;
pub type Int16 = Null<i16>;
pub type Int32 = Null<i32>;
pub type Int64 = Null<i64>;
pub type Uint8 = Null<u8>;
pub type Uint16 = Null<u16>;
pub type Uint32 = Null<u32>;
pub type Uint64 = Null<u64>;
pub type Float32 = Null<f32>;
pub type Float64 = Null<f64>;

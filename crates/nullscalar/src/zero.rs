//! Nullable scalars that treat zero as null.
//!
//! Constructing or decoding a [`Zero`] from a zero value yields a null wrapper, and a null wrapper encodes as `0`
//! in both JSON and text. Only [`set_valid`](crate::Nullable::set_valid) and [`new`](crate::Nullable::new) can
//! produce a valid zero, for callers that know a field is present and zero.
//!
//! The database boundary does not collapse: NULL and `0` are stored and scanned distinctly, since the database has a
//! native NULL.
//!
//! ```
//! use nullscalar::zero;
//!
//! let mut n = zero::Int16::default();
//! n.decode_json(b"0").unwrap();
//! assert!(!n.is_valid());
//! assert_eq!(n.encode_json().unwrap(), "0");
//!
//! n.set_valid(0);
//! assert!(n.is_valid());
//! assert!(!n.is_zero());
//! ```

use crate::nullable::{Nullable, ZeroAsNull};

/// A nullable scalar where zero is synonymous with null.
pub type Zero<T> = Nullable<T, ZeroAsNull>;

pub type Int8 = Zero<i8>;
pub type Int16 = Zero<i16>;
pub type Int32 = Zero<i32>;
pub type Int64 = Zero<i64>;
pub type Uint8 = Zero<u8>;
pub type Uint16 = Zero<u16>;
pub type Uint32 = Zero<u32>;
pub type Uint64 = Zero<u64>;
pub type Float32 = Zero<f32>;
pub type Float64 = Zero<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_collapses_zero() {
        assert!(!Int16::from_value(0).is_valid());
        assert!(Int16::from_value(5).is_valid());
        assert!(!Uint8::from_ptr(Some(&0)).is_valid());
        assert_eq!(Uint8::from_ptr(Some(&3)).as_option(), Some(3));
        assert!(!Uint8::from_ptr(None).is_valid());
        assert!(!Float64::from(-0.0).is_valid());
    }

    #[test]
    fn test_set_valid_zero() {
        let mut n = Int16::from_value(0);
        assert!(n.is_zero());
        n.set_valid(0);
        assert!(n.is_valid());
        assert!(!n.is_zero());
        assert_eq!(n.ptr(), Some(&0));
        assert!(!n.equal(&Int16::from_value(0)));
    }

    #[test]
    fn test_equal() {
        assert!(!Int16::new(0, true).equal(&Int16::new(0, false)));
        assert!(Int16::new(4, false).equal(&Int16::new(9, false)));
        assert!(Int16::new(4, true).equal(&Int16::new(4, true)));
        assert!(!Int16::new(4, true).equal(&Int16::new(5, true)));
    }

    #[test]
    fn test_encode_null_as_zero() {
        let n = Uint32::new(77, false);
        assert_eq!(n.encode_json().unwrap(), "0");
        assert_eq!(n.encode_text(), "0");
        assert_eq!(n.to_string(), "0");
    }

    #[test]
    fn test_failed_decode_leaves_state() {
        let mut n = Int64::new(8, true);
        assert!(n.decode_json(b"{}").is_err());
        assert!(n.decode_text("8.5").is_err());
        assert_eq!(n.as_option(), Some(8));
    }
}

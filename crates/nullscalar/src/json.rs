//! Structured-text (JSON) decoding shared by both wrapper families.
//!
//! Decoding is a two-stage attempt: a JSON number is converted at the scalar's native width, and only a quoted
//! string falls through to decimal parsing. Any other shape is terminal.

use std::{fmt, marker::PhantomData};

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Number;

use crate::{
    Scalar,
    error::{Error, NumberError},
};

/// A single JSON value, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array,
    Object,
    Malformed(String),
}

impl Token {
    /// Classify raw JSON bytes.
    pub(crate) fn read(data: &[u8]) -> Token {
        match serde_json::from_slice::<serde_json::Value>(data) {
            Ok(value) => value.into(),
            Err(e) => Token::Malformed(e.to_string()),
        }
    }

    fn shape(&self) -> String {
        match self {
            Token::Null => "null".into(),
            Token::Bool(_) => "boolean".into(),
            Token::Number(n) => format!("number {n}"),
            Token::String(_) => "string".into(),
            Token::Array => "array".into(),
            Token::Object => "object".into(),
            Token::Malformed(e) => format!("malformed JSON ({e})"),
        }
    }
}

impl From<serde_json::Value> for Token {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Token::Null,
            serde_json::Value::Bool(b) => Token::Bool(b),
            serde_json::Value::Number(n) => Token::Number(n),
            serde_json::Value::String(s) => Token::String(s),
            serde_json::Value::Array(_) => Token::Array,
            serde_json::Value::Object(_) => Token::Object,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Null => f.write_str("null"),
            Token::Bool(b) => write!(f, "{b}"),
            Token::Number(n) => write!(f, "{n}"),
            Token::String(s) => write!(f, "{s:?}"),
            Token::Array => f.write_str("[...]"),
            Token::Object => f.write_str("{...}"),
            Token::Malformed(_) => f.write_str("<malformed>"),
        }
    }
}

/// Decode a classified token. `Ok(None)` is the null token.
///
/// `raw` is the original input, used in errors; when absent the token is rendered instead.
pub(crate) fn decode_token<T: Scalar>(token: &Token, raw: Option<&str>) -> Result<Option<T>, Error> {
    let input = || raw.map_or_else(|| token.to_string(), str::to_owned);
    match token {
        Token::Null => Ok(None),
        Token::Number(n) => T::from_json_number(n)
            .map(Some)
            .ok_or_else(|| Error::InvalidType {
                kind: T::KIND,
                found: token.shape(),
                input: input(),
            }),
        Token::String(s) => {
            tracing::trace!(kind = T::KIND, input = s.as_str(), "decoding quoted number");
            T::parse_decimal(s)
                .and_then(|v| {
                    if v.is_finite() {
                        Ok(v)
                    } else {
                        Err(NumberError::NotFinite)
                    }
                })
                .map(Some)
                .map_err(|source| Error::InvalidNumericString {
                    kind: T::KIND,
                    input: input(),
                    source,
                })
        }
        _ => Err(Error::InvalidType {
            kind: T::KIND,
            found: token.shape(),
            input: input(),
        }),
    }
}

/// Decode raw JSON bytes. `Ok(None)` is the null token.
pub(crate) fn decode<T: Scalar>(data: &[u8]) -> Result<Option<T>, Error> {
    let token = Token::read(data);
    let raw = String::from_utf8_lossy(data);
    decode_token(&token, Some(&*raw))
}

/// Render a present value as a JSON number.
pub(crate) fn encode<T: Scalar>(value: T) -> Result<String, Error> {
    if !value.is_finite() {
        return Err(Error::UnsupportedValue {
            kind: T::KIND,
            input: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Collects any self-describing value into a [`Token`] for `Deserialize` implementations.
pub(crate) struct TokenVisitor<T>(PhantomData<T>);

impl<T> TokenVisitor<T> {
    pub(crate) fn new() -> Self {
        TokenVisitor(PhantomData)
    }
}

impl<'de, T: Scalar> Visitor<'de> for TokenVisitor<T> {
    type Value = Token;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "null, a number or a numeric string for {}", T::KIND)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Token, E> {
        Ok(Token::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Token, E> {
        Ok(Token::Null)
    }

    fn visit_some<D: de::Deserializer<'de>>(self, deserializer: D) -> Result<Token, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Token, E> {
        Ok(Token::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Token, E> {
        Ok(Token::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Token, E> {
        Ok(Token::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Token, E> {
        Number::from_f64(v)
            .map(Token::Number)
            .ok_or_else(|| E::custom(format!("{}: non-finite number {v}", T::KIND)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Token, E> {
        Ok(Token::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Token, E> {
        Ok(Token::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Token, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Token::Array)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Token, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Token::Object)
    }
}

/// Drive a deserializer to a decoded scalar, surfacing failures through the deserializer's error type.
///
/// The input is read with `deserialize_any`, which has no way to see an absent field. Wrapper fields of derived
/// structs need `#[serde(default)]` to treat a missing key as null.
pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Scalar,
    D: de::Deserializer<'de>,
{
    let token = deserializer.deserialize_any(TokenVisitor::<T>::new())?;
    decode_token(&token, None).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read() {
        assert_eq!(Token::read(b"null"), Token::Null);
        assert_eq!(Token::read(b" 42 "), Token::Number(42u64.into()));
        assert_eq!(Token::read(br#""7""#), Token::String("7".into()));
        assert_eq!(Token::read(b"true"), Token::Bool(true));
        assert_eq!(Token::read(b"[1, 2]"), Token::Array);
        assert_eq!(Token::read(br#"{"a": 1}"#), Token::Object);
        assert!(matches!(Token::read(b"4x"), Token::Malformed(_)));
        assert!(matches!(Token::read(b""), Token::Malformed(_)));
    }

    #[test]
    fn test_decode_shapes() {
        assert_eq!(decode::<i16>(b"null").unwrap(), None);
        assert_eq!(decode::<i16>(b"-12").unwrap(), Some(-12));
        assert_eq!(decode::<i16>(br#""-12""#).unwrap(), Some(-12));
        assert_eq!(decode::<f64>(b"2.5").unwrap(), Some(2.5));

        let err = decode::<u8>(b"true").unwrap_err();
        assert!(matches!(err, Error::InvalidType { kind: "uint8", .. }));
        assert_eq!(err.input(), "true");

        assert!(matches!(
            decode::<u8>(b"300").unwrap_err(),
            Error::InvalidType { .. }
        ));
        assert!(matches!(
            decode::<i32>(b"1.5").unwrap_err(),
            Error::InvalidType { .. }
        ));
        assert!(matches!(
            decode::<i32>(b"{").unwrap_err(),
            Error::InvalidType { .. }
        ));
        assert!(matches!(
            decode::<u8>(br#""300""#).unwrap_err(),
            Error::InvalidNumericString { kind: "uint8", .. }
        ));
        assert!(matches!(
            decode::<u8>(br#""abc""#).unwrap_err(),
            Error::InvalidNumericString { .. }
        ));
    }

    #[test]
    fn test_non_finite_strings() {
        for input in [&br#""1e39""#[..], br#""inf""#, br#""-Infinity""#] {
            let err = decode::<f32>(input).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidNumericString { kind: "float32", source: NumberError::NotFinite, .. }
                ),
                "{err}"
            );
        }
        let err = decode::<f64>(br#""NaN""#).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"float64: couldn't convert string "NaN" to number: number is not finite"#
        );
        assert_eq!(decode::<f32>(br#""3.4e38""#).unwrap(), Some(3.4e38));
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(42u8).unwrap(), "42");
        assert_eq!(encode(-7i64).unwrap(), "-7");
        assert_eq!(encode(0.5f64).unwrap(), "0.5");
        assert!(matches!(
            encode(f64::NAN).unwrap_err(),
            Error::UnsupportedValue { kind: "float64", .. }
        ));
        assert!(encode(f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = decode::<i16>(b"[1]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "int16: JSON input is invalid type (need number or string), found array: [1]"
        );
        let err = decode::<i16>(br#""x""#).unwrap_err();
        assert!(err.to_string().starts_with(r#"int16: couldn't convert string "x" to number"#));
    }
}

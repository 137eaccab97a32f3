//! Flat-text decoding shared by both wrapper families.

use crate::{Scalar, error::Error};

/// Flat text has no structural null, so a blank span and the literal word `null` are reserved for it.
pub(crate) fn is_null(text: &str) -> bool {
    text.is_empty() || text == "null"
}

/// Decode flat text. `Ok(None)` means the input was a null token.
pub(crate) fn decode<T: Scalar>(text: &str) -> Result<Option<T>, Error> {
    if is_null(text) {
        return Ok(None);
    }
    T::parse_text(text)
        .map(Some)
        .map_err(|source| Error::InvalidNumericText {
            kind: T::KIND,
            input: text.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tokens() {
        assert!(is_null(""));
        assert!(is_null("null"));
        assert!(!is_null("NULL"));
        assert!(!is_null(" "));
        assert!(!is_null("0"));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode::<u8>("").unwrap(), None);
        assert_eq!(decode::<u8>("null").unwrap(), None);
        assert_eq!(decode::<u8>("0").unwrap(), Some(0));
        assert_eq!(decode::<f32>("1.25").unwrap(), Some(1.25));

        let err = decode::<u8>("300").unwrap_err();
        assert!(matches!(err, Error::InvalidNumericText { kind: "uint8", .. }));
        assert_eq!(err.input(), "300");
        assert_eq!(
            err.to_string(),
            "uint8: couldn't unmarshal text \"300\": number too large to fit in target type"
        );

        assert!(matches!(
            decode::<i64>("twelve").unwrap_err(),
            Error::InvalidNumericText { .. }
        ));
        assert_eq!(decode::<i16>("40000").unwrap(), Some(-25536));
    }
}

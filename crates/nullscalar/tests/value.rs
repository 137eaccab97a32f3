//! Database value boundary for both families.

#[cfg(test)]
mod tests {
    use nullscalar::{
        DataType, DecodeError, EncodeError, Value, decode::Decode, encode::Encode, null, zero,
    };
    use nullscalar_test::test_value;

    test_value!(null_int16<null::Int16>(
        Value::Null => None,
        Value::Integer(0) => Some(0),
        Value::Integer(-300) => Some(-300),
    ));

    test_value!(zero_int16<zero::Int16>(
        Value::Null => None,
        Value::Integer(0) => Some(0),
        Value::Integer(32767) => Some(i16::MAX),
    ));

    test_value!(null_uint8<null::Uint8>(
        Value::Integer(255) => Some(255),
        Value::Null => None,
    ));

    test_value!(zero_uint8<zero::Uint8>(
        Value::Integer(0) => Some(0),
        Value::Integer(7) => Some(7),
    ));

    test_value!(zero_uint64<zero::Uint64>(
        Value::Integer(i64::MAX) => Some(i64::MAX as u64),
    ));

    test_value!(null_float64<null::Float64>(
        Value::Double(0.0) => Some(0.0),
        Value::Integer(2) => Some(2.0),
        Value::Null => None,
    ));

    #[test]
    fn test_zero_does_not_collapse_at_db() -> anyhow::Result<()> {
        let mut n = zero::Int32::from_value(5);
        n.scan(&Value::Integer(0))?;
        assert!(n.is_valid());
        assert_eq!(n.ptr(), Some(&0));

        let mut forced = zero::Int32::default();
        forced.set_valid(0);
        assert_eq!(forced.value_for_db()?, Value::Integer(0));

        // A decode-produced zero is null, and stays NULL in the database.
        let mut decoded = zero::Int32::default();
        decoded.decode_json(b"0")?;
        assert!(decoded.value_for_db()?.is_null());
        Ok(())
    }

    #[test]
    fn test_encode_trait() -> anyhow::Result<()> {
        assert_eq!(null::Int8::from_value(-1).encode()?, Value::Integer(-1));
        assert!(null::Int8::new(3, false).encode()?.is_null());
        assert_eq!((&zero::Uint16::from_value(9)).encode()?, Value::Integer(9));
        assert_eq!(
            zero::Float32::from_value(0.5).encode()?,
            Value::Double(0.5)
        );
        Ok(())
    }

    #[test]
    fn test_decode_trait() -> anyhow::Result<()> {
        let n = null::Int64::decode(&Value::Integer(0))?;
        assert_eq!(n.as_option(), Some(0));
        let z = zero::Int64::decode(&Value::Null)?;
        assert!(!z.is_valid());
        Ok(())
    }

    #[test]
    fn test_scan_errors() {
        let text = Value::Text("12".into());
        let mut n = null::Int32::default();
        assert!(matches!(
            n.scan(&text),
            Err(DecodeError::DataType(DataType::Text))
        ));

        let mut u = zero::Uint8::default();
        assert!(matches!(
            u.scan(&Value::Integer(256)),
            Err(DecodeError::OutOfRange { kind: "uint8", .. })
        ));
        u.set_valid(4);
        assert!(u.scan(&Value::Integer(-1)).is_err());
        assert_eq!(u.as_option(), Some(4));

        assert!(matches!(
            null::Float32::default().scan(&Value::Blob(vec![0])),
            Err(DecodeError::DataType(DataType::Blob))
        ));
    }

    #[test]
    fn test_u64_out_of_range() {
        let n = null::Uint64::from_value(u64::MAX);
        assert!(matches!(
            n.value_for_db(),
            Err(EncodeError::OutOfRange { kind: "uint64", .. })
        ));
        assert!(null::Uint64::new(u64::MAX, false).value_for_db().is_ok());
    }
}

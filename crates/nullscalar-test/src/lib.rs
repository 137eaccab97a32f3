use nullscalar::{Error, Family, Nullable, Scalar};
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform},
};
use rand_xoshiro::Xoshiro256PlusPlus;

/// A deterministic sample of `count` values of a scalar kind, always starting with zero.
pub fn samples<T>(seed: u64, count: usize) -> Vec<T>
where
    T: Scalar,
    StandardUniform: Distribution<T>,
{
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    std::iter::once(T::ZERO)
        .chain((1..count).map(|_| rng.random::<T>()))
        .collect()
}

/// Encode a wrapper as JSON and as text, decode each back into a fresh wrapper, and assert the present value
/// survives.
pub fn round_trip<T: Scalar, F: Family>(wrapper: Nullable<T, F>) -> Result<(), Error> {
    let json = wrapper.encode_json()?;
    let mut back = Nullable::<T, F>::default();
    back.decode_json(json.as_bytes())?;
    assert_eq!(back.as_option(), wrapper.as_option(), "{wrapper:?} through JSON {json:?}");

    let text = wrapper.encode_text();
    let mut back = Nullable::<T, F>::default();
    back.decode_text(&text)?;
    assert_eq!(back.as_option(), wrapper.as_option(), "{wrapper:?} through text {text:?}");
    Ok(())
}

// Round-trip sampled values of each kind through both families and both encodings.
#[macro_export]
macro_rules! test_round_trip {
    ($($name:ident<$ty:ty>),+ $(,)?) => {
        paste::item! {
            $(
                #[test]
                fn [< test_round_trip_ $name >] () -> anyhow::Result<()> {
                    for v in $crate::samples::<$ty>(0x5eed, 256) {
                        $crate::round_trip(nullscalar::Null::<$ty>::from_value(v))?;
                        $crate::round_trip(nullscalar::Null::<$ty>::new(v, false))?;
                        $crate::round_trip(nullscalar::Zero::<$ty>::from_value(v))?;
                        $crate::round_trip(nullscalar::Zero::<$ty>::new(v, false))?;
                    }
                    Ok(())
                }
            )+
        }
    };
}

// Test JSON decoding against expected contents, then re-encode and decode again.
#[macro_export]
macro_rules! test_json {
    ($name:ident<$ty:ty>($($input:literal => $expected:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_json_ $name >] () -> anyhow::Result<()> {
                $(
                    let mut w = <$ty>::default();
                    w.decode_json($input.as_bytes())?;
                    assert_eq!(w.as_option(), $expected, "decoding {:?}", $input);

                    let encoded = w.encode_json()?;
                    let mut again = <$ty>::default();
                    again.decode_json(encoded.as_bytes())?;
                    assert_eq!(again.as_option(), w.as_option(),
                            "round trip of {:?} through {:?}", $input, encoded);
                )+

                Ok(())
            }
        }
    };
}

// Test flat-text decoding against expected contents, then re-encode and decode again.
#[macro_export]
macro_rules! test_text {
    ($name:ident<$ty:ty>($($input:literal => $expected:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_text_ $name >] () -> anyhow::Result<()> {
                $(
                    let mut w = <$ty>::default();
                    w.decode_text($input)?;
                    assert_eq!(w.as_option(), $expected, "decoding {:?}", $input);

                    let encoded = w.encode_text();
                    let mut again = <$ty>::default();
                    again.decode_text(&encoded)?;
                    assert_eq!(again.as_option(), w.as_option(),
                            "round trip of {:?} through {:?}", $input, encoded);
                )+

                Ok(())
            }
        }
    };
}

// Test scanning database values, then convert back and scan again.
#[macro_export]
macro_rules! test_value {
    ($name:ident<$ty:ty>($($value:expr => $expected:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_value_ $name >] () -> anyhow::Result<()> {
                $(
                    let value = $value;
                    let mut w = <$ty>::default();
                    w.scan(&value)?;
                    assert_eq!(w.as_option(), $expected, "scanning {:?}", value);

                    let back = w.value_for_db()?;
                    let mut again = <$ty>::default();
                    again.scan(&back)?;
                    assert_eq!(again.as_option(), w.as_option(),
                            "round trip of {:?} through {:?}", value, back);
                    assert_eq!(again.is_valid(), w.is_valid());
                )+

                Ok(())
            }
        }
    };
}

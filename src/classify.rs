//! Classification of native numbers into runtime values.
//!
//! A native number is classified into the narrowest [`Value`] that holds it
//! exactly. Integers are tested against the inline and boxed integer bounds of
//! a [`Profile`] in that order, then promoted to arbitrary precision if the
//! profile supports it. Floats are accepted only if their type's range is a
//! subset of the runtime float's range.

#[cfg(feature = "bigint")]
use num_bigint::BigInt;

use crate::error::{Error, RangeError, TypeError};
use crate::primitive::{Native, Number, Primitive};
use crate::profile::Profile;
use crate::range::Extent;
use crate::value::Value;

/// Classifies a native number into the narrowest runtime value that holds it
/// exactly.
///
/// Enumerations are resolved to their underlying integer type first.
///
/// # Errors
///
/// Returns a type error if `T` is floating-point and the profile has no
/// floats, and a range error if no representation of the profile can hold
/// the number.
///
/// # Examples
///
/// ```rust
/// use numbound::{classify, Build, Representation};
///
/// let value = classify::<Build, _>(-3i8).unwrap();
/// assert_eq!(value.representation(), Representation::SmallInt);
/// ```
pub fn classify<P, T>(value: T) -> Result<Value, Error>
where
    P: Profile,
    T: Native,
{
    self::classify_primitive::<P, T::Repr>(value.resolve())
}

/// Classifies a native number, rounding integers that exceed the boxed
/// integer range to the runtime float.
///
/// Integers within the boxed range and all floats classify exactly as with
/// [`classify`]. Wider integers are never promoted to arbitrary precision:
/// they become the nearest float, which may lose precision.
///
/// # Errors
///
/// Returns a range error if an integer exceeds the boxed range and the
/// profile has no floats. Floats fail as they do with [`classify`].
pub fn approximate<P, T>(value: T) -> Result<Value, Error>
where
    P: Profile,
    T: Native,
{
    let value = value.resolve();
    match value.into_number() {
        Number::Integer(extent) => match self::narrow::<P>(extent) {
            Some(value) => Ok(value),
            None => match P::FLOAT {
                Some(width) => Ok(Value::Float(width.round(extent))),
                None => Err(RangeError::Integer {
                    bits: <T::Repr as Primitive>::BITS,
                    integer_bits: P::INTEGER.bits(),
                }
                .into()),
            },
        },
        Number::Float(_) => self::classify_primitive::<P, T::Repr>(value),
    }
}

fn classify_primitive<P, T>(value: T) -> Result<Value, Error>
where
    P: Profile,
    T: Primitive,
{
    match value.into_number() {
        Number::Integer(extent) => self::classify_integer::<P>(T::BITS, extent),
        Number::Float(float) => self::classify_float::<P>(T::BITS, float),
    }
}

fn classify_integer<P>(bits: u32, extent: Extent) -> Result<Value, Error>
where
    P: Profile,
{
    if let Some(value) = self::narrow::<P>(extent) {
        return Ok(value);
    }
    #[cfg(feature = "bigint")]
    if P::BIGINT {
        return Ok(Value::BigInt(self::promote(extent)));
    }
    Err(RangeError::Integer {
        bits,
        integer_bits: P::INTEGER.bits(),
    }
    .into())
}

fn classify_float<P>(bits: u32, float: f64) -> Result<Value, Error>
where
    P: Profile,
{
    match P::FLOAT {
        Some(width) if bits <= width.bits() => Ok(Value::Float(float)),
        Some(width) => Err(RangeError::Float {
            bits,
            float_bits: width.bits(),
        }
        .into()),
        None => Err(TypeError::FloatDisabled.into()),
    }
}

// Bounds are inclusive and tested narrowest first.
fn narrow<P>(extent: Extent) -> Option<Value>
where
    P: Profile,
{
    let ranges = P::RANGES;
    if let Some(value) = ranges.small().narrow(extent) {
        Some(Value::SmallInt(value))
    }
    else {
        ranges.boxed().narrow(extent).map(Value::BoxedInt)
    }
}

#[cfg(feature = "bigint")]
fn promote(extent: Extent) -> BigInt {
    let (low, high) = extent.halves();
    let magnitude = if high == 0 {
        BigInt::from(low)
    }
    else {
        (BigInt::from(high) << 64u32) + BigInt::from(low)
    };
    if extent.is_negative() {
        -magnitude
    }
    else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;
    use crate::error::ErrorKind;
    use crate::range::{FloatWidth, IntegerWidth};
    use crate::value::Representation;

    enum Word16 {}

    impl Profile for Word16 {
        const INTEGER: IntegerWidth = IntegerWidth::W16;
        const BIGINT: bool = false;
        const FLOAT: Option<FloatWidth> = Some(FloatWidth::F32);
    }

    enum Word64 {}

    impl Profile for Word64 {
        const INTEGER: IntegerWidth = IntegerWidth::W64;
        const BIGINT: bool = false;
        const FLOAT: Option<FloatWidth> = Some(FloatWidth::F64);
    }

    enum Word128 {}

    impl Profile for Word128 {
        const INTEGER: IntegerWidth = IntegerWidth::W128;
        const BIGINT: bool = false;
        const FLOAT: Option<FloatWidth> = Some(FloatWidth::F64);
    }

    enum Bare {}

    impl Profile for Bare {
        const INTEGER: IntegerWidth = IntegerWidth::W32;
        const BIGINT: bool = false;
        const FLOAT: Option<FloatWidth> = None;
    }

    #[cfg(feature = "bigint")]
    enum Big32 {}

    #[cfg(feature = "bigint")]
    impl Profile for Big32 {
        const INTEGER: IntegerWidth = IntegerWidth::W32;
        const BIGINT: bool = true;
        const FLOAT: Option<FloatWidth> = Some(FloatWidth::F64);
    }

    #[cfg(feature = "bigint")]
    enum Big64 {}

    #[cfg(feature = "bigint")]
    impl Profile for Big64 {
        const INTEGER: IntegerWidth = IntegerWidth::W64;
        const BIGINT: bool = true;
        const FLOAT: Option<FloatWidth> = Some(FloatWidth::F64);
    }

    #[derive(Clone, Copy)]
    #[repr(u64)]
    enum Flag {
        Wide = 1 << 40,
    }

    crate::enumeration!(Flag => u64);

    fn kind<P: Profile, T: Native>(value: T) -> Result<Representation, ErrorKind> {
        classify::<P, T>(value)
            .map(|value| value.representation())
            .map_err(|error| error.kind())
    }

    #[test]
    fn zero_is_small() {
        assert_eq!(classify::<Word16, _>(0u128), Ok(Value::SmallInt(0)));
        assert_eq!(classify::<Word64, _>(0i8), Ok(Value::SmallInt(0)));
    }

    #[test]
    fn small_boundaries_are_inclusive() {
        assert_eq!(classify::<Word16, _>(16383i16), Ok(Value::SmallInt(16383)));
        assert_eq!(classify::<Word16, _>(16384i16), Ok(Value::BoxedInt(16384)));
        assert_eq!(classify::<Word16, _>(-16384i16), Ok(Value::SmallInt(-16384)));
        assert_eq!(classify::<Word16, _>(-16385i16), Ok(Value::BoxedInt(-16385)));
    }

    #[test]
    fn boxed_boundaries_are_inclusive() {
        assert_eq!(classify::<Word16, _>(32767u16), Ok(Value::BoxedInt(32767)));
        assert_eq!(kind::<Word16, _>(32768u16), Err(ErrorKind::Range));
        assert_eq!(classify::<Word16, _>(i16::MIN), Ok(Value::BoxedInt(-32768)));
        assert_eq!(kind::<Word16, _>(-32769i32), Err(ErrorKind::Range));
    }

    #[test]
    fn small_max_and_successor_differ() {
        let max = (1i64 << 62) - 1;
        assert_eq!(classify::<Word64, _>(max), Ok(Value::SmallInt(max as i128)));
        assert_eq!(
            classify::<Word64, _>(max + 1),
            Ok(Value::BoxedInt((max + 1) as i128))
        );
    }

    #[test]
    fn unsigned_never_compares_as_signed() {
        // `u64::MAX` reinterpreted as `i64` would be -1.
        assert_eq!(kind::<Word64, _>(u64::MAX), Err(ErrorKind::Range));
        assert_eq!(
            classify::<Word128, _>(u64::MAX),
            Ok(Value::SmallInt(u64::MAX as i128))
        );
        assert_eq!(kind::<Word128, _>(u128::MAX), Err(ErrorKind::Range));
        assert_eq!(
            classify::<Word128, _>(i128::MIN),
            Ok(Value::BoxedInt(i128::MIN))
        );
    }

    #[test]
    fn range_error_names_widths() {
        let error = classify::<Word16, _>(70000u32).unwrap_err();
        assert_eq!(
            error,
            Error::Range(RangeError::Integer {
                bits: 32,
                integer_bits: 16
            })
        );
        let message = error.to_string();
        assert!(message.contains("32-bit"));
        assert!(message.contains("16-bit"));
    }

    #[test]
    fn enumeration_classifies_as_repr() {
        assert_eq!(
            classify::<Word64, _>(Flag::Wide),
            Ok(Value::SmallInt(1 << 40))
        );
        assert_eq!(
            classify::<Word16, _>(Flag::Wide),
            Err(Error::Range(RangeError::Integer {
                bits: 64,
                integer_bits: 16
            }))
        );
    }

    #[test]
    fn float_range_must_be_subset() {
        assert_eq!(classify::<Word16, _>(1.5f32), Ok(Value::Float(1.5)));
        assert_eq!(
            classify::<Word16, _>(1.5f64),
            Err(Error::Range(RangeError::Float {
                bits: 64,
                float_bits: 32
            }))
        );
        assert_eq!(
            classify::<Word64, _>(f64::MAX),
            Ok(Value::Float(f64::MAX))
        );
        assert_eq!(
            classify::<Word64, _>(f32::MAX),
            Ok(Value::Float(f64::from(f32::MAX)))
        );
    }

    #[test]
    fn float_disabled_is_type_error() {
        assert_eq!(
            classify::<Bare, _>(0.0f32),
            Err(Error::Type(TypeError::FloatDisabled))
        );
        assert_eq!(kind::<Bare, _>(f64::MAX), Err(ErrorKind::Type));
    }

    #[test]
    fn approximate_rounds_wide_integers() {
        assert_eq!(approximate::<Word16, _>(100u64), Ok(Value::SmallInt(100)));
        assert_eq!(approximate::<Word16, _>(70000u32), Ok(Value::Float(70000.0)));
        assert_eq!(
            approximate::<Word64, _>(u64::MAX),
            Ok(Value::Float(18446744073709551615.0))
        );
        assert_eq!(
            approximate::<Word16, _>(16777217u32),
            Ok(Value::Float(16777216.0))
        );
    }

    #[test]
    fn approximate_rounds_to_nearest_narrow_float() {
        let value = (1u64 << 60) + (1u64 << 36) + 1;
        assert_eq!(
            approximate::<Word16, _>(value),
            Ok(Value::Float(f64::from(value as f32)))
        );
        assert_eq!(
            approximate::<Word16, _>(-(value as i64)),
            Ok(Value::Float(-f64::from(value as f32)))
        );
    }

    #[test]
    fn approximate_without_float_is_range_error() {
        assert_eq!(
            approximate::<Bare, _>(u64::MAX),
            Err(Error::Range(RangeError::Integer {
                bits: 64,
                integer_bits: 32
            }))
        );
        assert_eq!(
            approximate::<Bare, _>(1.0f64),
            Err(Error::Type(TypeError::FloatDisabled))
        );
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn u64_max_promotes_to_big() {
        let value = classify::<Big64, _>(u64::MAX).unwrap();
        assert_eq!(value.representation(), Representation::BigInt);
        assert_eq!(value.to_string(), "18446744073709551615");
        assert_eq!(kind::<Word64, _>(u64::MAX), Err(ErrorKind::Range));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn promotion_joins_halves() {
        let value = classify::<Big32, _>(u128::MAX).unwrap();
        assert_eq!(value.to_string(), u128::MAX.to_string());

        let value = classify::<Big32, _>(i128::MIN).unwrap();
        assert_eq!(value.to_string(), i128::MIN.to_string());

        let value = classify::<Big32, _>(-5_000_000_000i64).unwrap();
        assert_eq!(value.representation(), Representation::BigInt);
        assert_eq!(value.to_string(), "-5000000000");
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn promotion_preserves_precedence() {
        // Values that fit a narrower representation never promote.
        assert_eq!(classify::<Big32, _>(i32::MIN), Ok(Value::BoxedInt(i32::MIN as i128)));
        assert_eq!(classify::<Big32, _>(1u128), Ok(Value::SmallInt(1)));
        assert_eq!(kind::<Big32, _>(1u64 << 31), Ok(Representation::BigInt));
    }
}

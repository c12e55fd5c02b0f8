//! Dynamic numeric values of the scripting runtime.

use core::fmt::{self, Display, Formatter};
#[cfg(feature = "bigint")]
use num_bigint::{BigInt, Sign};
#[cfg(feature = "bigint")]
use num_traits::ToPrimitive;

use crate::error::{Error, RangeError, TypeError};
use crate::primitive::{Float, Integer, Primitive};
use crate::range::Extent;

/// The representation of a [`Value`].
///
/// Integer representations are ordered by width: every `SmallInt` is a
/// `BoxedInt` and every `BoxedInt` is a `BigInt`.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Representation {
    SmallInt,
    BoxedInt,
    BigInt,
    Float,
}

impl Representation {
    pub fn is_integer(self) -> bool {
        !matches!(self, Representation::Float)
    }
}

/// A numeric value of the scripting runtime.
///
/// Values are produced by [`classify`] and hold exactly the native number they
/// were classified from.
///
/// [`classify`]: crate::classify
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An inline-tagged integer.
    SmallInt(i128),
    /// A boxed integer of the runtime's native width.
    BoxedInt(i128),
    /// An arbitrary precision integer.
    #[cfg(feature = "bigint")]
    BigInt(BigInt),
    Float(f64),
}

impl Value {
    pub fn representation(&self) -> Representation {
        match self {
            Value::SmallInt(_) => Representation::SmallInt,
            Value::BoxedInt(_) => Representation::BoxedInt,
            #[cfg(feature = "bigint")]
            Value::BigInt(_) => Representation::BigInt,
            Value::Float(_) => Representation::Float,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.representation().is_integer()
    }

    /// The exact value of an integer, if it is one.
    ///
    /// Arbitrary precision integers beyond the range of the native integers
    /// have no extent.
    pub fn extent(&self) -> Option<Extent> {
        match self {
            Value::SmallInt(value) | Value::BoxedInt(value) => Some(Extent::from_i128(*value)),
            #[cfg(feature = "bigint")]
            Value::BigInt(value) => {
                let magnitude = value.magnitude().to_u128()?;
                Some(match value.sign() {
                    Sign::Minus => Extent::negative(magnitude),
                    _ => Extent::from_u128(magnitude),
                })
            }
            Value::Float(_) => None,
        }
    }

    /// Extracts a native integer.
    ///
    /// Fails with a type error if this value is a float and with a range error
    /// if it does not fit in `T`.
    pub fn to_integer<T>(&self) -> Result<T, Error>
    where
        T: Integer,
    {
        if let Value::Float(_) = self {
            return Err(TypeError::NotInteger.into());
        }
        self.extent()
            .and_then(T::from_extent)
            .ok_or_else(|| RangeError::Native { bits: T::BITS }.into())
    }

    /// Extracts a native float.
    ///
    /// Fails with a type error if this value is an integer and with a range
    /// error if it is not exactly representable as `T`.
    pub fn to_float<T>(&self) -> Result<T, Error>
    where
        T: Float,
    {
        match self {
            Value::Float(value) => {
                T::from_f64(*value).ok_or_else(|| RangeError::Native { bits: T::BITS }.into())
            }
            _ => Err(TypeError::NotFloat.into()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::SmallInt(value) | Value::BoxedInt(value) => write!(f, "{}", value),
            #[cfg(feature = "bigint")]
            Value::BigInt(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn representation_widens_in_order() {
        assert!(Representation::SmallInt < Representation::BoxedInt);
        assert!(Representation::BoxedInt < Representation::BigInt);
        assert!(Representation::BigInt.is_integer());
        assert!(!Representation::Float.is_integer());
    }

    #[test]
    fn to_integer_checks_range() {
        assert_eq!(Value::SmallInt(255).to_integer::<u8>(), Ok(255u8));
        assert_eq!(
            Value::SmallInt(256).to_integer::<u8>().map_err(|error| error.kind()),
            Err(ErrorKind::Range)
        );
        assert_eq!(Value::BoxedInt(-1).to_integer::<i64>(), Ok(-1i64));
        assert_eq!(
            Value::BoxedInt(-1).to_integer::<u64>().map_err(|error| error.kind()),
            Err(ErrorKind::Range)
        );
    }

    #[test]
    fn to_integer_rejects_float() {
        assert_eq!(
            Value::Float(1.0).to_integer::<i32>(),
            Err(Error::Type(TypeError::NotInteger))
        );
    }

    #[test]
    fn to_float_requires_exactness() {
        assert_eq!(Value::Float(0.5).to_float::<f32>(), Ok(0.5f32));
        assert_eq!(
            Value::Float(0.1).to_float::<f32>(),
            Err(Error::Range(RangeError::Native { bits: 32 }))
        );
        assert_eq!(Value::Float(0.1).to_float::<f64>(), Ok(0.1));
        assert_eq!(
            Value::SmallInt(1).to_float::<f64>(),
            Err(Error::Type(TypeError::NotFloat))
        );
    }

    #[test]
    fn display_renders_decimal() {
        assert_eq!(Value::SmallInt(-42).to_string(), "-42");
        assert_eq!(Value::BoxedInt(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn big_extent_is_exact_within_native_range() {
        let value = Value::BigInt(BigInt::from(u128::MAX));
        assert_eq!(value.extent(), Some(Extent::from_u128(u128::MAX)));
        assert_eq!(value.to_integer::<u128>(), Ok(u128::MAX));

        let value = Value::BigInt(-BigInt::from(u64::MAX));
        assert_eq!(value.extent(), Some(Extent::negative(u64::MAX as u128)));

        let value = Value::BigInt(BigInt::from(u128::MAX) * 4u32);
        assert_eq!(value.extent(), None);
        assert_eq!(
            value.to_integer::<u128>(),
            Err(Error::Range(RangeError::Native { bits: 128 }))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_tags_representation() {
        let json = serde_json::to_string(&Value::SmallInt(7)).unwrap();
        assert_eq!(json, r#"{"SmallInt":7}"#);
        let value: Value = serde_json::from_str(r#"{"Float":2.5}"#).unwrap();
        assert_eq!(value, Value::Float(2.5));
    }
}

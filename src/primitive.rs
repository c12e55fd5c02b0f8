//! Native numeric types and their exact decomposition.

use core::fmt::Debug;
use core::mem;
use num_traits::{PrimInt, Unsigned};

use crate::range::{Bounds, Extent};
use crate::sealed::Sealed;

/// Whether a native number is integral or floating-point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Integral,
    Floating,
}

/// A native number split into its category and exact value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(Extent),
    Float(f64),
}

/// The fixed-size byte representation of a native number.
pub trait Bytes: AsMut<[u8]> + AsRef<[u8]> + Copy + Debug + Default + Eq {}

impl<const N: usize> Bytes for [u8; N] where [u8; N]: Default {}

/// A primitive numeric type.
///
/// This trait is sealed and implemented for every primitive integer and
/// floating-point type. Types outside of this set cannot cross the runtime
/// boundary.
pub trait Primitive: Copy + Debug + Sealed {
    const BITS: u32;
    const SIGNED: bool;
    const CATEGORY: Category;

    fn into_number(self) -> Number;
}

pub trait Integer: Primitive + PrimInt {
    type Bytes: Bytes;

    fn to_ne_bytes(self) -> Self::Bytes;
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    fn extent(self) -> Extent;
    fn from_extent(extent: Extent) -> Option<Self>;

    fn bounds() -> Bounds {
        if Self::SIGNED {
            Bounds::signed(Self::BITS)
        }
        else {
            Bounds::unsigned(Self::BITS)
        }
    }
}

pub trait Float: Primitive {
    /// The unsigned integer that shares the width of this type.
    ///
    /// Reinterpreting a float as its bits never changes its width, so the
    /// byte representations of a float and its bits are the same type.
    type Bits: Integer + Unsigned;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;

    /// Narrows `value` to this type if it is exactly representable.
    ///
    /// `NaN` is always representable.
    fn from_f64(value: f64) -> Option<Self>;
}

/// A native value that resolves to a [`Primitive`] before it crosses the
/// runtime boundary.
///
/// Primitives resolve to themselves. Field-less enumerations resolve to their
/// underlying integer type; see [`enumeration!`].
///
/// [`enumeration!`]: crate::enumeration
pub trait Native: Copy {
    type Repr: Primitive;

    fn resolve(self) -> Self::Repr;
}

/// Implements [`Native`] for field-less enumerations by resolving them to
/// their underlying integer type.
///
/// # Examples
///
/// ```rust
/// use numbound::{classify, enumeration, Build, Value};
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Color {
///     Red = 1,
///     Green = 2,
/// }
///
/// enumeration!(Color => u8);
///
/// assert_eq!(classify::<Build, _>(Color::Green).unwrap(), Value::SmallInt(2));
/// ```
///
/// [`Native`]: crate::Native
#[macro_export]
macro_rules! enumeration {
    ($($t:ty => $repr:ty),+ $(,)?) => {$(
        impl $crate::Native for $t {
            type Repr = $repr;

            fn resolve(self) -> $repr {
                self as $repr
            }
        }
    )+};
}

macro_rules! impl_primitive {
    (signed => $t:ty) => {
        impl_primitive!(integer => $t, true, from_i128, i128);
    };
    (unsigned => $t:ty) => {
        impl_primitive!(integer => $t, false, from_u128, u128);
    };
    (integer => $t:ty, $signed:expr, $from:ident, $wide:ty) => {
        impl Sealed for $t {}

        impl Primitive for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const CATEGORY: Category = Category::Integral;

            fn into_number(self) -> Number {
                Number::Integer(Integer::extent(self))
            }
        }

        impl Integer for $t {
            type Bytes = [u8; mem::size_of::<$t>()];

            fn to_ne_bytes(self) -> Self::Bytes {
                <$t>::to_ne_bytes(self)
            }

            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from_ne_bytes(bytes)
            }

            fn extent(self) -> Extent {
                Extent::$from(self as $wide)
            }

            fn from_extent(extent: Extent) -> Option<Self> {
                if extent.is_negative() {
                    extent.to_i128().and_then(|value| <$t>::try_from(value).ok())
                }
                else {
                    <$t>::try_from(extent.magnitude()).ok()
                }
            }
        }

        impl Native for $t {
            type Repr = $t;

            fn resolve(self) -> $t {
                self
            }
        }
    };
    (float => $t:ty, $bits:ty) => {
        impl Sealed for $t {}

        impl Primitive for $t {
            const BITS: u32 = <$bits>::BITS;
            const SIGNED: bool = true;
            const CATEGORY: Category = Category::Floating;

            fn into_number(self) -> Number {
                Number::Float(f64::from(self))
            }
        }

        impl Float for $t {
            type Bits = $bits;

            fn to_bits(self) -> $bits {
                <$t>::to_bits(self)
            }

            fn from_bits(bits: $bits) -> Self {
                <$t>::from_bits(bits)
            }

            fn from_f64(value: f64) -> Option<Self> {
                let narrowed = value as $t;
                if value.is_nan() || f64::from(narrowed) == value {
                    Some(narrowed)
                }
                else {
                    None
                }
            }
        }

        impl Native for $t {
            type Repr = $t;

            fn resolve(self) -> $t {
                self
            }
        }
    };
}
impl_primitive!(signed => i8);
impl_primitive!(signed => i16);
impl_primitive!(signed => i32);
impl_primitive!(signed => i64);
impl_primitive!(signed => i128);
impl_primitive!(signed => isize);
impl_primitive!(unsigned => u8);
impl_primitive!(unsigned => u16);
impl_primitive!(unsigned => u32);
impl_primitive!(unsigned => u64);
impl_primitive!(unsigned => u128);
impl_primitive!(unsigned => usize);
impl_primitive!(float => f32, u32);
impl_primitive!(float => f64, u64);

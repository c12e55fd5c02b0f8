//! Encoding of runtime values at the runtime's own widths.
//!
//! Integers are encoded at the width of the boxed integer of a [`Profile`] and
//! floats at the width of its float. Decoding classifies the result, so a
//! decoded integer is the narrowest representation that holds it.
//!
//! Swapping the bytes of a runtime float reinterprets it as the runtime
//! integer, which requires both to have the same width. Profiles where they
//! differ can still encode and decode floats in an order that matches the
//! platform, but fail with a runtime error when a swap is needed.

use core::fmt::{self, Debug, Formatter};
use core::ops::Deref;

use crate::classify::classify;
use crate::codec::{self, Buffer, Codec};
use crate::error::{Error, RangeError, RuntimeError, TypeError};
use crate::order::ByteOrder;
use crate::primitive::Float;
use crate::profile::Profile;
use crate::range::{FloatWidth, IntegerWidth};
use crate::value::Value;

const CAPACITY: usize = 16;

/// Invokes `$f` with `$t` bound to the native signed integer of a width.
macro_rules! with_integer_width {
    ($width:expr, |$t:ident| $f:expr) => {
        match $width {
            IntegerWidth::W16 => {
                type $t = i16;
                $f
            }
            IntegerWidth::W32 => {
                type $t = i32;
                $f
            }
            IntegerWidth::W64 => {
                type $t = i64;
                $f
            }
            IntegerWidth::W128 => {
                type $t = i128;
                $f
            }
        }
    };
}

/// Invokes `$f` with `$t` bound to the native float of a width.
macro_rules! with_float_width {
    ($width:expr, |$t:ident| $f:expr) => {
        match $width {
            FloatWidth::F32 => {
                type $t = f32;
                $f
            }
            FloatWidth::F64 => {
                type $t = f64;
                $f
            }
        }
    };
}

/// The encoding of a runtime value.
///
/// The length is always the width of the encoded representation.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct EncodedBuffer {
    bytes: [u8; CAPACITY],
    len: usize,
}

impl EncodedBuffer {
    fn new<B>(bytes: B) -> Self
    where
        B: AsRef<[u8]>,
    {
        let source = bytes.as_ref();
        let mut buffer = EncodedBuffer {
            bytes: [0; CAPACITY],
            len: source.len(),
        };
        buffer.bytes[..source.len()].copy_from_slice(source);
        buffer
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for EncodedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Buffer for EncodedBuffer {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl Debug for EncodedBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Deref for EncodedBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// Encodes a runtime integer at the width of the boxed integer.
///
/// # Errors
///
/// Returns a type error if `value` is not an inline or boxed integer and a
/// range error if it does not fit the boxed integer of `P`.
pub fn encode_integer<P>(value: &Value, order: ByteOrder) -> Result<EncodedBuffer, Error>
where
    P: Profile,
{
    let integer = match value {
        Value::SmallInt(integer) | Value::BoxedInt(integer) => *integer,
        _ => return Err(TypeError::NotInteger.into()),
    };
    with_integer_width!(P::INTEGER, |T| {
        let integer = T::try_from(integer).map_err(|_| RangeError::Native {
            bits: P::INTEGER.bits(),
        })?;
        Ok(EncodedBuffer::new(integer.encode(order)))
    })
}

/// Decodes a runtime integer from a buffer as wide as the boxed integer.
///
/// # Errors
///
/// Returns a type error if `buffer` is not a byte sequence and an argument
/// error if its length is not the width of the boxed integer of `P`.
pub fn decode_integer<P, B>(buffer: &B, order: ByteOrder) -> Result<Value, Error>
where
    P: Profile,
    B: Buffer + ?Sized,
{
    with_integer_width!(P::INTEGER, |T| {
        let integer = codec::decode::<T, B>(buffer, order)?;
        classify::<P, T>(integer)
    })
}

/// Encodes a runtime float at the width of the runtime float.
///
/// # Errors
///
/// Returns a type error if `P` has no floats or `value` is not a float, a range
/// error if `value` is not exactly representable at the float width, and a
/// runtime error if a swap is needed and the float and integer widths of `P`
/// differ.
pub fn encode_float<P>(value: &Value, order: ByteOrder) -> Result<EncodedBuffer, Error>
where
    P: Profile,
{
    let width = P::FLOAT.ok_or(TypeError::FloatDisabled)?;
    let float = match value {
        Value::Float(float) => *float,
        _ => return Err(TypeError::NotFloat.into()),
    };
    self::check_swap::<P>(width, order)?;
    with_float_width!(width, |T| {
        let float = <T as Float>::from_f64(float).ok_or(RangeError::Native {
            bits: width.bits(),
        })?;
        Ok(EncodedBuffer::new(float.encode(order)))
    })
}

/// Decodes a runtime float from a buffer as wide as the runtime float.
///
/// # Errors
///
/// Returns a type error if `P` has no floats or `buffer` is not a byte
/// sequence, an argument error if its length is not the float width, and a
/// runtime error if a swap is needed and the float and integer widths of `P`
/// differ.
pub fn decode_float<P, B>(buffer: &B, order: ByteOrder) -> Result<Value, Error>
where
    P: Profile,
    B: Buffer + ?Sized,
{
    let width = P::FLOAT.ok_or(TypeError::FloatDisabled)?;
    let bytes = codec::validate(buffer, width.bytes())?;
    self::check_swap::<P>(width, order)?;
    with_float_width!(width, |T| {
        let float = codec::decode::<T, [u8]>(bytes, order)?;
        Ok(Value::Float(f64::from(float)))
    })
}

/// Increments, in place, a runtime integer encoded in native order.
///
/// The increment wraps at the width of the boxed integer.
///
/// # Errors
///
/// Returns an argument error if `buffer` is not as wide as the boxed integer
/// of `P`.
pub fn increment<P>(buffer: &mut [u8]) -> Result<(), Error>
where
    P: Profile,
{
    with_integer_width!(P::INTEGER, |T| {
        let integer = codec::decode::<T, [u8]>(buffer, ByteOrder::Native)?;
        let integer = integer.wrapping_add(1);
        buffer.copy_from_slice(&integer.encode(ByteOrder::Native));
        Ok(())
    })
}

fn check_swap<P>(width: FloatWidth, order: ByteOrder) -> Result<(), RuntimeError>
where
    P: Profile,
{
    if order.is_swapped() && width.bytes() != P::INTEGER.bytes() {
        Err(RuntimeError {
            float_bytes: width.bytes(),
            integer_bytes: P::INTEGER.bytes(),
        })
    }
    else {
        Ok(())
    }
}

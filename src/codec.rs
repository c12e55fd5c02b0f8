//! Fixed-width encoding of native numbers.
//!
//! A number is encoded into exactly as many bytes as its type occupies and a
//! buffer is only decoded if its length matches that width exactly; there is
//! no truncation and no padding. Byte order follows [`ByteOrder`]: explicit
//! orders that differ from the platform's reverse the native layout.
//!
//! Floats that must be swapped are reinterpreted as the unsigned integer of
//! the same width and swapped through the integer path.

#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::error::{ArgumentError, Error, TypeError};
use crate::order::ByteOrder;
use crate::primitive::{Bytes, Float, Integer, Primitive};
use crate::value::Value;

/// A source of bytes to decode.
///
/// Values that are not byte sequences have no bytes and fail to decode with
/// a type error.
pub trait Buffer {
    fn as_bytes(&self) -> Option<&[u8]>;
}

impl Buffer for [u8] {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> Buffer for [u8; N] {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl Buffer for str {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(str::as_bytes(self))
    }
}

#[cfg(feature = "std")]
impl Buffer for Vec<u8> {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

#[cfg(feature = "std")]
impl Buffer for String {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(String::as_bytes(self))
    }
}

impl Buffer for Value {
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }
}

impl<B> Buffer for &'_ B
where
    B: Buffer + ?Sized,
{
    fn as_bytes(&self) -> Option<&[u8]> {
        B::as_bytes(*self)
    }
}

/// A primitive number with a fixed-width byte encoding.
pub trait Codec: Primitive {
    type Encoded: Bytes;

    fn encode(self, order: ByteOrder) -> Self::Encoded;

    fn decode<B>(buffer: &B, order: ByteOrder) -> Result<Self, Error>
    where
        B: Buffer + ?Sized;
}

/// Encodes `value` into exactly `size_of::<T>()` bytes.
///
/// # Examples
///
/// ```rust
/// use numbound::{encode, ByteOrder};
///
/// let bytes = encode(0x0102_0304u32, ByteOrder::Big);
/// assert_eq!(bytes, [1, 2, 3, 4]);
/// ```
pub fn encode<T>(value: T, order: ByteOrder) -> T::Encoded
where
    T: Codec,
{
    value.encode(order)
}

/// Decodes a `T` from a buffer of exactly `size_of::<T>()` bytes.
///
/// # Errors
///
/// Returns a type error if `buffer` is not a byte sequence and an argument
/// error if its length is not the width of `T`.
pub fn decode<T, B>(buffer: &B, order: ByteOrder) -> Result<T, Error>
where
    T: Codec,
    B: Buffer + ?Sized,
{
    T::decode(buffer, order)
}

/// Borrows the bytes of `buffer`, which must be exactly `width` bytes long.
pub(crate) fn validate<B>(buffer: &B, width: usize) -> Result<&[u8], Error>
where
    B: Buffer + ?Sized,
{
    let bytes = buffer.as_bytes().ok_or(TypeError::NotBuffer)?;
    if bytes.len() == width {
        Ok(bytes)
    }
    else {
        Err(ArgumentError {
            expected: width,
            found: bytes.len(),
        }
        .into())
    }
}

fn encode_integer<T>(value: T, order: ByteOrder) -> T::Bytes
where
    T: Integer,
{
    let mut bytes = value.to_ne_bytes();
    if order.is_swapped() {
        bytes.as_mut().reverse();
    }
    bytes
}

fn decode_integer<T, B>(buffer: &B, order: ByteOrder) -> Result<T, Error>
where
    T: Integer,
    B: Buffer + ?Sized,
{
    let mut bytes = T::Bytes::default();
    let source = self::validate(buffer, bytes.as_ref().len())?;
    bytes.as_mut().copy_from_slice(source);
    if order.is_swapped() {
        bytes.as_mut().reverse();
    }
    Ok(T::from_ne_bytes(bytes))
}

fn encode_float<T>(value: T, order: ByteOrder) -> <T::Bits as Integer>::Bytes
where
    T: Float,
{
    // The bits of a float share its in-memory layout, so the native order is
    // a verbatim copy.
    self::encode_integer(value.to_bits(), order)
}

fn decode_float<T, B>(buffer: &B, order: ByteOrder) -> Result<T, Error>
where
    T: Float,
    B: Buffer + ?Sized,
{
    self::decode_integer::<T::Bits, B>(buffer, order).map(T::from_bits)
}

macro_rules! impl_codec {
    (integer => $t:ty) => {
        impl Codec for $t {
            type Encoded = <$t as Integer>::Bytes;

            fn encode(self, order: ByteOrder) -> Self::Encoded {
                self::encode_integer(self, order)
            }

            fn decode<B>(buffer: &B, order: ByteOrder) -> Result<Self, Error>
            where
                B: Buffer + ?Sized,
            {
                self::decode_integer(buffer, order)
            }
        }
    };
    (float => $t:ty) => {
        impl Codec for $t {
            type Encoded = <<$t as Float>::Bits as Integer>::Bytes;

            fn encode(self, order: ByteOrder) -> Self::Encoded {
                self::encode_float(self, order)
            }

            fn decode<B>(buffer: &B, order: ByteOrder) -> Result<Self, Error>
            where
                B: Buffer + ?Sized,
            {
                self::decode_float(buffer, order)
            }
        }
    };
}
impl_codec!(integer => i8);
impl_codec!(integer => i16);
impl_codec!(integer => i32);
impl_codec!(integer => i64);
impl_codec!(integer => i128);
impl_codec!(integer => isize);
impl_codec!(integer => u8);
impl_codec!(integer => u16);
impl_codec!(integer => u32);
impl_codec!(integer => u64);
impl_codec!(integer => u128);
impl_codec!(integer => usize);
impl_codec!(float => f32);
impl_codec!(float => f64);

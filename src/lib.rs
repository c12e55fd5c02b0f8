//! Moving native numbers across the boundary of a dynamically typed runtime:
//! classification into runtime values and fixed-width byte encoding.
//!
//! A runtime built on a [`Profile`] offers up to four numeric representations:
//! inline-tagged small integers, boxed integers of the runtime's native width,
//! arbitrary precision integers, and floats. [`classify`] maps any primitive
//! number (or an enumeration with a primitive representation) into the
//! narrowest of these that holds it exactly and fails with an [`Error`] if
//! none can.
//!
//! [`encode`] and [`decode`] convert primitive numbers to and from exactly
//! `size_of::<T>()` bytes in native, little-endian, or big-endian order. The
//! [`runtime`] module does the same for runtime values at the widths of a
//! profile.
//!
//! # Features
//!
//! | Feature   | Default | Description                                       |
//! |-----------|---------|---------------------------------------------------|
//! | `bigint`  | No      | Arbitrary precision integers via [`num-bigint`].  |
//! | `float`   | Yes     | 64-bit runtime floats.                            |
//! | `float32` | No      | 32-bit runtime floats.                            |
//! | `int16`   | No      | 16-bit boxed integers.                            |
//! | `int32`   | No      | 32-bit boxed integers.                            |
//! | `int128`  | No      | 128-bit boxed integers.                           |
//! | `serde`   | No      | De/serialization of values and descriptors.       |
//! | `std`     | Yes     | [`std::error::Error`] implementations.            |
//!
//! These features only select the [`Build`] profile. Any type can implement
//! [`Profile`] to describe another runtime.
//!
//! # Examples
//!
//! Classifying integers on either side of a boundary:
//!
//! ```rust
//! use numbound::{classify, Build, Profile, Representation};
//!
//! let max = Build::RANGES.small().max();
//! let value = classify::<Build, _>(max.magnitude()).unwrap();
//! assert_eq!(value.representation(), Representation::SmallInt);
//!
//! let value = classify::<Build, _>(max.magnitude() + 1).unwrap();
//! assert_eq!(value.representation(), Representation::BoxedInt);
//! ```
//!
//! Encoding in an explicit order:
//!
//! ```rust
//! use numbound::{decode, encode, ByteOrder};
//!
//! let bytes = encode(-2i16, ByteOrder::Big);
//! assert_eq!(bytes, [0xff, 0xfe]);
//! assert_eq!(decode::<i16, _>(&bytes, ByteOrder::Big), Ok(-2));
//! assert!(decode::<i16, _>(&[0u8; 3], ByteOrder::Big).is_err());
//! ```
//!
//! [`num-bigint`]: https://crates.io/crates/num-bigint

#![no_std]

extern crate num_traits;
#[cfg(feature = "serde")]
extern crate serde;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_derive;
#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

mod classify;
mod codec;
mod error;
mod order;
mod primitive;
mod profile;
mod range;
pub mod runtime;
mod value;

pub use crate::classify::{approximate, classify};
pub use crate::codec::{decode, encode, Buffer, Codec};
pub use crate::error::{
    ArgumentError, Error, ErrorKind, RangeError, RuntimeError, TypeError,
};
pub use crate::order::ByteOrder;
pub use crate::primitive::{Bytes, Category, Float, Integer, Native, Number, Primitive};
pub use crate::profile::{Build, Profile, RangeDescriptor};
pub use crate::range::{Bounds, Extent, FloatWidth, IntegerWidth};
pub use crate::value::{Representation, Value};

mod sealed {
    pub trait Sealed {}
}

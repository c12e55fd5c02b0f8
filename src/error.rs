//! Errors raised when a number cannot cross the runtime boundary.
//!
//! Every failure is terminal for the operation that raised it and carries the
//! numeric facts (bit widths and byte lengths) that explain it, so messages
//! are available without an allocator.

#[cfg(not(feature = "std"))]
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use thiserror::Error;

/// The category of an [`Error`].
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    Type,
    Range,
    Argument,
    Runtime,
}

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    #[cfg_attr(feature = "std", error(transparent))]
    Type(TypeError),
    #[cfg_attr(feature = "std", error(transparent))]
    Range(RangeError),
    #[cfg_attr(feature = "std", error(transparent))]
    Argument(ArgumentError),
    #[cfg_attr(feature = "std", error(transparent))]
    Runtime(RuntimeError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Type(_) => ErrorKind::Type,
            Error::Range(_) => ErrorKind::Range,
            Error::Argument(_) => ErrorKind::Argument,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }
}

#[cfg(not(feature = "std"))]
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Type(error) => Display::fmt(error, f),
            Error::Range(error) => Display::fmt(error, f),
            Error::Argument(error) => Display::fmt(error, f),
            Error::Runtime(error) => Display::fmt(error, f),
        }
    }
}

impl From<TypeError> for Error {
    fn from(error: TypeError) -> Self {
        Error::Type(error)
    }
}

impl From<RangeError> for Error {
    fn from(error: RangeError) -> Self {
        Error::Range(error)
    }
}

impl From<ArgumentError> for Error {
    fn from(error: ArgumentError) -> Self {
        Error::Argument(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Error::Runtime(error)
    }
}

/// The category of an input is not supported.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeError {
    #[cfg_attr(feature = "std", error("floating-point support is disabled"))]
    FloatDisabled,
    #[cfg_attr(feature = "std", error("not a byte sequence"))]
    NotBuffer,
    #[cfg_attr(feature = "std", error("expected a fixed-width integer value"))]
    NotInteger,
    #[cfg_attr(feature = "std", error("expected a floating-point value"))]
    NotFloat,
}

#[cfg(not(feature = "std"))]
impl Display for TypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TypeError::FloatDisabled => "floating-point support is disabled",
                TypeError::NotBuffer => "not a byte sequence",
                TypeError::NotInteger => "expected a fixed-width integer value",
                TypeError::NotFloat => "expected a floating-point value",
            },
        )
    }
}

/// The magnitude of a value exceeds every available representation.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeError {
    /// A native integer does not fit the runtime integer and arbitrary
    /// precision is not available.
    #[cfg_attr(
        feature = "std",
        error(
            "{bits}-bit integer too large for the {integer_bits}-bit runtime integer and arbitrary precision is not enabled"
        )
    )]
    Integer { bits: u32, integer_bits: u32 },
    /// A native floating-point type has a wider range than the runtime float.
    #[cfg_attr(
        feature = "std",
        error("{bits}-bit float too large for the {float_bits}-bit runtime float")
    )]
    Float { bits: u32, float_bits: u32 },
    /// A runtime value does not fit the requested native type.
    #[cfg_attr(feature = "std", error("value does not fit in a {bits}-bit native number"))]
    Native { bits: u32 },
}

#[cfg(not(feature = "std"))]
impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Integer { bits, integer_bits } => write!(
                f,
                "{}-bit integer too large for the {}-bit runtime integer and arbitrary precision is not enabled",
                bits, integer_bits,
            ),
            RangeError::Float { bits, float_bits } => write!(
                f,
                "{}-bit float too large for the {}-bit runtime float",
                bits, float_bits,
            ),
            RangeError::Native { bits } => {
                write!(f, "value does not fit in a {}-bit native number", bits)
            }
        }
    }
}

/// The length of an encoded buffer does not match the width of its type.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(
    feature = "std",
    error("encoded data cannot be decoded: expected {expected} bytes, found {found}")
)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArgumentError {
    pub expected: usize,
    pub found: usize,
}

#[cfg(not(feature = "std"))]
impl Display for ArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "encoded data cannot be decoded: expected {} bytes, found {}",
            self.expected, self.found,
        )
    }
}

/// The runtime float and integer differ in width, so float bytes cannot be
/// swapped through the integer path.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(
    feature = "std",
    error(
        "size of the runtime float ({float_bytes} bytes) and integer ({integer_bytes} bytes) differ, cannot swap float bytes"
    )
)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuntimeError {
    pub float_bytes: usize,
    pub integer_bytes: usize,
}

#[cfg(not(feature = "std"))]
impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size of the runtime float ({} bytes) and integer ({} bytes) differ, cannot swap float bytes",
            self.float_bytes, self.integer_bytes,
        )
    }
}

//! Build configurations of the scripting runtime.
//!
//! A [`Profile`] fixes the representations that the runtime offers: the width
//! of its boxed integer, how many bits its inline integers give up to tagging,
//! whether it has arbitrary precision integers, and the width of its float (if
//! any). Profiles are types, so every operation that depends on them is
//! resolved at compile time.
//!
//! [`Build`] is the profile selected by Cargo features:
//!
//! | Feature   | Effect                                   |
//! |-----------|------------------------------------------|
//! | `int16`   | 16-bit boxed integer                     |
//! | `int32`   | 32-bit boxed integer                     |
//! | (none)    | 64-bit boxed integer                     |
//! | `int128`  | 128-bit boxed integer                    |
//! | `bigint`  | arbitrary precision integers             |
//! | `float`   | 64-bit floats (enabled by default)       |
//! | `float32` | 32-bit floats                            |

use crate::range::{Bounds, FloatWidth, IntegerWidth};

/// The bounds of each representation of a [`Profile`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RangeDescriptor {
    small: Bounds,
    boxed: Bounds,
    float: Option<FloatWidth>,
}

impl RangeDescriptor {
    pub const fn new(integer: IntegerWidth, tag_bits: u32, float: Option<FloatWidth>) -> Self {
        assert!(tag_bits < integer.bits());
        RangeDescriptor {
            small: Bounds::signed(integer.bits() - tag_bits),
            boxed: integer.bounds(),
            float,
        }
    }

    /// Bounds of the inline-tagged integer.
    pub const fn small(&self) -> Bounds {
        self.small
    }

    /// Bounds of the boxed integer.
    pub const fn boxed(&self) -> Bounds {
        self.boxed
    }

    /// Width of the runtime float.
    ///
    /// A native float type is within the runtime float range exactly when its
    /// width is at most this width, so classification compares widths.
    pub const fn float(&self) -> Option<FloatWidth> {
        self.float
    }

    /// The lowest and greatest finite values of the runtime float.
    pub fn float_bounds(&self) -> Option<(f64, f64)> {
        self.float.map(FloatWidth::bounds)
    }
}

pub trait Profile {
    const INTEGER: IntegerWidth;
    /// Bits of the boxed integer width used to tag inline integers.
    const TAG_BITS: u32 = 1;
    /// Whether integers beyond the boxed range become arbitrary precision
    /// integers.
    ///
    /// This has no effect unless the `bigint` feature is enabled.
    const BIGINT: bool;
    const FLOAT: Option<FloatWidth>;

    const RANGES: RangeDescriptor =
        RangeDescriptor::new(Self::INTEGER, Self::TAG_BITS, Self::FLOAT);
}

/// The profile selected by Cargo features.
#[derive(Clone, Copy, Debug)]
pub enum Build {}

impl Profile for Build {
    const INTEGER: IntegerWidth = BUILD_INTEGER;
    const BIGINT: bool = cfg!(feature = "bigint");
    const FLOAT: Option<FloatWidth> = BUILD_FLOAT;
}

#[cfg(integer_bits = "16")]
const BUILD_INTEGER: IntegerWidth = IntegerWidth::W16;
#[cfg(integer_bits = "32")]
const BUILD_INTEGER: IntegerWidth = IntegerWidth::W32;
#[cfg(not(any(integer_bits = "16", integer_bits = "32", integer_bits = "128")))]
const BUILD_INTEGER: IntegerWidth = IntegerWidth::W64;
#[cfg(integer_bits = "128")]
const BUILD_INTEGER: IntegerWidth = IntegerWidth::W128;

#[cfg(feature = "float32")]
const BUILD_FLOAT: Option<FloatWidth> = Some(FloatWidth::F32);
#[cfg(all(feature = "float", not(feature = "float32")))]
const BUILD_FLOAT: Option<FloatWidth> = Some(FloatWidth::F64);
#[cfg(not(feature = "float"))]
const BUILD_FLOAT: Option<FloatWidth> = None;

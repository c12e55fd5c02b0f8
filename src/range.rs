//! Exact integer extents and the bounds of runtime representations.
//!
//! Native integers are compared against runtime bounds through [`Extent`], a
//! sign and magnitude split that holds every value of every native integer
//! type (`i128::MIN` through `u128::MAX`). Signed and unsigned values are
//! never compared directly.

use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};

/// The exact value of a native integer as a sign and a magnitude.
///
/// Zero is never negative, so equal values have equal representations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Extent {
    negative: bool,
    magnitude: u128,
}

impl Extent {
    pub const ZERO: Self = Extent {
        negative: false,
        magnitude: 0,
    };

    pub const fn from_i128(value: i128) -> Self {
        Extent {
            negative: value < 0,
            magnitude: value.unsigned_abs(),
        }
    }

    pub const fn from_u128(value: u128) -> Self {
        Extent {
            negative: false,
            magnitude: value,
        }
    }

    /// Constructs the negation of `magnitude`.
    pub const fn negative(magnitude: u128) -> Self {
        Extent {
            negative: magnitude != 0,
            magnitude,
        }
    }

    pub const fn is_negative(self) -> bool {
        self.negative
    }

    pub const fn magnitude(self) -> u128 {
        self.magnitude
    }

    /// Splits the magnitude into its low and high 64-bit halves.
    pub const fn halves(self) -> (u64, u64) {
        (self.magnitude as u64, (self.magnitude >> 64) as u64)
    }

    pub const fn to_i128(self) -> Option<i128> {
        if self.negative {
            if self.magnitude <= i128::MIN.unsigned_abs() {
                // `i128::MIN` has no positive counterpart, so negate after the cast.
                Some((self.magnitude as i128).wrapping_neg())
            }
            else {
                None
            }
        }
        else if self.magnitude <= i128::MAX as u128 {
            Some(self.magnitude as i128)
        }
        else {
            None
        }
    }

}

impl Display for Extent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        }
        else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl Ord for Extent {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Extent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i128> for Extent {
    fn from(value: i128) -> Self {
        Extent::from_i128(value)
    }
}

impl From<u128> for Extent {
    fn from(value: u128) -> Self {
        Extent::from_u128(value)
    }
}

/// Inclusive bounds of an integer representation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Bounds {
    min: Extent,
    max: Extent,
}

impl Bounds {
    /// The bounds of a two's complement integer of the given width.
    pub const fn signed(bits: u32) -> Self {
        assert!(bits > 0 && bits <= 128);
        let half = 1u128 << (bits - 1);
        Bounds {
            min: Extent::negative(half),
            max: Extent::from_u128(half - 1),
        }
    }

    /// The bounds of an unsigned integer of the given width.
    pub const fn unsigned(bits: u32) -> Self {
        assert!(bits > 0 && bits <= 128);
        let max = if bits == 128 {
            u128::MAX
        }
        else {
            (1u128 << bits) - 1
        };
        Bounds {
            min: Extent::ZERO,
            max: Extent::from_u128(max),
        }
    }

    pub const fn min(&self) -> Extent {
        self.min
    }

    pub const fn max(&self) -> Extent {
        self.max
    }

    pub fn contains(&self, value: Extent) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_subset_of(&self, other: &Bounds) -> bool {
        other.contains(self.min) && other.contains(self.max)
    }

    /// Converts `value` to `i128` if these bounds contain it.
    ///
    /// Every signed bound fits in `i128`, so this only fails when `value` is
    /// out of bounds.
    pub(crate) fn narrow(&self, value: Extent) -> Option<i128> {
        if self.contains(value) {
            value.to_i128()
        }
        else {
            None
        }
    }
}

/// The width of the runtime's boxed integer.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IntegerWidth {
    W16,
    W32,
    W64,
    W128,
}

impl IntegerWidth {
    pub const fn bits(self) -> u32 {
        match self {
            IntegerWidth::W16 => 16,
            IntegerWidth::W32 => 32,
            IntegerWidth::W64 => 64,
            IntegerWidth::W128 => 128,
        }
    }

    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    pub const fn bounds(self) -> Bounds {
        Bounds::signed(self.bits())
    }
}

/// The width of the runtime's floating-point representation.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::F32 => 32,
            FloatWidth::F64 => 64,
        }
    }

    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Rounds `value` to the nearest float of this width.
    ///
    /// The magnitude is converted directly to the target width, so the result
    /// is rounded once.
    pub fn round(self, value: Extent) -> f64 {
        let magnitude = match self {
            FloatWidth::F32 => f64::from(value.magnitude() as f32),
            FloatWidth::F64 => value.magnitude() as f64,
        };
        if value.is_negative() {
            -magnitude
        }
        else {
            magnitude
        }
    }

    /// The lowest and greatest finite values of this width.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            FloatWidth::F32 => (f64::from(f32::MIN), f64::from(f32::MAX)),
            FloatWidth::F64 => (f64::MIN, f64::MAX),
        }
    }
}

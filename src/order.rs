/// The byte order of an encoded number.
///
/// `Native` copies the in-memory representation verbatim. `Little` and `Big`
/// behave as `Native` when the platform already uses that order and reverse
/// the native layout otherwise.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const PLATFORM: ByteOrder = ByteOrder::Big;
    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const PLATFORM: ByteOrder = ByteOrder::Little;

    /// Resolves `Native` to the byte order of the target platform.
    pub const fn resolve(self) -> ByteOrder {
        match self {
            ByteOrder::Native => ByteOrder::PLATFORM,
            order => order,
        }
    }

    /// Whether encoding in this order reverses the native layout.
    pub const fn is_swapped(self) -> bool {
        match (self.resolve(), ByteOrder::PLATFORM) {
            (ByteOrder::Little, ByteOrder::Little) | (ByteOrder::Big, ByteOrder::Big) => false,
            _ => true,
        }
    }
}

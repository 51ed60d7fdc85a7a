//! Byte order selection for fixed-width primitive decoding
//!
//! The byte order only selects how bytes are interpreted; it never changes
//! how the underlying buffer is stored.

use std::str::FromStr;

use crate::error::SeqReadError;

/// Byte order of a multi-byte value
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: [0x78, 0x56, 0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Least significant byte first
    ///
    /// Intel x86 native byte order.
    LittleEndian,

    /// Most significant byte first
    ///
    /// Network byte order, used in most protocols.
    #[default]
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the host this code runs on
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::LittleEndian
        } else {
            Self::BigEndian
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LittleEndian => "DCBA (Little-Endian)",
            Self::BigEndian => "ABCD (Big-Endian)",
        }
    }

    /// Short form used in configuration files
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::LittleEndian => "LE",
            Self::BigEndian => "BE",
        }
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

impl FromStr for ByteOrder {
    type Err = SeqReadError;

    /// Accepts the common spellings found in device configs:
    /// - "ABCD", "AB", "BE", "BIG_ENDIAN", "NETWORK" → BigEndian
    /// - "DCBA", "BA", "LE", "LITTLE_ENDIAN" → LittleEndian
    ///
    /// Matching is case-insensitive and ignores dashes. Word-swapped layouts
    /// (CDAB, BADC) are not byte orders and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "AB" | "ABCDEFGH" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" | "NETWORK" => {
                Ok(Self::BigEndian)
            },
            "DCBA" | "BA" | "HGFEDCBA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => {
                Ok(Self::LittleEndian)
            },
            _ => Err(SeqReadError::invalid_byte_order(s)),
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ByteOrder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ByteOrder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

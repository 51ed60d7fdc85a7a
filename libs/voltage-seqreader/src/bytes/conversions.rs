//! Numeric type conversions with byte order support
//!
//! Maps fixed-size raw byte arrays to numeric values and back:
//! - Integers are assembled with explicit shifts for each byte order, so the
//!   result never depends on the host's native byte order
//! - Signed integers reinterpret the unsigned bit pattern of the same width
//! - Floats go through `from_bits`/`to_bits` (no rounding, NaN payloads kept)

use super::ByteOrder;

/// Fixed-width numeric value decodable from raw bytes
pub trait Primitive: Copy + Default {
    /// Encoded size in bytes
    const WIDTH: usize;

    /// Scratch array holding exactly `WIDTH` bytes
    type Raw: AsRef<[u8]> + AsMut<[u8]> + Copy + Default;

    /// Interpret `raw` in the given byte order
    fn decode(raw: Self::Raw, order: ByteOrder) -> Self;

    /// Lay out the value's bytes in the given byte order
    fn encode(self, order: ByteOrder) -> Self::Raw;
}

/// Decode a value of type `T` from its raw bytes
#[inline]
pub fn decode<T: Primitive>(raw: T::Raw, order: ByteOrder) -> T {
    T::decode(raw, order)
}

/// Encode a value of type `T` into raw bytes
#[inline]
pub fn encode<T: Primitive>(value: T, order: ByteOrder) -> T::Raw {
    value.encode(order)
}

/// Decode from a contiguous slice holding exactly `T::WIDTH` bytes
///
/// Returns `None` when the slice length does not match the width.
pub fn decode_slice<T: Primitive>(bytes: &[u8], order: ByteOrder) -> Option<T> {
    if bytes.len() != T::WIDTH {
        return None;
    }
    let mut raw = T::Raw::default();
    raw.as_mut().copy_from_slice(bytes);
    Some(T::decode(raw, order))
}

// ============================================================================
// Primitive implementations
// ============================================================================

impl Primitive for u8 {
    const WIDTH: usize = 1;
    type Raw = [u8; 1];

    #[inline]
    fn decode(raw: Self::Raw, _order: ByteOrder) -> Self {
        raw[0]
    }

    #[inline]
    fn encode(self, _order: ByteOrder) -> Self::Raw {
        [self]
    }
}

impl Primitive for i8 {
    const WIDTH: usize = 1;
    type Raw = [u8; 1];

    #[inline]
    fn decode(raw: Self::Raw, _order: ByteOrder) -> Self {
        raw[0] as i8
    }

    #[inline]
    fn encode(self, _order: ByteOrder) -> Self::Raw {
        [self as u8]
    }
}

macro_rules! impl_unsigned {
    ($ty:ty, $width:expr) => {
        impl Primitive for $ty {
            const WIDTH: usize = $width;
            type Raw = [u8; $width];

            #[inline]
            fn decode(raw: Self::Raw, order: ByteOrder) -> Self {
                let mut value: $ty = 0;
                match order {
                    ByteOrder::BigEndian => {
                        for byte in raw {
                            value = (value << 8) | <$ty>::from(byte);
                        }
                    },
                    ByteOrder::LittleEndian => {
                        for byte in raw.into_iter().rev() {
                            value = (value << 8) | <$ty>::from(byte);
                        }
                    },
                }
                value
            }

            #[inline]
            fn encode(self, order: ByteOrder) -> Self::Raw {
                let mut raw = [0u8; $width];
                for (i, slot) in raw.iter_mut().enumerate() {
                    let shift = match order {
                        ByteOrder::BigEndian => ($width - 1 - i) * 8,
                        ByteOrder::LittleEndian => i * 8,
                    };
                    *slot = (self >> shift) as u8;
                }
                raw
            }
        }
    };
}

macro_rules! impl_signed {
    ($ty:ty, $unsigned:ty) => {
        impl Primitive for $ty {
            const WIDTH: usize = <$unsigned as Primitive>::WIDTH;
            type Raw = <$unsigned as Primitive>::Raw;

            #[inline]
            fn decode(raw: Self::Raw, order: ByteOrder) -> Self {
                <$unsigned>::decode(raw, order) as $ty
            }

            #[inline]
            fn encode(self, order: ByteOrder) -> Self::Raw {
                (self as $unsigned).encode(order)
            }
        }
    };
}

macro_rules! impl_float {
    ($ty:ty, $bits:ty) => {
        impl Primitive for $ty {
            const WIDTH: usize = <$bits as Primitive>::WIDTH;
            type Raw = <$bits as Primitive>::Raw;

            #[inline]
            fn decode(raw: Self::Raw, order: ByteOrder) -> Self {
                <$ty>::from_bits(<$bits>::decode(raw, order))
            }

            #[inline]
            fn encode(self, order: ByteOrder) -> Self::Raw {
                self.to_bits().encode(order)
            }
        }
    };
}

impl_unsigned!(u16, 2);
impl_unsigned!(u32, 4);
impl_unsigned!(u64, 8);

impl_signed!(i16, u16);
impl_signed!(i32, u32);
impl_signed!(i64, u64);

impl_float!(f32, u32);
impl_float!(f64, u64);

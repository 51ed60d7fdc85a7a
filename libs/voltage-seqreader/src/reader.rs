//! Cursor over a segmented byte sequence
//!
//! Every read is a try-operation: it either decodes a whole primitive and
//! advances by exactly its width, or it leaves position and consumed count
//! untouched. Nothing here panics on short or malformed input.

use bytes::Buf;
use tracing::trace;

use crate::bytes::{ByteOrder, Primitive};
use crate::error::{Result, SeqReadError};
use crate::sequence::{ByteSequence, SequencePosition};

/// Stateful reader tracking the current position in a [`ByteSequence`]
///
/// Holds no heap data; cloning it takes a snapshot of the cursor.
#[derive(Debug, Clone)]
pub struct SequenceReader<'a> {
    sequence: ByteSequence<'a>,
    position: SequencePosition,
    consumed: usize,
}

macro_rules! endian_reads {
    ($($ty:ty => $le:ident, $be:ident;)*) => {
        $(
            #[doc = concat!("Read a little-endian `", stringify!($ty), "`, `None` if too few bytes remain")]
            #[inline]
            pub fn $le(&mut self) -> Option<$ty> {
                self.try_read::<$ty>(ByteOrder::LittleEndian)
            }

            #[doc = concat!("Read a big-endian `", stringify!($ty), "`, `None` if too few bytes remain")]
            #[inline]
            pub fn $be(&mut self) -> Option<$ty> {
                self.try_read::<$ty>(ByteOrder::BigEndian)
            }
        )*
    };
}

impl<'a> SequenceReader<'a> {
    pub fn new(sequence: ByteSequence<'a>) -> Self {
        Self {
            position: sequence.start(),
            sequence,
            consumed: 0,
        }
    }

    /// The sequence being read
    pub fn sequence(&self) -> ByteSequence<'a> {
        self.sequence
    }

    /// Current position, suitable for a later [`reset_to`](Self::reset_to)
    pub fn position(&self) -> SequencePosition {
        self.position
    }

    /// Bytes consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.consumed
    }

    /// Total length of the underlying sequence
    pub fn length(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Unread bytes of the current segment
    pub fn current_chunk(&self) -> &'a [u8] {
        self.sequence.chunk_at(self.position)
    }

    /// Contiguous unread bytes and the position right after them
    ///
    /// Lets callers scan raw bytes without going through per-primitive reads.
    pub fn first_chunk(&self) -> (&'a [u8], SequencePosition) {
        self.sequence.chunk_with_next(self.position)
    }

    /// Copy the next `dest.len()` bytes without advancing
    pub fn try_copy_to(&self, dest: &mut [u8]) -> bool {
        if dest.len() > self.remaining() {
            trace!(
                needed = dest.len(),
                remaining = self.remaining(),
                consumed = self.consumed,
                "Copy rejected: insufficient data"
            );
            return false;
        }
        self.sequence.copy_exact(self.position, dest)
    }

    /// Move forward exactly `count` bytes
    ///
    /// Returns false and leaves the cursor unchanged if fewer remain.
    pub fn advance(&mut self, count: usize) -> bool {
        if count > self.remaining() {
            trace!(
                count,
                remaining = self.remaining(),
                "Advance rejected: past end of sequence"
            );
            return false;
        }
        match self.sequence.seek(self.position, count) {
            Some(next) => {
                self.position = next;
                self.consumed += count;
                true
            },
            None => false,
        }
    }

    /// Move back `count` bytes
    pub fn rewind(&mut self, count: usize) -> bool {
        let Some(target) = self.consumed.checked_sub(count) else {
            trace!(count, consumed = self.consumed, "Rewind rejected: before start");
            return false;
        };
        match self.sequence.position_at(target) {
            Some(position) => {
                self.position = position;
                self.consumed = target;
                true
            },
            None => false,
        }
    }

    /// Jump to a position previously obtained from this sequence
    ///
    /// Returns false and leaves the cursor unchanged for foreign positions.
    pub fn reset_to(&mut self, position: SequencePosition) -> bool {
        let Some(offset) = self.sequence.offset_of(position) else {
            trace!(?position, "Reset rejected: position outside sequence");
            return false;
        };
        match self.sequence.position_at(offset) {
            Some(normalized) => {
                self.position = normalized;
                self.consumed = offset;
                true
            },
            None => false,
        }
    }

    /// Decode one primitive and advance by its width
    ///
    /// On `None` the cursor is unchanged; `unwrap_or_default()` gives the
    /// type's zero value.
    pub fn try_read<T: Primitive>(&mut self, order: ByteOrder) -> Option<T> {
        let raw = self.copy_raw::<T>()?;
        if !self.advance(T::WIDTH) {
            return None;
        }
        Some(T::decode(raw, order))
    }

    /// Decode one primitive without advancing
    pub fn try_peek<T: Primitive>(&self, order: ByteOrder) -> Option<T> {
        self.copy_raw::<T>().map(|raw| T::decode(raw, order))
    }

    /// Like [`try_read`](Self::try_read) but reports how many bytes were missing
    pub fn read<T: Primitive>(&mut self, order: ByteOrder) -> Result<T> {
        self.try_read(order)
            .ok_or_else(|| SeqReadError::insufficient_data(T::WIDTH, self.remaining()))
    }

    pub fn try_read_u8(&mut self) -> Option<u8> {
        self.try_read::<u8>(ByteOrder::default())
    }

    pub fn try_read_i8(&mut self) -> Option<i8> {
        self.try_read::<i8>(ByteOrder::default())
    }

    endian_reads! {
        i16 => try_read_i16_le, try_read_i16_be;
        u16 => try_read_u16_le, try_read_u16_be;
        i32 => try_read_i32_le, try_read_i32_be;
        u32 => try_read_u32_le, try_read_u32_be;
        i64 => try_read_i64_le, try_read_i64_be;
        u64 => try_read_u64_le, try_read_u64_be;
        f32 => try_read_f32_le, try_read_f32_be;
        f64 => try_read_f64_le, try_read_f64_be;
    }

    /// Copy the next `T::WIDTH` bytes into a stack scratch array
    fn copy_raw<T: Primitive>(&self) -> Option<T::Raw> {
        let remaining = self.remaining();
        if remaining < T::WIDTH {
            trace!(
                needed = T::WIDTH,
                remaining,
                consumed = self.consumed,
                "Read failed: insufficient data"
            );
            return None;
        }

        let mut raw = T::Raw::default();
        let scratch = raw.as_mut();

        // Fast path: the whole value sits in the current segment
        if let Some(bytes) = self.current_chunk().get(..T::WIDTH) {
            scratch.copy_from_slice(bytes);
            return Some(raw);
        }

        if !self.sequence.copy_exact(self.position, scratch) {
            trace!(
                needed = T::WIDTH,
                remaining,
                consumed = self.consumed,
                "Read failed: segment copy came up short"
            );
            return None;
        }
        Some(raw)
    }
}

impl<'a> From<ByteSequence<'a>> for SequenceReader<'a> {
    fn from(sequence: ByteSequence<'a>) -> Self {
        Self::new(sequence)
    }
}

impl<'a> From<&'a [u8]> for SequenceReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(ByteSequence::from_slice(bytes))
    }
}

/// Exposes the reader to `bytes`-based consumers.
///
/// `advance` saturates at the end of the sequence instead of panicking.
impl Buf for SequenceReader<'_> {
    fn remaining(&self) -> usize {
        SequenceReader::remaining(self)
    }

    fn chunk(&self) -> &[u8] {
        self.current_chunk()
    }

    fn advance(&mut self, cnt: usize) {
        let cnt = cnt.min(SequenceReader::remaining(self));
        SequenceReader::advance(self, cnt);
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_u16_concrete_cases() {
        let data = [0x01, 0x00];
        let mut reader = SequenceReader::from(&data[..]);
        assert_eq!(reader.try_read_u16_le(), Some(1));

        let mut reader = SequenceReader::from(&data[..]);
        assert_eq!(reader.try_read_u16_be(), Some(256));
        assert!(reader.is_end());
    }

    #[test]
    fn test_f32_one_little_endian() {
        let data = [0x00, 0x00, 0x80, 0x3F];
        let mut reader = SequenceReader::from(&data[..]);
        assert_eq!(reader.try_read_f32_le(), Some(1.0));
        assert_eq!(reader.consumed(), 4);
    }

    #[test]
    fn test_short_buffer_leaves_cursor_unchanged() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = SequenceReader::from(&data[..]);
        let before = reader.position();

        assert_eq!(reader.try_read_u32_le(), None);
        assert_eq!(reader.try_read_i32_be().unwrap_or_default(), 0);
        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.consumed(), 0);
        assert_eq!(reader.position(), before);
    }

    #[test]
    fn test_f64_advances_eight_bytes() {
        let mut data = 2.5f64.to_le_bytes().to_vec();
        data.extend_from_slice(&(-7.25f64).to_be_bytes());
        let mut reader = SequenceReader::from(&data[..]);

        assert_eq!(reader.try_read_f64_le(), Some(2.5));
        assert_eq!(reader.consumed(), 8);
        assert_eq!(reader.try_read_f64_be(), Some(-7.25));
        assert_eq!(reader.consumed(), 16);
        assert!(reader.is_end());
    }

    #[test]
    fn test_value_straddling_segments() {
        let parts: [&[u8]; 3] = [&[0x12], &[0x34, 0x56], &[0x78, 0xAA]];
        let mut reader = SequenceReader::new(ByteSequence::new(&parts));

        assert_eq!(reader.try_read_u32_be(), Some(0x12345678));
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.current_chunk(), &[0xAA]);
        assert_eq!(reader.try_read_u16_be(), None);
        assert_eq!(reader.try_read_u8(), Some(0xAA));
        assert!(reader.is_end());
    }

    #[test]
    fn test_sequential_mixed_reads() {
        let mut data = Vec::new();
        data.extend_from_slice(&(-3i16).to_be_bytes());
        data.extend_from_slice(&0xDEADBEEFu32.to_le_bytes());
        data.extend_from_slice(&i64::MIN.to_be_bytes());
        data.extend_from_slice(&u64::MAX.to_le_bytes());
        data.push(0xFF);
        let mut reader = SequenceReader::from(&data[..]);

        assert_eq!(reader.try_read_i16_be(), Some(-3));
        assert_eq!(reader.try_read_u32_le(), Some(0xDEADBEEF));
        assert_eq!(reader.try_read_i64_be(), Some(i64::MIN));
        assert_eq!(reader.try_read_u64_le(), Some(u64::MAX));
        assert_eq!(reader.try_read_i8(), Some(-1));
        assert_eq!(reader.try_read_u8(), None);
    }

    #[test]
    fn test_empty_sequence_reads_fail() {
        let mut reader = SequenceReader::new(ByteSequence::default());
        assert!(reader.is_end());
        assert_eq!(reader.try_read_u8(), None);
        assert_eq!(reader.try_read_u16_le(), None);
        assert_eq!(reader.try_read_f64_be(), None);
        assert!(reader.advance(0));
        assert!(!reader.advance(1));
    }

    #[test]
    fn test_zero_length_segments_only() {
        let parts: [&[u8]; 3] = [&[], &[], &[]];
        let mut reader = SequenceReader::new(ByteSequence::new(&parts));
        assert_eq!(reader.try_read_i16_le(), None);
        assert_eq!(reader.current_chunk(), &[] as &[u8]);
        assert_eq!(reader.first_chunk().0, &[] as &[u8]);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0x00, 0x2A];
        let mut reader = SequenceReader::from(&data[..]);
        assert_eq!(reader.try_peek::<u16>(ByteOrder::BigEndian), Some(42));
        assert_eq!(reader.consumed(), 0);
        assert_eq!(reader.try_read::<u16>(ByteOrder::BigEndian), Some(42));
        assert_eq!(reader.try_peek::<u16>(ByteOrder::BigEndian), None);
    }

    #[test]
    fn test_read_reports_missing_bytes() {
        let data = [1, 2, 3];
        let mut reader = SequenceReader::from(&data[..]);
        let err = reader.read::<u32>(ByteOrder::LittleEndian).unwrap_err();
        assert_eq!(err, SeqReadError::insufficient_data(4, 3));
        assert!(err.is_insufficient_data());
        assert_eq!(reader.read::<u16>(ByteOrder::LittleEndian).unwrap(), 0x0201);
    }

    #[test]
    fn test_first_chunk_from_current_position() {
        let parts: [&[u8]; 2] = [&[1, 2, 3], &[4, 5]];
        let mut reader = SequenceReader::new(ByteSequence::new(&parts));
        assert!(reader.advance(1));

        let (chunk, next) = reader.first_chunk();
        assert_eq!(chunk, &[2, 3]);
        assert!(reader.reset_to(next));
        assert_eq!(reader.consumed(), 3);
        assert_eq!(reader.current_chunk(), &[4, 5]);
    }

    #[test]
    fn test_reset_and_rewind() {
        let parts: [&[u8]; 2] = [&[0, 1], &[0, 2]];
        let mut reader = SequenceReader::new(ByteSequence::new(&parts));
        let saved = reader.position();

        assert_eq!(reader.try_read_u16_be(), Some(1));
        assert_eq!(reader.try_read_u16_be(), Some(2));
        assert!(reader.rewind(2));
        assert_eq!(reader.try_read_u16_be(), Some(2));
        assert!(!reader.rewind(5));
        assert_eq!(reader.consumed(), 4);

        assert!(reader.reset_to(saved));
        assert_eq!(reader.consumed(), 0);
        assert_eq!(reader.try_read_u32_be(), Some(0x0001_0002));
    }

    #[test]
    fn test_reset_rejects_foreign_position() {
        let long = [0u8; 16];
        let mut other = SequenceReader::from(&long[..]);
        assert!(other.advance(10));
        let foreign = other.position();

        let data = [1, 2];
        let mut reader = SequenceReader::from(&data[..]);
        assert!(reader.advance(1));
        assert!(!reader.reset_to(foreign));
        assert_eq!(reader.consumed(), 1);
    }

    #[test]
    fn test_try_copy_to() {
        let parts: [&[u8]; 2] = [&[1, 2], &[3]];
        let reader = SequenceReader::new(ByteSequence::new(&parts));
        let mut dest = [0u8; 3];
        assert!(reader.try_copy_to(&mut dest));
        assert_eq!(dest, [1, 2, 3]);
        assert_eq!(reader.consumed(), 0);

        let mut too_big = [0u8; 4];
        assert!(!reader.try_copy_to(&mut too_big));
    }

    #[test]
    fn test_buf_interop() {
        let parts: [&[u8]; 2] = [&[0x00, 0x01], &[0x02, 0x03]];
        let mut reader = SequenceReader::new(ByteSequence::new(&parts));

        assert_eq!(Buf::chunk(&reader), &[0x00, 0x01]);
        assert_eq!(reader.get_u32(), 0x0001_0203);
        assert_eq!(Buf::remaining(&reader), 0);

        Buf::advance(&mut reader, 10);
        assert!(reader.is_end());
    }

    #[test]
    #[traced_test]
    fn test_failed_read_is_traced() {
        let data = [1, 2, 3];
        let mut reader = SequenceReader::from(&data[..]);
        assert_eq!(reader.try_read_u32_le(), None);
        assert!(logs_contain("Read failed: insufficient data"));
        assert!(logs_contain("needed=4"));
        assert!(logs_contain("remaining=3"));
    }

    #[test]
    #[traced_test]
    fn test_rejected_advance_is_traced() {
        let data = [1];
        let mut reader = SequenceReader::from(&data[..]);
        assert!(!reader.advance(2));
        assert!(logs_contain("Advance rejected"));
    }
}

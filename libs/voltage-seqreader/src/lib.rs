//! Voltage Sequence Reader Library
//!
//! Non-panicking decoding of fixed-width numeric primitives from byte
//! buffers that may be split across several non-contiguous segments.
//!
//! # Architecture
//!
//! This library provides:
//! - **Segmented Buffer View**: [`ByteSequence`] and [`SequencePosition`]
//! - **Cursor**: [`SequenceReader`] with `try_read_*` operations for 16/32/64-bit
//!   integers and 32/64-bit floats in either byte order
//! - **Bytes Utilities**: [`ByteOrder`] and the [`Primitive`] conversions
//!
//! A failed read never consumes input, so a streaming caller can wait for
//! more data and retry from the same position.
//!
//! ```
//! use voltage_seqreader::{ByteSequence, SequenceReader};
//!
//! let head: &[u8] = &[0x00, 0x00];
//! let tail: &[u8] = &[0x80, 0x3F, 0x01];
//! let parts = [head, tail];
//! let mut reader = SequenceReader::new(ByteSequence::new(&parts));
//!
//! assert_eq!(reader.try_read_f32_le(), Some(1.0));
//! assert_eq!(reader.try_read_u16_le(), None);
//! assert_eq!(reader.remaining(), 1);
//! ```
//!
//! # Features
//!
//! - `serde` - (de)serialize [`ByteOrder`] from protocol configs (default)

pub mod bytes;
pub mod error;
pub mod reader;
pub mod sequence;

// Re-export core types
pub use crate::bytes::{decode, decode_slice, encode, ByteOrder, Primitive};
pub use error::{Result, SeqReadError};
pub use reader::SequenceReader;
pub use sequence::{ByteSequence, SequencePosition};

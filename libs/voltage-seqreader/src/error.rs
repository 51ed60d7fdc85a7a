//! Sequence Reader Error Types
//!
//! The `try_*` family on [`SequenceReader`](crate::SequenceReader) reports
//! failures through `Option`/`bool`. These types back the `Result`-returning
//! helpers and byte order parsing.

use thiserror::Error;

/// Result type for voltage-seqreader operations
pub type Result<T> = std::result::Result<T, SeqReadError>;

/// Sequence reader errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeqReadError {
    /// Fewer bytes remained than the requested primitive needs
    #[error("Insufficient data: needed {needed} bytes, {remaining} remaining")]
    InsufficientData { needed: usize, remaining: usize },

    /// Unrecognized byte order name
    #[error("Invalid byte order: {0}")]
    InvalidByteOrder(String),

    /// Position does not belong to the sequence
    #[error("Position out of range")]
    PositionOutOfRange,
}

// Helper methods for creating errors
impl SeqReadError {
    pub fn insufficient_data(needed: usize, remaining: usize) -> Self {
        SeqReadError::InsufficientData { needed, remaining }
    }

    pub fn invalid_byte_order(name: impl Into<String>) -> Self {
        SeqReadError::InvalidByteOrder(name.into())
    }

    /// Check if more input could resolve this error (streaming callers)
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, SeqReadError::InsufficientData { .. })
    }
}

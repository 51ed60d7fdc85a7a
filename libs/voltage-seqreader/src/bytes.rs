//! Binary data processing utilities
//!
//! Byte order handling and fixed-width numeric conversions shared by the
//! sequence reader. Everything here is pure: raw byte arrays in, values out.

pub mod byte_order;
pub mod conversions;

pub use byte_order::ByteOrder;
pub use conversions::*;

//! Error types for ByteList operations.
//!
//! Every failure is local and synchronous. A failed read never returns
//! partial data and leaves the cursor where it was before the call.

use thiserror::Error;

/// The main error type for ByteList operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ByteListError {
    /// A read or peek needs more bytes than remain before the logical end.
    #[error("Buffer overrun at position {position}: need {needed} bytes, have {available}")]
    BufferOverrun {
        /// Byte position the access started at.
        position: usize,
        /// Number of bytes the access needs.
        needed: usize,
        /// Number of bytes available between `position` and the logical end.
        available: usize,
    },

    /// A value does not fit the width of the field it is written to.
    #[error("{kind} value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the field kind (e.g. "int8").
        kind: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Bit peeks are limited to 1..=32 bits.
    #[error("Invalid bit count {count}: must be between 1 and 32")]
    InvalidBitCount {
        /// The requested bit count.
        count: u32,
    },

    /// Encoded string does not fit the 16-bit length prefix.
    #[error("String too long: {len} encoded bytes exceeds prefix limit {max}")]
    StringTooLong {
        /// Encoded length in bytes.
        len: usize,
        /// Largest length the prefix can carry.
        max: usize,
    },

    /// A tagged write got a value that cannot be coerced to the tag.
    #[error("Type mismatch: tag {tag} cannot encode a {found} value")]
    TypeMismatch {
        /// Name of the target tag.
        tag: &'static str,
        /// Name of the value kind that was supplied.
        found: &'static str,
    },
}

/// Result type alias for ByteList operations.
pub type Result<T> = std::result::Result<T, ByteListError>;

impl ByteListError {
    /// Create a buffer overrun error.
    pub fn overrun(position: usize, needed: usize, available: usize) -> Self {
        Self::BufferOverrun {
            position,
            needed,
            available,
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(kind: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            kind,
            value,
            min,
            max,
        }
    }

    /// Create an invalid bit count error.
    pub fn invalid_bit_count(count: u32) -> Self {
        Self::InvalidBitCount { count }
    }

    /// Create a string too long error.
    pub fn string_too_long(len: usize) -> Self {
        Self::StringTooLong {
            len,
            max: u16::MAX as usize,
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(tag: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { tag, found }
    }

    /// Check whether this error is a buffer overrun.
    pub fn is_overrun(&self) -> bool {
        matches!(self, Self::BufferOverrun { .. })
    }
}

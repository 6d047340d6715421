//! Bit-level view of a [`ByteList`].
//!
//! Bits are numbered MSB-first within each byte and bytes follow the
//! buffer's natural order, so bit 0 is the top bit of byte 0 and bit 8 the
//! top bit of byte 1. The configured [`Endianness`](crate::Endianness) does
//! not apply here.
//!
//! ```text
//! bytes:  FF       00       FF
//! bits:   11111111 00000000 11111111
//!         ^0       ^8       ^16
//! ```
//!
//! Peeks never touch the cursor.

use crate::bytelist::ByteList;
use crate::error::{ByteListError, Result};

/// Largest number of bits a single peek can return.
pub const MAX_PEEK_BITS: u32 = 32;

impl ByteList {
    /// Read `bit_count` bits starting `bit_offset` bits into the buffer.
    ///
    /// The first bit read ends up in the most significant position of the
    /// result. `bit_count` must be in 1..=32.
    ///
    /// The starting byte must lie inside the logical length. The last byte
    /// may be the one right after the logical end as long as it is
    /// allocated; it reads as whatever the padding holds (zero unless it was
    /// trimmed and rewritten).
    pub fn peek_bits(&self, bit_offset: usize, bit_count: u32) -> Result<u32> {
        if bit_count == 0 || bit_count > MAX_PEEK_BITS {
            return Err(ByteListError::invalid_bit_count(bit_count));
        }

        let len = self.len();
        let first = bit_offset / 8;
        if first >= len {
            return Err(ByteListError::overrun(first, 1, 0));
        }

        let end_bit = bit_offset + bit_count as usize;
        let last = (end_bit - 1) / 8;
        let limit = if len < self.capacity() { len + 1 } else { len };
        if last >= limit {
            return Err(ByteListError::overrun(first, last - first + 1, len - first));
        }

        // At most 5 bytes: 7 leading bits + 32 requested.
        let window = self.allocated()[first..=last]
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | byte as u64);
        let trailing = (last + 1) * 8 - end_bit;
        let mask = (1u64 << bit_count) - 1;

        Ok(((window >> trailing) & mask) as u32)
    }
}

/// Check whether bit `bit` (0 = least significant) of `value` is set.
///
/// Bits past 31 are never set.
pub fn get_bit(value: u32, bit: u32) -> bool {
    1u32.checked_shl(bit).is_some_and(|mask| value & mask != 0)
}

/// Return `value` with bit `bit` (0 = least significant) set or cleared.
///
/// Bits past 31 leave `value` unchanged.
pub fn set_bit(value: u32, on: bool, bit: u32) -> u32 {
    match 1u32.checked_shl(bit) {
        Some(mask) if on => value | mask,
        Some(mask) => value & !mask,
        None => value,
    }
}

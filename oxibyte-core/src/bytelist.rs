//! The growable, cursor-addressed byte list.
//!
//! A [`ByteList`] couples a padded [`Store`] with a read/write cursor and a
//! byte order. Typed codecs live in [`codec`](crate::codec), bit peeks in
//! [`bits`](crate::bits) and tagged dispatch in [`dispatch`](crate::dispatch);
//! this module owns the rules every one of them goes through.
//!
//! # Write modes
//!
//! | Mode | Cursor before | Effect |
//! |---|---|---|
//! | [`WriteMode::Overwrite`] | `== len` | append; `len` and cursor grow by the width |
//! | [`WriteMode::Overwrite`] | `< len` | overwrite in place, extending `len` only if the write runs past it |
//! | [`WriteMode::Insert`] | any | splice; bytes at and after the cursor shift right |
//!
//! In every mode the cursor ends just past the written bytes.
//!
//! # Example
//!
//! ```
//! use oxibyte_core::{ByteList, WriteMode};
//!
//! let mut bytes = ByteList::from_bytes(&[1, 2]);
//! bytes.set_cursor(1);
//! bytes.write_u8(3, WriteMode::Insert);
//! assert_eq!(bytes.as_slice(), &[1, 3, 2]);
//! assert_eq!(bytes.cursor(), 2);
//! ```

use crate::config::{ByteListConfig, Endianness, WriteMode};
use crate::error::{ByteListError, Result};
use crate::store::Store;
use std::fmt;
use tracing::debug;

/// A growable byte buffer with a cursor and configurable byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteList {
    /// Backing store.
    store: Store,
    /// Read/write position, never past the logical length.
    cursor: usize,
    /// Byte order for multi-byte primitives.
    endianness: Endianness,
}

impl ByteList {
    /// Create an empty list with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ByteListConfig::DEFAULT)
    }

    /// Create an empty list with the given configuration.
    pub fn with_config(config: ByteListConfig) -> Self {
        Self {
            store: Store::new(config.padding),
            cursor: 0,
            endianness: config.endianness,
        }
    }

    /// Create a list holding a copy of `data`, cursor at 0.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_bytes_with_config(data, ByteListConfig::DEFAULT)
    }

    /// Create a list holding a copy of `data` with the given configuration.
    pub fn from_bytes_with_config(data: &[u8], config: ByteListConfig) -> Self {
        Self {
            store: Store::from_slice(data, config.padding),
            cursor: 0,
            endianness: config.endianness,
        }
    }

    /// Create a list holding `text` as a length-prefixed UTF-8 string,
    /// cursor at 0.
    pub fn from_string(text: &str) -> Result<Self> {
        let mut bytes = Self::new();
        bytes.write_string(text, WriteMode::Overwrite)?;
        bytes.cursor = 0;
        Ok(bytes)
    }

    /// Get the current configuration.
    pub fn config(&self) -> ByteListConfig {
        ByteListConfig::new(self.store.padding(), self.endianness)
    }

    /// Get the padding increment.
    pub fn padding(&self) -> usize {
        self.store.padding()
    }

    /// Set the padding increment used by later growths.
    pub fn set_padding(&mut self, padding: usize) {
        self.store.set_padding(padding);
    }

    /// Get the byte order.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Set the byte order; affects subsequent operations only.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Check if multi-byte primitives use little endian.
    pub fn is_little_endian(&self) -> bool {
        self.endianness.is_little()
    }

    /// Switch between little and big endian.
    pub fn set_little_endian(&mut self, little: bool) {
        self.endianness = if little {
            Endianness::Little
        } else {
            Endianness::Big
        };
    }

    /// Get the logical length.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the list holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get the allocated capacity.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to `[0, len]`.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }

    /// Move the cursor to the logical end.
    pub fn seek_end(&mut self) {
        self.cursor = self.len();
    }

    /// Number of bytes between the cursor and the logical end.
    pub fn remaining(&self) -> usize {
        self.len() - self.cursor
    }

    /// Read-only view of the logical bytes `[0, len)`.
    pub fn as_slice(&self) -> &[u8] {
        self.store.as_slice()
    }

    /// Copy the logical bytes out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Consume the list and return the logical bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.store.into_vec()
    }

    /// Whole allocated region, including the unused tail.
    pub(crate) fn allocated(&self) -> &[u8] {
        self.store.allocated()
    }

    /// Write raw bytes at the cursor according to `mode`.
    pub fn write_bytes(&mut self, src: &[u8], mode: WriteMode) {
        match mode {
            WriteMode::Overwrite => self.store.write_at(self.cursor, src),
            WriteMode::Insert => self.store.splice_at(self.cursor, src),
        }
        self.cursor += src.len();
    }

    /// Append bytes at the logical end, whatever the cursor, and move the
    /// cursor to the new end.
    pub fn concat(&mut self, src: &[u8]) {
        self.seek_end();
        self.write_bytes(src, WriteMode::Overwrite);
    }

    /// Append the logical bytes of another list.
    pub fn concat_list(&mut self, other: &ByteList) {
        self.concat(other.as_slice());
    }

    /// Splice bytes in at the cursor.
    pub fn insert(&mut self, src: &[u8]) {
        self.write_bytes(src, WriteMode::Insert);
    }

    /// Splice the logical bytes of another list in at the cursor.
    pub fn insert_list(&mut self, other: &ByteList) {
        self.insert(other.as_slice());
    }

    /// Check that `needed` bytes are available `offset` bytes past the
    /// cursor and return the absolute start position.
    pub(crate) fn check_available(&self, offset: usize, needed: usize) -> Result<usize> {
        let start = self
            .cursor
            .checked_add(offset)
            .ok_or_else(|| ByteListError::overrun(self.cursor, needed, 0))?;
        let available = self.len().saturating_sub(start);
        if available < needed {
            return Err(ByteListError::overrun(start, needed, available));
        }
        Ok(start)
    }

    /// Consume `count` bytes at the cursor.
    pub(crate) fn take(&mut self, count: usize) -> Result<&[u8]> {
        let start = self.check_available(0, count)?;
        self.cursor = start + count;
        Ok(&self.store.as_slice()[start..start + count])
    }

    /// Look at `count` bytes `offset` bytes past the cursor without moving it.
    pub(crate) fn peek_slice(&self, offset: usize, count: usize) -> Result<&[u8]> {
        let start = self.check_available(offset, count)?;
        Ok(&self.store.as_slice()[start..start + count])
    }

    /// Read exactly `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(self.take(count)?.to_vec())
    }

    /// Remove the first `count` bytes (clamped to the length) and return
    /// them as a new list with the same configuration.
    ///
    /// The cursor moves back by the removed count, stopping at 0.
    pub fn trim_left(&mut self, count: usize) -> ByteList {
        let removed = self.store.remove_front(count);
        self.cursor = self.cursor.saturating_sub(removed.len());
        debug!(removed = removed.len(), len = self.len(), "trimmed byte list front");
        Self::from_bytes_with_config(&removed, self.config())
    }

    /// Remove the last `count` bytes (clamped to the length) and return
    /// them as a new list with the same configuration.
    ///
    /// The cursor is pulled back to the new length if it pointed past it.
    pub fn trim_right(&mut self, count: usize) -> ByteList {
        let removed = self.store.remove_back(count);
        self.cursor = self.cursor.min(self.len());
        debug!(removed = removed.len(), len = self.len(), "trimmed byte list back");
        Self::from_bytes_with_config(&removed, self.config())
    }
}

impl Default for ByteList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[u8]> for ByteList {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Vec<u8>> for ByteList {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(&data)
    }
}

impl TryFrom<&str> for ByteList {
    type Error = ByteListError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_string(text)
    }
}

impl AsRef<[u8]> for ByteList {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Hex dump of the whole allocated region (not just the logical bytes),
/// as space-separated uppercase pairs.
impl fmt::Display for ByteList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.allocated().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

//! Padded backing store for [`ByteList`](crate::ByteList).
//!
//! The store owns a zero-filled region whose size is the allocated
//! capacity, and tracks how many leading bytes are meaningful (the logical
//! length). Growth is amortized with a fixed padding increment instead of
//! doubling:
//!
//! ```text
//! new_capacity = capacity + padding + (needed - spare)
//! ```
//!
//! where `spare = capacity - length`. The exact capacity is observable
//! through [`Store::capacity`] and the hex dump, so the rule is applied
//! byte-for-byte.

use tracing::trace;

/// Owned, growable byte region with a logical length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    /// Allocated region; `bytes.len()` is the capacity, unused tail is zero.
    bytes: Vec<u8>,
    /// Number of meaningful bytes.
    len: usize,
    /// Extra bytes reserved on each growth.
    padding: usize,
}

impl Store {
    /// Create an empty store with `padding` bytes preallocated.
    pub fn new(padding: usize) -> Self {
        Self {
            bytes: vec![0; padding],
            len: 0,
            padding,
        }
    }

    /// Create a store holding a copy of `data`.
    pub fn from_slice(data: &[u8], padding: usize) -> Self {
        let mut store = Self::new(padding);
        store.write_at(0, data);
        store
    }

    /// Get the allocated capacity.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Get the logical length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the store holds no meaningful bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the padding increment.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Set the padding increment used by later growths.
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    /// Get the meaningful bytes `[0, len)`.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Get the whole allocated region, including the unused tail.
    pub fn allocated(&self) -> &[u8] {
        &self.bytes
    }

    /// Make sure at least `needed` bytes fit after the logical end.
    ///
    /// Capacity never shrinks here.
    pub fn ensure_capacity(&mut self, needed: usize) {
        let spare = self.capacity() - self.len;
        if spare >= needed {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = old_capacity + self.padding + (needed - spare);
        self.bytes.resize(new_capacity, 0);
        trace!(
            old_capacity,
            new_capacity,
            padding = self.padding,
            "byte list store grown"
        );
    }

    /// Copy `src` over the bytes starting at `pos`, extending the logical
    /// length if the copy runs past it.
    ///
    /// `pos` must not be past the logical length.
    pub fn write_at(&mut self, pos: usize, src: &[u8]) {
        debug_assert!(pos <= self.len, "write position past logical length");

        let end = pos + src.len();
        self.ensure_capacity(end.saturating_sub(self.len));
        self.bytes[pos..end].copy_from_slice(src);
        self.len = self.len.max(end);
    }

    /// Insert `src` at `pos`, shifting `[pos, len)` right by `src.len()`.
    ///
    /// `pos` must not be past the logical length.
    pub fn splice_at(&mut self, pos: usize, src: &[u8]) {
        debug_assert!(pos <= self.len, "splice position past logical length");

        let n = src.len();
        self.ensure_capacity(n);
        self.bytes.copy_within(pos..self.len, pos + n);
        self.bytes[pos..pos + n].copy_from_slice(src);
        self.len += n;
    }

    /// Remove and return the first `count` bytes (clamped to the length).
    pub fn remove_front(&mut self, count: usize) -> Vec<u8> {
        let count = count.min(self.len);
        let removed = self.bytes[..count].to_vec();

        self.bytes.copy_within(count..self.len, 0);
        self.bytes[self.len - count..self.len].fill(0);
        self.len -= count;

        removed
    }

    /// Remove and return the last `count` bytes (clamped to the length).
    pub fn remove_back(&mut self, count: usize) -> Vec<u8> {
        let count = count.min(self.len);
        let start = self.len - count;
        let removed = self.bytes[start..self.len].to_vec();

        self.bytes[start..self.len].fill(0);
        self.len = start;

        removed
    }

    /// Consume the store and return the meaningful bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.bytes.truncate(self.len);
        self.bytes
    }
}

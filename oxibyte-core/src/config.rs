//! ByteList configuration: growth padding, byte order and write modes.

/// Extra capacity requested on every growth unless configured otherwise.
pub const DEFAULT_PADDING: usize = 100;

/// Byte order used by multi-byte primitive codecs.
///
/// Bit peeks ignore this setting and always walk the buffer in its natural
/// byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Check if this is little endian.
    pub fn is_little(self) -> bool {
        self == Self::Little
    }
}

/// How a write places its bytes relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WriteMode {
    /// Overwrite in place at the cursor, extending the logical length when
    /// the write runs past it. At the logical end this is a plain append.
    #[default]
    Overwrite,
    /// Splice at the cursor, shifting everything after it to the right.
    Insert,
}

/// ByteList configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteListConfig {
    /// Extra bytes reserved on each growth beyond the immediate need.
    pub padding: usize,
    /// Byte order for multi-byte primitives.
    pub endianness: Endianness,
}

impl ByteListConfig {
    /// Default configuration.
    ///
    /// - 100 bytes of padding per growth
    /// - Little endian
    pub const DEFAULT: Self = Self {
        padding: DEFAULT_PADDING,
        endianness: Endianness::Little,
    };

    /// Configuration that never over-allocates.
    ///
    /// Every growth reserves exactly what the write needs.
    pub const COMPACT: Self = Self {
        padding: 0,
        endianness: Endianness::Little,
    };

    /// Create a new configuration.
    pub fn new(padding: usize, endianness: Endianness) -> Self {
        Self {
            padding,
            endianness,
        }
    }

    /// Return this configuration with a different padding.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Return this configuration with a different byte order.
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }
}

impl Default for ByteListConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

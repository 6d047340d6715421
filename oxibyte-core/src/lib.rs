//! # OxiByte Core
//!
//! A growable binary buffer ("byte list") with a cursor, for reading and
//! writing fixed-width primitives, strings, dates and byte arrays under a
//! configurable byte order.
//!
//! - [`bytelist`]: the [`ByteList`] type, cursor and write modes, trims
//! - [`codec`]: typed read/write/peek operations
//! - [`bits`]: bit-level peeks that ignore the cursor
//! - [`dispatch`]: [`Tag`]/[`Value`] driven generic read/write
//! - [`store`]: padded backing store
//! - [`config`]: padding, byte order and write mode settings
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Dispatch                                                │
//! │     Tag / Value, write_tagged, read_record              │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec                      │ Bits                       │
//! │     ints, floats, dates,   │     peek_bits (MSB-first)  │
//! │     strings, byte arrays   │                            │
//! ├─────────────────────────────────────────────────────────┤
//! │ ByteList                                                │
//! │     cursor, overwrite / insert, bounds checks, trims    │
//! ├─────────────────────────────────────────────────────────┤
//! │ Store                                                   │
//! │     capacity + padding growth, logical length           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A `ByteList` is single-threaded state with no interior mutability; share
//! it across threads behind your own lock, or keep one per worker.
//!
//! ## Example
//!
//! ```rust
//! use oxibyte_core::{ByteList, Endianness, WriteMode};
//!
//! let mut bytes = ByteList::new();
//! bytes.write_u16(0x0102, WriteMode::Overwrite);
//! bytes.write_string("hello", WriteMode::Overwrite).unwrap();
//!
//! bytes.set_cursor(0);
//! assert_eq!(bytes.read_u16().unwrap(), 0x0102);
//! assert_eq!(bytes.read_string().unwrap(), "hello");
//! assert!(bytes.read_u8().is_err());
//!
//! bytes.set_endianness(Endianness::Big);
//! bytes.set_cursor(0);
//! assert_eq!(bytes.peek_u16(0).unwrap(), 0x0201);
//! assert_eq!(bytes.peek_bits(0, 8).unwrap(), 0x02);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bits;
pub mod bytelist;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod store;

// Re-exports for convenience
pub use bits::{get_bit, set_bit};
pub use bytelist::ByteList;
pub use config::{ByteListConfig, DEFAULT_PADDING, Endianness, WriteMode};
pub use dispatch::{Tag, Value};
pub use error::{ByteListError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bytelist::ByteList;
    pub use crate::config::{ByteListConfig, Endianness, WriteMode};
    pub use crate::dispatch::{Tag, Value};
    pub use crate::error::{ByteListError, Result};
}

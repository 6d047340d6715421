//! Typed read/write operations on a [`ByteList`].
//!
//! # Encodings
//!
//! | Type | Width | Notes |
//! |---|---|---|
//! | `u8` / `char` | 1 | a `char` is written as its code point (<= 0xFF) |
//! | `bool` | 1 | 0 or 1; only 1 reads back as `true` |
//! | `i8` | 1 | range checked on write |
//! | `i16` / `u16` | 2 | endian-sensitive |
//! | `i32` / `u32` | 4 | endian-sensitive |
//! | `f32` / `f64` | 4 / 8 | IEEE-754, endian-sensitive |
//! | date | 6 | `year - 2000` (signed), month (0-based), day, hour, minute, second |
//! | string | 2 + N | `u16` length prefix (endian-sensitive) + UTF-8 bytes |
//! | fixed string | N | truncated or NUL-padded to N; trailing NULs stripped on read |
//! | byte array | 1 + N | `u8` count prefix + raw bytes |
//!
//! Every write takes a [`WriteMode`]; every read checks the remaining
//! length first and fails with [`ByteListError::BufferOverrun`] without
//! consuming anything.

use crate::bytelist::ByteList;
use crate::config::{Endianness, WriteMode};
use crate::error::{ByteListError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use tracing::trace;

/// Encoded width of a date.
pub const DATE_WIDTH: usize = 6;

/// Year stored as 0 in the date encoding.
pub const DATE_EPOCH_YEAR: i32 = 2000;

/// Fixed-width numeric primitive with an endian-aware byte form.
pub(crate) trait Primitive: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Encode into `out`, which is exactly `WIDTH` bytes long.
    fn encode(self, endianness: Endianness, out: &mut [u8]);

    /// Decode from `bytes`, which is exactly `WIDTH` bytes long.
    fn decode(bytes: &[u8], endianness: Endianness) -> Self;
}

macro_rules! impl_primitive {
    ($($t:ty)*) => ($(
        impl Primitive for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            #[inline]
            fn encode(self, endianness: Endianness, out: &mut [u8]) {
                let raw = match endianness {
                    Endianness::Little => self.to_le_bytes(),
                    Endianness::Big => self.to_be_bytes(),
                };
                out.copy_from_slice(&raw);
            }

            #[inline]
            fn decode(bytes: &[u8], endianness: Endianness) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(bytes);
                match endianness {
                    Endianness::Little => <$t>::from_le_bytes(raw),
                    Endianness::Big => <$t>::from_be_bytes(raw),
                }
            }
        }
    )*);
}

impl_primitive!(u8 i8 u16 i16 u32 i32 f32 f64);

impl ByteList {
    #[inline]
    pub(crate) fn write_primitive<T: Primitive>(&mut self, value: T, mode: WriteMode) {
        let mut buf = [0u8; 8];
        let out = &mut buf[..T::WIDTH];
        value.encode(self.endianness(), out);
        self.write_bytes(out, mode);
    }

    #[inline]
    pub(crate) fn read_primitive<T: Primitive>(&mut self) -> Result<T> {
        let endianness = self.endianness();
        Ok(T::decode(self.take(T::WIDTH)?, endianness))
    }

    #[inline]
    pub(crate) fn peek_primitive<T: Primitive>(&self, offset: usize) -> Result<T> {
        Ok(T::decode(self.peek_slice(offset, T::WIDTH)?, self.endianness()))
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8, mode: WriteMode) {
        self.write_primitive(value, mode);
    }

    /// Write a single character as its code point.
    ///
    /// Characters above U+00FF do not fit a byte and are rejected.
    pub fn write_char(&mut self, value: char, mode: WriteMode) -> Result<()> {
        let code = u32::from(value);
        let byte = u8::try_from(code)
            .map_err(|_| ByteListError::out_of_range("byte", code as i64, 0, 0xFF))?;
        self.write_u8(byte, mode);
        Ok(())
    }

    /// Write a boolean as 0 or 1.
    pub fn write_bool(&mut self, value: bool, mode: WriteMode) {
        self.write_u8(u8::from(value), mode);
    }

    /// Write a signed byte, rejecting values outside [-128, 127].
    pub fn write_i8(&mut self, value: i32, mode: WriteMode) -> Result<()> {
        let byte = i8::try_from(value).map_err(|_| {
            ByteListError::out_of_range("int8", value as i64, i8::MIN as i64, i8::MAX as i64)
        })?;
        self.write_primitive(byte, mode);
        Ok(())
    }

    /// Write a signed 16-bit integer.
    pub fn write_i16(&mut self, value: i16, mode: WriteMode) {
        self.write_primitive(value, mode);
    }

    /// Write an unsigned 16-bit integer.
    pub fn write_u16(&mut self, value: u16, mode: WriteMode) {
        self.write_primitive(value, mode);
    }

    /// Write a signed 32-bit integer.
    pub fn write_i32(&mut self, value: i32, mode: WriteMode) {
        self.write_primitive(value, mode);
    }

    /// Write an unsigned 32-bit integer.
    pub fn write_u32(&mut self, value: u32, mode: WriteMode) {
        self.write_primitive(value, mode);
    }

    /// Write a single precision float.
    pub fn write_f32(&mut self, value: f32, mode: WriteMode) {
        self.write_primitive(value, mode);
    }

    /// Write a double precision float.
    pub fn write_f64(&mut self, value: f64, mode: WriteMode) {
        self.write_primitive(value, mode);
    }

    /// Write a date with second precision.
    ///
    /// `None` writes six zero bytes, which read back as `None`. The year
    /// is stored as a signed offset from 2000, so only 1872..=2127 fit.
    pub fn write_date(&mut self, value: Option<NaiveDateTime>, mode: WriteMode) -> Result<()> {
        let fields = match value {
            Some(date) => encode_date(&date)?,
            None => [0; DATE_WIDTH],
        };
        self.write_bytes(&fields, mode);
        Ok(())
    }

    /// Write a `u16` length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str, mode: WriteMode) -> Result<()> {
        let encoded = value.as_bytes();
        let len = u16::try_from(encoded.len())
            .map_err(|_| ByteListError::string_too_long(encoded.len()))?;

        let mut field = vec![0u8; 2 + encoded.len()];
        len.encode(self.endianness(), &mut field[..2]);
        field[2..].copy_from_slice(encoded);
        self.write_bytes(&field, mode);
        Ok(())
    }

    /// Write a string into exactly `length` bytes, truncating or padding
    /// with NULs. No length prefix is written.
    pub fn write_fixed_string(&mut self, value: &str, length: usize, mode: WriteMode) {
        let encoded = value.as_bytes();
        let mut field = vec![0u8; length];
        let copied = encoded.len().min(length);
        field[..copied].copy_from_slice(&encoded[..copied]);
        self.write_bytes(&field, mode);
    }

    /// Write a `u8` count-prefixed byte array of at most 255 elements.
    pub fn write_byte_array(&mut self, values: &[u8], mode: WriteMode) -> Result<()> {
        let count = u8::try_from(values.len()).map_err(|_| {
            ByteListError::out_of_range("byte array length", values.len() as i64, 0, 0xFF)
        })?;

        let mut field = Vec::with_capacity(1 + values.len());
        field.push(count);
        field.extend_from_slice(values);
        self.write_bytes(&field, mode);
        Ok(())
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_primitive()
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_primitive()
    }

    /// Read a boolean; only the byte value 1 is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? == 1)
    }

    /// Read a signed 16-bit integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_primitive()
    }

    /// Read an unsigned 16-bit integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_primitive()
    }

    /// Read a signed 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_primitive()
    }

    /// Read an unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_primitive()
    }

    /// Read a single precision float.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_primitive()
    }

    /// Read a double precision float.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_primitive()
    }

    /// Read a date.
    ///
    /// Returns `None` instead of failing when fewer than six bytes remain
    /// (the cursor does not move) or when the six bytes are not a valid
    /// calendar date (the six bytes are consumed).
    pub fn read_date(&mut self) -> Option<NaiveDateTime> {
        let position = self.cursor();
        let Ok(fields) = self.take(DATE_WIDTH) else {
            trace!(position, "date field truncated");
            return None;
        };

        let date = decode_date(fields);
        if date.is_none() {
            trace!(position, "date field malformed");
        }
        date
    }

    /// Read a `u16` length-prefixed UTF-8 string.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.peek_primitive::<u16>(0)? as usize;
        self.check_available(2, len)?;
        let field = self.take(2 + len)?;
        Ok(String::from_utf8_lossy(&field[2..]).into_owned())
    }

    /// Read a fixed-width string of `length` bytes, stripping trailing NULs.
    pub fn read_fixed_string(&mut self, length: usize) -> Result<String> {
        let field = self.take(length)?;
        let end = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(String::from_utf8_lossy(&field[..end]).into_owned())
    }

    /// Read a `u8` count-prefixed byte array.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        let count = self.peek_u8(0)? as usize;
        self.check_available(1, count)?;
        Ok(self.take(1 + count)?[1..].to_vec())
    }

    /// Look at the byte `offset` bytes past the cursor.
    pub fn peek_u8(&self, offset: usize) -> Result<u8> {
        self.peek_primitive(offset)
    }

    /// Look at the `u16` starting `offset` bytes past the cursor.
    pub fn peek_u16(&self, offset: usize) -> Result<u16> {
        self.peek_primitive(offset)
    }

    /// Look at the `u32` starting `offset` bytes past the cursor.
    pub fn peek_u32(&self, offset: usize) -> Result<u32> {
        self.peek_primitive(offset)
    }
}

fn encode_date(date: &NaiveDateTime) -> Result<[u8; DATE_WIDTH]> {
    let year = date.year();
    let offset = i8::try_from(year - DATE_EPOCH_YEAR).map_err(|_| {
        ByteListError::out_of_range(
            "date year",
            year as i64,
            (DATE_EPOCH_YEAR + i8::MIN as i32) as i64,
            (DATE_EPOCH_YEAR + i8::MAX as i32) as i64,
        )
    })?;

    Ok([
        offset as u8,
        date.month0() as u8,
        date.day() as u8,
        date.hour() as u8,
        date.minute() as u8,
        date.second() as u8,
    ])
}

fn decode_date(fields: &[u8]) -> Option<NaiveDateTime> {
    let year = DATE_EPOCH_YEAR + fields[0] as i8 as i32;
    NaiveDate::from_ymd_opt(year, fields[1] as u32 + 1, fields[2] as u32)?.and_hms_opt(
        fields[3] as u32,
        fields[4] as u32,
        fields[5] as u32,
    )
}

//! Tag-driven read/write over the primitive codecs.
//!
//! A [`Tag`] names one of the primitive encodings; [`ByteList::write_tagged`]
//! and [`ByteList::read_tagged`] route a [`Value`] through the matching codec
//! with the same write-mode and byte-order rules as the typed methods. This
//! lets a schema (a slice of tags) drive serialization without one call
//! site per field.
//!
//! # Coercion
//!
//! Writes are permissive, like the typed writers:
//!
//! - An absent value (`None`) writes the tag's zero value: 0, `false`, an
//!   empty string or array, or an absent date.
//! - Numeric and boolean values convert between numeric tags with wrapping
//!   casts; negative values written to unsigned tags become 0.
//! - `Int8` is range checked.
//! - A one-character string is accepted for `Byte`.
//!
//! Anything else (a string for an `Int32` tag, say) is a
//! [`ByteListError::TypeMismatch`].
//!
//! # Example
//!
//! ```
//! use oxibyte_core::{ByteList, Tag, Value, WriteMode};
//!
//! let schema = [Tag::UInt16, Tag::String, Tag::Bool];
//! let mut bytes = ByteList::new();
//! bytes
//!     .write_record(
//!         &[
//!             (Tag::UInt16, Some(Value::UInt16(7))),
//!             (Tag::String, Some(Value::String("id".into()))),
//!             (Tag::Bool, None),
//!         ],
//!         WriteMode::Overwrite,
//!     )
//!     .unwrap();
//!
//! bytes.set_cursor(0);
//! let values = bytes.read_record(&schema).unwrap();
//! assert_eq!(values[0], Value::UInt16(7));
//! assert_eq!(values[2], Value::Bool(false));
//! ```

use crate::bytelist::ByteList;
use crate::codec::DATE_WIDTH;
use crate::config::WriteMode;
use crate::error::{ByteListError, Result};
use chrono::NaiveDateTime;
use std::fmt;

/// Primitive encodings known to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// Unsigned byte.
    Byte,
    /// Boolean byte.
    Bool,
    /// Signed byte.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Single precision float.
    Float32,
    /// Double precision float.
    Float64,
    /// Six-byte date.
    Date,
    /// Length-prefixed string.
    String,
    /// NUL-padded string of the given byte length.
    FixedString(usize),
    /// Count-prefixed byte array.
    ByteArray,
}

impl Tag {
    /// Get the tag name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Byte => "byte",
            Tag::Bool => "bool",
            Tag::Int8 => "int8",
            Tag::Int16 => "int16",
            Tag::UInt16 => "uint16",
            Tag::Int32 => "int32",
            Tag::UInt32 => "uint32",
            Tag::Float32 => "float32",
            Tag::Float64 => "float64",
            Tag::Date => "date",
            Tag::String => "string",
            Tag::FixedString(_) => "fixed string",
            Tag::ByteArray => "byte array",
        }
    }

    /// Get the encoded width, or `None` for length-prefixed encodings.
    pub fn width(&self) -> Option<usize> {
        match self {
            Tag::Byte | Tag::Bool | Tag::Int8 => Some(1),
            Tag::Int16 | Tag::UInt16 => Some(2),
            Tag::Int32 | Tag::UInt32 | Tag::Float32 => Some(4),
            Tag::Float64 => Some(8),
            Tag::Date => Some(DATE_WIDTH),
            Tag::FixedString(length) => Some(*length),
            Tag::String | Tag::ByteArray => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::FixedString(length) => write!(f, "fixed string({})", length),
            other => f.write_str(other.name()),
        }
    }
}

/// A decoded primitive, or a value to encode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Unsigned byte.
    Byte(u8),
    /// Boolean.
    Bool(bool),
    /// Signed byte.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Single precision float.
    Float32(f32),
    /// Double precision float.
    Float64(f64),
    /// Date with second precision; `None` when absent or malformed.
    Date(Option<NaiveDateTime>),
    /// UTF-8 text, for both string tags.
    String(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Value {
    /// Get the zero value a tag writes when the value is absent.
    pub fn default_for(tag: Tag) -> Self {
        match tag {
            Tag::Byte => Value::Byte(0),
            Tag::Bool => Value::Bool(false),
            Tag::Int8 => Value::Int8(0),
            Tag::Int16 => Value::Int16(0),
            Tag::UInt16 => Value::UInt16(0),
            Tag::Int32 => Value::Int32(0),
            Tag::UInt32 => Value::UInt32(0),
            Tag::Float32 => Value::Float32(0.0),
            Tag::Float64 => Value::Float64(0.0),
            Tag::Date => Value::Date(None),
            Tag::String | Tag::FixedString(_) => Value::String(String::new()),
            Tag::ByteArray => Value::Bytes(Vec::new()),
        }
    }

    /// Get the kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Byte(_) => "byte",
            Value::Bool(_) => "bool",
            Value::Int8(_) => "int8",
            Value::Int16(_) => "int16",
            Value::UInt16(_) => "uint16",
            Value::Int32(_) => "int32",
            Value::UInt32(_) => "uint32",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::Date(_) => "date",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
        }
    }

    /// Integer view of a numeric or boolean value; floats truncate.
    fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Bool(v) => Some(v as i64),
            Value::Int8(v) => Some(v as i64),
            Value::Int16(v) => Some(v as i64),
            Value::UInt16(v) => Some(v as i64),
            Value::Int32(v) => Some(v as i64),
            Value::UInt32(v) => Some(v as i64),
            Value::Float32(v) => Some(v as i64),
            Value::Float64(v) => Some(v as i64),
            _ => None,
        }
    }

    /// Float view of a numeric or boolean value.
    fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float32(v) => Some(v as f64),
            Value::Float64(v) => Some(v),
            _ => self.as_i64().map(|v| v as f64),
        }
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Byte(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int16(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::UInt16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt32(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Date(Some(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl ByteList {
    /// Write `value` with the encoding named by `tag`.
    ///
    /// See the [module docs](crate::dispatch) for the coercion rules.
    pub fn write_tagged(&mut self, tag: Tag, value: Option<&Value>, mode: WriteMode) -> Result<()> {
        let default;
        let value = match value {
            Some(value) => value,
            None => {
                default = Value::default_for(tag);
                &default
            }
        };
        let mismatch = || ByteListError::type_mismatch(tag.name(), value.kind());
        let int = || value.as_i64().ok_or_else(mismatch);
        let unsigned = || int().map(|v| v.max(0));

        match tag {
            Tag::Byte => match value {
                Value::String(text) => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => self.write_char(c, mode)?,
                        _ => return Err(mismatch()),
                    }
                }
                _ => self.write_u8(unsigned()? as u8, mode),
            },
            Tag::Bool => self.write_bool(value.as_f64().ok_or_else(mismatch)? != 0.0, mode),
            Tag::Int8 => {
                let v = int()?;
                let v = i32::try_from(v)
                    .map_err(|_| ByteListError::out_of_range("int8", v, -128, 127))?;
                self.write_i8(v, mode)?;
            }
            Tag::Int16 => self.write_i16(int()? as i16, mode),
            Tag::UInt16 => self.write_u16(unsigned()? as u16, mode),
            Tag::Int32 => self.write_i32(int()? as i32, mode),
            Tag::UInt32 => self.write_u32(unsigned()? as u32, mode),
            Tag::Float32 => self.write_f32(value.as_f64().ok_or_else(mismatch)? as f32, mode),
            Tag::Float64 => self.write_f64(value.as_f64().ok_or_else(mismatch)?, mode),
            Tag::Date => match value {
                Value::Date(date) => self.write_date(*date, mode)?,
                _ => return Err(mismatch()),
            },
            Tag::String => match value {
                Value::String(text) => self.write_string(text, mode)?,
                _ => return Err(mismatch()),
            },
            Tag::FixedString(length) => match value {
                Value::String(text) => self.write_fixed_string(text, length, mode),
                _ => return Err(mismatch()),
            },
            Tag::ByteArray => match value {
                Value::Bytes(bytes) => self.write_byte_array(bytes, mode)?,
                _ => return Err(mismatch()),
            },
        }
        Ok(())
    }

    /// Read a value with the encoding named by `tag`.
    ///
    /// A short or malformed date yields `Value::Date(None)` instead of an
    /// error, as with [`ByteList::read_date`].
    pub fn read_tagged(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::Byte => Value::Byte(self.read_u8()?),
            Tag::Bool => Value::Bool(self.read_bool()?),
            Tag::Int8 => Value::Int8(self.read_i8()?),
            Tag::Int16 => Value::Int16(self.read_i16()?),
            Tag::UInt16 => Value::UInt16(self.read_u16()?),
            Tag::Int32 => Value::Int32(self.read_i32()?),
            Tag::UInt32 => Value::UInt32(self.read_u32()?),
            Tag::Float32 => Value::Float32(self.read_f32()?),
            Tag::Float64 => Value::Float64(self.read_f64()?),
            Tag::Date => Value::Date(self.read_date()),
            Tag::String => Value::String(self.read_string()?),
            Tag::FixedString(length) => Value::String(self.read_fixed_string(length)?),
            Tag::ByteArray => Value::Bytes(self.read_byte_array()?),
        })
    }

    /// Write a sequence of tagged fields.
    ///
    /// With [`WriteMode::Insert`] the whole record is spliced in at the
    /// cursor, fields in order. On error the fields before the failing one
    /// stay written.
    pub fn write_record(&mut self, fields: &[(Tag, Option<Value>)], mode: WriteMode) -> Result<()> {
        for (tag, value) in fields {
            self.write_tagged(*tag, value.as_ref(), mode)?;
        }
        Ok(())
    }

    /// Read one value per tag in `schema`.
    ///
    /// If any field fails the cursor is restored to where the record began.
    pub fn read_record(&mut self, schema: &[Tag]) -> Result<Vec<Value>> {
        let start = self.cursor();
        self.check_available(0, fixed_prefix_width(schema))?;
        let mut values = Vec::with_capacity(schema.len());
        for tag in schema {
            match self.read_tagged(*tag) {
                Ok(value) => values.push(value),
                Err(err) => {
                    self.set_cursor(start);
                    return Err(err);
                }
            }
        }
        Ok(values)
    }
}

/// Total width of the leading fields whose size is known before reading.
///
/// Stops at the first length-prefixed field and at dates, which read short
/// as `None` instead of failing.
fn fixed_prefix_width(schema: &[Tag]) -> usize {
    schema
        .iter()
        .take_while(|tag| **tag != Tag::Date)
        .map_while(Tag::width)
        .fold(0, usize::saturating_add)
}

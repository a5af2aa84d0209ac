//! # Value-Type Registry
//!
//! This module defines `FieldType`, the closed enumeration of column kinds a
//! tuple can hold. Each kind knows its exact encoded width and how to decode
//! one value from a byte buffer.
//!
//! ## Encoded Layouts
//!
//! | Kind | Layout | Size |
//! |------|--------|------|
//! | `Int` | 4-byte big-endian signed integer | 4 |
//! | `FixedString` | 4-byte length prefix L, L content bytes, `128 - L` zero bytes | 132 |
//!
//! The width is a property of the kind, never of a particular value. That is
//! what lets the page layer address the i-th tuple at `i * schema.byte_size()`
//! without scanning tuple contents.
//!
//! ## Error Handling
//!
//! `decode` returns `Error::Parse` with a descriptive message:
//! - Truncated buffer: fewer than `byte_len()` bytes available
//! - Length prefix larger than `STRING_CAPACITY`
//! - String payload that is not valid UTF-8

use crate::error::{Error, Result};
use crate::types::Field;
use std::fmt;

/// Fixed text payload reserved per string field, independent of how many
/// bytes a particular value actually uses.
pub const STRING_CAPACITY: usize = 128;

/// Closed set of supported column kinds.
///
/// Kinds are process-wide constants; adding one is a format change, so the
/// enum stays exhaustively matchable everywhere a kind is consumed.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int = 0,
    FixedString = 1,
}

impl FieldType {
    /// Returns the exact number of bytes an encoded field of this kind
    /// occupies.
    pub fn byte_len(&self) -> usize {
        match self {
            FieldType::Int => 4,
            FieldType::FixedString => 4 + STRING_CAPACITY,
        }
    }

    /// Decodes one field of this kind from the front of `buf`, consuming
    /// exactly [`byte_len()`](Self::byte_len) bytes.
    ///
    /// For `FixedString` the declared length L is read first, then L content
    /// bytes; the remaining `STRING_CAPACITY - L` padding bytes belong to the
    /// field's byte range but are not part of the value. The encoder is
    /// required to have zero-filled them.
    pub fn decode(&self, buf: &[u8]) -> Result<Field> {
        if buf.len() < self.byte_len() {
            return Err(Error::Parse(format!(
                "truncated {} field: need {} bytes, have {}",
                self,
                self.byte_len(),
                buf.len()
            )));
        }

        match self {
            FieldType::Int => {
                let raw: [u8; 4] = buf[..4].try_into().unwrap(); // INVARIANT: length checked above
                Ok(Field::Int(i32::from_be_bytes(raw)))
            }
            FieldType::FixedString => {
                let raw: [u8; 4] = buf[..4].try_into().unwrap(); // INVARIANT: length checked above
                let declared = u32::from_be_bytes(raw) as usize;
                if declared > STRING_CAPACITY {
                    return Err(Error::Parse(format!(
                        "string length prefix {} exceeds capacity {}",
                        declared, STRING_CAPACITY
                    )));
                }
                let payload = std::str::from_utf8(&buf[4..4 + declared])
                    .map_err(|e| Error::Parse(format!("string payload is not valid utf-8: {e}")))?;
                Ok(Field::Str(payload.to_owned()))
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => write!(f, "int"),
            FieldType::FixedString => write!(f, "string({})", STRING_CAPACITY),
        }
    }
}
